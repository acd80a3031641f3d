//! Declaration expansion for record types.

use std::sync::Arc;

use rill_diagnostic::{Diagnostic, DiagnosticQueue, ErrorCode};
use rill_ir::{StringInterner, TypeId};

use crate::member::{MemberKind, Param, Signature, SynthesizedMember};
use crate::pair::AccessorPair;
use crate::shape::{ContainingType, RecordShape};

/// Expand a record declaration into its synthesized member list.
///
/// The emission order is an observable contract. Callers enumerating the
/// containing type's members see:
///
/// ```text
/// init,
/// (property_0, backing_0, getter_0), ..., (property_n-1, backing_n-1, getter_n-1),
/// eq, hash, to_string, deconstruct
/// ```
///
/// for a total of `1 + 3n + 4` members.
///
/// A variadic marker in the positional parameter list is reported once as
/// [`ErrorCode::E2301`] and then ignored: synthesis still runs over the
/// marker-free entries, so the member list stays complete.
///
/// Expansion runs at most once per type; arbitration of concurrent first
/// requests is the member-table builder's job. The returned members are
/// immutable and freely shareable.
#[tracing::instrument(level = "debug", skip_all, fields(count = shape.len()))]
pub fn expand_record_members(
    containing: &Arc<ContainingType>,
    shape: &Arc<RecordShape>,
    interner: &StringInterner,
    diagnostics: &mut DiagnosticQueue,
) -> Vec<Arc<SynthesizedMember>> {
    if let Some(span) = shape.variadic_span() {
        tracing::debug!("variadic marker in record positional parameter list");
        diagnostics.report(Diagnostic::error(
            ErrorCode::E2301,
            "variadic parameter is not valid in a record positional parameter list",
            span,
        ));
    }

    let mut members = Vec::with_capacity(1 + 3 * shape.len() + 4);

    let init_params = shape
        .entries()
        .iter()
        .map(|entry| Param::value(entry.name, entry.ty))
        .collect();
    members.push(Arc::new(SynthesizedMember::new(
        MemberKind::Initializer,
        interner.intern("init"),
        Signature::new(init_params, TypeId::UNIT),
        Arc::clone(containing),
        Arc::clone(shape),
    )));

    for entry in shape.entries() {
        let pair = AccessorPair::synthesize(containing, shape, entry, interner);
        members.push(pair.property);
        members.push(pair.backing_field);
        members.push(pair.getter);
    }

    members.push(Arc::new(SynthesizedMember::new(
        MemberKind::Equality,
        interner.intern("eq"),
        Signature::new(
            vec![Param::value(interner.intern("other"), TypeId::ANY)],
            TypeId::BOOL,
        ),
        Arc::clone(containing),
        Arc::clone(shape),
    )));

    members.push(Arc::new(SynthesizedMember::new(
        MemberKind::Hash,
        interner.intern("hash"),
        Signature::returning(TypeId::INT),
        Arc::clone(containing),
        Arc::clone(shape),
    )));

    members.push(Arc::new(SynthesizedMember::new(
        MemberKind::Display,
        interner.intern("to_string"),
        Signature::returning(TypeId::STR),
        Arc::clone(containing),
        Arc::clone(shape),
    )));

    let deconstruct_params = shape
        .entries()
        .iter()
        .map(|entry| Param::out(entry.name, entry.ty))
        .collect();
    members.push(Arc::new(SynthesizedMember::new(
        MemberKind::Deconstruct,
        interner.intern("deconstruct"),
        Signature::new(deconstruct_params, TypeId::UNIT),
        Arc::clone(containing),
        Arc::clone(shape),
    )));

    members
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rill_ir::Span;

    use super::*;
    use crate::shape::BaseType;

    fn containing(interner: &StringInterner) -> Arc<ContainingType> {
        Arc::new(ContainingType {
            name: interner.intern("Point"),
            ty: TypeId::from_raw(TypeId::FIRST_DYNAMIC),
            base: BaseType {
                ty: TypeId::ANY,
                has_parameterless_init: true,
            },
        })
    }

    fn int_shape(interner: &StringInterner, names: &[&str]) -> Arc<RecordShape> {
        Arc::new(RecordShape::new(
            names
                .iter()
                .map(|n| (interner.intern(n), TypeId::INT, Span::DUMMY))
                .collect(),
            None,
        ))
    }

    #[test]
    fn test_member_count_for_every_arity() {
        let interner = StringInterner::new();
        let names = ["a", "b", "c", "d"];
        for arity in 0..=4 {
            let shape = int_shape(&interner, &names[..arity]);
            let mut diags = DiagnosticQueue::new();
            let members =
                expand_record_members(&containing(&interner), &shape, &interner, &mut diags);
            assert_eq!(members.len(), 1 + 3 * arity + 4);
            assert!(diags.is_empty());
        }
    }

    #[test]
    fn test_emission_order() {
        let interner = StringInterner::new();
        let shape = int_shape(&interner, &["x", "y"]);
        let mut diags = DiagnosticQueue::new();
        let members = expand_record_members(&containing(&interner), &shape, &interner, &mut diags);

        let kinds: Vec<MemberKind> = members.iter().map(|m| m.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                MemberKind::Initializer,
                MemberKind::Property { index: 0 },
                MemberKind::BackingField { index: 0 },
                MemberKind::Getter { index: 0 },
                MemberKind::Property { index: 1 },
                MemberKind::BackingField { index: 1 },
                MemberKind::Getter { index: 1 },
                MemberKind::Equality,
                MemberKind::Hash,
                MemberKind::Display,
                MemberKind::Deconstruct,
            ]
        );
    }

    #[test]
    fn test_member_names() {
        let interner = StringInterner::new();
        let shape = int_shape(&interner, &["x"]);
        let mut diags = DiagnosticQueue::new();
        let members = expand_record_members(&containing(&interner), &shape, &interner, &mut diags);

        let names: Vec<&str> = members.iter().map(|m| interner.lookup(m.name())).collect();
        assert_eq!(
            names,
            vec![
                "init",
                "x",
                "<x>$field",
                "get_x",
                "eq",
                "hash",
                "to_string",
                "deconstruct",
            ]
        );
    }

    #[test]
    fn test_only_backing_fields_are_private() {
        let interner = StringInterner::new();
        let shape = int_shape(&interner, &["x"]);
        let mut diags = DiagnosticQueue::new();
        let members = expand_record_members(&containing(&interner), &shape, &interner, &mut diags);

        use crate::member::Visibility;
        for member in &members {
            let expected = match member.kind() {
                MemberKind::BackingField { .. } => Visibility::Private,
                _ => Visibility::Public,
            };
            assert_eq!(member.visibility(), expected);
        }
    }

    #[test]
    fn test_signatures() {
        let interner = StringInterner::new();
        let shape = int_shape(&interner, &["x", "y"]);
        let mut diags = DiagnosticQueue::new();
        let members = expand_record_members(&containing(&interner), &shape, &interner, &mut diags);

        let init = &members[0];
        assert_eq!(init.signature().ret, TypeId::UNIT);
        assert_eq!(init.signature().params.len(), 2);
        assert!(init
            .signature()
            .params
            .iter()
            .all(|p| p.mode == crate::member::ParamMode::Value));

        let equality = &members[7];
        assert_eq!(equality.kind(), MemberKind::Equality);
        assert_eq!(equality.signature().ret, TypeId::BOOL);
        assert_eq!(equality.signature().params.len(), 1);
        assert_eq!(equality.signature().params[0].ty, TypeId::ANY);

        let hash = &members[8];
        assert_eq!(hash.signature().ret, TypeId::INT);
        assert!(hash.signature().params.is_empty());

        let display = &members[9];
        assert_eq!(display.signature().ret, TypeId::STR);

        let deconstruct = &members[10];
        assert_eq!(deconstruct.signature().ret, TypeId::UNIT);
        assert_eq!(deconstruct.signature().params.len(), 2);
        assert!(deconstruct
            .signature()
            .params
            .iter()
            .all(|p| p.mode == crate::member::ParamMode::Out));
    }

    #[test]
    fn test_variadic_marker_reported_once_and_synthesis_completes() {
        let interner = StringInterner::new();
        let shape = Arc::new(RecordShape::new(
            vec![(interner.intern("x"), TypeId::INT, Span::new(6, 7))],
            Some(Span::new(14, 17)),
        ));
        let mut diags = DiagnosticQueue::new();
        let members = expand_record_members(&containing(&interner), &shape, &interner, &mut diags);

        assert_eq!(members.len(), 1 + 3 + 4);
        assert_eq!(diags.len(), 1);
        let codes: Vec<ErrorCode> = diags.iter().map(|d| d.code).collect();
        assert_eq!(codes, vec![ErrorCode::E2301]);

        // A second expansion of the same declaration reports into the same
        // queue without duplicating the diagnostic.
        let _ = expand_record_members(&containing(&interner), &shape, &interner, &mut diags);
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn test_body_cell_returns_one_instance() {
        let interner = StringInterner::new();
        let shape = int_shape(&interner, &["x"]);
        let mut diags = DiagnosticQueue::new();
        let members = expand_record_members(&containing(&interner), &shape, &interner, &mut diags);

        let hash = &members[5];
        assert_eq!(hash.kind(), MemberKind::Hash);
        let first = hash.body(&interner);
        let second = hash.body(&interner);
        match (first, second) {
            (Some(a), Some(b)) => assert!(std::ptr::eq(a, b)),
            _ => panic!("hash member must have a body"),
        }
    }

    #[test]
    fn test_concurrent_body_demand_single_winner() {
        let interner = Arc::new(StringInterner::new());
        let shape = int_shape(&interner, &["x", "y"]);
        let mut diags = DiagnosticQueue::new();
        let members = expand_record_members(&containing(&interner), &shape, &interner, &mut diags);

        let equality = Arc::clone(&members[7]);
        let pointers: Vec<usize> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let member = Arc::clone(&equality);
                    let interner = Arc::clone(&interner);
                    scope.spawn(move || {
                        member
                            .body(&interner)
                            .map(|body| std::ptr::from_ref(body) as usize)
                    })
                })
                .collect();
            handles
                .into_iter()
                .filter_map(|h| h.join().ok().flatten())
                .collect()
        });
        assert_eq!(pointers.len(), 4);
        assert!(pointers.windows(2).all(|w| w[0] == w[1]));
    }
}
