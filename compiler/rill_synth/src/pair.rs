//! Accessor pair factory.
//!
//! For each shape entry, synthesizes the property / backing field / getter
//! triple bound to that entry's index.

use std::sync::Arc;

use rill_ir::StringInterner;

use crate::member::{MemberKind, Signature, SynthesizedMember};
use crate::shape::{ContainingType, RecordShape, ShapeEntry};

/// Derived name of the backing field for property `property`.
///
/// The angle brackets and dollar sign cannot appear in a Rill identifier,
/// so the derived name can never collide with a user-declared member, and
/// the property name can be read back out of it.
pub fn backing_field_name(property: &str) -> String {
    format!("<{property}>$field")
}

/// Derived name of the getter accessor for property `property`.
pub fn getter_name(property: &str) -> String {
    format!("get_{property}")
}

/// The property / backing field / getter triple for one positional member.
///
/// All three members carry the same index as the shape entry they were
/// synthesized from.
pub struct AccessorPair {
    pub property: Arc<SynthesizedMember>,
    pub backing_field: Arc<SynthesizedMember>,
    pub getter: Arc<SynthesizedMember>,
}

impl AccessorPair {
    /// Synthesize the accessor pair for `entry`.
    ///
    /// Deterministic: the same entry always yields the same derived names
    /// and types.
    pub fn synthesize(
        containing: &Arc<ContainingType>,
        shape: &Arc<RecordShape>,
        entry: &ShapeEntry,
        interner: &StringInterner,
    ) -> AccessorPair {
        let property_text = interner.lookup(entry.name);
        let backing_ident = interner.intern(&backing_field_name(property_text));
        let getter_ident = interner.intern(&getter_name(property_text));

        let property = SynthesizedMember::new(
            MemberKind::Property { index: entry.index },
            entry.name,
            Signature::returning(entry.ty),
            Arc::clone(containing),
            Arc::clone(shape),
        );
        let backing_field = SynthesizedMember::new(
            MemberKind::BackingField { index: entry.index },
            backing_ident,
            Signature::returning(entry.ty),
            Arc::clone(containing),
            Arc::clone(shape),
        );
        let getter = SynthesizedMember::new(
            MemberKind::Getter { index: entry.index },
            getter_ident,
            Signature::returning(entry.ty),
            Arc::clone(containing),
            Arc::clone(shape),
        );

        AccessorPair {
            property: Arc::new(property),
            backing_field: Arc::new(backing_field),
            getter: Arc::new(getter),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rill_ir::{Span, TypeId};

    use super::*;
    use crate::shape::BaseType;

    fn fixture(interner: &StringInterner) -> (Arc<ContainingType>, Arc<RecordShape>) {
        let containing = Arc::new(ContainingType {
            name: interner.intern("Point"),
            ty: TypeId::from_raw(TypeId::FIRST_DYNAMIC),
            base: BaseType {
                ty: TypeId::ANY,
                has_parameterless_init: true,
            },
        });
        let shape = Arc::new(RecordShape::new(
            vec![
                (interner.intern("x"), TypeId::INT, Span::DUMMY),
                (interner.intern("label"), TypeId::STR, Span::DUMMY),
            ],
            None,
        ));
        (containing, shape)
    }

    #[test]
    fn test_derived_names() {
        assert_eq!(backing_field_name("x"), "<x>$field");
        assert_eq!(getter_name("x"), "get_x");
    }

    #[test]
    fn test_pair_is_index_locked() {
        let interner = StringInterner::new();
        let (containing, shape) = fixture(&interner);
        let entry = &shape.entries()[1];
        let pair = AccessorPair::synthesize(&containing, &shape, entry, &interner);

        assert_eq!(pair.property.kind().field_index(), Some(1));
        assert_eq!(pair.backing_field.kind().field_index(), Some(1));
        assert_eq!(pair.getter.kind().field_index(), Some(1));

        assert_eq!(interner.lookup(pair.property.name()), "label");
        assert_eq!(interner.lookup(pair.backing_field.name()), "<label>$field");
        assert_eq!(interner.lookup(pair.getter.name()), "get_label");

        assert_eq!(pair.property.signature().ret, TypeId::STR);
        assert_eq!(pair.backing_field.signature().ret, TypeId::STR);
        assert_eq!(pair.getter.signature().ret, TypeId::STR);
    }

    #[test]
    fn test_pair_is_deterministic() {
        let interner = StringInterner::new();
        let (containing, shape) = fixture(&interner);
        let entry = &shape.entries()[0];
        let first = AccessorPair::synthesize(&containing, &shape, entry, &interner);
        let second = AccessorPair::synthesize(&containing, &shape, entry, &interner);
        assert_eq!(first.backing_field.name(), second.backing_field.name());
        assert_eq!(first.getter.name(), second.getter.name());
        assert_eq!(first.property.signature(), second.property.signature());
    }
}
