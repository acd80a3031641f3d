//! Shape model for record declarations.
//!
//! The parser extracts the positional parameter list of a record declaration
//! into a [`RecordShape`]: pure data, ordered by declaration, with no
//! behavior of its own. The shape is owned by the declaration expander while
//! members are emitted and shared read-only with every member afterwards.

use rill_ir::{Name, Span, TypeId};

/// One positional member of a record shape.
///
/// `index` is dense from 0 and equals the member's position in the source
/// parameter list. Parameter order, property order, and backing field layout
/// all follow this index.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ShapeEntry {
    pub index: u32,
    pub name: Name,
    pub ty: TypeId,
    pub span: Span,
}

/// The ordered positional member list of one record declaration.
///
/// Immutable once constructed. `variadic_span` records where the raw
/// parameter list carried a variadic marker, if it did; the entries
/// themselves are always marker-free (the parser does not produce an entry
/// for the marker).
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct RecordShape {
    entries: Vec<ShapeEntry>,
    variadic_span: Option<Span>,
}

impl RecordShape {
    /// Build a shape from `(name, type, span)` parameters in declaration
    /// order. Indices are assigned densely from 0.
    pub fn new(params: Vec<(Name, TypeId, Span)>, variadic_span: Option<Span>) -> Self {
        let entries = params
            .into_iter()
            .enumerate()
            .map(|(i, (name, ty, span))| ShapeEntry {
                index: u32::try_from(i).unwrap_or(u32::MAX),
                name,
                ty,
                span,
            })
            .collect();
        RecordShape {
            entries,
            variadic_span,
        }
    }

    /// Number of positional members.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the shape has no positional members.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entries in index order.
    pub fn entries(&self) -> &[ShapeEntry] {
        &self.entries
    }

    /// Entry at `index`, if in range.
    pub fn get(&self, index: u32) -> Option<&ShapeEntry> {
        self.entries.get(index as usize)
    }

    /// Where the parameter list carried a variadic marker, if it did.
    pub fn variadic_span(&self) -> Option<Span> {
        self.variadic_span
    }
}

/// The immediate base of a record type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct BaseType {
    pub ty: TypeId,
    /// Whether a zero-argument initializer is accessible on the base.
    ///
    /// When false, the initializer synthesizer produces no body at all;
    /// the missing-initializer condition is diagnosed by the binder before
    /// expansion runs, never here.
    pub has_parameterless_init: bool,
}

/// Handle to the type whose members are being synthesized.
///
/// Member storage, lookup, and visibility live in the containing type's
/// member table, outside this crate; synthesis only needs the identity, the
/// type id, and the immediate base.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ContainingType {
    pub name: Name,
    pub ty: TypeId,
    pub base: BaseType,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rill_ir::StringInterner;

    use super::*;

    #[test]
    fn test_indices_are_dense_declaration_order() {
        let interner = StringInterner::new();
        let shape = RecordShape::new(
            vec![
                (interner.intern("x"), TypeId::INT, Span::new(0, 1)),
                (interner.intern("y"), TypeId::INT, Span::new(3, 4)),
                (interner.intern("label"), TypeId::STR, Span::new(6, 11)),
            ],
            None,
        );
        assert_eq!(shape.len(), 3);
        let indices: Vec<u32> = shape.entries().iter().map(|e| e.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(shape.get(2).map(|e| e.ty), Some(TypeId::STR));
        assert_eq!(shape.get(3), None);
    }

    #[test]
    fn test_empty_shape() {
        let shape = RecordShape::new(Vec::new(), None);
        assert!(shape.is_empty());
        assert_eq!(shape.variadic_span(), None);
    }

    #[test]
    fn test_variadic_span_is_carried() {
        let shape = RecordShape::new(Vec::new(), Some(Span::new(10, 13)));
        assert_eq!(shape.variadic_span(), Some(Span::new(10, 13)));
    }
}
