//! Structural equality body synthesis.

use crate::body::{Body, Expr, Stmt};
use crate::shape::{ContainingType, RecordShape};

/// Body of the structural equality test:
///
/// ```text
/// local = other as? <Containing>
/// return local is present
///     && equals_default[T_0](this.<backing_0>, local.<backing_0>)
///     ...
///     && equals_default[T_n-1](this.<backing_n-1>, local.<backing_n-1>)
/// ```
///
/// The AND chain is left-to-right and short-circuiting: a failed downcast
/// compares zero fields, and the first unequal field stops the rest. With
/// no positional members the result reduces to the presence test alone.
pub(super) fn synthesize(containing: &ContainingType, shape: &RecordShape) -> Body {
    let mut result = Expr::IsPresent(Box::new(Expr::Local));
    for entry in shape.entries() {
        result = Expr::and(
            result,
            Expr::EqualsDefault {
                ty: entry.ty,
                lhs: Box::new(Expr::this_field(entry.index)),
                rhs: Box::new(Expr::local_field(entry.index)),
            },
        );
    }

    Body::with_local([
        Stmt::StoreLocal(Expr::DowncastOrAbsent {
            value: Box::new(Expr::Param(0)),
            ty: containing.ty,
        }),
        Stmt::Return(Some(result)),
    ])
}
