//! Getter body synthesis.

use crate::body::{Body, Expr, Stmt};

/// Body of the getter for positional member `index`:
///
/// ```text
/// return this.<backing>
/// ```
///
/// No side effects, no allocation beyond the returned value.
pub(super) fn synthesize(index: u32) -> Body {
    Body::new([Stmt::Return(Some(Expr::this_field(index)))])
}
