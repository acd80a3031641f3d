//! Positional deconstruction body synthesis.

use smallvec::SmallVec;

use crate::body::{Body, Expr, Stmt};
use crate::shape::RecordShape;

/// Body of the positional deconstruction:
///
/// ```text
/// out_0 = this.<backing_0>
/// ...
/// out_n-1 = this.<backing_n-1>
/// return
/// ```
///
/// The exact structural inverse of the initializer's assignment loop, in
/// the same index order. With no positional members the body returns
/// immediately.
pub(super) fn synthesize(shape: &RecordShape) -> Body {
    let mut stmts = SmallVec::new();
    for entry in shape.entries() {
        stmts.push(Stmt::StoreOut {
            index: entry.index,
            value: Expr::this_field(entry.index),
        });
    }
    stmts.push(Stmt::Return(None));
    Body { uses_local: false, stmts }
}
