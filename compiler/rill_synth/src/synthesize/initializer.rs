//! Primary initializer body synthesis.

use smallvec::SmallVec;

use crate::body::{Body, Expr, Stmt};
use crate::shape::{ContainingType, RecordShape};

/// Body of the primary initializer:
///
/// ```text
/// base.init()
/// this.<backing_0> = param_0
/// ...
/// this.<backing_n-1> = param_n-1
/// return
/// ```
///
/// Assignments run in strict index order; for member types with
/// side-effecting conversions the order is observable and must match the
/// declaration.
///
/// Returns `None` when the base has no accessible parameterless
/// initializer. That condition was already diagnosed by the binder, so the
/// member is simply left without a body and the backend must tolerate it.
pub(super) fn synthesize(containing: &ContainingType, shape: &RecordShape) -> Option<Body> {
    if !containing.base.has_parameterless_init {
        return None;
    }

    let mut stmts = SmallVec::new();
    stmts.push(Stmt::CallBaseInit);
    for entry in shape.entries() {
        stmts.push(Stmt::StoreField {
            index: entry.index,
            value: Expr::Param(entry.index),
        });
    }
    stmts.push(Stmt::Return(None));
    Some(Body { uses_local: false, stmts })
}
