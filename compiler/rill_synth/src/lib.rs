//! Synthesized member generation for Rill record declarations.
//!
//! A record declaration lists its positional members once:
//!
//! ```text
//! record Point(x: int, y: int)
//! ```
//!
//! and the compiler derives the rest. This crate owns that derivation: given
//! the declaration's [`RecordShape`], [`expand_record_members`] produces the
//! full ordered family of synthesized members for the containing type:
//!
//! - the primary initializer (`init`)
//! - one property + backing field + getter triple per positional member
//! - structural equality (`eq`), structural hash (`hash`), textual
//!   representation (`to_string`), and positional deconstruction
//!   (`deconstruct`)
//!
//! Member *declarations* are produced eagerly; member *bodies* are produced
//! lazily, the first time the backend demands them, and cached on the member
//! (see [`SynthesizedMember::body`]). Bodies are expressed in a small closed
//! [`Body`] IR that the lowering stage consumes; this crate does not emit
//! instructions or metadata.
//!
//! Per-type default equality and hashing are capabilities of the runtime,
//! not of this crate: bodies reference them through
//! [`Expr::EqualsDefault`]/[`Expr::HashDefault`] nodes keyed by [`TypeId`],
//! and the evaluation layer supplies the comparer table.
//!
//! [`TypeId`]: rill_ir::TypeId

mod body;
mod expand;
mod member;
mod pair;
mod shape;
mod synthesize;

pub use body::{Body, Expr, Stmt};
pub use expand::expand_record_members;
pub use member::{MemberKind, Param, ParamMode, Signature, SynthesizedMember, Visibility};
pub use pair::{backing_field_name, getter_name, AccessorPair};
pub use shape::{BaseType, ContainingType, RecordShape, ShapeEntry};
pub use synthesize::{fnv1a, shape_hash_seed, HASH_FACTOR};
