//! Body synthesis for each member kind.
//!
//! One submodule per generated operation. Each synthesizer is a pure
//! function of the shape (and the interner, where the bytes of member names
//! matter); the body cell on [`SynthesizedMember`] invokes it at most once.

mod deconstruct;
mod display;
mod equality;
mod getter;
mod hash;
mod initializer;

use rill_ir::StringInterner;

use crate::body::Body;
use crate::member::{MemberKind, SynthesizedMember};

pub use hash::{fnv1a, shape_hash_seed, HASH_FACTOR};

/// Produce the body for `member`, or `None` where the kind has none.
///
/// The match is exhaustive over [`MemberKind`], so adding a kind without a
/// body rule fails to compile.
pub(crate) fn member_body(member: &SynthesizedMember, interner: &StringInterner) -> Option<Body> {
    match member.kind() {
        MemberKind::Initializer => initializer::synthesize(member.containing(), member.shape()),
        // Declarations only; the getter carries the pair's executable body.
        MemberKind::Property { .. } | MemberKind::BackingField { .. } => None,
        MemberKind::Getter { index } => Some(getter::synthesize(index)),
        MemberKind::Equality => Some(equality::synthesize(member.containing(), member.shape())),
        MemberKind::Hash => Some(hash::synthesize(member.shape(), interner)),
        MemberKind::Display => Some(display::synthesize(
            member.containing(),
            member.shape(),
            interner,
        )),
        MemberKind::Deconstruct => Some(deconstruct::synthesize(member.shape())),
    }
}
