//! Structural hash body synthesis.

use rill_ir::StringInterner;

use crate::body::{Body, Expr, Stmt};
use crate::pair::backing_field_name;
use crate::shape::RecordShape;

/// Multiplier for the structural hash chain.
///
/// All hash arithmetic is 32-bit signed with wraparound; overflow is
/// defined behavior.
#[expect(
    clippy::cast_possible_wrap,
    reason = "the multiplier is specified as the bit pattern 0xA5555529"
)]
pub const HASH_FACTOR: i32 = 0xA555_5529_u32 as i32;

/// Standard 32-bit FNV-1a hash of a string's UTF-8 bytes, reinterpreted as
/// a signed 32-bit value.
#[expect(
    clippy::cast_possible_wrap,
    reason = "hash bit pattern reinterpreted as signed"
)]
pub fn fnv1a(text: &str) -> i32 {
    const OFFSET_BASIS: u32 = 0x811C_9DC5;
    const PRIME: u32 = 16_777_619;

    let mut hash = OFFSET_BASIS;
    for byte in text.as_bytes() {
        hash = (hash ^ u32::from(*byte)).wrapping_mul(PRIME);
    }
    hash as i32
}

/// Compile-time hash seed of a shape.
///
/// Folds the FNV-1a hash of each backing field's derived name, in index
/// order, through the `HASH_FACTOR` chain. The seed is a property of the
/// shape alone: every instance of the type shares it, and it is zero for
/// the zero-member shape.
pub fn shape_hash_seed(shape: &RecordShape, interner: &StringInterner) -> i32 {
    let mut seed = 0i32;
    for entry in shape.entries() {
        let backing = backing_field_name(interner.lookup(entry.name));
        seed = seed
            .wrapping_mul(HASH_FACTOR)
            .wrapping_add(fnv1a(&backing));
    }
    seed
}

/// Body of the structural hash function:
///
/// ```text
/// return ((seed * HASH_FACTOR + hash_default[T_0](this.<backing_0>))
///              * HASH_FACTOR + hash_default[T_1](this.<backing_1>))
///              ...
/// ```
///
/// With no positional members the body returns the literal seed, 0.
pub(super) fn synthesize(shape: &RecordShape, interner: &StringInterner) -> Body {
    let mut result = Expr::Int(shape_hash_seed(shape, interner));
    for entry in shape.entries() {
        result = Expr::add_wrap(
            Expr::mul_wrap(result, Expr::Int(HASH_FACTOR)),
            Expr::HashDefault {
                ty: entry.ty,
                value: Box::new(Expr::this_field(entry.index)),
            },
        );
    }
    Body::new([Stmt::Return(Some(result))])
}
