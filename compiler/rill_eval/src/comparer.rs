//! Per-type default equality and hash comparers.
//!
//! The synthesis engine wires `EqualsDefault`/`HashDefault` calls into
//! member bodies but never implements type-specific comparison itself; this
//! registry is the capability table those calls resolve against, keyed by
//! [`TypeId`]. Record types register their own comparers here the same way
//! the primitives do.

use rill_ir::TypeId;
use rill_synth::fnv1a;
use rustc_hash::FxHashMap;

use crate::Value;

/// Default equality and hash for one type.
#[derive(Copy, Clone)]
pub struct Comparer {
    pub equals: fn(&Value, &Value) -> bool,
    pub hash: fn(&Value) -> i32,
}

/// Capability table of per-type default comparers.
#[derive(Default)]
pub struct ComparerRegistry {
    map: FxHashMap<TypeId, Comparer>,
}

impl ComparerRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the primitive comparers installed.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(
            TypeId::INT,
            Comparer {
                equals: scalar_equals,
                hash: int_hash,
            },
        );
        registry.register(
            TypeId::BOOL,
            Comparer {
                equals: scalar_equals,
                hash: bool_hash,
            },
        );
        registry.register(
            TypeId::STR,
            Comparer {
                equals: scalar_equals,
                hash: str_hash,
            },
        );
        registry.register(
            TypeId::CHAR,
            Comparer {
                equals: scalar_equals,
                hash: char_hash,
            },
        );
        registry.register(
            TypeId::UNIT,
            Comparer {
                equals: scalar_equals,
                hash: unit_hash,
            },
        );
        registry
    }

    /// Install or replace the comparer for a type.
    pub fn register(&mut self, ty: TypeId, comparer: Comparer) {
        self.map.insert(ty, comparer);
    }

    /// The comparer for a type, if one is registered.
    pub fn get(&self, ty: TypeId) -> Option<&Comparer> {
        self.map.get(&ty)
    }
}

/// Structural equality for scalar values of the same type.
fn scalar_equals(a: &Value, b: &Value) -> bool {
    a == b
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "hash folds the halves of the 64-bit value into 32 bits"
)]
fn int_hash(value: &Value) -> i32 {
    match value {
        Value::Int(v) => (*v as i32) ^ ((*v >> 32) as i32),
        _ => 0,
    }
}

fn bool_hash(value: &Value) -> i32 {
    match value {
        Value::Bool(true) => 1,
        _ => 0,
    }
}

fn str_hash(value: &Value) -> i32 {
    match value {
        Value::Str(s) => fnv1a(s),
        _ => 0,
    }
}

#[expect(
    clippy::cast_possible_wrap,
    reason = "a scalar value's code point fits in 31 bits"
)]
fn char_hash(value: &Value) -> i32 {
    match value {
        Value::Char(c) => u32::from(*c) as i32,
        _ => 0,
    }
}

fn unit_hash(_value: &Value) -> i32 {
    0
}
