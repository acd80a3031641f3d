//! Body IR for synthesized members.
//!
//! A [`Body`] is the executable form of one synthesized member, built once
//! on demand and handed to the lowering stage. The vocabulary is closed and
//! deliberately small: exactly the nodes the record synthesizers emit, no
//! general expression language.
//!
//! All integer arithmetic in this IR is 32-bit signed with wraparound on
//! overflow; overflow is defined behavior, not an error.

use rill_ir::TypeId;
use smallvec::SmallVec;

/// Expression node in a synthesized body.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Expr {
    /// The receiver instance.
    This,
    /// Positional parameter of the member, by index.
    Param(u32),
    /// The single local slot of the body (equality's downcast result).
    Local,
    /// 32-bit signed integer literal.
    Int(i32),
    /// Load a backing field from a record receiver.
    LoadField { receiver: Box<Expr>, index: u32 },
    /// Safe downcast: the value if its runtime type is `ty`, the absence
    /// value otherwise (including when the value already is the absence
    /// value).
    DowncastOrAbsent { value: Box<Expr>, ty: TypeId },
    /// Whether the operand is not the absence value.
    IsPresent(Box<Expr>),
    /// Short-circuiting logical AND; the right operand is not evaluated
    /// when the left is false.
    And(Box<Expr>, Box<Expr>),
    /// 32-bit signed multiplication with wraparound.
    MulWrap(Box<Expr>, Box<Expr>),
    /// 32-bit signed addition with wraparound.
    AddWrap(Box<Expr>, Box<Expr>),
    /// Per-type default equality, resolved by the runtime comparer table.
    EqualsDefault {
        ty: TypeId,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    /// Per-type default hash code, resolved by the runtime comparer table.
    HashDefault { ty: TypeId, value: Box<Expr> },
    /// Widen the operand to the top type for formatting.
    WidenToAny(Box<Expr>),
    /// Invoke the locale-invariant formatting service.
    ///
    /// `template` uses `{N}` placeholders with `{{`/`}}` escapes for
    /// literal braces.
    FormatInvariant { template: String, args: Vec<Expr> },
}

impl Expr {
    /// Load backing field `index` from the receiver.
    pub fn this_field(index: u32) -> Expr {
        Expr::LoadField {
            receiver: Box::new(Expr::This),
            index,
        }
    }

    /// Load backing field `index` from the body's local slot.
    pub fn local_field(index: u32) -> Expr {
        Expr::LoadField {
            receiver: Box::new(Expr::Local),
            index,
        }
    }

    /// Short-circuiting AND of two operands.
    pub fn and(lhs: Expr, rhs: Expr) -> Expr {
        Expr::And(Box::new(lhs), Box::new(rhs))
    }

    /// Wrapping 32-bit multiplication.
    pub fn mul_wrap(lhs: Expr, rhs: Expr) -> Expr {
        Expr::MulWrap(Box::new(lhs), Box::new(rhs))
    }

    /// Wrapping 32-bit addition.
    pub fn add_wrap(lhs: Expr, rhs: Expr) -> Expr {
        Expr::AddWrap(Box::new(lhs), Box::new(rhs))
    }
}

/// Statement node in a synthesized body.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Stmt {
    /// Invoke the base type's parameterless initializer on the receiver.
    CallBaseInit,
    /// Store into a backing field of the receiver (write-once slots; only
    /// the initializer emits this).
    StoreField { index: u32, value: Expr },
    /// Store into the body's local slot.
    StoreLocal(Expr),
    /// Store into an out parameter, by parameter index.
    StoreOut { index: u32, value: Expr },
    /// Return from the member, with a value for non-void members.
    Return(Option<Expr>),
}

/// The executable body of one synthesized member.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Body {
    /// Whether the body declares its local slot.
    pub uses_local: bool,
    pub stmts: SmallVec<[Stmt; 4]>,
}

impl Body {
    /// Body with no local slot.
    pub fn new(stmts: impl IntoIterator<Item = Stmt>) -> Self {
        Body {
            uses_local: false,
            stmts: stmts.into_iter().collect(),
        }
    }

    /// Body that declares the local slot.
    pub fn with_local(stmts: impl IntoIterator<Item = Stmt>) -> Self {
        Body {
            uses_local: true,
            stmts: stmts.into_iter().collect(),
        }
    }
}
