//! Interpreter for synthesized member bodies.
//!
//! One entry point per executable member kind, over a shared statement and
//! expression core. The interpreter demands each member's body through its
//! memoized body cell, so the first execution also triggers synthesis.

use std::fmt;

use rill_ir::{StringInterner, TypeId};
use rill_synth::{Body, Expr, Stmt, SynthesizedMember};

use crate::format::{format_invariant, FormatError};
use crate::{ComparerRegistry, RecordValue, Value};

/// Error from executing a synthesized body.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum EvalError {
    /// The member has no body (degraded initializer, or a declaration-only
    /// member kind).
    MissingBody,
    /// Wrong number of arguments for the member.
    ArityMismatch { expected: usize, found: usize },
    /// The receiver is not a record instance.
    NotARecord,
    /// A body referenced a backing field slot that does not exist.
    FieldOutOfRange { index: u32 },
    /// A body referenced a parameter that was not supplied.
    ParamOutOfRange { index: u32 },
    /// No default comparer is registered for a member type.
    NoComparer { ty: TypeId },
    /// The body is not shaped like anything the synthesizers emit.
    InvalidBody(&'static str),
    /// The formatting service rejected the display template.
    Format(FormatError),
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::MissingBody => write!(f, "member has no body"),
            EvalError::ArityMismatch { expected, found } => {
                write!(f, "expected {expected} arguments, found {found}")
            }
            EvalError::NotARecord => write!(f, "receiver is not a record instance"),
            EvalError::FieldOutOfRange { index } => {
                write!(f, "backing field {index} out of range")
            }
            EvalError::ParamOutOfRange { index } => write!(f, "parameter {index} out of range"),
            EvalError::NoComparer { ty } => {
                write!(f, "no default comparer registered for {ty:?}")
            }
            EvalError::InvalidBody(reason) => write!(f, "invalid member body: {reason}"),
            EvalError::Format(err) => write!(f, "format error: {err}"),
        }
    }
}

impl std::error::Error for EvalError {}

struct Frame<'a> {
    this: RecordValue,
    params: &'a [Value],
    local: Value,
    outs: Vec<Value>,
}

/// Executes synthesized member bodies against record instances.
pub struct Interpreter<'a> {
    comparers: &'a ComparerRegistry,
    interner: &'a StringInterner,
}

impl<'a> Interpreter<'a> {
    pub fn new(comparers: &'a ComparerRegistry, interner: &'a StringInterner) -> Self {
        Interpreter {
            comparers,
            interner,
        }
    }

    /// Run the primary initializer, producing a new record instance.
    ///
    /// Returns [`EvalError::MissingBody`] when the initializer is in its
    /// degraded no-body mode; callers must tolerate that without crashing.
    pub fn construct(
        &self,
        init: &SynthesizedMember,
        args: &[Value],
    ) -> Result<Value, EvalError> {
        let body = init.body(self.interner).ok_or(EvalError::MissingBody)?;
        let count = init.shape().len();
        if args.len() != count {
            return Err(EvalError::ArityMismatch {
                expected: count,
                found: args.len(),
            });
        }
        let mut frame = Frame {
            this: RecordValue {
                ty: init.containing().ty,
                type_name: init.containing().name,
                fields: vec![Value::Absent; count],
            },
            params: args,
            local: Value::Absent,
            outs: Vec::new(),
        };
        self.exec(body, &mut frame)?;
        Ok(Value::Record(frame.this))
    }

    /// Run a getter against a record receiver.
    pub fn get(&self, getter: &SynthesizedMember, receiver: &Value) -> Result<Value, EvalError> {
        let (ret, _) = self.run_on(getter, receiver, &[], 0)?;
        ret.ok_or(EvalError::InvalidBody("getter returned no value"))
    }

    /// Run the structural equality test.
    pub fn equals(
        &self,
        equality: &SynthesizedMember,
        receiver: &Value,
        other: &Value,
    ) -> Result<bool, EvalError> {
        let params = [other.clone()];
        let (ret, _) = self.run_on(equality, receiver, &params, 0)?;
        match ret {
            Some(Value::Bool(b)) => Ok(b),
            _ => Err(EvalError::InvalidBody("equality must return bool")),
        }
    }

    /// Run the structural hash function.
    pub fn hash(&self, hash: &SynthesizedMember, receiver: &Value) -> Result<i32, EvalError> {
        let (ret, _) = self.run_on(hash, receiver, &[], 0)?;
        match ret {
            Some(Value::Int(v)) => Ok(truncate_i32(v)),
            _ => Err(EvalError::InvalidBody("hash must return int")),
        }
    }

    /// Run the textual representation.
    pub fn display(
        &self,
        display: &SynthesizedMember,
        receiver: &Value,
    ) -> Result<String, EvalError> {
        let (ret, _) = self.run_on(display, receiver, &[], 0)?;
        match ret {
            Some(Value::Str(s)) => Ok(s),
            _ => Err(EvalError::InvalidBody("display must return str")),
        }
    }

    /// Run the positional deconstruction, returning the out values in index
    /// order.
    pub fn deconstruct(
        &self,
        deconstruct: &SynthesizedMember,
        receiver: &Value,
    ) -> Result<Vec<Value>, EvalError> {
        let out_count = deconstruct.shape().len();
        let (_, outs) = self.run_on(deconstruct, receiver, &[], out_count)?;
        Ok(outs)
    }

    fn run_on(
        &self,
        member: &SynthesizedMember,
        receiver: &Value,
        params: &[Value],
        out_count: usize,
    ) -> Result<(Option<Value>, Vec<Value>), EvalError> {
        let body = member.body(self.interner).ok_or(EvalError::MissingBody)?;
        let Value::Record(record) = receiver else {
            return Err(EvalError::NotARecord);
        };
        let mut frame = Frame {
            this: record.clone(),
            params,
            local: Value::Absent,
            outs: vec![Value::Absent; out_count],
        };
        let ret = self.exec(body, &mut frame)?;
        Ok((ret, frame.outs))
    }

    fn exec(&self, body: &Body, frame: &mut Frame<'_>) -> Result<Option<Value>, EvalError> {
        for stmt in &body.stmts {
            match stmt {
                // The root base initializer has no observable effect; the
                // call is kept in the IR for the lowering stage.
                Stmt::CallBaseInit => {}
                Stmt::StoreField { index, value } => {
                    let value = self.eval(value, frame)?;
                    let slot = frame
                        .this
                        .fields
                        .get_mut(*index as usize)
                        .ok_or(EvalError::FieldOutOfRange { index: *index })?;
                    *slot = value;
                }
                Stmt::StoreLocal(value) => {
                    frame.local = self.eval(value, frame)?;
                }
                Stmt::StoreOut { index, value } => {
                    let value = self.eval(value, frame)?;
                    let slot = frame
                        .outs
                        .get_mut(*index as usize)
                        .ok_or(EvalError::ParamOutOfRange { index: *index })?;
                    *slot = value;
                }
                Stmt::Return(expr) => {
                    return match expr {
                        Some(expr) => Ok(Some(self.eval(expr, frame)?)),
                        None => Ok(None),
                    };
                }
            }
        }
        Ok(None)
    }

    fn eval(&self, expr: &Expr, frame: &Frame<'_>) -> Result<Value, EvalError> {
        match expr {
            Expr::This => Ok(Value::Record(frame.this.clone())),
            Expr::Param(index) => frame
                .params
                .get(*index as usize)
                .cloned()
                .ok_or(EvalError::ParamOutOfRange { index: *index }),
            Expr::Local => Ok(frame.local.clone()),
            Expr::Int(v) => Ok(Value::Int(i64::from(*v))),
            Expr::LoadField { receiver, index } => match self.eval(receiver, frame)? {
                Value::Record(record) => record
                    .fields
                    .get(*index as usize)
                    .cloned()
                    .ok_or(EvalError::FieldOutOfRange { index: *index }),
                _ => Err(EvalError::NotARecord),
            },
            Expr::DowncastOrAbsent { value, ty } => Ok(match self.eval(value, frame)? {
                Value::Record(record) if record.ty == *ty => Value::Record(record),
                _ => Value::Absent,
            }),
            Expr::IsPresent(value) => Ok(Value::Bool(!self.eval(value, frame)?.is_absent())),
            Expr::And(lhs, rhs) => {
                if !self.eval_bool(lhs, frame)? {
                    // Short-circuit: the right operand is never evaluated.
                    return Ok(Value::Bool(false));
                }
                Ok(Value::Bool(self.eval_bool(rhs, frame)?))
            }
            Expr::MulWrap(lhs, rhs) => {
                let lhs = self.eval_i32(lhs, frame)?;
                let rhs = self.eval_i32(rhs, frame)?;
                Ok(Value::Int(i64::from(lhs.wrapping_mul(rhs))))
            }
            Expr::AddWrap(lhs, rhs) => {
                let lhs = self.eval_i32(lhs, frame)?;
                let rhs = self.eval_i32(rhs, frame)?;
                Ok(Value::Int(i64::from(lhs.wrapping_add(rhs))))
            }
            Expr::EqualsDefault { ty, lhs, rhs } => {
                let comparer = self
                    .comparers
                    .get(*ty)
                    .ok_or(EvalError::NoComparer { ty: *ty })?;
                let lhs = self.eval(lhs, frame)?;
                let rhs = self.eval(rhs, frame)?;
                Ok(Value::Bool((comparer.equals)(&lhs, &rhs)))
            }
            Expr::HashDefault { ty, value } => {
                let comparer = self
                    .comparers
                    .get(*ty)
                    .ok_or(EvalError::NoComparer { ty: *ty })?;
                let value = self.eval(value, frame)?;
                Ok(Value::Int(i64::from((comparer.hash)(&value))))
            }
            // Values are uniformly represented; widening is a static-type
            // operation only.
            Expr::WidenToAny(value) => self.eval(value, frame),
            Expr::FormatInvariant { template, args } => {
                let mut rendered = Vec::with_capacity(args.len());
                for arg in args {
                    rendered.push(self.eval(arg, frame)?);
                }
                format_invariant(template, &rendered)
                    .map(Value::Str)
                    .map_err(EvalError::Format)
            }
        }
    }

    fn eval_bool(&self, expr: &Expr, frame: &Frame<'_>) -> Result<bool, EvalError> {
        match self.eval(expr, frame)? {
            Value::Bool(b) => Ok(b),
            _ => Err(EvalError::InvalidBody("expected bool operand")),
        }
    }

    fn eval_i32(&self, expr: &Expr, frame: &Frame<'_>) -> Result<i32, EvalError> {
        match self.eval(expr, frame)? {
            Value::Int(v) => Ok(truncate_i32(v)),
            _ => Err(EvalError::InvalidBody("expected int operand")),
        }
    }
}

/// All hash arithmetic is 32-bit; chain values always fit.
#[expect(
    clippy::cast_possible_truncation,
    reason = "hash chain values are produced from 32-bit operations"
)]
fn truncate_i32(v: i64) -> i32 {
    v as i32
}
