//! Executable semantics for synthesized member bodies.
//!
//! `rill_synth` produces member bodies as data; this crate runs them. It
//! supplies the two capabilities the body IR leaves abstract:
//!
//! - the per-type default equality/hash comparers ([`ComparerRegistry`]),
//! - the locale-invariant formatting service ([`format_invariant`]),
//!
//! and an [`Interpreter`] with one entry point per executable member kind.

mod comparer;
mod format;
mod interp;
mod value;

pub use comparer::{Comparer, ComparerRegistry};
pub use format::{format_invariant, render, FormatError};
pub use interp::{EvalError, Interpreter};
pub use value::{RecordValue, Value};
