//! Diagnostics for the Rill compiler.
//!
//! Provides the error-code catalog, the [`Diagnostic`] type carrying a
//! message with labeled source spans, and the [`DiagnosticQueue`] that
//! compilation phases report into.

mod diagnostic;
mod error_code;
mod queue;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
pub use queue::DiagnosticQueue;
