//! Diagnostic queue for collecting and deduplicating diagnostics.

use rill_ir::Span;

use crate::{Diagnostic, ErrorCode};

/// Collecting sink for diagnostics.
///
/// Phases report into the queue as they run; the driver drains it once per
/// compilation. Reporting the same code at the same span twice keeps only
/// the first occurrence, so a phase that walks a declaration more than once
/// does not repeat itself.
#[derive(Default, Debug)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    seen: Vec<(ErrorCode, Span)>,
}

impl DiagnosticQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Report a diagnostic.
    ///
    /// Exact duplicates (same code, same primary span) are suppressed.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        let key = (diagnostic.code, diagnostic.span);
        if self.seen.contains(&key) {
            return;
        }
        self.seen.push(key);
        self.diagnostics.push(diagnostic);
    }

    /// Number of collected diagnostics.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Whether any collected diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// Iterate over collected diagnostics in report order.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// Drain the queue, leaving it empty.
    pub fn take(&mut self) -> Vec<Diagnostic> {
        self.seen.clear();
        std::mem::take(&mut self.diagnostics)
    }
}
