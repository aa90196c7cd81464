//! Diagnostics collected during conversion
//!
//! Anomalies that do not stop conversion (malformed headers, unterminated
//! quotes, lyric/note count mismatches) are recorded here instead of failing.
//! The affected text is always passed through unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity level for diagnostic marks
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Warning,
    Info,
}

/// Diagnostic kind identifiers
pub mod kinds {
    pub const MALFORMED_HEADER: &str = "malformed_header";
    pub const UNTERMINATED_QUOTE: &str = "unterminated_quote";
    pub const LYRIC_COUNT_MISMATCH: &str = "lyric_count_mismatch";
}

/// A diagnostic mark pointing at a location in the input
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DiagnosticMark {
    /// 1-based line number
    pub line: usize,
    /// 1-based character column
    pub col: usize,
    /// Length of the highlighted text in characters
    pub len: usize,
    pub severity: DiagnosticSeverity,
    /// Kind identifier (see [`kinds`])
    pub kind: String,
    pub message: String,
}

impl DiagnosticMark {
    pub fn new(
        line: usize,
        col: usize,
        severity: DiagnosticSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            line,
            col,
            len: 1,
            severity,
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Create with custom length (for range highlights)
    pub fn with_len(mut self, len: usize) -> Self {
        self.len = len;
        self
    }
}

impl fmt::Display for DiagnosticMark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {} [{}]",
            self.line, self.col, self.message, self.kind
        )
    }
}

/// Collection of diagnostic marks for one input file
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Diagnostics {
    pub marks: Vec<DiagnosticMark>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self { marks: Vec::new() }
    }

    pub fn add(&mut self, mark: DiagnosticMark) {
        self.marks.push(mark);
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Marks of a given kind
    pub fn of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a DiagnosticMark> {
        self.marks.iter().filter(move |m| m.kind == kind)
    }

    /// Forward every mark to the `log` facade at its severity
    pub fn log_all(&self, context: &str) {
        for mark in &self.marks {
            match mark.severity {
                DiagnosticSeverity::Warning => log::warn!("{}:{}", context, mark),
                DiagnosticSeverity::Info => log::info!("{}:{}", context, mark),
            }
        }
    }
}
