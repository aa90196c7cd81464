//! Error types for CABC conversion
//!
//! Only `UnmappableToken` indicates a defect in the converter itself. Input
//! and output failures abort the affected song and nothing else.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level conversion error type
#[derive(Debug, Error)]
pub enum ConversionError {
    /// Input file missing or unreadable
    #[error("cannot read input {}: {source}", .path.display())]
    UnreadableInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A swara token whose letter has no Western mapping (internal invariant
    /// violation, the tokenizer only emits mappable letters)
    #[error("{}line {line}, column {column}: unmappable swara token `{token}`", file_prefix(.file))]
    UnmappableToken {
        file: Option<PathBuf>,
        line: usize,
        column: usize,
        token: String,
    },

    /// Output directory or file could not be written
    #[error("cannot write output {}: {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn file_prefix(file: &Option<PathBuf>) -> String {
    file.as_ref()
        .map(|f| format!("{}: ", f.display()))
        .unwrap_or_default()
}

impl ConversionError {
    /// True for errors that indicate a converter bug and warrant a
    /// non-zero exit status
    pub fn is_defect(&self) -> bool {
        matches!(self, ConversionError::UnmappableToken { .. })
    }

    /// Attach the input file to an error that was raised without one
    pub fn with_file(self, path: impl Into<PathBuf>) -> Self {
        match self {
            ConversionError::UnmappableToken {
                file: None,
                line,
                column,
                token,
            } => ConversionError::UnmappableToken {
                file: Some(path.into()),
                line,
                column,
                token,
            },
            other => other,
        }
    }
}
