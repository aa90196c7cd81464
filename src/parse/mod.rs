//! Parsing module for CABC notation
//!
//! Classifies each line and splits it into typed tokens.

pub mod line_kind;
pub mod tokens;

// Re-export commonly used items
pub use line_kind::{classify_line, LineClass};
pub use tokens::{tokenize, tokenize_line};
