//! Core data models for CABC conversion
//!
//! Tokens, notation lines, the swara mapping table and conversion results.

pub mod notation;
pub mod swara;
pub mod token;

// Re-export commonly used types
pub use notation::*;
pub use swara::*;
pub use token::*;
