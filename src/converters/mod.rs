//! Format converters
//!
//! This module contains converters between music notation formats.

pub mod cabc_to_abc;

// Re-export for convenience
pub use cabc_to_abc::{
    convert_cabc_to_abc, convert_document, ConversionError, ConversionSettings, InputKind,
};
