//! CABC converter WASM API
//!
//! JavaScript-facing functions for the browser editor.
//!
//! # Module Structure
//!
//! - `helpers`: logging macros and serialization helpers
//! - `convert`: `convertCabc` and `convertCabcVariants`

pub mod convert;
pub mod helpers;

pub use convert::{convert_cabc, convert_cabc_variants, variants_response, VariantsResponse};
