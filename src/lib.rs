//! Carnatic ABC (CABC) to ABC notation converter
//!
//! CABC files are ABC files that write swaras (S R G M P D N) where ABC
//! writes note letters. This crate maps them to C D E F G A B, keeps every
//! other character as it was, and renders the plain, swara-annotated and
//! lyrics variants of each song. It builds both as a native library/CLI and
//! as a WASM module.

pub mod api;
pub mod converters;
pub mod diagnostics;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;
pub mod models;
pub mod parse;
pub mod songs;

// Re-export commonly used types
pub use converters::cabc_to_abc::{
    convert_cabc_to_abc, convert_document, AnnotationStyle, ConversionError, ConversionSettings,
    InputKind,
};
pub use models::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    #[cfg(feature = "console_log")]
    {
        // A second start keeps the logger installed by the first
        let _ = console_log::init_with_level(log::Level::Debug);
    }

    log::info!("CABC converter WASM module initialized");
}
