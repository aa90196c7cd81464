//! Conversion operations for the WASM API
//!
//! The browser editor sends the whole CABC text and gets back either plain
//! ABC or every variant with its diagnostics. The `*_response` functions hold
//! the logic; the exported wrappers only translate to and from `JsValue`.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::api::helpers::{conversion_error, deserialize, serialize};
use crate::converters::cabc_to_abc::{
    convert_cabc_to_abc, convert_document, ConversionError, ConversionSettings, InputKind,
};
use crate::diagnostics::Diagnostics;
use crate::models::OutputVariant;
use crate::{wasm_info, wasm_log};

/// One rendered file, keyed by its output file name
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct VariantPayload {
    pub file_name: String,
    pub variant: OutputVariant,
    pub content: String,
}

/// Response of `convertCabcVariants`
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct VariantsResponse {
    pub kind: InputKind,
    pub variants: Vec<VariantPayload>,
    pub diagnostics: Diagnostics,
}

/// Convert `content` and package every variant; the input kind is detected
/// from the presence of lyric lines
pub fn variants_response(
    content: &str,
    settings: &ConversionSettings,
) -> Result<VariantsResponse, ConversionError> {
    let kind = InputKind::detect(content);
    let result = convert_document(content, kind, settings)?;

    let variants = result
        .variants
        .iter()
        .map(|rendered| VariantPayload {
            file_name: rendered.variant.file_name().to_string(),
            variant: rendered.variant,
            content: rendered.content(),
        })
        .collect();

    Ok(VariantsResponse {
        kind,
        variants,
        diagnostics: result.diagnostics,
    })
}

/// Convert CABC text to ABC text
#[wasm_bindgen(js_name = convertCabc)]
pub fn convert_cabc(content: &str) -> Result<String, JsValue> {
    wasm_info!("convertCabc called ({} bytes)", content.len());

    let abc = convert_cabc_to_abc(content).map_err(conversion_error)?;

    wasm_log!("  ABC generated: {} bytes", abc.len());
    Ok(abc)
}

/// Convert CABC text and return every variant with diagnostics
///
/// `settings` is a plain object such as
/// `{ annotation_style: "inline", label_style: "syllable" }`; `undefined`
/// or missing fields take the defaults.
#[wasm_bindgen(js_name = convertCabcVariants)]
pub fn convert_cabc_variants(content: &str, settings: JsValue) -> Result<JsValue, JsValue> {
    wasm_info!("convertCabcVariants called ({} bytes)", content.len());

    let settings: ConversionSettings = if settings.is_undefined() || settings.is_null() {
        ConversionSettings::default()
    } else {
        deserialize(settings, "Invalid conversion settings")?
    };

    let response = variants_response(content, &settings).map_err(conversion_error)?;

    wasm_log!(
        "  {} variant(s), {} diagnostic(s)",
        response.variants.len(),
        response.diagnostics.len()
    );
    serialize(&response, "Failed to serialize conversion result")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LabelStyle;

    #[test]
    fn test_variants_response_detects_lyrics() {
        let response = variants_response(
            "X:1\nK:C\nS R G M |\nw: sa ri ga ma",
            &ConversionSettings::default(),
        )
        .unwrap();
        assert_eq!(response.kind, InputKind::NotesLyrics);
        let names: Vec<&str> = response.variants.iter().map(|v| v.file_name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "notes.abc",
                "notes-swaras.abc",
                "notes-lyrics.abc",
                "notes-lyrics-swaras.abc"
            ]
        );
        assert_eq!(response.variants[2].content, "X:1\nK:C\nC D E F |\nw: sa ri ga ma");
    }

    #[test]
    fn test_variants_response_notes_only() {
        let settings = ConversionSettings {
            label_style: LabelStyle::Syllable,
            ..ConversionSettings::default()
        };
        let response = variants_response("K:C\nS R", &settings).unwrap();
        assert_eq!(response.kind, InputKind::Notes);
        assert_eq!(response.variants.len(), 2);
        assert_eq!(response.variants[1].content, "K:C\nC D\nw:sa ri");
    }

    #[test]
    fn test_response_serializes_to_json() {
        let response = variants_response("K:C\nS", &ConversionSettings::default()).unwrap();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["kind"], "notes");
        assert_eq!(json["variants"][0]["variant"], "notes");
        assert_eq!(json["variants"][1]["file_name"], "notes-swaras.abc");
    }
}
