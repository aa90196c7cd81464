//! Settings for CABC conversion

use serde::{Deserialize, Serialize};

use crate::models::LabelStyle;

/// Conversion settings
///
/// Deserializes with defaults for missing fields, so a partial settings
/// object from JavaScript or the CLI is enough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ConversionSettings {
    /// Where swara annotations go in the `*-swaras` variants
    pub annotation_style: AnnotationStyle,

    /// How each swara is labelled
    pub label_style: LabelStyle,
}

/// Placement of swara annotations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationStyle {
    /// A `w:` line under each music line; the note line is left untouched
    #[default]
    Lyric,
    /// An ABC below-annotation (`"_S"C`) in front of each note
    Inline,
}

impl std::str::FromStr for AnnotationStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lyric" | "lyrics" => Ok(AnnotationStyle::Lyric),
            "inline" => Ok(AnnotationStyle::Inline),
            other => Err(format!("unknown annotation style `{}` (expected lyric or inline)", other)),
        }
    }
}

impl std::str::FromStr for LabelStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "letter" | "letters" => Ok(LabelStyle::Letter),
            "syllable" | "syllables" => Ok(LabelStyle::Syllable),
            other => Err(format!("unknown label style `{}` (expected letter or syllable)", other)),
        }
    }
}
