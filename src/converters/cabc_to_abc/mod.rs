//! CABC to ABC converter
//!
//! Converts Carnatic ABC (swara letters S R G M P D N in place of note
//! letters) to standard ABC notation.
//!
//! # Overview
//!
//! 1. **Tokenize**: classify every line and split music lines into tokens
//! 2. **Map**: replace swara letters with Western letters, everything else verbatim
//! 3. **Render**: build the output variants (plain, swara-annotated, with or
//!    without lyrics)
//!
//! # Basic Usage
//!
//! ```
//! use cabc_converter::converters::cabc_to_abc::convert_cabc_to_abc;
//!
//! let abc = convert_cabc_to_abc("X:1\nK:C\nS R G M | P D N s |").unwrap();
//! assert_eq!(abc, "X:1\nK:C\nC D E F | G A B c |");
//! ```

pub mod annotate;
pub mod errors;
pub mod lyrics;
pub mod mapper;
pub mod types;

pub use annotate::Annotator;
pub use errors::ConversionError;
pub use lyrics::{align_lyrics, strip_lyrics, LyricAlignment, LyricSlot};
pub use mapper::{map_line, map_swara};
pub use types::{AnnotationStyle, ConversionSettings};

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::diagnostics::Diagnostics;
use crate::models::{ConversionResult, NotationLine, OutputVariant, RenderedVariant};
use crate::parse::tokenize_line;

/// Which kind of input file is being converted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputKind {
    /// `notes.cabc.abc`: produces `notes.abc` and `notes-swaras.abc`
    Notes,
    /// `notes-lyrics*.cabc.abc`: produces all four variants
    NotesLyrics,
}

impl InputKind {
    /// Decide from the input file name
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        if name.contains("notes-lyrics") {
            InputKind::NotesLyrics
        } else {
            InputKind::Notes
        }
    }

    /// Decide from content: any lyric line makes it a lyrics input
    pub fn detect(content: &str) -> Self {
        if content.split('\n').any(lyrics::is_lyric_text) {
            InputKind::NotesLyrics
        } else {
            InputKind::Notes
        }
    }

    pub fn variants(&self) -> &'static [OutputVariant] {
        match self {
            InputKind::Notes => &[OutputVariant::Notes, OutputVariant::NotesSwaras],
            InputKind::NotesLyrics => &OutputVariant::ALL,
        }
    }
}

/// A tokenized document together with its mapped lines
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    pub lines: Vec<NotationLine>,
    pub mapped: Vec<String>,
    pub diagnostics: Diagnostics,
}

impl ParsedDocument {
    /// Tokenize and map every line of `content`
    pub fn parse(content: &str) -> Result<Self, ConversionError> {
        let mut diagnostics = Diagnostics::new();
        let lines: Vec<NotationLine> = content
            .split('\n')
            .enumerate()
            .map(|(i, text)| tokenize_line(i + 1, text, &mut diagnostics))
            .collect();

        let mapped = lines.iter().map(map_line).collect::<Result<Vec<_>, _>>()?;

        lyrics::check_document(&lines, &mut diagnostics);

        log::debug!(
            "parsed {} lines ({} music, {} lyric), {} diagnostics",
            lines.len(),
            lines.iter().filter(|l| l.is_music()).count(),
            lines.iter().filter(|l| l.is_lyric()).count(),
            diagnostics.len()
        );

        Ok(Self {
            lines,
            mapped,
            diagnostics,
        })
    }

    /// Mapped lines, optionally without lyric lines
    pub fn render_plain(&self, include_lyrics: bool) -> Vec<String> {
        if include_lyrics {
            self.mapped.clone()
        } else {
            strip_lyrics(&self.mapped)
        }
    }

    /// Mapped lines with swara annotations
    pub fn render_swaras(
        &self,
        include_lyrics: bool,
        settings: &ConversionSettings,
    ) -> Result<Vec<String>, ConversionError> {
        let mut annotator = Annotator::new(settings.label_style);
        let mut out = Vec::with_capacity(self.lines.len() * 2);

        for (line, mapped) in self.lines.iter().zip(&self.mapped) {
            if line.is_lyric() && !include_lyrics {
                continue;
            }
            if !line.is_music() {
                out.push(mapped.clone());
                continue;
            }
            match settings.annotation_style {
                AnnotationStyle::Lyric => {
                    out.push(mapped.clone());
                    if let Some(labels) = annotator.label_line(line) {
                        out.push(labels);
                    }
                }
                AnnotationStyle::Inline => out.push(annotator.inline_line(line)?),
            }
        }
        Ok(out)
    }

    pub fn render(
        &self,
        variant: OutputVariant,
        settings: &ConversionSettings,
    ) -> Result<RenderedVariant, ConversionError> {
        let lines = if variant.has_swaras() {
            self.render_swaras(variant.has_lyrics(), settings)?
        } else {
            self.render_plain(variant.has_lyrics())
        };
        Ok(RenderedVariant::new(variant, lines))
    }
}

/// Convert CABC content to ABC, keeping lyric lines
pub fn convert_cabc_to_abc(content: &str) -> Result<String, ConversionError> {
    let doc = ParsedDocument::parse(content)?;
    Ok(doc.mapped.join("\n"))
}

/// Convert CABC content and render every variant for `kind`
///
/// For a notes-only input the plain variants keep any lyric lines present;
/// for a lyrics input they are stripped and the lyric variants carry them.
pub fn convert_document(
    content: &str,
    kind: InputKind,
    settings: &ConversionSettings,
) -> Result<ConversionResult, ConversionError> {
    let doc = ParsedDocument::parse(content)?;

    let mut variants = Vec::with_capacity(kind.variants().len());
    for &variant in kind.variants() {
        let rendered = match (kind, variant) {
            (InputKind::Notes, OutputVariant::Notes) => {
                RenderedVariant::new(variant, doc.render_plain(true))
            }
            (InputKind::Notes, OutputVariant::NotesSwaras) => {
                RenderedVariant::new(variant, doc.render_swaras(true, settings)?)
            }
            _ => doc.render(variant, settings)?,
        };
        variants.push(rendered);
    }

    Ok(ConversionResult {
        variants,
        diagnostics: doc.diagnostics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LabelStyle;

    const SONG: &str = "X:1\nT:Test Song\nM:4/4\nL:1/4\nK:C\nS R G M | P D N s |\nw:sa ri ga ma pa da ni sa";

    #[test]
    fn test_convert_single_notes() {
        assert_eq!(convert_cabc_to_abc("S").unwrap(), "C");
        assert_eq!(convert_cabc_to_abc("s").unwrap(), "c");
        assert_eq!(convert_cabc_to_abc("R").unwrap(), "D");
        assert_eq!(convert_cabc_to_abc("z").unwrap(), "z");
    }

    #[test]
    fn test_preserves_line_endings() {
        let input = "X:1\r\nK:C\r\nS R |\r\n";
        assert_eq!(convert_cabc_to_abc(input).unwrap(), "X:1\r\nK:C\r\nC D |\r\n");
    }

    #[test]
    fn test_crlf_swara_lines_stay_crlf() {
        let result = convert_document(
            "K:C\r\nS R |\r\n",
            InputKind::Notes,
            &ConversionSettings::default(),
        )
        .unwrap();
        assert_eq!(
            result.content(OutputVariant::NotesSwaras).unwrap(),
            "K:C\r\nC D |\r\nw:S R\r\n"
        );
    }

    #[test]
    fn test_input_kind() {
        assert_eq!(
            InputKind::from_path(Path::new("songs/a/input/notes-lyrics.cabc.abc")),
            InputKind::NotesLyrics
        );
        assert_eq!(
            InputKind::from_path(Path::new("songs/a/input/notes-lyrics-taala.cabc.abc")),
            InputKind::NotesLyrics
        );
        assert_eq!(
            InputKind::from_path(Path::new("notes.cabc.abc")),
            InputKind::Notes
        );
        assert_eq!(InputKind::detect(SONG), InputKind::NotesLyrics);
        assert_eq!(InputKind::detect("X:1\nS R"), InputKind::Notes);
    }

    #[test]
    fn test_lyrics_input_variants() {
        let result =
            convert_document(SONG, InputKind::NotesLyrics, &ConversionSettings::default()).unwrap();
        assert_eq!(result.variant_kinds(), OutputVariant::ALL.to_vec());

        let notes = result.content(OutputVariant::Notes).unwrap();
        assert!(notes.ends_with("C D E F | G A B c |"));
        assert!(!notes.contains("w:"));

        let swaras = result.content(OutputVariant::NotesSwaras).unwrap();
        assert!(swaras.ends_with("C D E F | G A B c |\nw:S R G M P D N s"));

        let lyrics = result.content(OutputVariant::NotesLyrics).unwrap();
        assert!(lyrics.ends_with("C D E F | G A B c |\nw:sa ri ga ma pa da ni sa"));

        let both = result.content(OutputVariant::NotesLyricsSwaras).unwrap();
        assert!(both.ends_with(
            "C D E F | G A B c |\nw:S R G M P D N s\nw:sa ri ga ma pa da ni sa"
        ));
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_words_field_kept_in_every_variant() {
        let input = "X:1\nK:C\nS R G M |\nw:sa ri ga ma\nW:Sri Govinda, verse two";
        let result =
            convert_document(input, InputKind::NotesLyrics, &ConversionSettings::default()).unwrap();
        for variant in OutputVariant::ALL {
            let content = result.content(variant).unwrap();
            assert!(
                content.ends_with("\nW:Sri Govinda, verse two"),
                "{variant}: {content}"
            );
        }
        assert_eq!(
            result.content(OutputVariant::Notes).unwrap(),
            "X:1\nK:C\nC D E F |\nW:Sri Govinda, verse two"
        );
    }

    #[test]
    fn test_notes_input_variants() {
        let result = convert_document(
            "X:1\nK:C\nS R G M |",
            InputKind::Notes,
            &ConversionSettings::default(),
        )
        .unwrap();
        assert_eq!(
            result.variant_kinds(),
            vec![OutputVariant::Notes, OutputVariant::NotesSwaras]
        );
        assert_eq!(
            result.content(OutputVariant::NotesSwaras).unwrap(),
            "X:1\nK:C\nC D E F |\nw:S R G M"
        );
    }

    #[test]
    fn test_inline_syllable_settings() {
        let settings = ConversionSettings {
            annotation_style: AnnotationStyle::Inline,
            label_style: LabelStyle::Syllable,
        };
        let result = convert_document("K:C\nS R |", InputKind::Notes, &settings).unwrap();
        assert_eq!(
            result.content(OutputVariant::NotesSwaras).unwrap(),
            "K:C\n\"_sa\"C \"_ri\"D |"
        );
    }
}
