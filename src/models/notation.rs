//! Notation lines and conversion results

use serde::{Deserialize, Serialize};
use std::fmt;

use super::token::{Token, TokenKind};
use crate::diagnostics::Diagnostics;

/// Classification of a physical line, decided once from its leading syntax
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Comment,
    Header,
    Lyric,
    Music,
}

/// A swara that takes one slot of a `w:` line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SungNote {
    /// Index of the swara token
    pub index: usize,
    /// Token an annotation goes in front of: the chord's `[` or the swara itself
    pub anchor: usize,
}

/// Bracketed note group being scanned
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Group {
    None,
    Chord { open: usize, sung: bool },
    Grace,
}

/// One physical line of an input file
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NotationLine {
    /// 1-based line number in the source file
    pub number: usize,
    pub kind: LineKind,
    pub tokens: Vec<Token>,
}

impl NotationLine {
    pub fn new(number: usize, kind: LineKind, tokens: Vec<Token>) -> Self {
        Self {
            number,
            kind,
            tokens,
        }
    }

    /// Original text of the line
    pub fn source(&self) -> String {
        self.tokens.iter().map(Token::raw).collect()
    }

    pub fn is_music(&self) -> bool {
        self.kind == LineKind::Music
    }

    pub fn is_lyric(&self) -> bool {
        self.kind == LineKind::Lyric
    }

    /// Swaras that take a `w:` slot, in order
    ///
    /// A chord `[SG]` takes one slot, on its first swara. Grace notes `{SR}`
    /// take none.
    pub fn sung_notes(&self) -> Vec<SungNote> {
        let mut group = Group::None;
        let mut notes = Vec::new();

        for (index, token) in self.tokens.iter().enumerate() {
            match (token.kind(), token.raw()) {
                (TokenKind::Literal, "[") => group = Group::Chord { open: index, sung: false },
                (TokenKind::Literal, "{") => group = Group::Grace,
                (TokenKind::Literal, "]") | (TokenKind::Literal, "}") => group = Group::None,
                (TokenKind::Swara, _) => match group {
                    Group::None => notes.push(SungNote { index, anchor: index }),
                    Group::Chord { open, sung: false } => {
                        notes.push(SungNote { index, anchor: open });
                        group = Group::Chord { open, sung: true };
                    }
                    Group::Chord { sung: true, .. } | Group::Grace => {}
                },
                _ => {}
            }
        }
        notes
    }

    /// True when the line ends in a carriage return (CRLF input)
    pub fn ends_with_cr(&self) -> bool {
        self.tokens.last().map_or(false, |t| t.raw().ends_with('\r'))
    }
}

/// The output files produced for one input
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum OutputVariant {
    Notes,
    NotesSwaras,
    NotesLyrics,
    NotesLyricsSwaras,
}

impl OutputVariant {
    pub const ALL: [OutputVariant; 4] = [
        OutputVariant::Notes,
        OutputVariant::NotesSwaras,
        OutputVariant::NotesLyrics,
        OutputVariant::NotesLyricsSwaras,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            OutputVariant::Notes => "notes.abc",
            OutputVariant::NotesSwaras => "notes-swaras.abc",
            OutputVariant::NotesLyrics => "notes-lyrics.abc",
            OutputVariant::NotesLyricsSwaras => "notes-lyrics-swaras.abc",
        }
    }

    pub fn has_lyrics(&self) -> bool {
        matches!(self, OutputVariant::NotesLyrics | OutputVariant::NotesLyricsSwaras)
    }

    pub fn has_swaras(&self) -> bool {
        matches!(self, OutputVariant::NotesSwaras | OutputVariant::NotesLyricsSwaras)
    }
}

impl fmt::Display for OutputVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Rendered text of one output variant
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RenderedVariant {
    pub variant: OutputVariant,
    pub lines: Vec<String>,
}

impl RenderedVariant {
    pub fn new(variant: OutputVariant, lines: Vec<String>) -> Self {
        Self { variant, lines }
    }

    /// File content; lines joined exactly as they were split
    pub fn content(&self) -> String {
        self.lines.join("\n")
    }
}

/// Everything produced by converting one input file
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ConversionResult {
    pub variants: Vec<RenderedVariant>,
    pub diagnostics: Diagnostics,
}

impl ConversionResult {
    pub fn get(&self, variant: OutputVariant) -> Option<&RenderedVariant> {
        self.variants.iter().find(|v| v.variant == variant)
    }

    /// Content of a variant, if it was produced
    pub fn content(&self, variant: OutputVariant) -> Option<String> {
        self.get(variant).map(RenderedVariant::content)
    }

    pub fn variant_kinds(&self) -> Vec<OutputVariant> {
        self.variants.iter().map(|v| v.variant).collect()
    }
}
