//! Lyric lines: pass-through, stripping and alignment checks
//!
//! Lyrics are already valid ABC, so they are never rewritten. Alignment is
//! computed only to report music/lyric lines whose counts disagree.
//!
//! Alignment follows ABC `w:` rules: each syllable takes the next swara,
//! `*` skips a swara, `_` holds the previous syllable over a swara. Rests
//! take no syllable. Hyphens, spaces, `|` and `~` only separate.

use serde::{Deserialize, Serialize};

use crate::diagnostics::{kinds, DiagnosticMark, DiagnosticSeverity, Diagnostics};
use crate::models::{NotationLine, TokenKind};

/// What a lyric slot does to the swara it lands on
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum LyricSlot {
    Syllable(String),
    Skip,
    Hold,
}

/// A swara paired with its lyric slot
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AlignedSyllable {
    /// Index of the swara token in its music line
    pub token_index: usize,
    pub swara: String,
    pub slot: Option<LyricSlot>,
}

/// Result of aligning one lyric line against one music line
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct LyricAlignment {
    pub pairs: Vec<AlignedSyllable>,
    /// Slots left over once every swara was paired
    pub unused_slots: usize,
}

impl LyricAlignment {
    /// Swaras that received no slot
    pub fn unsung(&self) -> usize {
        self.pairs.iter().filter(|p| p.slot.is_none()).count()
    }

    pub fn is_exact(&self) -> bool {
        self.unused_slots == 0 && self.unsung() == 0
    }
}

/// Slots of a lyric line in order
pub fn lyric_slots(lyric: &NotationLine) -> Vec<LyricSlot> {
    lyric
        .tokens
        .iter()
        .filter_map(|token| match token.kind() {
            TokenKind::LyricSyllable => Some(LyricSlot::Syllable(token.raw().to_string())),
            TokenKind::Literal if token.raw() == "*" => Some(LyricSlot::Skip),
            TokenKind::Literal if token.raw() == "_" => Some(LyricSlot::Hold),
            _ => None,
        })
        .collect()
}

/// Pair the swaras of `music` with the slots of `lyric`
pub fn align_lyrics(music: &NotationLine, lyric: &NotationLine) -> LyricAlignment {
    let mut slots = lyric_slots(lyric).into_iter();
    let pairs = music
        .sung_notes()
        .into_iter()
        .map(|note| AlignedSyllable {
            token_index: note.index,
            swara: music.tokens[note.index].raw().to_string(),
            slot: slots.next(),
        })
        .collect();

    LyricAlignment {
        pairs,
        unused_slots: slots.count(),
    }
}

/// Record a diagnostic when a lyric line does not fit its music line
pub fn check_alignment(music: &NotationLine, lyric: &NotationLine, diagnostics: &mut Diagnostics) {
    let alignment = align_lyrics(music, lyric);
    if alignment.is_exact() {
        return;
    }

    let swaras = alignment.pairs.len();
    let slots = swaras - alignment.unsung() + alignment.unused_slots;
    diagnostics.add(
        DiagnosticMark::new(
            lyric.number,
            1,
            DiagnosticSeverity::Info,
            kinds::LYRIC_COUNT_MISMATCH,
            format!(
                "lyric line has {} slot(s) for {} swara(s) on line {}",
                slots, swaras, music.number
            ),
        )
        .with_len(lyric.source().chars().count()),
    );
}

/// Check every lyric line against the nearest music line above it
pub fn check_document(lines: &[NotationLine], diagnostics: &mut Diagnostics) {
    let mut last_music: Option<&NotationLine> = None;
    for line in lines {
        if line.is_music() {
            last_music = Some(line);
        } else if line.is_lyric() && line.source().starts_with("w:") {
            if let Some(music) = last_music {
                check_alignment(music, line, diagnostics);
            }
        }
    }
}

/// True for aligned lyric lines (`w:`)
pub fn is_lyric_text(line: &str) -> bool {
    line.starts_with("w:")
}

/// Drop lyric lines, keeping everything else in order
pub fn strip_lyrics(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .filter(|line| !is_lyric_text(line))
        .cloned()
        .collect()
}
