//! Token model for CABC notation lines
//!
//! A token is the smallest unit of a notation line. Swara and rest tokens
//! carry their attached decorations (octave marks, duration, tie) so a note
//! can never be separated from its rhythm during re-serialization.

use serde::{Deserialize, Serialize};

/// Token kinds recognized by the tokenizer
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Swara,
    Rest,
    Bar,
    Tie,
    DurationModifier,
    OctaveModifier,
    HeaderField,
    LyricSyllable,
    Literal,
}

/// Kind of a decoration attached to a swara or rest
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecorationKind {
    /// `'` raises the note one octave
    OctaveUp,
    /// `,` lowers the note one octave
    OctaveDown,
    /// Digits and `/` (e.g. `2`, `/2`, `3/2`)
    Duration,
    /// Trailing `-`
    Tie,
}

/// A decoration captured together with its note
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Decoration {
    pub kind: DecorationKind,
    pub raw: String,
}

impl Decoration {
    pub fn new(kind: DecorationKind, raw: impl Into<String>) -> Self {
        Self {
            kind,
            raw: raw.into(),
        }
    }
}

/// Token with its source text and position
///
/// Fields are private so a token cannot change once the tokenizer has
/// produced it. `raw` always holds the exact source text, decorations
/// included, so `raw` of every token concatenated rebuilds the line.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    raw: String,
    position: usize,
    decorations: Vec<Decoration>,
}

impl Token {
    pub fn new(kind: TokenKind, raw: impl Into<String>, position: usize) -> Self {
        Self {
            kind,
            raw: raw.into(),
            position,
            decorations: Vec::new(),
        }
    }

    /// Build a note-like token (swara or rest) from its base letter and
    /// decorations. `raw` is derived so it always matches the parts.
    pub fn with_decorations(
        kind: TokenKind,
        base: char,
        decorations: Vec<Decoration>,
        position: usize,
    ) -> Self {
        let mut raw = String::new();
        raw.push(base);
        for decoration in &decorations {
            raw.push_str(&decoration.raw);
        }
        Self {
            kind,
            raw,
            position,
            decorations,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Character index of the token's first character in the source line
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn decorations(&self) -> &[Decoration] {
        &self.decorations
    }

    /// First character of the token (the swara or rest letter for notes)
    pub fn base(&self) -> Option<char> {
        self.raw.chars().next()
    }

    pub fn is_note(&self) -> bool {
        matches!(self.kind, TokenKind::Swara | TokenKind::Rest)
    }

    /// True when the token ends with an attached tie
    pub fn is_tied(&self) -> bool {
        self.decorations
            .last()
            .map(|d| d.kind == DecorationKind::Tie)
            .unwrap_or(false)
    }

    /// Number of characters in the token
    pub fn len(&self) -> usize {
        self.raw.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}
