//! Swara annotations for the `*-swaras` variants
//!
//! Labels are attached per swara token. A swara that continues a tie from the
//! previous note gets no label of its own: in the lyric style it holds the
//! previous label with `_`, in the inline style it is left bare. Tie state
//! carries across lines so a note tied over a line break is handled too.
//! Chords get one label and grace notes none, matching `w:` alignment.

use crate::models::{LabelStyle, NotationLine, SwaraMapping, Token, TokenKind};

use super::errors::ConversionError;
use super::mapper::{map_swara, map_token};

/// Hold marker for a tied continuation in a `w:` line
const HOLD: &str = "_";

/// Stateful annotator; one per rendered variant
#[derive(Debug, Default)]
pub struct Annotator {
    label_style: LabelStyle,
    pending_tie: bool,
}

impl Annotator {
    pub fn new(label_style: LabelStyle) -> Self {
        Self {
            label_style,
            pending_tie: false,
        }
    }

    /// Advance tie state over one token; returns true when the token is a
    /// swara continuing a tie
    fn step(&mut self, token: &Token) -> bool {
        match token.kind() {
            TokenKind::Swara | TokenKind::Rest => {
                let continues = self.pending_tie && token.kind() == TokenKind::Swara;
                self.pending_tie = token.is_tied();
                continues
            }
            TokenKind::Tie => {
                self.pending_tie = true;
                false
            }
            _ => false,
        }
    }

    fn label(&self, token: &Token) -> String {
        token
            .base()
            .and_then(|base| SwaraMapping::label(base, self.label_style))
            .unwrap_or_else(|| token.raw().to_string())
    }

    /// `w:` line carrying one label per sung swara of a music line
    ///
    /// Returns `None` for lines without swaras. A CRLF line gets a CRLF label
    /// line.
    pub fn label_line(&mut self, line: &NotationLine) -> Option<String> {
        let sung = line.sung_notes();
        let mut labels = Vec::with_capacity(sung.len());
        for (index, token) in line.tokens.iter().enumerate() {
            let continues = self.step(token);
            if !sung.iter().any(|note| note.index == index) {
                continue;
            }
            if continues {
                labels.push(HOLD.to_string());
            } else {
                labels.push(self.label(token));
            }
        }

        if labels.is_empty() {
            return None;
        }
        let mut out = format!("w:{}", labels.join(" "));
        if line.ends_with_cr() {
            out.push('\r');
        }
        Some(out)
    }

    /// Mapped line with a below-note annotation (`"_S"C`) before each sung
    /// swara; a chord carries its annotation in front of the `[`
    pub fn inline_line(&mut self, line: &NotationLine) -> Result<String, ConversionError> {
        let sung = line.sung_notes();
        let mut out = String::new();
        for (index, token) in line.tokens.iter().enumerate() {
            let chord = sung.iter().find(|note| note.anchor == index && note.index != index);
            if let Some(note) = chord {
                if !self.pending_tie {
                    out.push_str(&self.annotation(&line.tokens[note.index]));
                }
            }

            let continues = self.step(token);
            if token.kind() == TokenKind::Swara {
                let own_anchor = sung.iter().any(|note| note.index == index && note.anchor == index);
                if own_anchor && !continues {
                    out.push_str(&self.annotation(token));
                }
                out.push_str(&map_swara(token, line.number)?);
            } else {
                out.push_str(&map_token(token, line.number)?);
            }
        }
        Ok(out)
    }

    fn annotation(&self, token: &Token) -> String {
        format!("\"_{}\"", self.label(token))
    }
}
