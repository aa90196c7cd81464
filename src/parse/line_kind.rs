//! Line classification
//!
//! Each physical line is classified once from its leading syntax. The
//! classification picks the tokenizer mode; there are no mode changes within
//! a line.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{LineKind, SwaraMapping};

/// ABC information field: one letter (or `+` continuation) and a colon
static HEADER_FIELD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z+]:").expect("valid header regex"));

/// ABC aligned lyric line; `W:` trailing words are an ordinary header field
static LYRIC_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^w:").expect("valid lyric regex"));

/// Lines that look like a header but are not one: `T :x` or `Title: x`
static HEADER_LOOKALIKE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[A-Za-z][ \t]+:(?:[^|]|$)|(?P<word>[A-Za-z]{2,}):\s)").expect("valid lookalike regex")
});

/// Result of classifying a line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineClass {
    Blank,
    Comment,
    Header,
    Lyric,
    /// Header-like text that does not match the header syntax
    MalformedHeader,
    Music,
}

impl LineClass {
    /// Line kind recorded on the notation line
    pub fn line_kind(&self) -> LineKind {
        match self {
            LineClass::Blank => LineKind::Blank,
            LineClass::Comment => LineKind::Comment,
            LineClass::Header => LineKind::Header,
            LineClass::Lyric => LineKind::Lyric,
            // Passed through untouched, so it behaves like a header
            LineClass::MalformedHeader => LineKind::Header,
            LineClass::Music => LineKind::Music,
        }
    }
}

/// Classify a raw line
pub fn classify_line(line: &str) -> LineClass {
    if line.trim().is_empty() {
        return LineClass::Blank;
    }
    if line.starts_with('%') {
        return LineClass::Comment;
    }
    if LYRIC_LINE.is_match(line) {
        return LineClass::Lyric;
    }
    if HEADER_FIELD.is_match(line) {
        return LineClass::Header;
    }
    if is_header_lookalike(line) {
        return LineClass::MalformedHeader;
    }
    LineClass::Music
}

fn is_header_lookalike(line: &str) -> bool {
    let Some(caps) = HEADER_LOOKALIKE.captures(line) else {
        return false;
    };
    match caps.name("word") {
        // A word made only of swaras and rests is music (e.g. `SR: ...`)
        Some(word) => word
            .as_str()
            .chars()
            .any(|c| !SwaraMapping::is_swara(c) && !matches!(c, 'z' | 'Z' | 'x' | 'X')),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers() {
        assert_eq!(classify_line("X:1"), LineClass::Header);
        assert_eq!(classify_line("T:Sri Govinda"), LineClass::Header);
        assert_eq!(classify_line("M:4/4"), LineClass::Header);
        assert_eq!(classify_line("K:C"), LineClass::Header);
        assert_eq!(classify_line("+:continued"), LineClass::Header);
    }

    #[test]
    fn test_lyrics_before_headers() {
        assert_eq!(classify_line("w:sa ri ga ma"), LineClass::Lyric);
        assert_eq!(classify_line("W:verse two"), LineClass::Header);
    }

    #[test]
    fn test_blank_and_comment() {
        assert_eq!(classify_line(""), LineClass::Blank);
        assert_eq!(classify_line("   "), LineClass::Blank);
        assert_eq!(classify_line("% arohanam"), LineClass::Comment);
        assert_eq!(classify_line("%%score"), LineClass::Comment);
    }

    #[test]
    fn test_repeat_bar_is_music() {
        assert_eq!(classify_line("|: S R G M :|"), LineClass::Music);
        assert_eq!(classify_line("S R G M |"), LineClass::Music);
    }

    #[test]
    fn test_malformed_headers() {
        assert_eq!(classify_line("T :Title"), LineClass::MalformedHeader);
        assert_eq!(classify_line("Title: Sri Govinda"), LineClass::MalformedHeader);
        assert_eq!(classify_line("SR: S R"), LineClass::Music);
        assert_eq!(classify_line("S :| R G"), LineClass::Music);
        assert_eq!(LineClass::MalformedHeader.line_kind(), LineKind::Header);
    }
}
