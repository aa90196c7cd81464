//! Swara mapping and re-serialization
//!
//! Only the base letter of a swara token changes. Every other character of
//! the line, decorations included, is emitted exactly as it was read, so the
//! output has the same length and spacing as the input.

use crate::models::{NotationLine, SwaraMapping, Token, TokenKind};

use super::errors::ConversionError;

/// Western rendering of a single swara token
///
/// `line` is the 1-based line number, used only for error reporting.
pub fn map_swara(token: &Token, line: usize) -> Result<String, ConversionError> {
    let western = token
        .base()
        .and_then(|base| SwaraMapping::global().to_western(base))
        .ok_or_else(|| ConversionError::UnmappableToken {
            file: None,
            line,
            column: token.position() + 1,
            token: token.raw().to_string(),
        })?;

    let mut out = String::with_capacity(token.raw().len());
    out.push(western);
    for decoration in token.decorations() {
        out.push_str(&decoration.raw);
    }
    Ok(out)
}

/// Rendering of any token: swaras mapped, everything else verbatim
pub fn map_token(token: &Token, line: usize) -> Result<String, ConversionError> {
    match token.kind() {
        TokenKind::Swara => map_swara(token, line),
        _ => Ok(token.raw().to_string()),
    }
}

/// Re-serialize a whole line
pub fn map_line(line: &NotationLine) -> Result<String, ConversionError> {
    let mut out = String::new();
    for token in &line.tokens {
        out.push_str(&map_token(token, line.number)?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Diagnostics;
    use crate::models::LineKind;
    use crate::parse::tokenize_line;

    fn map_str(text: &str) -> String {
        let mut diagnostics = Diagnostics::new();
        let line = tokenize_line(1, text, &mut diagnostics);
        map_line(&line).unwrap()
    }

    #[test]
    fn test_map_note_sequence() {
        assert_eq!(map_str("S R G M | P D N s |"), "C D E F | G A B c |");
    }

    #[test]
    fn test_map_keeps_decorations() {
        assert_eq!(map_str("S2'-"), "C2'-");
        assert_eq!(map_str("S2 R4 G- | -G M P2 |"), "C2 D4 E- | -E F G2 |");
        assert_eq!(map_str("n,3/2 z2 P'"), "b,3/2 z2 G'");
    }

    #[test]
    fn test_lower_case_swaras() {
        assert_eq!(map_str("s r g m p d n"), "c d e f g a b");
    }

    #[test]
    fn test_header_untouched() {
        assert_eq!(map_str("T:Sri Ranga Pura"), "T:Sri Ranga Pura");
        assert_eq!(map_str("w:sa ri ga ma"), "w:sa ri ga ma");
    }

    #[test]
    fn test_non_swara_text_untouched() {
        assert_eq!(map_str("\"Dm\"S [M:3/4] !trill!R"), "\"Dm\"C [M:3/4] !trill!D");
    }

    #[test]
    fn test_unmappable_token_reports_location() {
        let line = NotationLine::new(
            7,
            LineKind::Music,
            vec![
                Token::new(TokenKind::Swara, "S", 0),
                Token::new(TokenKind::Literal, " ", 1),
                Token::new(TokenKind::Swara, "Q2", 2),
            ],
        );
        match map_line(&line) {
            Err(ConversionError::UnmappableToken {
                line,
                column,
                token,
                ..
            }) => {
                assert_eq!(line, 7);
                assert_eq!(column, 3);
                assert_eq!(token, "Q2");
            }
            other => panic!("expected UnmappableToken, got {:?}", other),
        }
    }
}
