//! Token recognition for CABC notation lines
//!
//! Music lines are scanned left to right in a single pass. Swaras and rests
//! greedily absorb their octave marks, duration and trailing tie. Anything
//! the scanner does not recognize becomes a `Literal` and is passed through
//! byte for byte, so tokenization never fails.

use crate::diagnostics::{kinds, DiagnosticMark, DiagnosticSeverity, Diagnostics};
use crate::models::{Decoration, DecorationKind, NotationLine, SwaraMapping, Token, TokenKind};

use super::line_kind::{classify_line, LineClass};

/// Characters that separate syllables on a lyric line
const LYRIC_SEPARATORS: [char; 6] = ['-', '_', '*', '|', '~', '\\'];

/// Tokenize a single line, discarding diagnostics
pub fn tokenize(line: &str) -> Vec<Token> {
    let mut diagnostics = Diagnostics::new();
    tokenize_line(1, line, &mut diagnostics).tokens
}

/// Tokenize a line and classify it
///
/// `number` is the 1-based line number used for diagnostics.
pub fn tokenize_line(number: usize, line: &str, diagnostics: &mut Diagnostics) -> NotationLine {
    let class = classify_line(line);
    let tokens = match class {
        LineClass::Blank | LineClass::Comment => whole_line(TokenKind::Literal, line),
        LineClass::Header => whole_line(TokenKind::HeaderField, line),
        LineClass::MalformedHeader => {
            diagnostics.add(
                DiagnosticMark::new(
                    number,
                    1,
                    DiagnosticSeverity::Warning,
                    kinds::MALFORMED_HEADER,
                    "header-like line does not match `X:value`; passed through unchanged",
                )
                .with_len(line.chars().count()),
            );
            whole_line(TokenKind::Literal, line)
        }
        LineClass::Lyric => LyricScanner::new(line).scan(),
        LineClass::Music => MusicScanner::new(line, number, diagnostics).scan(),
    };

    NotationLine::new(number, class.line_kind(), tokens)
}

fn whole_line(kind: TokenKind, line: &str) -> Vec<Token> {
    if line.is_empty() {
        Vec::new()
    } else {
        vec![Token::new(kind, line, 0)]
    }
}

fn is_rest(c: char) -> bool {
    matches!(c, 'z' | 'Z' | 'x' | 'X')
}

fn is_duration_char(c: char) -> bool {
    c.is_ascii_digit() || c == '/'
}

/// Single-pass scanner for music lines
struct MusicScanner<'a> {
    chars: Vec<char>,
    pos: usize,
    line_number: usize,
    diagnostics: &'a mut Diagnostics,
    tokens: Vec<Token>,
}

impl<'a> MusicScanner<'a> {
    fn new(line: &str, line_number: usize, diagnostics: &'a mut Diagnostics) -> Self {
        Self {
            chars: line.chars().collect(),
            pos: 0,
            line_number,
            diagnostics,
            tokens: Vec::new(),
        }
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn scan(mut self) -> Vec<Token> {
        while let Some(c) = self.peek(0) {
            match c {
                '%' => self.take_until_end(),
                '"' => self.take_quoted(),
                '!' => self.take_decoration(),
                '[' => self.take_bracket(),
                '|' => self.take_bar(),
                ':' if self.peek(1) == Some('|') => self.emit(TokenKind::Bar, 2),
                '-' => self.emit(TokenKind::Tie, 1),
                '\'' | ',' => {
                    let len = self.run_len(|c| c == '\'' || c == ',');
                    self.emit(TokenKind::OctaveModifier, len);
                }
                c if is_duration_char(c) => {
                    let len = self.run_len(is_duration_char);
                    self.emit(TokenKind::DurationModifier, len);
                }
                c if SwaraMapping::is_swara(c) => self.take_note(TokenKind::Swara),
                c if is_rest(c) => self.take_note(TokenKind::Rest),
                _ => self.emit(TokenKind::Literal, 1),
            }
        }
        self.tokens
    }

    /// Length of the run of characters matching `pred` starting at `pos`
    fn run_len(&self, pred: impl Fn(char) -> bool) -> usize {
        self.chars[self.pos..].iter().take_while(|c| pred(**c)).count()
    }

    fn emit(&mut self, kind: TokenKind, len: usize) {
        let end = (self.pos + len).min(self.chars.len());
        let raw: String = self.chars[self.pos..end].iter().collect();
        self.tokens.push(Token::new(kind, raw, self.pos));
        self.pos = end;
    }

    fn find_from(&self, start: usize, target: char) -> Option<usize> {
        self.chars
            .get(start..)?
            .iter()
            .position(|c| *c == target)
            .map(|i| start + i)
    }

    fn take_until_end(&mut self) {
        let len = self.chars.len() - self.pos;
        self.emit(TokenKind::Literal, len);
    }

    /// `"..."` chord symbol or annotation
    fn take_quoted(&mut self) {
        match self.find_from(self.pos + 1, '"') {
            Some(close) => {
                let len = close - self.pos + 1;
                self.emit(TokenKind::Literal, len);
            }
            None => {
                self.diagnostics.add(
                    DiagnosticMark::new(
                        self.line_number,
                        self.pos + 1,
                        DiagnosticSeverity::Warning,
                        kinds::UNTERMINATED_QUOTE,
                        "unterminated quoted string runs to end of line",
                    )
                    .with_len(self.chars.len() - self.pos),
                );
                self.take_until_end();
            }
        }
    }

    /// `!trill!` style decoration; a lone `!` is a plain literal
    fn take_decoration(&mut self) {
        if let Some(close) = self.find_from(self.pos + 1, '!') {
            let inner = &self.chars[self.pos + 1..close];
            if !inner.is_empty() && !inner.iter().any(|c| c.is_whitespace()) {
                let len = close - self.pos + 1;
                self.emit(TokenKind::Literal, len);
                return;
            }
        }
        self.emit(TokenKind::Literal, 1);
    }

    /// `[K:D]` inline field, `[|` bar, or a chord bracket
    fn take_bracket(&mut self) {
        let inline_field = self.peek(1).map_or(false, |c| c.is_ascii_alphabetic())
            && self.peek(2) == Some(':');
        if inline_field {
            let len = match self.find_from(self.pos + 1, ']') {
                Some(close) => close - self.pos + 1,
                None => self.chars.len() - self.pos,
            };
            self.emit(TokenKind::Literal, len);
        } else if self.peek(1) == Some('|') {
            self.emit(TokenKind::Bar, 2);
        } else {
            self.emit(TokenKind::Literal, 1);
        }
    }

    fn take_bar(&mut self) {
        let len = match self.peek(1) {
            Some('|') | Some(':') | Some(']') => 2,
            _ => 1,
        };
        self.emit(TokenKind::Bar, len);
    }

    /// Swara or rest with its attached octave marks, duration and tie
    fn take_note(&mut self, kind: TokenKind) {
        let start = self.pos;
        let base = self.chars[start];
        self.pos += 1;

        let mut decorations = Vec::new();
        while let Some(c) = self.peek(0) {
            let (decoration_kind, len) = match c {
                '\'' => (DecorationKind::OctaveUp, self.run_len(|c| c == '\'')),
                ',' => (DecorationKind::OctaveDown, self.run_len(|c| c == ',')),
                c if is_duration_char(c) => (DecorationKind::Duration, self.run_len(is_duration_char)),
                _ => break,
            };
            let raw: String = self.chars[self.pos..self.pos + len].iter().collect();
            decorations.push(Decoration::new(decoration_kind, raw));
            self.pos += len;
        }
        if self.peek(0) == Some('-') {
            decorations.push(Decoration::new(DecorationKind::Tie, "-"));
            self.pos += 1;
        }

        self.tokens
            .push(Token::with_decorations(kind, base, decorations, start));
    }
}

/// Scanner for `w:` lyric lines
struct LyricScanner {
    chars: Vec<char>,
}

impl LyricScanner {
    fn new(line: &str) -> Self {
        Self {
            chars: line.chars().collect(),
        }
    }

    fn is_separator(c: char) -> bool {
        c.is_whitespace() || LYRIC_SEPARATORS.contains(&c)
    }

    fn scan(self) -> Vec<Token> {
        let mut tokens = Vec::new();
        // The `w:` marker itself
        let prefix: String = self.chars.iter().take(2).collect();
        tokens.push(Token::new(TokenKind::Literal, prefix, 0));

        let mut pos = 2;
        while pos < self.chars.len() {
            let c = self.chars[pos];
            if Self::is_separator(c) {
                tokens.push(Token::new(TokenKind::Literal, c.to_string(), pos));
                pos += 1;
                continue;
            }
            let len = self.chars[pos..]
                .iter()
                .take_while(|c| !Self::is_separator(**c))
                .count();
            let raw: String = self.chars[pos..pos + len].iter().collect();
            tokens.push(Token::new(TokenKind::LyricSyllable, raw, pos));
            pos += len;
        }
        tokens
    }
}
