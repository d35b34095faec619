//! Byte-cursor lexer with one token of lookahead
//!
//! The lexer walks the raw input with a byte cursor, keeps exactly one
//! current token, and never backtracks. Name tokens are interned on the fly
//! into the session's [`Interner`]; keywords are the symbols interned first,
//! so keyword classification downstream is a symbol compare.

use super::token::{Token, TokenKind};
use compact_str::CompactString;
use jdoc_core::errors::{JsonError, JsonErrorI, JsonResultI, LexerError, ParseError};
use jdoc_core::memory::{Interner, Sym};
use jdoc_core::shared::SpanInfo;

/// Lexer over one source text, owning the session's interning table
#[derive(Debug)]
pub struct Lexer<'src> {
    source: &'src str,
    bytes: &'src [u8],
    pos: usize,
    token: Token,
    token_start: usize,
    token_end: usize,
    interner: Interner,
}

impl<'src> Lexer<'src> {
    /// Create a lexer and read the first token
    pub fn new(source: &'src str) -> JsonResultI<Self> {
        let mut lexer = Lexer {
            source,
            bytes: source.as_bytes(),
            pos: 0,
            token: Token::Eof,
            token_start: 0,
            token_end: 0,
            interner: Interner::new(),
        };
        lexer.advance()?;
        Ok(lexer)
    }

    /// The current token
    pub fn current(&self) -> &Token {
        &self.token
    }

    /// The current token's kind
    pub fn kind(&self) -> TokenKind {
        self.token.kind()
    }

    /// The current token's source span
    pub fn span(&self) -> SpanInfo {
        SpanInfo::from_byte_offsets(self.source, self.token_start, self.token_end)
    }

    /// The session interning table
    pub fn interner(&self) -> &Interner {
        &self.interner
    }

    /// Resolve an interned name back to its text
    pub fn resolve(&self, sym: Sym) -> &str {
        self.interner.resolve(sym)
    }

    /// Read the next token, replacing the current one
    pub fn advance(&mut self) -> JsonResultI<()> {
        self.skip_whitespace();
        self.token_start = self.pos;
        self.token = self.next_token()?;
        self.token_end = self.pos;
        Ok(())
    }

    /// Whether the current token has the given kind
    pub fn is(&self, kind: TokenKind) -> bool {
        self.token.kind() == kind
    }

    /// Consume the current token if it has the given kind
    pub fn match_kind(&mut self, kind: TokenKind) -> JsonResultI<bool> {
        if self.is(kind) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consume the current token if it has the given kind, error otherwise
    pub fn expect(&mut self, kind: TokenKind) -> JsonResultI<()> {
        if self.is(kind) {
            self.advance()
        } else {
            Err(self.unexpected(kind.name()))
        }
    }

    /// Build an expected/found error naming the current token
    pub fn unexpected(&self, expected: &str) -> JsonErrorI {
        JsonError::Parse(
            ParseError::UnexpectedToken {
                expected: expected.into(),
                found: self.token.describe(),
            },
            self.span(),
        )
    }

    fn lex_error(&self, error: LexerError) -> JsonErrorI {
        JsonError::Lexer(
            error,
            SpanInfo::from_byte_offsets(self.source, self.token_start, self.pos),
        )
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while let Some(b) = self.peek() {
            match b {
                b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x08 | 0x07 => self.pos += 1,
                _ => break,
            }
        }
    }

    fn next_token(&mut self) -> JsonResultI<Token> {
        let Some(b) = self.peek() else {
            return Ok(Token::Eof);
        };
        match b {
            b'-' | b'0'..=b'9' => self.scan_number(),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => Ok(self.scan_name()),
            b'"' => self.scan_string(),
            b'{' => {
                self.pos += 1;
                Ok(Token::LBrace)
            }
            b'}' => {
                self.pos += 1;
                Ok(Token::RBrace)
            }
            b'[' => {
                self.pos += 1;
                Ok(Token::LBracket)
            }
            b']' => {
                self.pos += 1;
                Ok(Token::RBracket)
            }
            b':' => {
                self.pos += 1;
                Ok(Token::Colon)
            }
            b',' => {
                self.pos += 1;
                Ok(Token::Comma)
            }
            _ => {
                // Unrecognized byte: pass it through as its own token so the
                // parser can report what it found
                let ch = self.current_char();
                self.pos += ch.len_utf8();
                Ok(Token::Unexpected(ch))
            }
        }
    }

    fn current_char(&self) -> char {
        self.source[self.pos..].chars().next().unwrap_or('\0')
    }

    /// Dispatch between the integer and float scanners: scan ahead over the
    /// digit run; a following `.` or exponent marker selects the float
    /// branch. The sign applies to the final value in either branch.
    fn scan_number(&mut self) -> JsonResultI<Token> {
        let negative = if self.peek() == Some(b'-') {
            self.pos += 1;
            true
        } else {
            false
        };

        let digits_start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        let after_digits = self.peek();
        self.pos = digits_start;

        if after_digits == Some(b'.') || matches!(after_digits, Some(b'e' | b'E')) {
            let val = self.scan_float()?;
            Ok(Token::Float(if negative { -val } else { val }))
        } else {
            let val = self.scan_int()?;
            let val = val as i32;
            Ok(Token::Int(if negative { val.wrapping_neg() } else { val }))
        }
    }

    fn scan_int(&mut self) -> JsonResultI<u64> {
        let mut base: u64 = 10;
        if self.peek() == Some(b'0') {
            self.pos += 1;
            match self.peek().map(|b| b.to_ascii_lowercase()) {
                Some(b'x') => {
                    self.pos += 1;
                    base = 16;
                }
                Some(b'b') => {
                    self.pos += 1;
                    base = 2;
                }
                Some(b) if b.is_ascii_digit() => base = 8,
                _ => {}
            }
        }

        let mut val: u64 = 0;
        while let Some(b) = self.peek() {
            let Some(digit) = char_to_digit(b) else {
                break;
            };
            if digit >= base {
                return Err(self.lex_error(LexerError::DigitOutOfRange {
                    digit: b as char,
                    base,
                }));
            }
            if val > (u64::MAX - digit) / base {
                return Err(self.lex_error(LexerError::IntegerOverflow));
            }
            val = val * base + digit;
            self.pos += 1;
        }
        Ok(val)
    }

    fn scan_float(&mut self) -> JsonResultI<f64> {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        if self.peek() == Some(b'.') {
            self.pos += 1;
        }
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        if matches!(self.peek(), Some(b'e' | b'E')) {
            self.pos += 1;
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            if !self.peek().is_some_and(|b| b.is_ascii_digit()) {
                return Err(
                    self.lex_error(LexerError::MissingExponentDigit(self.current_char()))
                );
            }
            while self.peek().is_some_and(|b| b.is_ascii_digit()) {
                self.pos += 1;
            }
        }

        let text = &self.source[start..self.pos];
        let val: f64 = text
            .parse()
            .map_err(|_| self.lex_error(LexerError::InvalidNumber(text.into())))?;
        if val.is_infinite() {
            return Err(self.lex_error(LexerError::InvalidNumber(text.into())));
        }
        Ok(val)
    }

    fn scan_name(&mut self) -> Token {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|b| b.is_ascii_alphanumeric() || b == b'_')
        {
            self.pos += 1;
        }
        let sym = self.interner.intern(&self.source[start..self.pos]);
        Token::Name(sym)
    }

    fn scan_string(&mut self) -> JsonResultI<Token> {
        self.pos += 1; // opening quote
        let mut content = String::new();
        loop {
            let Some(b) = self.peek() else {
                return Err(self.lex_error(LexerError::UnterminatedString));
            };
            match b {
                b'"' => {
                    self.pos += 1;
                    break;
                }
                b'\n' => return Err(self.lex_error(LexerError::NewlineInString)),
                b'\\' => {
                    self.pos += 1;
                    let Some(esc) = self.peek() else {
                        return Err(self.lex_error(LexerError::UnterminatedString));
                    };
                    content.push(unescape(esc).ok_or_else(|| {
                        self.lex_error(LexerError::InvalidEscape(esc as char))
                    })?);
                    self.pos += 1;
                }
                _ if b < 0x80 => {
                    content.push(b as char);
                    self.pos += 1;
                }
                _ => {
                    let ch = self.current_char();
                    content.push(ch);
                    self.pos += ch.len_utf8();
                }
            }
        }
        Ok(Token::Str(CompactString::from(content)))
    }
}

/// The escape table: the C-style set plus literal quote and backslash
/// passthrough (the printer emits the exact inverse)
fn unescape(b: u8) -> Option<char> {
    match b {
        b'n' => Some('\n'),
        b'r' => Some('\r'),
        b't' => Some('\t'),
        b'v' => Some('\x0B'),
        b'b' => Some('\x08'),
        b'a' => Some('\x07'),
        b'0' => Some('\0'),
        b'"' => Some('"'),
        b'\\' => Some('\\'),
        _ => None,
    }
}

fn char_to_digit(b: u8) -> Option<u64> {
    match b {
        b'0'..=b'9' => Some(u64::from(b - b'0')),
        b'a'..=b'f' => Some(u64::from(b - b'a' + 10)),
        b'A'..=b'F' => Some(u64::from(b - b'A' + 10)),
        _ => None,
    }
}

/// Tokenize a whole source text, returning tokens with span information
pub fn lex(source: &str) -> JsonResultI<Vec<(Token, SpanInfo)>> {
    let mut lexer = Lexer::new(source)?;
    let mut tokens = Vec::new();
    while !lexer.is(TokenKind::Eof) {
        tokens.push((lexer.current().clone(), lexer.span()));
        lexer.advance()?;
    }
    Ok(tokens)
}
