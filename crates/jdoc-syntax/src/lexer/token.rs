//! Token definitions for the JSON lexer
//!
//! Number tokens carry their parsed value (the integer/float split is made
//! here, not in the parser), string tokens carry their unescaped content,
//! and name tokens carry an interned symbol so the parser's keyword check is
//! a symbol compare instead of a string compare.

use compact_str::CompactString;
use jdoc_core::memory::Sym;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A lexical token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Token {
    /// Integer literal (decimal, hex `0x`, binary `0b` or octal `0…`)
    Int(i32),
    /// Float literal
    Float(f64),
    /// String literal, escapes already processed
    Str(CompactString),
    /// Name or keyword, interned
    Name(Sym),
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// Any byte the lexer does not recognize, passed through so the parser
    /// can report what it actually found
    Unexpected(char),
    /// End of input
    Eof,
}

/// Fieldless mirror of [`Token`] used for lookahead checks and
/// expected-token diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    Int,
    Float,
    Str,
    Name,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Colon,
    Comma,
    Unexpected,
    Eof,
}

impl Token {
    /// The kind of this token
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Int(_) => TokenKind::Int,
            Token::Float(_) => TokenKind::Float,
            Token::Str(_) => TokenKind::Str,
            Token::Name(_) => TokenKind::Name,
            Token::LBrace => TokenKind::LBrace,
            Token::RBrace => TokenKind::RBrace,
            Token::LBracket => TokenKind::LBracket,
            Token::RBracket => TokenKind::RBracket,
            Token::Colon => TokenKind::Colon,
            Token::Comma => TokenKind::Comma,
            Token::Unexpected(_) => TokenKind::Unexpected,
            Token::Eof => TokenKind::Eof,
        }
    }

    /// How this token reads in a diagnostic ("got …")
    pub fn describe(&self) -> CompactString {
        match self {
            Token::Unexpected(c) => CompactString::from(format!("'{c}'")),
            other => CompactString::from(other.kind().name()),
        }
    }
}

impl TokenKind {
    /// How this kind reads in a diagnostic ("expected token …")
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Int | TokenKind::Float => "number",
            TokenKind::Str => "string",
            TokenKind::Name => "name",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::LBracket => "'['",
            TokenKind::RBracket => "']'",
            TokenKind::Colon => "':'",
            TokenKind::Comma => "','",
            TokenKind::Unexpected => "unexpected character",
            TokenKind::Eof => "end of file",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Int(i) => write!(f, "{i}"),
            Token::Float(x) => write!(f, "{x}"),
            Token::Str(s) => write!(f, "\"{s}\""),
            Token::LBrace => write!(f, "{{"),
            Token::RBrace => write!(f, "}}"),
            Token::LBracket => write!(f, "["),
            Token::RBracket => write!(f, "]"),
            Token::Colon => write!(f, ":"),
            Token::Comma => write!(f, ","),
            Token::Unexpected(c) => write!(f, "{c}"),
            Token::Name(_) => write!(f, "name"),
            Token::Eof => write!(f, "end of file"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(Token::Int(1).kind(), TokenKind::Int);
        assert_eq!(Token::Float(1.0).kind(), TokenKind::Float);
        assert_eq!(Token::Colon.kind(), TokenKind::Colon);
        assert_eq!(Token::Eof.kind(), TokenKind::Eof);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(TokenKind::Int.name(), "number");
        assert_eq!(TokenKind::Float.name(), "number");
        assert_eq!(TokenKind::Str.name(), "string");
        assert_eq!(TokenKind::RBrace.name(), "'}'");
        assert_eq!(TokenKind::Eof.name(), "end of file");
    }

    #[test]
    fn test_describe_unexpected() {
        assert_eq!(Token::Unexpected('%').describe(), "'%'");
        assert_eq!(Token::Int(5).describe(), "number");
    }
}
