//! Error types and diagnostics for jdoc
//!
//! This module provides the error handling system for the whole library:
//! - Parameterized error types with span information
//! - Distinct taxonomies for lexical, syntactic and typed-access failures
//!
//! A failed parse never yields a partial document: the caller either gets a
//! complete tree or one of these errors.

use crate::shared::SpanInfo;
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lexer errors
#[derive(Debug, Clone, Error, PartialEq, Serialize, Deserialize)]
pub enum LexerError {
    #[error("Invalid token: {0}")]
    InvalidToken(CompactString),
    #[error("Unterminated string")]
    UnterminatedString,
    #[error("String literal cannot contain newline")]
    NewlineInString,
    #[error("Invalid string literal escape '\\{0}'")]
    InvalidEscape(char),
    #[error("Invalid number: {0}")]
    InvalidNumber(CompactString),
    #[error("Digit '{digit}' out of range for base {base}")]
    DigitOutOfRange { digit: char, base: u64 },
    #[error("Integer literal overflow")]
    IntegerOverflow,
    #[error("Expected digit after float literal exponent, found '{0}'")]
    MissingExponentDigit(char),
}

/// Parse errors
#[derive(Debug, Clone, Error, PartialEq, Serialize, Deserialize)]
pub enum ParseError {
    #[error("expected token {expected}, got {found}")]
    UnexpectedToken {
        expected: CompactString,
        found: CompactString,
    },
    #[error("Unexpected name token '{0}'")]
    UnexpectedName(CompactString),
}

/// Typed-access errors raised by the strict document accessors
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueError {
    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: CompactString,
        actual: CompactString,
    },
}

impl ValueError {
    /// Create a type mismatch error from the expected and actual type names
    pub fn type_mismatch(expected: &str, actual: &str) -> Self {
        ValueError::TypeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

/// Result type for typed document access
pub type ValueResult<T> = Result<T, ValueError>;

/// Top-level error type, parameterized over the info attached to
/// lexical/syntactic failures (a span in normal use)
#[derive(Debug, Clone, Error, PartialEq, Serialize, Deserialize)]
pub enum JsonError<Info> {
    #[error("Lexer error: {0}")]
    Lexer(LexerError, Info),

    #[error("Parse error: {0}")]
    Parse(ParseError, Info),

    #[error("Value error: {0}")]
    Value(ValueError),
}

impl<Info> JsonError<Info> {
    /// The span attached to this error, if it originated in the syntax layer
    pub fn info(&self) -> Option<&Info> {
        match self {
            JsonError::Lexer(_, info) | JsonError::Parse(_, info) => Some(info),
            JsonError::Value(_) => None,
        }
    }
}

impl<Info> From<ValueError> for JsonError<Info> {
    fn from(err: ValueError) -> Self {
        JsonError::Value(err)
    }
}

/// Error with span info attached
pub type JsonErrorI = JsonError<SpanInfo>;

/// Result alias for operations that can fail with a [`JsonError`]
pub type JsonResult<T, Info> = Result<T, JsonError<Info>>;

/// Result alias with span info attached
pub type JsonResultI<T> = Result<T, JsonErrorI>;
