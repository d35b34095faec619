//! jdoc Syntax Library
//!
//! This crate provides the text layer of the jdoc JSON document library.
//! It consolidates lexing, parsing and printing into a unified syntax
//! library:
//!
//! - **Lexer**: tokenization with string interning (`lexer` module)
//! - **Parser**: recursive-descent construction of a document tree
//!   (`parser` module)
//! - **Printer**: compact or pretty serialization back to text
//!   (`printer` module)
//!
//! This design follows common language implementation patterns where lexing
//! and parsing are tightly coupled and benefit from being in the same
//! compilation unit.
//!
//! ```rust
//! use jdoc_syntax::{parse, print_document};
//!
//! let doc = parse(r#"{"greeting": "hello", "count": 3}"#).unwrap();
//! let root = doc.root().unwrap();
//! let count = doc.field_value(doc.get_field(root, "count").unwrap());
//! assert_eq!(doc.as_int(count), Ok(3));
//! assert_eq!(print_document(&doc), r#"{"greeting":"hello","count":3}"#);
//! ```

pub mod lexer;
pub mod parser;
pub mod printer;

// Re-export common types for convenience
pub use lexer::{lex, Lexer, Token, TokenKind};
pub use parser::{parse, Parser};
pub use printer::{print_document, print_value};

// Re-export jdoc-core types that are commonly used with syntax
pub use jdoc_core::{
    JsonDocument, JsonError, JsonErrorI, JsonResultI, JsonValue, LexerError, ParseError,
    SpanInfo, ValueError,
};

/// Version information for the jdoc-syntax crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_document() {
        let result = parse(r#"{"a": 1}"#);
        assert!(result.is_ok());
    }

    #[test]
    fn test_lex_simple_document() {
        let result = lex(r#"{"a": 1}"#);
        assert!(result.is_ok());
    }
}
