//! JSON parser - recursive descent over the lexer's token stream
//!
//! Converts JSON text into a [`jdoc_core::JsonDocument`] tree. The grammar:
//!
//! ```text
//! value  := STRING | INT | FLOAT | "true" | "false" | "null" | array | object
//! array  := '[' (value (',' value)*)? ']'
//! object := '{' (field (',' field)*)? '}'
//! field  := STRING ':' value
//! ```
//!
//! The top level must open with `{`; anything else yields a document with no
//! root rather than a partial tree.

pub mod parser;


pub use parser::{parse, Parser};
