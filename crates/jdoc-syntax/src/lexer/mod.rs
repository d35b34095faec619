//! JSON lexer - tokenization with interning and one-token lookahead
//!
//! ```rust
//! use jdoc_syntax::lexer::lex;
//!
//! let tokens = lex("{\"key\": 42}").unwrap();
//! for (token, span) in tokens {
//!     println!("{:?} at {}:{}", token, span.start_line, span.start_column);
//! }
//! ```

pub mod lexer;
pub mod token;


pub use lexer::{lex, Lexer};
pub use token::{Token, TokenKind};
