//! Recursive-descent parser building a document tree
//!
//! One mutually recursive pair, `parse_value` / `parse_object`, with array
//! parsing inline in `parse_value`. Cursor discipline: a value parse is
//! entered with the value's first token current and returns with the cursor
//! past the value's last token; an object parse leaves the closing `}`
//! current for the value layer to consume.

use crate::lexer::{Lexer, Token, TokenKind};
use jdoc_core::errors::{JsonError, JsonResultI, ParseError};
use jdoc_core::memory::{KW_FALSE, KW_NULL, KW_TRUE};
use jdoc_core::{FieldId, JsonDocument, ObjectId, ValueId};

/// Parser over one source text, building into its own document session
#[derive(Debug)]
pub struct Parser<'src> {
    lexer: Lexer<'src>,
    doc: JsonDocument,
}

/// Parse a JSON text into a document.
///
/// A text that does not open with `{` yields a document with no root — an
/// absent result, not an error. Any lexical or syntactic failure yields an
/// error and no document.
pub fn parse(source: &str) -> JsonResultI<JsonDocument> {
    Parser::new(source)?.parse_document()
}

impl<'src> Parser<'src> {
    /// Create a parser; the first token is read here
    pub fn new(source: &'src str) -> JsonResultI<Self> {
        Ok(Parser {
            lexer: Lexer::new(source)?,
            doc: JsonDocument::new(),
        })
    }

    /// Parse the whole document
    pub fn parse_document(mut self) -> JsonResultI<JsonDocument> {
        if self.lexer.match_kind(TokenKind::LBrace)? {
            let root = self.parse_object()?;
            self.lexer.expect(TokenKind::RBrace)?;
            self.doc.set_root(root);
        }
        Ok(self.doc)
    }

    fn parse_value(&mut self) -> JsonResultI<ValueId> {
        let value = match self.lexer.current() {
            Token::Str(text) => {
                let text = text.clone();
                self.doc.value_string(&text)
            }
            Token::Int(val) => {
                let val = *val;
                self.doc.value_int(val)
            }
            Token::Float(val) => {
                let val = *val;
                self.doc.value_float(val)
            }
            Token::Name(sym) => {
                let sym = *sym;
                if sym == KW_TRUE {
                    self.doc.value_bool(true)
                } else if sym == KW_FALSE {
                    self.doc.value_bool(false)
                } else if sym == KW_NULL {
                    self.doc.value_null()
                } else {
                    return Err(JsonError::Parse(
                        ParseError::UnexpectedName(self.lexer.resolve(sym).into()),
                        self.lexer.span(),
                    ));
                }
            }
            Token::LBracket => {
                let array = self.doc.value_array(&[]);
                self.lexer.advance()?;
                if !self.lexer.is(TokenKind::RBracket) {
                    loop {
                        let elem = self.parse_value()?;
                        self.doc.array_push(array, elem)?;
                        if !self.lexer.is(TokenKind::Comma) {
                            if self.lexer.is(TokenKind::RBracket) {
                                break;
                            }
                            return Err(self.lexer.unexpected(TokenKind::RBracket.name()));
                        }
                        self.lexer.advance()?;
                    }
                }
                array
            }
            Token::LBrace => {
                self.lexer.advance()?;
                let object = self.parse_object()?;
                self.doc.value_object(Some(object))
            }
            _ => return Err(self.lexer.unexpected("value")),
        };
        // Move the cursor past the value's last token
        self.lexer.advance()?;
        Ok(value)
    }

    fn parse_field(&mut self) -> JsonResultI<FieldId> {
        let key = match self.lexer.current() {
            Token::Str(key) => key.clone(),
            _ => return Err(self.lexer.unexpected(TokenKind::Str.name())),
        };
        self.lexer.advance()?;
        self.lexer.expect(TokenKind::Colon)?;
        let value = self.parse_value()?;
        Ok(self.doc.field(&key, value))
    }

    fn parse_object(&mut self) -> JsonResultI<ObjectId> {
        let object = self.doc.make_object(&[]);
        if self.lexer.is(TokenKind::RBrace) {
            // Empty object; the closing brace stays current for the caller
            return Ok(object);
        }
        loop {
            let field = self.parse_field()?;
            self.doc.put_field(object, field);
            if self.lexer.is(TokenKind::RBrace) {
                break;
            }
            self.lexer.expect(TokenKind::Comma)?;
        }
        Ok(object)
    }
}
