//! jdoc Core Foundation Library
//!
//! This crate provides the foundation layer for the jdoc JSON document
//! library. It consolidates the concerns every other layer builds on:
//!
//! - **Memory**: bump arena, raw open-addressing hash table and string
//!   interner (`memory` module)
//! - **Document**: the tagged value tree, objects with an insertion-ordered
//!   field list plus hash index, and the session owning all of it
//!   (`document` module)
//! - **Errors**: error taxonomy with span information (`errors` module)
//! - **Shared**: source spans used across lexing, parsing and diagnostics
//!   (`shared` module)
//!
//! A [`JsonDocument`] is one parse/build session. All tree storage lives in
//! it and is released in bulk when it is dropped — the design the original
//! arena contract calls for, without process-wide state.

pub mod document;
pub mod errors;
pub mod memory;
pub mod shared;

// Convenience re-exports for common types
pub use document::{FieldId, JsonDocument, JsonValue, ObjectId, ValueId};
pub use errors::{
    JsonError, JsonErrorI, JsonResult, JsonResultI, LexerError, ParseError, ValueError,
    ValueResult,
};
pub use memory::{Arena, Interner, RawMap, StrRef, Sym};
pub use shared::SpanInfo;

/// Version information for the jdoc-core crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
