//! The tagged value type
//!
//! Exactly one payload is active per value; every consumption site matches
//! exhaustively. String payloads are handles into the owning document's
//! arena, array elements and nested objects are handles into its pools, so
//! a `JsonValue` is only meaningful together with its [`JsonDocument`].
//!
//! [`JsonDocument`]: super::JsonDocument

use super::{ObjectId, ValueId};
use crate::memory::StrRef;

/// A JSON value node
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    /// 32-bit signed integer
    Int(i32),
    /// Double-precision float
    Float(f64),
    /// UTF-8 string stored in the document arena
    Str(StrRef),
    /// Boolean
    Bool(bool),
    /// Ordered sequence of owned elements
    Array(Vec<ValueId>),
    /// Nested object
    Object(ObjectId),
    /// Explicit null
    Null,
}

impl JsonValue {
    /// Get the type name of this value (used in type-mismatch diagnostics)
    pub fn type_name(&self) -> &'static str {
        match self {
            JsonValue::Int(_) => "integer",
            JsonValue::Float(_) => "float",
            JsonValue::Str(_) => "string",
            JsonValue::Bool(_) => "bool",
            JsonValue::Array(_) => "array",
            JsonValue::Object(_) => "object",
            JsonValue::Null => "null",
        }
    }

    /// Check if value is an integer
    pub fn is_int(&self) -> bool {
        matches!(self, JsonValue::Int(_))
    }

    /// Check if value is a float
    pub fn is_float(&self) -> bool {
        matches!(self, JsonValue::Float(_))
    }

    /// Check if value is a string
    pub fn is_str(&self) -> bool {
        matches!(self, JsonValue::Str(_))
    }

    /// Check if value is a boolean
    pub fn is_bool(&self) -> bool {
        matches!(self, JsonValue::Bool(_))
    }

    /// Check if value is an array
    pub fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    /// Check if value is an object
    pub fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    /// Check if this is the null value
    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }
}
