//! JSON printer - serializes a document tree back to text
//!
//! Walks the tree recursively into a growable buffer and returns the
//! finished text as an independently owned `String`. Each object's `pretty`
//! attribute selects whether its braces and fields are laid out with
//! newline-and-indent or packed; nesting depth is passed down the walk as an
//! explicit parameter. Arrays always print inline. String output is escaped
//! with the exact inverse of the lexer's escape table, so printed documents
//! parse back to equal trees.

use jdoc_core::{JsonDocument, JsonValue, ObjectId, ValueId};
use std::fmt::Write;

/// Serialize a whole document from its root object.
///
/// A document without a root yields the empty string.
pub fn print_document(doc: &JsonDocument) -> String {
    match doc.root() {
        Some(root) => {
            let mut out = String::new();
            write_object(doc, root, 0, &mut out);
            out
        }
        None => String::new(),
    }
}

/// Serialize a single value subtree
pub fn print_value(doc: &JsonDocument, value: ValueId) -> String {
    let mut out = String::new();
    write_value(doc, value, 0, &mut out);
    out
}

fn write_value(doc: &JsonDocument, value: ValueId, depth: usize, out: &mut String) {
    match doc.value(value) {
        JsonValue::Int(val) => {
            let _ = write!(out, "{val}");
        }
        JsonValue::Float(val) => {
            let _ = write!(out, "{val:.6}");
        }
        JsonValue::Str(_) => write_string(doc.str_or_default(value), out),
        JsonValue::Bool(true) => out.push_str("true"),
        JsonValue::Bool(false) => out.push_str("false"),
        JsonValue::Null => out.push_str("null"),
        JsonValue::Array(elems) => {
            out.push('[');
            for (i, &elem) in elems.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(doc, elem, depth, out);
            }
            out.push(']');
        }
        JsonValue::Object(object) => write_object(doc, *object, depth, out),
    }
}

fn write_object(doc: &JsonDocument, object: ObjectId, depth: usize, out: &mut String) {
    out.push('{');
    let fields = doc.fields(object);
    if !fields.is_empty() {
        let pretty = doc.pretty(object);
        for (i, &field) in fields.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            if pretty {
                write_newline(depth + 1, out);
            }
            write_string(doc.field_key(field), out);
            out.push(':');
            if pretty {
                out.push(' ');
            }
            write_value(doc, doc.field_value(field), depth + 1, out);
        }
        if pretty {
            write_newline(depth, out);
        }
    }
    out.push('}');
}

fn write_newline(depth: usize, out: &mut String) {
    out.push('\n');
    for _ in 0..depth {
        out.push_str("  ");
    }
}

/// Quote and escape a string with the inverse of the lexer's escape table
fn write_string(text: &str, out: &mut String) {
    out.push('"');
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\x0B' => out.push_str("\\v"),
            '\x08' => out.push_str("\\b"),
            '\x07' => out.push_str("\\a"),
            '\0' => out.push_str("\\0"),
            other => out.push(other),
        }
    }
    out.push('"');
}
