//! Memory subsystem: arena allocation, raw hashing, string interning
//!
//! These are the allocation primitives everything else builds on. The arena
//! owns all string bytes for a session and releases them in bulk; the raw
//! map is the open-addressing table used both for field lookup and for
//! interning; the interner canonicalizes identifier strings on top of both.

pub mod arena;
pub mod intern;
pub mod map;

pub use arena::{Arena, StrRef, ARENA_BLOCK_SIZE};
pub use intern::{Interner, Sym, KW_FALSE, KW_NULL, KW_TRUE};
pub use map::{fnv1a, str_hash, RawMap};
