//! String interner
//!
//! Deduplicates identifier and keyword strings into a single canonical copy
//! per distinct content, backed by its own [`Arena`] and a [`RawMap`] from
//! content hash to the head of a collision chain. Two `intern` calls with
//! byte-identical content return the identical [`Sym`] — the lexer's keyword
//! check depends on this to be a symbol-range test instead of a string
//! compare.

use super::arena::{Arena, StrRef};
use super::map::{str_hash, RawMap};
use serde::{Deserialize, Serialize};

/// Canonical id of an interned string, unique per content within one session
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Sym(u32);

/// The keyword `false`, always the first interned symbol
pub const KW_FALSE: Sym = Sym(0);
/// The keyword `true`
pub const KW_TRUE: Sym = Sym(1);
/// The keyword `null`, always the last keyword symbol
pub const KW_NULL: Sym = Sym(2);

#[derive(Debug)]
struct InternEntry {
    text: StrRef,
    /// Previous head of the collision chain for this entry's hash
    next: Option<Sym>,
}

/// Session-scoped interning table
#[derive(Debug)]
pub struct Interner {
    arena: Arena,
    map: RawMap,
    entries: Vec<InternEntry>,
}

impl Interner {
    /// Create a table with the keywords `false`, `true`, `null` interned
    /// first, so [`Interner::is_keyword`] is a range check on symbol ids
    pub fn new() -> Self {
        let mut interner = Interner {
            arena: Arena::new(),
            map: RawMap::new(),
            entries: Vec::new(),
        };
        let false_sym = interner.intern("false");
        let true_sym = interner.intern("true");
        let null_sym = interner.intern("null");
        debug_assert_eq!(false_sym, KW_FALSE);
        debug_assert_eq!(true_sym, KW_TRUE);
        debug_assert_eq!(null_sym, KW_NULL);
        interner
    }

    /// Intern `text`, returning the canonical symbol for its content
    pub fn intern(&mut self, text: &str) -> Sym {
        let hash = str_hash(text);
        let head = self.map.get(hash).map(Sym);

        let mut cursor = head;
        while let Some(sym) = cursor {
            let entry = &self.entries[sym.0 as usize];
            if entry.text.len() == text.len() && self.arena.get(entry.text) == text {
                return sym;
            }
            cursor = entry.next;
        }

        let text_ref = self.arena.alloc_str(text);
        let sym = Sym(self.entries.len() as u32);
        self.entries.push(InternEntry {
            text: text_ref,
            next: head,
        });
        self.map.put(hash, sym.0);
        sym
    }

    /// Resolve a symbol back to its text
    pub fn resolve(&self, sym: Sym) -> &str {
        self.arena.get(self.entries[sym.0 as usize].text)
    }

    /// Whether `sym` is one of the registered keywords
    pub fn is_keyword(&self, sym: Sym) -> bool {
        sym >= KW_FALSE && sym <= KW_NULL
    }

    /// Number of distinct strings interned so far
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty (never true: keywords are pre-interned)
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bytes of string storage currently held by the table's arena
    pub fn allocated_bytes(&self) -> usize {
        self.arena.allocated_bytes()
    }
}

impl Default for Interner {
    fn default() -> Self {
        Self::new()
    }
}
