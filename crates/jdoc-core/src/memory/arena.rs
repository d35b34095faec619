//! Bump arena for string storage
//!
//! The arena hands out [`StrRef`] handles into coarse-grained blocks and
//! releases everything at once. Nothing is ever freed per-allocation: the
//! document model and the interner copy every key, value string and
//! identifier in here and drop the whole session in one call.

use serde::{Deserialize, Serialize};

/// Default capacity of a freshly grown block
pub const ARENA_BLOCK_SIZE: usize = 1024 * 1024;

/// Handle to a string allocated in an [`Arena`]
///
/// Only meaningful together with the arena that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StrRef {
    block: u32,
    start: u32,
    len: u32,
}

impl StrRef {
    /// Length in bytes of the referenced string
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Whether the referenced string is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Bump allocator over growable blocks
///
/// When a request does not fit in the current block's remaining capacity, a
/// new block sized `max(block_size, requested)` is pushed and bumping resumes
/// from its start. Blocks never reallocate, so handles stay valid until
/// [`Arena::free_all`].
#[derive(Debug)]
pub struct Arena {
    blocks: Vec<String>,
    block_size: usize,
}

impl Arena {
    /// Create an empty arena with the default block size
    pub fn new() -> Self {
        Self::with_block_size(ARENA_BLOCK_SIZE)
    }

    /// Create an empty arena with a custom block size (mostly for tests)
    pub fn with_block_size(block_size: usize) -> Self {
        Arena {
            blocks: Vec::new(),
            block_size,
        }
    }

    /// Copy `text` into the arena and return a handle to the copy
    pub fn alloc_str(&mut self, text: &str) -> StrRef {
        let fits = self
            .blocks
            .last()
            .is_some_and(|block| block.capacity() - block.len() >= text.len());
        if !fits {
            self.grow(text.len());
        }

        // grow() guarantees a block with enough spare capacity
        let block_index = self.blocks.len() - 1;
        let block = &mut self.blocks[block_index];
        let start = block.len();
        block.push_str(text);

        StrRef {
            block: block_index as u32,
            start: start as u32,
            len: text.len() as u32,
        }
    }

    /// Resolve a handle produced by this arena
    pub fn get(&self, r: StrRef) -> &str {
        let block = &self.blocks[r.block as usize];
        &block[r.start as usize..r.start as usize + r.len as usize]
    }

    /// Release every block; the arena is afterwards empty and reusable.
    ///
    /// Invalidates every [`StrRef`] handed out so far.
    pub fn free_all(&mut self) {
        self.blocks.clear();
        self.blocks.shrink_to_fit();
    }

    /// Bytes currently in use across all blocks
    pub fn allocated_bytes(&self) -> usize {
        self.blocks.iter().map(String::len).sum()
    }

    /// Number of blocks allocated so far
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    fn grow(&mut self, min_size: usize) {
        let size = self.block_size.max(min_size);
        self.blocks.push(String::with_capacity(size));
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_and_get() {
        let mut arena = Arena::new();
        let a = arena.alloc_str("hello");
        let b = arena.alloc_str("world");
        assert_eq!(arena.get(a), "hello");
        assert_eq!(arena.get(b), "world");
    }

    #[test]
    fn test_distinct_handles_for_equal_content() {
        let mut arena = Arena::new();
        let a = arena.alloc_str("same");
        let b = arena.alloc_str("same");
        assert_ne!(a, b);
        assert_eq!(arena.get(a), arena.get(b));
    }

    #[test]
    fn test_block_growth() {
        let mut arena = Arena::with_block_size(8);
        let a = arena.alloc_str("12345");
        let b = arena.alloc_str("6789");
        assert!(arena.block_count() >= 2, "second alloc must not fit block one");
        assert_eq!(arena.get(a), "12345");
        assert_eq!(arena.get(b), "6789");
    }

    #[test]
    fn test_oversized_request_gets_own_block() {
        let mut arena = Arena::with_block_size(4);
        let big = "a".repeat(64);
        let r = arena.alloc_str(&big);
        assert_eq!(arena.get(r), big);
    }

    #[test]
    fn test_handles_survive_growth() {
        let mut arena = Arena::with_block_size(16);
        let refs: Vec<(StrRef, String)> = (0..100)
            .map(|i| {
                let s = format!("string-{i}");
                (arena.alloc_str(&s), s)
            })
            .collect();
        for (r, s) in refs {
            assert_eq!(arena.get(r), s);
        }
    }

    #[test]
    fn test_free_all_resets() {
        let mut arena = Arena::with_block_size(16);
        let _ = arena.alloc_str("data");
        arena.free_all();
        assert_eq!(arena.block_count(), 0);
        assert_eq!(arena.allocated_bytes(), 0);

        let r = arena.alloc_str("reused");
        assert_eq!(arena.get(r), "reused");
    }

    #[test]
    fn test_empty_string() {
        let mut arena = Arena::new();
        let r = arena.alloc_str("");
        assert!(r.is_empty());
        assert_eq!(arena.get(r), "");
    }
}
