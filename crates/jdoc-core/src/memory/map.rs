//! Open-addressing hash table keyed by 64-bit string hashes
//!
//! Both users of this table (the interner and each object's field index)
//! key it by the hash of a byte string and layer content equality on top by
//! chaining same-hash entries through their own link fields. The table
//! therefore stores the hash itself as the key; a key of zero marks an
//! empty slot, which is safe because [`str_hash`] never returns zero.

const FNV_INIT: u64 = 14_695_981_039_346_656_037;
const FNV_MUL: u64 = 1_099_511_628_211;

/// FNV-1a 64-bit hash over a byte sequence
pub fn fnv1a(bytes: &[u8]) -> u64 {
    let mut h = FNV_INIT;
    for &b in bytes {
        h ^= u64::from(b);
        h = h.wrapping_mul(FNV_MUL);
    }
    h
}

/// Hash for string keys: FNV-1a with the low bit forced to 1, so the result
/// is never zero and never collides with the empty-slot sentinel
pub fn str_hash(text: &str) -> u64 {
    fnv1a(text.as_bytes()) | 1
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    key: u64,
    val: u32,
}

const EMPTY: Entry = Entry { key: 0, val: 0 };

/// Open-addressing map from non-zero hash keys to `u32` values
///
/// Linear probing, capacity always a power of two, load factor kept below
/// one half. Entries are never deleted; putting an existing key overwrites
/// its value in place.
#[derive(Debug, Default)]
pub struct RawMap {
    entries: Vec<Entry>,
    len: usize,
}

impl RawMap {
    /// Create an empty map; no storage is allocated until the first `put`
    pub fn new() -> Self {
        RawMap {
            entries: Vec::new(),
            len: 0,
        }
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the map holds no entries
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current slot capacity (zero or a power of two)
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    /// Look up `key`, which must be non-zero
    pub fn get(&self, key: u64) -> Option<u32> {
        debug_assert_ne!(key, 0);
        if self.len == 0 {
            return None;
        }
        let mask = self.entries.len() - 1;
        let mut i = (key as usize) & mask;
        loop {
            let entry = self.entries[i];
            if entry.key == key {
                return Some(entry.val);
            } else if entry.key == 0 {
                return None;
            }
            i = (i + 1) & mask;
        }
    }

    /// Insert or overwrite `key` (non-zero) with `val`
    pub fn put(&mut self, key: u64, val: u32) {
        debug_assert_ne!(key, 0);
        if 2 * self.len >= self.entries.len() {
            self.grow(2 * self.entries.len());
        }
        let mask = self.entries.len() - 1;
        let mut i = (key as usize) & mask;
        loop {
            let entry = &mut self.entries[i];
            if entry.key == 0 {
                self.len += 1;
                *entry = Entry { key, val };
                return;
            } else if entry.key == key {
                entry.val = val;
                return;
            }
            i = (i + 1) & mask;
        }
    }

    fn grow(&mut self, new_cap: usize) {
        let new_cap = new_cap.max(16);
        let old = std::mem::replace(&mut self.entries, vec![EMPTY; new_cap]);
        self.len = 0;
        for entry in old {
            if entry.key != 0 {
                self.put(entry.key, entry.val);
            }
        }
    }
}
