//! `HashTable`: string keys, separate chaining, fixed bucket array.
//!
//! The bucket array is sized once and never grows. Each bucket is created on
//! first use and holds its `(key, value)` pairs in insertion order.
//!
//! ### Append-only writes
//! [`set`](HashTable::set) never looks for an existing pair with the same key;
//! it always appends. [`get`](HashTable::get) returns the *first* match in the
//! bucket, so re-setting a key leaves the original value visible and the newer
//! pair stored but unreachable by `get`. The stale pairs still show up in
//! [`entries`](HashTable::entries), [`len`](HashTable::len) and
//! [`values`](HashTable::values). This behavior is kept on purpose; callers
//! that need overwrite semantics should use `std::collections::HashMap`.
//!
//! ### Hash function
//! A polynomial hash over at most the first [`MAX_HASHED_CHARS`] UTF-16 code
//! units, each offset by 96 so that `'a'` contributes 1. The accumulator is
//! reduced with a Euclidean remainder after every step, which keeps it in
//! `[0, size)` even for characters below `'a'`. Distribution is tuned for
//! lowercase ASCII; other input spreads less evenly.

use core::fmt;

/// Bucket count used by [`HashTable::new`].
pub const DEFAULT_SIZE: usize = 53;

/// Only this many leading code units of a key feed the hash.
pub const MAX_HASHED_CHARS: usize = 100;

const PRIME: i128 = 31;
const CHAR_OFFSET: i128 = 96;

type Bucket<V> = Vec<(String, V)>;

/// A fixed-size chained hash table from `String` keys to `V` values.
#[derive(Clone)]
pub struct HashTable<V = String> {
    buckets: Box<[Option<Bucket<V>>]>,
    len: usize,
}

impl<V> HashTable<V> {
    /// Creates a table with [`DEFAULT_SIZE`] buckets.
    pub fn new() -> Self {
        Self::with_size(DEFAULT_SIZE)
    }

    /// Creates a table with exactly `size` buckets.
    ///
    /// # Panics
    /// Panics if `size` is zero.
    pub fn with_size(size: usize) -> Self {
        assert!(size > 0, "hash table needs at least one bucket");
        Self {
            buckets: (0..size).map(|_| None).collect(),
            len: 0,
        }
    }

    /// Maps `key` to its bucket index in `[0, bucket_count())`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub fn hash(&self, key: &str) -> usize {
        let size = self.buckets.len() as i128;
        let mut total: i128 = 0;
        for unit in key.encode_utf16().take(MAX_HASHED_CHARS) {
            total = (total * PRIME + i128::from(unit) - CHAR_OFFSET).rem_euclid(size);
        }
        // `total` is in `[0, size)` and `size` came from a `usize`.
        total as usize
    }

    /// Appends `(key, value)` to the key's bucket.
    ///
    /// Existing pairs with the same key are left in place; see the module docs.
    pub fn set(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        let index = self.hash(&key);
        let bucket = self.buckets[index].get_or_insert_with(Vec::new);
        #[cfg(feature = "tracing")]
        if bucket.iter().any(|(k, _)| *k == key) {
            debug_event!(key = %key, bucket = index, "duplicate key appended");
        }
        bucket.push((key, value));
        self.len += 1;
    }

    /// Returns the first value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.buckets[self.hash(key)]
            .as_ref()?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Returns `true` if any pair is stored under `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Unique keys in bucket order, each reported at its first sighting.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = Vec::new();
        for (k, _) in self.entries() {
            if !keys.contains(&k) {
                keys.push(k);
            }
        }
        keys
    }

    /// Number of stored pairs, stale duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing has been set.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Size of the bucket array.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Number of buckets that have been created by a `set`.
    pub fn occupied_buckets(&self) -> usize {
        self.buckets.iter().filter(|b| b.is_some()).count()
    }

    /// Every stored pair, in bucket order then insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        self.buckets
            .iter()
            .flatten()
            .flatten()
            .map(|(k, v)| (k.as_str(), v))
    }
}

impl<V: PartialEq> HashTable<V> {
    /// Unique values in bucket order, each reported at its first sighting.
    ///
    /// Values shadowed by an earlier pair with the same key are included.
    pub fn values(&self) -> Vec<&V> {
        let mut values: Vec<&V> = Vec::new();
        for (_, v) in self.entries() {
            if !values.contains(&v) {
                values.push(v);
            }
        }
        values
    }
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V> Extend<(K, V)> for HashTable<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.set(k, v);
        }
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for HashTable<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<V: fmt::Debug> fmt::Debug for HashTable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_known_values() {
        let table: HashTable = HashTable::new();
        assert_eq!(table.hash(""), 0);
        assert_eq!(table.hash("a"), 1);
        assert_eq!(table.hash("pink"), 5);
        assert_eq!(table.hash("orange"), 36);
        assert_eq!(table.hash("cyan"), 23);
    }

    #[test]
    fn test_hash_below_offset_stays_in_range() {
        let table: HashTable = HashTable::new();
        // '0' is 48, so the raw step is negative.
        assert_eq!(table.hash("0"), 5);
        assert_eq!(table.hash("A"), 22);
        for key in ["!", "  ", "0123", "ÄÖÜ", "\u{1F980}"] {
            assert!(table.hash(key) < table.bucket_count());
        }
    }

    #[test]
    fn test_hash_ignores_tail_past_limit() {
        let table: HashTable = HashTable::new();
        let base = "a".repeat(MAX_HASHED_CHARS);
        assert_eq!(table.hash(&base), table.hash(&format!("{base}zzz")));
    }

    #[test]
    fn test_set_get_roundtrip() {
        let mut table = HashTable::new();
        table.set("maroon", "#800000".to_string());
        table.set("yellow", "#FFFF00".to_string());
        assert_eq!(table.get("maroon").map(String::as_str), Some("#800000"));
        assert_eq!(table.get("yellow").map(String::as_str), Some("#FFFF00"));
        assert_eq!(table.get("missing"), None);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_colliding_keys_share_bucket() {
        let mut table = HashTable::new();
        assert_eq!(table.hash("olive"), table.hash("violet"));
        table.set("olive", 1);
        table.set("violet", 2);
        assert_eq!(table.occupied_buckets(), 1);
        assert_eq!(table.get("olive"), Some(&1));
        assert_eq!(table.get("violet"), Some(&2));
    }

    #[test]
    fn test_same_bucket_different_key_misses() {
        let mut table = HashTable::new();
        table.set("pink", ());
        assert_eq!(table.hash("0"), table.hash("pink"));
        assert!(!table.contains_key("0"));
    }

    #[test]
    fn test_duplicate_key_first_match_wins() {
        let mut table = HashTable::new();
        table.set("k", "v1".to_string());
        table.set("k", "v2".to_string());
        assert_eq!(table.get("k").map(String::as_str), Some("v1"));
        assert_eq!(table.len(), 2);
        assert_eq!(table.keys(), vec!["k"]);
        let values: Vec<&str> = table.values().into_iter().map(String::as_str).collect();
        assert_eq!(values, vec!["v1", "v2"]);
    }

    #[test]
    fn test_single_bucket_table() {
        let mut table = HashTable::with_size(1);
        table.extend([("x", 1), ("y", 2), ("x", 3)]);
        assert_eq!(table.bucket_count(), 1);
        let pairs: Vec<(&str, &i32)> = table.entries().collect();
        assert_eq!(pairs, vec![("x", &1), ("y", &2), ("x", &3)]);
        assert_eq!(table.keys(), vec!["x", "y"]);
        assert_eq!(table.values(), vec![&1, &2, &3]);
    }

    #[test]
    #[should_panic(expected = "at least one bucket")]
    fn test_zero_size_panics() {
        let _ = HashTable::<String>::with_size(0);
    }
}
