//! # Common Types

/// The integer type of word frequencies and sentence ranks.
pub type FrequencyType = u64;

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type CHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> CHashMap<K, V> {
            CHashMap::with_capacity(capacity)
        }

        /// Iterator over hash map entries.
        ///
        /// Note: `ahash::AHashMap` is a specialization of `std::collections::HashMap`.
        pub type CHashIter<'a, K, V> = std::collections::hash_map::Iter<'a, K, V>;
    } else {
        /// Type Alias for hash maps in this crate.
        pub type CHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> CHashMap<K, V> {
            CHashMap::with_capacity(capacity)
        }

        /// Iterator over hash map entries.
        pub type CHashIter<'a, K, V> = std::collections::hash_map::Iter<'a, K, V>;
    }
}
