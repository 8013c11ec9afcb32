//! Hash map construction helpers
//!
//! All keyed collections in the document model use ahash with random seeds,
//! which keeps lookups fast while staying resistant to crafted region ids.

use ahash::RandomState;
use std::collections::HashMap;

/// Map type used for identifier-keyed collections such as regions
pub type IdMap<V> = HashMap<String, V, RandomState>;

/// Create a new `HashMap` with the crate's hasher
///
/// # Example
///
/// ```rust
/// use vtt_core::utils::hashers::create_hash_map;
///
/// let mut map = create_hash_map::<String, i32>();
/// map.insert("fred".to_string(), 3);
/// ```
#[must_use]
pub fn create_hash_map<K, V>() -> HashMap<K, V, RandomState> {
    HashMap::with_hasher(RandomState::new())
}

/// Create a new `HashMap` with specific capacity and the crate's hasher
#[must_use]
pub fn create_hash_map_with_capacity<K, V>(capacity: usize) -> HashMap<K, V, RandomState> {
    HashMap::with_capacity_and_hasher(capacity, RandomState::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_hash_map_works() {
        let mut map: IdMap<i32> = create_hash_map();
        map.insert("bill".to_string(), 42);
        assert_eq!(map.get("bill"), Some(&42));
    }

    #[test]
    fn create_hash_map_with_capacity_works() {
        let map = create_hash_map_with_capacity::<String, i32>(100);
        assert!(map.capacity() >= 100);
        assert!(map.is_empty());
    }
}
