//! Helpers over insertion-ordered maps
//!
//! [`IndexMap`] keeps keys in insertion order, so every helper here returns
//! keys and values in the order they were added.

use indexmap::IndexMap;
use std::hash::Hash;


/// Keys in insertion order
pub fn keys<K: Clone, V>(map: &IndexMap<K, V>) -> Vec<K> {
    map.keys().cloned().collect()
}

/// Number of keys
pub fn size<K, V>(map: &IndexMap<K, V>) -> usize {
    map.len()
}

/// Values in key order
pub fn values<K, V: Clone>(map: &IndexMap<K, V>) -> Vec<V> {
    map.values().cloned().collect()
}

/// How many keys map to each distinct value, values in first-seen order
pub fn value_freq<K, V>(map: &IndexMap<K, V>) -> IndexMap<V, usize>
where
    V: Clone + Eq + Hash,
{
    let mut freq = IndexMap::new();
    for value in map.values() {
        *freq.entry(value.clone()).or_insert(0) += 1;
    }
    freq
}

/// `(key, value)` rows in key order
pub fn table<K: Clone, V: Clone>(map: &IndexMap<K, V>) -> Vec<(K, V)> {
    table_with(map, |_| {})
}

/// `(key, value)` rows in key order, calling `visit` on each value first
pub fn table_with<K, V, F>(map: &IndexMap<K, V>, mut visit: F) -> Vec<(K, V)>
where
    K: Clone,
    V: Clone,
    F: FnMut(&V),
{
    map.iter()
        .map(|(k, v)| {
            visit(v);
            (k.clone(), v.clone())
        })
        .collect()
}
