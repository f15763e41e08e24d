use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

use crate::Entry;

/// Capacity of a map created with `new()`
pub const DEFAULT_CAPACITY: usize = 10;

/// Factor applied to the capacity when an insertion finds the map full
pub const CAPACITY_MULTIPLIER: usize = 2;

/// Returned by `put` when the key was not present.
///
/// A key whose stored value is -1 reports the same thing, use `insert` when
/// the two cases must be told apart.
pub const ABSENT: i32 = -1;

/// Operations shared by the sorted map and the linear baseline, so callers
/// can be written once against either.
pub trait CounterMap {
    /// Returns entry count in the map
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the value stored for `key`, or `fallback`
    fn get_or_default(&self, key: &str, fallback: i32) -> i32;

    fn contains(&self, key: &str) -> bool;

    /// Set `key` to `value`, returns the previous value or [`ABSENT`]
    fn put(&mut self, key: &str, value: i32) -> i32;

    /// Add one to the counter of `key`, starting it at 1 if absent
    fn increment(&mut self, key: &str);

    fn remove(&mut self, key: &str) -> Option<Entry>;

    fn keys(&self) -> Vec<String>;

    /// Hash of the contents that does not depend on entry order
    fn hash_code(&self) -> u64;
}

pub(crate) fn key_hash(key: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    hasher.finish()
}

pub(crate) fn hash_entries(entries: &[Entry]) -> u64 {
    entries.iter().fold(0u64, |acc, e| {
        acc.wrapping_add(key_hash(e.key()) ^ e.value() as u64)
    })
}

/// Make room for one more entry, doubling `capacity` when the buffer is full.
pub(crate) fn reserve_one(entries: &mut Vec<Entry>, capacity: &mut usize) {
    debug_assert!(entries.len() <= *capacity);
    if entries.len() == *capacity {
        *capacity *= CAPACITY_MULTIPLIER;
        entries.reserve_exact(*capacity - entries.len());
    }
}
