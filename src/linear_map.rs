use std::{
    fmt,
    hash::{Hash, Hasher},
};

use crate::{
    counter_map::{self, CounterMap, ABSENT, DEFAULT_CAPACITY},
    Entry,
};

/// Unsorted counterpart of [`crate::SortedCounterMap`], every lookup is a
/// linear scan. Kept as a baseline for tests and benchmarks.
#[derive(Debug)]
pub struct LinearCounterMap {
    entries: Vec<Entry>,
    capacity: usize,
}

impl Default for LinearCounterMap {
    fn default() -> Self {
        Self::new()
    }
}

impl LinearCounterMap {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.key() == key)
    }

    pub fn get(&self, key: &str) -> Option<i32> {
        self.position(key).map(|idx| self.entries[idx].value())
    }

    pub fn get_or_default(&self, key: &str, fallback: i32) -> i32 {
        self.get(key).unwrap_or(fallback)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    pub fn insert(&mut self, key: &str, value: i32) -> Option<i32> {
        match self.position(key) {
            Some(idx) => Some(self.entries[idx].set_value(value)),
            None => {
                self.push(Entry::new(key, value));
                None
            }
        }
    }

    /// Same contract as [`crate::SortedCounterMap::put`], including the
    /// [`ABSENT`] ambiguity.
    pub fn put(&mut self, key: &str, value: i32) -> i32 {
        self.insert(key, value).unwrap_or(ABSENT)
    }

    pub fn increment(&mut self, key: &str) {
        match self.position(key) {
            Some(idx) => self.entries[idx].increment(),
            None => self.push(Entry::new(key, 1)),
        }
    }

    /// Removes `key`. The last entry moves into the freed slot, so storage
    /// order changes.
    pub fn remove(&mut self, key: &str) -> Option<Entry> {
        self.position(key).map(|idx| self.entries.swap_remove(idx))
    }

    /// Returns all keys in storage order
    pub fn keys(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.key().to_string()).collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn hash_code(&self) -> u64 {
        counter_map::hash_entries(&self.entries)
    }

    fn push(&mut self, entry: Entry) {
        counter_map::reserve_one(&mut self.entries, &mut self.capacity);
        self.entries.push(entry);
    }
}

impl Clone for LinearCounterMap {
    fn clone(&self) -> Self {
        let mut entries = Vec::with_capacity(self.capacity);
        entries.extend_from_slice(&self.entries);
        Self {
            entries,
            capacity: self.capacity,
        }
    }
}

/// Storage order differs between equal maps, so every entry is looked up in
/// the other side.
impl PartialEq for LinearCounterMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .entries
                .iter()
                .all(|e| other.get(e.key()) == Some(e.value()))
    }
}

impl Eq for LinearCounterMap {}

impl Hash for LinearCounterMap {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl fmt::Display for LinearCounterMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{entry}")?;
        }
        write!(f, "}}")
    }
}

impl<K: AsRef<str>> Extend<(K, i32)> for LinearCounterMap {
    fn extend<T: IntoIterator<Item = (K, i32)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.put(k.as_ref(), v);
        }
    }
}

impl<K: AsRef<str>> FromIterator<(K, i32)> for LinearCounterMap {
    fn from_iter<T: IntoIterator<Item = (K, i32)>>(iter: T) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl CounterMap for LinearCounterMap {
    fn len(&self) -> usize {
        LinearCounterMap::len(self)
    }

    fn get_or_default(&self, key: &str, fallback: i32) -> i32 {
        LinearCounterMap::get_or_default(self, key, fallback)
    }

    fn contains(&self, key: &str) -> bool {
        LinearCounterMap::contains(self, key)
    }

    fn put(&mut self, key: &str, value: i32) -> i32 {
        LinearCounterMap::put(self, key, value)
    }

    fn increment(&mut self, key: &str) {
        LinearCounterMap::increment(self, key)
    }

    fn remove(&mut self, key: &str) -> Option<Entry> {
        LinearCounterMap::remove(self, key)
    }

    fn keys(&self) -> Vec<String> {
        LinearCounterMap::keys(self)
    }

    fn hash_code(&self) -> u64 {
        LinearCounterMap::hash_code(self)
    }
}

#[cfg(test)]
mod tests {
    use rand::seq::SliceRandom;

    use super::*;
    use crate::SortedCounterMap;

    #[test]
    fn test_basic() {
        let mut map = LinearCounterMap::new();
        assert_eq!(map.to_string(), "{}");

        map.put("apple", 3);
        map.put("banana", 5);
        map.put("orange", 2);
        assert_eq!(map.to_string(), "{apple=3, banana=5, orange=2}");

        assert_eq!(map.get_or_default("banana", -1), 5);
        assert_eq!(map.get_or_default("pear", -1), -1);
        assert!(map.contains("apple"));
        assert!(!map.contains("pear"));

        map.increment("apple");
        map.increment("pear");
        assert_eq!(map.get("apple"), Some(4));
        assert_eq!(map.get("pear"), Some(1));

        // pear is moved into banana's slot
        assert_eq!(map.remove("banana").map(|e| e.value()), Some(5));
        assert_eq!(map.keys(), vec!["apple", "pear", "orange"]);
        assert!(map.remove("banana").is_none());

        let copy = map.clone();
        assert_eq!(copy, map);
        assert_eq!(copy.hash_code(), map.hash_code());
    }

    #[test]
    fn test_equality_ignores_order() {
        let a: LinearCounterMap = [("x", 1), ("y", 2), ("z", 3)].into_iter().collect();
        let b: LinearCounterMap = [("z", 3), ("x", 1), ("y", 2)].into_iter().collect();
        assert_ne!(a.keys(), b.keys());
        assert_eq!(a, b);
        assert_eq!(a.hash_code(), b.hash_code());

        let c: LinearCounterMap = [("z", 3), ("x", 1), ("w", 2)].into_iter().collect();
        assert_ne!(a, c);
    }

    #[test]
    fn test_capacity_doubling() {
        let mut map = LinearCounterMap::new();
        for i in 0..11 {
            map.increment(&i.to_string());
        }
        assert_eq!(map.capacity(), 20);
        assert_eq!(map.clone().capacity(), 20);
    }

    /// Run the same operations through the trait on both maps
    fn drive<M: CounterMap>(map: &mut M, keys: &[String]) {
        for (i, k) in keys.iter().enumerate() {
            for _ in 0..(i % 3) {
                map.increment(k);
            }
            if i % 5 == 0 {
                map.put(k, -(i as i32));
            }
            if i % 11 == 0 {
                map.remove(k);
            }
        }
    }

    #[test]
    fn test_agrees_with_sorted() {
        let mut keys = (0..300).map(|i| format!("w{}", i % 97)).collect::<Vec<_>>();
        keys.shuffle(&mut rand::thread_rng());

        let mut linear = LinearCounterMap::new();
        let mut sorted = SortedCounterMap::new();
        drive(&mut linear, &keys);
        drive(&mut sorted, &keys);

        assert_eq!(CounterMap::len(&linear), CounterMap::len(&sorted));
        assert_eq!(linear.hash_code(), sorted.hash_code());

        let mut linear_keys = linear.keys();
        linear_keys.sort();
        assert_eq!(linear_keys, sorted.keys());
        for k in sorted.keys() {
            assert_eq!(linear.get(&k), sorted.get(&k));
        }
    }
}
