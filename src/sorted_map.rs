use std::{
    fmt,
    hash::{Hash, Hasher},
};

use crate::{
    counter_map::{self, CounterMap, ABSENT, DEFAULT_CAPACITY},
    key_search::{encode_search_result, BinarySearch, KeySearcher},
    Entry,
};

/// String to counter map stored in one array, sorted by key.
///
/// Lookup is a binary search. Insertion and removal shift the entries after
/// the affected slot, so they are O(n) in the worst case.
#[derive(Debug)]
pub struct SortedCounterMap {
    /// sorted by key, no duplicates
    entries: Vec<Entry>,
    capacity: usize,
}

impl Default for SortedCounterMap {
    fn default() -> Self {
        Self::new()
    }
}

impl SortedCounterMap {
    /// Create an empty map with [`DEFAULT_CAPACITY`]
    ///
    /// # Examples
    /// ```rust
    /// use string_counter_map::SortedCounterMap;
    ///
    /// let map = SortedCounterMap::new();
    ///
    /// assert!(map.is_empty());
    /// assert_eq!(map.capacity(), 10);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty map holding `capacity` entries before it grows. A
    /// capacity of 0 is bumped to 1.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns entry count in the map
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns how many entries fit before the next growth
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Search `key`, returns `Ok(index)` if present or `Err(insertion_point)`
    ///
    /// # Examples
    /// ```rust
    /// use string_counter_map::SortedCounterMap;
    ///
    /// let mut map = SortedCounterMap::new();
    /// map.put("b", 1);
    /// map.put("d", 1);
    ///
    /// assert_eq!(map.locate("b"), Ok(0));
    /// assert_eq!(map.locate("c"), Err(1));
    /// assert_eq!(map.locate("e"), Err(2));
    /// ```
    #[inline]
    pub fn locate(&self, key: &str) -> Result<usize, usize> {
        BinarySearch::search(&self.entries, key)
    }

    /// Same search as [`Self::locate`], encoded as one signed index: the index
    /// when found, `-(insertion_point + 1)` when absent.
    ///
    /// # Examples
    /// ```rust
    /// use string_counter_map::SortedCounterMap;
    ///
    /// let mut map = SortedCounterMap::new();
    /// map.put("b", 1);
    ///
    /// assert_eq!(map.locate_encoded("a"), -1);
    /// assert_eq!(map.locate_encoded("b"), 0);
    /// assert_eq!(map.locate_encoded("c"), -2);
    /// ```
    pub fn locate_encoded(&self, key: &str) -> isize {
        encode_search_result(self.locate(key))
    }

    /// Returns the value for `key`
    #[inline]
    pub fn get(&self, key: &str) -> Option<i32> {
        self.locate(key).ok().map(|idx| self.entries[idx].value())
    }

    /// Returns the value for `key`, or `fallback` if the key is absent
    ///
    /// # Examples
    /// ```rust
    /// use string_counter_map::SortedCounterMap;
    ///
    /// let mut map = SortedCounterMap::new();
    /// map.put("banana", 2);
    ///
    /// assert_eq!(map.get_or_default("banana", -1), 2);
    /// assert_eq!(map.get_or_default("orange", -1), -1);
    /// ```
    #[inline]
    pub fn get_or_default(&self, key: &str, fallback: i32) -> i32 {
        self.get(key).unwrap_or(fallback)
    }

    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.locate(key).is_ok()
    }

    /// Set `key` to `value`, returns the previous value if the key was present.
    ///
    /// # Examples
    /// ```rust
    /// use string_counter_map::SortedCounterMap;
    ///
    /// let mut map = SortedCounterMap::new();
    /// assert_eq!(map.insert("a", -1), None);
    /// assert_eq!(map.insert("a", 3), Some(-1));
    /// ```
    pub fn insert(&mut self, key: &str, value: i32) -> Option<i32> {
        match self.locate(key) {
            Ok(idx) => Some(self.entries[idx].set_value(value)),
            Err(idx) => {
                self.insert_at(idx, Entry::new(key, value));
                None
            }
        }
    }

    /// Set `key` to `value`, returns the previous value or [`ABSENT`] when the
    /// key was not present.
    ///
    /// A previous value of -1 is indistinguishable from an absent key here.
    ///
    /// # Examples
    /// ```rust
    /// use string_counter_map::{SortedCounterMap, ABSENT};
    ///
    /// let mut map = SortedCounterMap::new();
    /// assert_eq!(map.put("a", 2), ABSENT);
    /// assert_eq!(map.put("a", 5), 2);
    /// ```
    #[inline]
    pub fn put(&mut self, key: &str, value: i32) -> i32 {
        self.insert(key, value).unwrap_or(ABSENT)
    }

    /// Add one to the counter of `key`, inserting it with 1 if absent
    ///
    /// # Examples
    /// ```rust
    /// use string_counter_map::SortedCounterMap;
    ///
    /// let mut map = SortedCounterMap::new();
    /// map.increment("word");
    /// map.increment("word");
    ///
    /// assert_eq!(map.get_or_default("word", 0), 2);
    /// ```
    pub fn increment(&mut self, key: &str) {
        match self.locate(key) {
            Ok(idx) => self.entries[idx].increment(),
            Err(idx) => self.insert_at(idx, Entry::new(key, 1)),
        }
    }

    /// Removes `key`, returning its entry if it was present
    ///
    /// # Examples
    /// ```rust
    /// use string_counter_map::SortedCounterMap;
    ///
    /// let mut map = SortedCounterMap::new();
    /// map.put("a", 2);
    ///
    /// assert_eq!(map.remove("a").unwrap().value(), 2);
    /// assert!(map.remove("a").is_none());
    /// ```
    pub fn remove(&mut self, key: &str) -> Option<Entry> {
        match self.locate(key) {
            // Vec::remove shifts the tail left and vacates the last slot
            Ok(idx) => Some(self.entries.remove(idx)),
            Err(_) => None,
        }
    }

    /// Returns all keys in ascending order
    pub fn keys(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.key().to_string()).collect()
    }

    /// Removes all entries, capacity is kept
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn hash_code(&self) -> u64 {
        counter_map::hash_entries(&self.entries)
    }

    fn insert_at(&mut self, idx: usize, entry: Entry) {
        debug_assert!(idx == self.len() || self.entries[idx].key() > entry.key());
        debug_assert!(idx == 0 || self.entries[idx - 1].key() < entry.key());

        counter_map::reserve_one(&mut self.entries, &mut self.capacity);
        self.entries.insert(idx, entry);
    }

    #[cfg(test)]
    fn validate(&self) {
        assert!(self.len() <= self.capacity);
        for pair in self.entries.windows(2) {
            assert!(pair[0].key() < pair[1].key(), "{} !< {}", pair[0], pair[1]);
        }
    }
}

impl Clone for SortedCounterMap {
    fn clone(&self) -> Self {
        let mut entries = Vec::with_capacity(self.capacity);
        entries.extend_from_slice(&self.entries);
        Self {
            entries,
            capacity: self.capacity,
        }
    }
}

/// Both sides are sorted, so equal maps hold equal entries at every index.
impl PartialEq for SortedCounterMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .entries
                .iter()
                .zip(&other.entries)
                .all(|(a, b)| a.key() == b.key() && a.value() == b.value())
    }
}

impl Eq for SortedCounterMap {}

impl Hash for SortedCounterMap {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl fmt::Display for SortedCounterMap {
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

impl<K: AsRef<str>> Extend<(K, i32)> for SortedCounterMap {
    fn extend<T: IntoIterator<Item = (K, i32)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.put(k.as_ref(), v);
        }
    }
}

impl<K: AsRef<str>> FromIterator<(K, i32)> for SortedCounterMap {
    fn from_iter<T: IntoIterator<Item = (K, i32)>>(iter: T) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl CounterMap for SortedCounterMap {
    fn len(&self) -> usize {
        SortedCounterMap::len(self)
    }

    fn get_or_default(&self, key: &str, fallback: i32) -> i32 {
        SortedCounterMap::get_or_default(self, key, fallback)
    }

    fn contains(&self, key: &str) -> bool {
        SortedCounterMap::contains(self, key)
    }

    fn put(&mut self, key: &str, value: i32) -> i32 {
        SortedCounterMap::put(self, key, value)
    }

    fn increment(&mut self, key: &str) {
        SortedCounterMap::increment(self, key)
    }

    fn remove(&mut self, key: &str) -> Option<Entry> {
        SortedCounterMap::remove(self, key)
    }

    fn keys(&self) -> Vec<String> {
        SortedCounterMap::keys(self)
    }

    fn hash_code(&self) -> u64 {
        SortedCounterMap::hash_code(self)
    }
}
