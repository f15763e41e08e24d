use std::fmt;

/// A key and its counter, as stored inside a counter map.
///
/// The key never changes once the entry exists, the value is updated in
/// place. Arithmetic on the value wraps on overflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    key: String,
    value: i32,
}

impl Entry {
    pub fn new(key: impl Into<String>, value: i32) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    /// Create an entry with counter 0
    pub fn with_key(key: impl Into<String>) -> Self {
        Self::new(key, 0)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    /// Replace the value, returning the old one
    pub fn set_value(&mut self, value: i32) -> i32 {
        std::mem::replace(&mut self.value, value)
    }

    pub fn increment(&mut self) {
        self.value = self.value.wrapping_add(1);
    }

    pub fn decrement(&mut self) {
        self.value = self.value.wrapping_sub(1);
    }

    pub fn into_parts(self) -> (String, i32) {
        (self.key, self.value)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}
