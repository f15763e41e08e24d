use std::cmp::Ordering;

use crate::Entry;

pub trait KeySearcher {
    /// search the key in a key-sorted entry slice, returns same result as binary search
    fn search(entries: &[Entry], key: &str) -> Result<usize, usize>;
}

pub struct BinarySearch;

impl KeySearcher for BinarySearch {
    fn search(entries: &[Entry], key: &str) -> Result<usize, usize> {
        // half open [low, high)
        let mut low = 0;
        let mut high = entries.len();

        while low < high {
            let mid = low + (high - low) / 2;
            match entries[mid].key().cmp(key) {
                Ordering::Equal => return Ok(mid),
                Ordering::Less => low = mid + 1,
                Ordering::Greater => high = mid,
            }
        }

        Err(low)
    }
}

pub struct LinearSearch;

impl KeySearcher for LinearSearch {
    #[inline(never)]
    fn search(entries: &[Entry], key: &str) -> Result<usize, usize> {
        entries
            .iter()
            .enumerate()
            .find_map(|(idx, entry)| match entry.key().cmp(key) {
                Ordering::Less => None,
                Ordering::Equal => Some(Ok(idx)),
                Ordering::Greater => Some(Err(idx)),
            })
            .unwrap_or(Err(entries.len()))
    }
}

/// Encode a search result as a single signed index: the index itself when found,
/// `-(insertion_point + 1)` when not.
pub fn encode_search_result(r: Result<usize, usize>) -> isize {
    match r {
        Ok(idx) => idx as isize,
        Err(idx) => -(idx as isize) - 1,
    }
}

#[cfg(test)]
mod tests {
    use std::any::type_name;

    use super::*;

    fn key(i: u32) -> String {
        format!("key_{:04}", i)
    }

    fn test_searcher<S: KeySearcher>() {
        println!("testing {}", type_name::<S>());
        let entries = (0..64)
            .map(|i| Entry::new(key((i + 1) * 2), i as i32))
            .collect::<Vec<_>>();

        assert_eq!(S::search(&entries, &key(1)), Err(0));
        assert_eq!(S::search(&entries, &key(2)), Ok(0));
        assert_eq!(S::search(&entries, &key(3)), Err(1));
        assert_eq!(S::search(&entries, &key(4)), Ok(1));
        assert_eq!(S::search(&entries, &key(5)), Err(2));
        assert_eq!(S::search(&entries, &key(6)), Ok(2));
        assert_eq!(S::search(&entries, &key(7)), Err(3));
        assert_eq!(S::search(&entries, &key(128)), Ok(63));
        assert_eq!(S::search(&entries, &key(129)), Err(64));
        assert_eq!(S::search(&entries, &key(130)), Err(64));

        assert_eq!(S::search(&[], "anything"), Err(0));
        // prefix sorts before the longer key
        assert_eq!(S::search(&entries, "key_000"), Err(0));
    }

    #[test]
    fn test_searchers() {
        test_searcher::<BinarySearch>();
        test_searcher::<LinearSearch>();
    }

    #[test]
    fn test_searchers_agree() {
        let entries = ["apple", "banana", "kiwi", "pear", "plum"]
            .iter()
            .map(|k| Entry::with_key(*k))
            .collect::<Vec<_>>();

        for probe in ["", "a", "apple", "b", "banana", "cherry", "kiwi", "pea", "pear", "z"] {
            assert_eq!(
                BinarySearch::search(&entries, probe),
                LinearSearch::search(&entries, probe),
                "probe {probe}"
            );
        }
    }

    #[test]
    fn test_encode() {
        assert_eq!(encode_search_result(Ok(0)), 0);
        assert_eq!(encode_search_result(Ok(7)), 7);
        assert_eq!(encode_search_result(Err(0)), -1);
        assert_eq!(encode_search_result(Err(3)), -4);
    }
}
