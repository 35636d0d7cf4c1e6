//! Sorted dictionary keyed by a totally ordered type
//!
//! Entries are kept in ascending key order in a contiguous vector.
//! Lookups binary-search, so key and value iteration always agree: the
//! i-th key yielded by [`SortedDictionary::keys`] belongs to the i-th value
//! yielded by [`SortedDictionary::values`].

use std::borrow::Borrow;

use crate::bail_invalid;
use crate::error::Result;

/// Values that can be "blank" and therefore rejected by the dictionary.
///
/// `None`, empty strings and empty vectors are blank. Scalars are never
/// blank.
pub trait Blank {
    fn is_blank(&self) -> bool {
        false
    }
}

impl Blank for str {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Blank + ?Sized> Blank for &T {
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}

impl<T> Blank for Option<T> {
    fn is_blank(&self) -> bool {
        self.is_none()
    }
}

impl<T> Blank for Vec<T> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

macro_rules! never_blank {
    ($($ty:ty),* $(,)?) => {
        $(impl Blank for $ty {})*
    };
}

never_blank!(char, bool, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

/// Ordered map backed by a sorted vector
#[derive(Debug, Clone, PartialEq)]
pub struct SortedDictionary<K, V> {
    entries: Vec<(K, V)>,
}

impl<K, V> Default for SortedDictionary<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> SortedDictionary<K, V> {
    pub fn new() -> Self {
        SortedDictionary {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Keys in ascending order
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Values in ascending key order
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, value)| value)
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.entries.iter_mut().map(|(_, value)| value)
    }

    /// Key/value pairs in ascending key order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    /// Build a dictionary with the same keys and freshly derived values.
    ///
    /// Keys were validated when first added, so the copy skips validation.
    pub(crate) fn map_values<W>(&self, mut f: impl FnMut(&K, &V) -> W) -> SortedDictionary<K, W>
    where
        K: Clone,
    {
        SortedDictionary {
            entries: self
                .entries
                .iter()
                .map(|(key, value)| (key.clone(), f(key, value)))
                .collect(),
        }
    }
}

impl<K: Ord, V> SortedDictionary<K, V> {
    fn position<Q>(&self, key: &Q) -> std::result::Result<usize, usize>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.entries
            .binary_search_by(|(candidate, _)| candidate.borrow().cmp(key))
    }

    /// Insert `value` under `key`, or replace the existing value.
    ///
    /// Returns the previous value when the key was already present.
    /// Fails with `InvalidArgument` when the key or value is blank.
    pub fn add(&mut self, key: K, value: V) -> Result<Option<V>>
    where
        K: Blank,
        V: Blank,
    {
        if key.is_blank() {
            bail_invalid!("dictionary key", "key must not be blank");
        }
        if value.is_blank() {
            bail_invalid!("dictionary value", "value must not be blank");
        }

        match self.position(&key) {
            Ok(index) => Ok(Some(std::mem::replace(&mut self.entries[index].1, value))),
            Err(index) => {
                self.entries.insert(index, (key, value));
                Ok(None)
            }
        }
    }

    /// Detach the entry for `key`, returning its value if present
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.position(key)
            .ok()
            .map(|index| self.entries.remove(index).1)
    }

    pub fn lookup<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.position(key).ok().map(|index| &self.entries[index].1)
    }

    pub fn lookup_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self.position(key) {
            Ok(index) => Some(&mut self.entries[index].1),
            Err(_) => None,
        }
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.position(key).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;

    fn sample() -> SortedDictionary<String, u32> {
        let mut dict = SortedDictionary::new();
        for (key, value) in [("delta", 4), ("alpha", 1), ("charlie", 3), ("bravo", 2)] {
            assert!(dict.add(key.to_string(), value).unwrap().is_none());
        }
        dict
    }

    #[test]
    fn test_keys_sorted_regardless_of_insertion_order() {
        let dict = sample();
        let keys: Vec<_> = dict.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["alpha", "bravo", "charlie", "delta"]);
        let values: Vec<_> = dict.values().copied().collect();
        assert_eq!(values, vec![1, 2, 3, 4]);
        assert_eq!(dict.len(), 4);
    }

    #[test]
    fn test_add_existing_key_replaces_value() {
        let mut dict = sample();
        let previous = dict.add("charlie".to_string(), 30).unwrap();
        assert_eq!(previous, Some(3));
        assert_eq!(dict.len(), 4);
        assert_eq!(dict.lookup("charlie"), Some(&30));
    }

    #[test]
    fn test_lookup_and_contains() {
        let dict = sample();
        assert_eq!(dict.lookup("bravo"), Some(&2));
        assert!(dict.contains("delta"));
        assert!(!dict.contains("echo"));
        assert_eq!(dict.lookup("echo"), None);
    }

    #[test]
    fn test_lookup_mut() {
        let mut dict = sample();
        if let Some(value) = dict.lookup_mut("alpha") {
            *value += 10;
        }
        assert_eq!(dict.lookup("alpha"), Some(&11));
        assert!(dict.lookup_mut("zulu").is_none());
    }

    #[test]
    fn test_remove() {
        let mut dict = sample();
        assert_eq!(dict.remove("bravo"), Some(2));
        assert_eq!(dict.remove("bravo"), None);
        assert_eq!(dict.len(), 3);
        let pairs: Vec<_> = dict.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        assert_eq!(pairs, vec![("alpha", 1), ("charlie", 3), ("delta", 4)]);
    }

    #[test]
    fn test_blank_key_rejected() {
        let mut dict: SortedDictionary<String, u32> = SortedDictionary::new();
        let err = dict.add(String::new(), 1).unwrap_err();
        assert!(matches!(err, GraphError::InvalidArgument { .. }));
        assert!(dict.is_empty());
    }

    #[test]
    fn test_blank_value_rejected() {
        let mut dict: SortedDictionary<char, Option<u32>> = SortedDictionary::new();
        assert!(dict.add('a', None).is_err());
        assert!(dict.add('a', Some(1)).unwrap().is_none());
        assert_eq!(dict.lookup(&'a'), Some(&Some(1)));
    }

    #[test]
    fn test_clear() {
        let mut dict = sample();
        dict.clear();
        assert!(dict.is_empty());
        assert_eq!(dict.keys().count(), 0);
    }

    #[test]
    fn test_map_values_keeps_keys() {
        let dict = sample();
        let doubled = dict.map_values(|_, value| value * 2);
        let pairs: Vec<_> = doubled.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        assert_eq!(
            pairs,
            vec![("alpha", 2), ("bravo", 4), ("charlie", 6), ("delta", 8)]
        );
    }
}
