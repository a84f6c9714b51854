//! Name-keyed map iterated in first-insertion order

use ahash::AHashMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::features::definitions::Informative;

/// Entries live in a vector; the hash index maps a name to its slot.
/// Replacing an entry keeps its slot, so output order is the order in
/// which names were first seen.
#[derive(Debug, Clone)]
pub struct NamedMap<T> {
    index: AHashMap<String, usize>,
    entries: Vec<(String, T)>,
}

impl<T> Default for NamedMap<T> {
    fn default() -> Self {
        Self {
            index: AHashMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<T> NamedMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.index.get(name).map(|&slot| &self.entries[slot].1)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut T> {
        let slot = *self.index.get(name)?;
        Some(&mut self.entries[slot].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(_, value)| value)
    }

    /// Insert or overwrite unconditionally
    pub fn put(&mut self, name: impl Into<String>, value: T) {
        let name = name.into();
        match self.index.get(&name) {
            Some(&slot) => self.entries[slot].1 = value,
            None => self.push(name, value),
        }
    }

    pub fn get_or_insert_with(&mut self, name: &str, make: impl FnOnce() -> T) -> &mut T {
        let slot = match self.index.get(name) {
            Some(&slot) => slot,
            None => {
                self.push(name.to_string(), make());
                self.entries.len() - 1
            }
        };
        &mut self.entries[slot].1
    }

    fn push(&mut self, name: String, value: T) {
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push((name, value));
    }
}

impl<T: Informative> NamedMap<T> {
    /// Insert, resolving duplicates: an entry that carries information is
    /// never replaced by one that carries none; otherwise the later entry
    /// wins. Returns whether `value` was stored.
    pub fn insert(&mut self, name: impl Into<String>, value: T) -> bool {
        let name = name.into();
        match self.index.get(&name) {
            Some(&slot) => {
                let existing = &mut self.entries[slot].1;
                if existing.carries_information() && !value.carries_information() {
                    return false;
                }
                *existing = value;
                true
            }
            None => {
                self.push(name, value);
                true
            }
        }
    }
}

impl<T: Serialize> Serialize for NamedMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
