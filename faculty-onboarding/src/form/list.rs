//! Variable-length form sections with stable per-entry identity
//!
//! Entries are addressed by position in field paths, but each one also
//! carries a `Uuid` key assigned on insertion. Removing an entry shifts the
//! positions of everything after it; the keys never change, so views can
//! keep per-entry state (focus, scroll, expanded panels) attached to the
//! right entry.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

/// One entry in a [`KeyedList`]
#[derive(Debug, Clone, PartialEq)]
pub struct Keyed<T> {
    pub key: Uuid,
    pub value: T,
}

/// Ordered list whose entries keep a stable key across removals
#[derive(Debug, Clone, PartialEq)]
pub struct KeyedList<T> {
    entries: Vec<Keyed<T>>,
}

impl<T> Default for KeyedList<T> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<T> KeyedList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry and return its key
    pub fn append(&mut self, value: T) -> Uuid {
        let key = Uuid::new_v4();
        self.entries.push(Keyed { key, value });
        key
    }

    /// Remove the entry at `index`, returning it if the index was in range
    pub fn remove(&mut self, index: usize) -> Option<Keyed<T>> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(index).map(|e| &e.value)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.entries.get_mut(index).map(|e| &mut e.value)
    }

    /// Key of the entry currently at `index`
    pub fn key_at(&self, index: usize) -> Option<Uuid> {
        self.entries.get(index).map(|e| e.key)
    }

    /// Current position of the entry with `key`
    pub fn position(&self, key: Uuid) -> Option<usize> {
        self.entries.iter().position(|e| e.key == key)
    }

    pub fn keys(&self) -> Vec<Uuid> {
        self.entries.iter().map(|e| e.key).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|e| &e.value)
    }
}

impl<T: Default> KeyedList<T> {
    /// Append an entry populated with its defaults
    pub fn append_default(&mut self) -> Uuid {
        self.append(T::default())
    }
}

impl<T> FromIterator<T> for KeyedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.append(value);
        }
        list
    }
}

// Keys are a view concern; on the wire the list is a plain array.
impl<T: Serialize> Serialize for KeyedList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for KeyedList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<T>::deserialize(deserializer)?;
        Ok(values.into_iter().collect())
    }
}
