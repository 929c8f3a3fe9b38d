//! Sparse height-keyed column representations

use std::collections::{BTreeMap, HashMap};
use std::ops::RangeBounds;

use super::Column;

/// Column backed by a `BTreeMap`: O(log k) access, iterates bottom to top.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderedColumn<V> {
    entries: BTreeMap<i32, V>,
}

impl<V> Default for OrderedColumn<V> {
    fn default() -> Self {
        Self { entries: BTreeMap::new() }
    }
}

impl<V> OrderedColumn<V> {
    /// Lowest occupied entry
    pub fn lowest(&self) -> Option<(i32, &V)> {
        self.entries.first_key_value().map(|(&z, v)| (z, v))
    }

    /// Highest occupied entry
    pub fn highest(&self) -> Option<(i32, &V)> {
        self.entries.last_key_value().map(|(&z, v)| (z, v))
    }

    /// Entries with heights in `range`, bottom to top
    pub fn range(&self, range: impl RangeBounds<i32>) -> impl Iterator<Item = (i32, &V)> {
        self.entries.range(range).map(|(&z, v)| (z, v))
    }
}

impl<V> Column<V> for OrderedColumn<V> {
    fn get(&self, z: i32) -> Option<&V> {
        self.entries.get(&z)
    }

    fn get_mut(&mut self, z: i32) -> Option<&mut V> {
        self.entries.get_mut(&z)
    }

    fn touch(&mut self, z: i32) -> &mut V
    where
        V: Default,
    {
        self.entries.entry(z).or_default()
    }

    fn remove(&mut self, z: i32) -> Option<V> {
        self.entries.remove(&z)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = (i32, &'a V)>
    where
        V: 'a,
    {
        self.entries.iter().map(|(&z, v)| (z, v))
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Column backed by a `HashMap`: O(1) amortized access, unordered iteration.
#[derive(Clone, Debug, PartialEq)]
pub struct HashedColumn<V> {
    entries: HashMap<i32, V>,
}

impl<V> Default for HashedColumn<V> {
    fn default() -> Self {
        Self { entries: HashMap::new() }
    }
}

impl<V> Column<V> for HashedColumn<V> {
    fn get(&self, z: i32) -> Option<&V> {
        self.entries.get(&z)
    }

    fn get_mut(&mut self, z: i32) -> Option<&mut V> {
        self.entries.get_mut(&z)
    }

    fn touch(&mut self, z: i32) -> &mut V
    where
        V: Default,
    {
        self.entries.entry(z).or_default()
    }

    fn remove(&mut self, z: i32) -> Option<V> {
        self.entries.remove(&z)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = (i32, &'a V)>
    where
        V: 'a,
    {
        self.entries.iter().map(|(&z, v)| (z, v))
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}
