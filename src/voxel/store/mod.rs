//! Sparse columnar storage behind the voxel grid.
//!
//! A store is a dense (x, y) array of columns, each column sparsely keyed by
//! integer height. The grid only talks to the [`ColumnStore`] trait, so the
//! column representation can be swapped without touching address mapping.

pub mod column;
pub mod pin_screen;

pub use column::{HashedColumn, OrderedColumn};
pub use pin_screen::PinScreen;

use glam::{IVec3, UVec2};

use crate::core::types::Result;

/// Sparse, height-keyed collection of entries sharing one (x, y) cell
pub trait Column<V>: Default {
    /// Entry at height `z`
    fn get(&self, z: i32) -> Option<&V>;

    /// Mutable entry at height `z`
    fn get_mut(&mut self, z: i32) -> Option<&mut V>;

    /// Entry at height `z`, inserting `V::default()` if absent
    fn touch(&mut self, z: i32) -> &mut V
    where
        V: Default;

    /// Remove and return the entry at height `z`
    fn remove(&mut self, z: i32) -> Option<V>;

    /// Number of entries
    fn len(&self) -> usize;

    /// Iterate `(z, entry)` pairs
    fn iter<'a>(&'a self) -> impl Iterator<Item = (i32, &'a V)>
    where
        V: 'a;

    /// Remove all entries
    fn clear(&mut self);

    /// True if the column holds no entries
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if an entry exists at height `z`
    fn contains(&self, z: i32) -> bool {
        self.get(z).is_some()
    }
}

/// Dense 2-D array of sparse columns with fixed dimensions
pub trait ColumnStore<V> {
    /// Column representation
    type Column: Column<V>;

    /// Create an empty store with `size.x * size.y` columns.
    ///
    /// Fails with [`Error::ColumnAllocation`](crate::Error::ColumnAllocation) if the columns cannot be
    /// allocated.
    fn with_size(size: UVec2) -> Result<Self>
    where
        Self: Sized;

    /// Dense (x, y) dimensions, fixed at construction
    fn size(&self) -> UVec2;

    /// Entry at `index`, inserting `V::default()` if absent. Never overwrites.
    ///
    /// # Panics
    /// If `(index.x, index.y)` lies outside [`size`](Self::size).
    fn touch(&mut self, index: IVec3) -> &mut V
    where
        V: Default;

    /// Remove and return the entry at `index`; absent or outside is a no-op
    fn erase(&mut self, index: IVec3) -> Option<V>;

    /// Entry at `index`
    fn get(&self, index: IVec3) -> Option<&V>;

    /// Mutable entry at `index`
    fn get_mut(&mut self, index: IVec3) -> Option<&mut V>;

    /// Column at `(x, y)`, `None` outside the store
    fn column(&self, x: u32, y: u32) -> Option<&Self::Column>;

    /// Total number of entries across all columns
    fn len(&self) -> usize;

    /// Remove every entry, keeping dimensions
    fn clear(&mut self);

    /// Iterate every present entry
    fn iter<'a>(&'a self) -> impl Iterator<Item = (IVec3, &'a V)>
    where
        V: 'a;

    /// Iterate present entries adjacent to `index` (26-neighbourhood,
    /// centre excluded)
    fn neighbourhood<'a>(&'a self, index: IVec3) -> impl Iterator<Item = (IVec3, &'a V)>
    where
        V: 'a;

    /// True if no entries are present
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
