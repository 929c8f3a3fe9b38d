//! PinScreen - dense grid of sparse height columns.
//!
//! Columns are laid out `x + y * nx` in a single `Vec`, allocated once.

use std::marker::PhantomData;

use glam::{IVec3, UVec2};

use super::{Column, ColumnStore, OrderedColumn};
use crate::core::error::Error;
use crate::core::types::Result;

/// Dense (x, y) array of columns, generic over the column representation.
#[derive(Clone, Debug)]
pub struct PinScreen<V, C = OrderedColumn<V>> {
    columns: Vec<C>,
    size: UVec2,
    /// Entry count across all columns
    len: usize,
    _voxel: PhantomData<fn() -> V>,
}

impl<V, C: Column<V>> PinScreen<V, C> {
    /// Create an empty pin screen of `size.x * size.y` columns
    ///
    /// # Panics
    /// If the columns cannot be allocated; see [`try_new`](Self::try_new).
    pub fn new(size: UVec2) -> Self {
        let count = size.x as usize * size.y as usize;
        let mut columns = Vec::with_capacity(count);
        columns.resize_with(count, C::default);
        Self::from_columns(columns, size)
    }

    /// Create an empty pin screen, failing if the column array is too large
    /// to allocate
    pub fn try_new(size: UVec2) -> Result<Self> {
        let too_large = || Error::ColumnAllocation { nx: size.x, ny: size.y };
        let count = (size.x as usize).checked_mul(size.y as usize).ok_or_else(too_large)?;
        let mut columns = Vec::new();
        columns.try_reserve_exact(count).map_err(|_| too_large())?;
        columns.resize_with(count, C::default);
        Ok(Self::from_columns(columns, size))
    }

    fn from_columns(columns: Vec<C>, size: UVec2) -> Self {
        Self {
            columns,
            size,
            len: 0,
            _voxel: PhantomData,
        }
    }

    /// Flat column slot for `(x, y)`
    fn slot(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.size.x && y < self.size.y {
            Some(x as usize + y as usize * self.size.x as usize)
        } else {
            None
        }
    }

    /// Flat column slot for the (x, y) part of a 3-D index
    fn slot_of(&self, index: IVec3) -> Option<usize> {
        let x = u32::try_from(index.x).ok()?;
        let y = u32::try_from(index.y).ok()?;
        self.slot(x, y)
    }

    /// Iterate every column with its (x, y) address, empty ones included
    pub fn columns(&self) -> impl Iterator<Item = (UVec2, &C)> {
        let nx = self.size.x.max(1) as usize;
        self.columns
            .iter()
            .enumerate()
            .map(move |(i, c)| (UVec2::new((i % nx) as u32, (i / nx) as u32), c))
    }

    /// Iterate present entries within `radius` cells of `index` on every axis,
    /// excluding `index` itself.
    pub fn neighbourhood_within(&self, index: IVec3, radius: u32) -> impl Iterator<Item = (IVec3, &V)> {
        let r = radius.min(i32::MAX as u32) as i32;
        (-r..=r)
            .flat_map(move |dy| (-r..=r).flat_map(move |dx| (-r..=r).map(move |dz| IVec3::new(dx, dy, dz))))
            .filter(|offset| *offset != IVec3::ZERO)
            .filter_map(move |offset| {
                let neighbour = IVec3::new(
                    index.x.checked_add(offset.x)?,
                    index.y.checked_add(offset.y)?,
                    index.z.checked_add(offset.z)?,
                );
                self.get(neighbour).map(|v| (neighbour, v))
            })
    }
}

impl<V, C: Column<V>> ColumnStore<V> for PinScreen<V, C> {
    type Column = C;

    fn with_size(size: UVec2) -> Result<Self> {
        Self::try_new(size)
    }

    fn size(&self) -> UVec2 {
        self.size
    }

    fn touch(&mut self, index: IVec3) -> &mut V
    where
        V: Default,
    {
        let Some(slot) = self.slot_of(index) else {
            panic!("index {index} outside pin screen of size {}", self.size);
        };
        let column = &mut self.columns[slot];
        if !column.contains(index.z) {
            self.len += 1;
        }
        column.touch(index.z)
    }

    fn erase(&mut self, index: IVec3) -> Option<V> {
        let slot = self.slot_of(index)?;
        let removed = self.columns[slot].remove(index.z);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    fn get(&self, index: IVec3) -> Option<&V> {
        let slot = self.slot_of(index)?;
        self.columns[slot].get(index.z)
    }

    fn get_mut(&mut self, index: IVec3) -> Option<&mut V> {
        let slot = self.slot_of(index)?;
        self.columns[slot].get_mut(index.z)
    }

    fn column(&self, x: u32, y: u32) -> Option<&C> {
        self.slot(x, y).map(|slot| &self.columns[slot])
    }

    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        for column in &mut self.columns {
            column.clear();
        }
        self.len = 0;
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = (IVec3, &'a V)>
    where
        V: 'a,
    {
        self.columns().flat_map(|(xy, column)| {
            column
                .iter()
                .map(move |(z, v)| (IVec3::new(xy.x as i32, xy.y as i32, z), v))
        })
    }

    fn neighbourhood<'a>(&'a self, index: IVec3) -> impl Iterator<Item = (IVec3, &'a V)>
    where
        V: 'a,
    {
        self.neighbourhood_within(index, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxel::store::HashedColumn;

    #[test]
    fn test_new_allocates_all_columns() {
        let screen: PinScreen<u8> = PinScreen::new(UVec2::new(3, 2));
        assert_eq!(screen.size(), UVec2::new(3, 2));
        assert_eq!(screen.columns().count(), 6);
        assert!(screen.is_empty());
        assert!(screen.column(2, 1).is_some());
        assert!(screen.column(3, 0).is_none());
        assert!(screen.column(0, 2).is_none());
    }

    #[test]
    fn test_try_new_rejects_oversized() {
        let size = UVec2::new(2_000_000_000, 2_000_000_000);
        let err = PinScreen::<u32>::try_new(size).unwrap_err();
        assert_eq!(err, Error::ColumnAllocation { nx: 2_000_000_000, ny: 2_000_000_000 });

        let screen = PinScreen::<u32>::try_new(UVec2::new(3, 4)).unwrap();
        assert_eq!(screen.columns().count(), 12);
    }

    #[test]
    fn test_touch_is_idempotent() {
        let mut screen: PinScreen<u32> = PinScreen::new(UVec2::new(4, 4));
        let index = IVec3::new(1, 2, -7);

        *screen.touch(index) = 42;
        let first = screen.touch(index) as *const u32;
        let second = screen.touch(index) as *const u32;

        assert_eq!(first, second);
        assert_eq!(screen.get(index), Some(&42));
        assert_eq!(screen.len(), 1);
    }

    #[test]
    #[should_panic(expected = "outside pin screen")]
    fn test_touch_outside_panics() {
        let mut screen: PinScreen<u32> = PinScreen::new(UVec2::new(2, 2));
        screen.touch(IVec3::new(2, 0, 0));
    }

    #[test]
    fn test_erase() {
        let mut screen: PinScreen<u32> = PinScreen::new(UVec2::new(2, 2));
        let index = IVec3::new(1, 1, 3);
        *screen.touch(index) = 9;

        assert_eq!(screen.erase(index), Some(9));
        assert_eq!(screen.erase(index), None);
        assert_eq!(screen.erase(IVec3::new(-1, 0, 0)), None);
        assert_eq!(screen.erase(IVec3::new(5, 5, 5)), None);
        assert!(screen.is_empty());
        assert!(screen.column(1, 1).is_some_and(|c| c.is_empty()));
    }

    #[test]
    fn test_column_view() {
        let mut screen: PinScreen<u32> = PinScreen::new(UVec2::new(3, 3));
        for z in [0, 4, -2] {
            *screen.touch(IVec3::new(2, 1, z)) = (z + 10) as u32;
        }
        screen.touch(IVec3::new(0, 1, 0));

        let column = screen.column(2, 1).unwrap();
        assert_eq!(column.len(), 3);
        let heights: Vec<i32> = column.iter().map(|(z, _)| z).collect();
        assert_eq!(heights, vec![-2, 0, 4]);
        assert_eq!(column.get(4), Some(&14));
    }

    #[test]
    fn test_iter_visits_every_entry() {
        let mut screen: PinScreen<u32> = PinScreen::new(UVec2::new(4, 3));
        let indices = [
            IVec3::new(0, 0, 0),
            IVec3::new(3, 0, 1),
            IVec3::new(1, 2, -5),
            IVec3::new(1, 2, 5),
        ];
        for index in indices {
            screen.touch(index);
        }

        let mut seen: Vec<IVec3> = screen.iter().map(|(i, _)| i).collect();
        seen.sort_by_key(|i| (i.y, i.x, i.z));
        let mut expected = indices.to_vec();
        expected.sort_by_key(|i| (i.y, i.x, i.z));
        assert_eq!(seen, expected);
        assert_eq!(screen.len(), 4);
    }

    fn occupied<S: ColumnStore<u32>>(store: &S, centre: IVec3) -> (usize, usize) {
        (store.iter().count(), store.neighbourhood(centre).count())
    }

    #[test]
    fn test_iterators_through_store_trait() {
        let mut ordered: PinScreen<u32> = PinScreen::try_new(UVec2::new(3, 3)).unwrap();
        let mut hashed: PinScreen<u32, HashedColumn<u32>> = PinScreen::try_new(UVec2::new(3, 3)).unwrap();
        for index in [IVec3::new(1, 1, 0), IVec3::new(0, 1, 1), IVec3::new(2, 2, 5)] {
            ordered.touch(index);
            hashed.touch(index);
        }
        assert_eq!(occupied(&ordered, IVec3::new(1, 1, 0)), (3, 1));
        assert_eq!(occupied(&hashed, IVec3::new(1, 1, 0)), (3, 1));
    }

    #[test]
    fn test_neighbourhood() {
        let mut screen: PinScreen<u32> = PinScreen::new(UVec2::new(5, 5));
        let centre = IVec3::new(2, 2, 0);
        screen.touch(centre);
        screen.touch(IVec3::new(1, 1, -1));
        screen.touch(IVec3::new(3, 2, 1));
        screen.touch(IVec3::new(2, 2, 1));
        // Too far on z and on x
        screen.touch(IVec3::new(2, 2, 2));
        screen.touch(IVec3::new(4, 2, 0));

        let mut found: Vec<IVec3> = screen.neighbourhood(centre).map(|(i, _)| i).collect();
        found.sort_by_key(|i| (i.x, i.y, i.z));
        assert_eq!(found, vec![IVec3::new(1, 1, -1), IVec3::new(2, 2, 1), IVec3::new(3, 2, 1)]);

        let wider = screen.neighbourhood_within(centre, 2).count();
        assert_eq!(wider, 5);
    }

    #[test]
    fn test_neighbourhood_at_edge() {
        let mut screen: PinScreen<u32> = PinScreen::new(UVec2::new(2, 2));
        screen.touch(IVec3::new(0, 0, 0));
        screen.touch(IVec3::new(1, 0, 0));
        screen.touch(IVec3::new(0, 0, i32::MAX));

        let found: Vec<IVec3> = screen.neighbourhood(IVec3::new(0, 0, 0)).map(|(i, _)| i).collect();
        assert_eq!(found, vec![IVec3::new(1, 0, 0)]);

        // Offsets past i32::MAX are skipped, not wrapped
        let top: Vec<IVec3> = screen.neighbourhood(IVec3::new(0, 0, i32::MAX)).map(|(i, _)| i).collect();
        assert!(top.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut screen: PinScreen<u32, HashedColumn<u32>> = PinScreen::new(UVec2::new(2, 2));
        screen.touch(IVec3::new(0, 1, 3));
        screen.touch(IVec3::new(1, 1, 3));
        screen.clear();
        assert!(screen.is_empty());
        assert_eq!(screen.iter().count(), 0);
        assert_eq!(screen.size(), UVec2::new(2, 2));
    }
}
