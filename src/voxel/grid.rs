//! VoxelGrid - voxelization index over a pin screen.
//!
//! Quantizes world-space points into cells of a dense (x, y) grid of sparse
//! z-columns. Geometry is fixed at construction. Per-point operations on
//! points outside the extents return `None` or do nothing, so a stream of
//! sensor points can be ingested without checking each one first.

use std::marker::PhantomData;

use glam::{DVec2, DVec3, IVec3, UVec2, UVec3};

use crate::core::types::Result;
use crate::math::{Extents, GridPoint};
use crate::voxel::mapping::IndexMapper;
use crate::voxel::resolver::{self, Geometry};
use crate::voxel::store::{ColumnStore, PinScreen};

/// Voxel grid over 3-D points
pub type VoxelGrid3<V> = VoxelGrid<V, DVec3>;

/// Voxel grid over 2-D points; every index has z = 0
pub type VoxelGrid2<V> = VoxelGrid<V, DVec2>;

/// Dense (x, y) grid of sparse z-columns addressed by world-space points.
#[derive(Clone, Debug)]
pub struct VoxelGrid<V, P = DVec3, S = PinScreen<V>> {
    store: S,
    extents: Extents<P>,
    resolution: P,
    /// Cell counts; x and y size the store, z bounds rim clamping only
    cells: UVec3,
    mapper: IndexMapper<P>,
    _voxel: PhantomData<fn() -> V>,
}

impl<V, P: GridPoint, S: ColumnStore<V>> VoxelGrid<V, P, S> {
    /// Create a grid covering `extents` with cells of size `resolution`.
    ///
    /// When `adjusted`, the extents are padded by half a cell on each side
    /// so points on the raw boundary fall inside interior cells.
    pub fn new(extents: Extents<P>, resolution: P, adjusted: bool) -> Result<Self> {
        let geometry = resolver::resolve(&extents, resolution, adjusted)?;
        Self::from_geometry(geometry)
    }

    /// Create a grid from already resolved geometry.
    ///
    /// Fails only if the store cannot allocate its columns.
    pub fn from_geometry(geometry: Geometry<P>) -> Result<Self> {
        let Geometry { extents, resolution, cells } = geometry;
        log::debug!(
            "VoxelGrid: {}x{} columns (nominal depth {}), extents {:?}..{:?}, resolution {:?}",
            cells.x, cells.y, cells.z, extents.min(), extents.max(), resolution
        );
        Ok(Self {
            store: S::with_size(cells.truncate())?,
            extents,
            resolution,
            cells,
            mapper: IndexMapper::new(extents.min(), resolution),
            _voxel: PhantomData,
        })
    }

    /// Extents after adjustment
    pub fn extents(&self) -> &Extents<P> {
        &self.extents
    }

    /// Cell size per axis
    pub fn resolution(&self) -> P {
        self.resolution
    }

    /// Dense (x, y) dimensions
    pub fn size(&self) -> UVec2 {
        self.cells.truncate()
    }

    /// Index of the cell containing `p`, with no bounds check
    pub fn index_of(&self, p: P) -> IVec3 {
        self.mapper.index_of(p)
    }

    /// Check if `p` lies within the extents, boundary included
    pub fn covers(&self, p: P) -> bool {
        self.extents.contains(p)
    }

    /// Index used for storage of a covered point.
    ///
    /// Equal to [`index_of`](Self::index_of) except on the rim: a point
    /// exactly on the max boundary (or within tolerance outside min) is
    /// clamped into the last (or first) cell.
    pub fn cell_of(&self, p: P) -> Option<IVec3> {
        if !self.covers(p) {
            return None;
        }
        let raw = self.mapper.index_of(p);
        let last = self.cells.as_ivec3() - IVec3::ONE;
        Some(raw.clamp(IVec3::ZERO, last))
    }

    /// Payload of the cell containing `p`, created with `V::default()` if
    /// absent. Never overwrites an existing payload. `None` if `p` is not
    /// covered.
    pub fn touch_at(&mut self, p: P) -> Option<&mut V>
    where
        V: Default,
    {
        let Some(index) = self.cell_of(p) else {
            log::trace!("touch_at: {:?} outside grid, dropped", p);
            return None;
        };
        Some(self.store.touch(index))
    }

    /// Remove and return the payload of the cell containing `p`.
    ///
    /// Uncovered points and absent cells are no-ops.
    pub fn erase_at(&mut self, p: P) -> Option<V> {
        let index = self.cell_of(p)?;
        self.store.erase(index)
    }

    /// Payload of the cell containing `p`, without creating it
    pub fn get_at(&self, p: P) -> Option<&V> {
        let index = self.cell_of(p)?;
        self.store.get(index)
    }

    /// Mutable payload of the cell containing `p`, without creating it
    pub fn get_at_mut(&mut self, p: P) -> Option<&mut V> {
        let index = self.cell_of(p)?;
        self.store.get_mut(index)
    }

    /// Minimum corner of the cell at `index`; valid for any index
    pub fn origin(&self, index: IVec3) -> P {
        self.mapper.origin(index)
    }

    /// Minimum corner of the cell containing `p`
    pub fn origin_at(&self, p: P) -> P {
        self.mapper.origin_at(p)
    }

    /// Centre of the cell at `index`
    pub fn centre(&self, index: IVec3) -> P {
        self.mapper.centre(index)
    }

    /// Whole z-column under `p`; the z component of `p` does not matter
    pub fn column(&self, p: P) -> Option<&S::Column> {
        let index = self.cell_of(p)?;
        self.store.column(index.x as u32, index.y as u32)
    }

    /// Iterate every present payload with its index
    pub fn iter(&self) -> impl Iterator<Item = (IVec3, &V)> {
        self.store.iter()
    }

    /// Iterate present payloads adjacent to `index`
    pub fn neighbourhood(&self, index: IVec3) -> impl Iterator<Item = (IVec3, &V)> {
        self.store.neighbourhood(index)
    }

    /// Number of present payloads
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// True if no payloads are present
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Drop every payload, keeping geometry
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Underlying store
    pub fn store(&self) -> &S {
        &self.store
    }
}
