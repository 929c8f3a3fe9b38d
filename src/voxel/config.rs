//! Grid configuration

use serde::{Deserialize, Serialize};

use crate::core::types::Result;
use crate::math::{Extents, GridPoint};
use crate::voxel::grid::VoxelGrid;
use crate::voxel::resolver::{self, Geometry};
use crate::voxel::store::ColumnStore;

/// Geometry of a voxel grid, loadable from any serde format.
///
/// Extents are validated while deserializing; resolution and dimensions are
/// validated by [`build`](Self::build).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "P: Serialize",
    deserialize = "P: GridPoint + Deserialize<'de>"
))]
pub struct GridConfig<P> {
    /// Raw world-space extents
    pub extents: Extents<P>,
    /// Cell size per axis
    pub resolution: P,
    /// Pad extents by half a cell on each side
    #[serde(default)]
    pub adjusted: bool,
}

impl<P: GridPoint> GridConfig<P> {
    /// Create an unadjusted configuration
    pub fn new(extents: Extents<P>, resolution: P) -> Self {
        Self {
            extents,
            resolution,
            adjusted: false,
        }
    }

    /// Set the extents adjustment flag
    pub fn with_adjusted(mut self, adjusted: bool) -> Self {
        self.adjusted = adjusted;
        self
    }

    /// Validate and resolve into grid geometry
    pub fn geometry(&self) -> Result<Geometry<P>> {
        resolver::resolve(&self.extents, self.resolution, self.adjusted)
    }

    /// Build a grid with the default store
    pub fn build<V>(&self) -> Result<VoxelGrid<V, P>> {
        self.build_with()
    }

    /// Build a grid with a chosen store
    pub fn build_with<V, S: ColumnStore<V>>(&self) -> Result<VoxelGrid<V, P, S>> {
        VoxelGrid::from_geometry(self.geometry()?)
    }
}
