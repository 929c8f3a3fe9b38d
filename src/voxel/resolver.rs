//! Grid geometry resolution.
//!
//! Turns raw extents and a per-axis resolution into the adjusted extents and
//! cell counts a [`VoxelGrid`](crate::voxel::VoxelGrid) is built from:
//! - adjustment pads the extents by half a cell on every side so points lying
//!   exactly on the raw boundary are not clipped by the outer rim
//! - x and y cell counts size the dense column array
//! - the z count is nominal; columns stay sparse in z

use glam::{UVec2, UVec3};

use crate::core::error::Error;
use crate::core::types::Result;
use crate::math::{compare, Extents, GridPoint};

/// Resolved, validated grid geometry
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry<P> {
    /// Extents after adjustment
    pub extents: Extents<P>,
    /// Size of one cell per axis
    pub resolution: P,
    /// Cell count per axis; z is at least 1 (always 1 for 2-D points)
    pub cells: UVec3,
}

impl<P> Geometry<P> {
    /// Dense (x, y) dimensions
    pub fn size(&self) -> UVec2 {
        self.cells.truncate()
    }
}

/// Check that every resolution component is finite and positive
pub fn validate_resolution<P: GridPoint>(resolution: P) -> Result<()> {
    for axis in 0..P::DIM {
        let value = resolution.axis(axis);
        if !value.is_finite() || value <= 0.0 {
            return Err(Error::InvalidResolution { axis, value });
        }
    }
    Ok(())
}

/// Extents padded by half a cell per side when `adjusted`, unchanged otherwise
pub fn adjust<P: GridPoint>(extents: &Extents<P>, resolution: P, adjusted: bool) -> Extents<P> {
    if adjusted {
        extents.inflated(resolution.map_axes(|r| r * 0.5))
    } else {
        *extents
    }
}

/// Cell counts `ceil((max - min) / r)` per axis.
///
/// A quotient within tolerance of an integer is snapped to it, so rounding
/// noise such as `1.1 / 0.1` does not add a phantom cell. x and y are bounded
/// by `i32::MAX` so every column is addressable by an index; they may come
/// out as 0 for flat extents, which [`resolve`] rejects. z is nominal: it is
/// clamped to `1..=i32::MAX` and never rejected.
pub fn cell_counts<P: GridPoint>(extents: &Extents<P>, resolution: P) -> Result<UVec3> {
    let size = extents.size();
    let mut cells = [1u32; 3];
    for (axis, count) in cells.iter_mut().enumerate().take(P::DIM) {
        let quotient = size.axis(axis) / resolution.axis(axis);
        let rounded = quotient.round();
        let n = if compare::approx_eq(quotient, rounded) { rounded } else { quotient.ceil() };
        let n = n.max(0.0);
        if n > i32::MAX as f64 {
            if axis < 2 {
                return Err(Error::DimensionsTooLarge { axis, cells: n });
            }
            *count = i32::MAX as u32;
        } else {
            *count = n as u32;
        }
    }
    cells[2] = cells[2].max(1);
    Ok(UVec3::from_array(cells))
}

/// Validate inputs and compute the full grid geometry
pub fn resolve<P: GridPoint>(extents: &Extents<P>, resolution: P, adjusted: bool) -> Result<Geometry<P>> {
    validate_resolution(resolution)?;
    let extents = adjust(extents, resolution, adjusted);
    let cells = cell_counts(&extents, resolution)?;
    if cells.x == 0 || cells.y == 0 {
        return Err(Error::DegenerateDimensions { nx: cells.x, ny: cells.y });
    }
    Ok(Geometry { extents, resolution, cells })
}
