//! Point <-> cell index mapping

use glam::IVec3;

use crate::math::GridPoint;
use crate::math::point::index_axis;

/// Maps world-space points to integer cell indices and back.
///
/// Cell `i` spans `[origin + r * i, origin + r * (i + 1))` on every axis.
/// No bounds are enforced here; indices outside the grid are valid results.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndexMapper<P> {
    origin: P,
    resolution: P,
}

impl<P: GridPoint> IndexMapper<P> {
    /// Create a mapper with cell (0, 0, 0) starting at `origin`
    pub fn new(origin: P, resolution: P) -> Self {
        Self { origin, resolution }
    }

    /// Index of the cell containing `p`: `floor((p - origin) / r)` per axis.
    ///
    /// Axes beyond the point's dimension are 0. Results saturate at the
    /// `i32` range for points far outside the grid.
    pub fn index_of(&self, p: P) -> IVec3 {
        let mut index = [0i32; 3];
        for (axis, slot) in index.iter_mut().enumerate().take(P::DIM) {
            let offset = (p.axis(axis) - self.origin.axis(axis)) / self.resolution.axis(axis);
            *slot = offset.floor() as i32;
        }
        IVec3::from_array(index)
    }

    /// Minimum corner of the cell at `index`
    pub fn origin(&self, index: IVec3) -> P {
        P::from_fn(|axis| {
            self.origin.axis(axis) + self.resolution.axis(axis) * index_axis(index, axis) as f64
        })
    }

    /// Minimum corner of the cell containing `p`
    pub fn origin_at(&self, p: P) -> P {
        self.origin(self.index_of(p))
    }

    /// Centre of the cell at `index`
    pub fn centre(&self, index: IVec3) -> P {
        let corner = self.origin(index);
        corner.zip_axes(self.resolution, |c, r| c + r * 0.5)
    }
}
