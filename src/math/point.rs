//! Fixed-dimension points accepted by the grid

use std::fmt::Debug;

use glam::{DVec2, DVec3, IVec3};

/// A real-valued point with a compile-time axis count.
///
/// The grid is dense over the first two axes and sparse over the third, so
/// only 2-D and 3-D points are meaningful. Indices are always [`IVec3`]; a
/// 2-D point maps to z = 0.
pub trait GridPoint: Copy + Debug + PartialEq {
    /// Number of axes (2 or 3)
    const DIM: usize;

    /// Component along `axis` (`axis < DIM`)
    fn axis(&self, axis: usize) -> f64;

    /// Build a point from a per-axis function
    fn from_fn(f: impl FnMut(usize) -> f64) -> Self;

    /// Apply `f` to every component
    fn map_axes(self, mut f: impl FnMut(f64) -> f64) -> Self {
        Self::from_fn(|i| f(self.axis(i)))
    }

    /// Combine two points component-wise
    fn zip_axes(self, other: Self, mut f: impl FnMut(f64, f64) -> f64) -> Self {
        Self::from_fn(|i| f(self.axis(i), other.axis(i)))
    }

    /// True if every component is finite
    fn is_finite_point(&self) -> bool {
        (0..Self::DIM).all(|i| self.axis(i).is_finite())
    }
}

impl GridPoint for DVec2 {
    const DIM: usize = 2;

    #[inline]
    fn axis(&self, axis: usize) -> f64 {
        self[axis]
    }

    #[inline]
    fn from_fn(mut f: impl FnMut(usize) -> f64) -> Self {
        DVec2::new(f(0), f(1))
    }
}

impl GridPoint for DVec3 {
    const DIM: usize = 3;

    #[inline]
    fn axis(&self, axis: usize) -> f64 {
        self[axis]
    }

    #[inline]
    fn from_fn(mut f: impl FnMut(usize) -> f64) -> Self {
        DVec3::new(f(0), f(1), f(2))
    }
}

/// Component of an index along `axis`; axes past z read as 0
#[inline]
pub(crate) fn index_axis(index: IVec3, axis: usize) -> i32 {
    match axis {
        0 => index.x,
        1 => index.y,
        2 => index.z,
        _ => 0,
    }
}
