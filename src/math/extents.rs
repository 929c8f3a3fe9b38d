//! World-space bounding extents

use serde::{Deserialize, Serialize};

use crate::core::error::Error;
use crate::core::types::Result;
use crate::math::compare;
use crate::math::point::GridPoint;

/// Axis-aligned extents defined by min and max corners.
///
/// Always satisfies `min <= max` per axis under the tolerant ordering of
/// [`compare::less`]. Deserialization goes through [`Extents::new`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "ExtentsRepr<P>",
    bound(deserialize = "P: GridPoint + Deserialize<'de>")
)]
pub struct Extents<P> {
    min: P,
    max: P,
}

#[derive(Deserialize)]
struct ExtentsRepr<P> {
    min: P,
    max: P,
}

impl<P: GridPoint> TryFrom<ExtentsRepr<P>> for Extents<P> {
    type Error = Error;

    fn try_from(repr: ExtentsRepr<P>) -> Result<Self> {
        Self::new(repr.min, repr.max)
    }
}

impl<P: GridPoint> Extents<P> {
    /// Create extents from min and max corners.
    ///
    /// Fails if any component is non-finite or if `max < min` on any axis.
    pub fn new(min: P, max: P) -> Result<Self> {
        if !min.is_finite_point() || !max.is_finite_point() {
            return Err(Error::NonFinite("extents"));
        }
        for axis in 0..P::DIM {
            let (lo, hi) = (min.axis(axis), max.axis(axis));
            if compare::less(hi, lo) {
                return Err(Error::InvertedExtents { axis, min: lo, max: hi });
            }
        }
        Ok(Self { min, max })
    }

    /// Create extents spanning two arbitrary corners
    pub fn from_corners(a: P, b: P) -> Result<Self> {
        if !a.is_finite_point() || !b.is_finite_point() {
            return Err(Error::NonFinite("extents"));
        }
        Ok(Self {
            min: a.zip_axes(b, compare::min),
            max: a.zip_axes(b, compare::max),
        })
    }

    /// Zero-volume extents at a single point
    pub fn from_point(p: P) -> Result<Self> {
        Self::from_corners(p, p)
    }

    /// Minimum corner
    pub fn min(&self) -> P {
        self.min
    }

    /// Maximum corner
    pub fn max(&self) -> P {
        self.max
    }

    /// Size (max - min)
    pub fn size(&self) -> P {
        self.max.zip_axes(self.min, |hi, lo| hi - lo)
    }

    /// Centre point
    pub fn centre(&self) -> P {
        self.min.zip_axes(self.max, |lo, hi| (lo + hi) * 0.5)
    }

    /// Check if a point lies within the extents, boundary included.
    ///
    /// Short-circuits on the first axis that rejects the point. NaN
    /// components are never contained.
    pub fn contains(&self, p: P) -> bool {
        for axis in 0..P::DIM {
            let v = p.axis(axis);
            if v.is_nan() || compare::less(v, self.min.axis(axis)) || compare::less(self.max.axis(axis), v) {
                return false;
            }
        }
        true
    }

    /// Check if `other` lies entirely within these extents
    pub fn contains_extents(&self, other: &Extents<P>) -> bool {
        (0..P::DIM).all(|axis| {
            !compare::less(other.min.axis(axis), self.min.axis(axis))
                && !compare::less(self.max.axis(axis), other.max.axis(axis))
        })
    }

    /// Smallest extents covering these extents and `p`
    pub fn hull(&self, p: P) -> Extents<P> {
        Extents {
            min: self.min.zip_axes(p, compare::min),
            max: self.max.zip_axes(p, compare::max),
        }
    }

    /// Smallest extents covering both
    pub fn union(&self, other: &Extents<P>) -> Extents<P> {
        Extents {
            min: self.min.zip_axes(other.min, compare::min),
            max: self.max.zip_axes(other.max, compare::max),
        }
    }

    /// Grow by `margin` on both sides of every axis
    ///
    /// `margin` must be non-negative per axis to keep the ordering invariant.
    pub fn inflated(&self, margin: P) -> Extents<P> {
        debug_assert!((0..P::DIM).all(|axis| margin.axis(axis) >= 0.0));
        Extents {
            min: self.min.zip_axes(margin, |v, m| v - m),
            max: self.max.zip_axes(margin, |v, m| v + m),
        }
    }

    /// Approximate equality of both corners
    pub fn approx_eq(&self, other: &Extents<P>) -> bool {
        (0..P::DIM).all(|axis| {
            compare::approx_eq(self.min.axis(axis), other.min.axis(axis))
                && compare::approx_eq(self.max.axis(axis), other.max.axis(axis))
        })
    }
}
