//! Error types for grid construction

use thiserror::Error;

/// Main error type for the crate
///
/// Only construction can fail. Per-point operations on points outside the
/// grid return `None` or do nothing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("resolution must be positive and finite, got {value} on axis {axis}")]
    InvalidResolution { axis: usize, value: f64 },

    #[error("inverted extents on axis {axis}: min {min} > max {max}")]
    InvertedExtents { axis: usize, min: f64, max: f64 },

    #[error("non-finite {0}")]
    NonFinite(&'static str),

    #[error("degenerate grid dimensions {nx}x{ny}")]
    DegenerateDimensions { nx: u32, ny: u32 },

    #[error("grid too large on axis {axis}: {cells} cells")]
    DimensionsTooLarge { axis: usize, cells: f64 },

    #[error("cannot allocate {nx}x{ny} columns")]
    ColumnAllocation { nx: u32, ny: u32 },
}
