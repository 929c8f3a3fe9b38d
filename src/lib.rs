//! Pinscreen - voxelization index for point clouds
//!
//! Quantizes 2-D or 3-D points into a dense (x, y) grid of sparse,
//! height-keyed columns.
//!
//! ```
//! use glam::DVec3;
//! use pinscreen::{Extents, VoxelGrid3};
//!
//! let extents = Extents::new(DVec3::ZERO, DVec3::splat(10.0))?;
//! let mut hits: VoxelGrid3<u32> = VoxelGrid3::new(extents, DVec3::splat(2.0), false)?;
//!
//! for p in [DVec3::new(1.0, 1.0, 1.0), DVec3::new(1.5, 0.5, 1.9), DVec3::new(10.1, 0.0, 0.0)] {
//!     if let Some(count) = hits.touch_at(p) {
//!         *count += 1;
//!     }
//! }
//! assert_eq!(hits.get_at(DVec3::splat(1.0)), Some(&2));
//! assert_eq!(hits.len(), 1);
//! # Ok::<(), pinscreen::Error>(())
//! ```

pub mod core;
pub mod math;
pub mod voxel;

pub use crate::core::{Error, Result};
pub use math::{Extents, GridPoint};
pub use voxel::{Column, ColumnStore, GridConfig, VoxelGrid, VoxelGrid2, VoxelGrid3};
