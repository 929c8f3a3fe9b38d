//! Voxel grid and its storage

pub mod resolver;
pub mod mapping;
pub mod store;
pub mod grid;
pub mod config;

pub use resolver::Geometry;
pub use mapping::IndexMapper;
pub use store::{Column, ColumnStore, HashedColumn, OrderedColumn, PinScreen};
pub use grid::{VoxelGrid, VoxelGrid2, VoxelGrid3};
pub use config::GridConfig;
