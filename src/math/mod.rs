//! Mathematical utilities and data structures

pub mod compare;
pub mod point;
pub mod extents;

pub use point::GridPoint;
pub use extents::Extents;
