//! **pathgrid-core** — geometry primitives for the pathgrid crates.
//!
//! [`Point`] addresses a single grid cell and [`Range`] a half-open
//! rectangle of cells. Both are plain `Copy` values; nothing here allocates.

pub mod geom;

pub use geom::{Point, Range, RangeIter};
