// src/lib.rs

pub mod cli;
pub mod error;
pub mod generator;
pub mod geometry;
pub mod intersection;
pub mod number;
pub mod presets;

pub use error::{FixtureError, Result};
pub use generator::{FixtureGenerator, FixtureRow, ScanRange};
pub use geometry::{Point2, Polygon};
pub use intersection::{Intersection, ScanLine};
