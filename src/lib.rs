#![doc = include_str!("../README.md")]

pub mod brute;
mod error;
pub mod kdtree;
mod point;
mod rect;
mod r#trait;
mod r#type;

pub use brute::BruteForceSet;
pub use error::{PlanarIndexError, Result};
pub use kdtree::{KdTree, KdTreeBuilder};
pub use point::Point;
pub use r#trait::PointIndex;
pub use r#type::{Axis, IndexableNum};
pub use rect::Rect;

#[cfg(test)]
pub(crate) mod test;
