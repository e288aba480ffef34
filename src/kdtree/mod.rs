//! A mutable 2-d tree with pruned nearest-neighbor and range search.

#![warn(missing_docs)]

mod builder;
mod index;
mod r#trait;
mod traversal;

pub use builder::KdTreeBuilder;
pub use index::{Iter, KdTree};
pub use traversal::Node;
