use tracing::{event, Level};

use crate::error::Result;
use crate::kdtree::KdTree;
use crate::point::Point;
use crate::r#trait::PointIndex;
use crate::r#type::IndexableNum;
use crate::rect::Rect;

/// A builder to create a [`KdTree`] from a batch of points.
///
/// Points are inserted in the order they were added, so the shape of the resulting tree is the
/// same as inserting them one by one.
#[derive(Debug, Clone)]
pub struct KdTreeBuilder<N: IndexableNum> {
    domain: Rect<N>,
    points: Vec<Point<N>>,
}

impl<N: IndexableNum> KdTreeBuilder<N> {
    /// Create a new builder over the whole plane.
    pub fn new() -> Self {
        Self {
            domain: Rect::unbounded(),
            points: vec![],
        }
    }

    /// Create a new builder over the whole plane, with room for `num_items` points.
    pub fn with_capacity(num_items: usize) -> Self {
        Self {
            domain: Rect::unbounded(),
            points: Vec::with_capacity(num_items),
        }
    }

    /// Restrict the tree to `domain`. Points outside it make [`finish`][Self::finish] fail.
    pub fn domain(mut self, domain: Rect<N>) -> Self {
        self.domain = domain;
        self
    }

    /// Accept any point within [`Point::max_coordinate`], undoing [`domain`][Self::domain].
    pub fn unbounded(self) -> Self {
        self.domain(Rect::unbounded())
    }

    /// Add a point to the batch, returning its insertion index.
    pub fn add(&mut self, x: N, y: N) -> usize {
        let index = self.points.len();
        self.points.push(Point::new(x, y));
        index
    }

    /// Consume this builder, inserting every point into a new tree.
    ///
    /// Duplicates are skipped. Fails on the first point that is not finite, exceeds
    /// [`Point::max_coordinate`] or lies outside the domain.
    pub fn finish(self) -> Result<KdTree<N>> {
        let mut tree = KdTree::with_domain(self.domain);
        for p in self.points.iter() {
            tree.insert(*p)?;
        }

        event!(
            Level::DEBUG,
            "Built tree with {} points ({} added) and height {}",
            tree.len(),
            self.points.len(),
            tree.height()
        );
        Ok(tree)
    }
}

impl<N: IndexableNum> Default for KdTreeBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}
