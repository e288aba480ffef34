use tinyvec::TinyVec;

use crate::error::{PlanarIndexError, Result};
use crate::kdtree::index::{KdNode, KdTree};
use crate::point::Point;
use crate::r#trait::{check_radius, PointIndex};
use crate::r#type::IndexableNum;
use crate::rect::Rect;

/// Inline capacity of the traversal stacks. Deeper trees spill onto the heap.
const STACK_SIZE: usize = 32;

type NodeStack<'a, N> = TinyVec<[Option<&'a KdNode<N>>; STACK_SIZE]>;

impl<N: IndexableNum> PointIndex<N> for KdTree<N> {
    fn insert(&mut self, p: Point<N>) -> Result<bool> {
        self.insert_point(p)
    }

    fn contains(&self, p: &Point<N>) -> Result<bool> {
        self.contains_point(p)
    }

    fn len(&self) -> usize {
        self.size
    }

    /// Search the tree for the point closest to `q`.
    ///
    /// The subtree on the same side of each split as `q` is searched first. The other subtree
    /// is entered only if its rectangle could hold a point strictly closer than the best found
    /// so far. Among equidistant points, the first one reached in this order is returned.
    fn nearest(&self, q: &Point<N>) -> Result<Point<N>> {
        self.nearest_visits(q).map(|(best, _)| best)
    }

    /// Search the tree for points within a given rectangle.
    ///
    /// Subtrees whose rectangle does not intersect the query are skipped.
    fn range(&self, rect: &Rect<N>) -> Vec<Point<N>> {
        self.range_visits(rect).0
    }

    /// Search the tree for points within a given radius.
    ///
    /// Subtrees whose rectangle lies farther than `r` from `q` are skipped.
    fn within(&self, q: &Point<N>, r: N) -> Result<Vec<Point<N>>> {
        let r2 = check_radius(q, r)?;
        let mut result = vec![];

        let mut stack: NodeStack<'_, N> = TinyVec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push(Some(root));
        }

        while let Some(node) = stack.pop().flatten() {
            if node.point.distance_squared_to(q) <= r2 {
                result.push(node.point);
            }

            for child in [node.left.as_deref(), node.right.as_deref()]
                .into_iter()
                .flatten()
            {
                if child.rect.distance_squared_to(q) <= r2 {
                    stack.push(Some(child));
                }
            }
        }

        Ok(result)
    }
}

impl<N: IndexableNum> KdTree<N> {
    /// Nearest-neighbor search, also returning how many nodes had their point examined.
    pub(crate) fn nearest_visits(&self, q: &Point<N>) -> Result<(Point<N>, usize)> {
        q.check_indexable()?;
        let root = self.root.as_deref().ok_or(PlanarIndexError::EmptyIndex)?;

        let mut best = root.point;
        let mut best_dist = best.distance_squared_to(q);
        let mut visited = 0;

        // Use TinyVec to avoid heap allocations
        let mut stack: NodeStack<'_, N> = TinyVec::new();
        stack.push(Some(root));

        while let Some(node) = stack.pop().flatten() {
            // The rectangle bound is checked on pop, so a far subtree is only judged once the
            // near subtree pushed after it has been exhausted and best_dist has tightened.
            if node.rect.distance_squared_to(q) >= best_dist {
                continue;
            }
            visited += 1;

            let dist = node.point.distance_squared_to(q);
            if dist < best_dist {
                best = node.point;
                best_dist = dist;
            }

            let (near, far) = if node.goes_left(q) {
                (node.left.as_deref(), node.right.as_deref())
            } else {
                (node.right.as_deref(), node.left.as_deref())
            };

            // Note: these are pushed in backwards order to what gets popped
            if far.is_some() {
                stack.push(far);
            }
            if near.is_some() {
                stack.push(near);
            }
        }

        Ok((best, visited))
    }

    /// Range search, also returning how many nodes had their point examined.
    pub(crate) fn range_visits(&self, rect: &Rect<N>) -> (Vec<Point<N>>, usize) {
        let mut result = vec![];
        let mut visited = 0;

        let mut stack: NodeStack<'_, N> = TinyVec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push(Some(root));
        }

        while let Some(node) = stack.pop().flatten() {
            visited += 1;
            if rect.contains(&node.point) {
                result.push(node.point);
            }

            for child in [node.left.as_deref(), node.right.as_deref()]
                .into_iter()
                .flatten()
            {
                if child.rect.intersects(rect) {
                    stack.push(Some(child));
                }
            }
        }

        (result, visited)
    }
}
