use tracing::{event, Level};

use crate::error::{PlanarIndexError, Result};
use crate::kdtree::traversal::Node;
use crate::point::Point;
use crate::r#type::{Axis, IndexableNum};
use crate::rect::Rect;

/// A node owned by its parent, or by the tree for the root.
#[derive(Debug)]
pub(crate) struct KdNode<N: IndexableNum> {
    pub(crate) point: Point<N>,
    /// The region this subtree covers. Every point below this node lies inside it.
    pub(crate) rect: Rect<N>,
    pub(crate) axis: Axis,
    /// Points whose coordinate on `axis` is strictly less than this node's.
    pub(crate) left: Option<Box<KdNode<N>>>,
    /// Points whose coordinate on `axis` is greater than or equal to this node's.
    pub(crate) right: Option<Box<KdNode<N>>>,
}

impl<N: IndexableNum> KdNode<N> {
    fn new(point: Point<N>, rect: Rect<N>, axis: Axis) -> Self {
        Self {
            point,
            rect,
            axis,
            left: None,
            right: None,
        }
    }

    /// The split coordinate of this node.
    #[inline]
    pub(crate) fn split(&self) -> N {
        self.point.coord(self.axis)
    }

    /// Returns `true` if `p` belongs in the left/bottom subtree of this node.
    ///
    /// Points on the split line go right/top.
    #[inline]
    pub(crate) fn goes_left(&self, p: &Point<N>) -> bool {
        p.coord(self.axis) < self.split()
    }
}

/// A mutable 2-d tree over planar points.
///
/// Nodes at even depth split their rectangle on x, nodes at odd depth on y. The tree is never
/// rebalanced, so its shape depends on insertion order.
///
/// The root owns the tree's domain, which is the whole plane by default. A tree created with
/// [`KdTree::with_domain`] rejects points outside that domain on insert, since they would escape
/// the rectangles used for pruning.
#[derive(Debug)]
pub struct KdTree<N: IndexableNum> {
    pub(crate) root: Option<Box<KdNode<N>>>,
    pub(crate) domain: Rect<N>,
    pub(crate) size: usize,
}

impl<N: IndexableNum> KdTree<N> {
    /// Create an empty tree accepting any point with coordinates within
    /// [`Point::max_coordinate`].
    pub fn new() -> Self {
        Self::unbounded()
    }

    /// Create an empty tree over the given domain.
    ///
    /// Inserting a point outside `domain` fails with [`PlanarIndexError::InvalidArgument`].
    pub fn with_domain(domain: Rect<N>) -> Self {
        Self {
            root: None,
            domain,
            size: 0,
        }
    }

    /// Create an empty tree over the whole plane. This is the same as [`KdTree::new`].
    pub fn unbounded() -> Self {
        Self::with_domain(Rect::unbounded())
    }

    /// The rectangle owned by the root.
    pub fn domain(&self) -> &Rect<N> {
        &self.domain
    }

    /// The number of levels in the tree, 0 when empty.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&KdNode<N>, usize)> = vec![];
        if let Some(root) = self.root.as_deref() {
            stack.push((root, 1));
        }

        while let Some((node, level)) = stack.pop() {
            height = height.max(level);
            for child in [node.left.as_deref(), node.right.as_deref()]
                .into_iter()
                .flatten()
            {
                stack.push((child, level + 1));
            }
        }

        height
    }

    /// Access the root node of the tree for manual traversal.
    pub fn root(&self) -> Option<Node<'_, N>> {
        self.root.as_deref().map(Node::from_root)
    }

    /// Iterate over the stored points in pre-order.
    pub fn iter(&self) -> Iter<'_, N> {
        Iter {
            stack: self.root.as_deref().into_iter().collect(),
        }
    }

    /// Descend to `p` and link a new node there if it is not already stored.
    pub(crate) fn insert_point(&mut self, p: Point<N>) -> Result<bool> {
        p.check_indexable()?;
        if !self.domain.contains(&p) {
            event!(
                Level::DEBUG,
                "Rejecting point {:?} outside of domain {:?}",
                p,
                self.domain
            );
            return Err(PlanarIndexError::InvalidArgument(format!(
                "point {:?} lies outside of the tree domain {:?}",
                p, self.domain
            )));
        }

        let mut rect = self.domain;
        let mut axis = Axis::X;
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            if node.point == p {
                event!(Level::TRACE, "Ignoring duplicate point {:?}", p);
                return Ok(false);
            }

            axis = node.axis.next();
            slot = if node.goes_left(&p) {
                rect = node.rect.lower_half(node.axis, node.split());
                &mut node.left
            } else {
                rect = node.rect.upper_half(node.axis, node.split());
                &mut node.right
            };
        }

        debug_assert!(rect.contains(&p));
        *slot = Some(Box::new(KdNode::new(p, rect, axis)));
        self.size += 1;
        Ok(true)
    }

    /// Descend to `p` without mutation.
    pub(crate) fn contains_point(&self, p: &Point<N>) -> Result<bool> {
        p.check_indexable()?;

        let mut current = self.root.as_deref();
        while let Some(node) = current {
            if node.point == *p {
                return Ok(true);
            }
            current = if node.goes_left(p) {
                node.left.as_deref()
            } else {
                node.right.as_deref()
            };
        }

        Ok(false)
    }
}

impl<N: IndexableNum> Drop for KdTree<N> {
    // Unlink nodes one at a time; the default recursive drop can overflow on a degenerate tree.
    fn drop(&mut self) {
        let mut stack: Vec<Box<KdNode<N>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<N: IndexableNum> Default for KdTree<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// A pre-order iterator over the points of a [`KdTree`].
#[derive(Debug, Clone)]
pub struct Iter<'a, N: IndexableNum> {
    stack: Vec<&'a KdNode<N>>,
}

impl<'a, N: IndexableNum> Iterator for Iter<'a, N> {
    type Item = &'a Point<N>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Pushed right first so the left subtree is yielded first
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        Some(&node.point)
    }
}

impl<'a, N: IndexableNum> IntoIterator for &'a KdTree<N> {
    type Item = &'a Point<N>;
    type IntoIter = Iter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
