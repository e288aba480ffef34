//! Utilities to traverse the KdTree structure.

use geo_traits::RectTrait;

use crate::kdtree::index::KdNode;
use crate::point::Point;
use crate::r#type::{Axis, IndexableNum};
use crate::rect::Rect;

/// A reference onto a node of a [`KdTree`][crate::KdTree].
///
/// As a [`RectTrait`], a node represents the rectangle owned by its subtree.
#[derive(Debug, Clone, Copy)]
pub struct Node<'a, N: IndexableNum> {
    node: &'a KdNode<N>,
    depth: usize,
}

impl<'a, N: IndexableNum> Node<'a, N> {
    pub(crate) fn from_root(node: &'a KdNode<N>) -> Self {
        Self { node, depth: 0 }
    }

    fn child(&self, node: &'a KdNode<N>) -> Self {
        Self {
            node,
            depth: self.depth + 1,
        }
    }

    /// The point stored at this node.
    pub fn point(&self) -> &'a Point<N> {
        &self.node.point
    }

    /// The rectangle owned by this node's subtree.
    pub fn rect(&self) -> &'a Rect<N> {
        &self.node.rect
    }

    /// The axis this node splits its rectangle on.
    pub fn axis(&self) -> Axis {
        self.node.axis
    }

    /// The depth of this node, 0 for the root.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The child holding points below this node's split coordinate.
    pub fn left(&self) -> Option<Node<'a, N>> {
        self.node.left.as_deref().map(|node| self.child(node))
    }

    /// The child holding points at or above this node's split coordinate.
    pub fn right(&self) -> Option<Node<'a, N>> {
        self.node.right.as_deref().map(|node| self.child(node))
    }

    /// Returns `true` if this is a leaf node without children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.node.left.is_none() && self.node.right.is_none()
    }

    /// Returns `true` if this is an intermediate node with children.
    #[inline]
    pub fn is_parent(&self) -> bool {
        !self.is_leaf()
    }
}

impl<N: IndexableNum> RectTrait for Node<'_, N> {
    type T = N;
    type CoordType<'a>
        = Point<N>
    where
        Self: 'a;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn min(&self) -> Self::CoordType<'_> {
        Point::new(self.node.rect.min_x(), self.node.rect.min_y())
    }

    fn max(&self) -> Self::CoordType<'_> {
        Point::new(self.node.rect.max_x(), self.node.rect.max_y())
    }
}
