//! An immutable planar point.

use std::cmp::Ordering;
use std::fmt;

use geo_traits::CoordTrait;

use crate::error::{PlanarIndexError, Result};
use crate::r#type::{Axis, IndexableNum};

/// A point in the plane.
///
/// Points are ordered by x, then by y. Construction is unchecked; the indexes reject points
/// whose coordinates are non-finite or larger in magnitude than [`Point::max_coordinate`] when
/// they are inserted or queried.
#[derive(Debug, Clone, Copy, Default)]
pub struct Point<N: IndexableNum> {
    x: N,
    y: N,
}

impl<N: IndexableNum> Point<N> {
    /// Create a new point.
    pub fn new(x: N, y: N) -> Self {
        Self { x, y }
    }

    /// The x coordinate.
    #[inline]
    pub fn x(&self) -> N {
        self.x
    }

    /// The y coordinate.
    #[inline]
    pub fn y(&self) -> N {
        self.y
    }

    /// The coordinate along the given axis.
    #[inline]
    pub fn coord(&self, axis: Axis) -> N {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Returns `true` if both coordinates are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Squared Euclidean distance to another point.
    #[inline]
    pub fn distance_squared_to(&self, other: &Self) -> N {
        sq_dist(self.x, self.y, other.x, other.y)
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Self) -> N {
        self.distance_squared_to(other).sqrt()
    }

    /// The largest coordinate magnitude an index accepts.
    ///
    /// Any two points within this bound are less than `N::max_value().sqrt()` apart, so their
    /// squared distance stays finite. For `f64` the bound is about `3.3e153`.
    pub fn max_coordinate() -> N {
        let two = N::one() + N::one();
        N::max_value().sqrt() / (two * two)
    }

    /// Fails with [`PlanarIndexError::InvalidArgument`] unless both coordinates are finite and
    /// within [`Point::max_coordinate`].
    pub(crate) fn check_indexable(&self) -> Result<()> {
        let limit = Self::max_coordinate();
        if self.is_finite() && self.x.abs() <= limit && self.y.abs() <= limit {
            Ok(())
        } else {
            Err(PlanarIndexError::InvalidArgument(format!(
                "point {:?} has non-finite or out-of-range coordinates",
                self
            )))
        }
    }
}

impl<N: IndexableNum> PartialEq for Point<N> {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

// Indexes only ever hold finite points, where float equality is an equivalence.
impl<N: IndexableNum> Eq for Point<N> {}

impl<N: IndexableNum> Ord for Point<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // We don't allow NaN into an index. NaN compares equal here rather than panicking.
        self.x
            .partial_cmp(&other.x)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.y.partial_cmp(&other.y).unwrap_or(Ordering::Equal))
    }
}

impl<N: IndexableNum> PartialOrd for Point<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: IndexableNum + fmt::Display> fmt::Display for Point<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<N: IndexableNum> From<(N, N)> for Point<N> {
    fn from((x, y): (N, N)) -> Self {
        Self::new(x, y)
    }
}

impl<N: IndexableNum> From<[N; 2]> for Point<N> {
    fn from([x, y]: [N; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<N: IndexableNum> CoordTrait for Point<N> {
    type T = N;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn x(&self) -> Self::T {
        self.x
    }

    fn y(&self) -> Self::T {
        self.y
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        match n {
            0 => self.x,
            1 => self.y,
            _ => panic!("Invalid index of coord"),
        }
    }
}

impl<N: IndexableNum> Point<N> {
    /// Convert any `geo_traits` coordinate into a point.
    pub fn from_coord(coord: &impl CoordTrait<T = N>) -> Self {
        Self::new(coord.x(), coord.y())
    }
}

#[inline]
pub(crate) fn sq_dist<N: IndexableNum>(ax: N, ay: N, bx: N, by: N) -> N {
    let dx = ax - bx;
    let dy = ay - by;
    dx * dx + dy * dy
}
