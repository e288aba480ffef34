//! Axis-aligned rectangles.

use geo_traits::{CoordTrait, RectTrait};

use crate::error::{PlanarIndexError, Result};
use crate::point::Point;
use crate::r#type::{Axis, IndexableNum};

/// A closed, axis-aligned rectangle.
///
/// Bounds may be infinite, but never NaN, and `min <= max` on both axes. Zero-width and
/// zero-height rectangles are allowed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect<N: IndexableNum> {
    min_x: N,
    min_y: N,
    max_x: N,
    max_y: N,
}

impl<N: IndexableNum> Rect<N> {
    /// Create a new rectangle, validating its bounds.
    pub fn try_new(min_x: N, min_y: N, max_x: N, max_y: N) -> Result<Self> {
        if min_x.is_nan() || min_y.is_nan() || max_x.is_nan() || max_y.is_nan() {
            return Err(PlanarIndexError::InvalidArgument(format!(
                "rectangle bounds [{:?}, {:?}] x [{:?}, {:?}] contain NaN",
                min_x, max_x, min_y, max_y
            )));
        }
        if min_x > max_x || min_y > max_y {
            return Err(PlanarIndexError::InvalidArgument(format!(
                "rectangle bounds [{:?}, {:?}] x [{:?}, {:?}] are inverted",
                min_x, max_x, min_y, max_y
            )));
        }
        Ok(Self {
            min_x,
            min_y,
            max_x,
            max_y,
        })
    }

    /// Create a rectangle from any `geo_traits` rectangle, validating its bounds.
    pub fn from_rect(rect: &impl RectTrait<T = N>) -> Result<Self> {
        Self::try_new(
            rect.min().x(),
            rect.min().y(),
            rect.max().x(),
            rect.max().y(),
        )
    }

    /// The unit square `[0, 1] x [0, 1]`.
    pub fn unit() -> Self {
        Self {
            min_x: N::zero(),
            min_y: N::zero(),
            max_x: N::one(),
            max_y: N::one(),
        }
    }

    /// The whole plane.
    ///
    /// Indexes over this domain still reject points beyond [`Point::max_coordinate`].
    pub fn unbounded() -> Self {
        Self {
            min_x: N::neg_infinity(),
            min_y: N::neg_infinity(),
            max_x: N::infinity(),
            max_y: N::infinity(),
        }
    }

    #[inline]
    pub fn min_x(&self) -> N {
        self.min_x
    }

    #[inline]
    pub fn min_y(&self) -> N {
        self.min_y
    }

    #[inline]
    pub fn max_x(&self) -> N {
        self.max_x
    }

    #[inline]
    pub fn max_y(&self) -> N {
        self.max_y
    }

    pub fn width(&self) -> N {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> N {
        self.max_y - self.min_y
    }

    /// Returns `true` if the point lies inside or on the boundary of this rectangle.
    #[inline]
    pub fn contains(&self, p: &Point<N>) -> bool {
        let (x, y) = (p.x(), p.y());
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Returns `true` if the two rectangles share at least one point, boundaries included.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.max_x >= other.min_x
            && self.max_y >= other.min_y
            && other.max_x >= self.min_x
            && other.max_y >= self.min_y
    }

    /// Squared Euclidean distance from the point to the closest point of this rectangle.
    ///
    /// Zero if the point is inside.
    #[inline]
    pub fn distance_squared_to(&self, p: &Point<N>) -> N {
        let dx = axis_dist(p.x(), self.min_x, self.max_x);
        let dy = axis_dist(p.y(), self.min_y, self.max_y);
        dx * dx + dy * dy
    }

    /// Euclidean distance from the point to the closest point of this rectangle.
    pub fn distance_to(&self, p: &Point<N>) -> N {
        self.distance_squared_to(p).sqrt()
    }

    /// The part of this rectangle below `value` on `axis` (left or bottom half).
    ///
    /// The split line itself belongs to both halves.
    pub(crate) fn lower_half(&self, axis: Axis, value: N) -> Self {
        let mut half = *self;
        match axis {
            Axis::X => half.max_x = value,
            Axis::Y => half.max_y = value,
        }
        half
    }

    /// The part of this rectangle above `value` on `axis` (right or top half).
    pub(crate) fn upper_half(&self, axis: Axis, value: N) -> Self {
        let mut half = *self;
        match axis {
            Axis::X => half.min_x = value,
            Axis::Y => half.min_y = value,
        }
        half
    }
}

impl<N: IndexableNum> RectTrait for Rect<N> {
    type T = N;
    type CoordType<'a>
        = Point<N>
    where
        Self: 'a;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn min(&self) -> Self::CoordType<'_> {
        Point::new(self.min_x, self.min_y)
    }

    fn max(&self) -> Self::CoordType<'_> {
        Point::new(self.max_x, self.max_y)
    }
}

/// 1D distance from a value to a range.
#[inline]
pub(crate) fn axis_dist<N: IndexableNum>(k: N, min: N, max: N) -> N {
    if k < min {
        min - k
    } else if k <= max {
        N::zero()
    } else {
        k - max
    }
}
