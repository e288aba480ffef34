use geo_traits::{CoordTrait, RectTrait};

use crate::error::{PlanarIndexError, Result};
use crate::point::Point;
use crate::r#type::IndexableNum;
use crate::rect::Rect;

/// The operations shared by every point index in this crate.
///
/// Both [`BruteForceSet`][crate::BruteForceSet] and [`KdTree`][crate::KdTree] implement this
/// trait with identical results, so either can be driven generically.
pub trait PointIndex<N: IndexableNum> {
    /// Add a point to the index if an equal point is not already present.
    ///
    /// Returns `true` if the point was added and `false` if it was already stored. Points with
    /// non-finite coordinates, or coordinates beyond [`Point::max_coordinate`], are rejected with
    /// [`PlanarIndexError::InvalidArgument`].
    fn insert(&mut self, p: Point<N>) -> Result<bool>;

    /// Returns `true` if a point with exactly these coordinates is stored.
    fn contains(&self, p: &Point<N>) -> Result<bool>;

    /// The number of stored points.
    fn len(&self) -> usize;

    /// Returns `true` if no points are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The stored point closest to `q` in Euclidean distance.
    ///
    /// Fails with [`PlanarIndexError::EmptyIndex`] if nothing is stored. Which of several
    /// equidistant points is returned is implementation-defined.
    fn nearest(&self, q: &Point<N>) -> Result<Point<N>>;

    /// All stored points inside `rect`, boundaries included, in no particular order.
    fn range(&self, rect: &Rect<N>) -> Vec<Point<N>>;

    /// All stored points at Euclidean distance at most `r` from `q`, in no particular order.
    fn within(&self, q: &Point<N>, r: N) -> Result<Vec<Point<N>>>;

    /// [`contains`][Self::contains] for any `geo_traits` coordinate.
    fn contains_coord(&self, coord: &impl CoordTrait<T = N>) -> Result<bool> {
        self.contains(&Point::from_coord(coord))
    }

    /// [`nearest`][Self::nearest] for any `geo_traits` coordinate.
    fn nearest_coord(&self, coord: &impl CoordTrait<T = N>) -> Result<Point<N>> {
        self.nearest(&Point::from_coord(coord))
    }

    /// [`range`][Self::range] for any `geo_traits` rectangle.
    ///
    /// The rectangle is validated first, since foreign rectangles may have inverted bounds.
    fn range_rect(&self, rect: &impl RectTrait<T = N>) -> Result<Vec<Point<N>>> {
        Ok(self.range(&Rect::from_rect(rect)?))
    }

    /// [`within`][Self::within] for any `geo_traits` coordinate.
    fn within_coord(&self, coord: &impl CoordTrait<T = N>, r: N) -> Result<Vec<Point<N>>> {
        self.within(&Point::from_coord(coord), r)
    }
}

/// Validate a query point and radius, returning the squared radius.
pub(crate) fn check_radius<N: IndexableNum>(q: &Point<N>, r: N) -> Result<N> {
    q.check_indexable()?;
    if r.is_nan() || r < N::zero() {
        return Err(PlanarIndexError::InvalidArgument(format!(
            "radius {:?} must be a non-negative number",
            r
        )));
    }
    Ok(r * r)
}
