use std::collections::btree_set;
use std::collections::BTreeSet;

use crate::error::{PlanarIndexError, Result};
use crate::point::Point;
use crate::r#trait::{check_radius, PointIndex};
use crate::r#type::IndexableNum;
use crate::rect::Rect;

/// An ordered set of unique points answering every query by a linear scan.
///
/// Queries are O(n). This structure exists to be obviously correct, so the faster indexes can
/// be checked against it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BruteForceSet<N: IndexableNum> {
    points: BTreeSet<Point<N>>,
}

impl<N: IndexableNum> BruteForceSet<N> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            points: BTreeSet::new(),
        }
    }

    /// Iterate over the stored points in (x, y) order.
    pub fn iter(&self) -> btree_set::Iter<'_, Point<N>> {
        self.points.iter()
    }
}

impl<N: IndexableNum> PointIndex<N> for BruteForceSet<N> {
    fn insert(&mut self, p: Point<N>) -> Result<bool> {
        p.check_indexable()?;
        Ok(self.points.insert(p))
    }

    fn contains(&self, p: &Point<N>) -> Result<bool> {
        p.check_indexable()?;
        Ok(self.points.contains(p))
    }

    fn len(&self) -> usize {
        self.points.len()
    }

    /// Scans every point. Among equidistant points the smallest in (x, y) order wins.
    fn nearest(&self, q: &Point<N>) -> Result<Point<N>> {
        q.check_indexable()?;

        let mut best: Option<(Point<N>, N)> = None;
        for p in self.points.iter() {
            let dist = p.distance_squared_to(q);
            match best {
                Some((_, best_dist)) if dist >= best_dist => {}
                _ => best = Some((*p, dist)),
            }
        }

        best.map(|(p, _)| p).ok_or(PlanarIndexError::EmptyIndex)
    }

    fn range(&self, rect: &Rect<N>) -> Vec<Point<N>> {
        self.points
            .iter()
            .filter(|p| rect.contains(p))
            .copied()
            .collect()
    }

    fn within(&self, q: &Point<N>, r: N) -> Result<Vec<Point<N>>> {
        let r2 = check_radius(q, r)?;
        Ok(self
            .points
            .iter()
            .filter(|p| p.distance_squared_to(q) <= r2)
            .copied()
            .collect())
    }
}

impl<'a, N: IndexableNum> IntoIterator for &'a BruteForceSet<N> {
    type Item = &'a Point<N>;
    type IntoIter = btree_set::Iter<'a, Point<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn scenario() -> BruteForceSet<f64> {
        let mut set = BruteForceSet::new();
        for (x, y) in [(0.2, 0.3), (0.5, 0.5), (0.9, 0.1)] {
            assert!(set.insert(Point::new(x, y)).unwrap());
        }
        set
    }

    #[test]
    fn insert_is_idempotent() {
        let mut set = scenario();
        assert_eq!(set.len(), 3);
        assert!(!set.insert(Point::new(0.5, 0.5)).unwrap());
        assert_eq!(set.len(), 3);
        assert!(set.contains(&Point::new(0.5, 0.5)).unwrap());
        assert!(!set.contains(&Point::new(0.5, 0.51)).unwrap());
    }

    #[test]
    fn nearest_and_range() {
        let set = scenario();
        assert_eq!(
            set.nearest(&Point::new(0.5, 0.49)).unwrap(),
            Point::new(0.5, 0.5)
        );

        let rect = Rect::try_new(0.0, 0.0, 0.6, 0.6).unwrap();
        assert_eq!(
            set.range(&rect),
            vec![Point::new(0.2, 0.3), Point::new(0.5, 0.5)]
        );
    }

    #[test]
    fn nearest_tie_prefers_smallest_point() {
        let mut set = BruteForceSet::new();
        set.insert(Point::new(0.75, 0.5)).unwrap();
        set.insert(Point::new(0.25, 0.5)).unwrap();
        assert_eq!(
            set.nearest(&Point::new(0.5, 0.5)).unwrap(),
            Point::new(0.25, 0.5)
        );
    }

    #[test]
    fn empty_set() {
        let set = BruteForceSet::<f64>::new();
        assert!(set.is_empty());
        assert_eq!(
            set.nearest(&Point::new(0.5, 0.5)),
            Err(PlanarIndexError::EmptyIndex)
        );
        assert!(set.range(&Rect::unit()).is_empty());
    }

    #[test]
    fn rejects_invalid_arguments() {
        let mut set = scenario();
        assert!(matches!(
            set.insert(Point::new(f64::NAN, 0.1)),
            Err(PlanarIndexError::InvalidArgument(_))
        ));
        assert_eq!(set.len(), 3);
        assert!(set.nearest(&Point::new(0.1, f64::INFINITY)).is_err());
        assert!(set.within(&Point::new(0.1, 0.1), -1.0).is_err());
    }

    #[test]
    fn within_radius() {
        let set = scenario();
        let found = set.within(&Point::new(0.2, 0.3), 0.0).unwrap();
        assert_eq!(found, vec![Point::new(0.2, 0.3)]);

        let mut found = set.within(&Point::new(0.35, 0.4), 0.2).unwrap();
        found.sort();
        assert_eq!(found, vec![Point::new(0.2, 0.3), Point::new(0.5, 0.5)]);
    }
}
