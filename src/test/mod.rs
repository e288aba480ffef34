//! Shared fixtures and helpers for tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{BruteForceSet, KdTree, Point, PointIndex, Rect};


/// The kdbush test points, on a 100 x 100 integer grid.
pub(crate) fn fixture_points() -> Vec<Point<f64>> {
    let coords: Vec<[i32; 2]> = vec![
        [54, 1],
        [97, 21],
        [65, 35],
        [33, 54],
        [95, 39],
        [54, 3],
        [53, 54],
        [84, 72],
        [33, 34],
        [43, 15],
        [52, 83],
        [81, 23],
        [1, 61],
        [38, 74],
        [11, 91],
        [24, 56],
        [90, 31],
        [25, 57],
        [46, 61],
        [29, 69],
        [49, 60],
        [4, 98],
        [71, 15],
        [60, 25],
        [38, 84],
        [52, 38],
        [94, 51],
        [13, 25],
        [77, 73],
        [88, 87],
        [6, 27],
        [58, 22],
        [53, 28],
        [27, 91],
        [96, 98],
        [93, 14],
        [22, 93],
        [45, 94],
        [18, 28],
        [35, 15],
        [19, 81],
        [20, 81],
        [67, 53],
        [43, 3],
        [47, 66],
        [48, 34],
        [46, 12],
        [32, 38],
        [43, 12],
        [39, 94],
        [88, 62],
        [66, 14],
        [84, 30],
        [72, 81],
        [41, 92],
        [26, 4],
        [6, 76],
        [47, 21],
        [57, 70],
        [71, 82],
        [50, 68],
        [96, 18],
        [40, 31],
        [78, 53],
        [71, 90],
        [32, 14],
        [55, 6],
        [32, 88],
        [62, 32],
        [21, 67],
        [73, 81],
        [44, 64],
        [29, 50],
        [70, 5],
        [6, 22],
        [68, 3],
        [11, 23],
        [20, 42],
        [21, 73],
        [63, 86],
        [9, 40],
        [99, 2],
        [99, 76],
        [56, 77],
        [83, 6],
        [21, 72],
        [78, 30],
        [75, 53],
        [41, 11],
        [95, 20],
        [30, 38],
        [96, 82],
        [65, 48],
        [33, 18],
        [87, 28],
        [10, 10],
        [40, 34],
        [10, 20],
        [47, 29],
        [46, 78],
    ];

    coords
        .into_iter()
        .map(|[x, y]| Point::new(x.into(), y.into()))
        .collect()
}

/// The domain covering [`fixture_points`].
pub(crate) fn fixture_domain() -> Rect<f64> {
    Rect::try_new(0., 0., 100., 100.).unwrap()
}

pub(crate) fn fixture_tree() -> KdTree<f64> {
    let mut tree = KdTree::with_domain(fixture_domain());
    for p in fixture_points() {
        assert!(tree.insert(p).unwrap());
    }
    tree
}

/// Uniformly distributed points in the unit square.
pub(crate) fn random_points(rng: &mut StdRng, n: usize) -> Vec<Point<f64>> {
    (0..n).map(|_| Point::new(rng.gen(), rng.gen())).collect()
}

/// A `size` x `size` grid in the unit square, with spacing `1 / size`.
///
/// Every row and column shares a coordinate, so most points sit on some node's split line.
pub(crate) fn grid_points(size: usize) -> Vec<Point<f64>> {
    let gap = 1.0 / size as f64;
    let mut points = Vec::with_capacity(size * size);
    for i in 0..size {
        for j in 0..size {
            points.push(Point::new(i as f64 * gap, j as f64 * gap));
        }
    }
    points
}

pub(crate) fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Insert the same points, in the same order, into both indexes.
pub(crate) fn load_both(points: &[Point<f64>]) -> (BruteForceSet<f64>, KdTree<f64>) {
    let mut brute = BruteForceSet::new();
    let mut tree = KdTree::new();
    for p in points {
        let added = brute.insert(*p).unwrap();
        assert_eq!(tree.insert(*p).unwrap(), added);
    }
    (brute, tree)
}

/// Sort query results so they can be compared regardless of traversal order.
pub(crate) fn sorted(mut points: Vec<Point<f64>>) -> Vec<Point<f64>> {
    points.sort();
    points
}
