//! A brute-force point set, used as the reference for the kd-tree.

mod index;

pub use index::BruteForceSet;
