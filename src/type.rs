use std::fmt::Debug;

use num_traits::Float;

/// A trait for types that can be used for indexed coordinates.
///
/// This trait is sealed and cannot be implemented for external types. Nearest-neighbor search
/// needs square roots and infinities, so only the primitive floats are supported.
pub trait IndexableNum: private::Sealed + Float + Debug + Default + Send + Sync + 'static {}

impl IndexableNum for f32 {}

impl IndexableNum for f64 {}

/// The axis a kd-tree node splits its rectangle on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Vertical split line; compares x coordinates. Used at even depths.
    X,
    /// Horizontal split line; compares y coordinates. Used at odd depths.
    Y,
}

impl Axis {
    /// The split axis for a node at the given depth.
    #[inline]
    pub fn for_depth(depth: usize) -> Self {
        if depth % 2 == 0 {
            Axis::X
        } else {
            Axis::Y
        }
    }

    /// The axis used by the children of a node splitting on this axis.
    #[inline]
    pub fn next(self) -> Self {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

// https://rust-lang.github.io/api-guidelines/future-proofing.html#sealed-traits-protect-against-downstream-implementations-c-sealed
mod private {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}
