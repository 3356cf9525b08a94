// #![deny(warnings)]
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Convex hulls of planar point sets, validated convex polygons, and the
//! area and centroid of those polygons.
//!
//! ```rust
//! # use convex_polygon::data::{Point, PolygonConvex};
//! let poly = PolygonConvex::new(vec![
//!   Point::new([0.0, 0.0]),
//!   Point::new([4.0, 4.0]),
//!   Point::new([4.0, 0.0]),
//!   Point::new([2.0, 2.0]),
//! ])
//! .unwrap();
//! assert_eq!(poly.len(), 3);
//! assert_eq!(poly.area(), 8.0);
//! ```
use num_traits::Float;
use ordered_float::OrderedFloat;
use std::cmp::Ordering;

pub mod algorithms;
pub mod data;
mod orientation;
mod tolerance;

pub use orientation::Orientation;
pub use tolerance::Tolerance;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// A non-empty point set with fewer than three points.
  InsufficientVertices,
  /// The hull collapsed to a segment or a point, or three consecutive vertices are colinear.
  CoLinearViolation,
  /// Two consecutive edges turn clockwise.
  ConvexViolation,
  /// The hull does not have the number of vertices a fixed-size polygon requires.
  VertexCountMismatch { expected: usize, found: usize },
  /// An input point has a NaN or infinite coordinate.
  NonFiniteCoordinate,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InsufficientVertices => write!(f, "Insufficient vertices"),
      Error::CoLinearViolation => write!(
        f,
        "Two or more points are colinear and no valid solution exists"
      ),
      Error::ConvexViolation => write!(f, "Convex violation"),
      Error::VertexCountMismatch { expected, found } => write!(
        f,
        "Expected a hull with {} vertices but found {}",
        expected, found
      ),
      Error::NonFiniteCoordinate => write!(f, "Non-finite coordinate"),
    }
  }
}

impl std::error::Error for Error {}

pub trait TotalOrd {
  fn total_cmp(&self, other: &Self) -> Ordering;
}

impl<A: TotalOrd> TotalOrd for &A {
  fn total_cmp(&self, other: &Self) -> Ordering {
    (*self).total_cmp(*other)
  }
}

impl<A: TotalOrd, B: TotalOrd> TotalOrd for (A, B) {
  fn total_cmp(&self, other: &Self) -> Ordering {
    self
      .0
      .total_cmp(&other.0)
      .then_with(|| self.1.total_cmp(&other.1))
  }
}

/// Coordinate type of points and polygons.
///
/// Only floating point types qualify. Each type carries the tolerance below
/// which a cross product counts as zero, see [`Tolerance`].
pub trait PolygonScalar: Float + TotalOrd + std::fmt::Debug {
  fn from_constant(val: i8) -> Self;
  /// Largest absolute cross product that is still classified as colinear.
  fn colinear_epsilon() -> Self;
}

macro_rules! floating_precision {
  ( $( $ty:ty => $eps:expr ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          <$ty>::total_cmp(self, other)
        }
      }

      impl PolygonScalar for $ty {
        fn from_constant(val: i8) -> Self {
          <$ty>::from(val)
        }
        fn colinear_epsilon() -> Self {
          $eps
        }
      }
    )*
  };
}

macro_rules! wrapped_floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for OrderedFloat<$ty> {
        fn total_cmp(&self, other: &Self) -> Ordering {
          self.cmp(other)
        }
      }

      impl PolygonScalar for OrderedFloat<$ty> {
        fn from_constant(val: i8) -> Self {
          OrderedFloat(<$ty>::from_constant(val))
        }
        fn colinear_epsilon() -> Self {
          OrderedFloat(<$ty>::colinear_epsilon())
        }
      }
    )*
  };
}

floating_precision!(f32 => 1e-5, f64 => 1e-9);
wrapped_floating_precision!(f32, f64);

#[cfg(test)]
pub mod testing;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn epsilons() {
    assert_eq!(f64::colinear_epsilon(), 1e-9);
    assert_eq!(f32::colinear_epsilon(), 1e-5);
    assert_eq!(OrderedFloat::<f64>::colinear_epsilon(), OrderedFloat(1e-9));
  }

  #[test]
  fn total_cmp_nan() {
    assert_eq!(TotalOrd::total_cmp(&1.0_f64, &f64::NAN), Ordering::Less);
    assert_eq!(
      TotalOrd::total_cmp(&(0.0_f64, 1.0_f64), &(0.0, 2.0)),
      Ordering::Less
    );
  }

  #[test]
  fn error_display() {
    assert_eq!(
      Error::VertexCountMismatch {
        expected: 6,
        found: 5
      }
      .to_string(),
      "Expected a hull with 6 vertices but found 5"
    );
    assert_eq!(Error::InsufficientVertices.to_string(), "Insufficient vertices");
    assert_eq!(Error::NonFiniteCoordinate.to_string(), "Non-finite coordinate");
  }
}
