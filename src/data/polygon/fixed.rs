use std::convert::TryFrom;
use std::ops::Deref;

use super::PolygonConvex;
use crate::data::Point;
use crate::{Error, PolygonScalar, Tolerance};

/// Convex polygon whose hull has exactly `N` vertices.
///
/// Built by composition: the points go through [`PolygonConvex::new`] first and
/// the resulting hull must then have `N` vertices. Everything else (area,
/// centroid, iteration) comes from the wrapped [`PolygonConvex`].
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonFixed<T, const N: usize>(PolygonConvex<T>);

pub type Hexagon<T> = PolygonFixed<T, 6>;

impl<T, const N: usize> PolygonFixed<T, N>
where
  T: PolygonScalar,
{
  pub fn empty() -> PolygonFixed<T, N> {
    PolygonFixed(PolygonConvex::empty())
  }

  /// # Errors
  /// * Any error from [`PolygonConvex::new`].
  /// * [`Error::VertexCountMismatch`] if the hull does not have `N` vertices.
  /// * [`Error::InsufficientVertices`] if `N < 3`.
  ///
  /// ```rust
  /// # use convex_polygon::data::{Hexagon, Point};
  /// # use convex_polygon::Error;
  /// // (3, 2) lies inside the hull of the other five points.
  /// let pts = vec![
  ///   Point::new([1.0, 1.0]),
  ///   Point::new([5.0, 1.0]),
  ///   Point::new([6.0, 3.0]),
  ///   Point::new([4.0, 5.0]),
  ///   Point::new([2.0, 4.0]),
  ///   Point::new([3.0, 2.0]),
  /// ];
  /// assert_eq!(
  ///   Hexagon::new(pts).err(),
  ///   Some(Error::VertexCountMismatch { expected: 6, found: 5 })
  /// );
  /// ```
  pub fn new(points: Vec<Point<T>>) -> Result<PolygonFixed<T, N>, Error> {
    PolygonFixed::with_tolerance(points, Tolerance::default())
  }

  pub fn with_tolerance(
    points: Vec<Point<T>>,
    tolerance: Tolerance<T>,
  ) -> Result<PolygonFixed<T, N>, Error> {
    if N < 3 {
      return Err(Error::InsufficientVertices);
    }
    PolygonFixed::try_from(PolygonConvex::with_tolerance(points, tolerance)?)
  }

  pub fn convex(&self) -> &PolygonConvex<T> {
    &self.0
  }

  pub fn take(&mut self) -> PolygonFixed<T, N> {
    std::mem::take(self)
  }
}

impl<T: PolygonScalar, const N: usize> Default for PolygonFixed<T, N> {
  fn default() -> Self {
    PolygonFixed::empty()
  }
}

impl<T, const N: usize> Deref for PolygonFixed<T, N> {
  type Target = PolygonConvex<T>;
  fn deref(&self) -> &PolygonConvex<T> {
    &self.0
  }
}

impl<T, const N: usize> From<PolygonFixed<T, N>> for PolygonConvex<T> {
  fn from(fixed: PolygonFixed<T, N>) -> PolygonConvex<T> {
    fixed.0
  }
}

// An empty polygon is accepted for every N >= 3.
impl<T, const N: usize> TryFrom<PolygonConvex<T>> for PolygonFixed<T, N> {
  type Error = Error;
  fn try_from(convex: PolygonConvex<T>) -> Result<Self, Error> {
    if N < 3 {
      return Err(Error::InsufficientVertices);
    }
    let found = convex.len();
    if found != 0 && found != N {
      tracing::debug!(expected = N, found, "hull has the wrong number of vertices");
      return Err(Error::VertexCountMismatch { expected: N, found });
    }
    Ok(PolygonFixed(convex))
  }
}

impl<T: PolygonScalar, const N: usize> TryFrom<Vec<Point<T>>> for PolygonFixed<T, N> {
  type Error = Error;
  fn try_from(points: Vec<Point<T>>) -> Result<Self, Error> {
    PolygonFixed::new(points)
  }
}
