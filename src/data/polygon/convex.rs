use claims::debug_assert_ok;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::convert::TryFrom;
use std::ops::Index;

use super::{Cursor, CursorIter, EdgeIter};
use crate::algorithms::convex_hull::gift_wrapping::convex_hull_with;
use crate::data::{Point, PointLocation, Vector};
use crate::Orientation::*;
use crate::{Error, PolygonScalar, Tolerance};

/// Strictly convex polygon with its vertices in counter-clockwise order.
///
/// The vertex sequence is either empty or has at least three points, and no
/// three consecutive vertices (closing edge included) are colinear.
#[derive(Debug, Clone)]
pub struct PolygonConvex<T> {
  pub(crate) vertices: Vec<Point<T>>,
  pub(crate) tolerance: Tolerance<T>,
}

///////////////////////////////////////////////////////////////////////////////
// PolygonConvex

impl<T> PolygonConvex<T>
where
  T: PolygonScalar,
{
  pub fn empty() -> PolygonConvex<T> {
    PolygonConvex {
      vertices: Vec::new(),
      tolerance: Tolerance::default(),
    }
  }

  /// $O(nh)$ Convex hull of `points`.
  ///
  /// Interior points and points lying on an edge of the hull are dropped.
  ///
  /// # Errors
  /// * [`Error::InsufficientVertices`] if `points` has one or two elements.
  /// * [`Error::CoLinearViolation`] if the hull degenerates to a segment or a point.
  /// * [`Error::NonFiniteCoordinate`] if a point has a NaN or infinite coordinate.
  ///
  /// An empty input gives an empty polygon.
  ///
  /// ```rust
  /// # use convex_polygon::data::{Point, PolygonConvex};
  /// # use convex_polygon::Error;
  /// let colinear = vec![
  ///   Point::new([0.0, 0.0]),
  ///   Point::new([4.0, 4.0]),
  ///   Point::new([1.0, 1.0]),
  /// ];
  /// assert_eq!(PolygonConvex::new(colinear).err(), Some(Error::CoLinearViolation));
  /// assert!(PolygonConvex::<f64>::new(vec![]).unwrap().is_empty());
  /// ```
  pub fn new(points: Vec<Point<T>>) -> Result<PolygonConvex<T>, Error> {
    PolygonConvex::with_tolerance(points, Tolerance::default())
  }

  /// Same as [`PolygonConvex::new`] but classifies turns with `tolerance`.
  pub fn with_tolerance(
    points: Vec<Point<T>>,
    tolerance: Tolerance<T>,
  ) -> Result<PolygonConvex<T>, Error> {
    if points.is_empty() {
      return Ok(PolygonConvex {
        vertices: points,
        tolerance,
      });
    }
    convex_hull_with(points, tolerance)
  }

  pub fn from_points<I>(points: I) -> Result<PolygonConvex<T>, Error>
  where
    I: IntoIterator<Item = Point<T>>,
  {
    PolygonConvex::new(points.into_iter().collect())
  }

  /// $O(1)$ Assume that the vertices already form a convex polygon.
  ///
  /// # Safety
  /// The vertices have to be strictly convex and counter-clockwise, ie. no
  /// vertices are allowed to be concave or colinear. Debug builds check this.
  pub fn new_unchecked(vertices: Vec<Point<T>>) -> PolygonConvex<T> {
    PolygonConvex::new_unchecked_with(vertices, Tolerance::default())
  }

  pub fn new_unchecked_with(vertices: Vec<Point<T>>, tolerance: Tolerance<T>) -> PolygonConvex<T> {
    let convex = PolygonConvex {
      vertices,
      tolerance,
    };
    debug_assert_ok!(convex.validate());
    convex
  }

  /// $O(n)$
  pub fn validate(&self) -> Result<(), Error> {
    if self.vertices.is_empty() {
      return Ok(());
    }
    if self.vertices.len() < 3 {
      return Err(Error::InsufficientVertices);
    }
    for cursor in self.iter_boundary() {
      match cursor.orientation() {
        CounterClockWise => {}
        CoLinear => return Err(Error::CoLinearViolation),
        ClockWise => return Err(Error::ConvexViolation),
      }
    }
    // Locally convex is not enough: a pentagram turns left at every vertex.
    // Require the fan around the first vertex to sweep monotonically.
    let p0 = &self.vertices[0];
    for pair in self.vertices[1..].windows(2) {
      if p0.orientation_with(&pair[0], &pair[1], &self.tolerance) == ClockWise {
        return Err(Error::ConvexViolation);
      }
    }
    Ok(())
  }

  /// $O(\log n)$ Where `pt` lies relative to the polygon.
  ///
  /// ```rust
  /// # use convex_polygon::data::{Point, PointLocation, PolygonConvex};
  /// let square = PolygonConvex::new(vec![
  ///   Point::new([0.0, 0.0]),
  ///   Point::new([4.0, 0.0]),
  ///   Point::new([4.0, 4.0]),
  ///   Point::new([0.0, 4.0]),
  /// ]).unwrap();
  /// assert_eq!(square.locate(&Point::new([2.0, 2.0])), PointLocation::Inside);
  /// assert_eq!(square.locate(&Point::new([4.0, 1.0])), PointLocation::OnBoundary);
  /// assert_eq!(square.locate(&Point::new([5.0, 1.0])), PointLocation::Outside);
  /// ```
  pub fn locate(&self, pt: &Point<T>) -> PointLocation {
    let vertices = &self.vertices;
    let n = vertices.len();
    if n < 3 {
      return PointLocation::Outside;
    }
    let tolerance = &self.tolerance;
    let p0 = &vertices[0];
    let mut lower = 1;
    let mut upper = n - 1;
    while lower + 1 < upper {
      let middle = (lower + upper) / 2;
      if p0.orientation_with(&vertices[middle], pt, tolerance) == CounterClockWise {
        lower = middle;
      } else {
        upper = middle;
      }
    }
    let p1 = &vertices[lower];
    let p2 = &vertices[upper];
    let a = p0.orientation_with(p1, pt, tolerance);
    let b = p1.orientation_with(p2, pt, tolerance);
    let c = p2.orientation_with(p0, pt, tolerance);
    if a == ClockWise || b == ClockWise || c == ClockWise {
      PointLocation::Outside
    } else if b == CoLinear
      || (a == CoLinear && lower == 1)
      || (c == CoLinear && upper == n - 1)
    {
      PointLocation::OnBoundary
    } else {
      // Points on an inner diagonal of the fan are inside.
      PointLocation::Inside
    }
  }

  /// Twice the signed area. Positive for counter-clockwise vertices, zero for
  /// an empty polygon.
  pub fn signed_area_2x(&self) -> T {
    self
      .iter_boundary_edges()
      .map(|edge| edge.shoelace_term())
      .fold(T::zero(), |acc, term| acc + term)
  }

  pub fn signed_area(&self) -> T {
    self.signed_area_2x() / T::from_constant(2)
  }

  /// Area enclosed by the polygon, independent of winding. Zero for an empty polygon.
  ///
  /// ```rust
  /// # use convex_polygon::data::{Point, PolygonConvex};
  /// let triangle = PolygonConvex::new(vec![
  ///   Point::new([1.0, 1.0]),
  ///   Point::new([4.0, 1.0]),
  ///   Point::new([2.0, 5.0]),
  /// ]).unwrap();
  /// assert_eq!(triangle.area(), 6.0);
  /// ```
  pub fn area(&self) -> T {
    self.signed_area().abs()
  }

  /// Center of mass of the enclosed region, or `None` for an empty polygon.
  ///
  /// This is not the mean of the vertices: each edge contributes in
  /// proportion to the area of the triangle it spans with the origin.
  pub fn centroid(&self) -> Option<Point<T>> {
    if self.vertices.len() < 3 {
      return None;
    }
    let weighted: Vector<T> = self
      .iter_boundary_edges()
      .map(|edge| (edge.src.as_vec() + edge.dst.as_vec()) * edge.shoelace_term())
      .sum();
    let three = T::from_constant(3);
    Some(Point::from(weighted / (three * self.signed_area_2x())))
  }

  /// Move the vertices out, leaving an empty polygon behind.
  pub fn take(&mut self) -> PolygonConvex<T> {
    std::mem::take(self)
  }
}

impl<T> PolygonConvex<T>
where
  T: PolygonScalar,
  Standard: Distribution<T>,
{
  /// Convex hull of `n` (at least three) points sampled with `rng`.
  ///
  /// For `f64` the points are uniform in the unit square, so the hull
  /// usually has fewer than `n` vertices.
  pub fn random<R>(n: usize, rng: &mut R) -> PolygonConvex<T>
  where
    R: Rng + ?Sized,
  {
    let n = n.max(3);
    loop {
      let pts: Vec<Point<T>> = (0..n).map(|_| rng.gen::<Point<T>>()).collect();
      // All points colinear: try again.
      if let Ok(convex) = PolygonConvex::new(pts) {
        return convex;
      }
    }
  }
}

impl<T> PolygonConvex<T> {
  /// Vertices in counter-clockwise order, starting at the lowest (then leftmost) vertex.
  pub fn points(&self) -> &[Point<T>] {
    &self.vertices
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Point<T>> {
    self.vertices.iter()
  }

  pub fn len(&self) -> usize {
    self.vertices.len()
  }

  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  pub fn tolerance(&self) -> &Tolerance<T> {
    &self.tolerance
  }

  pub fn into_inner(self) -> Vec<Point<T>> {
    self.vertices
  }

  /// # Panics
  ///
  /// Panics if `idx` is not a vertex index.
  pub fn cursor(&self, idx: usize) -> Cursor<'_, T> {
    assert!(idx < self.vertices.len(), "vertex index out of bounds");
    Cursor {
      polygon: self,
      index: idx,
    }
  }

  pub fn iter_boundary(&self) -> CursorIter<'_, T> {
    CursorIter {
      polygon: self,
      head: 0,
      tail: self.vertices.len(),
    }
  }

  pub fn iter_boundary_edges(&self) -> EdgeIter<'_, T> {
    EdgeIter {
      iter: self.iter_boundary(),
    }
  }
}

///////////////////////////////////////////////////////////////////////////////
// Trait Implementations

impl<T: PolygonScalar> Default for PolygonConvex<T> {
  fn default() -> Self {
    PolygonConvex::empty()
  }
}

// Equal vertex sequences. The tolerance is not compared.
impl<T: PartialEq> PartialEq for PolygonConvex<T> {
  fn eq(&self, other: &Self) -> bool {
    self.vertices == other.vertices
  }
}

impl<T> Index<usize> for PolygonConvex<T> {
  type Output = Point<T>;
  fn index(&self, idx: usize) -> &Point<T> {
    self.vertices.index(idx)
  }
}

impl<'a, T> IntoIterator for &'a PolygonConvex<T> {
  type Item = &'a Point<T>;
  type IntoIter = std::slice::Iter<'a, Point<T>>;
  fn into_iter(self) -> Self::IntoIter {
    self.vertices.iter()
  }
}

impl<T> From<PolygonConvex<T>> for Vec<Point<T>> {
  fn from(convex: PolygonConvex<T>) -> Vec<Point<T>> {
    convex.vertices
  }
}

impl<T: PolygonScalar> TryFrom<Vec<Point<T>>> for PolygonConvex<T> {
  type Error = Error;
  fn try_from(points: Vec<Point<T>>) -> Result<Self, Error> {
    PolygonConvex::new(points)
  }
}

impl<T: PolygonScalar> TryFrom<&[Point<T>]> for PolygonConvex<T> {
  type Error = Error;
  fn try_from(points: &[Point<T>]) -> Result<Self, Error> {
    PolygonConvex::new(points.to_vec())
  }
}

impl<T: PolygonScalar, const N: usize> TryFrom<[Point<T>; N]> for PolygonConvex<T> {
  type Error = Error;
  fn try_from(points: [Point<T>; N]) -> Result<Self, Error> {
    PolygonConvex::new(Vec::from(points))
  }
}

///////////////////////////////////////////////////////////////////////////////
// Tests

#[cfg(test)]
mod tests {
  use super::*;

  use crate::testing::*;
  use claims::{assert_err, assert_ok};
  use proptest::prelude::*;
  use rand::SeedableRng;
  use test_strategy::proptest;

  fn pts(coords: &[(f64, f64)]) -> Vec<Point<f64>> {
    coords.iter().map(|&c| Point::from(c)).collect()
  }

  #[test]
  fn three_points_stay_a_triangle() {
    let poly = PolygonConvex::new(pts(&[(0., 0.), (1., 1.), (0., 2.)])).unwrap();
    assert_eq!(poly.len(), 3);
    assert_ok!(poly.validate());
  }

  #[test]
  fn clockwise_triangle_is_reordered() {
    let poly = PolygonConvex::new(pts(&[(0., 0.), (0., 2.), (1., 1.)])).unwrap();
    assert_eq!(poly.points(), pts(&[(0., 0.), (1., 1.), (0., 2.)]).as_slice());
  }

  #[test]
  fn validate_rejects_clockwise() {
    let poly = PolygonConvex {
      vertices: pts(&[(0., 0.), (0., 2.), (1., 1.)]),
      tolerance: Tolerance::default(),
    };
    assert_eq!(poly.validate(), Err(Error::ConvexViolation));
  }

  #[test]
  fn validate_rejects_colinear() {
    let poly = PolygonConvex {
      vertices: pts(&[(0., 0.), (1., 0.), (2., 0.), (1., 1.)]),
      tolerance: Tolerance::default(),
    };
    assert_eq!(poly.validate(), Err(Error::CoLinearViolation));
  }

  #[test]
  fn validate_rejects_two_vertices() {
    let poly = PolygonConvex {
      vertices: pts(&[(0., 0.), (1., 0.)]),
      tolerance: Tolerance::default(),
    };
    assert_eq!(poly.validate(), Err(Error::InsufficientVertices));
  }

  #[test]
  fn validate_rejects_pentagram() {
    // Five points of a regular pentagon visited in star order.
    let pentagon: Vec<Point<f64>> = (0..5_i32)
      .map(|i| {
        let angle = std::f64::consts::PI * 2.0 * f64::from(i) / 5.0;
        Point::new([angle.cos(), angle.sin()])
      })
      .collect();
    let star = [0, 2, 4, 1, 3].iter().map(|&i| pentagon[i]).collect();
    let poly = PolygonConvex {
      vertices: star,
      tolerance: Tolerance::default(),
    };
    assert_err!(poly.validate());
  }

  #[test]
  fn empty_polygon_properties() {
    let poly = PolygonConvex::<f64>::empty();
    assert_ok!(poly.validate());
    assert_eq!(poly.area(), 0.0);
    assert_eq!(poly.centroid(), None);
    assert_eq!(poly.locate(&Point::zero()), PointLocation::Outside);
    assert_eq!(poly.iter_boundary_edges().count(), 0);
  }

  #[test]
  fn area_and_centroid_are_winding_independent() {
    let ccw = PolygonConvex::new(pts(&[(0., 0.), (4., 0.), (4., 3.), (0., 3.)])).unwrap();
    let mut reversed = ccw.vertices.clone();
    reversed.reverse();
    let cw = PolygonConvex {
      vertices: reversed,
      tolerance: Tolerance::default(),
    };
    assert_eq!(ccw.signed_area(), 12.0);
    assert_eq!(cw.signed_area(), -12.0);
    assert_eq!(ccw.area(), cw.area());
    assert_eq!(ccw.centroid(), cw.centroid());
    assert_eq!(ccw.centroid(), Some(Point::new([2.0, 1.5])));
  }

  #[test]
  fn centroid_is_not_vertex_mean() {
    let poly = PolygonConvex::new(pts(&[(0., 0.), (4., 0.), (4., 4.), (0., 4.), (-1., 2.)])).unwrap();
    let centroid = poly.centroid().unwrap();
    let mean_x = poly.iter().map(|pt| pt.x_coord()).sum::<f64>() / poly.len() as f64;
    assert!((centroid.x_coord() - 47.0 / 27.0).abs() < 1e-9);
    assert!((centroid.y_coord() - 2.0).abs() < 1e-9);
    assert!((mean_x - 1.4).abs() < 1e-9);
  }

  #[test]
  fn f32_coordinates() {
    let poly: PolygonConvex<f32> = PolygonConvex::new(vec![
      Point::new([0.0, 0.0]),
      Point::new([4.0, 0.0]),
      Point::new([4.0, 3.0]),
      Point::new([0.0, 3.0]),
    ])
    .unwrap();
    assert_eq!(poly.area(), 12.0);
    assert_eq!(poly.centroid(), Some(Point::new([2.0, 1.5])));
  }

  #[test]
  fn locate_on_fan_diagonal_is_inside() {
    let square = PolygonConvex::new(pts(&[(0., 0.), (4., 0.), (4., 4.), (0., 4.)])).unwrap();
    assert_eq!(square.locate(&Point::new([2.0, 2.0])), PointLocation::Inside);
    assert_eq!(square.locate(&Point::new([0.0, 0.0])), PointLocation::OnBoundary);
    assert_eq!(square.locate(&Point::new([0.0, 2.0])), PointLocation::OnBoundary);
    assert_eq!(square.locate(&Point::new([2.0, 0.0])), PointLocation::OnBoundary);
    assert_eq!(square.locate(&Point::new([-1.0, -1.0])), PointLocation::Outside);
    assert_eq!(square.locate(&Point::new([5.0, 5.0])), PointLocation::Outside);
  }

  #[test]
  fn cursor_wraps() {
    let poly = PolygonConvex::new(pts(&[(0., 0.), (4., 0.), (4., 4.)])).unwrap();
    let first = poly.cursor(0);
    assert_eq!(first.prev().index(), 2);
    assert_eq!(first.next().next().next(), first);
    assert!(!first.is_colinear());
    assert_eq!(poly.iter_boundary().rev().map(Cursor::index).collect::<Vec<_>>(), vec![2, 1, 0]);
  }

  #[test]
  fn unchecked_vertices_are_kept_as_given() {
    let vertices = pts(&[(0., 0.), (4., 0.), (4., 4.), (0., 4.)]);
    let poly = PolygonConvex::new_unchecked(vertices.clone());
    assert_eq!(poly.points(), vertices.as_slice());
    assert_eq!(poly.into_inner(), vertices);

    let loose = PolygonConvex::new_unchecked_with(vertices.clone(), Tolerance::new(0.5));
    assert_eq!(loose.tolerance(), &Tolerance::new(0.5));
    assert_eq!(Vec::from(loose), vertices);
  }

  #[test]
  #[cfg(debug_assertions)]
  #[should_panic]
  fn unchecked_clockwise_vertices_panic_in_debug() {
    PolygonConvex::new_unchecked(pts(&[(0., 0.), (0., 4.), (4., 4.), (4., 0.)]));
  }

  #[test]
  fn take_leaves_empty() {
    let mut poly = PolygonConvex::new(pts(&[(0., 0.), (4., 0.), (4., 4.)])).unwrap();
    let moved = poly.take();
    assert_eq!(moved.len(), 3);
    assert!(poly.is_empty());
  }

  #[test]
  fn random_polygons_are_valid() {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(7);
    for n in [3, 10, 100].iter() {
      let poly = PolygonConvex::<f64>::random(*n, &mut rng);
      assert_ok!(poly.validate());
      assert!(poly.len() >= 3 && poly.len() <= *n);
    }
  }

  #[proptest]
  fn all_random_convex_polygons_are_valid(
    #[strategy(any_random_convex(3..100))] poly: PolygonConvex<f64>,
  ) {
    prop_assert_eq!(poly.validate(), Ok(()))
  }

  #[proptest]
  fn random_vertices_are_in_unit_square(
    #[strategy(any_random_convex(3..20))] poly: PolygonConvex<f64>,
  ) {
    for pt in poly.iter() {
      prop_assert!((0.0..1.0).contains(pt.x_coord()));
      prop_assert!((0.0..1.0).contains(pt.y_coord()));
    }
  }

  #[proptest]
  fn centroid_is_inside(#[strategy(any_convex())] poly: PolygonConvex<f64>) {
    let centroid = poly.centroid().unwrap();
    prop_assert_eq!(poly.locate(&centroid), PointLocation::Inside)
  }

  #[proptest]
  fn vertices_are_on_boundary(#[strategy(any_convex())] poly: PolygonConvex<f64>) {
    for pt in poly.iter() {
      prop_assert_eq!(poly.locate(pt), PointLocation::OnBoundary)
    }
  }

  #[proptest]
  fn area_is_positive(#[strategy(any_convex())] poly: PolygonConvex<f64>) {
    prop_assert!(poly.signed_area() > 0.0);
    prop_assert_eq!(poly.signed_area(), poly.area());
  }
}
