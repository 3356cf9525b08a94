use crate::{PolygonScalar, Tolerance};

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}
use Orientation::*;

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// Cross products whose magnitude does not exceed
  /// [`PolygonScalar::colinear_epsilon`] count as [`CoLinear`](Orientation::CoLinear).
  ///
  /// # Polymorphism
  ///
  /// This function works with [Points](crate::data::Point) and raw arrays. You should prefer to
  /// use [Point::orientation](crate::data::Point::orientation) when possible.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use convex_polygon::data::Point;
  /// # use convex_polygon::Orientation;
  /// let p1 = Point::new([ 0.0, 0.0 ]);
  /// let p2 = Point::new([ 0.0, 1.0 ]); // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ 0.0, 2.0 ])).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ -1.0, 2.0 ])).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ 1.0, 2.0 ])).is_cw());
  /// ```
  pub fn new<T>(p1: &[T; 2], p2: &[T; 2], p3: &[T; 2]) -> Orientation
  where
    T: PolygonScalar,
  {
    Orientation::with_tolerance(p1, p2, p3, &Tolerance::default())
  }

  pub fn with_tolerance<T>(
    p1: &[T; 2],
    p2: &[T; 2],
    p3: &[T; 2],
    tolerance: &Tolerance<T>,
  ) -> Orientation
  where
    T: PolygonScalar,
  {
    let det = cross(p1, p2, p3);
    if tolerance.is_zero(det) {
      CoLinear
    } else if det > T::zero() {
      CounterClockWise
    } else {
      ClockWise
    }
  }

  pub fn is_colinear(self) -> bool {
    self == CoLinear
  }

  pub fn is_ccw(self) -> bool {
    self == CounterClockWise
  }

  pub fn is_cw(self) -> bool {
    self == ClockWise
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      CounterClockWise => ClockWise,
      ClockWise => CounterClockWise,
      CoLinear => CoLinear,
    }
  }
}

// (p2 - p1) x (p3 - p1)
pub(crate) fn cross<T>(p1: &[T; 2], p2: &[T; 2], p3: &[T; 2]) -> T
where
  T: PolygonScalar,
{
  let ux = p2[0] - p1[0];
  let uy = p2[1] - p1[1];
  let vx = p3[0] - p1[0];
  let vy = p3[1] - p1[1];
  ux * vy - uy * vx
}
