use std::cmp::Ordering;
use tracing::{debug, trace};

use crate::data::{Point, PolygonConvex};
use crate::{Error, Orientation, PolygonScalar, Tolerance, TotalOrd};

// https://en.wikipedia.org/wiki/Gift_wrapping_algorithm

// Properties:
//    No panics.
//    All Ok results are valid convex polygons.
//    No points are outside the resulting convex polygon.
/// Convex hull of a set of points.
///
/// [Gift Wrapping][wiki] algorithm for finding the smallest convex polygon which
/// contains all the given points.
///
/// The walk starts at the lowest point (ties broken by the smallest x
/// coordinate) and visits the hull counter-clockwise. When several
/// candidates are colinear with the current vertex the farthest one is taken,
/// so points on a hull edge never become vertices.
///
/// # Errors
/// * [`Error::InsufficientVertices`] if the input has fewer than three points.
/// * [`Error::CoLinearViolation`] if all points lie on a line (within
///   [`PolygonScalar::colinear_epsilon`]) or coincide.
/// * [`Error::NonFiniteCoordinate`] if a coordinate is NaN or infinite.
///
/// # Properties
/// * No points from the input set will be outside the returned convex polygon.
/// * All vertices in the convex polygon are from the input set.
///
/// # Time complexity
/// $O(nh)$ where h is the number of points on the convex hull.
///
/// # Examples
///
/// ```rust
/// # use convex_polygon::algorithms::convex_hull;
/// # use convex_polygon::data::Point;
/// # use convex_polygon::Error;
/// let empty_set: Vec<Point<f64>> = vec![];
/// assert_eq!(
///   convex_hull(empty_set).err(),
///   Some(Error::InsufficientVertices))
/// ```
///
/// ```rust
/// # use convex_polygon::algorithms::convex_hull;
/// # use convex_polygon::data::Point;
/// # use convex_polygon::Error;
/// let dups = vec![Point::new([0.0, 0.0])].repeat(3);
/// assert_eq!(
///   convex_hull(dups).err(),
///   Some(Error::CoLinearViolation))
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Gift_wrapping_algorithm
pub fn convex_hull<T>(pts: Vec<Point<T>>) -> Result<PolygonConvex<T>, Error>
where
  T: PolygonScalar,
{
  convex_hull_with(pts, Tolerance::default())
}

/// [`convex_hull`] with an explicit colinearity tolerance.
pub fn convex_hull_with<T>(
  pts: Vec<Point<T>>,
  tolerance: Tolerance<T>,
) -> Result<PolygonConvex<T>, Error>
where
  T: PolygonScalar,
{
  let n = pts.len();
  if n < 3 {
    debug!(points = n, "too few points for a polygon");
    return Err(Error::InsufficientVertices);
  }
  if let Some(index) = pts.iter().position(|pt| !pt.is_finite()) {
    debug!(index, "point has a non-finite coordinate");
    return Err(Error::NonFiniteCoordinate);
  }
  let lowest = lowest_point_index(&pts)?;

  let mut hull: Vec<Point<T>> = Vec::with_capacity(n);
  let mut p = lowest;

  loop {
    // Each input point can be a vertex at most once. Walking further means
    // the turn classification was inconsistent.
    if hull.len() == n {
      debug!(points = n, "gift wrapping did not close");
      return Err(Error::CoLinearViolation);
    }
    trace!(index = p, x = ?pts[p].x_coord(), y = ?pts[p].y_coord(), "hull vertex");
    hull.push(pts[p]);
    let mut q = (p + 1) % n;

    for i in 0..n {
      let orientation = pts[p].orientation_with(&pts[i], &pts[q], &tolerance);
      // check if 3 points are colinear, as we want to add the minimal number of points on convex hull
      if orientation == Orientation::CounterClockWise
        || (orientation == Orientation::CoLinear
          && pts[p].cmp_distance_to(&pts[i], &pts[q]) == Ordering::Greater)
      {
        q = i;
      }
    }

    // Colinearity within epsilon is not transitive: a farther, almost colinear
    // candidate may leave earlier points clearly clockwise of p -> q.
    let mut passes = 0;
    while let Some(i) = (0..n).find(|&i| {
      pts[p].orientation_with(&pts[i], &pts[q], &tolerance) == Orientation::CounterClockWise
    }) {
      passes += 1;
      if passes > n {
        debug!(points = n, "candidate selection did not settle");
        return Err(Error::CoLinearViolation);
      }
      trace!(from = q, to = i, "re-selecting candidate");
      q = i;
    }

    // Compare coordinates rather than indices so duplicates of the start close the loop.
    if pts[q] == pts[lowest] || pts[q] == pts[p] {
      break;
    }
    p = q;
  }

  if hull.len() < 3 {
    debug!(points = n, vertices = hull.len(), "hull is degenerate");
    return Err(Error::CoLinearViolation);
  }

  let convex = PolygonConvex {
    vertices: hull,
    tolerance,
  };
  if let Err(err) = convex.validate() {
    debug!(%err, "hull failed validation");
    return Err(err);
  }
  debug!(
    points = n,
    vertices = convex.len(),
    dropped = n - convex.len(),
    "convex hull"
  );
  Ok(convex)
}

// Finds the lowest point, leftmost among equals.
// O(n)
fn lowest_point_index<T>(pts: &[Point<T>]) -> Result<usize, Error>
where
  T: PolygonScalar,
{
  pts
    .iter()
    .enumerate()
    .min_by(|(_, a), (_, b)| {
      TotalOrd::total_cmp(&(a.y_coord(), a.x_coord()), &(b.y_coord(), b.x_coord()))
    })
    .map(|(index, _)| index)
    .ok_or(Error::InsufficientVertices)
}
