// This module contains strategies for:
//  * points
//  * convex polygons
// A Strategy is a way to generate a shrinkable value.
use crate::data::{Point, PolygonConvex};

use core::ops::Range;
use proptest::collection::*;
use proptest::prelude::*;
use rand::SeedableRng;

// Integer valued coordinates keep areas and orientations exact.
const COORD_RANGE: Range<i32> = -100..100;

///////////////////////////////////////////////////////////////////////////////
// Point strategy

pub fn any_point() -> impl Strategy<Value = Point<f64>> {
  (COORD_RANGE, COORD_RANGE).prop_map(|(x, y)| Point::new([f64::from(x), f64::from(y)]))
}

///////////////////////////////////////////////////////////////////////////////
// Convex polygon strategies

// Hulls of small point clouds. Shrinks by dropping points.
pub fn any_convex() -> impl Strategy<Value = PolygonConvex<f64>> {
  vec(any_point(), 3..40).prop_filter_map("All points are colinear", |pts| {
    PolygonConvex::new(pts).ok()
  })
}

// Hulls of points in the unit square, seeded for reproducibility.
pub fn any_random_convex(size: Range<usize>) -> impl Strategy<Value = PolygonConvex<f64>> {
  (size, any::<u64>()).prop_map(|(n, seed)| {
    let rng = &mut rand::rngs::SmallRng::seed_from_u64(seed);
    PolygonConvex::random(n, rng)
  })
}
