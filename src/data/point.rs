use array_init::array_init;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::cmp::Ordering;
use std::fmt::Debug;
use std::ops::Deref;
use std::ops::Index;

use super::Vector;
use crate::{Orientation, PolygonScalar, Tolerance};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Point<T> {
  pub array: [T; 2],
}

// Random sampling.
impl<T> Distribution<Point<T>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T> {
    Point {
      array: array_init(|_| rng.gen()),
    }
  }
}

impl<T> Point<T> {
  pub const fn new(array: [T; 2]) -> Point<T> {
    Point { array }
  }

  pub fn x_coord(&self) -> &T {
    &self.array[0]
  }

  pub fn y_coord(&self) -> &T {
    &self.array[1]
  }

  pub fn as_vec(&self) -> Vector<T>
  where
    T: Clone,
  {
    Vector(self.array.clone())
  }

  pub fn cast<U, F>(&self, f: F) -> Point<U>
  where
    T: Clone,
    F: Fn(T) -> U,
  {
    Point {
      array: array_init(|i| f(self.array[i].clone())),
    }
  }
}

impl<T: PolygonScalar> Point<T> {
  pub fn zero() -> Self {
    Point {
      array: [T::zero(), T::zero()],
    }
  }

  pub fn squared_euclidean_distance(&self, rhs: &Point<T>) -> T {
    (self - rhs).squared_magnitude()
  }

  /// Compare the distances from `self` to `p` and from `self` to `q`.
  pub fn cmp_distance_to(&self, p: &Point<T>, q: &Point<T>) -> Ordering {
    self
      .squared_euclidean_distance(p)
      .total_cmp(&self.squared_euclidean_distance(q))
  }

  pub fn orientation(&self, q: &Point<T>, r: &Point<T>) -> Orientation {
    Orientation::new(&self.array, &q.array, &r.array)
  }

  pub fn orientation_with(&self, q: &Point<T>, r: &Point<T>, tolerance: &Tolerance<T>) -> Orientation {
    Orientation::with_tolerance(&self.array, &q.array, &r.array, tolerance)
  }

  pub fn is_finite(&self) -> bool {
    self.array.iter().all(|c| c.is_finite())
  }
}

impl<T> Index<usize> for Point<T> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T> Deref for Point<T> {
  type Target = [T; 2];
  fn deref(&self) -> &[T; 2] {
    &self.array
  }
}

impl<T> From<(T, T)> for Point<T> {
  fn from(point: (T, T)) -> Point<T> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl<T> From<[T; 2]> for Point<T> {
  fn from(array: [T; 2]) -> Point<T> {
    Point { array }
  }
}

impl<T> From<Vector<T>> for Point<T> {
  fn from(vector: Vector<T>) -> Point<T> {
    Point { array: vector.0 }
  }
}

mod add;
mod sub;
