use array_init::array_init;
use std::ops::Sub;

use super::Point;
use super::Vector;
use crate::PolygonScalar;

// point - point = vector
impl<'a, 'b, T> Sub<&'a Point<T>> for &'b Point<T>
where
  T: PolygonScalar,
{
  type Output = Vector<T>;

  fn sub(self: &'b Point<T>, other: &'a Point<T>) -> Self::Output {
    Vector(array_init(|i| self.array[i] - other.array[i]))
  }
}

impl<T> Sub<Point<T>> for Point<T>
where
  T: PolygonScalar,
{
  type Output = Vector<T>;

  fn sub(self: Point<T>, other: Point<T>) -> Self::Output {
    Sub::sub(&self, &other)
  }
}
