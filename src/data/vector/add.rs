use array_init::array_init;
use std::ops::Add;

use super::Vector;
use crate::PolygonScalar;

impl<T> Add<Vector<T>> for Vector<T>
where
  T: PolygonScalar,
{
  type Output = Vector<T>;

  fn add(self: Vector<T>, other: Vector<T>) -> Self::Output {
    Vector(array_init(|i| self.0[i] + other.0[i]))
  }
}
