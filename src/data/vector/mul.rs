use array_init::array_init;
use std::ops::Mul;

use super::Vector;
use crate::PolygonScalar;

impl<T> Mul<T> for Vector<T>
where
  T: PolygonScalar,
{
  type Output = Vector<T>;

  fn mul(self: Vector<T>, other: T) -> Self::Output {
    Vector(array_init(|i| self.0[i] * other))
  }
}
