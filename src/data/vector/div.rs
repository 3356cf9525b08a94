use array_init::array_init;
use std::ops::Div;

use super::Vector;
use crate::PolygonScalar;

impl<T> Div<T> for Vector<T>
where
  T: PolygonScalar,
{
  type Output = Vector<T>;

  fn div(self: Vector<T>, other: T) -> Self::Output {
    Vector(array_init(|i| self.0[i] / other))
  }
}
