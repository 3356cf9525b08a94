use array_init::array_init;
use std::ops::Sub;

use super::Vector;
use crate::PolygonScalar;

impl<'a, 'b, T> Sub<&'a Vector<T>> for &'b Vector<T>
where
  T: PolygonScalar,
{
  type Output = Vector<T>;

  fn sub(self: &'b Vector<T>, other: &'a Vector<T>) -> Self::Output {
    Vector(array_init(|i| self.0[i] - other.0[i]))
  }
}
