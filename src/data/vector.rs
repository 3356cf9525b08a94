use array_init::array_init;
use num_traits::identities::Zero;
use std::iter::Sum;
use std::ops::Index;
use std::ops::Neg;

use crate::data::Point;
use crate::PolygonScalar;

#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Vector<T>(pub [T; 2]);

impl<T> Vector<T>
where
  T: PolygonScalar,
{
  pub fn squared_magnitude(&self) -> T {
    self.0[0] * self.0[0] + self.0[1] * self.0[1]
  }

  /// z-component of the 3D cross product. Positive when `other` is
  /// counter-clockwise from `self`.
  pub fn cross(&self, other: &Vector<T>) -> T {
    self.0[0] * other.0[1] - self.0[1] * other.0[0]
  }
}

impl<T> Index<usize> for Vector<T> {
  type Output = T;
  fn index(&self, index: usize) -> &T {
    self.0.index(index)
  }
}

impl<T> From<Point<T>> for Vector<T> {
  fn from(point: Point<T>) -> Vector<T> {
    Vector(point.array)
  }
}

mod add;
mod div;
mod mul;
mod sub;

impl<T> Zero for Vector<T>
where
  T: PolygonScalar,
{
  fn zero() -> Vector<T> {
    Vector([T::zero(), T::zero()])
  }
  fn is_zero(&self) -> bool {
    self.0.iter().all(Zero::is_zero)
  }
}

impl<T> Sum for Vector<T>
where
  T: PolygonScalar,
{
  fn sum<I>(iter: I) -> Vector<T>
  where
    I: Iterator<Item = Vector<T>>,
  {
    iter.fold(Zero::zero(), |acc, vec| acc + vec)
  }
}

impl<T> Neg for Vector<T>
where
  T: PolygonScalar,
{
  type Output = Self;
  fn neg(self) -> Self {
    Vector(array_init(|i| -self.0[i]))
  }
}
