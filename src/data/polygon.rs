use std::ops::Index;

use crate::data::Point;
use crate::{Orientation, PolygonScalar};

mod iter;
pub use iter::*;

mod convex;
pub use convex::*;

mod fixed;
pub use fixed::*;

/// Position on the boundary of a [`PolygonConvex`]. Moving past the last
/// vertex wraps around to the first.
#[derive(Debug)]
pub struct Cursor<'a, T> {
  polygon: &'a PolygonConvex<T>,
  index: usize,
}

impl<'a, T> PartialEq for Cursor<'a, T> {
  fn eq(&self, other: &Cursor<'a, T>) -> bool {
    std::ptr::eq(self.polygon, other.polygon) && self.index == other.index
  }
}

// Can't derive it because T should not be 'Clone'.
impl<'a, T> Clone for Cursor<'a, T> {
  fn clone(&self) -> Self {
    *self
  }
}
impl<'a, T> Copy for Cursor<'a, T> {}

impl<'a, T> Cursor<'a, T> {
  pub fn index(self) -> usize {
    self.index
  }

  pub fn prev(mut self) -> Cursor<'a, T> {
    self.move_prev();
    self
  }

  pub fn next(mut self) -> Cursor<'a, T> {
    self.move_next();
    self
  }

  pub fn point(self: Cursor<'a, T>) -> &'a Point<T> {
    self.polygon.vertices.index(self.index)
  }

  pub fn move_next(&mut self) {
    self.index = (self.index + 1) % self.polygon.vertices.len();
  }

  pub fn move_prev(&mut self) {
    if self.index == 0 {
      self.index = self.polygon.vertices.len() - 1;
    } else {
      self.index -= 1;
    }
  }

  /// Turn made at this vertex when walking the boundary.
  pub fn orientation(&self) -> Orientation
  where
    T: PolygonScalar,
  {
    let p1 = self.prev().point();
    let p2 = self.point();
    let p3 = self.next().point();
    p1.orientation_with(p2, p3, &self.polygon.tolerance)
  }

  pub fn is_colinear(&self) -> bool
  where
    T: PolygonScalar,
  {
    self.orientation() == Orientation::CoLinear
  }
}
