use super::{Point, Vector};
use crate::PolygonScalar;

///////////////////////////////////////////////////////////////////////////////
// DirectedEdge

// Directed edge from A to B, including A and excluding B.
#[derive(Debug, PartialEq)]
pub struct DirectedEdge<'a, T> {
  pub src: &'a Point<T>,
  pub dst: &'a Point<T>,
}

impl<T> Copy for DirectedEdge<'_, T> {}
impl<T> Clone for DirectedEdge<'_, T> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<T: PolygonScalar> DirectedEdge<'_, T> {
  pub fn vector(&self) -> Vector<T> {
    self.dst - self.src
  }

  /// Twice the signed area of the triangle (origin, src, dst). Summed over a
  /// closed boundary this is the shoelace formula.
  pub fn shoelace_term(&self) -> T {
    self.src.as_vec().cross(&self.dst.as_vec())
  }
}
