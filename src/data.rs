mod directed_edge;
pub(crate) mod point;
pub mod polygon;
mod vector;

pub use directed_edge::*;

#[doc(inline)]
pub use crate::data::polygon::{Cursor, Hexagon, PolygonConvex, PolygonFixed};
pub use point::Point;
pub use vector::Vector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PointLocation {
  Inside,
  OnBoundary,
  Outside,
}
