use crate::PolygonScalar;

/// Numeric tolerances used when classifying turns.
///
/// Three points `p`, `q`, `r` are colinear when
/// `|cross(q - p, r - p)| <= colinear`. The default is
/// [`PolygonScalar::colinear_epsilon`]: `1e-9` for `f64`, `1e-5` for `f32`.
/// The same tolerance decides where [`Error::CoLinearViolation`](crate::Error::CoLinearViolation)
/// starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance<T> {
  pub colinear: T,
}

impl<T> Tolerance<T> {
  pub const fn new(colinear: T) -> Tolerance<T> {
    Tolerance { colinear }
  }
}

impl<T: PolygonScalar> Tolerance<T> {
  /// Tolerance that only accepts an exactly zero cross product.
  pub fn exact() -> Tolerance<T> {
    Tolerance::new(T::zero())
  }

  pub fn is_zero(&self, value: T) -> bool {
    value.abs() <= self.colinear
  }
}

impl<T: PolygonScalar> Default for Tolerance<T> {
  fn default() -> Self {
    Tolerance::new(T::colinear_epsilon())
  }
}
