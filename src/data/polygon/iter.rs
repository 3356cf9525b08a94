use super::{Cursor, PolygonConvex};
use crate::data::DirectedEdge;

pub struct CursorIter<'a, T: 'a> {
  pub(crate) polygon: &'a PolygonConvex<T>,
  pub(crate) head: usize, // inclusive
  pub(crate) tail: usize, // exclusive
}

impl<T> Clone for CursorIter<'_, T> {
  fn clone(&self) -> Self {
    CursorIter {
      polygon: self.polygon,
      head: self.head,
      tail: self.tail,
    }
  }
}

impl<'a, T> Iterator for CursorIter<'a, T> {
  type Item = Cursor<'a, T>;

  fn next(&mut self) -> Option<Self::Item> {
    if self.head == self.tail {
      None
    } else {
      let out = Cursor {
        polygon: self.polygon,
        index: self.head,
      };
      self.head += 1;
      Some(out)
    }
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.len(), Some(self.len()))
  }
}

impl<T> ExactSizeIterator for CursorIter<'_, T> {
  fn len(&self) -> usize {
    self.tail - self.head
  }
}

impl<T> DoubleEndedIterator for CursorIter<'_, T> {
  fn next_back(&mut self) -> Option<Self::Item> {
    if self.head == self.tail {
      None
    } else {
      self.tail -= 1;
      Some(Cursor {
        polygon: self.polygon,
        index: self.tail,
      })
    }
  }
}

/// Boundary edges in traversal order, closing edge last.
pub struct EdgeIter<'a, T: 'a> {
  pub(crate) iter: CursorIter<'a, T>,
}

impl<'a, T> Iterator for EdgeIter<'a, T> {
  type Item = DirectedEdge<'a, T>;
  fn next(&mut self) -> Option<Self::Item> {
    let cursor = self.iter.next()?;
    Some(DirectedEdge {
      src: cursor.point(),
      dst: cursor.next().point(),
    })
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    self.iter.size_hint()
  }
}

impl<T> ExactSizeIterator for EdgeIter<'_, T> {}
