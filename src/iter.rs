use std::{fmt, iter::FusedIterator, ptr, slice};

use crate::RawStorage;

/// Owning iterator returned by [`Vector::into_iter`](crate::Vector).
///
/// Takes over the vector's block. Values not yet yielded are dropped together
/// with the iterator.
pub struct IntoIter<T> {
  storage: RawStorage<T>,
  front: usize,
  back: usize,
}

impl<T> IntoIter<T> {
  pub(crate) fn new(
    storage: RawStorage<T>,
    len: usize,
  ) -> Self {
    Self {
      storage,
      front: 0,
      back: len,
    }
  }

  /// The values not yet yielded.
  pub fn as_slice(&self) -> &[T] {
    unsafe { slice::from_raw_parts(self.storage.offset(self.front), self.back - self.front) }
  }
}

impl<T> Iterator for IntoIter<T> {
  type Item = T;

  fn next(&mut self) -> Option<T> {
    if self.front == self.back {
      return None;
    }

    let value = unsafe { self.storage.offset(self.front).read() };
    self.front += 1;

    Some(value)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let remaining = self.back - self.front;
    (remaining, Some(remaining))
  }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
  fn next_back(&mut self) -> Option<T> {
    if self.front == self.back {
      return None;
    }

    self.back -= 1;

    Some(unsafe { self.storage.offset(self.back).read() })
  }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
  }
}

impl<T> Drop for IntoIter<T> {
  fn drop(&mut self) {
    unsafe {
      let rest = ptr::slice_from_raw_parts_mut(self.storage.offset(self.front), self.back - self.front);
      self.front = self.back;
      ptr::drop_in_place(rest);
    }
  }
}
