use std::alloc::{self, Layout};

use thiserror::Error;

/// Errors reported by [`RawStorage`](crate::RawStorage) and
/// [`Vector`](crate::Vector).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum VectorError {
  /// The allocator refused to hand out a block for this layout.
  #[error("failed to allocate {} bytes aligned to {}", .layout.size(), .layout.align())]
  AllocationFailure {
    /// Layout of the refused request.
    layout: Layout,
  },

  /// The byte size of the requested slot count does not fit in `isize`.
  #[error("capacity overflow: {requested} slots do not fit in the address space")]
  CapacityOverflow {
    /// Number of slots requested.
    requested: usize,
  },

  /// Checked access past the live elements.
  #[error("index {index} out of range for length {len}")]
  OutOfRange {
    /// Index that was asked for.
    index: usize,
    /// Number of live elements at the time.
    len: usize,
  },
}

/// Unwraps the result of a growth operation for trait impls that cannot
/// return an error (`Clone`, `From`, `Extend`, ...).
///
/// Allocation failures go through [`alloc::handle_alloc_error`], overflow panics,
/// matching what the standard collections do.
pub(crate) fn infallible<T>(result: Result<T, VectorError>) -> T {
  match result {
    Ok(value) => value,
    Err(VectorError::AllocationFailure { layout }) => alloc::handle_alloc_error(layout),
    Err(err) => panic!("{err}"),
  }
}
