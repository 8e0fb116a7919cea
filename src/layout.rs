use std::alloc::Layout;
use std::mem;

use crate::VectorError;

/// Alignment handed to `posix_memalign` for a block of `T` slots.
///
/// POSIX wants a power of two that is also a multiple of the pointer size, so
/// anything less aligned than a machine word is rounded up to one.
///
/// # Examples
///
/// ```rust
/// use std::mem;
/// use rvector::layout::block_align;
///
/// assert_eq!(block_align::<u8>(), mem::size_of::<usize>());
/// assert_eq!(block_align::<u128>(), mem::align_of::<u128>().max(mem::size_of::<usize>()));
/// ```
pub const fn block_align<T>() -> usize {
  let word = mem::size_of::<usize>();
  let align = mem::align_of::<T>();

  if align > word { align } else { word }
}

/// Layout of a block holding `capacity` slots of `T`.
///
/// Fails with [`VectorError::CapacityOverflow`] when the byte size would exceed
/// `isize::MAX`.
pub fn slot_layout<T>(capacity: usize) -> Result<Layout, VectorError> {
  Layout::array::<T>(capacity)
    .and_then(|layout| layout.align_to(block_align::<T>()))
    .map_err(|_| VectorError::CapacityOverflow { requested: capacity })
}
