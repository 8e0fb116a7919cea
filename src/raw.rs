use std::{alloc::Layout, fmt, marker::PhantomData, mem, ptr::{self, NonNull}};
use libc::c_void;
use tracing::{trace, warn};

use crate::{VectorError, layout};

/// An owned block of uninitialized slots for `T`.
///
/// `RawStorage` only knows how many slots it owns and where they live. It never
/// constructs or drops a `T`: whoever writes values into the slots is
/// responsible for dropping them before the storage goes away.
///
/// ```text
///   RawStorage<T> { ptr, capacity = 4 }
///
///   ptr ──►┌────────┬────────┬────────┬────────┐
///          │ slot 0 │ slot 1 │ slot 2 │ slot 3 │   (uninitialized)
///          └────────┴────────┴────────┴────────┘
/// ```
///
/// Blocks come from `posix_memalign(3)` and go back through `free(3)`.
pub struct RawStorage<T> {
  ptr: NonNull<T>,
  capacity: usize,
  _owns: PhantomData<T>,
}

unsafe impl<T: Send> Send for RawStorage<T> {}

unsafe impl<T: Sync> Sync for RawStorage<T> {}

impl<T> RawStorage<T> {
  /// Storage that owns nothing. Never calls the allocator.
  pub const fn new() -> Self {
    Self {
      ptr: NonNull::dangling(),
      capacity: 0,
      _owns: PhantomData,
    }
  }

  /// Allocates a block with room for `capacity` slots.
  ///
  /// A zero capacity yields empty storage without touching the allocator, and
  /// so does any capacity of a zero-sized `T`.
  pub fn allocate(capacity: usize) -> Result<Self, VectorError> {
    if capacity == 0 {
      return Ok(Self::new());
    }

    let layout = layout::slot_layout::<T>(capacity)?;

    if layout.size() == 0 {
      return Ok(Self {
        ptr: NonNull::dangling(),
        capacity,
        _owns: PhantomData,
      });
    }

    let address = unsafe { Self::allocate_block(layout) };

    let Some(ptr) = NonNull::new(address as *mut T) else {
      warn!(
        capacity,
        bytes = layout.size(),
        align = layout.align(),
        "allocator refused raw storage"
      );
      return Err(VectorError::AllocationFailure { layout });
    };

    trace!(
      capacity,
      bytes = layout.size(),
      align = layout.align(),
      address = ?ptr,
      "allocated raw storage"
    );

    Ok(Self {
      ptr,
      capacity,
      _owns: PhantomData,
    })
  }

  unsafe fn allocate_block(layout: Layout) -> *mut c_void {
    unsafe {
      let mut address: *mut c_void = ptr::null_mut();

      if libc::posix_memalign(&mut address, layout.align(), layout.size()) != 0 {
        return ptr::null_mut();
      }

      address
    }
  }

  /// Number of slots owned.
  #[inline]
  pub const fn capacity(&self) -> usize {
    self.capacity
  }

  /// Start of the block, or `None` when nothing is owned.
  #[inline]
  pub fn address(&self) -> Option<NonNull<T>> {
    (self.capacity != 0).then_some(self.ptr)
  }

  /// Pointer to slot 0. Dangling (but aligned and non-null) when empty.
  #[inline]
  pub const fn as_ptr(&self) -> *mut T {
    self.ptr.as_ptr()
  }

  /// Pointer to slot `index`.
  ///
  /// # Safety
  ///
  /// `index` must not exceed [`capacity`](Self::capacity). One past the last
  /// slot is allowed.
  #[inline]
  pub unsafe fn offset(
    &self,
    index: usize,
  ) -> *mut T {
    debug_assert!(
      index <= self.capacity,
      "slot {index} past capacity {}",
      self.capacity
    );

    unsafe { self.ptr.as_ptr().add(index) }
  }

  /// Exchanges blocks with `other`.
  #[inline]
  pub fn swap(
    &mut self,
    other: &mut Self,
  ) {
    mem::swap(&mut self.ptr, &mut other.ptr);
    mem::swap(&mut self.capacity, &mut other.capacity);
  }

  /// Moves the block out, leaving `self` empty.
  #[inline]
  pub fn take(&mut self) -> Self {
    mem::replace(self, Self::new())
  }
}

impl<T> Default for RawStorage<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> fmt::Debug for RawStorage<T> {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    f.debug_struct("RawStorage")
      .field("address", &self.address())
      .field("capacity", &self.capacity)
      .finish()
  }
}

impl<T> Drop for RawStorage<T> {
  fn drop(&mut self) {
    if self.capacity == 0 || mem::size_of::<T>() == 0 {
      return;
    }

    trace!(capacity = self.capacity, address = ?self.ptr, "released raw storage");

    unsafe { libc::free(self.ptr.as_ptr() as *mut c_void) }
  }
}
