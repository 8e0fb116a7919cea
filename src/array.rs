use std::{
  cmp::Ordering,
  fmt,
  hash::{Hash, Hasher},
  mem::{self, ManuallyDrop},
  ops::{Deref, DerefMut, Index, IndexMut, Range},
  ptr,
  slice::{self, SliceIndex},
};
use tracing::debug;

use crate::{IntoIter, RawStorage, VectorError, error::infallible};

/// A growable array over a single [`RawStorage`] block.
///
/// Slots `[0, len)` hold live values, slots `[len, capacity)` are
/// uninitialized. Growing allocates a new block, moves every live value over and
/// hands the old block back to the allocator.
///
/// ```text
///   Vector<T> { storage, len = 3 }
///
///   storage ──►┌──────┬──────┬──────┬──────────┐
///              │  a   │  b   │  c   │ (uninit) │   capacity = 4
///              └──────┴──────┴──────┴──────────┘
///                ▲                    ▲
///              begin                 end
/// ```
///
/// Any operation that has to grow either finishes completely or returns an
/// error with the vector untouched.
///
/// ```rust
/// use rvector::Vector;
///
/// let mut numbers = Vector::new();
/// numbers.push_back(1).unwrap();
/// numbers.push_back(3).unwrap();
/// numbers.insert(1, 2).unwrap();
///
/// assert_eq!(numbers, [1, 2, 3]);
/// assert_eq!(numbers.capacity(), 4);
/// ```
pub struct Vector<T> {
  storage: RawStorage<T>,
  len: usize,
}

/// Moves `count` live values from `src` into the uninitialized slots at `dst`.
///
/// A move never runs user code and cannot fail, so relocation is always a move.
/// The source slots are logically uninitialized afterwards.
#[inline]
unsafe fn relocate<T>(
  src: *const T,
  dst: *mut T,
  count: usize,
) {
  unsafe { ptr::copy_nonoverlapping(src, dst, count) }
}

impl<T> Vector<T> {
  /// An empty vector. Does not allocate.
  pub const fn new() -> Self {
    Self {
      storage: RawStorage::new(),
      len: 0,
    }
  }

  /// An empty vector with room for `capacity` values.
  pub fn with_capacity(capacity: usize) -> Result<Self, VectorError> {
    Ok(Self {
      storage: RawStorage::allocate(capacity)?,
      len: 0,
    })
  }

  /// A vector of `len` default values, with capacity exactly `len`.
  pub fn with_len(len: usize) -> Result<Self, VectorError>
  where
    T: Default,
  {
    let mut vector = Self::with_capacity(len)?;
    vector.fill_with(len, T::default);
    Ok(vector)
  }

  /// A vector of `len` copies of `value`.
  pub fn from_elem(
    len: usize,
    value: T,
  ) -> Result<Self, VectorError>
  where
    T: Clone,
  {
    let mut vector = Self::with_capacity(len)?;

    if len > 0 {
      vector.fill_with(len - 1, || value.clone());
      unsafe { vector.push_unchecked(value) };
    }

    Ok(vector)
  }

  /// A vector holding clones of `items`.
  ///
  /// If a clone panics, the values cloned so far are dropped and `items` is
  /// left alone.
  pub fn from_slice(items: &[T]) -> Result<Self, VectorError>
  where
    T: Clone,
  {
    let mut vector = Self::with_capacity(items.len())?;

    for item in items {
      unsafe { vector.push_unchecked(item.clone()) };
    }

    Ok(vector)
  }

  #[inline]
  pub const fn len(&self) -> usize {
    self.len
  }

  #[inline]
  pub const fn capacity(&self) -> usize {
    self.storage.capacity()
  }

  #[inline]
  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }

  #[inline]
  pub const fn as_ptr(&self) -> *const T {
    self.storage.as_ptr()
  }

  #[inline]
  pub const fn as_mut_ptr(&mut self) -> *mut T {
    self.storage.as_ptr()
  }

  /// First and one-past-last live element.
  ///
  /// Both pointers go stale as soon as the vector grows or shifts.
  pub fn as_ptr_range(&self) -> Range<*const T> {
    self.as_slice().as_ptr_range()
  }

  #[inline]
  pub fn as_slice(&self) -> &[T] {
    unsafe { slice::from_raw_parts(self.storage.as_ptr(), self.len) }
  }

  #[inline]
  pub fn as_mut_slice(&mut self) -> &mut [T] {
    unsafe { slice::from_raw_parts_mut(self.storage.as_ptr(), self.len) }
  }

  /// Checked access.
  ///
  /// # Examples
  ///
  /// ```rust
  /// use rvector::{VectorError, vector};
  ///
  /// let numbers = vector![10, 20, 30];
  ///
  /// assert_eq!(numbers.at(1), Ok(&20));
  /// assert_eq!(numbers.at(5), Err(VectorError::OutOfRange { index: 5, len: 3 }));
  /// ```
  pub fn at(
    &self,
    index: usize,
  ) -> Result<&T, VectorError> {
    self
      .as_slice()
      .get(index)
      .ok_or(VectorError::OutOfRange { index, len: self.len })
  }

  pub fn at_mut(
    &mut self,
    index: usize,
  ) -> Result<&mut T, VectorError> {
    let len = self.len;

    self
      .as_mut_slice()
      .get_mut(index)
      .ok_or(VectorError::OutOfRange { index, len })
  }

  /// # Safety
  ///
  /// `index` must be less than [`len`](Self::len). Only checked with debug
  /// assertions on.
  #[inline]
  pub unsafe fn get_unchecked(
    &self,
    index: usize,
  ) -> &T {
    debug_assert!(index < self.len, "index {index} out of range for length {}", self.len);

    unsafe { &*self.storage.offset(index) }
  }

  /// # Safety
  ///
  /// Same contract as [`get_unchecked`](Self::get_unchecked).
  #[inline]
  pub unsafe fn get_unchecked_mut(
    &mut self,
    index: usize,
  ) -> &mut T {
    debug_assert!(index < self.len, "index {index} out of range for length {}", self.len);

    unsafe { &mut *self.storage.offset(index) }
  }

  pub fn front(&self) -> Option<&T> {
    self.as_slice().first()
  }

  pub fn front_mut(&mut self) -> Option<&mut T> {
    self.as_mut_slice().first_mut()
  }

  pub fn back(&self) -> Option<&T> {
    self.as_slice().last()
  }

  pub fn back_mut(&mut self) -> Option<&mut T> {
    self.as_mut_slice().last_mut()
  }

  /// Grows capacity to exactly `capacity` if it is currently smaller.
  ///
  /// Never shrinks and never touches the live values beyond moving them.
  pub fn reserve(
    &mut self,
    capacity: usize,
  ) -> Result<(), VectorError> {
    if capacity > self.capacity() {
      self.grow_to(capacity)?;
    }

    Ok(())
  }

  /// Resizes to `len`, filling new slots with `T::default()`.
  ///
  /// Growing reserves exactly `len` slots first.
  pub fn resize(
    &mut self,
    len: usize,
  ) -> Result<(), VectorError>
  where
    T: Default,
  {
    self.resize_with(len, T::default)
  }

  /// Resizes to `len`, filling new slots with values from `make`.
  pub fn resize_with<F>(
    &mut self,
    len: usize,
    make: F,
  ) -> Result<(), VectorError>
  where
    F: FnMut() -> T,
  {
    if len <= self.len {
      self.truncate(len);
      return Ok(());
    }

    self.reserve(len)?;
    self.fill_with(len - self.len, make);

    Ok(())
  }

  /// Drops every value past `len`. Capacity is unchanged.
  pub fn truncate(
    &mut self,
    len: usize,
  ) {
    if len >= self.len {
      return;
    }

    unsafe {
      let tail = ptr::slice_from_raw_parts_mut(self.storage.offset(len), self.len - len);
      self.len = len;
      ptr::drop_in_place(tail);
    }
  }

  pub fn clear(&mut self) {
    self.truncate(0);
  }

  /// Appends `value`, doubling capacity (or taking one slot) when full.
  pub fn push_back(
    &mut self,
    value: T,
  ) -> Result<&mut T, VectorError> {
    self.emplace_back(|| value)
  }

  /// Appends the value built by `make`.
  ///
  /// `make` runs after any allocation has succeeded; if it panics the vector is
  /// left as it was.
  pub fn emplace_back<F>(
    &mut self,
    make: F,
  ) -> Result<&mut T, VectorError>
  where
    F: FnOnce() -> T,
  {
    let index = self.emplace(self.len, make)?;

    Ok(unsafe { &mut *self.storage.offset(index) })
  }

  /// Removes and returns the last value.
  pub fn pop_back(&mut self) -> Option<T> {
    if self.len == 0 {
      return None;
    }

    self.len -= 1;

    Some(unsafe { self.storage.offset(self.len).read() })
  }

  /// Inserts `value` before position `index` and returns `index`.
  ///
  /// # Panics
  ///
  /// Panics if `index > len`.
  pub fn insert(
    &mut self,
    index: usize,
    value: T,
  ) -> Result<usize, VectorError> {
    self.emplace(index, || value)
  }

  /// Inserts the value built by `make` before position `index`.
  ///
  /// ```text
  ///   emplace(1, make), with spare capacity:
  ///
  ///   ┌───┬───┬───┬───┐        ┌───┬───┬───┬───┐        ┌───┬───┬───┬───┐
  ///   │ a │ b │ c │   │  ───►  │ a │ b │ b │ c │  ───►  │ a │ x │ b │ c │
  ///   └───┴───┴───┴───┘        └───┴───┴───┴───┘        └───┴───┴───┴───┘
  ///                             shift [1, 3) right       write x at 1
  ///
  ///   emplace(1, make), full:
  ///
  ///   old ┌───┬───┐         new ┌───┬───┬───┬───┐
  ///       │ a │ b │   ───►      │ a │ x │ b │   │
  ///       └───┴───┘             └───┴───┴───┴───┘
  ///                             x first, then a and b around it
  /// ```
  ///
  /// # Panics
  ///
  /// Panics if `index > len`.
  pub fn emplace<F>(
    &mut self,
    index: usize,
    make: F,
  ) -> Result<usize, VectorError>
  where
    F: FnOnce() -> T,
  {
    let len = self.len;

    assert!(index <= len, "insertion index {index} past length {len}");

    if len == self.capacity() {
      let mut fresh: RawStorage<T> = RawStorage::allocate(self.grown_capacity()?)?;

      debug!(
        from = self.capacity(),
        to = fresh.capacity(),
        len,
        "relocating elements"
      );

      unsafe {
        fresh.offset(index).write(make());
        relocate(self.storage.as_ptr(), fresh.as_ptr(), index);
        relocate(self.storage.offset(index), fresh.offset(index + 1), len - index);
      }

      self.storage.swap(&mut fresh);
    } else {
      let value = make();

      unsafe {
        let slot = self.storage.offset(index);
        ptr::copy(slot, slot.add(1), len - index);
        slot.write(value);
      }
    }

    self.len += 1;

    Ok(index)
  }

  /// Removes and returns the value at `index`, shifting the tail left.
  ///
  /// # Panics
  ///
  /// Panics if `index >= len`.
  pub fn remove(
    &mut self,
    index: usize,
  ) -> T {
    let len = self.len;

    assert!(index < len, "removal index {index} out of range for length {len}");

    unsafe {
      let slot = self.storage.offset(index);
      let removed = slot.read();
      ptr::copy(slot.add(1), slot, len - index - 1);
      self.len = len - 1;
      removed
    }
  }

  /// Drops the value at `index` and returns the index now holding the next
  /// value (equal to `len` when the last one was erased).
  ///
  /// # Panics
  ///
  /// Panics if `index >= len`.
  pub fn erase(
    &mut self,
    index: usize,
  ) -> usize {
    drop(self.remove(index));
    index
  }

  pub fn swap(
    &mut self,
    other: &mut Self,
  ) {
    self.storage.swap(&mut other.storage);
    mem::swap(&mut self.len, &mut other.len);
  }

  /// Moves everything out, leaving `self` with no values and no block.
  pub fn take(&mut self) -> Self {
    mem::take(self)
  }

  fn grown_capacity(&self) -> Result<usize, VectorError> {
    match self.capacity() {
      0 => Ok(1),
      capacity => capacity.checked_mul(2).ok_or(VectorError::CapacityOverflow {
        requested: capacity.saturating_mul(2),
      }),
    }
  }

  /// Makes room for `additional` more values, doubling when that is larger
  /// than the exact fit so repeated small appends stay amortized.
  fn reserve_for(
    &mut self,
    additional: usize,
  ) -> Result<(), VectorError> {
    let needed = self
      .len
      .checked_add(additional)
      .ok_or(VectorError::CapacityOverflow { requested: usize::MAX })?;

    if needed <= self.capacity() {
      return Ok(());
    }

    self.grow_to(needed.max(self.grown_capacity()?))
  }

  fn grow_to(
    &mut self,
    capacity: usize,
  ) -> Result<(), VectorError> {
    let mut fresh: RawStorage<T> = RawStorage::allocate(capacity)?;

    debug!(
      from = self.capacity(),
      to = capacity,
      len = self.len,
      "relocating elements"
    );

    unsafe { relocate(self.storage.as_ptr(), fresh.as_ptr(), self.len) };
    self.storage.swap(&mut fresh);

    Ok(())
  }

  /// Caller guarantees `len < capacity`.
  #[inline]
  unsafe fn push_unchecked(
    &mut self,
    value: T,
  ) {
    debug_assert!(self.len < self.capacity());

    unsafe { self.storage.offset(self.len).write(value) };
    self.len += 1;
  }

  /// Appends `count` values from `make` into spare capacity. A panic in `make`
  /// keeps everything written so far.
  fn fill_with<F>(
    &mut self,
    count: usize,
    mut make: F,
  ) where
    F: FnMut() -> T,
  {
    assert!(count <= self.capacity() - self.len);

    for _ in 0..count {
      unsafe { self.push_unchecked(make()) };
    }
  }
}

impl<T> Drop for Vector<T> {
  fn drop(&mut self) {
    unsafe { ptr::drop_in_place(self.as_mut_slice()) }
  }
}

impl<T> Default for Vector<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: Clone> Clone for Vector<T> {
  fn clone(&self) -> Self {
    infallible(Self::from_slice(self.as_slice()))
  }

  /// Reuses the existing block when `source` fits in it: the common prefix is
  /// assigned in place, then the rest is cloned in or dropped.
  fn clone_from(
    &mut self,
    source: &Self,
  ) {
    if source.len > self.capacity() {
      let mut fresh = source.clone();
      self.swap(&mut fresh);
      return;
    }

    let common = self.len.min(source.len);
    self.as_mut_slice()[..common].clone_from_slice(&source[..common]);

    if source.len > self.len {
      for item in &source[common..] {
        unsafe { self.push_unchecked(item.clone()) };
      }
    } else {
      self.truncate(source.len);
    }
  }
}

impl<T> Deref for Vector<T> {
  type Target = [T];

  #[inline]
  fn deref(&self) -> &[T] {
    self.as_slice()
  }
}

impl<T> DerefMut for Vector<T> {
  #[inline]
  fn deref_mut(&mut self) -> &mut [T] {
    self.as_mut_slice()
  }
}

impl<T> AsRef<[T]> for Vector<T> {
  fn as_ref(&self) -> &[T] {
    self.as_slice()
  }
}

impl<T> AsMut<[T]> for Vector<T> {
  fn as_mut(&mut self) -> &mut [T] {
    self.as_mut_slice()
  }
}

impl<T, I: SliceIndex<[T]>> Index<I> for Vector<T> {
  type Output = I::Output;

  #[inline]
  fn index(
    &self,
    index: I,
  ) -> &Self::Output {
    Index::index(self.as_slice(), index)
  }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for Vector<T> {
  #[inline]
  fn index_mut(
    &mut self,
    index: I,
  ) -> &mut Self::Output {
    IndexMut::index_mut(self.as_mut_slice(), index)
  }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    f.debug_list().entries(self.iter()).finish()
  }
}

impl<T: PartialEq<U>, U> PartialEq<Vector<U>> for Vector<T> {
  fn eq(
    &self,
    other: &Vector<U>,
  ) -> bool {
    self.as_slice() == other.as_slice()
  }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for Vector<T> {
  fn eq(
    &self,
    other: &[U; N],
  ) -> bool {
    self.as_slice() == &other[..]
  }
}

impl<T: PartialEq<U>, U> PartialEq<[U]> for Vector<T> {
  fn eq(
    &self,
    other: &[U],
  ) -> bool {
    self.as_slice() == other
  }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: PartialOrd> PartialOrd for Vector<T> {
  fn partial_cmp(
    &self,
    other: &Self,
  ) -> Option<Ordering> {
    self.as_slice().partial_cmp(other.as_slice())
  }
}

impl<T: Ord> Ord for Vector<T> {
  fn cmp(
    &self,
    other: &Self,
  ) -> Ordering {
    self.as_slice().cmp(other.as_slice())
  }
}

impl<T: Hash> Hash for Vector<T> {
  fn hash<H: Hasher>(
    &self,
    state: &mut H,
  ) {
    self.as_slice().hash(state);
  }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
  fn from(items: [T; N]) -> Self {
    let mut vector = infallible(Self::with_capacity(N));

    for item in items {
      unsafe { vector.push_unchecked(item) };
    }

    vector
  }
}

impl<T: Clone> From<&[T]> for Vector<T> {
  fn from(items: &[T]) -> Self {
    infallible(Self::from_slice(items))
  }
}

impl<T> Extend<T> for Vector<T> {
  fn extend<I: IntoIterator<Item = T>>(
    &mut self,
    iter: I,
  ) {
    let iter = iter.into_iter();
    let (lower, _) = iter.size_hint();

    infallible(self.reserve_for(lower));

    for item in iter {
      infallible(self.push_back(item));
    }
  }
}

impl<T> FromIterator<T> for Vector<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    let mut vector = Self::new();
    vector.extend(iter);
    vector
  }
}

impl<T> IntoIterator for Vector<T> {
  type Item = T;
  type IntoIter = IntoIter<T>;

  fn into_iter(self) -> IntoIter<T> {
    let mut this = ManuallyDrop::new(self);
    let len = this.len;

    IntoIter::new(this.storage.take(), len)
  }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
  type Item = &'a T;
  type IntoIter = slice::Iter<'a, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
  type Item = &'a mut T;
  type IntoIter = slice::IterMut<'a, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter_mut()
  }
}

#[cfg(test)]
mod tests {
  use std::collections::hash_map::DefaultHasher;

  use super::*;
  use crate::vector;

  fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
  }

  #[test]
  fn test_push_insert_erase_resize() {
    let mut numbers = Vector::new();

    numbers.push_back(1).unwrap();
    numbers.push_back(2).unwrap();
    numbers.push_back(3).unwrap();
    assert_eq!(numbers.len(), 3);
    assert_eq!(numbers, [1, 2, 3]);

    assert_eq!(numbers.insert(1, 9).unwrap(), 1);
    assert_eq!(numbers, [1, 9, 2, 3]);
    assert_eq!(numbers.len(), 4);

    assert_eq!(numbers.erase(0), 0);
    assert_eq!(numbers, [9, 2, 3]);
    assert_eq!(numbers.len(), 3);

    numbers.resize(5).unwrap();
    assert_eq!(numbers, [9, 2, 3, 0, 0]);
    assert_eq!(numbers.len(), 5);

    let capacity = numbers.capacity();
    numbers.resize(2).unwrap();
    assert_eq!(numbers, [9, 2]);
    assert_eq!(numbers.len(), 2);
    assert_eq!(numbers.capacity(), capacity);
    assert!(numbers.capacity() >= 4);
  }

  #[test]
  fn test_checked_access() {
    let mut numbers = vector![10, 20, 30];

    assert_eq!(numbers.at(5), Err(VectorError::OutOfRange { index: 5, len: 3 }));
    assert_eq!(numbers.at(1), Ok(&20));
    assert_eq!(numbers.at(3), Err(VectorError::OutOfRange { index: 3, len: 3 }));

    *numbers.at_mut(2).unwrap() = 31;
    assert_eq!(numbers[2], 31);
    assert!(numbers.at_mut(3).is_err());

    unsafe {
      assert_eq!(*numbers.get_unchecked(0), 10);
      *numbers.get_unchecked_mut(0) = 11;
    }
    assert_eq!(numbers, [11, 20, 31]);
  }

  #[test]
  #[should_panic]
  fn test_index_out_of_range_panics() {
    let numbers = vector![1, 2, 3];
    let _ = numbers[3];
  }

  #[test]
  fn test_capacity_doubles() {
    let mut numbers = Vector::new();
    let mut capacities = Vec::new();

    for i in 0..9 {
      numbers.push_back(i).unwrap();
      capacities.push(numbers.capacity());
    }

    assert_eq!(capacities, [1, 2, 4, 4, 8, 8, 8, 8, 16]);
  }

  #[test]
  fn test_front_back() {
    let mut numbers: Vector<i32> = Vector::new();
    assert_eq!(numbers.front(), None);
    assert_eq!(numbers.back(), None);

    numbers.extend([4, 5, 6]);
    assert_eq!(numbers.front(), Some(&4));
    assert_eq!(numbers.back(), Some(&6));

    *numbers.front_mut().unwrap() = 40;
    *numbers.back_mut().unwrap() = 60;
    assert_eq!(numbers, [40, 5, 60]);
  }

  #[test]
  fn test_pop_back() {
    let mut numbers = vector![1, 2];

    assert_eq!(numbers.pop_back(), Some(2));
    assert_eq!(numbers.pop_back(), Some(1));
    assert_eq!(numbers.pop_back(), None);
    assert_eq!(numbers.capacity(), 2);
  }

  #[test]
  fn test_insert_positions() {
    let mut letters = Vector::with_capacity(8).unwrap();
    let start = letters.as_ptr();

    letters.insert(0, 'c').unwrap();
    letters.insert(0, 'a').unwrap();
    letters.insert(1, 'b').unwrap();
    letters.insert(3, 'd').unwrap();

    assert_eq!(letters, ['a', 'b', 'c', 'd']);
    assert_eq!(letters.as_ptr(), start);
  }

  #[test]
  fn test_insert_when_full_relocates() {
    let mut numbers = vector![1, 2, 3, 4];
    assert_eq!(numbers.capacity(), 4);

    assert_eq!(numbers.insert(2, 0).unwrap(), 2);
    assert_eq!(numbers, [1, 2, 0, 3, 4]);
    assert_eq!(numbers.capacity(), 8);
  }

  #[test]
  #[should_panic(expected = "insertion index 4 past length 3")]
  fn test_insert_past_end_panics() {
    let mut numbers = vector![1, 2, 3];
    let _ = numbers.insert(4, 0);
  }

  #[test]
  fn test_erase_last_returns_end() {
    let mut numbers = vector![1, 2, 3];

    assert_eq!(numbers.erase(2), 2);
    assert_eq!(numbers.len(), 2);
    assert_eq!(numbers.remove(0), 1);
    assert_eq!(numbers, [2]);
  }

  #[test]
  fn test_emplace() {
    let mut words: Vector<String> = Vector::new();

    words.emplace_back(|| "world".to_owned()).unwrap().push('!');
    words.emplace(0, || String::from("hello")).unwrap();

    assert_eq!(words, ["hello", "world!"]);
  }

  #[test]
  fn test_reserve_keeps_values() {
    let mut numbers = vector![1, 2, 3];

    numbers.reserve(10).unwrap();
    assert_eq!(numbers.capacity(), 10);
    assert_eq!(numbers, [1, 2, 3]);

    numbers.reserve(5).unwrap();
    assert_eq!(numbers.capacity(), 10);
    assert_eq!(numbers.len(), 3);
  }

  #[test]
  fn test_reserve_overflow_leaves_vector_intact() {
    let mut numbers = vector![1u64, 2];

    assert_eq!(
      numbers.reserve(usize::MAX),
      Err(VectorError::CapacityOverflow { requested: usize::MAX })
    );
    assert_eq!(numbers, [1, 2]);
    assert_eq!(numbers.capacity(), 2);
  }

  #[test]
  #[cfg(target_pointer_width = "64")]
  fn test_refused_reserve_leaves_vector_intact() {
    let mut bytes = vector![1u8, 2, 3];
    let address = bytes.as_ptr();

    match bytes.reserve(1 << 62) {
      Err(VectorError::AllocationFailure { layout }) => assert_eq!(layout.size(), 1 << 62),
      other => panic!("unexpected result: {other:?}"),
    }

    assert_eq!(bytes, [1, 2, 3]);
    assert_eq!(bytes.len(), 3);
    assert_eq!(bytes.capacity(), 3);
    assert_eq!(bytes.as_ptr(), address);
  }

  #[test]
  fn test_extend_one_at_a_time_doubles() {
    let mut numbers: Vector<u32> = Vector::new();
    let mut capacities = Vec::new();

    for i in 0..1_000 {
      numbers.extend([i]);

      if capacities.last() != Some(&numbers.capacity()) {
        capacities.push(numbers.capacity());
      }
    }

    assert_eq!(capacities, [1, 2, 4, 8, 16, 32, 64, 128, 256, 512, 1024]);
    assert_eq!(numbers.len(), 1_000);
    assert_eq!(numbers[999], 999);
  }

  #[test]
  fn test_extend_takes_exact_fit_when_larger_than_doubling() {
    let mut numbers = vector![1, 2];

    numbers.extend(3..=10);
    assert_eq!(numbers.capacity(), 10);

    numbers.extend([11]);
    assert_eq!(numbers.capacity(), 20);
  }

  #[test]
  fn test_doubling_overflow_reports_saturated_request() {
    let half = usize::MAX / 2 + 1;
    let units: Vector<()> = Vector::with_capacity(half).unwrap();

    assert_eq!(units.grown_capacity(), Err(VectorError::CapacityOverflow { requested: usize::MAX }));

    let small: Vector<()> = Vector::with_capacity(3).unwrap();
    assert_eq!(small.grown_capacity(), Ok(6));
  }

  #[test]
  fn test_constructors() {
    let zeros: Vector<u8> = Vector::with_len(3).unwrap();
    assert_eq!(zeros, [0, 0, 0]);
    assert_eq!(zeros.capacity(), 3);

    let sevens = Vector::from_elem(4, 7).unwrap();
    assert_eq!(sevens, [7, 7, 7, 7]);

    let nothing = Vector::from_elem(0, String::from("x")).unwrap();
    assert!(nothing.is_empty());

    let reserved: Vector<i32> = Vector::with_capacity(16).unwrap();
    assert_eq!(reserved.len(), 0);
    assert_eq!(reserved.capacity(), 16);

    let copied = Vector::from(&[1, 2][..]);
    assert_eq!(copied, [1, 2]);

    let collected: Vector<_> = (1..=4).collect();
    assert_eq!(collected, [1, 2, 3, 4]);
  }

  #[test]
  fn test_clone_is_independent() {
    let original = vector![String::from("a"), String::from("b")];
    let mut copy = original.clone();

    assert_eq!(copy, original);

    copy[0].push('!');
    copy.push_back(String::from("c")).unwrap();

    assert_eq!(original, ["a", "b"]);
    assert_eq!(copy, ["a!", "b", "c"]);
  }

  #[test]
  fn test_clone_from_reuses_block() {
    let source = vector![1, 2, 3];

    let mut longer = Vector::with_capacity(8).unwrap();
    longer.extend([9, 9, 9, 9, 9]);
    let address = longer.as_ptr();
    longer.clone_from(&source);
    assert_eq!(longer, [1, 2, 3]);
    assert_eq!(longer.as_ptr(), address);
    assert_eq!(longer.capacity(), 8);

    let mut shorter = Vector::with_capacity(4).unwrap();
    shorter.push_back(9).unwrap();
    let address = shorter.as_ptr();
    shorter.clone_from(&source);
    assert_eq!(shorter, [1, 2, 3]);
    assert_eq!(shorter.as_ptr(), address);

    let mut small = vector![0];
    small.clone_from(&source);
    assert_eq!(small, [1, 2, 3]);
    assert_eq!(small.capacity(), 3);
  }

  #[test]
  fn test_take_and_swap() {
    let mut source = vector![1, 2, 3];
    let target = source.take();

    assert_eq!(target, [1, 2, 3]);
    assert_eq!(source.len(), 0);
    assert_eq!(source.capacity(), 0);

    let mut left = vector![1];
    let mut right = vector![2, 3];
    left.swap(&mut right);
    assert_eq!(left, [2, 3]);
    assert_eq!(right, [1]);
  }

  #[test]
  fn test_ordering() {
    assert!(vector![1, 2, 3] < vector![1, 2, 4]);
    assert!(vector![1, 2] < vector![1, 2, 3]);
    assert!(vector![1, 2, 4] > vector![1, 2, 3]);
    assert_eq!(vector![1, 2, 3], vector![1, 2, 3]);
    assert_eq!(vector![1, 2, 3].cmp(&vector![1, 2, 3]), Ordering::Equal);
    assert!(Vector::<i32>::new() <= Vector::new());
  }

  #[test]
  fn test_hash_matches_equal_vectors() {
    assert_eq!(hash_of(&vector![1, 2, 3]), hash_of(&Vector::from(&[1, 2, 3][..])));
  }

  #[test]
  fn test_iteration() {
    let mut numbers = vector![1, 2, 3];

    for value in &mut numbers {
      *value *= 10;
    }

    let sum: i32 = (&numbers).into_iter().sum();
    assert_eq!(sum, 60);

    let range = numbers.as_ptr_range();
    assert_eq!(unsafe { range.end.offset_from(range.start) }, 3);

    let owned: Vec<_> = numbers.into_iter().collect();
    assert_eq!(owned, [10, 20, 30]);
  }

  #[test]
  fn test_clear_keeps_capacity() {
    let mut numbers = vector![1, 2, 3];

    numbers.clear();
    assert!(numbers.is_empty());
    assert_eq!(numbers.capacity(), 3);

    numbers.truncate(10);
    assert!(numbers.is_empty());
  }

  #[test]
  fn test_debug() {
    assert_eq!(format!("{:?}", vector![1, 2]), "[1, 2]");
    assert_eq!(format!("{:?}", Vector::<u8>::new()), "[]");
  }
}
