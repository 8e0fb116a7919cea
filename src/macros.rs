/// Builds a [`Vector`](crate::Vector) from a list of values, or from one value
/// repeated `n` times.
///
/// Capacity matches the number of values exactly.
///
/// # Examples
///
/// ```rust
/// use rvector::vector;
///
/// let primes = vector![2, 3, 5, 7];
/// assert_eq!(primes.len(), 4);
/// assert_eq!(primes.capacity(), 4);
///
/// let zeros = vector![0u8; 3];
/// assert_eq!(zeros, [0, 0, 0]);
/// ```
#[macro_export]
macro_rules! vector {
  () => {
    $crate::Vector::new()
  };
  ($value:expr; $len:expr) => {
    ::std::iter::repeat_n($value, $len).collect::<$crate::Vector<_>>()
  };
  ($($item:expr),+ $(,)?) => {
    $crate::Vector::from([$($item),+])
  };
}
