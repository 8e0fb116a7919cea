use rvector::{Vector, VectorError, vector};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Prints the state of the vector: length, capacity and where the block lives.
fn print_state<T: std::fmt::Debug>(
  label: &str,
  vector: &Vector<T>,
) {
  println!(
    "[{}] len = {}, capacity = {}, block = {:?}, values = {:?}",
    label,
    vector.len(),
    vector.capacity(),
    vector.as_ptr(),
    vector,
  );
}

fn main() -> Result<(), VectorError> {
  // RUST_LOG=rvector=trace shows every block allocation and release.
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rvector=debug")))
    .init();

  // --------------------------------------------------------------------
  // 1) Push past capacity a few times. Each full push doubles the block
  //    and moves every value into the new one.
  // --------------------------------------------------------------------
  let mut numbers = Vector::new();
  print_state("start", &numbers);

  for value in 1..=5 {
    numbers.push_back(value)?;
    print_state("push", &numbers);
  }

  // --------------------------------------------------------------------
  // 2) Insert and erase in the middle. There is spare room, so the block
  //    stays where it is and only the tail shifts.
  // --------------------------------------------------------------------
  let block = numbers.as_ptr();
  numbers.insert(1, 9)?;
  numbers.erase(0);
  print_state("shift", &numbers);
  info!(same_block = block == numbers.as_ptr(), "insert/erase with spare capacity");

  // --------------------------------------------------------------------
  // 3) Reserve asks for an exact size instead of doubling.
  // --------------------------------------------------------------------
  numbers.reserve(100)?;
  print_state("reserve", &numbers);

  // --------------------------------------------------------------------
  // 4) Resizing down keeps the block; resizing up fills with defaults.
  // --------------------------------------------------------------------
  numbers.resize(2)?;
  print_state("shrink", &numbers);
  numbers.resize(6)?;
  print_state("grow", &numbers);

  // --------------------------------------------------------------------
  // 5) Checked access and comparison.
  // --------------------------------------------------------------------
  match numbers.at(42) {
    Ok(value) => println!("\n[5] at(42) = {value}"),
    Err(err) => println!("\n[5] at(42) failed: {err}"),
  }

  let lower = vector![1, 2, 3];
  let upper = vector![1, 2, 4];
  println!("[5] {lower:?} < {upper:?} = {}", lower < upper);

  // --------------------------------------------------------------------
  // 6) End of demo. Dropping the vector drops its values, then frees the block.
  // --------------------------------------------------------------------
  drop(numbers);
  println!("\n[6] End of example.");

  Ok(())
}
