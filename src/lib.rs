//! # rvector - A Hand-Managed Dynamic Array
//!
//! This crate provides [`Vector<T>`], a growable array built directly on raw
//! memory obtained from `posix_memalign(3)`, and [`RawStorage<T>`], the owner of
//! that memory.
//!
//! ## Overview
//!
//! The container is split in two layers. The lower one owns bytes, the upper one
//! owns values:
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────┐
//!   │ Vector<T>                                                        │
//!   │   len: number of live values                                     │
//!   │   constructs, drops, grows, shifts                               │
//!   │                                                                  │
//!   │   ┌──────────────────────────────────────────────────────────┐   │
//!   │   │ RawStorage<T>                                            │   │
//!   │   │   ptr, capacity                                          │   │
//!   │   │   allocates and frees, never touches a T                 │   │
//!   │   └──────────────────────────────────────────────────────────┘   │
//!   └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//!   rvector
//!   ├── error    - VectorError
//!   ├── layout   - Slot layout and block alignment
//!   ├── raw      - RawStorage
//!   ├── array    - Vector
//!   ├── iter     - IntoIter
//!   └── macros   - vector! literal
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use rvector::{Vector, vector};
//!
//! let mut numbers: Vector<i32> = Vector::new();
//! numbers.push_back(1)?;
//! numbers.push_back(2)?;
//! numbers.push_back(3)?;
//!
//! numbers.insert(1, 9)?;
//! assert_eq!(numbers, [1, 9, 2, 3]);
//!
//! numbers.erase(0);
//! numbers.resize(5)?;
//! assert_eq!(numbers, [9, 2, 3, 0, 0]);
//!
//! assert!(vector![1, 2] < vector![1, 2, 3]);
//! # Ok::<(), rvector::VectorError>(())
//! ```
//!
//! ## How Growth Works
//!
//! A full vector doubles its capacity (an empty one takes a single slot).
//! `reserve` and `resize` ask for exactly the size they need instead.
//!
//! ```text
//!   push_back(e) on a full vector:
//!
//!   1. allocate      new ┌───┬───┬───┬───┬───┬───┬───┬───┐
//!                        │   │   │   │   │   │   │   │   │
//!                        └───┴───┴───┴───┴───┴───┴───┴───┘
//!   2. construct e   new ┌───┬───┬───┬───┬───┬───┬───┬───┐
//!                        │   │   │   │   │ e │   │   │   │
//!                        └───┴───┴───┴───┴───┴───┴───┴───┘
//!   3. move a..d     new ┌───┬───┬───┬───┬───┬───┬───┬───┐
//!                        │ a │ b │ c │ d │ e │   │   │   │
//!                        └───┴───┴───┴───┴───┴───┴───┴───┘
//!   4. swap blocks, free the old one
//! ```
//!
//! Steps 1 and 2 are the only ones that can fail. An allocation error is
//! returned and a panicking constructor unwinds, both before the old block has
//! been touched, so the vector is exactly as it was.
//!
//! ## Errors
//!
//! Operations that may allocate return `Result<_, VectorError>`. Trait impls
//! that cannot (`Clone`, `From`, `Extend`, `FromIterator`) hand allocation
//! failures to [`std::alloc::handle_alloc_error`] like the standard
//! collections do.
//!
//! ## Logging
//!
//! Block allocation and release are reported through `tracing` at TRACE level,
//! relocations at DEBUG, refused allocations at WARN. Nothing is printed unless
//! the application installs a subscriber.
//!
//! ## Limitations
//!
//! - **Single-threaded only**: no internal synchronization
//! - **No shrinking**: capacity only ever grows
//! - **Unix-only**: requires `libc` and `posix_memalign` (POSIX systems)

mod array;
mod error;
mod iter;
pub mod layout;
mod macros;
mod raw;

pub use array::Vector;
pub use error::VectorError;
pub use iter::IntoIter;
pub use raw::RawStorage;
