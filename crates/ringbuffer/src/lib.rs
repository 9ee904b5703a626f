//! Fixed-capacity byte ring buffer with overwrite-on-full semantics.
//!
//! [`RingBuffer`] borrows a caller-owned `[u8]` whose length is a power of
//! two and keeps two indices into it: the write (head) index and the read
//! (tail) index. Nothing is allocated; the storage can live on the stack or
//! in a `static`.
//!
//! # Index scheme
//!
//! ```text
//!   read (tail)            write (head)
//!        ↓                      ↓
//!  [ .. | b0 | b1 | b2 | .. | bn |    | .. ]
//!        └──── live bytes ─────┘
//! ```
//!
//! - empty  ⇔ `write == read`
//! - full   ⇔ `(write - read) & mask == mask`
//!
//! One slot is always left unused so the two states can be told apart from
//! the indices alone, so a buffer over `N` bytes holds at most `N - 1`.
//! A put into a full buffer discards the oldest byte and reports
//! [`PutStatus::Overwrote`]; it never refuses the write.
//!
//! # Features
//!
//! - `defmt`: `defmt::Format` derives and defmt log statements
//! - `tracing`: the same log statements through `tracing`
//! - `std`: `std::io::Read` / `std::io::Write` adapters and
//!   `std::error::Error` for [`RingBufferError`]
//!
//! # Example
//!
//! ```
//! use ringbuffer::{PutStatus, RingBuffer};
//!
//! let mut storage = [0u8; 4];
//! let mut ring = RingBuffer::new(&mut storage).unwrap();
//!
//! assert_eq!(ring.put_many(&[1, 2, 3]), ringbuffer::PutManyStatus::AllStored);
//! assert_eq!(ring.put(4), PutStatus::Overwrote);
//!
//! let mut out = [0u8; 8];
//! let n = ring.get_many(&mut out);
//! assert_eq!(&out[..n], &[2, 3, 4]);
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(unused_must_use)] // all statuses must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::print_stdout)] // prefer tracing/defmt over println! in lib code
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)] // index accessors — callers decide

pub mod error;
pub mod inspect;
#[cfg(feature = "std")]
pub mod io;
pub mod ring;
pub mod status;

pub use error::RingBufferError;
pub use inspect::{Dump, Iter};
pub use ring::{advance, is_valid_capacity, RingBuffer, MIN_CAPACITY};
pub use status::{PutManyStatus, PutStatus};
