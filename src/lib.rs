//! Fixed capacity ring buffers over caller-owned memory.
//!
//! A ring is laid over a contiguous region the caller has already allocated
//! and treats it as a FIFO of fixed-size elements, wrapping around at the end
//! of the region without ever reallocating. The crate itself never
//! allocates, which makes it suitable for embedded targets and for I/O
//! staging buffers.
//!
//! - [`RingBuffer`] copies elements as opaque runs of `element_size` bytes,
//!   chosen at runtime.
//! - [`RingQueue`] stores `Copy` values of one type, one per slot.
//!
//! Transfers never block. A write into a full ring or a read from an empty
//! one moves nothing and says so through its return value; a partial
//! transfer moves what it can.
//!
//! # Feature Flags
//! The **slicering** crate has the following cargo feature flags:
//!
//! - `std`
//!   - Optional, enabled by default
//!   - Use libstd; adds `std::error::Error` for the error types,
//!     `std::io::Read`/`std::io::Write` for `RingBuffer` and `Vec` regions
//!
//!
//! - `use_generic_array`
//!   - Optional
//!   - Depend on generic-array and allow using a `GenericArray` as the
//!     backing region
//!
//!
//! # Capacity
//!
//! One slot of every ring stays unused so that equal cursors always mean
//! "empty". A ring over `n` slots holds at most `n - 1` elements.
//! [Read more]
//!
//! [Read more]: https://en.wikipedia.org/wiki/Circular_buffer
//!
//! # Examples
//! ```
//! use slicering::RingBuffer;
//!
//! // four elements of two bytes each
//! let mut storage = [0u8; 8];
//! let mut ring = RingBuffer::new(&mut storage, 4, 2).unwrap();
//! assert_eq!(ring.capacity(), 4);
//! assert_eq!(ring.usage(), 0);
//!
//! ring.put(&[0x12, 0x34]).unwrap();
//! assert_eq!(ring.write(&[1, 2, 3, 4, 5, 6], 3), 2);
//! assert!(ring.is_full());
//!
//! let mut element = [0u8; 2];
//! assert!(ring.get(&mut element));
//! assert_eq!(element, [0x12, 0x34]);
//! ```
//!
//! # Typed values
//! ```
//! use slicering::RingQueue;
//!
//! let mut slots = [0u32; 8];
//! let mut queue = RingQueue::new(&mut slots).unwrap();
//!
//! queue.write(&[1, 2, 3]);
//! let mut out = [0u32; 2];
//! assert_eq!(queue.read(&mut out), 2);
//! assert_eq!(out, [1, 2]);
//! assert_eq!(queue.get(), Some(3));
//! assert_eq!(queue.get(), None);
//! ```

#![cfg_attr(not(any(feature="std", test)), no_std)]

#![deny(missing_docs)]

#[cfg(not(any(feature="std", test)))]
extern crate core as std;

#[cfg(feature = "use_generic_array")]
extern crate generic_array;

#[cfg(test)]
extern crate proptest;

mod cursors;
mod region;
mod ring;
mod typed;
mod utils;
pub mod error;

pub use error::{CapacityError, InitError};
pub use region::Region;
pub use ring::RingBuffer;
pub use typed::{Iter, RingQueue};
