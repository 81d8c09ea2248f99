//! # Tagged Array
//!
//! The `tagged_array` crate provides a `#[no_std]` growable array that holds elements of exactly
//! one kind: bytes, integers, decimals, characters or owned strings. The kind is fixed when the
//! array is created, either statically with [`TypedArray<T>`] or at runtime with [`TaggedArray`].
//!
//! Elements are addressed by position rather than index. `1` is the first element, `-1` is the
//! last one and `0` is the slot right after the last element, so inserting at `0` appends.
//! Inserting in the middle shifts the elements after it to the right, removing shifts them back.
//!
//! All allocations are fallible. When the array cannot grow an error is returned and the array
//! is left exactly as it was. Growth is driven by two policies: an explicit request grows by the
//! requested amount plus some padding, and an implicit one grows by a percentage of the current
//! capacity. Every growth attempt is counted and can be reported to a [`ResizeSink`].
//!
//! Errors are returned as [`ArrayError`]s. Each array also remembers the first error it ran
//! into until it is cleared, and can be told to panic on errors instead.
//!
//! Character arrays keep a `'\0'` in the slot after the last character, and string arrays own a
//! private copy of every string handed to them.
//!
//! # Feature Flags
//! * `std` - Enables [`FileSink`] and the `print` methods.
//!
//! * `dtype64` - Makes [`Int`] an `i64` and [`Decimal`] an `f64` instead of `i32` and `f32`.
//!
//! * `alloc_api2` - Implements [`AltAllocator`](heap::AltAllocator) for every allocator from the
//! `allocator-api2` crate.

#![no_std]

extern crate alloc;
#[cfg(any(feature = "std", test))]
extern crate std;

mod config;
mod element;
pub mod heap;
mod raw_array;
pub mod sink;
mod tagged;
mod typed_array;
pub mod types;

pub use config::ArrayConfig;
pub use element::Element;
#[cfg(feature = "std")]
pub use sink::FileSink;
pub use sink::ResizeSink;
pub use tagged::TaggedArray;
pub use tagged::Value;
pub use tagged::ValueRef;
pub use tagged::Values;
pub use typed_array::TypedArray;
pub use types::ArrayError;
pub use types::ArrayResult;
pub use types::Decimal;
pub use types::ElementKind;
pub use types::ErrorKind;
pub use types::Int;
pub use types::OwnedStr;
pub use types::error_message;
