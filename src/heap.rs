//! Where array storage comes from.
//!
//! Arrays allocate through [`AltAllocator`] and treat every failure as a
//! recoverable [`AllocError`]. [`Global`] wraps the `alloc` crate's global
//! allocator and is used unless another allocator is given.
//!
//! With the `alloc_api2` feature any `allocator_api2` allocator works too.

#[cfg(feature = "alloc_api2")]
mod alloc_api2;
mod alt_alloc;
mod global;
#[cfg(test)]
pub(crate) mod test_alloc;

pub use alloc_error::AllocError;
pub use alt_alloc::AltAllocator;
pub use global::Global;

mod alloc_error {
    use core::error::Error;
    use core::fmt;

    /// An allocator could not hand out the requested memory.
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub struct AllocError;

    impl Error for AllocError {}

    impl fmt::Display for AllocError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("memory allocation failed")
        }
    }
}
