use core::alloc::Layout;
use core::ptr::NonNull;

use super::AllocError;

/// Stand-in for the unstable `Allocator` trait, so array storage can come
/// from a custom allocator on stable and in `#![no_std]` builds.
///
/// Implementors take on the same safety contract as `Allocator`:
/// <https://doc.rust-lang.org/std/alloc/trait.Allocator.html>
///
/// Arrays only ever ask for zeroed memory and never shrink, so that is all
/// the trait covers.
pub unsafe trait AltAllocator {
    /// Returns a block fitting `layout`, or `AllocError` if none is available.
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError>;

    /// Like [`allocate`](Self::allocate), with every byte of the block set to zero.
    fn allocate_zeroed(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        let block = self.allocate(layout)?;
        unsafe { block.cast::<u8>().write_bytes(0, block.len()) };
        return Ok(block);
    }

    /// Releases a block.
    ///
    /// `ptr` must come from this allocator and `layout` must be the one it
    /// was allocated with.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);

    /// Moves the block at `old_ptr` into one fitting `new_layout`, which must
    /// not be smaller, and zeroes the bytes past the old size.
    ///
    /// On failure the old block is untouched and still owned by the caller.
    /// On success only the returned block may be used.
    unsafe fn grow_zeroed(
        &self,
        old_ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        let block = self.allocate_zeroed(new_layout)?;
        let dst = block.cast::<u8>();

        unsafe {
            dst.copy_from_nonoverlapping(old_ptr, old_layout.size());
            self.deallocate(old_ptr, old_layout);
        }
        return Ok(block);
    }
}
