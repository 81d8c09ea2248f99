use alloc::alloc as sys;
use core::alloc::Layout;
use core::ptr::NonNull;

use super::AllocError;
use super::AltAllocator;

/// Forwards to the global allocator of the `alloc` crate.
///
/// This is the default allocator of every array.
#[derive(Debug, Copy, Clone, Default)]
pub struct Global;

/// Wraps a pointer returned by `sys` into a block of `size` bytes.
#[inline]
fn block(ptr: *mut u8, size: usize) -> Result<NonNull<[u8]>, AllocError> {
    let Some(ptr) = NonNull::new(ptr) else {
        return Err(AllocError);
    };
    return Ok(NonNull::slice_from_raw_parts(ptr, size));
}

unsafe impl AltAllocator for Global {
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        // The `sys` functions are undefined for zero sized layouts.
        if layout.size() == 0 {
            return Err(AllocError);
        }
        return block(unsafe { sys::alloc(layout) }, layout.size());
    }

    fn allocate_zeroed(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        if layout.size() == 0 {
            return Err(AllocError);
        }
        return block(unsafe { sys::alloc_zeroed(layout) }, layout.size());
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        unsafe { sys::dealloc(ptr.as_ptr(), layout) };
    }

    unsafe fn grow_zeroed(
        &self,
        old_ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        let old_size = old_layout.size();
        let new_size = new_layout.size();

        if old_size == 0 {
            return self.allocate_zeroed(new_layout);
        }
        if new_size <= old_size {
            return Ok(NonNull::slice_from_raw_parts(old_ptr, old_size));
        }

        let grown = block(unsafe { sys::realloc(old_ptr.as_ptr(), old_layout, new_size) }, new_size)?;
        let tail = unsafe { grown.cast::<u8>().add(old_size) };
        unsafe { tail.write_bytes(0, new_size - old_size) };
        return Ok(grown);
    }
}
