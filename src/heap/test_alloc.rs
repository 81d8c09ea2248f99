//! Allocators for exercising allocation failure paths in tests.

use core::alloc::Layout;
use core::cell::Cell;
use core::ptr::NonNull;

use super::AllocError;
use super::AltAllocator;
use super::Global;

/// Refuses every allocation.
pub(crate) struct NoAlloc;

unsafe impl AltAllocator for NoAlloc {
    fn allocate(&self, _: Layout) -> Result<NonNull<[u8]>, AllocError> {
        return Err(AllocError);
    }
    unsafe fn deallocate(&self, _: NonNull<u8>, _: Layout) {
        return;
    }
}

/// Lets the first `limit` allocations through and refuses the rest.
pub(crate) struct AllocCount(u8, Cell<u8>);

impl AllocCount {
    pub(crate) const fn new(limit: u8) -> Self {
        return Self(limit, Cell::new(0));
    }
}

unsafe impl AltAllocator for AllocCount {
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        let cur = self.1.get();
        if cur >= self.0 {
            return Err(AllocError);
        };
        self.1.set(cur + 1);
        return Global.allocate(layout);
    }
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        unsafe { Global.deallocate(ptr, layout) };
    }
}
