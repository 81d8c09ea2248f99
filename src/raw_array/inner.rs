use core::alloc::Layout;
use core::ptr::NonNull;

use crate::heap::AltAllocator;
use crate::types::ArrayError;
use crate::types::ArrayResult;
use crate::types::ErrorKind;

const fn layout_array(layout: Layout, length: usize) -> ArrayResult<Layout> {
    let lay = layout.pad_to_align();
    let Some(len) = length.checked_mul(lay.size()) else {
        return Err(ArrayError::new(ErrorKind::CapacityOverflow));
    };
    let Ok(lay) = Layout::from_size_align(len, layout.align()) else {
        return Err(ArrayError::new(ErrorKind::CapacityOverflow));
    };
    return Ok(lay);
}

/// The untyped half of the storage. Owns the allocation and knows the
/// layout of a single slot.
pub(crate) struct Inner<A: AltAllocator> {
    ptr:      NonNull<u8>,
    capacity: usize,
    slot:     Layout,
    alloc:    A,
}

impl<A: AltAllocator> Inner<A> {
    pub(crate) const fn new_in(alloc: A, slot: Layout) -> Self {
        let ptr = slot.align() as *mut u8;
        // Zero sized slots never need memory.
        let capacity = if slot.size() == 0 { usize::MAX } else { 0 };
        return Self {
            ptr:      unsafe { NonNull::new_unchecked(ptr) },
            capacity: capacity,
            slot:     slot,
            alloc:    alloc,
        };
    }

    /// Allocates zeroed room for `capacity` slots.
    pub(crate) fn initial_alloc(alloc: A, capacity: usize, slot: Layout) -> ArrayResult<Self> {
        let layout = layout_array(slot, capacity)?;

        // Don't allocate anything in this case.
        if layout.size() == 0 {
            return Ok(Self::new_in(alloc, slot));
        }

        // Safety: rust is pretty adamant about sizes not being over isize::MAX
        if layout.size() > (isize::MAX as usize) {
            return Err(ArrayError::new(ErrorKind::CapacityOverflow));
        }

        let Ok(ptr) = alloc.allocate_zeroed(layout) else {
            return Err(ArrayError::new(ErrorKind::AllocFailure));
        };

        return Ok(Self {
            ptr:      ptr.cast(),
            capacity: capacity,
            slot:     slot,
            alloc:    alloc,
        });
    }

    /// Grows the allocation to `new_capacity` slots, zeroing the new ones.
    ///
    /// Nothing changes unless the allocator succeeds. A size that cannot be
    /// laid out is a failed resize like any other.
    pub(crate) fn grow_to(&mut self, new_capacity: usize) -> ArrayResult<()> {
        if new_capacity <= self.capacity {
            return Ok(());
        }
        let resize_failed = ArrayError::new(ErrorKind::ResizeFailed);
        let old_layout = layout_array(self.slot, self.capacity).map_err(|_| resize_failed)?;
        let Ok(new_layout) = layout_array(self.slot, new_capacity) else {
            return Err(resize_failed);
        };

        if new_layout.size() > (isize::MAX as usize) {
            return Err(resize_failed);
        }

        let res = if old_layout.size() == 0 {
            self.alloc.allocate_zeroed(new_layout)
        } else {
            unsafe { self.alloc.grow_zeroed(self.ptr, old_layout, new_layout) }
        };
        let Ok(ptr) = res else {
            return Err(ArrayError::new(ErrorKind::ResizeFailed));
        };

        self.ptr = ptr.cast();
        self.capacity = new_capacity;
        return Ok(());
    }

    #[inline]
    pub(crate) const fn capacity(&self) -> usize {
        return self.capacity;
    }

    #[inline]
    pub(crate) const fn get_ptr<T>(&self) -> *mut T {
        return self.ptr.as_ptr().cast();
    }
}

impl<A: AltAllocator> Drop for Inner<A> {
    fn drop(&mut self) {
        if self.slot.size() == 0 || self.capacity == 0 {
            return;
        }
        if let Ok(layout) = layout_array(self.slot, self.capacity) {
            unsafe { self.alloc.deallocate(self.ptr, layout) };
        }
    }
}
