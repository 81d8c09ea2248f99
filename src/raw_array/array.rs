use core::alloc::Layout;
use core::marker::PhantomData;
use core::ptr;
use core::slice;

use super::inner::Inner;
use crate::heap::AltAllocator;
use crate::types::ArrayResult;

/// A contiguous buffer of `T` where slots `[0, len)` are live.
///
/// Slots past `len` hold no live value. They start out zeroed and are
/// zeroed again whenever elements are removed from them.
pub(crate) struct RawArray<T, A: AltAllocator> {
    inner: Inner<A>,
    len:   usize,
    _ph:   PhantomData<T>,
}

impl<T, A: AltAllocator> RawArray<T, A> {
    const LAYOUT: Layout = Layout::new::<T>();

    pub(crate) fn with_capacity_in(alloc: A, capacity: usize) -> ArrayResult<Self> {
        let inner = Inner::initial_alloc(alloc, capacity, Self::LAYOUT)?;
        return Ok(Self {
            inner: inner,
            len:   0,
            _ph:   PhantomData,
        });
    }

    pub(crate) fn grow_to(&mut self, new_capacity: usize) -> ArrayResult<()> {
        return self.inner.grow_to(new_capacity);
    }

    #[inline]
    pub(crate) const fn capacity(&self) -> usize {
        return self.inner.capacity();
    }

    #[inline]
    pub(crate) const fn len(&self) -> usize {
        return self.len;
    }

    #[inline]
    pub(crate) const fn spare(&self) -> usize {
        return self.capacity() - self.len;
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.as_ptr(), self.len) }
    }

    #[inline]
    pub(crate) const fn as_ptr(&self) -> *const T {
        return self.inner.get_ptr();
    }

    #[inline]
    fn as_mut_ptr(&mut self) -> *mut T {
        return self.inner.get_ptr();
    }

    /// Writes `count` values produced by `f` after the last element.
    pub(crate) fn extend_with(&mut self, count: usize, mut f: impl FnMut(usize) -> T) {
        assert!(count <= self.spare());
        for i in 0..count {
            let loc = unsafe { self.as_mut_ptr().add(self.len) };
            unsafe { ptr::write(loc, f(i)) };
            self.len += 1;
        }
    }

    /// Moves `[index, len)` right by `count` slots and fills the opened
    /// range with values produced by `f`.
    pub(crate) fn insert_with(&mut self, index: usize, count: usize, mut f: impl FnMut(usize) -> T) {
        let len = self.len;
        assert!(index <= len);
        assert!(count <= self.spare());

        // While the gap is open only `[0, index)` counts as live, so a
        // panic in `f` leaks the moved tail instead of dropping it twice.
        self.len = index;
        let base = unsafe { self.as_mut_ptr().add(index) };
        unsafe { ptr::copy(base, base.add(count), len - index) };
        for i in 0..count {
            unsafe { ptr::write(base.add(i), f(i)) };
        }
        self.len = len + count;
    }

    /// Replaces the values at `[index, index + count)`. Slots at or past
    /// the end are appended to instead.
    pub(crate) fn overwrite_with(&mut self, index: usize, count: usize, mut f: impl FnMut(usize) -> T) {
        assert!(index <= self.len);
        assert!(count <= self.capacity() - index);
        for i in 0..count {
            let slot = index + i;
            let value = f(i);
            let loc = unsafe { self.as_mut_ptr().add(slot) };
            if slot < self.len {
                // Drops the replaced value.
                unsafe { *loc = value };
            } else {
                unsafe { ptr::write(loc, value) };
                self.len = slot + 1;
            }
        }
    }

    /// Drops `[index, index + count)`, closes the gap, and zeroes the
    /// slots freed at the end.
    pub(crate) fn remove_range(&mut self, index: usize, count: usize) {
        let len = self.len;
        assert!(count <= len && index <= len - count);
        let end = index + count;
        let tail = len - end;

        self.len = index;
        let base = self.as_mut_ptr();
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(base.add(index), count));
            ptr::copy(base.add(end), base.add(index), tail);
            base.add(index + tail).write_bytes(0, count);
        }
        self.len = index + tail;
    }

    /// Drops every element and zeroes the whole buffer.
    pub(crate) fn clear(&mut self) {
        let len = self.len;
        self.len = 0;
        let base = self.as_mut_ptr();
        let cap = self.capacity();
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(base, len));
            if size_of::<T>() != 0 {
                base.write_bytes(0, cap);
            }
        }
    }

    /// Writes `value` into the first slot past the end without counting it.
    ///
    /// The slot is never dropped, so this is meant for `Copy` markers.
    pub(crate) fn put_spare(&mut self, value: T) {
        assert!(self.len < self.capacity());
        let loc = unsafe { self.as_mut_ptr().add(self.len) };
        unsafe { ptr::write(loc, value) };
    }
}

impl<T, A: AltAllocator> Drop for RawArray<T, A> {
    fn drop(&mut self) {
        let len = self.len;
        self.len = 0;
        let base = self.as_mut_ptr();
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(base, len)) };
    }
}
