use super::TypedArray;
use crate::element::Element;
use crate::heap::AltAllocator;
use crate::types::ArrayResult;
use crate::types::ErrorKind;

impl<T: Element, A: AltAllocator> TypedArray<T, A> {
    /// Makes sure `additional` more elements can be appended without another
    /// allocation. Returns how many slots were requested from the growth
    /// engine, which is zero when no growth was needed.
    pub fn ensure_capacity(&mut self, additional: usize) -> ArrayResult<usize> {
        if additional == 0 {
            return self.fail(ErrorKind::InvalidParameter);
        }
        let len = self.raw.len();
        return self.ensure_room(len, additional, false);
    }

    /// Grows the storage when writing `incoming` values at `index` would not
    /// fit, sentinel slot included.
    pub(super) fn ensure_room(&mut self, index: usize, incoming: usize, overwrite: bool) -> ArrayResult<usize> {
        let sentinel = T::SENTINEL.is_some() as usize;
        let len = self.raw.len();

        let needed = if overwrite || index >= len {
            index
                .checked_add(incoming)
                .and_then(|n| n.checked_add(sentinel))
                .map(|n| n.max(len))
        } else {
            len.checked_add(incoming).and_then(|n| n.checked_add(sentinel))
        };
        let Some(needed) = needed else {
            log::error!("room for {incoming} more {} value(s) overflows", T::KIND);
            return self.fail(ErrorKind::ResizeFailed);
        };

        let capacity = self.raw.capacity();
        if needed <= capacity {
            return Ok(0);
        }
        let short = needed - capacity;
        self.grow(Some(short))?;
        return Ok(short);
    }

    /// Grows the backing storage.
    ///
    /// With `Some(n)` the capacity grows by `n` plus the padding policy's
    /// slack. With `None` it grows by the growth policy's percentage of the
    /// current capacity, at least one slot. On failure the existing storage
    /// and capacity are left as they were.
    ///
    /// Every call counts as a reallocation attempt and is reported to the
    /// resize sink, whether it succeeds or not.
    pub fn grow(&mut self, requested: Option<usize>) -> ArrayResult<()> {
        self.attempts += 1;
        let attempts = self.attempts;
        if let Some(sink) = self.sink.as_mut() {
            sink.record(attempts);
        }

        let current = self.raw.capacity();
        let additional = match requested {
            Some(0) => {
                log::error!("growth by zero slots requested");
                return self.fail(ErrorKind::InvalidParameter);
            }
            Some(n) => n.checked_add(self.padding.slots()),
            None => Some(self.growth.step(current)),
        };
        let Some(new_capacity) = additional.and_then(|n| current.checked_add(n)) else {
            log::error!("growing {} array of {current} slots overflows", T::KIND);
            return self.fail(ErrorKind::ResizeFailed);
        };

        if let Err(e) = self.raw.grow_to(new_capacity) {
            log::error!("failed to grow {} array from {current} to {new_capacity} slots: {e}", T::KIND);
            return self.fail(e.kind());
        }

        log::info!(
            "grew {} array from {current} to {new_capacity} slots [ requested: {requested:?}, attempt: {attempts} ]",
            T::KIND
        );
        return Ok(());
    }
}
