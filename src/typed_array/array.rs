use alloc::boxed::Box;
use core::fmt;
use core::slice;

use super::position::index_to_position;
use super::position::position_to_index;
use crate::config::ArrayConfig;
use crate::element::Element;
use crate::heap::AltAllocator;
use crate::heap::Global;
use crate::raw_array::RawArray;
use crate::sink::ResizeSink;
use crate::types::ArrayError;
use crate::types::ArrayResult;
use crate::types::ElementKind;
use crate::types::ErrorKind;
use crate::types::ErrorSlot;
use crate::types::GrowthPolicy;
use crate::types::PaddingPolicy;

/// A growable array holding elements of a single kind `T`.
///
/// Elements are addressed by position: `1` is the first element, `-1` the
/// last, and `0` the slot right after the last element. Every mutating
/// operation resolves the position, makes room through the growth engine,
/// shifts existing elements as needed, and only then writes the new values.
///
/// Failures are returned as [`ArrayError`]s. The first one is also kept as
/// the array's [`last_error`](Self::last_error) until it is cleared.
pub struct TypedArray<T: Element, A: AltAllocator = Global> {
    pub(super) raw:      RawArray<T, A>,
    pub(super) growth:   GrowthPolicy,
    pub(super) padding:  PaddingPolicy,
    pub(super) attempts: u64,
    pub(super) sink:     Option<Box<dyn ResizeSink>>,
    panic_on_error:      bool,
    error:               ErrorSlot,
}

impl<T: Element> TypedArray<T, Global> {
    /// Creates an array with room for `capacity` elements and default policies.
    pub fn new(capacity: usize) -> ArrayResult<Self> {
        return Self::with_config_in(ArrayConfig::new(capacity), Global);
    }

    pub fn with_config(config: ArrayConfig) -> ArrayResult<Self> {
        return Self::with_config_in(config, Global);
    }
}

impl<T: Element, A: AltAllocator> TypedArray<T, A> {
    /// Creates an array using `alloc` for its storage.
    ///
    /// Fails with [`ErrorKind::InitFailed`] if the initial capacity is zero
    /// or the first allocation fails.
    pub fn with_config_in(config: ArrayConfig, alloc: A) -> ArrayResult<Self> {
        if config.initial_capacity == 0 {
            log::error!("cannot create a {} array, at least one slot is required", T::KIND);
            return Self::init_failed(&config);
        }
        let raw = match RawArray::with_capacity_in(alloc, config.initial_capacity) {
            Ok(raw) => raw,
            Err(e) => {
                log::error!(
                    "cannot allocate {} slots for a {} array: {e}",
                    config.initial_capacity,
                    T::KIND
                );
                return Self::init_failed(&config);
            }
        };

        let mut arr = Self {
            raw:            raw,
            growth:         config.growth,
            padding:        config.padding,
            attempts:       0,
            sink:           None,
            panic_on_error: config.panic_on_error,
            error:          ErrorSlot::new(),
        };
        arr.terminate();
        log::info!("created {} array [ capacity: {} ]", T::KIND, arr.capacity());
        return Ok(arr);
    }

    fn init_failed(config: &ArrayConfig) -> ArrayResult<Self> {
        let err = ArrayError::new(ErrorKind::InitFailed);
        if config.panic_on_error {
            panic!("{err}");
        }
        return Err(err);
    }

    /// Records `kind` as the last error unless one is already set, and
    /// returns it. Panics instead when panic-on-error is enabled.
    pub(crate) fn fail<R>(&self, kind: ErrorKind) -> ArrayResult<R> {
        let err = ArrayError::new(kind);
        if !self.error.record(err) {
            log::trace!("keeping earlier error, dropping {err}");
        }
        if self.panic_on_error {
            panic!("{err}");
        }
        return Err(err);
    }

    fn resolve(&self, position: isize) -> ArrayResult<usize> {
        let Some(index) = position_to_index(position, self.raw.len()) else {
            log::warn!("position {position} is before the first element [ occupied: {} ]", self.raw.len());
            return self.fail(ErrorKind::InvalidPosition);
        };
        return Ok(index);
    }

    /// Re-writes the sentinel after the last element, for kinds that have one.
    fn terminate(&mut self) {
        if let Some(sentinel) = T::SENTINEL {
            self.raw.put_spare(sentinel);
        }
    }

    /// Inserts a single value at `position`.
    ///
    /// With `overwrite` set, a value already at that position is replaced
    /// instead of shifted right.
    pub fn insert(&mut self, position: isize, value: T::Source<'_>, overwrite: bool) -> ArrayResult<()> {
        return self.insert_run(position, &[value], overwrite);
    }

    /// Inserts the first `length` values of `values` at `position`.
    ///
    /// Without a length the natural length of the run is used: all of it,
    /// except for characters where the run ends at the first `'\0'`. A zero
    /// length, or one longer than `values`, is rejected.
    pub fn insert_many(
        &mut self,
        position: isize,
        values: &[T::Source<'_>],
        length: Option<usize>,
        overwrite: bool,
    ) -> ArrayResult<()> {
        let count = match length {
            Some(n) if n > values.len() => {
                log::warn!("length {n} is longer than the {} values given", values.len());
                return self.fail(ErrorKind::InvalidParameter);
            }
            Some(n) => n,
            None => T::natural_len(values),
        };
        if count == 0 {
            log::warn!("nothing to insert into {} array", T::KIND);
            return self.fail(ErrorKind::InvalidParameter);
        }
        return self.insert_run(position, &values[..count], overwrite);
    }

    fn insert_run(&mut self, position: isize, values: &[T::Source<'_>], overwrite: bool) -> ArrayResult<()> {
        let index = self.resolve(position)?;
        let len = self.raw.len();
        if index > len {
            log::warn!("position {position} is past the append slot [ occupied: {len} ]");
            return self.fail(ErrorKind::InsertFailed);
        }

        let count = values.len();
        self.ensure_room(index, count, overwrite)?;

        if index == len {
            self.raw.extend_with(count, |i| T::adopt(values[i]));
        } else if overwrite {
            self.raw.overwrite_with(index, count, |i| T::adopt(values[i]));
        } else {
            self.raw.insert_with(index, count, |i| T::adopt(values[i]));
        }
        self.terminate();

        log::debug!(
            "inserted {count} {} value(s) at position {position} [ occupied: {} ]",
            T::KIND,
            self.raw.len()
        );
        return Ok(());
    }

    /// Removes `count` elements starting at `position`.
    ///
    /// The whole call is rejected if the range runs past the last element.
    pub fn remove(&mut self, position: isize, count: usize) -> ArrayResult<()> {
        if count == 0 {
            log::warn!("remove of zero elements requested");
            return self.fail(ErrorKind::InvalidParameter);
        }
        let len = self.raw.len();
        if len == 0 {
            log::warn!("remove from an empty {} array", T::KIND);
            return self.fail(ErrorKind::RemoveFailed);
        }
        let index = self.resolve(position)?;
        if index >= len || count > len - index {
            log::warn!("cannot remove {count} element(s) at position {position} [ occupied: {len} ]");
            return self.fail(ErrorKind::InvalidPosition);
        }

        self.raw.remove_range(index, count);
        self.terminate();

        log::debug!(
            "removed {count} {} value(s) at position {position} [ occupied: {} ]",
            T::KIND,
            self.raw.len()
        );
        return Ok(());
    }

    /// Drops every element and zeroes the storage. Capacity is kept.
    pub fn reset(&mut self) {
        self.raw.clear();
        self.terminate();
        log::debug!("reset {} array [ capacity: {} ]", T::KIND, self.capacity());
    }

    /// Returns the element at `position`.
    pub fn get(&self, position: isize) -> ArrayResult<&T> {
        let index = self.resolve(position)?;
        let Some(value) = self.raw.as_slice().get(index) else {
            return self.fail(ErrorKind::InvalidPosition);
        };
        return Ok(value);
    }

    #[inline]
    pub const fn kind(&self) -> ElementKind {
        return T::KIND;
    }

    #[inline]
    pub const fn occupied_count(&self) -> usize {
        return self.raw.len();
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        return self.raw.len() == 0;
    }

    /// Number of slots currently backing the array.
    #[inline]
    pub const fn capacity(&self) -> usize {
        return self.raw.capacity();
    }

    /// Size of a single slot in bytes.
    ///
    /// For strings this is the size of the owning handle, not of the text.
    #[inline]
    pub const fn element_width(&self) -> usize {
        return size_of::<T>();
    }

    /// Size of the backing storage in bytes.
    pub const fn byte_size(&self) -> usize {
        return self.capacity() * self.element_width();
    }

    /// The left-to-right position of a 0-based index.
    pub const fn index_to_position(&self, index: usize) -> isize {
        return index_to_position(index);
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        return self.raw.as_slice();
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        return self.raw.as_slice().iter();
    }

    /// The first error this array ran into since it was last cleared.
    pub fn last_error(&self) -> Option<ArrayError> {
        return self.error.get();
    }

    /// The message for [`last_error`](Self::last_error).
    pub fn last_error_message(&self) -> Option<&'static str> {
        return self.error.get().map(|e| e.kind().message());
    }

    /// Clears the last error so later errors can be observed, returning it.
    pub fn clear_error(&mut self) -> Option<ArrayError> {
        return self.error.clear();
    }

    pub const fn growth_policy(&self) -> GrowthPolicy {
        return self.growth;
    }

    pub fn set_growth_policy(&mut self, growth: GrowthPolicy) {
        self.growth = growth;
    }

    pub const fn padding_policy(&self) -> PaddingPolicy {
        return self.padding;
    }

    pub fn set_padding_policy(&mut self, padding: PaddingPolicy) {
        self.padding = padding;
    }

    pub const fn panic_on_error(&self) -> bool {
        return self.panic_on_error;
    }

    /// When enabled, failing operations panic with the error message after
    /// recording it.
    pub fn set_panic_on_error(&mut self, enabled: bool) {
        self.panic_on_error = enabled;
    }

    /// Number of growth attempts so far, successful or not.
    pub const fn realloc_attempts(&self) -> u64 {
        return self.attempts;
    }

    /// Sends the attempt counter to `sink` on every growth attempt from now on.
    pub fn set_resize_sink<S: ResizeSink + 'static>(&mut self, sink: S) {
        self.sink = Some(Box::new(sink));
    }

    pub fn take_resize_sink(&mut self) -> Option<Box<dyn ResizeSink>> {
        return self.sink.take();
    }
}

impl<'a, T: Element, A: AltAllocator> IntoIterator for &'a TypedArray<T, A> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        return self.iter();
    }
}

impl<T: Element + fmt::Debug, A: AltAllocator> fmt::Debug for TypedArray<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedArray")
            .field("kind", &T::KIND)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .field("last_error", &self.last_error())
            .finish()
    }
}
