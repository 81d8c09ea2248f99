//! A single array type covering every element kind, picked at runtime.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::config::ArrayConfig;
use crate::heap::AltAllocator;
use crate::heap::Global;
use crate::sink::ResizeSink;
use crate::typed_array::TypedArray;
use crate::types::ArrayError;
use crate::types::ArrayResult;
use crate::types::Decimal;
use crate::types::ElementKind;
use crate::types::ErrorKind;
use crate::types::GrowthPolicy;
use crate::types::Int;
use crate::types::OwnedStr;
use crate::types::PaddingPolicy;

/// One value to insert.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Value<'a> {
    Byte(u8),
    Int(Int),
    Decimal(Decimal),
    Char(char),
    /// Copied into the array, the caller keeps ownership.
    Str(&'a str),
}

impl Value<'_> {
    pub const fn kind(&self) -> ElementKind {
        match self {
            Value::Byte(_) => ElementKind::Byte,
            Value::Int(_) => ElementKind::Int,
            Value::Decimal(_) => ElementKind::Decimal,
            Value::Char(_) => ElementKind::Char,
            Value::Str(_) => ElementKind::Str,
        }
    }
}

/// A run of values to insert.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Values<'a> {
    Bytes(&'a [u8]),
    Ints(&'a [Int]),
    Decimals(&'a [Decimal]),
    Chars(&'a [char]),
    Strs(&'a [&'a str]),
    /// Characters for a char array, or a single element for a string array.
    Text(&'a str),
}

/// An element read back out of a [`TaggedArray`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ValueRef<'a> {
    Byte(u8),
    Int(Int),
    Decimal(Decimal),
    Char(char),
    /// The handle held by the array, not a copy.
    Str(&'a OwnedStr),
}

impl ValueRef<'_> {
    pub const fn kind(&self) -> ElementKind {
        match self {
            ValueRef::Byte(_) => ElementKind::Byte,
            ValueRef::Int(_) => ElementKind::Int,
            ValueRef::Decimal(_) => ElementKind::Decimal,
            ValueRef::Char(_) => ElementKind::Char,
            ValueRef::Str(_) => ElementKind::Str,
        }
    }
}

/// A [`TypedArray`] whose element kind is chosen when it is created.
///
/// Values are passed in as [`Value`]s and checked against the array's kind;
/// a value of the wrong kind fails with [`ErrorKind::TypeMismatch`] and is
/// recorded like any other error.
pub enum TaggedArray<A: AltAllocator = Global> {
    Byte(TypedArray<u8, A>),
    Int(TypedArray<Int, A>),
    Decimal(TypedArray<Decimal, A>),
    Char(TypedArray<char, A>),
    Str(TypedArray<OwnedStr, A>),
}

/// The first `length` characters of `text`, or all of it without a length.
fn prefix(text: &str, length: Option<usize>) -> Option<&str> {
    let Some(n) = length else {
        return Some(text);
    };
    if n == 0 {
        return None;
    }
    return match text.char_indices().nth(n) {
        Some((end, _)) => Some(&text[..end]),
        None if text.chars().count() == n => Some(text),
        None => None,
    };
}

/// Runs `$body` with `$arr` bound to the inner `TypedArray`, whatever its kind.
macro_rules! each {
    ($self:expr, $arr:ident => $body:expr) => {
        match $self {
            TaggedArray::Byte($arr) => $body,
            TaggedArray::Int($arr) => $body,
            TaggedArray::Decimal($arr) => $body,
            TaggedArray::Char($arr) => $body,
            TaggedArray::Str($arr) => $body,
        }
    };
}

impl TaggedArray<Global> {
    /// Creates an array of `kind` with room for `capacity` elements.
    pub fn create(kind: ElementKind, capacity: usize) -> ArrayResult<Self> {
        return Self::with_config_in(kind, ArrayConfig::new(capacity), Global);
    }

    pub fn with_config(kind: ElementKind, config: ArrayConfig) -> ArrayResult<Self> {
        return Self::with_config_in(kind, config, Global);
    }
}

impl<A: AltAllocator> TaggedArray<A> {
    pub fn with_config_in(kind: ElementKind, config: ArrayConfig, alloc: A) -> ArrayResult<Self> {
        let arr = match kind {
            ElementKind::Byte => TaggedArray::Byte(TypedArray::with_config_in(config, alloc)?),
            ElementKind::Int => TaggedArray::Int(TypedArray::with_config_in(config, alloc)?),
            ElementKind::Decimal => TaggedArray::Decimal(TypedArray::with_config_in(config, alloc)?),
            ElementKind::Char => TaggedArray::Char(TypedArray::with_config_in(config, alloc)?),
            ElementKind::Str => TaggedArray::Str(TypedArray::with_config_in(config, alloc)?),
        };
        return Ok(arr);
    }

    fn mismatch<R>(&self, given: ElementKind) -> ArrayResult<R> {
        log::warn!("{given} value given to a {} array", self.kind());
        return each!(self, arr => arr.fail(ErrorKind::TypeMismatch));
    }

    /// Inserts a single value at `position`. See [`TypedArray::insert`].
    pub fn insert(&mut self, position: isize, value: Value<'_>, overwrite: bool) -> ArrayResult<()> {
        match (&mut *self, value) {
            (TaggedArray::Byte(arr), Value::Byte(v)) => return arr.insert(position, v, overwrite),
            (TaggedArray::Int(arr), Value::Int(v)) => return arr.insert(position, v, overwrite),
            (TaggedArray::Decimal(arr), Value::Decimal(v)) => return arr.insert(position, v, overwrite),
            (TaggedArray::Char(arr), Value::Char(v)) => return arr.insert(position, v, overwrite),
            (TaggedArray::Str(arr), Value::Str(v)) => return arr.insert(position, v, overwrite),
            _ => {}
        }
        return self.mismatch(value.kind());
    }

    /// Inserts a run of values at `position`. See [`TypedArray::insert_many`].
    ///
    /// [`Values::Text`] is split into characters for a char array and stored
    /// as one element in a string array. For a string array `length` counts
    /// characters: the first `length` of them become the new element.
    pub fn insert_many(
        &mut self,
        position: isize,
        values: Values<'_>,
        length: Option<usize>,
        overwrite: bool,
    ) -> ArrayResult<()> {
        match (&mut *self, values) {
            (TaggedArray::Byte(arr), Values::Bytes(v)) => return arr.insert_many(position, v, length, overwrite),
            (TaggedArray::Int(arr), Values::Ints(v)) => return arr.insert_many(position, v, length, overwrite),
            (TaggedArray::Decimal(arr), Values::Decimals(v)) => {
                return arr.insert_many(position, v, length, overwrite);
            }
            (TaggedArray::Char(arr), Values::Chars(v)) => return arr.insert_many(position, v, length, overwrite),
            (TaggedArray::Char(arr), Values::Text(text)) => {
                let chars: Vec<char> = text.chars().collect();
                return arr.insert_many(position, &chars, length, overwrite);
            }
            (TaggedArray::Str(arr), Values::Strs(v)) => return arr.insert_many(position, v, length, overwrite),
            (TaggedArray::Str(arr), Values::Text(text)) => {
                let Some(text) = prefix(text, length) else {
                    log::warn!("length {length:?} does not fit {} character(s) of text", text.chars().count());
                    return arr.fail(ErrorKind::InvalidParameter);
                };
                return arr.insert(position, text, overwrite);
            }
            _ => {}
        }
        let given = match values {
            Values::Bytes(_) => ElementKind::Byte,
            Values::Ints(_) => ElementKind::Int,
            Values::Decimals(_) => ElementKind::Decimal,
            Values::Chars(_) => ElementKind::Char,
            Values::Strs(_) | Values::Text(_) => ElementKind::Str,
        };
        return self.mismatch(given);
    }

    /// Removes `count` elements starting at `position`.
    pub fn remove(&mut self, position: isize, count: usize) -> ArrayResult<()> {
        return each!(self, arr => arr.remove(position, count));
    }

    pub fn reset(&mut self) {
        each!(self, arr => arr.reset());
    }

    /// Returns the element at `position`.
    pub fn get(&self, position: isize) -> ArrayResult<ValueRef<'_>> {
        let value = match self {
            TaggedArray::Byte(arr) => ValueRef::Byte(*arr.get(position)?),
            TaggedArray::Int(arr) => ValueRef::Int(*arr.get(position)?),
            TaggedArray::Decimal(arr) => ValueRef::Decimal(*arr.get(position)?),
            TaggedArray::Char(arr) => ValueRef::Char(*arr.get(position)?),
            TaggedArray::Str(arr) => ValueRef::Str(arr.get(position)?),
        };
        return Ok(value);
    }

    pub const fn kind(&self) -> ElementKind {
        match self {
            TaggedArray::Byte(_) => ElementKind::Byte,
            TaggedArray::Int(_) => ElementKind::Int,
            TaggedArray::Decimal(_) => ElementKind::Decimal,
            TaggedArray::Char(_) => ElementKind::Char,
            TaggedArray::Str(_) => ElementKind::Str,
        }
    }

    pub fn occupied_count(&self) -> usize {
        return each!(self, arr => arr.occupied_count());
    }

    pub fn is_empty(&self) -> bool {
        return self.occupied_count() == 0;
    }

    pub fn capacity(&self) -> usize {
        return each!(self, arr => arr.capacity());
    }

    pub fn element_width(&self) -> usize {
        return each!(self, arr => arr.element_width());
    }

    pub fn byte_size(&self) -> usize {
        return each!(self, arr => arr.byte_size());
    }

    pub fn index_to_position(&self, index: usize) -> isize {
        return each!(self, arr => arr.index_to_position(index));
    }

    pub fn ensure_capacity(&mut self, additional: usize) -> ArrayResult<usize> {
        return each!(self, arr => arr.ensure_capacity(additional));
    }

    pub fn grow(&mut self, requested: Option<usize>) -> ArrayResult<()> {
        return each!(self, arr => arr.grow(requested));
    }

    pub fn last_error(&self) -> Option<ArrayError> {
        return each!(self, arr => arr.last_error());
    }

    pub fn last_error_message(&self) -> Option<&'static str> {
        return each!(self, arr => arr.last_error_message());
    }

    pub fn clear_error(&mut self) -> Option<ArrayError> {
        return each!(self, arr => arr.clear_error());
    }

    pub fn growth_policy(&self) -> GrowthPolicy {
        return each!(self, arr => arr.growth_policy());
    }

    pub fn set_growth_policy(&mut self, growth: GrowthPolicy) {
        each!(self, arr => arr.set_growth_policy(growth));
    }

    pub fn padding_policy(&self) -> PaddingPolicy {
        return each!(self, arr => arr.padding_policy());
    }

    pub fn set_padding_policy(&mut self, padding: PaddingPolicy) {
        each!(self, arr => arr.set_padding_policy(padding));
    }

    pub fn panic_on_error(&self) -> bool {
        return each!(self, arr => arr.panic_on_error());
    }

    pub fn set_panic_on_error(&mut self, enabled: bool) {
        each!(self, arr => arr.set_panic_on_error(enabled));
    }

    pub fn realloc_attempts(&self) -> u64 {
        return each!(self, arr => arr.realloc_attempts());
    }

    pub fn set_resize_sink<S: ResizeSink + 'static>(&mut self, sink: S) {
        each!(self, arr => arr.set_resize_sink(sink));
    }

    pub fn take_resize_sink(&mut self) -> Option<Box<dyn ResizeSink>> {
        return each!(self, arr => arr.take_resize_sink());
    }

    pub fn render_to<B: AltAllocator>(&self, buf: &mut TypedArray<char, B>) -> ArrayResult<()> {
        return each!(self, arr => arr.render_to(buf));
    }

    pub fn render(&self) -> ArrayResult<TypedArray<char, Global>> {
        return each!(self, arr => arr.render());
    }

    #[cfg(feature = "std")]
    pub fn print(&self) -> ArrayResult<()> {
        return each!(self, arr => arr.print());
    }
}

impl<A: AltAllocator> fmt::Display for TaggedArray<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        each!(self, arr => fmt::Display::fmt(arr, f))
    }
}

impl<A: AltAllocator> fmt::Debug for TaggedArray<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        each!(self, arr => fmt::Debug::fmt(arr, f))
    }
}

macro_rules! impl_from_typed {
    ($typ:ty, $variant:ident) => {
        impl<A: AltAllocator> From<TypedArray<$typ, A>> for TaggedArray<A> {
            fn from(arr: TypedArray<$typ, A>) -> Self {
                return TaggedArray::$variant(arr);
            }
        }
    };
}

impl_from_typed!(u8, Byte);
impl_from_typed!(Int, Int);
impl_from_typed!(Decimal, Decimal);
impl_from_typed!(char, Char);
impl_from_typed!(OwnedStr, Str);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_each_kind() {
        for kind in [ElementKind::Byte, ElementKind::Int, ElementKind::Decimal, ElementKind::Char, ElementKind::Str] {
            let arr = TaggedArray::create(kind, 3).unwrap();
            assert_eq!(arr.kind(), kind);
            assert_eq!(arr.capacity(), 3);
            assert!(arr.is_empty());
        }
        let err = TaggedArray::create(ElementKind::Str, 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InitFailed);
    }

    #[test]
    fn wrong_kind_is_rejected() {
        let mut arr = TaggedArray::create(ElementKind::Byte, 4).unwrap();
        let err = arr.insert(0, Value::Str("nope"), false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        assert!(arr.is_empty());
        assert_eq!(arr.last_error(), Some(err));

        arr.clear_error();
        let err = arr.insert_many(0, Values::Text("nope"), None, false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);

        arr.insert(0, Value::Byte(7), false).unwrap();
        assert_eq!(arr.get(1).unwrap(), ValueRef::Byte(7));
    }

    #[test]
    fn text_goes_where_it_fits() {
        let mut chars = TaggedArray::create(ElementKind::Char, 4).unwrap();
        chars.insert_many(0, Values::Text("hello"), None, false).unwrap();
        assert_eq!(chars.occupied_count(), 5);
        assert_eq!(chars.get(-1).unwrap(), ValueRef::Char('o'));

        let mut strs = TaggedArray::create(ElementKind::Str, 4).unwrap();
        strs.insert_many(0, Values::Text("hello"), None, false).unwrap();
        strs.insert_many(0, Values::Strs(&["a", "b"]), None, false).unwrap();
        assert_eq!(strs.occupied_count(), 3);
        let ValueRef::Str(first) = strs.get(1).unwrap() else {
            panic!("expected a string");
        };
        assert_eq!(first, "hello");
    }

    #[test]
    fn text_length_counts_characters() {
        let mut strs = TaggedArray::create(ElementKind::Str, 2).unwrap();
        strs.insert_many(0, Values::Text("hello world"), Some(5), false).unwrap();
        strs.insert_many(0, Values::Text("héllo"), Some(2), false).unwrap();
        strs.insert_many(0, Values::Text("abc"), Some(3), false).unwrap();
        assert_eq!(strs.occupied_count(), 3);
        assert_eq!(strs.get(1).unwrap(), ValueRef::Str(&OwnedStr::from("hello")));
        assert_eq!(strs.get(2).unwrap(), ValueRef::Str(&OwnedStr::from("hé")));
        assert_eq!(strs.get(3).unwrap(), ValueRef::Str(&OwnedStr::from("abc")));

        let err = strs.insert_many(0, Values::Text("abc"), Some(4), false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
        strs.clear_error();
        let err = strs.insert_many(0, Values::Text("abc"), Some(0), false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
        assert_eq!(strs.occupied_count(), 3);
    }

    #[test]
    fn text_stops_at_nul() {
        let mut strs = TaggedArray::create(ElementKind::Str, 2).unwrap();
        strs.insert_many(0, Values::Text("ab\0cd"), None, false).unwrap();
        strs.insert(0, Value::Str("xy\0z"), false).unwrap();
        assert_eq!(strs.get(1).unwrap(), ValueRef::Str(&OwnedStr::from("ab")));
        assert_eq!(strs.get(2).unwrap(), ValueRef::Str(&OwnedStr::from("xy")));

        let mut chars = TaggedArray::create(ElementKind::Char, 2).unwrap();
        chars.insert_many(0, Values::Text("ab\0cd"), None, false).unwrap();
        assert_eq!(chars.occupied_count(), 2);
    }

    #[test]
    fn positions_from_indices() {
        let arr = TaggedArray::create(ElementKind::Byte, 2).unwrap();
        assert_eq!(arr.index_to_position(0), 1);
        assert_eq!(arr.index_to_position(9), 10);
    }

    #[test]
    fn string_scenario() {
        let mut arr = TaggedArray::create(ElementKind::Str, 2).unwrap();
        for s in ["String number 1", "String number 2", "String number 3", "String number 4", "String number 5"] {
            arr.insert(0, Value::Str(s), false).unwrap();
        }
        let ValueRef::Str(s) = arr.get(-2).unwrap() else {
            panic!("expected a string");
        };
        assert_eq!(s, "String number 4");

        arr.remove(3, 3).unwrap();
        assert_eq!(arr.occupied_count(), 2);
        assert_eq!(arr.remove(-1, 9).unwrap_err().kind(), ErrorKind::InvalidPosition);
        assert_eq!(arr.occupied_count(), 2);
    }

    #[test]
    fn dispatches_to_inner_array() {
        let mut arr = TaggedArray::from(TypedArray::<Int>::new(2).unwrap());
        arr.insert_many(0, Values::Ints(&[1, 2, 3]), None, false).unwrap();
        assert_eq!(arr.realloc_attempts(), 1);
        assert_eq!(arr.byte_size(), arr.capacity() * size_of::<Int>());
        assert_eq!(arr.render().unwrap().text(), "array([ 1 2 3 ])");
        assert_eq!(alloc::format!("{arr}"), "array([ 1 2 3 ])");

        arr.set_growth_policy(GrowthPolicy::TenPercent);
        assert_eq!(arr.growth_policy(), GrowthPolicy::TenPercent);

        arr.reset();
        assert!(arr.is_empty());
        assert_eq!(arr.get(1).unwrap_err().kind(), ErrorKind::InvalidPosition);
    }
}
