//! The element kinds an array can be built over.

use alloc::string::String;
use core::fmt::Write;

use crate::types::Decimal;
use crate::types::ElementKind;
use crate::types::Int;
use crate::types::OwnedStr;

mod sealed {
    pub trait Sealed {}
}

/// Implemented for exactly the five element types: `u8`, [`Int`],
/// [`Decimal`], `char` and [`OwnedStr`].
///
/// Values are handed to an array in their `Source` form and turned into
/// stored elements with [`Element::adopt`]. For the inline kinds that is the
/// value itself, for [`OwnedStr`] it is a fresh copy of a borrowed `&str`.
///
/// Text ends at its first `'\0'` for both text kinds. A char run stops
/// there (see [`Element::natural_len`]) and a string keeps only what comes
/// before it.
pub trait Element: Sized + sealed::Sealed {
    const KIND: ElementKind;

    /// Terminator kept in the slot right after the last element.
    ///
    /// It is not counted as an element but it is counted when working out
    /// whether the storage must grow.
    const SENTINEL: Option<Self>;

    type Source<'a>: Copy;

    fn adopt(src: Self::Source<'_>) -> Self;

    /// Number of leading values that make up the run when no explicit
    /// length is given.
    fn natural_len(values: &[Self::Source<'_>]) -> usize {
        return values.len();
    }

    /// Appends the textual form of this element to `out`.
    fn render(&self, out: &mut String);
}

macro_rules! impl_inline_element {
    ($typ:ty, $kind:expr, $fmt:literal) => {
        impl sealed::Sealed for $typ {}

        impl Element for $typ {
            const KIND: ElementKind = $kind;
            const SENTINEL: Option<Self> = None;

            type Source<'a> = $typ;

            #[inline(always)]
            fn adopt(src: Self::Source<'_>) -> Self {
                return src;
            }

            fn render(&self, out: &mut String) {
                let _ = write!(out, $fmt, self);
            }
        }
    };
}

impl_inline_element!(u8, ElementKind::Byte, "{} ");
impl_inline_element!(Int, ElementKind::Int, "{} ");
impl_inline_element!(Decimal, ElementKind::Decimal, "{:.6} ");

impl sealed::Sealed for char {}

impl Element for char {
    const KIND: ElementKind = ElementKind::Char;
    const SENTINEL: Option<Self> = Some('\0');

    type Source<'a> = char;

    #[inline(always)]
    fn adopt(src: Self::Source<'_>) -> Self {
        return src;
    }

    /// A character run ends at its first `'\0'`.
    fn natural_len(values: &[Self::Source<'_>]) -> usize {
        return values.iter().position(|&c| c == '\0').unwrap_or(values.len());
    }

    fn render(&self, out: &mut String) {
        out.push(*self);
    }
}

impl sealed::Sealed for OwnedStr {}

impl Element for OwnedStr {
    const KIND: ElementKind = ElementKind::Str;
    const SENTINEL: Option<Self> = None;

    type Source<'a> = &'a str;

    fn adopt(src: Self::Source<'_>) -> Self {
        let end = src.find('\0').unwrap_or(src.len());
        return OwnedStr::from(&src[..end]);
    }

    fn render(&self, out: &mut String) {
        out.push_str(self);
        out.push_str(",\n");
    }
}
