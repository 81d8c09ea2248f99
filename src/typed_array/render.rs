use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use super::TypedArray;
use crate::config::ArrayConfig;
use crate::element::Element;
use crate::heap::AltAllocator;
use crate::heap::Global;
use crate::types::ArrayResult;
use crate::types::PaddingPolicy;

impl<A: AltAllocator> TypedArray<char, A> {
    /// Inserts the characters of `text` at `position`, up to the first `'\0'`.
    pub fn insert_str(&mut self, position: isize, text: &str, overwrite: bool) -> ArrayResult<()> {
        let chars: Vec<char> = text.chars().collect();
        return self.insert_many(position, &chars, None, overwrite);
    }

    /// The characters held, as a `String`.
    pub fn text(&self) -> String {
        return self.iter().collect();
    }
}

impl<T: Element, A: AltAllocator> TypedArray<T, A> {
    /// Appends the textual form of this array, `array([ ... ])`, to `buf`.
    pub fn render_to<B: AltAllocator>(&self, buf: &mut TypedArray<char, B>) -> ArrayResult<()> {
        buf.insert_str(0, "array([ ", false)?;

        let mut piece = String::new();
        let mut chars = Vec::new();
        for value in self.iter() {
            piece.clear();
            value.render(&mut piece);
            chars.clear();
            chars.extend(piece.chars());
            // A run starting with '\0' renders as nothing.
            if char::natural_len(&chars) > 0 {
                buf.insert_many(0, &chars, None, false)?;
            }
        }

        buf.insert_str(0, "])", false)?;
        return Ok(());
    }

    /// Renders this array into a fresh character array.
    ///
    /// The buffer is sized for about ten characters per element and pads
    /// generously, since it is short lived.
    pub fn render(&self) -> ArrayResult<TypedArray<char, Global>> {
        let capacity = self.occupied_count().saturating_mul(10).max(16);
        let config = ArrayConfig::new(capacity).with_padding(PaddingPolicy::Thousand);
        let mut buf = TypedArray::with_config(config)?;
        self.render_to(&mut buf)?;
        return Ok(buf);
    }

    /// Writes the rendered form to stdout.
    #[cfg(feature = "std")]
    pub fn print(&self) -> ArrayResult<()> {
        let buf = self.render()?;
        std::print!("{}", buf.text());
        return Ok(());
    }
}

impl<T: Element, A: AltAllocator> fmt::Display for TypedArray<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Ok(buf) = self.render() else {
            return Err(fmt::Error);
        };
        f.write_str(&buf.text())
    }
}
