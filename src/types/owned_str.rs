use alloc::boxed::Box;
use core::borrow::Borrow;
use core::fmt;
use core::ops::Deref;

/// A string slot owned by an array.
///
/// It is only ever built by copying the caller's data, so an array never
/// aliases memory it does not own. The allocation is released when the
/// handle is dropped, which happens on overwrite, remove, reset and when the
/// array itself goes away.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OwnedStr(Box<str>);

impl OwnedStr {
    #[inline]
    pub fn as_str(&self) -> &str {
        return &self.0;
    }
}

impl From<&str> for OwnedStr {
    fn from(value: &str) -> Self {
        return Self(Box::from(value));
    }
}

impl Deref for OwnedStr {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        return &self.0;
    }
}

impl Borrow<str> for OwnedStr {
    fn borrow(&self) -> &str {
        return &self.0;
    }
}

impl AsRef<str> for OwnedStr {
    fn as_ref(&self) -> &str {
        return &self.0;
    }
}

impl PartialEq<str> for OwnedStr {
    fn eq(&self, other: &str) -> bool {
        return &*self.0 == other;
    }
}

impl PartialEq<&str> for OwnedStr {
    fn eq(&self, other: &&str) -> bool {
        return &*self.0 == *other;
    }
}

impl fmt::Debug for OwnedStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for OwnedStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
