//! Typed storage the arrays are built on: a fallibly allocated buffer plus
//! the element moves needed to open and close gaps in it.

mod array;
mod inner;

pub(crate) use array::RawArray;
