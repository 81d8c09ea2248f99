//! Positions are what callers use, indices are what the storage uses.
//!
//! * `0` is the slot right after the last element, i.e. append.
//! * `1, 2, ...` count from the front, `1` being the first element.
//! * `-1, -2, ...` count from the back, `-1` being the last element.

/// Turns a position into a 0-based index for an array holding `len`
/// elements. Returns `None` when the index would be negative.
///
/// The index is not checked against `len`; readers and removers do that.
pub(crate) const fn position_to_index(position: isize, len: usize) -> Option<usize> {
    if position == 0 {
        return Some(len);
    }
    if position > 0 {
        return Some(position as usize - 1);
    }
    let last = if len == 0 { 0 } else { len - 1 };
    if last > isize::MAX as usize {
        return None;
    }
    let index = last as isize + (position + 1);
    if index < 0 {
        return None;
    }
    return Some(index as usize);
}

/// Inverse of [`position_to_index`] for the left-to-right form.
pub(crate) const fn index_to_position(index: usize) -> isize {
    return index as isize + 1;
}
