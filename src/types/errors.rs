use core::cell::Cell;
use core::error::Error;
use core::fmt;

/// This enum lets one figure out what kind of error occurred during
/// an array operation.
///
/// Every kind has a stable numeric code, see [`ErrorKind::code`].
#[repr(i16)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Catch all for failures that have no better description.
    Runtime = -100,
    /// The array could not be created, either a zero capacity was
    /// requested or the first allocation failed.
    InitFailed = -102,
    /// A position resolved to a negative index, or to an index past the
    /// last occupied element where one was required.
    InvalidPosition = -103,
    /// An argument such as a length or count was zero or inconsistent.
    InvalidParameter = -104,
    /// The allocator refused to provide memory.
    AllocFailure = -105,
    /// Growing the backing storage failed, because the allocator refused or
    /// because the grown size does not fit in memory at all. The previous
    /// storage is untouched.
    ResizeFailed = -106,
    /// A value of one element kind was handed to an array of another kind.
    TypeMismatch = -107,
    /// The insertion target would leave unoccupied slots behind.
    InsertFailed = -108,
    /// There was nothing to remove.
    RemoveFailed = -109,
    /// The initial capacity does not fit in memory. Only raised while
    /// setting up storage; arrays report it as [`ErrorKind::InitFailed`].
    CapacityOverflow = -110,
}

impl ErrorKind {
    const ALL: [ErrorKind; 10] = [
        ErrorKind::Runtime,
        ErrorKind::InitFailed,
        ErrorKind::InvalidPosition,
        ErrorKind::InvalidParameter,
        ErrorKind::AllocFailure,
        ErrorKind::ResizeFailed,
        ErrorKind::TypeMismatch,
        ErrorKind::InsertFailed,
        ErrorKind::RemoveFailed,
        ErrorKind::CapacityOverflow,
    ];

    /// The numeric code of this kind.
    pub const fn code(self) -> i32 {
        return self as i16 as i32;
    }

    /// Looks up the kind for a numeric code.
    pub fn from_code(code: i32) -> Option<Self> {
        return Self::ALL.into_iter().find(|k| k.code() == code);
    }

    /// Human readable description of this kind.
    pub const fn message(self) -> &'static str {
        match self {
            ErrorKind::Runtime => "array runtime error",
            ErrorKind::InitFailed => "array initialization failed",
            ErrorKind::InvalidPosition => "invalid array position",
            ErrorKind::InvalidParameter => "invalid parameter",
            ErrorKind::AllocFailure => "memory allocation failed",
            ErrorKind::ResizeFailed => "failed to resize the array",
            ErrorKind::TypeMismatch => "value kind does not match the array element kind",
            ErrorKind::InsertFailed => "insertion would leave a gap in the array",
            ErrorKind::RemoveFailed => "nothing to remove from an empty array",
            ErrorKind::CapacityOverflow => "capacity computation overflowed",
        }
    }
}

/// Returns the message for a numeric error code.
///
/// Unknown codes get the generic runtime message.
pub fn error_message(code: i32) -> &'static str {
    return ErrorKind::from_code(code).unwrap_or(ErrorKind::Runtime).message();
}

/// A type alias for `Result<T, ArrayError>`
pub type ArrayResult<T> = Result<T, ArrayError>;

/// This is used to indicate an error during an array operation.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ArrayError(ErrorKind);

impl ArrayError {
    pub(crate) const fn new(kind: ErrorKind) -> Self {
        return Self(kind);
    }
    pub const fn kind(self) -> ErrorKind {
        return self.0;
    }
    pub const fn code(self) -> i32 {
        return self.0.code();
    }
}

impl From<ErrorKind> for ArrayError {
    fn from(kind: ErrorKind) -> Self {
        return Self(kind);
    }
}

impl Error for ArrayError {}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.0.message(), self.0.code())
    }
}

/// Holds the first error an array ran into.
///
/// Later errors never replace it, only [`ErrorSlot::clear`] does.
#[derive(Debug, Default)]
pub(crate) struct ErrorSlot(Cell<Option<ArrayError>>);

impl ErrorSlot {
    pub(crate) const fn new() -> Self {
        return Self(Cell::new(None));
    }

    /// Returns true if `err` was stored.
    pub(crate) fn record(&self, err: ArrayError) -> bool {
        if self.0.get().is_some() {
            return false;
        }
        self.0.set(Some(err));
        return true;
    }

    pub(crate) fn get(&self) -> Option<ArrayError> {
        return self.0.get();
    }

    pub(crate) fn clear(&self) -> Option<ArrayError> {
        return self.0.take();
    }
}
