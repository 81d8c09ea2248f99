use core::fmt;

/// The signed integer element type.
#[cfg(not(feature = "dtype64"))]
pub type Int = i32;
/// The signed integer element type.
#[cfg(feature = "dtype64")]
pub type Int = i64;

/// The floating point element type.
#[cfg(not(feature = "dtype64"))]
pub type Decimal = f32;
/// The floating point element type.
#[cfg(feature = "dtype64")]
pub type Decimal = f64;

/// The closed set of element kinds an array can hold.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Byte,
    Int,
    Decimal,
    Char,
    Str,
}

impl ElementKind {
    pub const fn name(self) -> &'static str {
        match self {
            ElementKind::Byte => "byte",
            ElementKind::Int => "int",
            ElementKind::Decimal => "decimal",
            ElementKind::Char => "char",
            ElementKind::Str => "string",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
