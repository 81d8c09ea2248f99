mod array;
mod growth;
mod position;
mod render;

pub use array::TypedArray;
pub(crate) use position::position_to_index;
