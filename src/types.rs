mod errors;
mod kind;
mod owned_str;
mod policy;

pub(crate) use errors::ErrorSlot;
pub use errors::ArrayError;
pub use errors::ArrayResult;
pub use errors::ErrorKind;
pub use errors::error_message;
pub use kind::Decimal;
pub use kind::ElementKind;
pub use kind::Int;
pub use owned_str::OwnedStr;
pub use policy::GrowthPolicy;
pub use policy::PaddingPolicy;
