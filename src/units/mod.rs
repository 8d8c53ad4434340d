// Unit identifiers, categories and the alias table shared by extraction and conversion

pub mod aliases;
pub mod error;
pub mod types;

pub use aliases::UnitAliases;
pub use error::ConvertError;
pub use types::{Category, Unit};
