pub mod config;
pub mod convert;
pub mod engine;
pub mod extract;
pub mod units;

#[cfg(not(target_arch = "wasm32"))]
pub mod logging;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use convert::{category_of, convert_length, convert_temperature, convert_weight};
pub use engine::UnitEngine;
pub use extract::{extract, ConversionRequest};
pub use units::{Category, ConvertError, Unit};
