// Pure conversion functions for length, weight and temperature

pub mod converter;
pub mod factors;
pub mod formatter;

#[cfg(test)]
mod tests;

pub use converter::{
    category_of, convert, convert_in_category, convert_length, convert_temperature,
    convert_weight,
};
pub use formatter::{ConversionResult, DEFAULT_PRECISION};
