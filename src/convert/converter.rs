use crate::convert::factors::{scale, LENGTH_FACTORS, WEIGHT_FACTORS};
use crate::units::{Category, ConvertError, Unit};

/// Category a unit belongs to, used to pick the converter
pub fn category_of(unit: Unit) -> Category {
    unit.category()
}

/// Convert between meter, kilometer, mile, yard and foot.
/// Any other unit is an `InvalidUnit` error.
pub fn convert_length(value: f64, from: Unit, to: Unit) -> Result<f64, ConvertError> {
    scale(LENGTH_FACTORS, value, from, to)
}

/// Convert between gram, kilogram, pound and ounce.
/// Any other unit is an `InvalidUnit` error.
pub fn convert_weight(value: f64, from: Unit, to: Unit) -> Result<f64, ConvertError> {
    scale(WEIGHT_FACTORS, value, from, to)
}

/// Convert between celsius, fahrenheit and kelvin.
///
/// Only the six ordered pairs of distinct temperature units have a formula.
/// Every other pair, including `from == to` and non-temperature units,
/// returns `value` unchanged.
pub fn convert_temperature(value: f64, from: Unit, to: Unit) -> f64 {
    match (from, to) {
        (Unit::Celsius, Unit::Fahrenheit) => (value * 9.0 / 5.0) + 32.0,
        (Unit::Fahrenheit, Unit::Celsius) => (value - 32.0) * 5.0 / 9.0,
        (Unit::Celsius, Unit::Kelvin) => value + 273.15,
        (Unit::Kelvin, Unit::Celsius) => value - 273.15,
        (Unit::Fahrenheit, Unit::Kelvin) => (value - 32.0) * 5.0 / 9.0 + 273.15,
        (Unit::Kelvin, Unit::Fahrenheit) => (value - 273.15) * 9.0 / 5.0 + 32.0,
        _ => {
            if from != to {
                log::info!(
                    "No temperature formula for {} -> {}, returning value unchanged",
                    from,
                    to
                );
            }
            value
        }
    }
}

/// Route to the converter for the category of `from`
pub fn convert(value: f64, from: Unit, to: Unit) -> Result<f64, ConvertError> {
    let result = match category_of(from) {
        Category::Length => convert_length(value, from, to)?,
        Category::Weight => convert_weight(value, from, to)?,
        Category::Temperature => convert_temperature(value, from, to),
    };
    log::debug!("{} {} -> {} {}", value, from, result, to);
    Ok(result)
}

/// Manual mode: both units must belong to `category`
pub fn convert_in_category(
    category: Category,
    value: f64,
    from: Unit,
    to: Unit,
) -> Result<f64, ConvertError> {
    for unit in [from, to] {
        if unit.category() != category {
            return Err(ConvertError::CategoryMismatch {
                unit: unit.name().to_string(),
                category: category.name().to_string(),
            });
        }
    }
    convert(value, from, to)
}
