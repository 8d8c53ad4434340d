use crate::units::{ConvertError, Unit};

/// Units per meter
pub const LENGTH_FACTORS: &[(Unit, f64)] = &[
    (Unit::Meter, 1.0),
    (Unit::Kilometer, 0.001),
    (Unit::Mile, 0.000621371),
    (Unit::Yard, 1.09361),
    (Unit::Foot, 3.28084),
];

/// Units per gram
pub const WEIGHT_FACTORS: &[(Unit, f64)] = &[
    (Unit::Gram, 1.0),
    (Unit::Kilogram, 0.001),
    (Unit::Pound, 0.00220462),
    (Unit::Ounce, 0.035274),
];

/// Factor of `unit` in `table`, or `InvalidUnit` when the table has no entry
pub fn lookup(table: &[(Unit, f64)], unit: Unit) -> Result<f64, ConvertError> {
    table
        .iter()
        .find(|(u, _)| *u == unit)
        .map(|(_, factor)| *factor)
        .ok_or_else(|| ConvertError::InvalidUnit(unit.name().to_string()))
}

/// `value * factor[to] / factor[from]`
pub fn scale(table: &[(Unit, f64)], value: f64, from: Unit, to: Unit) -> Result<f64, ConvertError> {
    let from_factor = lookup(table, from)?;
    let to_factor = lookup(table, to)?;
    Ok(value * (to_factor / from_factor))
}
