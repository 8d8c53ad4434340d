#[cfg(test)]
mod tests {
    use super::super::converter::*;
    use super::super::factors::{lookup, LENGTH_FACTORS, WEIGHT_FACTORS};
    use crate::units::{Category, ConvertError, Unit};

    const TOLERANCE: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() < tolerance,
            "Expected ~{}, got {}",
            expected,
            actual
        );
    }

    fn round4(value: f64) -> f64 {
        (value * 10_000.0).round() / 10_000.0
    }

    #[test]
    fn test_kilogram_to_pound() {
        let result = convert_weight(5.0, Unit::Kilogram, Unit::Pound).unwrap();
        assert_eq!(round4(result), 11.0231);
    }

    #[test]
    fn test_kilometer_to_mile() {
        let result = convert_length(10.0, Unit::Kilometer, Unit::Mile).unwrap();
        assert_eq!(round4(result), 6.2137);
    }

    #[test]
    fn test_length_factors() {
        assert_close(
            convert_length(1.0, Unit::Meter, Unit::Foot).unwrap(),
            3.28084,
            TOLERANCE,
        );
        assert_close(
            convert_length(1.0, Unit::Meter, Unit::Yard).unwrap(),
            1.09361,
            TOLERANCE,
        );
        assert_close(
            convert_length(2500.0, Unit::Meter, Unit::Kilometer).unwrap(),
            2.5,
            TOLERANCE,
        );
    }

    #[test]
    fn test_weight_factors() {
        assert_close(
            convert_weight(1000.0, Unit::Gram, Unit::Kilogram).unwrap(),
            1.0,
            TOLERANCE,
        );
        assert_close(
            convert_weight(100.0, Unit::Gram, Unit::Ounce).unwrap(),
            3.5274,
            TOLERANCE,
        );
    }

    #[test]
    fn test_round_trip_within_category() {
        for table in [LENGTH_FACTORS, WEIGHT_FACTORS] {
            for (a, _) in table {
                for (b, _) in table {
                    let forward = convert(7.5, *a, *b).unwrap();
                    let back = convert(forward, *b, *a).unwrap();
                    assert_close(back, 7.5, 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_same_unit_is_identity() {
        assert_eq!(convert_length(42.0, Unit::Mile, Unit::Mile).unwrap(), 42.0);
        assert_eq!(convert_weight(42.0, Unit::Ounce, Unit::Ounce).unwrap(), 42.0);
    }

    #[test]
    fn test_unit_outside_table_is_invalid() {
        assert!(matches!(
            convert_length(1.0, Unit::Meter, Unit::Kilogram),
            Err(ConvertError::InvalidUnit(u)) if u == "kilogram"
        ));
        assert!(matches!(
            convert_weight(1.0, Unit::Celsius, Unit::Gram),
            Err(ConvertError::InvalidUnit(u)) if u == "celsius"
        ));
        assert!(lookup(LENGTH_FACTORS, Unit::Pound).is_err());
    }

    #[test]
    fn test_temperature_formulas() {
        assert_eq!(
            convert_temperature(0.0, Unit::Celsius, Unit::Fahrenheit),
            32.0
        );
        assert_eq!(
            convert_temperature(32.0, Unit::Fahrenheit, Unit::Celsius),
            0.0
        );
        assert_close(
            convert_temperature(100.0, Unit::Celsius, Unit::Kelvin),
            373.15,
            TOLERANCE,
        );
        assert_close(
            convert_temperature(373.15, Unit::Kelvin, Unit::Celsius),
            100.0,
            TOLERANCE,
        );
        assert_close(
            convert_temperature(212.0, Unit::Fahrenheit, Unit::Kelvin),
            373.15,
            TOLERANCE,
        );
        assert_close(
            convert_temperature(373.15, Unit::Kelvin, Unit::Fahrenheit),
            212.0,
            TOLERANCE,
        );
        assert_close(
            convert_temperature(-40.0, Unit::Celsius, Unit::Fahrenheit),
            -40.0,
            TOLERANCE,
        );
    }

    #[test]
    fn test_temperature_identity_fallback() {
        // Same unit has no formula and comes back unchanged
        assert_eq!(convert_temperature(5.0, Unit::Celsius, Unit::Celsius), 5.0);
        assert_eq!(convert_temperature(5.0, Unit::Kelvin, Unit::Kelvin), 5.0);
        // So does a pair outside the six formulas, without an error
        assert_eq!(convert_temperature(5.0, Unit::Celsius, Unit::Meter), 5.0);
        assert_eq!(convert_temperature(5.0, Unit::Gram, Unit::Kelvin), 5.0);
    }

    #[test]
    fn test_category_of() {
        assert_eq!(category_of(Unit::Yard), Category::Length);
        assert_eq!(category_of(Unit::Ounce), Category::Weight);
        assert_eq!(category_of(Unit::Kelvin), Category::Temperature);
    }

    #[test]
    fn test_convert_routes_by_source_category() {
        assert_eq!(
            round4(convert(5.0, Unit::Kilogram, Unit::Pound).unwrap()),
            11.0231
        );
        assert_eq!(convert(0.0, Unit::Celsius, Unit::Fahrenheit).unwrap(), 32.0);
        // Length source with a weight target reaches the length table
        assert!(matches!(
            convert(1.0, Unit::Meter, Unit::Gram),
            Err(ConvertError::InvalidUnit(_))
        ));
        // Temperature source with a length target falls back to identity
        assert_eq!(convert(20.0, Unit::Celsius, Unit::Meter).unwrap(), 20.0);
    }

    #[test]
    fn test_convert_in_category() {
        assert_close(
            convert_in_category(Category::Length, 1.0, Unit::Mile, Unit::Meter).unwrap(),
            1.0 / 0.000621371,
            1e-6,
        );
        match convert_in_category(Category::Weight, 1.0, Unit::Gram, Unit::Meter) {
            Err(ConvertError::CategoryMismatch { unit, category }) => {
                assert_eq!(unit, "meter");
                assert_eq!(category, "weight");
            }
            other => panic!("Expected CategoryMismatch, got {:?}", other),
        }
        assert!(
            convert_in_category(Category::Temperature, 1.0, Unit::Celsius, Unit::Celsius).is_ok()
        );
    }
}
