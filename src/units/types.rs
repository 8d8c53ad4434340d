use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::units::error::ConvertError;

/// Physical quantity a unit measures. Decides which converter applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Length,
    Weight,
    Temperature,
}

/// Canonical unit identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    // Length
    Meter,
    Kilometer,
    Mile,
    Yard,
    Foot,
    // Weight
    Gram,
    Kilogram,
    Pound,
    Ounce,
    // Temperature
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Length, Category::Weight, Category::Temperature];

    /// Units of this category, in the order a picker should offer them
    pub fn units(self) -> &'static [Unit] {
        match self {
            Category::Length => &[Unit::Meter, Unit::Kilometer, Unit::Mile, Unit::Yard, Unit::Foot],
            Category::Weight => &[Unit::Gram, Unit::Kilogram, Unit::Pound, Unit::Ounce],
            Category::Temperature => &[Unit::Celsius, Unit::Fahrenheit, Unit::Kelvin],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Weight => "weight",
            Category::Temperature => "temperature",
        }
    }
}

impl Unit {
    pub const ALL: [Unit; 12] = [
        Unit::Meter,
        Unit::Kilometer,
        Unit::Mile,
        Unit::Yard,
        Unit::Foot,
        Unit::Gram,
        Unit::Kilogram,
        Unit::Pound,
        Unit::Ounce,
        Unit::Celsius,
        Unit::Fahrenheit,
        Unit::Kelvin,
    ];

    /// Canonical name, e.g. "kilogram"
    pub fn name(self) -> &'static str {
        match self {
            Unit::Meter => "meter",
            Unit::Kilometer => "kilometer",
            Unit::Mile => "mile",
            Unit::Yard => "yard",
            Unit::Foot => "foot",
            Unit::Gram => "gram",
            Unit::Kilogram => "kilogram",
            Unit::Pound => "pound",
            Unit::Ounce => "ounce",
            Unit::Celsius => "celsius",
            Unit::Fahrenheit => "fahrenheit",
            Unit::Kelvin => "kelvin",
        }
    }

    pub fn category(self) -> Category {
        match self {
            Unit::Meter | Unit::Kilometer | Unit::Mile | Unit::Yard | Unit::Foot => {
                Category::Length
            }
            Unit::Gram | Unit::Kilogram | Unit::Pound | Unit::Ounce => Category::Weight,
            Unit::Celsius | Unit::Fahrenheit | Unit::Kelvin => Category::Temperature,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = ConvertError;

    /// Parses a canonical name only. Aliases go through `UnitAliases`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Unit::ALL
            .iter()
            .copied()
            .find(|u| u.name() == lowered)
            .ok_or_else(|| ConvertError::InvalidUnit(s.to_string()))
    }
}

impl FromStr for Category {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "length" => Ok(Category::Length),
            // The picker labels this "Weight"; "mass" is accepted too
            "weight" | "mass" => Ok(Category::Weight),
            "temperature" => Ok(Category::Temperature),
            _ => Err(ConvertError::UnknownCategory(s.to_string())),
        }
    }
}
