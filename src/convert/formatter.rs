use crate::units::Unit;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_PRECISION: usize = 4;

/// A finished conversion, ready for display
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct ConversionResult {
    pub value: f64,
    pub source_unit: Unit,
    pub result: f64,
    pub target_unit: Unit,
}

impl ConversionResult {
    /// "5.0 kilogram = 11.0231 pound" with `precision` decimals on the result.
    /// The input value always shows a decimal point.
    pub fn format(&self, precision: usize) -> String {
        format!(
            "{:?} {} = {:.*} {}",
            self.value, self.source_unit, precision, self.result, self.target_unit
        )
    }

    /// Result rounded to `precision` decimals. Values too large to scale are
    /// returned as is; they have no fractional digits left to round.
    pub fn rounded(&self, precision: usize) -> f64 {
        let scale = 10f64.powi(precision as i32);
        let scaled = self.result * scale;
        if !scaled.is_finite() {
            return self.result;
        }
        scaled.round() / scale
    }
}

impl fmt::Display for ConversionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(DEFAULT_PRECISION))
    }
}
