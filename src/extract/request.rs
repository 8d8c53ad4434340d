use crate::units::{ConvertError, Unit};
use serde::{Deserialize, Serialize};

/// What the extractor understood from one sentence.
/// Any `None` slot means the input was not understood and must not be converted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
pub struct ConversionRequest {
    pub value: Option<f64>,
    pub source_unit: Option<Unit>,
    pub target_unit: Option<Unit>,
}

/// A request with every slot filled
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct CompleteRequest {
    pub value: f64,
    pub source_unit: Unit,
    pub target_unit: Unit,
}

impl ConversionRequest {
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Names of the empty slots, in slot order
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.value.is_none() {
            missing.push("value");
        }
        if self.source_unit.is_none() {
            missing.push("source unit");
        }
        if self.target_unit.is_none() {
            missing.push("target unit");
        }
        missing
    }

    pub fn complete(&self) -> Result<CompleteRequest, ConvertError> {
        match (self.value, self.source_unit, self.target_unit) {
            (Some(value), Some(source_unit), Some(target_unit)) => Ok(CompleteRequest {
                value,
                source_unit,
                target_unit,
            }),
            _ => Err(ConvertError::IncompleteExtraction {
                missing: self.missing_fields(),
            }),
        }
    }
}
