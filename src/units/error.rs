use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// Free text did not yield a value and two units. Lists the missing slots.
    IncompleteExtraction { missing: Vec<&'static str> },
    /// A unit is not known, or has no entry in the factor table it reached
    InvalidUnit(String),
    UnknownCategory(String),
    /// A unit does not belong to the category the caller selected
    CategoryMismatch { unit: String, category: String },
    Config(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::IncompleteExtraction { missing } => write!(
                f,
                "Could not understand your input (missing {}). Try 'Convert 5 kg to pounds'.",
                missing.join(", ")
            ),
            ConvertError::InvalidUnit(unit) => write!(f, "Invalid unit: {}", unit),
            ConvertError::UnknownCategory(name) => write!(f, "Unknown category: {}", name),
            ConvertError::CategoryMismatch { unit, category } => {
                write!(f, "Unit '{}' is not a {} unit", unit, category)
            }
            ConvertError::Config(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for ConvertError {}
