use crate::convert::DEFAULT_PRECISION;
use crate::units::{ConvertError, UnitAliases};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const DEFAULT_CONFIG_FILE: &str = "unitconv.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    // Decimal places used when displaying a result
    #[serde(default = "default_precision")]
    pub precision: usize,

    // Logger spec, e.g. "warn" or "debug"
    #[serde(default)]
    pub log_level: Option<String>,

    // Extra surface forms: alias -> canonical unit name
    #[serde(default)]
    pub aliases: HashMap<String, String>,
}

fn default_precision() -> usize {
    DEFAULT_PRECISION
}

impl Default for Config {
    fn default() -> Self {
        Self::empty()
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn empty() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            log_level: None,
            aliases: HashMap::new(),
        }
    }

    pub fn validate(&self) -> Result<(), ConvertError> {
        if self.precision > 15 {
            return Err(ConvertError::Config(format!(
                "precision {} is above the 15 digits an f64 can show",
                self.precision
            )));
        }
        Ok(())
    }

    /// Alias table for this config: the built-in aliases plus `aliases`
    pub fn build_aliases(&self) -> Result<UnitAliases, ConvertError> {
        if self.aliases.is_empty() {
            return Ok(UnitAliases::builtin().clone());
        }
        UnitAliases::with_extra(&self.aliases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Unit;

    #[test]
    fn test_empty_config_defaults() {
        let config = Config::load_from_str("").unwrap();
        assert_eq!(config.precision, 4);
        assert!(config.log_level.is_none());
        assert!(config.aliases.is_empty());
        assert_eq!(&config.build_aliases().unwrap(), UnitAliases::builtin());
    }

    #[test]
    fn test_full_config() {
        let config = Config::load_from_str(
            r#"
precision = 2
log_level = "debug"

[aliases]
metre = "meter"
lbs = "pound"
"#,
        )
        .unwrap();

        assert_eq!(config.precision, 2);
        assert_eq!(config.log_level.as_deref(), Some("debug"));

        let aliases = config.build_aliases().unwrap();
        assert_eq!(aliases.get("metre"), Some(Unit::Meter));
        assert_eq!(aliases.get("lbs"), Some(Unit::Pound));
    }

    #[test]
    fn test_invalid_configs() {
        assert!(Config::load_from_str("precision = \"four\"").is_err());
        assert!(Config::load_from_str("precision = 40").is_err());

        let config = Config::load_from_str("[aliases]\nstone = \"stone\"").unwrap();
        assert!(matches!(
            config.build_aliases(),
            Err(ConvertError::Config(_))
        ));
    }
}
