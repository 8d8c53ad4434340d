use crate::extract::tokenizer::{is_numeric_literal, tokenize};
use crate::units::error::ConvertError;
use crate::units::types::Unit;
use lazy_static::lazy_static;
use std::collections::HashMap;

/// Surface forms recognized out of the box
const BUILTIN: &[(&str, Unit)] = &[
    ("m", Unit::Meter),
    ("meter", Unit::Meter),
    ("meters", Unit::Meter),
    ("km", Unit::Kilometer),
    ("kilometer", Unit::Kilometer),
    ("kilometers", Unit::Kilometer),
    ("mile", Unit::Mile),
    ("miles", Unit::Mile),
    ("yard", Unit::Yard),
    ("yards", Unit::Yard),
    ("foot", Unit::Foot),
    ("feet", Unit::Foot),
    ("g", Unit::Gram),
    ("gram", Unit::Gram),
    ("grams", Unit::Gram),
    ("kg", Unit::Kilogram),
    ("kilogram", Unit::Kilogram),
    ("kilograms", Unit::Kilogram),
    ("lb", Unit::Pound),
    ("pound", Unit::Pound),
    ("pounds", Unit::Pound),
    ("oz", Unit::Ounce),
    ("ounce", Unit::Ounce),
    ("ounces", Unit::Ounce),
    ("c", Unit::Celsius),
    ("celsius", Unit::Celsius),
    ("f", Unit::Fahrenheit),
    ("fahrenheit", Unit::Fahrenheit),
    ("k", Unit::Kelvin),
    ("kelvin", Unit::Kelvin),
];

lazy_static! {
    static ref BUILTIN_ALIASES: UnitAliases = UnitAliases {
        table: BUILTIN
            .iter()
            .map(|(alias, unit)| (alias.to_string(), *unit))
            .collect(),
    };
}

/// Alias table mapping lower-case surface forms to canonical units.
/// Built once at startup and only read afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitAliases {
    table: HashMap<String, Unit>,
}

impl UnitAliases {
    /// The built-in table
    pub fn builtin() -> &'static UnitAliases {
        &BUILTIN_ALIASES
    }

    /// Built-in table extended with `extra` (alias -> canonical unit name).
    /// Built-in aliases cannot be remapped.
    pub fn with_extra(extra: &HashMap<String, String>) -> Result<Self, ConvertError> {
        let mut aliases = Self::builtin().clone();

        for (alias, canonical) in extra {
            let key = alias.trim().to_lowercase();
            // Must survive tokenization unchanged or it could never match
            if tokenize(&key) != [key.as_str()] {
                return Err(ConvertError::Config(format!(
                    "alias '{}' is not a single word token",
                    alias
                )));
            }
            if is_numeric_literal(&key) {
                return Err(ConvertError::Config(format!(
                    "alias '{}' would be read as a number",
                    alias
                )));
            }

            let unit: Unit = canonical.parse().map_err(|_| {
                ConvertError::Config(format!(
                    "alias '{}' maps to unknown unit '{}'",
                    alias, canonical
                ))
            })?;

            match aliases.table.get(&key).copied() {
                Some(existing) if existing != unit => {
                    return Err(ConvertError::Config(format!(
                        "alias '{}' already means {}",
                        key, existing
                    )));
                }
                Some(_) => {}
                None => {
                    log::debug!("Registered alias '{}' -> {}", key, unit);
                    aliases.table.insert(key, unit);
                }
            }
        }

        Ok(aliases)
    }

    /// Exact lookup of an already lower-cased token
    pub fn get(&self, token: &str) -> Option<Unit> {
        self.table.get(token).copied()
    }

    /// Resolve user input that may be an alias or a canonical name, any case
    pub fn resolve(&self, input: &str) -> Result<Unit, ConvertError> {
        let lowered = input.trim().to_lowercase();
        self.get(&lowered)
            .or_else(|| lowered.parse().ok())
            .ok_or_else(|| ConvertError::InvalidUnit(input.to_string()))
    }

    /// Aliases of `unit`, sorted shortest first
    pub fn aliases_for(&self, unit: Unit) -> Vec<&str> {
        let mut aliases: Vec<&str> = self
            .table
            .iter()
            .filter(|(_, u)| **u == unit)
            .map(|(alias, _)| alias.as_str())
            .collect();
        aliases.sort_by(|a, b| a.len().cmp(&b.len()).then(a.cmp(b)));
        aliases
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Unit)> {
        self.table.iter().map(|(alias, unit)| (alias.as_str(), *unit))
    }
}

impl Default for UnitAliases {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_unit_has_an_alias() {
        let aliases = UnitAliases::builtin();
        for unit in Unit::ALL {
            assert!(
                aliases.aliases_for(unit).contains(&unit.name()),
                "{} is not reachable by its own name",
                unit
            );
        }
        assert_eq!(aliases.len(), BUILTIN.len());
    }

    #[test]
    fn test_resolve_alias_and_canonical() {
        let aliases = UnitAliases::builtin();
        assert_eq!(aliases.resolve("KG").unwrap(), Unit::Kilogram);
        assert_eq!(aliases.resolve("feet").unwrap(), Unit::Foot);
        assert!(aliases.resolve("lbs").is_err());
        assert_eq!(aliases.get("Kg"), None);
    }

    #[test]
    fn test_with_extra_adds_aliases() {
        let mut extra = HashMap::new();
        extra.insert("Metre".to_string(), "meter".to_string());
        extra.insert("lbs".to_string(), "pound".to_string());

        let aliases = UnitAliases::with_extra(&extra).unwrap();
        assert_eq!(aliases.get("metre"), Some(Unit::Meter));
        assert_eq!(aliases.get("lbs"), Some(Unit::Pound));
        assert_eq!(aliases.len(), BUILTIN.len() + 2);
        // The shared built-in table is untouched
        assert_eq!(UnitAliases::builtin().get("lbs"), None);
    }

    #[test]
    fn test_with_extra_rejects_bad_entries() {
        let mut extra = HashMap::new();
        extra.insert("stone".to_string(), "stone".to_string());
        assert!(matches!(
            UnitAliases::with_extra(&extra),
            Err(ConvertError::Config(_))
        ));

        let mut extra = HashMap::new();
        extra.insert("kg".to_string(), "pound".to_string());
        assert!(UnitAliases::with_extra(&extra).is_err());

        let mut extra = HashMap::new();
        extra.insert("12".to_string(), "meter".to_string());
        assert!(UnitAliases::with_extra(&extra).is_err());

        // Re-stating a built-in mapping is harmless
        let mut extra = HashMap::new();
        extra.insert("kg".to_string(), "kilogram".to_string());
        assert!(UnitAliases::with_extra(&extra).is_ok());
    }

    #[test]
    fn test_with_extra_rejects_aliases_that_never_match() {
        for alias in ["", "two words", "k,g", "lb(s)", "lbs.", "5kg", "3.5"] {
            let mut extra = HashMap::new();
            extra.insert(alias.to_string(), "pound".to_string());
            assert!(
                matches!(
                    UnitAliases::with_extra(&extra),
                    Err(ConvertError::Config(_))
                ),
                "alias '{}' should be rejected",
                alias
            );
        }

        // Not a number, so it is an ordinary token
        let mut extra = HashMap::new();
        extra.insert("1.2.3".to_string(), "meter".to_string());
        let aliases = UnitAliases::with_extra(&extra).unwrap();
        assert_eq!(aliases.get("1.2.3"), Some(Unit::Meter));

        // Apostrophes and slashes stay inside a token
        let mut extra = HashMap::new();
        extra.insert("lb's".to_string(), "pound".to_string());
        extra.insert("m/s".to_string(), "meter".to_string());
        assert!(UnitAliases::with_extra(&extra).is_ok());
    }
}
