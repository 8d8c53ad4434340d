use crate::config::Config;
use crate::convert::{convert, convert_in_category, ConversionResult};
use crate::extract::{ConversionRequest, Extractor};
use crate::units::{Category, ConvertError, Unit, UnitAliases};

/// Alias table and display settings, built once and shared by every call
#[derive(Debug, Clone)]
pub struct UnitEngine {
    aliases: UnitAliases,
    precision: usize,
}

impl Default for UnitEngine {
    fn default() -> Self {
        Self {
            aliases: UnitAliases::default(),
            precision: crate::convert::DEFAULT_PRECISION,
        }
    }
}

impl UnitEngine {
    pub fn from_config(config: &Config) -> Result<Self, ConvertError> {
        config.validate()?;
        Ok(Self {
            aliases: config.build_aliases()?,
            precision: config.precision,
        })
    }

    pub fn aliases(&self) -> &UnitAliases {
        &self.aliases
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn extractor(&self) -> Extractor<'_> {
        Extractor::new(&self.aliases)
    }

    pub fn extract(&self, text: &str) -> ConversionRequest {
        self.extractor().extract(text)
    }

    /// Free-text mode: extract, check completeness, convert
    pub fn ask(&self, text: &str) -> Result<ConversionResult, ConvertError> {
        let request = self.extract(text).complete()?;
        let result = convert(request.value, request.source_unit, request.target_unit)?;
        Ok(ConversionResult {
            value: request.value,
            source_unit: request.source_unit,
            result,
            target_unit: request.target_unit,
        })
    }

    /// Manual mode: units given by name or alias, optionally pinned to a category
    pub fn convert_named(
        &self,
        value: f64,
        from: &str,
        to: &str,
        category: Option<Category>,
    ) -> Result<ConversionResult, ConvertError> {
        let source_unit = self.aliases.resolve(from)?;
        let target_unit = self.aliases.resolve(to)?;
        let result = match category {
            Some(category) => convert_in_category(category, value, source_unit, target_unit)?,
            None => convert(value, source_unit, target_unit)?,
        };
        Ok(ConversionResult {
            value,
            source_unit,
            result,
            target_unit,
        })
    }

    pub fn format(&self, result: &ConversionResult) -> String {
        result.format(self.precision)
    }
}

/// Suggestions for rephrasing a request that could not be completed
pub fn rephrase_hints(request: &ConversionRequest) -> Vec<&'static str> {
    let mut hints = Vec::new();
    if request.value.is_none() {
        hints.push("Include a number: \"Convert 5 kg to pounds\", not \"Convert kg to pounds\".");
    }
    if request.source_unit.is_none() || request.target_unit.is_none() {
        hints.push(
            "Use supported unit names: \"Convert 10 grams to pounds\", not \"Convert 10 gm to lbs\".",
        );
        hints.push(
            "Put the source unit right after the number: \"Convert 10 yards to meters\", not \"10 to meters from yards\".",
        );
    }
    hints
}

/// Aliases of `unit` joined for display
pub fn describe_unit(aliases: &UnitAliases, unit: Unit) -> String {
    format!("{} ({})", unit, aliases.aliases_for(unit).join(", "))
}
