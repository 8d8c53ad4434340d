use crate::extract::request::ConversionRequest;
use crate::extract::tokenizer::{is_numeric_literal, tokenize};
use crate::units::UnitAliases;

/// Pulls a value and two units out of free text using a shared alias table
#[derive(Debug, Clone, Copy)]
pub struct Extractor<'a> {
    aliases: &'a UnitAliases,
}

impl Default for Extractor<'static> {
    fn default() -> Self {
        Self::new(UnitAliases::builtin())
    }
}

impl<'a> Extractor<'a> {
    pub fn new(aliases: &'a UnitAliases) -> Self {
        Self { aliases }
    }

    /// Scan `text` left to right.
    ///
    /// - The last numeric token becomes the value.
    /// - The first unit alias becomes the source, the second the target.
    ///   Further unit matches are ignored.
    ///
    /// Never fails; unfilled slots are left as `None` for the caller to check.
    pub fn extract(&self, text: &str) -> ConversionRequest {
        let mut request = ConversionRequest::default();

        for token in tokenize(text) {
            if is_numeric_literal(&token) {
                if let Ok(value) = token.parse::<f64>() {
                    if let Some(previous) = request.value {
                        log::debug!("Number '{}' replaces earlier value {}", token, previous);
                    }
                    request.value = Some(value);
                }
            } else if let Some(unit) = self.aliases.get(&token) {
                if request.source_unit.is_none() {
                    request.source_unit = Some(unit);
                } else if request.target_unit.is_none() {
                    request.target_unit = Some(unit);
                } else {
                    log::info!("Ignoring extra unit '{}' in '{}'", token, text.trim());
                }
            } else {
                log::trace!("Skipping token '{}'", token);
            }
        }

        log::debug!("Extracted {:?} from '{}'", request, text.trim());
        request
    }
}

/// Extract with the built-in alias table
pub fn extract(text: &str) -> ConversionRequest {
    Extractor::default().extract(text)
}
