// WebAssembly bindings for the browser front end
use crate::config::Config;
use crate::engine::{rephrase_hints, UnitEngine};
use crate::units::Category;
use wasm_bindgen::prelude::*;

fn js_error(message: String) -> JsValue {
    js_sys::Error::new(&message).into()
}

#[wasm_bindgen]
pub struct UnitConvWasm {
    engine: UnitEngine,
}

impl Default for UnitConvWasm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl UnitConvWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            engine: UnitEngine::default(),
        }
    }

    /// Build from TOML config contents (precision and extra aliases)
    #[wasm_bindgen]
    pub fn with_config(config_content: &str) -> Result<UnitConvWasm, JsValue> {
        let config = Config::load_from_str(config_content)
            .map_err(|e| js_error(format!("Failed to load config: {}", e)))?;
        let engine = UnitEngine::from_config(&config).map_err(|e| js_error(e.to_string()))?;
        Ok(Self { engine })
    }

    /// Extract a request from free text
    /// Returns JSON: {"value": 5.0 | null, "source_unit": "kilogram" | null, "target_unit": ...}
    #[wasm_bindgen]
    pub fn extract(&self, text: &str) -> Result<String, JsValue> {
        let request = self.engine.extract(text);
        serde_json::to_string(&request)
            .map_err(|e| js_error(format!("Failed to serialize request: {}", e)))
    }

    /// Convert a value between two unit names or aliases
    #[wasm_bindgen]
    pub fn convert(
        &self,
        value: f64,
        from: &str,
        to: &str,
        category: Option<String>,
    ) -> Result<f64, JsValue> {
        let category = category
            .map(|c| c.parse::<Category>())
            .transpose()
            .map_err(|e| js_error(e.to_string()))?;
        let result = self
            .engine
            .convert_named(value, from, to, category)
            .map_err(|e| js_error(e.to_string()))?;
        Ok(result.result)
    }

    /// Free-text conversion
    /// Returns JSON with the result and its display string, or throws with rephrase hints
    #[wasm_bindgen]
    pub fn ask(&self, text: &str) -> Result<String, JsValue> {
        match self.engine.ask(text) {
            Ok(result) => {
                let body = serde_json::json!({
                    "value": result.value,
                    "source_unit": result.source_unit,
                    "result": result.result,
                    "target_unit": result.target_unit,
                    "formatted": self.engine.format(&result),
                });
                serde_json::to_string(&body)
                    .map_err(|e| js_error(format!("Failed to serialize result: {}", e)))
            }
            Err(e) => {
                let hints = rephrase_hints(&self.engine.extract(text));
                Err(js_error(format!("{} {}", e, hints.join(" ")).trim().to_string()))
            }
        }
    }

    /// Units per category, in picker order
    /// Returns JSON: {"length": ["meter", ...], "weight": [...], "temperature": [...]}
    #[wasm_bindgen]
    pub fn units(&self) -> Result<String, JsValue> {
        let mut listing = serde_json::Map::new();
        for category in Category::ALL {
            listing.insert(
                category.name().to_string(),
                serde_json::json!(category.units()),
            );
        }
        serde_json::to_string(&listing)
            .map_err(|e| js_error(format!("Failed to serialize units: {}", e)))
    }
}
