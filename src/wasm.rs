// WebAssembly bindings for the measurement formatter
use crate::format::{FormatConfig, FormatResult, MeasurementFormatter, Notation, Precision};
use crate::measurement::parse_measurement;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct MeasFmtWasm {
    formatter: MeasurementFormatter,
}

impl Default for MeasFmtWasm {
    fn default() -> Self {
        Self::new()
    }
}

impl MeasFmtWasm {
    fn format(
        &self,
        input: &str,
        notation: Notation,
        precision: i32,
    ) -> Result<FormatResult, JsValue> {
        let measurement = parse_measurement(input)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse measurement: {}", e)))?;

        self.formatter
            .format(measurement, notation, Precision::from_sentinel(precision))
            .map_err(|e| JsValue::from_str(&format!("Failed to format measurement: {}", e)))
    }
}

#[wasm_bindgen]
impl MeasFmtWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            formatter: MeasurementFormatter::default(),
        }
    }

    /// Build a formatter from TOML configuration content
    #[wasm_bindgen]
    pub fn with_config(config_content: &str) -> Result<MeasFmtWasm, JsValue> {
        let config = FormatConfig::load_from_str(config_content)
            .map_err(|e| JsValue::from_str(&format!("Failed to load config: {}", e)))?;

        Ok(Self {
            formatter: MeasurementFormatter::new(config),
        })
    }

    /// Format in fixed-point notation; a negative precision selects it automatically
    /// Returns JSON string of the formatted result
    #[wasm_bindgen]
    pub fn decimal(&self, input: &str, precision: i32) -> Result<String, JsValue> {
        let result = self.format(input, Notation::Decimal, precision)?;

        serde_json::to_string(&result)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
    }

    /// Format in scientific notation; a negative precision selects it automatically
    /// Returns JSON string of the formatted result
    #[wasm_bindgen]
    pub fn scientific(&self, input: &str, precision: i32) -> Result<String, JsValue> {
        let result = self.format(input, Notation::Scientific, precision)?;

        serde_json::to_string(&result)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
    }

    /// LaTeX markup for use in plot labels
    #[wasm_bindgen]
    pub fn latex(&self, input: &str, scientific: bool, precision: i32) -> Result<String, JsValue> {
        let notation = if scientific {
            Notation::Scientific
        } else {
            Notation::Decimal
        };
        Ok(self.format(input, notation, precision)?.latex())
    }

    /// Format every entry of `inputs` (array of measurement strings)
    /// Returns an array of display strings in the same order
    #[wasm_bindgen]
    pub fn format_many(
        &self,
        inputs: js_sys::Array,
        scientific: bool,
        precision: i32,
    ) -> Result<js_sys::Array, JsValue> {
        let notation = if scientific {
            Notation::Scientific
        } else {
            Notation::Decimal
        };

        let formatted = js_sys::Array::new();
        for value in inputs.iter() {
            let input = value
                .as_string()
                .ok_or_else(|| JsValue::from_str("Expected an array of strings"))?;
            let result = self.format(&input, notation, precision)?;
            formatted.push(&JsValue::from_str(&self.formatter.render(&result)));
        }

        Ok(formatted)
    }
}
