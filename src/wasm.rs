//! WASM bindings for kaeng
//!
//! This module provides JavaScript-accessible functions for Georgian ⇄ English
//! layout conversion.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "wasm")]
use crate::core::converter::{ConversionDirection, ConvertOptions};

/// Conversion options (exposed to WASM)
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize, Default)]
pub struct JsConvertOptions {
    /// `"auto"` (default), `"en-ka"` or `"ka-en"`
    #[serde(default)]
    pub direction: Option<String>,
}

/// Conversion result with additional metadata
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct ConvertResult {
    /// The converted output
    pub output: String,
    /// Direction that was applied
    pub direction: String,
    /// Whether the conversion was successful
    pub success: bool,
    /// Error message if the options were invalid
    pub error: Option<String>,
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Convert text, detecting the direction
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "convertText")]
pub fn convert_text_wasm(input: &str) -> String {
    crate::convert(input)
}

/// Detect direction (`"en-ka"` or `"ka-en"`)
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "detectDirection")]
pub fn detect_direction_wasm(input: &str) -> String {
    crate::detect_direction(input).as_str().to_string()
}

/// Convert text with options
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "convertWithOptions")]
pub fn convert_with_options_wasm(input: &str, options: JsValue) -> Result<JsValue, JsValue> {
    let opts: JsConvertOptions = serde_wasm_bindgen::from_value(options).unwrap_or_default();

    let forced = match opts.direction.as_deref() {
        None | Some("auto") => Ok(None),
        Some(name) => name.parse::<ConversionDirection>().map(Some),
    };

    let result = match forced {
        Ok(direction) => {
            let applied = direction.unwrap_or_else(|| crate::detect_direction(input));
            let options = ConvertOptions {
                direction,
                ..Default::default()
            };
            ConvertResult {
                output: crate::convert_with_options(input, &options),
                direction: applied.as_str().to_string(),
                success: true,
                error: None,
            }
        }
        Err(err) => ConvertResult {
            output: String::new(),
            direction: String::new(),
            success: false,
            error: Some(err.to_string()),
        },
    };

    serde_wasm_bindgen::to_value(&result).map_err(JsValue::from)
}

/// Summary of a text check
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct CheckSummary {
    pub direction: String,
    pub warnings: Vec<String>,
    pub infos: Vec<String>,
}

/// Check text for spots that convert unexpectedly
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "checkText")]
pub fn check_text_wasm(input: &str) -> Result<JsValue, JsValue> {
    use crate::diagnostics::DiagnosticLevel;

    let result = crate::check_text(input);

    let mut warnings = Vec::new();
    let mut infos = Vec::new();
    for d in &result.diagnostics {
        match d.level {
            DiagnosticLevel::Info => infos.push(d.message.clone()),
            DiagnosticLevel::Warning => warnings.push(d.message.clone()),
        }
    }

    let summary = CheckSummary {
        direction: result.direction.as_str().to_string(),
        warnings,
        infos,
    };
    serde_wasm_bindgen::to_value(&summary).map_err(JsValue::from)
}

/// Share URL for a platform name, empty when the platform has no URL
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "buildShareUrl")]
pub fn build_share_url_wasm(platform: &str, text: &str, page_url: &str) -> Result<String, JsValue> {
    let platform: crate::SharePlatform = platform
        .parse()
        .map_err(|e: crate::KaengError| JsValue::from_str(&e.to_string()))?;
    let text = crate::share::share_text_or_title(text);
    Ok(crate::build_share_url(platform, text, page_url).unwrap_or_default())
}

/// Get version information
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
