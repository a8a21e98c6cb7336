//! WASM bindings for rendering in the browser.
//!
//! Documents and options cross the boundary as JSON strings.

use wasm_bindgen::prelude::*;

use crate::options::RenderOptions;
use crate::tree::Document;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Render a JSON document tree to HTML.
///
/// `options_json` may be empty, in which case the defaults apply.
#[wasm_bindgen]
pub fn render_html(document_json: &str, options_json: &str) -> Result<String, JsValue> {
    let doc = Document::from_json(document_json).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let options = if options_json.trim().is_empty() {
        RenderOptions::default()
    } else {
        serde_json::from_str(options_json).map_err(|e| JsValue::from_str(&e.to_string()))?
    };

    Ok(crate::walk::render_html(&doc, options))
}

/// The default options as JSON, for building an options object in JS.
#[wasm_bindgen]
pub fn default_options() -> Result<String, JsValue> {
    serde_json::to_string(&RenderOptions::default()).map_err(|e| JsValue::from_str(&e.to_string()))
}
