//! WASM bindings for browser-based markdown conversion.
//!
//! This module exposes the conversion entry points to JavaScript via
//! wasm-bindgen. Conversion is total, so unlike most bindings there is
//! no error channel: every call returns a string.

use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Convert markdown for the platform named by `platform_id`.
///
/// Unknown identifiers fall back to the plain-text stripper.
#[wasm_bindgen]
pub fn convert(platform_id: &str, markdown: &str) -> String {
    crate::convert::convert(platform_id, markdown)
}

/// Remove all markdown syntax, keeping only the inner content.
#[wasm_bindgen]
pub fn strip(markdown: &str) -> String {
    crate::convert::strip(markdown)
}

/// The identifiers accepted by [`convert`], one per supported platform.
#[wasm_bindgen]
pub fn platforms() -> Vec<String> {
    crate::Platform::ALL
        .iter()
        .map(|p| p.id().to_string())
        .collect()
}
