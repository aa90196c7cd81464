//! Shared helpers for WASM API operations
//!
//! The exported functions log through the `log` facade under one target. In
//! the browser `console_log` forwards those records to the console; natively
//! they reach whatever logger the host installed.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::JsValue;

use crate::converters::cabc_to_abc::ConversionError;

/// Log target for records emitted by the API layer
pub const API_TARGET: &str = "cabc::api";

/// Debug-level trace of an API call
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        ::log::debug!(target: $crate::api::helpers::API_TARGET, $($arg)*)
    };
}

/// Info-level record of an API call
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        ::log::info!(target: $crate::api::helpers::API_TARGET, $($arg)*)
    };
}

/// Log a failed call and turn the message into the value thrown to JavaScript
fn reject(msg: String) -> JsValue {
    log::error!(target: API_TARGET, "{}", msg);
    JsValue::from_str(&msg)
}

/// Read a settings object passed in from JavaScript
pub fn deserialize<T: DeserializeOwned>(value: JsValue, context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| reject(format!("{}: {}", context, e)))
}

/// Hand a response back to JavaScript as a plain object
pub fn serialize<T: Serialize>(value: &T, context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| reject(format!("{}: {}", context, e)))
}

pub fn conversion_error(err: ConversionError) -> JsValue {
    reject(err.to_string())
}
