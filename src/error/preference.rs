use std::fmt::{ Display, Formatter };
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq)]
pub enum PreferenceError {
    Unavailable,
    Storage(String),
    Invalid(String),
    Clipboard(String),
}

impl Display for PreferenceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PreferenceError::Unavailable => write!(f, "Storage Error: local storage is unavailable"),
            PreferenceError::Storage(msg) => write!(f, "Storage Error: {}", msg),
            PreferenceError::Invalid(msg) => write!(f, "Invalid Preference: {}", msg),
            PreferenceError::Clipboard(msg) => write!(f, "Clipboard Error: {}", msg),
        }
    }
}

impl std::error::Error for PreferenceError {}

impl From<JsValue> for PreferenceError {
    fn from(value: JsValue) -> Self {
        PreferenceError::Storage(js_message(&value))
    }
}

/// Best-effort text for a thrown JS value.
pub(crate) fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
