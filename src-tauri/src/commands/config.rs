use tauri::AppHandle;
use tauri_plugin_store::StoreExt;
use tracing::{info, warn};

use crate::error::GatewayError;
use crate::gemini::DEFAULT_MODEL;

const STORE_FILE: &str = "preferences.json";

/// Preferences key for the Gemini model name.
pub const MODEL_KEY: &str = "gemini_model";

#[tauri::command]
pub fn get_preference(app: AppHandle, key: &str) -> Result<Option<String>, String> {
    info!("Getting preference: {}", key);
    Ok(read_preference(&app, key)?)
}

#[tauri::command]
pub fn set_preference(app: AppHandle, key: &str, value: &str) -> Result<(), String> {
    info!("Setting preference: {} = {}", key, value);
    let store = app.store(STORE_FILE).map_err(|e| {
        warn!("Failed to open store: {}", e);
        e.to_string()
    })?;
    store.set(key, serde_json::json!(value));
    store.save().map_err(|e| {
        warn!("Failed to save store: {}", e);
        e.to_string()
    })
}

pub fn read_preference(app: &AppHandle, key: &str) -> Result<Option<String>, GatewayError> {
    let store = app.store(STORE_FILE).map_err(|e| {
        warn!("Failed to open store: {}", e);
        GatewayError::Config(e.to_string())
    })?;
    Ok(store.get(key).and_then(|v| v.as_str().map(|s| s.to_string())))
}

/// Choose the saved model name, or the default when unset or blank.
pub fn model_or_default(saved: Option<String>) -> String {
    saved
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string())
}

/// The configured Gemini model. Store failures fall back to the default.
pub fn gemini_model(app: &AppHandle) -> String {
    let saved = read_preference(app, MODEL_KEY).unwrap_or_else(|e| {
        warn!("Using default model: {}", e);
        None
    });
    model_or_default(saved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_or_default() {
        assert_eq!(model_or_default(None), DEFAULT_MODEL);
        assert_eq!(model_or_default(Some("  ".to_string())), DEFAULT_MODEL);
        assert_eq!(model_or_default(Some("gemini-1.5-pro".to_string())), "gemini-1.5-pro");
    }
}
