use tracing::{info, warn};

use super::keychain;
use crate::gemini::client::{builtin_models, ModelInfo};
use crate::gemini::{GeminiClient, ReqwestTransport, DEFAULT_MODEL};

/// Gemini models usable for chat. Falls back to the built-in list without a key
/// or when the API call fails, so the settings page always has choices.
#[tauri::command]
pub async fn list_models() -> Result<Vec<ModelInfo>, String> {
    info!("Fetching Gemini models");
    let api_key = match keychain::gemini_api_key() {
        Ok(key) => key,
        Err(e) => {
            info!("Offering built-in models: {}", e);
            return Ok(builtin_models());
        }
    };

    let client = GeminiClient::new(ReqwestTransport::new()?, api_key, DEFAULT_MODEL);
    match client.list_models().await {
        Ok(models) if !models.is_empty() => {
            info!("Found {} Gemini models", models.len());
            Ok(models)
        }
        Ok(_) => Ok(builtin_models()),
        Err(e) => {
            warn!("Failed to list Gemini models: {}", e);
            Ok(builtin_models())
        }
    }
}
