use serde::Serialize;
use tauri::AppHandle;
use tracing::info;

use super::{config, keychain};

#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub gemini_api_key_set: bool,
    pub gemini_model: String,
    pub preferences_accessible: bool,
}

#[tauri::command]
pub fn run_health_check(app: AppHandle) -> Result<HealthReport, String> {
    info!("Running health check");

    let key_set = keychain::gemini_api_key().is_ok();
    let preferences_accessible = config::read_preference(&app, config::MODEL_KEY).is_ok();
    let model = config::gemini_model(&app);
    info!(
        "Gemini API key set: {}, preferences accessible: {}, model: {}",
        key_set, preferences_accessible, model
    );

    Ok(HealthReport {
        gemini_api_key_set: key_set,
        gemini_model: model,
        preferences_accessible,
    })
}
