use tauri::AppHandle;
use tracing::{debug, info, warn};

use super::{config, keychain};
use crate::analyzer::{AiReply, FoodItem};
use crate::assistant;
use crate::error::GatewayError;
use crate::gemini::{GeminiClient, ReqwestTransport};

fn build_client(app: &AppHandle) -> Result<GeminiClient<ReqwestTransport>, GatewayError> {
    let api_key = keychain::gemini_api_key()?;
    let client = GeminiClient::new(ReqwestTransport::new()?, api_key, config::gemini_model(app));
    debug!("Using Gemini model {}", client.model());
    Ok(client)
}

fn log_failure(command: &str, err: GatewayError) -> String {
    warn!("{} failed: {}", command, err);
    err.into()
}

#[tauri::command]
pub async fn analyze_meal_photo(
    app: AppHandle,
    image_data_url: String,
    comment: Option<String>,
) -> Result<AiReply, String> {
    info!("Analyzing meal photo ({} bytes of data URL)", image_data_url.len());
    let client = build_client(&app).map_err(|e| log_failure("analyze_meal_photo", e))?;
    assistant::analyze_meal_photo(&client, &image_data_url, comment.as_deref())
        .await
        .map_err(|e| log_failure("analyze_meal_photo", e))
}

#[tauri::command]
pub async fn ask_nutrition_question(app: AppHandle, question: String) -> Result<AiReply, String> {
    info!("Answering nutrition question");
    let client = build_client(&app).map_err(|e| log_failure("ask_nutrition_question", e))?;
    assistant::ask_nutrition_question(&client, &question)
        .await
        .map_err(|e| log_failure("ask_nutrition_question", e))
}

#[tauri::command]
pub async fn search_foods_web(app: AppHandle, query: String) -> Result<Vec<FoodItem>, String> {
    info!("Searching foods for '{}'", query);
    let client = build_client(&app).map_err(|e| log_failure("search_foods_web", e))?;
    assistant::search_foods_web(&client, &query)
        .await
        .map_err(|e| log_failure("search_foods_web", e))
}
