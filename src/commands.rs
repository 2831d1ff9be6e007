use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::catalog::FoodItem;
use crate::store::model::FoodInfo;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

// -- Arg structs for serialization --

#[derive(Serialize)]
struct SetApiKeyArgs {
    service: String,
    key: String,
}

#[derive(Serialize)]
struct ServiceArgs {
    service: String,
}

#[derive(Serialize)]
struct GetPreferenceArgs {
    key: String,
}

#[derive(Serialize)]
struct SetPreferenceArgs {
    key: String,
    value: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeMealPhotoArgs {
    image_data_url: String,
    comment: Option<String>,
}

#[derive(Serialize)]
struct AskQuestionArgs {
    question: String,
}

#[derive(Serialize)]
struct SearchFoodsArgs {
    query: String,
}

// -- Types matching backend structs --

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModelInfo {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HealthReport {
    pub gemini_api_key_set: bool,
    pub gemini_model: String,
    pub preferences_accessible: bool,
}

/// Assistant reply. `food_info` is only present when the reply carried a
/// dish with a non-zero calorie estimate.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AiReply {
    pub content: String,
    pub food_info: Option<FoodInfo>,
}

fn js_error(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| "Unknown error".to_string())
}

async fn call<A: Serialize, R: for<'de> Deserialize<'de>>(cmd: &str, args: &A) -> Result<R, String> {
    let args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    let result = invoke(cmd, args).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| format!("Failed to parse response: {}", e))
}

async fn call_unit<A: Serialize>(cmd: &str, args: &A) -> Result<(), String> {
    let args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    invoke(cmd, args).await.map(|_| ()).map_err(js_error)
}

// -- Keychain and preferences --

pub async fn set_api_key(service: &str, key: &str) -> Result<(), String> {
    call_unit(
        "set_api_key",
        &SetApiKeyArgs {
            service: service.to_string(),
            key: key.to_string(),
        },
    )
    .await
}

pub async fn get_api_key(service: &str) -> Result<Option<String>, String> {
    call(
        "get_api_key",
        &ServiceArgs {
            service: service.to_string(),
        },
    )
    .await
}

pub async fn delete_api_key(service: &str) -> Result<(), String> {
    call_unit(
        "delete_api_key",
        &ServiceArgs {
            service: service.to_string(),
        },
    )
    .await
}

pub async fn get_preference(key: &str) -> Result<Option<String>, String> {
    call(
        "get_preference",
        &GetPreferenceArgs {
            key: key.to_string(),
        },
    )
    .await
}

pub async fn set_preference(key: &str, value: &str) -> Result<(), String> {
    call_unit(
        "set_preference",
        &SetPreferenceArgs {
            key: key.to_string(),
            value: value.to_string(),
        },
    )
    .await
}

pub async fn list_models() -> Result<Vec<ModelInfo>, String> {
    call("list_models", &serde_json::json!({})).await
}

pub async fn run_health_check() -> Result<HealthReport, String> {
    call("run_health_check", &serde_json::json!({})).await
}

// -- AI assistant --

/// Analyze a meal photo given as a `data:` URL, with an optional user comment.
pub async fn analyze_meal_photo(image_data_url: &str, comment: Option<String>) -> Result<AiReply, String> {
    call(
        "analyze_meal_photo",
        &AnalyzeMealPhotoArgs {
            image_data_url: image_data_url.to_string(),
            comment,
        },
    )
    .await
}

pub async fn ask_nutrition_question(question: &str) -> Result<AiReply, String> {
    call(
        "ask_nutrition_question",
        &AskQuestionArgs {
            question: question.to_string(),
        },
    )
    .await
}

/// Ask the AI for up to three dishes matching `query`.
pub async fn search_foods_web(query: &str) -> Result<Vec<FoodItem>, String> {
    call(
        "search_foods_web",
        &SearchFoodsArgs {
            query: query.to_string(),
        },
    )
    .await
}
