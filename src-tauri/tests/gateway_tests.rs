use std::io::Cursor;
use std::sync::Mutex;

use base64::{engine::general_purpose::STANDARD, Engine};
use image::{DynamicImage, ImageFormat};

use nutriai_tauri::assistant;
use nutriai_tauri::gemini::client::HttpReply;
use nutriai_tauri::gemini::{GeminiClient, GeminiTransport, DEFAULT_MODEL};
use nutriai_tauri::GatewayError;

/// Answers with a fixed generateContent reply and keeps every request body.
struct RecordingTransport {
    text: String,
    bodies: Mutex<Vec<serde_json::Value>>,
}

impl RecordingTransport {
    fn replying(text: &str) -> Self {
        Self {
            text: text.to_string(),
            bodies: Mutex::new(Vec::new()),
        }
    }
}

impl GeminiTransport for RecordingTransport {
    async fn post_json(&self, _url: &str, body: serde_json::Value) -> Result<HttpReply, GatewayError> {
        self.bodies.lock().unwrap().push(body);
        let reply = serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": self.text }] } }]
        });
        Ok(HttpReply {
            status: 200,
            body: reply.to_string(),
        })
    }

    async fn get(&self, _url: &str) -> Result<HttpReply, GatewayError> {
        Ok(HttpReply {
            status: 404,
            body: String::new(),
        })
    }
}

fn photo_data_url(width: u32, height: u32) -> String {
    let img = DynamicImage::new_rgba8(width, height);
    let mut buffer = Cursor::new(Vec::new());
    img.write_to(&mut buffer, ImageFormat::Png).expect("Failed to encode fixture PNG");
    format!("data:image/png;base64,{}", STANDARD.encode(buffer.into_inner()))
}

#[tokio::test]
async fn test_photo_analysis_end_to_end() {
    let analysis = "**Platillo:** Tacos al Pastor\n**Calorías Estimadas:** 450 kcal\n**Sugerencias:** Añade verduras.";
    let client = GeminiClient::new(RecordingTransport::replying(analysis), "key", DEFAULT_MODEL);

    let reply = assistant::analyze_meal_photo(&client, &photo_data_url(1600, 1200), Some("en la cena"))
        .await
        .expect("Photo analysis should succeed");

    assert_eq!(reply.content, analysis);
    let info = reply.food_info.expect("Dish with calories should be actionable");
    assert_eq!(info.name, "Tacos al Pastor");
    assert_eq!(info.calories, 450);
}

#[tokio::test]
async fn test_photo_is_sent_as_downscaled_jpeg() {
    let client = GeminiClient::new(RecordingTransport::replying("**Platillo:** Pan"), "key", DEFAULT_MODEL);

    let reply = assistant::analyze_meal_photo(&client, &photo_data_url(3000, 1500), None)
        .await
        .expect("Photo analysis should succeed");
    // A name without calories is not actionable
    assert!(reply.food_info.is_none());

    let body = client.transport().bodies.lock().unwrap()[0].clone();
    let parts = &body["contents"][0]["parts"];
    assert!(parts[0]["text"].as_str().unwrap().contains("**Platillo:**"));
    assert_eq!(parts[1]["inline_data"]["mime_type"], "image/jpeg");

    let jpeg = STANDARD
        .decode(parts[1]["inline_data"]["data"].as_str().unwrap())
        .expect("Inline data should be base64");
    let sent = image::load_from_memory_with_format(&jpeg, ImageFormat::Jpeg).expect("Inline data should be JPEG");
    assert_eq!((sent.width(), sent.height()), (1024, 512));
}

#[tokio::test]
async fn test_web_search_parses_fenced_reply() {
    let fenced = "```json\n[{\"id\": 7, \"name\": \"Paella\", \"calories\": 380, \"protein\": 20, \"carbs\": 45, \"fat\": 12, \"image\": \"Paella valenciana\"}]\n```";
    let client = GeminiClient::new(RecordingTransport::replying(fenced), "key", DEFAULT_MODEL);

    let results = assistant::search_foods_web(&client, "paella")
        .await
        .expect("Fenced JSON should parse");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, 7);
    assert_eq!(results[0].name, "Paella");
    assert_eq!(results[0].calories, 380.0);
}

#[tokio::test]
async fn test_web_search_prose_reply_is_recoverable() {
    let client = GeminiClient::new(
        RecordingTransport::replying("No pude encontrar información."),
        "key",
        DEFAULT_MODEL,
    );
    let err = assistant::search_foods_web(&client, "xyz").await.unwrap_err();
    assert!(matches!(err, GatewayError::SearchParse(_)));
    assert!(String::from(err).contains("Could not parse food search results"));
}
