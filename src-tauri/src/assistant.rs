//! The three assistant flows, independent of Tauri so they can be tested with
//! a mock transport.

use tracing::info;

use crate::analyzer::{self, prompts, AiReply, FoodItem};
use crate::error::GatewayError;
use crate::gemini::{GeminiClient, GeminiTransport};

fn reply_from_text(content: String) -> AiReply {
    let food_info = analyzer::actionable(analyzer::extract(&content));
    AiReply { content, food_info }
}

/// Analyze a meal photo given as a `data:` URL, with the user's optional comment.
pub async fn analyze_meal_photo<T: GeminiTransport>(
    client: &GeminiClient<T>,
    image_data_url: &str,
    comment: Option<&str>,
) -> Result<AiReply, GatewayError> {
    let image = analyzer::prepare_image(image_data_url)?;
    let prompt = prompts::build_photo_prompt(comment);
    let text = client.analyze(&prompt, Some(&image)).await?;
    let reply = reply_from_text(text);
    info!("Photo analysis done, food info: {:?}", reply.food_info);
    Ok(reply)
}

pub async fn ask_nutrition_question<T: GeminiTransport>(
    client: &GeminiClient<T>,
    question: &str,
) -> Result<AiReply, GatewayError> {
    let prompt = prompts::build_question_prompt(question);
    let text = client.analyze(&prompt, None).await?;
    Ok(reply_from_text(text))
}

/// Ask the model for up to three dishes matching `query`.
pub async fn search_foods_web<T: GeminiTransport>(
    client: &GeminiClient<T>,
    query: &str,
) -> Result<Vec<FoodItem>, GatewayError> {
    let prompt = prompts::build_food_search_prompt(query);
    let text = client.analyze(&prompt, None).await?;
    let results = analyzer::parse_food_results(&text)?;
    info!("Food search for '{}' returned {} results", query, results.len());
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gemini::client::tests::{text_reply, MockTransport};
    use crate::gemini::DEFAULT_MODEL;

    #[tokio::test]
    async fn test_question_reply_without_dish_has_no_food_info() {
        let client = GeminiClient::new(
            MockTransport::ok(&text_reply("**Fibra:** ayuda a la digestión")),
            "k",
            DEFAULT_MODEL,
        );
        let reply = ask_nutrition_question(&client, "¿Para qué sirve la fibra?").await.unwrap();
        assert_eq!(reply.content, "**Fibra:** ayuda a la digestión");
        assert_eq!(reply.food_info, None);
    }

    #[tokio::test]
    async fn test_question_reply_with_dish_is_actionable() {
        let client = GeminiClient::new(
            MockTransport::ok(&text_reply("**Platillo:** Arepa\n**Calorías Estimadas:** 300 kcal")),
            "k",
            DEFAULT_MODEL,
        );
        let reply = ask_nutrition_question(&client, "arepa").await.unwrap();
        let info = reply.food_info.unwrap();
        assert_eq!(info.name, "Arepa");
        assert_eq!(info.calories, 300);
    }

    #[tokio::test]
    async fn test_search_surfaces_parse_error() {
        let client = GeminiClient::new(MockTransport::ok(&text_reply("no sé")), "k", DEFAULT_MODEL);
        let err = search_foods_web(&client, "pizza").await.unwrap_err();
        assert!(matches!(err, GatewayError::SearchParse(_)));
    }

    #[tokio::test]
    async fn test_bad_photo_never_reaches_network() {
        let client = GeminiClient::new(MockTransport::ok(&text_reply("X")), "k", DEFAULT_MODEL);
        let err = analyze_meal_photo(&client, "data:image/png;base64,AAAA", None).await.unwrap_err();
        assert!(matches!(err, GatewayError::Image(_)));
    }
}
