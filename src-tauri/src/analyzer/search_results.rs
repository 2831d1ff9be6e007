//! Parsing of the web food search reply into catalog items.

use tracing::warn;

use super::types::FoodItem;
use crate::error::GatewayError;

/// Most dishes returned by a single search.
pub const MAX_RESULTS: usize = 3;

/// Remove a surrounding ``` fence (with optional language tag) from model output.
pub fn strip_markdown_json(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.starts_with("```") {
        let after_open = match trimmed.find('\n') {
            Some(pos) => &trimmed[pos + 1..],
            None => trimmed.trim_start_matches('`'),
        };
        let cleaned = after_open.trim_end();
        match cleaned.strip_suffix("```") {
            Some(inner) => inner.trim().to_string(),
            None => cleaned.to_string(),
        }
    } else {
        trimmed.to_string()
    }
}

/// Map one JSON object to a `FoodItem`. Only `name` is required; numbers default to 0
/// and are clamped to finite, non-negative values.
fn map_item(json: &serde_json::Value, position: usize) -> Option<FoodItem> {
    let name = json["name"].as_str()?.trim();
    if name.is_empty() {
        return None;
    }
    let number = |field: &str| {
        json[field]
            .as_f64()
            .or_else(|| json[field].as_str().and_then(|s| s.trim().parse().ok()))
            .filter(|n: &f64| n.is_finite())
            .map_or(0.0, |n| n.max(0.0))
    };

    Some(FoodItem {
        id: json["id"].as_u64().unwrap_or(position as u64 + 1),
        name: name.to_string(),
        calories: number("calories"),
        protein: number("protein"),
        carbs: number("carbs"),
        fat: number("fat"),
        image: json["image"].as_str().unwrap_or_default().to_string(),
    })
}

/// Parse the model's JSON array reply into at most three dishes.
///
/// Entries without a name are skipped. Ids are made unique within the batch
/// so the list can be keyed by id.
pub fn parse_food_results(text: &str) -> Result<Vec<FoodItem>, GatewayError> {
    let cleaned = strip_markdown_json(text);
    let json: serde_json::Value = serde_json::from_str(&cleaned).map_err(|e| {
        warn!("Food search reply is not JSON: {}", e);
        GatewayError::SearchParse(format!("reply is not JSON: {}", e))
    })?;

    let items = json
        .as_array()
        .ok_or_else(|| GatewayError::SearchParse("reply is not a JSON array".to_string()))?;

    let mut results: Vec<FoodItem> = Vec::new();
    for (position, value) in items.iter().enumerate() {
        if results.len() == MAX_RESULTS {
            break;
        }
        let Some(mut item) = map_item(value, position) else {
            warn!("Skipping food search entry without a name at index {}", position);
            continue;
        };
        if results.iter().any(|r| r.id == item.id) {
            item.id = results.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        }
        results.push(item);
    }
    Ok(results)
}
