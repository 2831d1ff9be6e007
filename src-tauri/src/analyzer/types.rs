//! Shapes returned to the frontend by the assistant commands.

use serde::{Deserialize, Serialize};

/// Dish name and calorie estimate pulled out of a reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodInfo {
    pub name: String,
    pub calories: u32,
}

/// A dish with macros, as returned by the web food search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: u64,
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    /// Short description for an image generator
    pub image: String,
}

/// Assistant reply. `food_info` is set only when the text named a dish with calories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiReply {
    pub content: String,
    pub food_info: Option<FoodInfo>,
}
