//! Prompt building and reply parsing for the nutrition assistant.

pub mod food_info;
pub mod image_prep;
pub mod prompts;
pub mod search_results;
pub mod types;

pub use food_info::{actionable, extract};
pub use image_prep::prepare_image;
pub use search_results::parse_food_results;
pub use types::*;
