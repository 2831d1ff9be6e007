//! Persisted application records.
//!
//! Field names follow the JSON layout already present in local storage, so
//! snapshots written by earlier builds keep loading.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Consumed amount against the daily target for one nutrient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatEntry {
    pub consumed: f64,
    pub target: f64,
}

impl StatEntry {
    pub fn new(target: f64) -> Self {
        Self {
            consumed: 0.0,
            target,
        }
    }

    /// Progress as a percentage of the target. A zero target reads as 0%.
    pub fn percent(&self) -> f64 {
        if self.target > 0.0 {
            self.consumed / self.target * 100.0
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub calories: StatEntry,
    pub protein: StatEntry,
    pub carbs: StatEntry,
    pub fat: StatEntry,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            calories: StatEntry::new(2200.0),
            protein: StatEntry::new(120.0),
            carbs: StatEntry::new(275.0),
            fat: StatEntry::new(85.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Snack,
    Dinner,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Snack,
        MealSlot::Dinner,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Desayuno",
            MealSlot::Lunch => "Almuerzo",
            MealSlot::Snack => "Merienda",
            MealSlot::Dinner => "Cena",
        }
    }
}

/// A logged meal. `image` is a text description, not image data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub id: u64,
    pub name: String,
    pub calories: f64,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat: Option<f64>,
}

impl Meal {
    pub fn new(id: u64, name: impl Into<String>, calories: f64, image: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            calories,
            image: image.into(),
            protein: None,
            carbs: None,
            fat: None,
        }
    }
}

/// Meals grouped by slot, each slot in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MealLog {
    #[serde(default)]
    pub breakfast: Vec<Meal>,
    #[serde(default)]
    pub lunch: Vec<Meal>,
    #[serde(default)]
    pub snack: Vec<Meal>,
    #[serde(default)]
    pub dinner: Vec<Meal>,
}

impl MealLog {
    pub fn slot(&self, slot: MealSlot) -> &[Meal] {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Snack => &self.snack,
            MealSlot::Dinner => &self.dinner,
        }
    }

    fn slot_mut(&mut self, slot: MealSlot) -> &mut Vec<Meal> {
        match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::Snack => &mut self.snack,
            MealSlot::Dinner => &mut self.dinner,
        }
    }

    pub fn push(&mut self, slot: MealSlot, meal: Meal) {
        self.slot_mut(slot).push(meal);
    }

    /// Every meal across all slots, slot by slot.
    pub fn iter(&self) -> impl Iterator<Item = &Meal> {
        MealSlot::ALL.into_iter().flat_map(move |slot| self.slot(slot).iter())
    }

    /// Id for a new meal: the creation time, bumped past any existing id.
    pub fn next_id(&self, now_millis: u64) -> u64 {
        match self.iter().map(|m| m.id).max() {
            Some(max) if max >= now_millis => max + 1,
            _ => now_millis,
        }
    }

    /// Demo meals shown on first launch.
    pub fn seed() -> Self {
        Self {
            breakfast: vec![
                Meal::new(101, "Tostada de Aguacate", 250.0, "Avocado toast with a sunny side up egg on top"),
                Meal::new(102, "Avena con frutas", 200.0, "A vibrant bowl of oatmeal with fresh berries and nuts"),
            ],
            lunch: vec![
                Meal::new(201, "Ensalada César con Pollo", 450.0, "Grilled chicken caesar salad with croutons and parmesan"),
                Meal::new(202, "Quinoa con verduras", 230.0, "Colorful quinoa salad with roasted vegetables"),
            ],
            snack: vec![
                Meal::new(301, "Yogur Griego", 150.0, "Creamy greek yogurt with a swirl of honey and walnuts"),
                Meal::new(302, "Manzana y Mantequilla de Maní", 70.0, "Crisp apple slices with a side of peanut butter"),
            ],
            dinner: vec![Meal::new(401, "Salmón al Horno con Espárragos", 380.0, "Baked salmon with lemon and asparagus")],
        }
    }
}

/// Structured dish data pulled out of an AI reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodInfo {
    pub name: String,
    pub calories: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Ai,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: u64,
    #[serde(rename = "type")]
    pub role: ChatRole,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_info: Option<FoodInfo>,
}

pub const GREETING: &str =
    "¡Hola! Soy tu asistente nutricional. ¿Qué has comido hoy? Sube una foto o descríbelo y lo analizaré por ti.";
pub const CLEARED_GREETING: &str =
    "¡Hola! Soy tu asistente nutricional. ¿Necesitas ayuda con algo más?";

impl ChatMessage {
    pub fn ai(id: u64, content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            role: ChatRole::Ai,
            content: content.into(),
            image: None,
            timestamp,
            food_info: None,
        }
    }

    pub fn user(
        id: u64,
        content: impl Into<String>,
        image: Option<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            role: ChatRole::User,
            content: content.into(),
            image,
            timestamp,
            food_info: None,
        }
    }
}

/// Id for a new chat message: the creation time, kept strictly above the last id.
pub fn next_message_id(messages: &[ChatMessage], now_millis: u64) -> u64 {
    match messages.iter().map(|m| m.id).max() {
        Some(max) if max >= now_millis => max + 1,
        _ => now_millis,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub age: u32,
    pub height: u32,
    pub weight: f64,
    pub activity_level: String,
    pub goal: String,
    pub target_calories: f64,
    pub target_protein: f64,
    pub target_carbs: f64,
    pub target_fat: f64,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "María González".to_string(),
            email: "maria.gonzalez@email.com".to_string(),
            age: 28,
            height: 165,
            weight: 62.0,
            activity_level: "Moderadamente activo".to_string(),
            goal: "Mantener peso".to_string(),
            target_calories: 2200.0,
            target_protein: 120.0,
            target_carbs: 275.0,
            target_fat: 85.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_guards_zero_target() {
        let entry = StatEntry {
            consumed: 500.0,
            target: 0.0,
        };
        assert_eq!(entry.percent(), 0.0);

        let entry = StatEntry {
            consumed: 550.0,
            target: 2200.0,
        };
        assert_eq!(entry.percent(), 25.0);
    }

    #[test]
    fn test_stats_json_layout() {
        let json = serde_json::to_value(Stats::default()).unwrap();
        assert_eq!(json["calories"]["target"], 2200.0);
        assert_eq!(json["protein"]["consumed"], 0.0);
        assert!(json["carbs"].is_object());
        assert!(json["fat"].is_object());
    }

    #[test]
    fn test_meal_log_reads_legacy_layout() {
        // Written by the JS build: integer numbers, no macro fields, no dinner key.
        let json = r#"{
            "breakfast": [{"id": 101, "name": "Tostada", "calories": 250, "image": "toast"}],
            "lunch": [],
            "snack": [{"id": 5, "name": "Yogur", "calories": 150, "image": "yogurt", "protein": 15}]
        }"#;
        let log: MealLog = serde_json::from_str(json).unwrap();
        assert_eq!(log.breakfast[0].calories, 250.0);
        assert!(log.breakfast[0].protein.is_none());
        assert_eq!(log.snack[0].protein, Some(15.0));
        assert!(log.dinner.is_empty());
    }

    #[test]
    fn test_meal_without_macros_omits_them() {
        let json = serde_json::to_string(&Meal::new(1, "Sopa", 120.0, "soup")).unwrap();
        assert!(!json.contains("protein"));
        assert!(!json.contains("carbs"));
    }

    #[test]
    fn test_push_keeps_insertion_order() {
        let mut log = MealLog::default();
        log.push(MealSlot::Lunch, Meal::new(1, "A", 100.0, ""));
        log.push(MealSlot::Lunch, Meal::new(2, "B", 200.0, ""));
        let names: Vec<&str> = log.slot(MealSlot::Lunch).iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_next_id_never_collides() {
        let log = MealLog::seed();
        assert_eq!(log.next_id(1_000_000), 1_000_000);
        // Clock behind the newest id
        assert_eq!(log.next_id(300), 402);
    }

    #[test]
    fn test_chat_message_json_field_names() {
        let mut msg = ChatMessage::ai(7, "**Platillo:** Sopa", Utc::now());
        msg.food_info = Some(FoodInfo {
            name: "Sopa".to_string(),
            calories: 120,
        });
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "ai");
        assert_eq!(json["foodInfo"]["calories"], 120);
        assert!(json.get("image").is_none());
    }

    #[test]
    fn test_next_message_id_is_monotonic() {
        let now = Utc::now();
        let messages = vec![ChatMessage::ai(1_000, "hola", now)];
        assert_eq!(next_message_id(&messages, 1_000), 1_001);
        assert_eq!(next_message_id(&messages, 5_000), 5_000);
        assert_eq!(next_message_id(&[], 42), 42);
    }

    #[test]
    fn test_theme_toggle_and_json() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    }
}
