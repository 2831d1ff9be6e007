//! Dish name and calorie extraction from assistant text.
//!
//! The photo prompt asks for a fixed template with bold labels; these two
//! labels are the only fields read back.

use lazy_static::lazy_static;
use regex::Regex;

use super::types::FoodInfo;

pub const DEFAULT_DISH_NAME: &str = "Platillo analizado";

lazy_static! {
    static ref DISH_RE: Regex = Regex::new(r"\*\*Platillo:\*\*\s*(.+)").unwrap();
    static ref CALORIES_RE: Regex = Regex::new(r"\*\*Calorías Estimadas:\*\*\s*(\d+)").unwrap();
}

/// Read the first `**Platillo:**` line and the first `**Calorías Estimadas:**` number.
/// Missing fields fall back to `"Platillo analizado"` and `0`.
pub fn extract(text: &str) -> FoodInfo {
    let name = DISH_RE
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| DEFAULT_DISH_NAME.to_string());

    let calories = CALORIES_RE
        .captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .unwrap_or(0);

    FoodInfo { name, calories }
}

/// Only a positive calorie estimate can be added to the dashboard.
pub fn actionable(info: FoodInfo) -> Option<FoodInfo> {
    (info.calories > 0).then_some(info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_both_fields() {
        let info = extract("**Platillo:** Tacos al Pastor\n**Calorías Estimadas:** 450 kcal");
        assert_eq!(
            info,
            FoodInfo {
                name: "Tacos al Pastor".to_string(),
                calories: 450,
            }
        );
        assert!(actionable(info).is_some());
    }

    #[test]
    fn test_extract_defaults_without_labels() {
        let info = extract("La fibra ayuda a la digestión.");
        assert_eq!(info.name, DEFAULT_DISH_NAME);
        assert_eq!(info.calories, 0);
    }

    #[test]
    fn test_zero_calories_not_actionable() {
        let info = extract("**Calorías Estimadas:** 0 kcal");
        assert_eq!(info.name, DEFAULT_DISH_NAME);
        assert_eq!(info.calories, 0);
        assert_eq!(actionable(info), None);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let text = "**Platillo:** Paella\n**Calorías Estimadas:** 600\n**Platillo:** Otro\n**Calorías Estimadas:** 100";
        let info = extract(text);
        assert_eq!(info.name, "Paella");
        assert_eq!(info.calories, 600);
    }

    #[test]
    fn test_name_stops_at_line_end() {
        let info = extract("Análisis:\n**Platillo:**   Ensalada César  \n**Análisis Nutricional:** ...");
        assert_eq!(info.name, "Ensalada César");
    }

    #[test]
    fn test_calories_need_digits_right_after_label() {
        let info = extract("**Calorías Estimadas:** aprox. 300 kcal");
        assert_eq!(info.calories, 0);
    }

    #[test]
    fn test_calories_on_next_line_after_whitespace() {
        let info = extract("**Calorías Estimadas:**\n  520 kcal");
        assert_eq!(info.calories, 520);
    }

    #[test]
    fn test_oversized_number_falls_back_to_zero() {
        let info = extract("**Calorías Estimadas:** 99999999999999 kcal");
        assert_eq!(info.calories, 0);
    }
}
