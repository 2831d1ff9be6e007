//! Built-in food database and meal plans for the Nutrition page.

use serde::{Deserialize, Serialize};

use crate::store::model::Meal;

/// A catalog dish with full macros. Also the shape returned by web search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: u64,
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub image: String,
}

impl FoodItem {
    fn new(id: u64, name: &str, calories: f64, protein: f64, carbs: f64, fat: f64, image: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            calories,
            protein,
            carbs,
            fat,
            image: image.to_string(),
        }
    }

    /// The dish as a loggable meal. The store assigns the final id.
    pub fn to_meal(&self) -> Meal {
        Meal {
            id: 0,
            name: self.name.clone(),
            calories: self.calories,
            image: self.image.clone(),
            protein: Some(self.protein),
            carbs: Some(self.carbs),
            fat: Some(self.fat),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MealPlan {
    pub id: u64,
    pub name: &'static str,
    pub description: &'static str,
    pub calories: u32,
    pub duration: &'static str,
    pub difficulty: &'static str,
    pub meals: &'static [&'static str],
}

pub fn food_database() -> Vec<FoodItem> {
    vec![
        FoodItem::new(1, "Avena con frutas", 320.0, 12.0, 54.0, 8.0, "A vibrant bowl of oatmeal with fresh berries and nuts"),
        FoodItem::new(2, "Pollo a la plancha", 185.0, 35.0, 0.0, 4.0, "Grilled chicken breast with a side of quinoa and steamed broccoli"),
        FoodItem::new(3, "Ensalada César", 280.0, 8.0, 12.0, 24.0, "Classic Caesar salad with croutons and parmesan cheese"),
        FoodItem::new(4, "Yogur griego con miel", 150.0, 15.0, 18.0, 4.0, "A bowl of creamy Greek yogurt with honey and walnuts"),
        FoodItem::new(5, "Salmón al horno", 206.0, 28.0, 0.0, 9.0, "Baked salmon fillet with a lemon wedge and fresh dill"),
        FoodItem::new(6, "Quinoa con verduras", 220.0, 8.0, 39.0, 4.0, "A colorful bowl of quinoa mixed with roasted vegetables"),
        FoodItem::new(7, "Tostada de aguacate", 250.0, 7.0, 25.0, 15.0, "Sourdough toast topped with mashed avocado, chili flakes and a fried egg"),
        FoodItem::new(8, "Batido de Proteínas", 300.0, 30.0, 20.0, 12.0, "A chocolate protein shake in a glass, garnished with a strawberry"),
        FoodItem::new(9, "Lentejas estofadas", 350.0, 18.0, 60.0, 5.0, "A hearty bowl of lentil stew with carrots and celery"),
    ]
}

pub fn meal_plans() -> Vec<MealPlan> {
    vec![
        MealPlan {
            id: 1,
            name: "Plan Mediterráneo",
            description: "Rico en pescado, aceite de oliva y vegetales frescos.",
            calories: 1800,
            duration: "7 días",
            difficulty: "Fácil",
            meals: &["Salmón al horno", "Ensalada César", "Yogur griego con miel"],
        },
        MealPlan {
            id: 2,
            name: "Plan Proteico",
            description: "Alto contenido en proteínas para desarrollo muscular.",
            calories: 2200,
            duration: "14 días",
            difficulty: "Intermedio",
            meals: &["Pollo a la plancha", "Batido de Proteínas", "Lentejas estofadas"],
        },
        MealPlan {
            id: 3,
            name: "Plan Vegano",
            description: "Completamente basado en plantas y balanceado.",
            calories: 1900,
            duration: "21 días",
            difficulty: "Avanzado",
            meals: &["Quinoa con verduras", "Tostada de aguacate", "Avena con frutas"],
        },
    ]
}

/// Case-insensitive substring match on the dish name. An empty term matches all.
pub fn filter_foods<'a>(foods: &'a [FoodItem], term: &str) -> Vec<&'a FoodItem> {
    let needle = term.trim().to_lowercase();
    foods
        .iter()
        .filter(|food| food.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_is_case_insensitive() {
        let foods = food_database();
        let hits = filter_foods(&foods, "SALMÓN");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Salmón al horno");
    }

    #[test]
    fn test_filter_empty_term_matches_all() {
        let foods = food_database();
        assert_eq!(filter_foods(&foods, "  ").len(), foods.len());
    }

    #[test]
    fn test_filter_no_match() {
        let foods = food_database();
        assert!(filter_foods(&foods, "sushi").is_empty());
    }

    #[test]
    fn test_to_meal_carries_macros() {
        let food = &food_database()[1];
        let meal = food.to_meal();
        assert_eq!(meal.name, "Pollo a la plancha");
        assert_eq!(meal.calories, 185.0);
        assert_eq!(meal.protein, Some(35.0));
        assert_eq!(meal.carbs, Some(0.0));
    }

    #[test]
    fn test_plans_reference_catalog_dishes() {
        let names: Vec<String> = food_database().into_iter().map(|f| f.name).collect();
        for plan in meal_plans() {
            for meal in plan.meals {
                assert!(names.iter().any(|n| n == meal), "{} not in catalog", meal);
            }
        }
    }
}
