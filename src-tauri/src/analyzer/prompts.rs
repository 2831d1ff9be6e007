//! Spanish prompts for the nutrition assistant.

/// Template the photo analysis must follow. `food_info::extract` reads the
/// `Platillo` and `Calorías Estimadas` labels back out.
pub fn build_photo_prompt(comment: Option<&str>) -> String {
    let mut prompt = String::from(
        "Analiza esta imagen de comida. Proporciona:
**Platillo:** [Nombre del platillo]
**Calorías Estimadas:** [Número] kcal
**Análisis Nutricional:**
*   **Proteínas:** [Descripción]
*   **Carbohidratos:** [Descripción]
*   **Grasas:** [Descripción]
**Sugerencias:** [Consejos para mejorar o complementar]
También, pregunta si el usuario desea añadirlo a su registro de comidas. Responde en español, usando markdown para negritas en los títulos.",
    );
    if let Some(comment) = comment.map(str::trim).filter(|c| !c.is_empty()) {
        prompt.push_str(&format!("\n\nComentario del usuario: \"{}\"", comment));
    }
    prompt
}

pub fn build_question_prompt(question: &str) -> String {
    format!(
        "Responde a la siguiente pregunta sobre nutrición de manera amigable y experta. \
         Usa markdown para negritas en los títulos. Pregunta: \"{}\"",
        question
    )
}

/// Asks for at most three dishes as a JSON array.
pub fn build_food_search_prompt(query: &str) -> String {
    format!(
        "Busca información nutricional para \"{}\". Devuelve una lista de hasta 3 platillos en formato JSON. \
         Cada objeto debe tener: id (único), name (string), calories (number), protein (number), \
         carbs (number), fat (number), y image (una descripción breve para un generador de imágenes). \
         Ejemplo: [{{\"id\": 1, \"name\": \"Pizza\", ...}}]",
        query
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photo_prompt_has_extractable_labels() {
        let prompt = build_photo_prompt(None);
        assert!(prompt.contains("**Platillo:**"));
        assert!(prompt.contains("**Calorías Estimadas:**"));
        assert!(!prompt.contains("Comentario del usuario"));
    }

    #[test]
    fn test_photo_prompt_appends_comment() {
        let prompt = build_photo_prompt(Some("  sin gluten "));
        assert!(prompt.ends_with("Comentario del usuario: \"sin gluten\""));
        assert_eq!(build_photo_prompt(Some("   ")), build_photo_prompt(None));
    }

    #[test]
    fn test_question_prompt_wraps_question() {
        let prompt = build_question_prompt("¿Cuánta proteína necesito?");
        assert!(prompt.contains("Pregunta: \"¿Cuánta proteína necesito?\""));
    }

    #[test]
    fn test_search_prompt_names_query_and_limit() {
        let prompt = build_food_search_prompt("pizza margarita");
        assert!(prompt.contains("\"pizza margarita\""));
        assert!(prompt.contains("hasta 3 platillos"));
        assert!(prompt.contains("[{\"id\": 1"));
    }
}
