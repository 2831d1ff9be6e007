use leptos::prelude::*;

use crate::store::model::{ChatMessage, ChatRole, FoodInfo};

/// Render assistant text as HTML: escape it, turn `**x**` into `<strong>` and
/// newlines into `<br />`.
pub fn render_chat_markdown(text: &str) -> String {
    let escaped = text
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;");

    let mut out = String::with_capacity(escaped.len());
    let segments: Vec<&str> = escaped.split("**").collect();
    let last = segments.len() - 1;
    for (i, segment) in segments.iter().enumerate() {
        // Odd segments sit between a pair of markers; an unmatched trailing marker stays literal.
        if i % 2 == 1 && i < last {
            out.push_str("<strong>");
            out.push_str(segment);
            out.push_str("</strong>");
        } else {
            if i % 2 == 1 {
                out.push_str("**");
            }
            out.push_str(segment);
        }
    }
    out.replace('\n', "<br />")
}

#[component]
pub fn ChatBubble(
    message: ChatMessage,
    /// Called with the extracted dish when the user accepts it
    on_add_food: Callback<FoodInfo>,
) -> impl IntoView {
    let is_user = message.role == ChatRole::User;
    let html = render_chat_markdown(&message.content);

    view! {
        <div class="chat-row" class:chat-row-user=is_user>
            <div class="chat-bubble" class:chat-bubble-user=is_user class:chat-bubble-ai=!is_user>
                {message.image.clone().map(|src| view! {
                    <img src=src class="chat-image" alt="Uploaded food" />
                })}
                <div class="chat-content" inner_html=html></div>
                {message.food_info.clone().map(|info| {
                    let calories = info.calories;
                    view! {
                        <div class="chat-food-action">
                            <p>"¿Añadir al dashboard?"</p>
                            <button class="btn btn-success" on:click=move |_| on_add_food.run(info.clone())>
                                {format!("Sí, añadir ({} kcal)", calories)}
                            </button>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
