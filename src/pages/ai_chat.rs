use base64::Engine;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlInputElement;

use crate::commands::{self, AiReply};
use crate::components::chat_bubble::ChatBubble;
use crate::components::toast::use_toaster;
use crate::store::model::{ChatMessage, FoodInfo};
use crate::store::AppStore;

/// Encode raw image bytes as a `data:` URL.
fn to_data_url(mime: &str, bytes: &[u8]) -> String {
    let mime = if mime.is_empty() { "image/jpeg" } else { mime };
    format!(
        "data:{};base64,{}",
        mime,
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}

/// Read the first selected file of a file input into a `data:` URL.
async fn read_selected_image(input: &HtmlInputElement) -> Result<Option<String>, String> {
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return Ok(None);
    };
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| e.as_string().unwrap_or_else(|| "No se pudo leer la imagen".to_string()))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(Some(to_data_url(&file.type_(), &bytes)))
}

#[component]
pub fn AiChatPage() -> impl IntoView {
    let store = expect_context::<AppStore>();
    let toaster = use_toaster();

    let (input_message, set_input_message) = signal(String::new());
    let (is_loading, set_is_loading) = signal(false);
    let (selected_image, set_selected_image) = signal::<Option<String>>(None);
    let (confirm_clear, set_confirm_clear) = signal(false);

    let chat_container = NodeRef::<html::Div>::new();
    let file_input = NodeRef::<html::Input>::new();
    let camera_input = NodeRef::<html::Input>::new();

    // Keep the newest message in view
    Effect::new(move |_| {
        store.chat.track();
        is_loading.track();
        if let Some(el) = chat_container.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });

    let on_image_selected = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        spawn_local(async move {
            match read_selected_image(&input).await {
                Ok(Some(url)) => set_selected_image.set(Some(url)),
                Ok(None) => {}
                Err(e) => toaster.error("Error", e),
            }
            input.set_value("");
        });
    };

    let send_message = move || {
        let text = input_message.get();
        let image = selected_image.get();
        if text.trim().is_empty() && image.is_none() {
            return;
        }

        let user_text = text.clone();
        let user_image = image.clone();
        store.push_message(move |id, ts| ChatMessage::user(id, user_text, user_image, ts));
        set_input_message.set(String::new());
        set_is_loading.set(true);

        spawn_local(async move {
            let result: Result<AiReply, String> = match image {
                Some(data_url) => {
                    let comment = Some(text.trim().to_string()).filter(|c| !c.is_empty());
                    commands::analyze_meal_photo(&data_url, comment).await
                }
                None => commands::ask_nutrition_question(text.trim()).await,
            };

            match result {
                Ok(reply) => {
                    store.push_message(move |id, ts| ChatMessage {
                        food_info: reply.food_info,
                        ..ChatMessage::ai(id, reply.content, ts)
                    });
                }
                Err(e) => {
                    leptos::logging::warn!("assistant request failed: {}", e);
                    toaster.error("Error", "No se pudo procesar tu mensaje. Intenta de nuevo.");
                }
            }
            set_is_loading.set(false);
            set_selected_image.set(None);
        });
    };

    let add_food = Callback::new(move |info: FoodInfo| {
        store.add_food_info(&info);
        toaster.success(
            "¡Platillo añadido!",
            format!("{} ha sido registrado en tu dashboard.", info.name),
        );
    });

    let clear_chat = move |_| {
        store.clear_chat();
        set_confirm_clear.set(false);
        toaster.info("Chat limpiado", "La conversación ha sido reiniciada.");
    };

    view! {
        <div class="page chat-page">
            <div class="card chat-header">
                <div>
                    <h2>"Asistente Nutricional IA"</h2>
                    <p class="page-description">"Analiza tus comidas con una foto."</p>
                </div>
                <button class="btn btn-delete" title="Limpiar chat" on:click=move |_| set_confirm_clear.set(true)>
                    "Limpiar"
                </button>
            </div>

            <Show when=move || confirm_clear.get()>
                <div class="modal-backdrop">
                    <div class="card modal">
                        <h3>"¿Limpiar el chat?"</h3>
                        <p>"Esta acción borrará permanentemente el historial de la conversación actual. ¿Estás seguro?"</p>
                        <div class="modal-actions">
                            <button class="btn btn-ghost" on:click=move |_| set_confirm_clear.set(false)>"Cancelar"</button>
                            <button class="btn btn-delete" on:click=clear_chat>"Limpiar Chat"</button>
                        </div>
                    </div>
                </div>
            </Show>

            <div class="chat-messages" node_ref=chat_container>
                <For
                    each=move || store.chat.get()
                    key=|message| message.id
                    children=move |message| view! { <ChatBubble message=message on_add_food=add_food /> }
                />
                <Show when=move || is_loading.get()>
                    <div class="chat-row">
                        <div class="chat-bubble chat-bubble-ai chat-loading">"Analizando..."</div>
                    </div>
                </Show>
            </div>

            <div class="card chat-composer">
                {move || selected_image.get().map(|src| view! {
                    <div class="image-preview">
                        <img src=src alt="Preview" />
                        <button class="btn btn-ghost btn-small" on:click=move |_| set_selected_image.set(None)>
                            "\u{2715}"
                        </button>
                    </div>
                })}
                <div class="input-row">
                    <button
                        class="btn btn-ghost"
                        title="Cámara"
                        on:click=move |_| {
                            if let Some(input) = camera_input.get() {
                                input.click();
                            }
                        }
                    >
                        "Cámara"
                    </button>
                    <button
                        class="btn btn-ghost"
                        title="Galería"
                        on:click=move |_| {
                            if let Some(input) = file_input.get() {
                                input.click();
                            }
                        }
                    >
                        "Imagen"
                    </button>
                    <input
                        type="text"
                        class="input"
                        placeholder="Añade un comentario o pregunta algo..."
                        prop:value=move || input_message.get()
                        on:input=move |ev| set_input_message.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" && !is_loading.get() {
                                send_message();
                            }
                        }
                        disabled=move || is_loading.get()
                    />
                    <button
                        class="btn btn-primary"
                        on:click=move |_| send_message()
                        disabled=move || {
                            is_loading.get()
                                || (input_message.get().trim().is_empty() && selected_image.get().is_none())
                        }
                    >
                        "Enviar"
                    </button>
                </div>
            </div>

            <input node_ref=file_input type="file" accept="image/*" class="hidden" on:change=on_image_selected />
            <input
                node_ref=camera_input
                type="file"
                accept="image/*"
                capture="environment"
                class="hidden"
                on:change=on_image_selected
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_url_uses_file_type() {
        assert_eq!(to_data_url("image/png", b"abc"), "data:image/png;base64,YWJj");
    }

    #[test]
    fn test_data_url_defaults_to_jpeg() {
        assert!(to_data_url("", b"abc").starts_with("data:image/jpeg;base64,"));
    }
}
