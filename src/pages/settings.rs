use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::commands::{self, ModelInfo};
use crate::components::api_key_form::{ApiKeyForm, GEMINI_SERVICE};

/// Preferences key for the selected Gemini model.
pub const MODEL_PREFERENCE: &str = "gemini_model";

#[component]
pub fn SettingsPage() -> impl IntoView {
    let (models, set_models) = signal::<Vec<ModelInfo>>(Vec::new());
    let (selected_model, set_selected_model) = signal(String::new());
    let (model_status, set_model_status) = signal::<Option<String>>(None);

    // Load the model list and the saved choice on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::list_models().await {
                Ok(list) => {
                    if selected_model.get_untracked().is_empty() {
                        if let Some(first) = list.first() {
                            set_selected_model.set(first.id.clone());
                        }
                    }
                    set_models.set(list);
                }
                Err(e) => set_model_status.set(Some(format!("No se pudieron cargar los modelos: {}", e))),
            }
            match commands::get_preference(MODEL_PREFERENCE).await {
                Ok(Some(model)) => set_selected_model.set(model),
                Ok(None) => {}
                Err(e) => set_model_status.set(Some(format!("No se pudo leer la preferencia: {}", e))),
            }
        });
    });

    let save_model = move |_| {
        let model = selected_model.get();
        spawn_local(async move {
            match commands::set_preference(MODEL_PREFERENCE, &model).await {
                Ok(()) => set_model_status.set(Some("Modelo guardado".to_string())),
                Err(e) => set_model_status.set(Some(format!("No se pudo guardar: {}", e))),
            }
        });
    };

    view! {
        <div class="page settings-page">
            <h2>"Ajustes"</h2>

            <section class="settings-section">
                <h3>"Clave de API"</h3>
                <p class="section-description">
                    "La clave se guarda en el llavero del sistema y nunca sale del backend."
                </p>
                <ApiKeyForm
                    service_name="Clave de API de Gemini"
                    service_id=GEMINI_SERVICE
                    placeholder="AIza..."
                />
            </section>

            <section class="settings-section">
                <h3>"Modelo"</h3>
                <p class="section-description">"Modelo de Gemini usado para el análisis y las búsquedas."</p>
                <div class="form-group">
                    <label for="gemini-model">"Modelo de Gemini"</label>
                    <div class="input-row">
                        <select
                            id="gemini-model"
                            class="input"
                            prop:value=move || selected_model.get()
                            on:change=move |ev| set_selected_model.set(event_target_value(&ev))
                        >
                            <For
                                each=move || models.get()
                                key=|m| m.id.clone()
                                children=move |m| {
                                    let id = m.id.clone();
                                    view! {
                                        <option value=m.id selected=move || selected_model.get() == id>
                                            {m.name}
                                        </option>
                                    }
                                }
                            />
                        </select>
                        <button class="btn btn-save" on:click=save_model>"Guardar"</button>
                    </div>
                    <Show when=move || model_status.get().is_some()>
                        <span class="status-text">{move || model_status.get().unwrap_or_default()}</span>
                    </Show>
                </div>
            </section>
        </div>
    }
}
