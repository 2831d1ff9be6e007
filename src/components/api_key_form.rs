use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::commands;

/// Keyring service identifier for the Gemini credential.
pub const GEMINI_SERVICE: &str = "nutriai-gemini-api";

#[component]
pub fn ApiKeyForm(
    /// Display name, e.g. "Clave de API de Gemini"
    #[prop(into)]
    service_name: String,
    /// Keyring service identifier
    #[prop(into)]
    service_id: String,
    #[prop(into)] placeholder: String,
    /// Set to the stored state whenever it changes
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
) -> impl IntoView {
    let (key_value, set_key_value) = signal(String::new());
    let (is_saved, set_is_saved) = signal(false);
    let (is_loading, set_is_loading) = signal(false);
    let (error_message, set_error_message) = signal::<Option<String>>(None);

    let notify = move |saved: bool| {
        set_is_saved.set(saved);
        if let Some(cb) = on_change {
            cb.run(saved);
        }
    };

    // Check for an existing key on mount
    let sid_check = service_id.clone();
    Effect::new(move |_| {
        let sid = sid_check.clone();
        spawn_local(async move {
            match commands::get_api_key(&sid).await {
                Ok(found) => notify(found.is_some()),
                Err(e) => set_error_message.set(Some(format!("No se pudo comprobar la clave: {}", e))),
            }
        });
    });

    let sid_save = service_id.clone();
    let save_key = move |_| {
        let sid = sid_save.clone();
        let key = key_value.get().trim().to_string();
        if key.is_empty() {
            set_error_message.set(Some("Introduce una clave de API".to_string()));
            return;
        }
        set_is_loading.set(true);
        set_error_message.set(None);
        spawn_local(async move {
            match commands::set_api_key(&sid, &key).await {
                Ok(()) => {
                    notify(true);
                    set_key_value.set(String::new());
                }
                Err(e) => set_error_message.set(Some(format!("No se pudo guardar: {}", e))),
            }
            set_is_loading.set(false);
        });
    };

    let sid_delete = service_id;
    let delete_key = move |_| {
        let sid = sid_delete.clone();
        set_is_loading.set(true);
        set_error_message.set(None);
        spawn_local(async move {
            match commands::delete_api_key(&sid).await {
                Ok(()) => notify(false),
                Err(e) => set_error_message.set(Some(format!("No se pudo eliminar: {}", e))),
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="form-group api-key-form">
            <label>{service_name}</label>
            <div class="input-row">
                <input
                    type="password"
                    placeholder=placeholder
                    class="input input-password"
                    prop:value=move || key_value.get()
                    on:input=move |ev| set_key_value.set(event_target_value(&ev))
                    disabled=move || is_loading.get()
                />
                <button class="btn btn-save" on:click=save_key disabled=move || is_loading.get()>
                    {move || if is_loading.get() { "Guardando..." } else { "Guardar" }}
                </button>
                <button
                    class="btn btn-delete"
                    on:click=delete_key
                    disabled=move || is_loading.get()
                    style:display=move || if is_saved.get() { "inline-block" } else { "none" }
                >
                    "Eliminar"
                </button>
            </div>
            <div class="key-status-row">
                {move || {
                    if let Some(err) = error_message.get() {
                        view! { <span class="status-text status-error">{err}</span> }.into_any()
                    } else if is_saved.get() {
                        view! { <span class="status-text status-saved">"Guardada en el llavero"</span> }.into_any()
                    } else {
                        view! { <span class="status-text status-not-set">"Sin configurar"</span> }.into_any()
                    }
                }}
            </div>
        </div>
    }
}
