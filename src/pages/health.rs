use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::commands::{self, HealthReport};
use crate::components::status_badge::{CheckStatus, StatusBadge};
use crate::store::persisted::{LocalStorage, StorageBackend};

const CHECK_COUNT: usize = 3;

/// Local storage is usable when a probe value can be written and removed.
fn local_storage_ok() -> bool {
    match LocalStorage::open() {
        Ok(storage) => {
            storage.set_item("nutriai-health-probe", "1").is_ok()
                && storage.remove_item("nutriai-health-probe").is_ok()
        }
        Err(_) => false,
    }
}

#[component]
pub fn HealthPage() -> impl IntoView {
    let (checking, set_checking) = signal(false);
    let (report, set_report) = signal::<Option<HealthReport>>(None);
    let (storage_ok, set_storage_ok) = signal(None::<bool>);
    let (error, set_error) = signal::<Option<String>>(None);

    let do_health_check = move || {
        set_checking.set(true);
        set_error.set(None);
        set_storage_ok.set(Some(local_storage_ok()));
        spawn_local(async move {
            match commands::run_health_check().await {
                Ok(r) => set_report.set(Some(r)),
                Err(e) => set_error.set(Some(format!("La comprobación falló: {}", e))),
            }
            set_checking.set(false);
        });
    };

    // Auto-run on mount
    Effect::new(move |_| {
        do_health_check();
    });

    view! {
        <div class="page health-page">
            <h2>"Estado"</h2>
            <p class="page-description">
                "Verifica que NutriAI puede acceder al asistente y guardar tus datos."
            </p>

            <button class="btn btn-primary" on:click=move |_| do_health_check() disabled=move || checking.get()>
                {move || if checking.get() { "Comprobando..." } else { "Comprobar" }}
            </button>

            {move || error.get().map(|e| view! {
                <div class="health-error">
                    <span class="status-text status-error">{e}</span>
                </div>
            })}

            {move || report.get().map(|r| {
                let storage = storage_ok.get().unwrap_or(false);
                let passed = [r.gemini_api_key_set, r.preferences_accessible, storage]
                    .iter()
                    .filter(|&&v| v)
                    .count();

                let key_detail = if r.gemini_api_key_set { "Configurada" } else { "Sin configurar" };
                let prefs_detail = if r.preferences_accessible { "Accesibles" } else { "No accesibles" };
                let storage_detail = if storage { "Disponible" } else { "No disponible" };

                let summary_class = if passed == CHECK_COUNT {
                    "summary-all-pass"
                } else if passed == 0 {
                    "summary-all-fail"
                } else {
                    "summary-partial"
                };

                view! {
                    <div class="health-results">
                        <StatusBadge label="Clave de Gemini" status=CheckStatus::from(r.gemini_api_key_set) detail=key_detail />
                        <StatusBadge label="Modelo" status=CheckStatus::Pass detail=r.gemini_model.clone() />
                        <StatusBadge label="Preferencias" status=CheckStatus::from(r.preferences_accessible) detail=prefs_detail />
                        <StatusBadge label="Almacenamiento local" status=CheckStatus::from(storage) detail=storage_detail />

                        <div class=format!("health-summary {}", summary_class)>
                            {format!("{} de {} comprobaciones correctas", passed, CHECK_COUNT)}
                        </div>
                    </div>
                }
            })}
        </div>
    }
}
