use leptos::prelude::*;

use crate::app::AuthContext;
use crate::store::model::Theme;
use crate::store::AppStore;

#[component]
pub fn Sidebar() -> impl IntoView {
    let store = expect_context::<AppStore>();
    let auth = expect_context::<AuthContext>();

    view! {
        <nav class="sidebar">
            <div class="sidebar-header">
                <h1 class="sidebar-title">"NutriAI"</h1>
                <p class="sidebar-subtitle">"Tu Asistente Nutricional"</p>
            </div>
            <ul class="nav-list">
                <li class="nav-item">
                    <a href="/" class="nav-link">"Dashboard"</a>
                </li>
                <li class="nav-item">
                    <a href="/nutrition" class="nav-link">"Nutrición"</a>
                </li>
                <li class="nav-item">
                    <a href="/chat" class="nav-link">"IA Nutricional"</a>
                </li>
                <li class="nav-item">
                    <a href="/profile" class="nav-link">"Perfil"</a>
                </li>
                <li class="nav-item">
                    <a href="/settings" class="nav-link">"Ajustes"</a>
                </li>
                <li class="nav-item">
                    <a href="/health" class="nav-link">"Estado"</a>
                </li>
            </ul>
            <div class="sidebar-footer">
                <button class="btn btn-ghost" on:click=move |_| store.toggle_theme()>
                    {move || match store.theme.get() {
                        Theme::Light => "Modo oscuro",
                        Theme::Dark => "Modo claro",
                    }}
                </button>
                <button class="btn btn-ghost" on:click=move |_| auth.set_authenticated.set(false)>
                    "Cerrar sesión"
                </button>
            </div>
        </nav>
    }
}
