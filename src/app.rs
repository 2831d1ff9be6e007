use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::sidebar::Sidebar;
use crate::components::toast::{ToastHost, Toaster};
use crate::pages::ai_chat::AiChatPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::health::HealthPage;
use crate::pages::login::LoginPage;
use crate::pages::nutrition::NutritionPage;
use crate::pages::profile::ProfilePage;
use crate::pages::settings::SettingsPage;
use crate::store::AppStore;
use crate::theme::apply_theme;

/// Session flag. Not persisted, so every launch starts at the login screen.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub authenticated: ReadSignal<bool>,
    pub set_authenticated: WriteSignal<bool>,
}

#[component]
pub fn App() -> impl IntoView {
    let store = AppStore::new();
    provide_context(store);
    provide_context(Toaster::new());

    let (authenticated, set_authenticated) = signal(false);
    provide_context(AuthContext {
        authenticated,
        set_authenticated,
    });

    // Apply theme to DOM whenever it changes
    Effect::new(move |_| {
        apply_theme(store.theme.get());
    });

    view! {
        <Show when=move || authenticated.get() fallback=|| view! { <LoginPage /> }>
            <Router>
                <div class="app-layout">
                    <Sidebar />
                    <main class="content">
                        <Routes fallback=|| view! { <p>"Página no encontrada"</p> }>
                            <Route path=path!("/") view=DashboardPage />
                            <Route path=path!("/nutrition") view=NutritionPage />
                            <Route path=path!("/chat") view=AiChatPage />
                            <Route path=path!("/profile") view=ProfilePage />
                            <Route path=path!("/settings") view=SettingsPage />
                            <Route path=path!("/health") view=HealthPage />
                        </Routes>
                    </main>
                </div>
            </Router>
        </Show>
        <ToastHost />
    }
}
