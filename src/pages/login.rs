use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::app::AuthContext;
use crate::components::toast::use_toaster;

const DEMO_USER: &str = "Jans";
const DEMO_PASSWORD: &str = "123";

/// Local demo gate. There is no account backend.
pub fn check_credentials(username: &str, password: &str) -> bool {
    username == DEMO_USER && password == DEMO_PASSWORD
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoginTab {
    Login,
    Register,
    Reset,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let toaster = use_toaster();

    let (tab, set_tab) = signal(LoginTab::Login);
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let user = username.get();
        if check_credentials(&user, &password.get()) {
            toaster.success(
                format!("¡Bienvenido de vuelta, {}!", user),
                "Iniciando sesión en tu paraíso nutricional.",
            );
            auth.set_authenticated.set(true);
        } else {
            toaster.error(
                "Error de autenticación",
                "Usuario o contraseña incorrectos. Por favor, inténtalo de nuevo.",
            );
        }
    };

    let not_implemented = move |_| {
        toaster.info(
            "¡Función en construcción!",
            "Esta característica aún no está implementada.",
        );
    };

    let tab_button = move |value: LoginTab, label: &'static str| {
        view! {
            <button
                class="tab"
                class:tab-active=move || tab.get() == value
                on:click=move |_| set_tab.set(value)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="login-page">
            <div class="card login-card">
                <div class="login-header">
                    <h1>"Bienvenido a NutriAI"</h1>
                    <p>"Tu asistente nutricional inteligente"</p>
                </div>

                <div class="tab-list">
                    {tab_button(LoginTab::Login, "Iniciar Sesión")}
                    {tab_button(LoginTab::Register, "Registrarse")}
                    {tab_button(LoginTab::Reset, "Reestablecer")}
                </div>

                {move || match tab.get() {
                    LoginTab::Login => view! {
                        <form class="login-form" on:submit=on_submit>
                            <div class="form-group">
                                <label for="username">"Usuario"</label>
                                <input
                                    id="username"
                                    type="text"
                                    class="input"
                                    placeholder="Tu nombre de usuario"
                                    required
                                    prop:value=move || username.get()
                                    on:input=move |ev| set_username.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="form-group">
                                <label for="password">"Contraseña"</label>
                                <input
                                    id="password"
                                    type="password"
                                    class="input"
                                    required
                                    prop:value=move || password.get()
                                    on:input=move |ev| set_password.set(event_target_value(&ev))
                                />
                            </div>
                            <button type="submit" class="btn btn-primary btn-block">"Acceder"</button>
                        </form>
                    }.into_any(),
                    LoginTab::Register => view! {
                        <div class="login-placeholder">
                            <p>"Formulario de registro no implementado."</p>
                            <button class="btn btn-primary btn-block" on:click=not_implemented>
                                "Solicitar Registro"
                            </button>
                        </div>
                    }.into_any(),
                    LoginTab::Reset => view! {
                        <div class="login-placeholder">
                            <p>"Introduce tu email para reestablecer la contraseña."</p>
                            <input id="reset-email" type="email" class="input" placeholder="tu@email.com" />
                            <button class="btn btn-primary btn-block" on:click=not_implemented>
                                "Enviar Enlace"
                            </button>
                        </div>
                    }.into_any(),
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_credentials() {
        assert!(check_credentials("Jans", "123"));
        assert!(!check_credentials("jans", "123"));
        assert!(!check_credentials("Jans", "1234"));
        assert!(!check_credentials("", ""));
    }
}
