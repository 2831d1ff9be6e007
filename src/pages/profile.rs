use std::str::FromStr;

use leptos::prelude::*;

use crate::components::toast::use_toaster;
use crate::store::model::UserProfile;
use crate::store::AppStore;

/// Parse a numeric form field, keeping `current` when the input is not a number.
fn parse_or<T: FromStr>(input: &str, current: T) -> T {
    input.trim().parse().unwrap_or(current)
}

/// Parse a daily target, keeping `current` unless the input is a finite positive number.
fn parse_target(input: &str, current: f64) -> f64 {
    match input.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v,
        _ => current,
    }
}

struct Achievement {
    title: &'static str,
    description: &'static str,
    earned: bool,
}

const ACHIEVEMENTS: [Achievement; 4] = [
    Achievement {
        title: "Primera semana completada",
        description: "Registraste tus comidas durante 7 días consecutivos",
        earned: true,
    },
    Achievement {
        title: "Hidratación perfecta",
        description: "Alcanzaste tu objetivo de agua durante 5 días",
        earned: true,
    },
    Achievement {
        title: "Explorador nutricional",
        description: "Probaste 10 alimentos nuevos este mes",
        earned: false,
    },
    Achievement {
        title: "Maestro de macros",
        description: "Mantuviste el balance de macronutrientes por 14 días",
        earned: false,
    },
];

const MONTH_STATS: [(&str, &str, &str); 4] = [
    ("Días activos", "23", "+5"),
    ("Peso promedio", "62 kg", "-0.5"),
    ("Calorías promedio", "2,180", "+120"),
    ("Objetivos cumplidos", "85%", "+12%"),
];

#[component]
fn TextField(
    #[prop(into)] label: String,
    draft: RwSignal<UserProfile>,
    get: fn(&UserProfile) -> String,
    set: fn(&mut UserProfile, &str),
    #[prop(optional)] numeric: bool,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{label}</label>
            <input
                class="input"
                type=if numeric { "number" } else { "text" }
                prop:value=move || draft.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|p| set(p, &value));
                }
            />
        </div>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let store = expect_context::<AppStore>();
    let toaster = use_toaster();

    let (is_editing, set_is_editing) = signal(false);
    let draft = RwSignal::new(store.profile.get_untracked());

    let on_edit_or_save = move |_| {
        if is_editing.get() {
            store.save_profile(draft.get());
            set_is_editing.set(false);
            toaster.success("¡Perfil actualizado!", "Tus cambios han sido guardados exitosamente.");
        } else {
            draft.set(store.profile.get());
            set_is_editing.set(true);
        }
    };

    let on_cancel = move |_| {
        draft.set(store.profile.get());
        set_is_editing.set(false);
    };

    view! {
        <div class="page profile-page">
            <div class="page-hero">
                <h2>"Mi Perfil"</h2>
                <p class="page-description">
                    "Gestiona tu información personal y monitorea tu progreso nutricional"
                </p>
            </div>

            <div class="profile-layout">
                <div class="profile-main">
                    <section class="card">
                        <div class="card-header">
                            <div>
                                <h3>"Información Personal"</h3>
                                <p>"Actualiza tus datos básicos"</p>
                            </div>
                            <button class="btn btn-primary" on:click=on_edit_or_save>
                                {move || if is_editing.get() { "Guardar" } else { "Editar" }}
                            </button>
                        </div>

                        <Show
                            when=move || is_editing.get()
                            fallback=move || {
                                let p = store.profile.get();
                                view! {
                                    <dl class="profile-grid">
                                        <dt>"Nombre completo"</dt><dd>{p.name}</dd>
                                        <dt>"Email"</dt><dd>{p.email}</dd>
                                        <dt>"Edad"</dt><dd>{format!("{} años", p.age)}</dd>
                                        <dt>"Altura"</dt><dd>{format!("{} cm", p.height)}</dd>
                                        <dt>"Peso"</dt><dd>{format!("{} kg", p.weight)}</dd>
                                        <dt>"Nivel de actividad"</dt><dd>{p.activity_level}</dd>
                                        <dt>"Objetivo"</dt><dd>{p.goal}</dd>
                                    </dl>
                                }
                            }
                        >
                            <div class="profile-grid">
                                <TextField label="Nombre completo" draft=draft
                                    get=|p| p.name.clone() set=|p, v| p.name = v.to_string() />
                                <TextField label="Email" draft=draft
                                    get=|p| p.email.clone() set=|p, v| p.email = v.to_string() />
                                <TextField label="Edad" draft=draft numeric=true
                                    get=|p| p.age.to_string() set=|p, v| p.age = parse_or(v, p.age) />
                                <TextField label="Altura (cm)" draft=draft numeric=true
                                    get=|p| p.height.to_string() set=|p, v| p.height = parse_or(v, p.height) />
                                <TextField label="Peso (kg)" draft=draft numeric=true
                                    get=|p| p.weight.to_string() set=|p, v| p.weight = parse_or(v, p.weight) />
                                <TextField label="Nivel de actividad" draft=draft
                                    get=|p| p.activity_level.clone() set=|p, v| p.activity_level = v.to_string() />
                                <TextField label="Objetivo" draft=draft
                                    get=|p| p.goal.clone() set=|p, v| p.goal = v.to_string() />
                                <TextField label="Calorías objetivo" draft=draft numeric=true
                                    get=|p| p.target_calories.to_string()
                                    set=|p, v| p.target_calories = parse_target(v, p.target_calories) />
                                <TextField label="Proteínas objetivo (g)" draft=draft numeric=true
                                    get=|p| p.target_protein.to_string()
                                    set=|p, v| p.target_protein = parse_target(v, p.target_protein) />
                                <TextField label="Carbohidratos objetivo (g)" draft=draft numeric=true
                                    get=|p| p.target_carbs.to_string()
                                    set=|p, v| p.target_carbs = parse_target(v, p.target_carbs) />
                                <TextField label="Grasas objetivo (g)" draft=draft numeric=true
                                    get=|p| p.target_fat.to_string()
                                    set=|p, v| p.target_fat = parse_target(v, p.target_fat) />
                            </div>
                            <div class="form-actions">
                                <button class="btn btn-ghost" on:click=on_cancel>"Cancelar"</button>
                            </div>
                        </Show>
                    </section>

                    <section class="card">
                        <h3>"Objetivos Nutricionales"</h3>
                        <p>"Metas diarias personalizadas"</p>
                        <div class="targets-grid">
                            <div class="target target-calories">
                                <strong>{move || format!("{:.0}", store.profile.get().target_calories)}</strong>
                                <span>"Calorías"</span>
                            </div>
                            <div class="target target-protein">
                                <strong>{move || format!("{:.0}g", store.profile.get().target_protein)}</strong>
                                <span>"Proteínas"</span>
                            </div>
                            <div class="target target-carbs">
                                <strong>{move || format!("{:.0}g", store.profile.get().target_carbs)}</strong>
                                <span>"Carbohidratos"</span>
                            </div>
                            <div class="target target-fat">
                                <strong>{move || format!("{:.0}g", store.profile.get().target_fat)}</strong>
                                <span>"Grasas"</span>
                            </div>
                        </div>
                    </section>
                </div>

                <aside class="profile-aside">
                    <section class="card">
                        <h3>"Estadísticas"</h3>
                        <p>"Últimos 30 días"</p>
                        {MONTH_STATS
                            .iter()
                            .map(|(label, value, change)| {
                                let positive = change.starts_with('+');
                                view! {
                                    <div class="month-stat">
                                        <div>
                                            <p class="month-stat-label">{*label}</p>
                                            <p class="month-stat-value">{*value}</p>
                                        </div>
                                        <span class:change-up=positive class:change-down=!positive>{*change}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </section>

                    <section class="card">
                        <h3>"Logros"</h3>
                        <p>"Tus conquistas"</p>
                        {ACHIEVEMENTS
                            .iter()
                            .map(|a| view! {
                                <div class="achievement" class:achievement-locked=!a.earned>
                                    <h4>{a.title}</h4>
                                    <p>{a.description}</p>
                                </div>
                            })
                            .collect_view()}
                    </section>
                </aside>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_or_keeps_current_on_bad_input() {
        assert_eq!(parse_or("30", 28u32), 30);
        assert_eq!(parse_or(" 64.5 ", 62.0f64), 64.5);
        assert_eq!(parse_or("", 28u32), 28);
        assert_eq!(parse_or("abc", 165u32), 165);
        assert_eq!(parse_or("-1", 28u32), 28);
    }

    #[test]
    fn test_parse_target_rejects_non_positive() {
        assert_eq!(parse_target("1800", 2200.0), 1800.0);
        assert_eq!(parse_target("0", 2200.0), 2200.0);
        assert_eq!(parse_target("-10", 65.0), 65.0);
        assert_eq!(parse_target("NaN", 65.0), 65.0);
        assert_eq!(parse_target("inf", 65.0), 65.0);
    }
}
