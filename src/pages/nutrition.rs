use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::catalog::{self, FoodItem};
use crate::commands;
use crate::components::food_card::FoodCard;
use crate::components::meal_plan_card::MealPlanCard;
use crate::components::toast::use_toaster;
use crate::store::model::MealSlot;
use crate::store::AppStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NutritionTab {
    Foods,
    Plans,
    Tracker,
}

/// Enter starts a web search unless one is already in flight.
fn submits_search(key: &str, searching: bool) -> bool {
    key == "Enter" && !searching
}

#[component]
pub fn NutritionPage() -> impl IntoView {
    let store = expect_context::<AppStore>();
    let toaster = use_toaster();

    let foods = StoredValue::new(catalog::food_database());
    let plans = catalog::meal_plans();

    let (tab, set_tab) = signal(NutritionTab::Foods);
    let (search_term, set_search_term) = signal(String::new());
    let (is_searching, set_is_searching) = signal(false);
    let (web_results, set_web_results) = signal::<Vec<FoodItem>>(Vec::new());

    let add_food = Callback::new(move |food: FoodItem| {
        store.add_meal(food.to_meal(), MealSlot::Lunch);
        toaster.success(
            "¡Alimento añadido!",
            format!("{} ha sido agregado a tu dashboard.", food.name),
        );
    });

    let do_web_search = move || {
        if is_searching.get_untracked() {
            return;
        }
        let query = search_term.get();
        if query.trim().is_empty() {
            toaster.error("Búsqueda vacía", "Escribe algo para buscar en la web.");
            return;
        }
        set_is_searching.set(true);
        set_web_results.set(Vec::new());
        spawn_local(async move {
            match commands::search_foods_web(query.trim()).await {
                Ok(results) => set_web_results.set(results),
                Err(e) => {
                    leptos::logging::warn!("web food search failed: {}", e);
                    toaster.error(
                        "Error de búsqueda",
                        "No se pudieron obtener resultados. Intenta de nuevo.",
                    );
                }
            }
            set_is_searching.set(false);
        });
    };

    let not_implemented = move |_| {
        toaster.info("¡Función en construcción!", "Esta característica aún no está disponible.");
    };

    let tab_button = move |value: NutritionTab, label: &'static str| {
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
        <div class="page nutrition-page">
            <div class="page-hero">
                <h2>"Centro Nutricional"</h2>
                <p class="page-description">"Descubre alimentos, crea planes y alcanza tus objetivos."</p>
            </div>

            <div class="tab-list">
                {tab_button(NutritionTab::Foods, "Alimentos")}
                {tab_button(NutritionTab::Plans, "Planes")}
                {tab_button(NutritionTab::Tracker, "Seguimiento")}
            </div>

            <Show when=move || tab.get() == NutritionTab::Foods>
                <div class="card search-bar">
                    <input
                        type="text"
                        class="input"
                        placeholder="Buscar alimentos..."
                        prop:value=move || search_term.get()
                        on:input=move |ev| set_search_term.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if submits_search(&ev.key(), is_searching.get_untracked()) {
                                do_web_search();
                            }
                        }
                    />
                    <button
                        class="btn btn-outline"
                        on:click=move |_| do_web_search()
                        disabled=move || is_searching.get()
                    >
                        {move || if is_searching.get() { "Buscando..." } else { "Buscar en la Web" }}
                    </button>
                </div>

                <Show when=move || !web_results.get().is_empty()>
                    <h3>"Resultados de la Web"</h3>
                    <div class="food-grid">
                        <For
                            each=move || web_results.get()
                            key=|food| food.id
                            children=move |food| view! { <FoodCard food=food on_add=add_food is_web_result=true /> }
                        />
                    </div>
                </Show>

                <h3 class="section-divider">"En nuestra base de datos"</h3>
                <div class="food-grid">
                    {move || {
                        let term = search_term.get();
                        foods.with_value(|all| {
                            catalog::filter_foods(all, &term)
                                .into_iter()
                                .cloned()
                                .map(|food| view! { <FoodCard food=food on_add=add_food /> })
                                .collect_view()
                        })
                    }}
                </div>
            </Show>

            <Show when=move || tab.get() == NutritionTab::Plans>
                <div class="plans-toolbar">
                    <button class="btn btn-outline" on:click=not_implemented>"Actualizar Planes"</button>
                </div>
                <div class="plan-grid">
                    {plans.clone().into_iter().map(|plan| view! { <MealPlanCard plan=plan /> }).collect_view()}
                </div>
            </Show>

            <Show when=move || tab.get() == NutritionTab::Tracker>
                <div class="card tracker-placeholder">
                    <h3>"Seguimiento Avanzado"</h3>
                    <p>"Monitorea tu progreso con gráficos detallados y análisis personalizados."</p>
                    <button class="btn btn-primary" on:click=not_implemented>"Ver Análisis Completo"</button>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_submits_only_when_idle() {
        assert!(submits_search("Enter", false));
        assert!(!submits_search("Enter", true));
        assert!(!submits_search("a", false));
    }
}
