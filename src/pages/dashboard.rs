use leptos::prelude::*;

use crate::components::stat_card::StatCard;
use crate::components::toast::use_toaster;
use crate::store::model::MealSlot;
use crate::store::AppStore;

const WATER_TARGET: u32 = 8;
const WATER_START: u32 = 6;

/// One more glass, never past the target.
fn add_glass(consumed: u32, target: u32) -> u32 {
    (consumed + 1).min(target)
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = expect_context::<AppStore>();
    let toaster = use_toaster();
    let (water, set_water) = signal(WATER_START);
    let (meals_open, set_meals_open) = signal(true);

    let calories = Signal::derive(move || store.stats.get().calories);
    let protein = Signal::derive(move || store.stats.get().protein);
    let carbs = Signal::derive(move || store.stats.get().carbs);
    let fat = Signal::derive(move || store.stats.get().fat);

    let on_add_water = move |_| {
        set_water.update(|w| *w = add_glass(*w, WATER_TARGET));
        toaster.success(
            "¡Hidratación registrada!",
            "Has añadido 1 vaso de agua a tu registro diario.",
        );
    };

    let recent_meals = move || {
        let log = store.meals.get();
        MealSlot::ALL
            .into_iter()
            .flat_map(|slot| log.slot(slot).iter().cloned().map(move |meal| (slot, meal)).collect::<Vec<_>>())
            .collect::<Vec<_>>()
    };

    view! {
        <div class="page dashboard-page">
            <div class="page-hero">
                <h2>{move || format!("¡Bienvenido, {}!", store.profile.get().name)}</h2>
                <p class="page-description">
                    "Monitorea tu progreso nutricional y mantente en el camino hacia tus objetivos."
                </p>
            </div>

            <div class="stat-grid">
                <StatCard title="Calorías" unit=" kcal" accent="accent-calories" entry=calories />
                <StatCard title="Proteínas" unit="g" accent="accent-protein" entry=protein />
                <StatCard title="Carbohidratos" unit="g" accent="accent-carbs" entry=carbs />
                <StatCard title="Grasas" unit="g" accent="accent-fat" entry=fat />

                <div class="card water-card">
                    <div class="stat-card-header">
                        <h3>"Hidratación"</h3>
                        <button class="btn btn-primary btn-small" on:click=on_add_water>"+ Añadir"</button>
                    </div>
                    <div class="water-glasses">
                        {(0..WATER_TARGET)
                            .map(|i| view! { <span class="glass" class:glass-full=move || i < water.get()></span> })
                            .collect_view()}
                    </div>
                    <p class="water-summary">
                        {move || format!("{} de {} vasos", water.get(), WATER_TARGET)}
                    </p>
                </div>

                <div class="card achievement-card">
                    <span class="achievement-label">"¡Logro!"</span>
                    <h3>"Racha de 7 días"</h3>
                    <p>"¡Felicidades! Has mantenido tus objetivos nutricionales durante una semana."</p>
                </div>
            </div>

            <section class="card recent-meals">
                <button class="collapsible-trigger" on:click=move |_| set_meals_open.update(|o| *o = !*o)>
                    <h3>"Comidas Recientes"</h3>
                    <span>{move || if meals_open.get() { "\u{25B2}" } else { "\u{25BC}" }}</span>
                </button>
                <Show when=move || meals_open.get()>
                    <ul class="meal-list">
                        {move || {
                            recent_meals()
                                .into_iter()
                                .map(|(slot, meal)| {
                                    let calories = meal.calories;
                                    let name = meal.name.clone();
                                    view! {
                                        <li class="meal-row">
                                            <div>
                                                <h4>{meal.name}</h4>
                                                <p class="meal-slot">{slot.label()}</p>
                                            </div>
                                            <div class="meal-actions">
                                                <span class="meal-calories">{format!("{:.0} kcal", calories)}</span>
                                                <button
                                                    class="btn btn-round"
                                                    title=format!("Sumar {}", name)
                                                    on:click=move |_| {
                                                        store.add_calories(calories);
                                                        toaster.success(
                                                            "¡Calorías añadidas!",
                                                            format!("Has sumado {:.0} kcal a tu registro diario.", calories),
                                                        );
                                                    }
                                                >
                                                    "+"
                                                </button>
                                            </div>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </Show>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_glass_caps_at_target() {
        assert_eq!(add_glass(6, 8), 7);
        assert_eq!(add_glass(7, 8), 8);
        assert_eq!(add_glass(8, 8), 8);
    }
}
