use leptos::prelude::*;

use crate::catalog::MealPlan;

#[component]
pub fn MealPlanCard(plan: MealPlan) -> impl IntoView {
    let (expanded, set_expanded) = signal(false);
    let meals = plan.meals;

    view! {
        <div class="card plan-card">
            <div class="plan-header">
                <div>
                    <h3>{plan.name}</h3>
                    <p class="plan-description">{plan.description}</p>
                </div>
                <span class="plan-difficulty">{plan.difficulty}</span>
            </div>
            <div class="plan-meta">
                <span>{format!("{} kcal/día", plan.calories)}</span>
                <span>{plan.duration}</span>
            </div>
            <button class="btn btn-link" on:click=move |_| set_expanded.update(|e| *e = !*e)>
                {move || if expanded.get() { "Ocultar Comidas" } else { "Ver Comidas" }}
            </button>
            <Show when=move || expanded.get()>
                <ul class="plan-meals">
                    {meals.iter().map(|name| view! { <li>{*name}</li> }).collect_view()}
                </ul>
            </Show>
        </div>
    }
}
