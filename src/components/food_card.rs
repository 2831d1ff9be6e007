use leptos::prelude::*;

use crate::catalog::FoodItem;

#[component]
pub fn FoodCard(
    food: FoodItem,
    /// Called when the user adds this dish to the dashboard
    on_add: Callback<FoodItem>,
    #[prop(optional)] is_web_result: bool,
) -> impl IntoView {
    let label = if is_web_result { "Añadir a mi registro" } else { "Añadir" };
    let item = food.clone();

    view! {
        <div class="card food-card">
            <h3 class="food-name">{food.name.clone()}</h3>
            <p class="food-image-hint">{food.image.clone()}</p>
            <div class="food-macros">
                <span class="macro macro-calories">{format!("{:.0} kcal", food.calories)}</span>
                <span class="macro macro-protein">{format!("Proteína {:.0}g", food.protein)}</span>
                <span class="macro macro-carbs">{format!("Carbos {:.0}g", food.carbs)}</span>
                <span class="macro macro-fat">{format!("Grasas {:.0}g", food.fat)}</span>
            </div>
            <button class="btn btn-primary" on:click=move |_| on_add.run(item.clone())>
                {label}
            </button>
        </div>
    }
}
