use leptos::prelude::*;

use crate::store::model::StatEntry;

/// Progress card for one nutrient.
#[component]
pub fn StatCard(
    #[prop(into)] title: String,
    /// Unit suffix, e.g. " kcal" or "g"
    #[prop(into)]
    unit: String,
    /// Extra class for the accent colour
    #[prop(into)]
    accent: String,
    entry: Signal<StatEntry>,
) -> impl IntoView {
    let unit_target = unit.clone();
    view! {
        <div class=format!("card stat-card {}", accent)>
            <div class="stat-card-header">
                <h3>{title}</h3>
                <span class="stat-percent">{move || format!("{:.0}%", entry.get().percent())}</span>
            </div>
            <div class="stat-row">
                <span class="stat-label">"Actual"</span>
                <span class="stat-value">{move || format!("{:.0}{}", entry.get().consumed, unit)}</span>
            </div>
            <div class="stat-row">
                <span class="stat-label">"Objetivo"</span>
                <span class="stat-value">{move || format!("{:.0}{}", entry.get().target, unit_target)}</span>
            </div>
            <div class="progress-track">
                <div
                    class="progress-bar"
                    style:width=move || format!("{:.1}%", entry.get().percent().min(100.0))
                ></div>
            </div>
        </div>
    }
}
