use contracts::domain::a002_allergen::AllergenTag;
use leptos::prelude::*;

/// Все 14 аллергенов в порядке таблицы
#[component]
pub fn AllergenLegend() -> impl IntoView {
    view! {
        <div class="footer-allergen-list">
            {AllergenTag::ALL
                .iter()
                .map(|tag| {
                    view! {
                        <span class="footer-allergen-item">
                            {format!("{} {}", tag.icon(), tag.label())}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}
