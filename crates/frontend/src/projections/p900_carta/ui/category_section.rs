use crate::domain::a001_dish::ui::card::{DishCard, ImageFailures};
use contracts::projections::p900_carta::Category;
use leptos::prelude::*;

#[component]
pub fn CategorySection(category: Category, failures: ImageFailures) -> impl IntoView {
    view! {
        <section class="category-section">
            <h2 class="category-title">
                <span>{category.label}</span>
            </h2>
            <div class="dishes-grid">
                {category
                    .dishes
                    .into_iter()
                    .map(|dish| view! { <DishCard dish=dish failures=failures /> })
                    .collect_view()}
            </div>
        </section>
    }
}
