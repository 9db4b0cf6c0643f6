use contracts::projections::p900_carta::{FilterOption, FilterState};
use leptos::prelude::*;

/// Category pills: "Todos" plus one per category.
#[component]
pub fn FilterNav(
    options: Vec<FilterOption>,
    #[prop(into)] active: Signal<FilterState>,
    on_select: Callback<FilterState>,
) -> impl IntoView {
    view! {
        <nav class="filter-nav" aria-label="Categorías">
            {options
                .into_iter()
                .map(|option| {
                    let label = option.label.clone();
                    let state = option.state.clone();
                    view! {
                        <button
                            class="filter-pill"
                            class:active=move || active.with(|current| current.is_selected(&option))
                            on:click=move |_| on_select.run(state.clone())
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
