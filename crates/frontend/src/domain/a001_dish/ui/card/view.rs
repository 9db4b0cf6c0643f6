use super::view_model::{DishCardViewModel, ImageFailures, ImageSlot, PLACEHOLDER_GLYPH};
use crate::domain::a002_allergen::ui::AllergenBadge;
use contracts::domain::a001_dish::aggregate::DishRecord;
use leptos::prelude::*;

#[component]
pub fn DishCard(dish: DishRecord, failures: ImageFailures) -> impl IntoView {
    let vm = DishCardViewModel::new(dish, failures);
    let image_slot = vm.image_slot();
    let on_image_error = vm.image_error_handler();

    let name = vm.dish.name.clone();
    let price = vm.dish.price.clone();
    let description = vm.dish.description().map(str::to_string);
    let alt = name.clone();

    let image = move || match image_slot() {
        ImageSlot::Photo(src) => {
            let on_image_error = on_image_error.clone();
            view! {
                <div class="dish-img-wrap">
                    <img
                        src=src
                        alt=alt.clone()
                        class="dish-img"
                        on:error=move |_| on_image_error()
                    />
                </div>
            }
            .into_any()
        }
        ImageSlot::Placeholder => view! {
            <div class="dish-img-placeholder">
                <span>{PLACEHOLDER_GLYPH}</span>
            </div>
        }
        .into_any(),
    };

    // Порядок извлечения, без сортировки и без удаления повторов
    let allergens = (!vm.allergens.is_empty()).then(|| {
        view! {
            <div class="dish-allergens">
                {vm
                    .allergens
                    .iter()
                    .map(|tag| view! { <AllergenBadge tag=*tag /> })
                    .collect_view()}
            </div>
        }
    });

    view! {
        <article class="dish-card">
            {image}
            <div class="dish-body">
                <div class="dish-header">
                    <h3 class="dish-name">{name}</h3>
                    <span class="dish-price">{price}</span>
                </div>
                {description.map(|text| view! { <p class="dish-desc">{text}</p> })}
                {allergens}
            </div>
        </article>
    }
}
