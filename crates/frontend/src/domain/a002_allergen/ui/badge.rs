use crate::shared::components::ui::Badge;
use contracts::domain::a002_allergen::AllergenTag;
use leptos::prelude::*;

/// Icon + label of one allergen on a dish card.
#[component]
pub fn AllergenBadge(tag: AllergenTag) -> impl IntoView {
    view! {
        <Badge variant="accent" class="allergen-badge" title=tag.label()>
            {tag.icon()}
            <span class="allergen-label">{tag.label()}</span>
        </Badge>
    }
}
