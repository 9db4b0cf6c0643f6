use crate::domain::a002_allergen::ui::AllergenLegend;
use leptos::prelude::*;

#[component]
pub fn CartaFooter() -> impl IntoView {
    view! {
        <footer data-zone="footer" class="carta-footer">
            <p class="footer-allergen-title">"Leyenda de alérgenos"</p>
            <AllergenLegend />
            <p class="footer-note">
                "Si tiene alguna alergia o intolerancia, consulte con nuestro personal."
            </p>
        </footer>
    }
}
