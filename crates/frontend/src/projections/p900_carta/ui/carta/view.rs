use super::view_model::CartaViewModel;
use crate::layout::footer::CartaFooter;
use crate::layout::header::CartaHeader;
use crate::projections::p900_carta::ui::category_section::CategorySection;
use crate::projections::p900_carta::ui::filter_nav::FilterNav;
use contracts::domain::a001_dish::aggregate::DishRecord;
use contracts::projections::p900_carta::dto::DEFAULT_RESTAURANT_NAME;
use contracts::projections::p900_carta::FilterState;
use leptos::prelude::*;

/// Карта ресторана: шапка, фильтр по категориям, разделы с блюдами, легенда аллергенов.
///
/// Название и логотип выводятся как есть, без проверки.
#[component]
pub fn CartaRestaurante(
    #[prop(default = Vec::new())] menu_data: Vec<DishRecord>,
    #[prop(into, default = DEFAULT_RESTAURANT_NAME.to_string())] restaurant_name: String,
    #[prop(default = None)] logo_url: Option<String>,
) -> impl IntoView {
    let vm = CartaViewModel::new(menu_data);

    let filter_nav = vm.show_filter_bar().then(|| {
        let on_select = Callback::new(move |state: FilterState| vm.select(state));
        view! {
            <FilterNav
                options=vm.filter_options()
                active=vm.filter
                on_select=on_select
            />
        }
    });

    view! {
        <div class="carta-root">
            <CartaHeader title=restaurant_name logo_url=logo_url />
            {filter_nav}
            <main class="carta-main">
                // Разделы по ключу: карточки оставшейся категории не пересоздаются
                <For
                    each=move || vm.sections()
                    key=|category| category.label.clone()
                    children=move |category| {
                        view! { <CategorySection category=category failures=vm.image_failures /> }
                    }
                />
            </main>
            <CartaFooter />
        </div>
    }
}
