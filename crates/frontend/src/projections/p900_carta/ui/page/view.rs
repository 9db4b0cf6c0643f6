use super::view_model::CartaPageViewModel;
use crate::projections::p900_carta::ui::carta::CartaRestaurante;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn CartaPage() -> impl IntoView {
    let vm = CartaPageViewModel::new();
    vm.load();

    move || {
        if vm.is_loading() {
            return view! {
                <div class="carta-loading">
                    <Spinner />
                    <span>"Cargando carta..."</span>
                </div>
            }
            .into_any();
        }

        if let Some(err) = vm.error.get() {
            return view! {
                <div class="carta-error">
                    <MessageBar intent=MessageBarIntent::Error>
                        <span>{err}</span>
                    </MessageBar>
                </div>
            }
            .into_any();
        }

        let menu = vm.menu.get().unwrap_or_default();
        view! {
            <CartaRestaurante
                menu_data=menu.dishes
                restaurant_name=menu.restaurant_name
                logo_url=menu.logo_url
            />
        }
        .into_any()
    }
}
