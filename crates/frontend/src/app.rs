use crate::projections::p900_carta::ui::page::CartaPage;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <CartaPage />
        </ConfigProvider>
    }
}
