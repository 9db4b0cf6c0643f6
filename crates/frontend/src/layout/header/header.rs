use leptos::prelude::*;

pub const TAGLINE: &str = "Carta de temporada";

#[component]
pub fn CartaHeader(title: String, logo_url: Option<String>) -> impl IntoView {
    view! {
        <header data-zone="header" class="carta-header">
            <div class="header-inner">
                {logo_url.map(|src| view! { <img src=src alt="logo" class="header-logo" /> })}
                <h1 class="header-title">{title}</h1>
                <p class="header-tagline">{TAGLINE}</p>
            </div>
        </header>
    }
}
