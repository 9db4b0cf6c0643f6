use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "accent" or "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Tooltip, also used as the accessible name
    #[prop(optional, into)]
    title: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "accent" => "badge--accent",
        _ => "badge--neutral",
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span
            class=move || format!("badge {} {}", variant_class(), additional_class())
            title=move || title.get()
            aria-label=move || title.get()
        >
            {children()}
        </span>
    }
}
