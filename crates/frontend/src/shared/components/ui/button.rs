use leptos::prelude::*;

/// Button component with variants (primary, ghost)
#[component]
pub fn Button(
    /// Button variant: "primary" (default) or "ghost"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: Option<Signal<bool>>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <button
            type="button"
            class=move || format!("button {} {}", variant_class(variant.get().as_deref()), additional_class())
            disabled=move || disabled.map(|d| d.get()).unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

fn variant_class(variant: Option<&str>) -> &'static str {
    match variant.unwrap_or("primary") {
        "ghost" => "button--ghost",
        _ => "button--primary",
    }
}
