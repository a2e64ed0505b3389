use leptos::prelude::*;

/// Small pill listing one option of the active module
#[component]
pub fn OptionBadge(
    /// Badge content
    children: Children,
) -> impl IntoView {
    view! {
        <span class="badge badge--neutral">
            {children()}
        </span>
    }
}
