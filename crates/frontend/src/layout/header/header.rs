use super::backend_status::BackendStatus;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">"Furniture Module Configurator"</span>
            </div>
            <div class="header__actions">
                <BackendStatus />
            </div>
        </header>
    }
}
