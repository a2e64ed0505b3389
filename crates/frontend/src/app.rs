use crate::domain::a002_configuration::ui::details::CabinetConfigurator;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Shell>
            <CabinetConfigurator />
        </Shell>
    }
}
