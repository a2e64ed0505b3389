pub mod header;

use leptos::prelude::*;

/// Application shell: sticky header above the page content
///
/// ```text
/// +------------------------------------------+
/// |                 Header                    |
/// +------------------------------------------+
/// |                 Content                   |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />
            <main data-zone="center" class="app-main">
                {children()}
            </main>
        </div>
    }
}
