use crate::shared::api_utils::{api_base, api_url};
use crate::shared::components::ui::Button;
use gloo_net::http::Request;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ServerStatus {
    Unchecked,
    Checking,
    Online,
    Offline,
}

impl ServerStatus {
    fn display_text(&self) -> &'static str {
        match self {
            ServerStatus::Unchecked => "Backend: not checked",
            ServerStatus::Checking => "Backend: checking...",
            ServerStatus::Online => "Backend: online",
            ServerStatus::Offline => "Backend: offline",
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            ServerStatus::Unchecked => "status-unchecked",
            ServerStatus::Checking => "status-checking",
            ServerStatus::Online => "status-online",
            ServerStatus::Offline => "status-offline",
        }
    }
}

/// On-demand reachability check of the configured backend
#[component]
pub fn BackendStatus() -> impl IntoView {
    let status = RwSignal::new(ServerStatus::Unchecked);

    let check_backend = move |_: leptos::ev::MouseEvent| {
        if status.get_untracked() == ServerStatus::Checking {
            return;
        }
        status.set(ServerStatus::Checking);

        spawn_local(async move {
            let online = ping_backend().await;
            status.set(if online {
                ServerStatus::Online
            } else {
                ServerStatus::Offline
            });
        });
    };

    view! {
        <span class="header__backend" title=api_base()>
            <span class=move || status.get().css_class()>
                {move || status.get().display_text()}
            </span>
            <Button variant="ghost" on_click=Callback::new(check_backend)>
                "Check backend"
            </Button>
        </span>
    }
}

async fn ping_backend() -> bool {
    match Request::get(&api_url("/")).send().await {
        Ok(response) => response.ok(),
        Err(e) => {
            log::warn!("Backend check failed: {}", e);
            false
        }
    }
}
