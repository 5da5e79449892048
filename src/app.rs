//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::flows::health::probe_health;
use crate::net::api::HttpApi;
use crate::pages::{dashboard::DashboardView, login::LoginView};
use crate::state::ClientState;
use crate::state::ui::View;
use crate::util::browser::spawn_flow;

/// Root application component.
///
/// Provides the client state and API client as context, probes the server
/// once, and shows either the login or the dashboard view.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let state = RwSignal::new(ClientState::default());
    let api = HttpApi::default();
    provide_context(state);
    provide_context(api.clone());

    spawn_flow(async move { probe_health(&api, &state).await });

    let on_dashboard = move || state.with(|s| s.view == View::Dashboard);

    view! {
        <Title text="Chat"/>
        <Show when=on_dashboard fallback=|| view! { <LoginView/> }>
            <DashboardView/>
        </Show>
    }
}
