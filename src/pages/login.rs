//! Login view: username/password form, notice, server status.

use leptos::prelude::*;

use crate::components::notice::NoticeBanner;
use crate::flows::login::submit_login;
use crate::flows::register::submit_registration;
use crate::net::api::HttpApi;
use crate::state::ClientState;
use crate::util::browser::{sleep, spawn_flow};

#[component]
pub fn LoginView() -> impl IntoView {
    let state = expect_context::<RwSignal<ClientState>>();
    let api = expect_context::<HttpApi>();
    let register_api = api.clone();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let api = api.clone();
        spawn_flow(async move { submit_login(&api, &state, sleep).await });
    };

    let on_register = move |_| {
        let api = register_api.clone();
        spawn_flow(async move { submit_registration(&api, &state).await });
    };

    let notice = Signal::derive(move || state.with(|s| s.notice.clone()));

    view! {
        <div class="container login-container">
            <h1>"Chat"</h1>
            <form id="loginForm" class="login-form" on:submit=on_submit>
                <input
                    id="username"
                    class="login-input"
                    type="text"
                    placeholder="Username"
                    autocomplete="username"
                    prop:value=move || state.with(|s| s.login_form.username.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.login_form.username = value);
                    }
                />
                <input
                    id="password"
                    class="login-input"
                    type="password"
                    placeholder="Password"
                    autocomplete="current-password"
                    prop:value=move || state.with(|s| s.login_form.password.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.login_form.password = value);
                    }
                />
                <button class="login-button" type="submit">
                    "Login"
                </button>
                <button class="login-button login-button--secondary" type="button" on:click=on_register>
                    "Create account"
                </button>
            </form>
            <NoticeBanner notice=notice/>
            <p class="server-status">{move || state.with(ClientState::server_status_text)}</p>
        </div>
    }
}
