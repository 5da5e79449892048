//! Dashboard view: user label, transcript, message input, logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted only while a session is active. Sending and logout are spawned as
//! flows; everything shown here is read back from `ClientState`.

use leptos::prelude::*;

use crate::components::transcript::ChatTranscript;
use crate::flows::logout::logout;
use crate::flows::message::send_message;
use crate::net::api::HttpApi;
use crate::state::ClientState;
use crate::util::browser::spawn_flow;

#[component]
pub fn DashboardView() -> impl IntoView {
    let state = expect_context::<RwSignal<ClientState>>();
    let api = expect_context::<HttpApi>();
    let logout_api = api.clone();

    let send = Callback::new(move |()| {
        let api = api.clone();
        spawn_flow(async move { send_message(&api, &state).await });
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send.run(());
        }
    };

    let on_logout = move |_| {
        let api = logout_api.clone();
        spawn_flow(async move { logout(&api, &state).await });
    };

    let username = move || state.with(|s| s.session.username().unwrap_or_default().to_owned());

    view! {
        <div id="dashboard" class="dashboard">
            <header class="dashboard__header">
                <span class="dashboard__welcome">
                    "Logged in as "
                    <span id="userDisplay" class="user-display">{username}</span>
                </span>
                <button class="btn dashboard__logout" on:click=on_logout>
                    "Logout"
                </button>
            </header>

            <ChatTranscript state=state/>

            <Show when=move || state.with(|s| s.send_error.is_some())>
                <p class="message error">{move || state.with(|s| s.send_error.clone().unwrap_or_default())}</p>
            </Show>

            <div class="chat-input-row">
                <input
                    id="messageInput"
                    class="chat-input"
                    type="text"
                    placeholder="Type a message..."
                    prop:value=move || state.with(|s| s.message_input.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.message_input = value);
                    }
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary chat-send" on:click=move |_| send.run(())>
                    "Send"
                </button>
            </div>
        </div>
    }
}
