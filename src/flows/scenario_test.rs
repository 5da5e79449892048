use std::cell::RefCell;

use futures::executor::block_on;

use crate::flows::login::submit_login;
use crate::flows::logout::logout;
use crate::flows::message::send_message;
use crate::flows::test_support::{Call, FakeApi, no_delay};
use crate::net::types::{Credentials, LogoutRequest, SendMessageRequest};
use crate::state::ClientState;
use crate::state::session::Session;
use crate::state::transcript::EntryKind;
use crate::state::ui::View;

#[test]
fn login_send_logout_round() {
    let api = FakeApi::default();
    let store = RefCell::new(ClientState::default());

    store.borrow_mut().login_form.username = "alice".to_owned();
    store.borrow_mut().login_form.password = "pw".to_owned();
    block_on(submit_login(&api, &store, no_delay));
    assert_eq!(store.borrow().view, View::Dashboard);
    assert_eq!(store.borrow().session.username(), Some("alice"));
    assert!(store.borrow().transcript.is_empty());

    store.borrow_mut().message_input = "hi".to_owned();
    block_on(send_message(&api, &store));
    {
        let state = store.borrow();
        assert_eq!(state.transcript.len(), 1);
        assert_eq!(state.transcript.entries()[0].text, "hi");
        assert_eq!(state.transcript.entries()[0].kind, EntryKind::Sent);
    }

    block_on(logout(&api, &store));
    {
        let state = store.borrow();
        assert!(state.transcript.is_empty());
        assert_eq!(state.view, View::Login);
        assert_eq!(state.session, Session::Anonymous);
        assert!(state.is_consistent());
    }

    assert_eq!(
        api.calls(),
        vec![
            Call::Login(Credentials { username: "alice".to_owned(), password: "pw".to_owned() }),
            Call::Send(SendMessageRequest { sender: "alice".to_owned(), message: "hi".to_owned(), recipient: None }),
            Call::Logout(LogoutRequest { username: "alice".to_owned() }),
        ]
    );
}

#[test]
fn second_session_starts_with_empty_transcript() {
    let api = FakeApi::default();
    let store = RefCell::new(ClientState::default());

    for user in ["alice", "bob"] {
        store.borrow_mut().login_form.username = user.to_owned();
        block_on(submit_login(&api, &store, no_delay));
        assert!(store.borrow().transcript.is_empty());
        store.borrow_mut().message_input = format!("from {user}");
        block_on(send_message(&api, &store));
        assert_eq!(store.borrow().transcript.len(), 1);
        block_on(logout(&api, &store));
    }
}
