use std::cell::RefCell;

use futures::executor::block_on;

use super::*;
use crate::flows::test_support::{Call, FakeApi, offline};
use crate::net::error::{ApiError, CONNECTION_ERROR_TEXT};
use crate::net::types::{ApiReply, Credentials};
use crate::state::session::Session;
use crate::state::ui::{Notice, View};
use crate::state::{REGISTER_FAILED_TEXT, REGISTER_SUCCESS_TEXT};

fn store_with_form() -> RefCell<ClientState> {
    let mut state = ClientState::default();
    state.login_form.username = "bob".to_owned();
    state.login_form.password = "hunter2".to_owned();
    RefCell::new(state)
}

#[test]
fn registration_posts_form_and_stays_logged_out() {
    let api = FakeApi::default();
    let store = store_with_form();
    block_on(submit_registration(&api, &store));

    assert_eq!(
        api.calls(),
        vec![Call::Register(Credentials { username: "bob".to_owned(), password: "hunter2".to_owned() })]
    );
    let state = store.borrow();
    assert_eq!(state.notice, Some(Notice::success(REGISTER_SUCCESS_TEXT)));
    assert_eq!(state.session, Session::Anonymous);
    assert_eq!(state.view, View::Login);
    assert_eq!(state.login_form.username, "bob");
    assert!(state.login_form.password.is_empty());
}

#[test]
fn registration_uses_server_success_message() {
    let api = FakeApi {
        register: Ok(ApiReply { success: Some(true), message: Some("Registration successful".to_owned()), username: None }),
        ..FakeApi::default()
    };
    let store = store_with_form();
    block_on(submit_registration(&api, &store));
    assert_eq!(store.borrow().notice, Some(Notice::success("Registration successful")));
}

#[test]
fn rejected_registration_keeps_form() {
    let api = FakeApi { register: Err(ApiError::Rejected { status: 200, message: None }), ..FakeApi::default() };
    let store = store_with_form();
    block_on(submit_registration(&api, &store));

    let state = store.borrow();
    assert_eq!(state.notice, Some(Notice::error(REGISTER_FAILED_TEXT)));
    assert_eq!(state.login_form.password, "hunter2");
}

#[test]
fn registration_transport_failure_reports_connection_error() {
    let api = FakeApi { register: Err(offline()), ..FakeApi::default() };
    let store = store_with_form();
    block_on(submit_registration(&api, &store));
    assert_eq!(store.borrow().notice, Some(Notice::error(CONNECTION_ERROR_TEXT)));
}
