use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn view_default_is_login() {
    assert_eq!(View::default(), View::Login);
}

#[test]
fn server_status_default_is_unknown() {
    assert_eq!(ServerStatus::default(), ServerStatus::Unknown);
}

// =============================================================
// Notice / LoginForm
// =============================================================

#[test]
fn notice_constructors_set_kind() {
    assert_eq!(Notice::success("ok").kind, NoticeKind::Success);
    assert_eq!(Notice::error("no").kind, NoticeKind::Error);
    assert_eq!(Notice::error("no").text, "no");
}

#[test]
fn notice_kind_css_classes() {
    assert_eq!(NoticeKind::Success.css_class(), "success");
    assert_eq!(NoticeKind::Error.css_class(), "error");
}

#[test]
fn login_form_reset_clears_both_fields() {
    let mut form = LoginForm { username: "alice".to_owned(), password: "secret".to_owned() };
    form.reset();
    assert_eq!(form, LoginForm::default());
}

#[test]
fn server_status_labels_differ() {
    assert_ne!(ServerStatus::Online.label(), ServerStatus::Offline.label());
    assert_ne!(ServerStatus::Unknown.label(), ServerStatus::Online.label());
}
