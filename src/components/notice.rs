//! Inline notice element shared by login and registration attempts.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use leptos::prelude::*;

use crate::state::ui::Notice;

/// CSS classes for a notice element.
fn notice_class(notice: &Notice) -> String {
    format!("message {}", notice.kind.css_class())
}

/// Shows the latest notice, or nothing.
#[component]
pub fn NoticeBanner(#[prop(into)] notice: Signal<Option<Notice>>) -> impl IntoView {
    move || {
        notice.get().map(|notice| {
            let class = notice_class(&notice);
            view! { <p id="loginMessage" class=class>{notice.text}</p> }
        })
    }
}
