//! Chat transcript rendering.
//!
//! Entries are rendered as text nodes, so message content is never parsed
//! as markup. The container scrolls to the bottom whenever the entry count
//! changes.

#[cfg(test)]
#[path = "transcript_test.rs"]
mod transcript_test;

use leptos::prelude::*;

use crate::state::ClientState;
use crate::state::transcript::TranscriptEntry;

/// Anything with a vertical scroll position.
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
pub(crate) trait ScrollArea {
    fn scroll_height(&self) -> i32;
    fn set_scroll_top(&self, top: i32);
}

#[cfg(feature = "csr")]
impl ScrollArea for web_sys::HtmlElement {
    fn scroll_height(&self) -> i32 {
        web_sys::Element::scroll_height(self)
    }

    fn set_scroll_top(&self, top: i32) {
        web_sys::Element::set_scroll_top(self, top);
    }
}

/// Pin the area to its newest content.
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
pub(crate) fn scroll_to_bottom(area: &impl ScrollArea) {
    area.set_scroll_top(area.scroll_height());
}

/// CSS classes for one transcript entry.
fn entry_class(entry: &TranscriptEntry) -> String {
    format!("chat-message {}", entry.kind.css_class())
}

fn entry_view(entry: TranscriptEntry) -> impl IntoView {
    let class = entry_class(&entry);
    view! { <div class=class>{entry.text}</div> }
}

#[component]
pub fn ChatTranscript(state: RwSignal<ClientState>) -> impl IntoView {
    let container = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = state.with(|s| s.transcript.len());

        #[cfg(feature = "csr")]
        {
            if let Some(el) = container.get() {
                let el: &web_sys::HtmlElement = &el;
                scroll_to_bottom(el);
            }
        }
    });

    view! {
        <div id="chatBox" class="chat-box" node_ref=container>
            <For
                each=move || state.with(|s| s.transcript.entries().to_vec())
                key=|entry| entry.id.clone()
                children=entry_view
            />
        </div>
    }
}
