//! Local chat transcript.
//!
//! DESIGN
//! ======
//! Append-only while a session lasts; the only other mutation is clearing
//! everything on logout. Entries are never edited or removed one by one.

#[cfg(test)]
#[path = "transcript_test.rs"]
mod transcript_test;

/// Direction of a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    /// Sent by the local user.
    Sent,
    /// Sent by someone else. Nothing produces these yet; there is no receive path.
    Received,
}

impl EntryKind {
    /// Modifier class applied next to `chat-message`.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Sent => "sent",
            Self::Received => "received",
        }
    }
}

/// A single rendered chat line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranscriptEntry {
    /// Client-generated key for keyed rendering.
    pub id: String,
    pub kind: EntryKind,
    /// Literal message text, rendered as a text node.
    pub text: String,
}

/// Ordered list of chat entries shown in the dashboard.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    /// Append one entry at the end.
    pub fn push(&mut self, kind: EntryKind, text: impl Into<String>) {
        self.entries.push(TranscriptEntry {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            text: text.into(),
        });
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
