//! Deck lifecycle events.
//!
//! Decks emit these as bubbling, composed DOM custom events in the browser
//! and through an optional callback everywhere. The detail payload is plain
//! camelCase JSON so non-Rust listeners can read it.

#[cfg(test)]
#[path = "event_test.rs"]
mod event_test;

use serde::Serialize;
use serde_json::Value;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DeckEvent {
    #[serde(rename_all = "camelCase")]
    Registered { deck_id: String, label: String, slide_count: usize },
    #[serde(rename_all = "camelCase")]
    Unregistered { deck_id: String },
    #[serde(rename_all = "camelCase")]
    SlideChange {
        deck_id: String,
        previous_slide_id: Option<String>,
        current_slide_id: String,
        slide_index: usize,
    },
}

impl DeckEvent {
    /// DOM event type name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Registered { .. } => "deck-registered",
            Self::Unregistered { .. } => "deck-unregistered",
            Self::SlideChange { .. } => "slide-change",
        }
    }

    #[must_use]
    pub fn deck_id(&self) -> &str {
        match self {
            Self::Registered { deck_id, .. } | Self::Unregistered { deck_id } | Self::SlideChange { deck_id, .. } => {
                deck_id
            }
        }
    }

    /// Event detail as JSON.
    #[must_use]
    pub fn detail(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
