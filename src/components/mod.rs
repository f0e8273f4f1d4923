//! Leptos components for decks, slides, and the navigation toolbar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared handles (`Registry`, `ToolbarHost`) from context
//! provided by `DeckProvider` and keep their own logic in `crate::state`.

pub mod deck;
pub mod deck_selector;
pub mod slide;
pub mod toolbar;
