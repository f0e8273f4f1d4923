//! # variant-deck
//!
//! Leptos components for comparing AI-generated interface variations side by
//! side while prototyping.
//!
//! A [`components::deck::Deck`] groups named [`components::slide::Slide`]
//! variants, the shared [`registry::Registry`] tracks which slide is active
//! in each deck, and a single [`components::toolbar::DeckToolbar`] switches
//! between variants from the UI or the keyboard. [`app::DeckProvider`] is the
//! composition root that builds and provides all shared handles.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

pub use app::DeckProvider;
pub use components::deck::Deck;
pub use components::slide::{Slide, SlideHandle};
pub use components::toolbar::DeckToolbar;
pub use state::deck::{DeckController, DeckInfo};
pub use state::settings::DeckSettings;
pub use registry::{BuildMode, DeckEvent, Environment, NavCommand, Registry};
