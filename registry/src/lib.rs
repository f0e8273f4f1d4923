//! Shared deck registry for side-by-side variant comparison.
//!
//! This crate owns the state that every deck, slide, and toolbar instance
//! agrees on: which decks exist, their slide lists, the active slide per deck,
//! and which deck the toolbar targets. It is UI-framework agnostic so the
//! component crate can drive it from Leptos while tests drive it directly.
//!
//! DESIGN
//! ======
//! One `Registry` is constructed by the application's composition root and
//! cloned into each component. Mutations run to completion under a lock and
//! notify subscribers afterwards, so a listener may call back into the
//! registry without deadlocking.

pub mod env;
pub mod event;
pub mod nav;
pub mod record;
pub mod store;

pub use env::{BuildMode, Environment, should_show_interactive};
pub use event::DeckEvent;
pub use nav::{NavCommand, step};
pub use record::{DeckRecord, DeckRegistration, SlideSummary};
pub use store::{Registry, RegistryState, Subscription};
