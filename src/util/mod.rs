//! Helpers shared by the deck components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure helpers (ids, shortcuts, throttling, scroll settling, markdown) are
//! tested natively. Browser access is confined to `dom`, `clock`, and
//! `logging`, which degrade to no-ops outside `hydrate`.

pub mod clock;
pub mod dom;
pub mod logging;
pub mod markdown;
pub mod scroll_settle;
pub mod shortcuts;
pub mod slide_id;
pub mod throttle;
