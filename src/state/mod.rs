//! Component-side state modules.
//!
//! DESIGN
//! ======
//! Everything here is plain Rust that the components drive, so deck
//! discovery, slide presentation, and toolbar decisions are testable without
//! a browser. The registry crate remains the only owner of "what is active";
//! these modules hold cached mirrors and policy.

pub mod config;
pub mod deck;
pub mod settings;
pub mod slide;
pub mod slides;
pub mod toolbar;
