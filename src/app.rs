//! Composition root for variant decks.
//!
//! ARCHITECTURE
//! ============
//! `DeckProvider` builds the shared handles once per page and provides them
//! as context: `DeckSettings`, `Environment`, `Registry`, and the
//! `ToolbarHost` that owns the toolbar's single-instance slot. Decks anywhere
//! under it register with the same registry, and the toolbar is rendered
//! here while the host reports it mounted.

use leptos::prelude::*;
use registry::{BuildMode, Environment, Registry};

use crate::components::toolbar::DeckToolbar;
use crate::state::settings::DeckSettings;
use crate::state::toolbar::ToolbarHost;
use crate::util::{dom, logging};

/// Environment that honors `<html data-variant-deck-env>` before the build
/// flags.
#[must_use]
pub fn detect_environment() -> Environment {
    Environment::with_detector(|| dom::detect_mode_from_document().unwrap_or_else(BuildMode::from_build_flags))
}

/// Provides the registry and toolbar host to every `<Deck>` below it.
#[component]
pub fn DeckProvider(
    /// Defaults to `DeckSettings::from_build_env()`.
    #[prop(optional)]
    settings: Option<DeckSettings>,
    /// Defaults to document/build-flag detection.
    #[prop(optional)]
    environment: Option<Environment>,
    children: Children,
) -> impl IntoView {
    let settings = settings.unwrap_or_else(DeckSettings::from_build_env);
    logging::init(settings.log_level);

    let environment = environment.unwrap_or_else(detect_environment);
    let registry = Registry::new(environment.clone());
    let host = ToolbarHost::new(registry.clone(), settings.clone());
    let mounted = host.mounted();

    provide_context(settings);
    provide_context(environment);
    provide_context(registry);
    provide_context(host);

    view! {
        {children()}
        <Show when=move || mounted.get()>
            <DeckToolbar />
        </Show>
    }
}
