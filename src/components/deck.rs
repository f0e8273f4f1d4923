//! `<Deck>`: groups `<Slide>` variants and registers them with the registry.
//!
//! ARCHITECTURE
//! ============
//! The component wires a `DeckController` into Leptos:
//! - provides `DeckContext` so slides attach synchronously while rendering;
//! - runs discovery immediately, on a deferred tick, and whenever slides
//!   attach or detach (`rescan`);
//! - mirrors the registry's active slide into a signal, written only when it
//!   actually changed;
//! - unregisters and asks the toolbar host to clean up on unmount.

use leptos::prelude::*;
use registry::{DeckEvent, Registry};
use std::sync::Arc;

use crate::state::config::DeckOptions;
use crate::state::deck::DeckController;
use crate::state::toolbar::ToolbarHost;
use crate::util::dom;

/// Handles shared with the slides of one deck.
#[derive(Clone)]
pub struct DeckContext {
    pub controller: DeckController,
    /// Reactive mirror of the registry's active slide id.
    pub active: RwSignal<Option<String>>,
    /// Bumped after every discovery pass.
    pub epoch: RwSignal<u64>,
    /// Bumped by slides on attach/detach to request a discovery pass.
    pub rescan: RwSignal<u64>,
}

impl DeckContext {
    pub fn request_rescan(&self) {
        let _ = self.rescan.try_update(|n| *n += 1);
    }
}

#[allow(clippy::too_many_arguments)]
#[component]
pub fn Deck(
    /// Deck id: `[A-Za-z0-9_-]`, at most 128 chars.
    #[prop(optional, into)]
    id: Option<String>,
    #[prop(optional, into)] label: Option<String>,
    /// Prompt that produced the variants.
    #[prop(optional, into)]
    prompt: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    /// Keep interactive features in production builds.
    #[prop(optional)]
    enable_in_production: bool,
    /// Participate in toolbar selection and navigation.
    #[prop(default = true)]
    interactive: bool,
    #[prop(optional)] on_event: Option<Callback<DeckEvent>>,
    #[prop(optional)] on_ready: Option<Callback<DeckController>>,
    children: Children,
) -> impl IntoView {
    let registry = expect_context::<Registry>();
    let host = expect_context::<ToolbarHost>();

    let options = DeckOptions { id, label, prompt, description, enable_in_production, interactive };
    let controller = DeckController::new(options, registry.clone());

    if let Some(err) = controller.config_error() {
        return view! {
            <div class="variant-deck variant-deck--error" data-deck-error=err.error_code()>
                {children()}
            </div>
        }
        .into_any();
    }
    let deck_id = controller.deck_id().unwrap_or_default().to_owned();

    controller.set_event_sink(Arc::new(move |event: &DeckEvent| {
        dom::dispatch_deck_event(event);
        if let Some(on_event) = on_event {
            let _ = on_event.try_run(event.clone());
        }
    }));

    let ctx = DeckContext {
        controller: controller.clone(),
        active: RwSignal::new(None),
        epoch: RwSignal::new(0),
        rescan: RwSignal::new(0),
    };
    let active = ctx.active;
    let epoch = ctx.epoch;

    let subscription = {
        let controller = controller.clone();
        registry.subscribe(move |state| {
            if controller.handle_registry_change(state) {
                let _ = active.try_set(controller.active_slide_id());
            }
        })
    };

    let discovery_pass = {
        let controller = controller.clone();
        let host = host.clone();
        move || {
            if let Some(deck_id) = controller.deck_id() {
                let order = dom::slide_keys_in_document_order(deck_id);
                if !order.is_empty() {
                    controller.reorder_slides(&order);
                }
            }
            let registered = controller.discover();
            let current = controller.active_slide_id();
            if active.try_get_untracked().is_some_and(|cached| cached != current) {
                let _ = active.try_set(current);
            }
            let _ = epoch.try_update(|n| *n += 1);
            if registered {
                host.ensure_mounted();
            }
        }
    };

    provide_context(ctx.clone());
    let content = children();

    discovery_pass();

    #[cfg(feature = "hydrate")]
    {
        let deferred = discovery_pass.clone();
        gloo_timers::callback::Timeout::new(0, deferred).forget();
    }

    Effect::new(move |_| {
        ctx.rescan.track();
        discovery_pass();
    });

    if let Some(on_ready) = on_ready {
        on_ready.run(controller.clone());
    }

    let show_interactive = controller.show_interactive();
    let aria_label = controller.display_label();
    {
        let controller = controller.clone();
        on_cleanup(move || {
            subscription.unsubscribe();
            controller.unregister();
            host.cleanup_if_empty();
        });
    }

    view! {
        <div
            class=if show_interactive { "variant-deck variant-deck--interactive" } else { "variant-deck" }
            data-deck-id=deck_id
            data-interactive=interactive.to_string()
            role="region"
            aria-label=aria_label
        >
            {content}
        </div>
    }
    .into_any()
}
