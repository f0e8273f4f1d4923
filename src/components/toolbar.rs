//! `<DeckToolbar>`: the single navigation surface for all decks.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted by `DeckProvider` while the `ToolbarHost` says so. It mirrors the
//! registry into a snapshot signal, auto-selects the first interactive deck,
//! and drives navigation from its buttons and a window-level keyboard
//! listener. Only one instance may hold the `ToolbarSlot`; a newer instance
//! evicts the older one, which then renders nothing.

use leptos::prelude::*;
use registry::NavCommand;
use uuid::Uuid;

use crate::components::deck_selector::DeckSelector;
use crate::state::config::Confidence;
use crate::state::toolbar::{
    ToolbarHost, auto_select_deck, show_deck_selector, toolbar_target, toolbar_view, toolbar_visible,
};
#[cfg(feature = "hydrate")]
use crate::state::toolbar::shortcut_target;
use crate::util::markdown::render_notes_html;

/// Toolbar bound to the `ToolbarHost` in context.
#[component]
pub fn DeckToolbar() -> impl IntoView {
    let host = expect_context::<ToolbarHost>();
    let registry = host.registry().clone();
    let instance = Uuid::new_v4();

    let evicted = RwSignal::new(false);
    host.slot().claim(instance, move || {
        let _ = evicted.try_set(true);
    });

    let snapshot = RwSignal::new(registry.snapshot());
    let subscription = {
        let selector = registry.clone();
        registry.subscribe(move |state| {
            // Selecting re-enters and delivers the newer state to this listener.
            if let Some(first) = auto_select_deck(state) {
                selector.set_selected_deck(first);
                return;
            }
            let _ = snapshot.try_set(state.clone());
        })
    };
    if let Some(first) = snapshot.with_untracked(|s| auto_select_deck(s).map(str::to_owned)) {
        registry.set_selected_deck(first);
    }

    let navigate = {
        let registry = registry.clone();
        Callback::new(move |command: NavCommand| {
            let state = registry.snapshot();
            if let Some(deck_id) = toolbar_target(&state) {
                registry.navigate(deck_id, command);
            }
        })
    };

    #[cfg(feature = "hydrate")]
    let key_listener = {
        use std::cell::RefCell;

        use crate::util::clock::now_ms;
        use crate::util::shortcuts::{KeyChord, event_targets_editable, nav_command_for};
        use crate::util::throttle::Throttle;

        let registry = registry.clone();
        let throttle = RefCell::new(Throttle::new(host.settings().key_throttle_ms));
        window_event_listener(leptos::ev::keydown, move |ev| {
            if event_targets_editable(&ev) {
                return;
            }
            let Some(command) = nav_command_for(&KeyChord::from_event(&ev)) else {
                return;
            };
            if evicted.get_untracked() {
                return;
            }
            let state = registry.snapshot();
            let Some(deck_id) = shortcut_target(&state, registry.environment()) else {
                return;
            };
            ev.prevent_default();
            ev.stop_propagation();
            if throttle.borrow_mut().allow(now_ms()) {
                registry.navigate(deck_id, command);
            }
        })
    };

    {
        let host = host.clone();
        on_cleanup(move || {
            subscription.unsubscribe();
            #[cfg(feature = "hydrate")]
            key_listener.remove();
            host.slot().release(instance);
        });
    }

    let env = registry.environment().clone();
    let visible = move || !evicted.get() && snapshot.with(|s| toolbar_visible(s, &env));
    let view_model = Memo::new(move |_| snapshot.with(toolbar_view));
    let can_navigate = move || view_model.with(|v| v.as_ref().is_some_and(|v| v.can_navigate));

    let position = move || {
        view_model
            .get()
            .map(|v| format!("{} / {}", v.position, v.slide_count))
            .unwrap_or_default()
    };

    view! {
        <Show when=visible>
            <div class="variant-deck-toolbar" role="toolbar" aria-label="Variant navigation">
                <Show
                    when=move || snapshot.with(show_deck_selector)
                    fallback=move || {
                        view! {
                            <span class="variant-deck-toolbar__deck-label">
                                {move || view_model.get().map(|v| v.deck_label).unwrap_or_default()}
                            </span>
                        }
                    }
                >
                    <DeckSelector snapshot=snapshot />
                </Show>

                <button
                    class="btn variant-deck-toolbar__prev"
                    disabled=move || !can_navigate()
                    on:click=move |_| navigate.run(NavCommand::Previous)
                    title="Previous variant (Ctrl/Cmd + Shift + [)"
                >
                    "‹"
                </button>
                <span class="variant-deck-toolbar__position">{position}</span>
                <button
                    class="btn variant-deck-toolbar__next"
                    disabled=move || !can_navigate()
                    on:click=move |_| navigate.run(NavCommand::Next)
                    title="Next variant (Ctrl/Cmd + Shift + ])"
                >
                    "›"
                </button>

                {move || {
                    view_model
                        .get()
                        .and_then(|v| v.active)
                        .map(|slide| {
                            let confidence = slide
                                .confidence
                                .and_then(Confidence::new)
                                .map(|c| format!("{}%", c.percent()));
                            let notes_html = slide.notes.as_deref().map(render_notes_html);
                            view! {
                                <div class="variant-deck-toolbar__meta">
                                    <span class="variant-deck-toolbar__slide-label">{slide.label}</span>
                                    {confidence
                                        .map(|c| {
                                            view! {
                                                <span class="variant-deck-toolbar__confidence" title="Model confidence">
                                                    {c}
                                                </span>
                                            }
                                        })}
                                    {slide
                                        .ai_prompt
                                        .map(|p| view! { <p class="variant-deck-toolbar__prompt">{p}</p> })}
                                    {notes_html
                                        .map(|html| view! { <div class="variant-deck-toolbar__notes" inner_html=html></div> })}
                                </div>
                            }
                        })
                }}
            </div>
        </Show>
    }
}
