//! Deck picker shown in the toolbar when more than one interactive deck is
//! registered. Choosing a deck scrolls to it and highlights it.

use leptos::prelude::*;
use registry::RegistryState;

use crate::state::toolbar::{ToolbarHost, toolbar_target};
use crate::util::dom;

#[component]
pub fn DeckSelector(#[prop(into)] snapshot: Signal<RegistryState>) -> impl IntoView {
    let host = expect_context::<ToolbarHost>();
    let registry = host.registry().clone();
    let settings = host.settings().clone();

    let choices = move || {
        snapshot.with(|s| {
            s.interactive_decks()
                .into_iter()
                .map(|id| {
                    let label = s.deck(id).map_or(id, |record| record.display_label(id));
                    (id.to_owned(), label.to_owned())
                })
                .collect::<Vec<_>>()
        })
    };
    let selected = move || snapshot.with(|s| toolbar_target(s).map(str::to_owned).unwrap_or_default());

    let on_change = move |ev: leptos::ev::Event| {
        let deck_id = event_target_value(&ev);
        if deck_id.is_empty() {
            return;
        }
        registry.set_selected_deck(deck_id.clone());
        dom::scroll_to_deck_and_highlight(&deck_id, &settings);
    };

    view! {
        <label class="variant-deck-toolbar__selector">
            <span class="variant-deck-toolbar__selector-label">"Deck"</span>
            <select on:change=on_change prop:value=selected>
                {move || {
                    let current = selected();
                    choices()
                        .into_iter()
                        .map(|(id, label)| {
                            let is_selected = id == current;
                            view! {
                                <option value=id selected=is_selected>
                                    {label}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </label>
    }
}
