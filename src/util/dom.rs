//! Browser glue for decks: custom events, scroll/highlight, and document
//! queries.
//!
//! TRADE-OFFS
//! ==========
//! Every function is callable without a browser. SSR and native tests get a
//! no-op or empty result so components need no cfg branches of their own.

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

use registry::{BuildMode, DeckEvent};

use crate::state::settings::DeckSettings;
use crate::state::slides::SlideKey;
#[cfg(feature = "hydrate")]
use crate::util::clock::now_ms;
#[cfg(feature = "hydrate")]
use crate::util::scroll_settle::ScrollSettle;

/// Attribute on `<html>` that overrides the build-time environment.
pub const ENV_ATTRIBUTE: &str = "data-variant-deck-env";
/// Class added to a deck while it is highlighted after selection.
pub const HIGHLIGHT_CLASS: &str = "variant-deck--highlight";

#[cfg(feature = "hydrate")]
fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

#[cfg(feature = "hydrate")]
fn deck_element(deck_id: &str) -> Option<web_sys::Element> {
    document()?
        .query_selector(&format!("[data-deck-id=\"{deck_id}\"]"))
        .ok()
        .flatten()
}

/// Environment override from `<html data-variant-deck-env>`.
pub fn detect_mode_from_document() -> Option<BuildMode> {
    #[cfg(feature = "hydrate")]
    {
        document()?
            .document_element()?
            .get_attribute(ENV_ATTRIBUTE)
            .as_deref()
            .and_then(BuildMode::parse)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Dispatch `event` as a bubbling, composed `CustomEvent` from the deck's
/// element, or from the document once the element is gone.
pub fn dispatch_deck_event(event: &DeckEvent) {
    #[cfg(feature = "hydrate")]
    {
        let detail = js_sys::JSON::parse(&event.detail().to_string()).unwrap_or(wasm_bindgen::JsValue::NULL);
        let init = web_sys::CustomEventInit::new();
        init.set_bubbles(true);
        init.set_composed(true);
        init.set_detail(&detail);
        let Ok(custom) = web_sys::CustomEvent::new_with_event_init_dict(event.name(), &init) else {
            return;
        };
        let target: Option<web_sys::EventTarget> = deck_element(event.deck_id())
            .map(Into::into)
            .or_else(|| document().map(Into::into));
        if let Some(target) = target {
            let _ = target.dispatch_event(&custom);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = event;
    }
}

/// Keys of a deck's slides in document order. Empty without a DOM.
pub fn slide_keys_in_document_order(deck_id: &str) -> Vec<SlideKey> {
    #[cfg(feature = "hydrate")]
    {
        let Some(nodes) = document().and_then(|doc| {
            doc.query_selector_all(&format!("[data-slide-owner=\"{deck_id}\"]"))
                .ok()
        }) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .filter_map(|el| el.get_attribute("data-slide-key"))
            .filter_map(|raw| SlideKey::parse(&raw))
            .collect()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = deck_id;
        Vec::new()
    }
}

/// Smooth-scroll a deck into view, then highlight it once scrolling has
/// settled or the safety timeout passed.
pub fn scroll_to_deck_and_highlight(deck_id: &str, settings: &DeckSettings) {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = deck_element(deck_id) else {
            leptos::logging::warn!("deck {deck_id:?} has no element to scroll to");
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Center);
        el.scroll_into_view_with_scroll_into_view_options(&options);

        let tracker = Rc::new(RefCell::new(ScrollSettle::new(
            now_ms(),
            settings.scroll_settle_ms,
            settings.scroll_timeout_ms,
        )));
        poll_scroll(el, tracker, settings.clone());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (deck_id, settings);
    }
}

#[cfg(feature = "hydrate")]
fn poll_scroll(el: web_sys::Element, tracker: Rc<RefCell<ScrollSettle>>, settings: DeckSettings) {
    let delay = u32::try_from(settings.scroll_poll_ms).unwrap_or(u32::MAX);
    Timeout::new(delay, move || {
        let position = el.get_bounding_client_rect().top();
        let status = tracker.borrow_mut().observe(now_ms(), position);
        if status.is_done() {
            highlight(&el, settings.highlight_ms);
        } else {
            poll_scroll(el, tracker, settings);
        }
    })
    .forget();
}

#[cfg(feature = "hydrate")]
fn highlight(el: &web_sys::Element, duration_ms: u64) {
    let classes = el.class_list();
    let _ = classes.remove_1(HIGHLIGHT_CLASS);
    let _ = classes.add_1(HIGHLIGHT_CLASS);
    let delay = u32::try_from(duration_ms).unwrap_or(u32::MAX);
    Timeout::new(delay, move || {
        let _ = classes.remove_1(HIGHLIGHT_CLASS);
    })
    .forget();
}
