use super::*;
use serde_json::json;

#[test]
fn event_names_match_dom_types() {
    let registered = DeckEvent::Registered { deck_id: "d".into(), label: "D".into(), slide_count: 2 };
    let unregistered = DeckEvent::Unregistered { deck_id: "d".into() };
    let change = DeckEvent::SlideChange {
        deck_id: "d".into(),
        previous_slide_id: None,
        current_slide_id: "s1".into(),
        slide_index: 1,
    };
    assert_eq!(registered.name(), "deck-registered");
    assert_eq!(unregistered.name(), "deck-unregistered");
    assert_eq!(change.name(), "slide-change");
    assert_eq!(change.deck_id(), "d");
}

#[test]
fn registered_detail_is_camel_case() {
    let event = DeckEvent::Registered { deck_id: "buttons".into(), label: "Buttons".into(), slide_count: 3 };
    assert_eq!(event.detail(), json!({ "deckId": "buttons", "label": "Buttons", "slideCount": 3 }));
}

#[test]
fn slide_change_detail_carries_previous_and_index() {
    let event = DeckEvent::SlideChange {
        deck_id: "buttons".into(),
        previous_slide_id: Some("s0".into()),
        current_slide_id: "s1".into(),
        slide_index: 1,
    };
    assert_eq!(
        event.detail(),
        json!({
            "deckId": "buttons",
            "previousSlideId": "s0",
            "currentSlideId": "s1",
            "slideIndex": 1
        })
    );
}
