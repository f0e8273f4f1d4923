use super::*;

fn ids(slides: &[DiscoveredSlide]) -> Vec<&str> {
    slides.iter().map(|s| s.id.as_str()).collect()
}

// =============================================================
// discover
// =============================================================

#[test]
fn discover_prefers_explicit_ids_and_derives_the_rest() {
    let mut slides = DeckSlides::default();
    slides.attach(SlideConfig::new("Primary").with_id("s0"));
    slides.attach(SlideConfig::new("Outline"));
    slides.attach(SlideConfig::new(""));

    let found = slides.discover("buttons");
    assert_eq!(ids(&found), vec!["s0", "buttons--outline", "buttons--slide-2"]);
    assert_eq!(found[1].label, "Outline");
    assert_eq!(found[2].label, "buttons--slide-2");
}

#[test]
fn discover_is_idempotent_across_passes() {
    let mut slides = DeckSlides::default();
    slides.attach(SlideConfig::new("A"));
    slides.attach(SlideConfig::new("B"));

    let first = slides.discover("deck");
    let second = slides.discover("deck");
    assert_eq!(first, second);
}

#[test]
fn assigned_id_survives_label_change_and_reorder() {
    let mut slides = DeckSlides::default();
    let a = slides.attach(SlideConfig::new("Alpha"));
    let b = slides.attach(SlideConfig::new("Beta"));
    slides.discover("deck");

    slides.update(a, SlideConfig::new("Renamed"));
    slides.reorder(&[b, a]);
    let found = slides.discover("deck");

    assert_eq!(ids(&found), vec!["deck--beta", "deck--alpha"]);
    assert_eq!(found[1].label, "Renamed");
    assert_eq!(slides.assigned_id(a), Some("deck--alpha"));
}

#[test]
fn colliding_labels_get_unique_ids() {
    let mut slides = DeckSlides::default();
    slides.attach(SlideConfig::new("Card"));
    slides.attach(SlideConfig::new("Card"));
    slides.attach(SlideConfig::new("Card"));

    let found = slides.discover("deck");
    assert_eq!(ids(&found), vec!["deck--card", "deck--card-1", "deck--card-2"]);
}

#[test]
fn duplicate_explicit_id_falls_back_to_derived() {
    let mut slides = DeckSlides::default();
    slides.attach(SlideConfig::new("One").with_id("same"));
    slides.attach(SlideConfig::new("Two").with_id("same"));

    let found = slides.discover("deck");
    assert_eq!(ids(&found), vec!["same", "deck--two"]);
}

#[test]
fn late_slide_does_not_steal_existing_ids() {
    let mut slides = DeckSlides::default();
    let first = slides.attach(SlideConfig::new("Card"));
    slides.discover("deck");

    let late = slides.attach(SlideConfig::new("Card"));
    slides.reorder(&[late, first]);
    let found = slides.discover("deck");

    assert_eq!(slides.assigned_id(first), Some("deck--card"));
    assert_eq!(ids(&found), vec!["deck--card-0", "deck--card"]);
}

// =============================================================
// attach / detach / reorder
// =============================================================

#[test]
fn detach_removes_only_the_given_slide() {
    let mut slides = DeckSlides::default();
    let a = slides.attach(SlideConfig::new("A"));
    let b = slides.attach(SlideConfig::new("B"));

    assert!(slides.detach(a));
    assert!(!slides.detach(a));
    assert!(slides.config(b).is_some());
    assert!(slides.config(a).is_none());
}

#[test]
fn update_reports_only_real_changes() {
    let mut slides = DeckSlides::default();
    let a = slides.attach(SlideConfig::new("A"));

    assert!(!slides.update(a, SlideConfig::new("A")));
    assert!(slides.update(a, SlideConfig::new("B")));
    assert!(!slides.update(SlideKey(999), SlideConfig::new("C")));
    assert_eq!(slides.config(a).map(|c| c.label.as_str()), Some("B"));
}

#[test]
fn reorder_keeps_unlisted_entries_after_listed_ones() {
    let mut slides = DeckSlides::default();
    let a = slides.attach(SlideConfig::new("A"));
    let b = slides.attach(SlideConfig::new("B"));
    let c = slides.attach(SlideConfig::new("C"));

    slides.reorder(&[c, SlideKey(999)]);
    let found = slides.discover("d");
    assert_eq!(ids(&found), vec!["d--c", "d--a", "d--b"]);
    assert!(slides.assigned_id(a).is_some() && slides.assigned_id(b).is_some());
}

#[test]
fn slide_key_round_trips_through_attribute_text() {
    assert_eq!(SlideKey::parse(&SlideKey(7).to_string()), Some(SlideKey(7)));
    assert_eq!(SlideKey::parse("x"), None);
}
