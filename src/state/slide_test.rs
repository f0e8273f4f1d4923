use super::*;

// =============================================================
// SlideStatus
// =============================================================

#[test]
fn status_from_ids() {
    assert_eq!(SlideStatus::from_ids(None, Some("a")), SlideStatus::Unregistered);
    assert_eq!(SlideStatus::from_ids(Some("a"), Some("a")), SlideStatus::Active);
    assert_eq!(SlideStatus::from_ids(Some("b"), Some("a")), SlideStatus::Inactive);
    assert_eq!(SlideStatus::from_ids(Some("b"), None), SlideStatus::Inactive);
}

// =============================================================
// slide_presentation
// =============================================================

#[test]
fn production_hides_inactive_slides_entirely() {
    let inactive = slide_presentation(false, false, SlideStatus::Inactive);
    assert!(!inactive.rendered);
    assert!(!inactive.visible);
    assert!(!inactive.click_activates(SlideStatus::Inactive));

    let unregistered = slide_presentation(false, false, SlideStatus::Unregistered);
    assert!(!unregistered.rendered);
}

#[test]
fn production_active_slide_renders_without_pointer() {
    let active = slide_presentation(false, false, SlideStatus::Active);
    assert!(active.rendered && active.visible);
    assert!(!active.clickable);
    assert_eq!(active.cursor(), "default");
}

#[test]
fn interactive_keeps_inactive_slides_rendered_but_hidden() {
    let inactive = slide_presentation(true, false, SlideStatus::Inactive);
    assert!(inactive.rendered);
    assert!(!inactive.visible);
    assert!(!inactive.clickable);
    assert_eq!(inactive.cursor(), "default");
}

#[test]
fn override_makes_inactive_slides_clickable() {
    let inactive = slide_presentation(true, true, SlideStatus::Inactive);
    assert!(inactive.rendered);
    assert!(inactive.clickable);
    assert!(inactive.click_activates(SlideStatus::Inactive));
    assert_eq!(inactive.cursor(), "pointer");
}

#[test]
fn clicking_active_slide_is_a_noop() {
    let active = slide_presentation(true, false, SlideStatus::Active);
    assert!(active.clickable);
    assert_eq!(active.cursor(), "pointer");
    assert!(!active.click_activates(SlideStatus::Active));
}

// =============================================================
// style
// =============================================================

#[test]
fn clickable_hidden_slide_stays_hit_testable() {
    let inactive = slide_presentation(true, true, SlideStatus::Inactive);
    let style = inactive.style();
    assert!(!style.contains("display: none"));
    assert!(style.contains("cursor: pointer"));
    assert!(style.contains("max-height"));
}

#[test]
fn non_clickable_hidden_slide_leaves_layout() {
    assert_eq!(slide_presentation(true, false, SlideStatus::Inactive).style(), "display: none");
    assert_eq!(slide_presentation(false, false, SlideStatus::Inactive).style(), "display: none");
}

#[test]
fn visible_slide_style_only_sets_cursor() {
    assert_eq!(slide_presentation(true, false, SlideStatus::Active).style(), "cursor: pointer");
    assert_eq!(slide_presentation(false, false, SlideStatus::Active).style(), "cursor: default");
}
