use super::*;

#[test]
fn slugify_lowercases_and_collapses_separators() {
    assert_eq!(slugify("Primary Button"), "primary-button");
    assert_eq!(slugify("  Ghost -- (alt)  "), "ghost-alt");
    assert_eq!(slugify("v2.1"), "v2-1");
}

#[test]
fn slugify_drops_non_ascii() {
    assert_eq!(slugify("Café"), "caf");
    assert_eq!(slugify("🎨"), "");
}

#[test]
fn derive_slide_id_uses_label_slug() {
    assert_eq!(derive_slide_id("buttons", "Outline", 1), "buttons--outline");
}

#[test]
fn derive_slide_id_falls_back_to_index() {
    assert_eq!(derive_slide_id("buttons", "", 0), "buttons--slide-0");
    assert_eq!(derive_slide_id("buttons", "!!!", 3), "buttons--slide-3");
}
