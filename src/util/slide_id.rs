//! Deterministic slide id derivation.

#[cfg(test)]
#[path = "slide_id_test.rs"]
mod slide_id_test;

/// Lowercase ASCII slug: alphanumerics kept, every other run becomes `-`.
#[must_use]
pub fn slugify(label: &str) -> String {
    let mut slug = String::with_capacity(label.len());
    let mut pending_dash = false;
    for ch in label.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Id for a slide without an explicit one: `{deck}--{slug}`, or
/// `{deck}--slide-{index}` when the label has no usable characters.
#[must_use]
pub fn derive_slide_id(deck_id: &str, label: &str, index: usize) -> String {
    let slug = slugify(label);
    if slug.is_empty() {
        format!("{deck_id}--slide-{index}")
    } else {
        format!("{deck_id}--{slug}")
    }
}
