//! Per-slide status and the rendering policy derived from it.

#[cfg(test)]
#[path = "slide_test.rs"]
mod slide_test;

use serde::Serialize;

/// Lifecycle of one slide relative to its deck's registration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SlideStatus {
    /// Mounted but not yet discovered, or the deck is not registered.
    #[default]
    Unregistered,
    Inactive,
    Active,
}

impl SlideStatus {
    #[must_use]
    pub fn from_ids(assigned: Option<&str>, active: Option<&str>) -> Self {
        match (assigned, active) {
            (None, _) => Self::Unregistered,
            (Some(id), Some(active)) if id == active => Self::Active,
            (Some(_), _) => Self::Inactive,
        }
    }

    #[must_use]
    pub fn is_active(self) -> bool {
        self == Self::Active
    }
}

/// Height of an inactive slide that stays clickable.
const COLLAPSED_HEIGHT: &str = "3rem";

/// How a slide renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlidePresentation {
    /// Content exists in the DOM at all.
    pub rendered: bool,
    /// Content is shown. Hidden slides stay in the DOM.
    pub visible: bool,
    /// Pointer activation is accepted.
    pub clickable: bool,
}

impl SlidePresentation {
    #[must_use]
    pub fn cursor(self) -> &'static str {
        if self.clickable { "pointer" } else { "default" }
    }

    /// Inline style for the slide container.
    ///
    /// Hidden slides that still accept clicks collapse to a dimmed strip so
    /// the pointer can reach them; the rest leave layout entirely.
    #[must_use]
    pub fn style(self) -> String {
        match (self.visible, self.clickable) {
            (true, _) => format!("cursor: {}", self.cursor()),
            (false, true) => format!(
                "cursor: {}; max-height: {COLLAPSED_HEIGHT}; overflow: hidden; opacity: 0.4",
                self.cursor()
            ),
            (false, false) => "display: none".to_owned(),
        }
    }

    /// Whether a click on a slide in `status` should activate it.
    #[must_use]
    pub fn click_activates(self, status: SlideStatus) -> bool {
        self.clickable && status != SlideStatus::Active
    }
}

/// Rendering contract for a slide.
///
/// - Production without override: only the active slide renders, and it does
///   not take pointer activation.
/// - Interactive: every slide renders; the active one is visible and
///   clickable, inactive ones are hidden and only clickable when the deck
///   carries the override flag.
#[must_use]
pub fn slide_presentation(show_interactive: bool, deck_override: bool, status: SlideStatus) -> SlidePresentation {
    let active = status.is_active();
    if !show_interactive {
        return SlidePresentation { rendered: active, visible: active, clickable: false };
    }
    SlidePresentation { rendered: true, visible: active, clickable: active || deck_override }
}

/// Side-effect-free snapshot of one slide.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideData {
    pub id: Option<String>,
    pub label: String,
    pub ai_prompt: Option<String>,
    pub notes: Option<String>,
    pub confidence: Option<f64>,
    pub is_active: bool,
    pub deck_id: String,
}
