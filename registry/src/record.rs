//! Deck records and the typed registration argument.

use serde::{Deserialize, Serialize};

/// One slide as the registry sees it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideSummary {
    pub id: String,
    /// Human-readable label. Falls back to `id` when none is supplied.
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Already clamped to `0.0..=1.0` by the caller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl SlideSummary {
    /// Summary carrying only an id and label.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            ai_prompt: None,
            notes: None,
            confidence: None,
        }
    }

    fn fallback(id: &str) -> Self {
        Self::new(id, id)
    }
}

/// Registry entry for one deck.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckRecord {
    /// Slide ids in document order at the last registration.
    pub slide_ids: Vec<String>,
    /// Parallel to `slide_ids`.
    pub slides: Vec<SlideSummary>,
    /// Always a member of `slide_ids`, or `None` when the deck has no slides.
    pub active_slide_id: Option<String>,
    pub label: Option<String>,
    /// Display-only decks are skipped by toolbar selection and navigation.
    pub is_interactive: bool,
    /// Per-deck override forcing interactive behavior in production.
    pub enable_in_production: bool,
}

impl DeckRecord {
    /// Label for display, falling back to the deck id.
    #[must_use]
    pub fn display_label<'a>(&'a self, deck_id: &'a str) -> &'a str {
        self.label.as_deref().filter(|l| !l.trim().is_empty()).unwrap_or(deck_id)
    }

    #[must_use]
    pub fn slide_index(&self, slide_id: &str) -> Option<usize> {
        self.slide_ids.iter().position(|id| id == slide_id)
    }

    #[must_use]
    pub fn contains_slide(&self, slide_id: &str) -> bool {
        self.slide_index(slide_id).is_some()
    }

    #[must_use]
    pub fn active_summary(&self) -> Option<&SlideSummary> {
        let active = self.active_slide_id.as_deref()?;
        self.slides.iter().find(|s| s.id == active)
    }
}

/// Arguments for [`crate::Registry::register_deck`].
#[derive(Clone, Debug, PartialEq)]
pub struct DeckRegistration {
    pub deck_id: String,
    pub slide_ids: Vec<String>,
    pub label: Option<String>,
    pub is_interactive: bool,
    pub slides: Option<Vec<SlideSummary>>,
    pub enable_in_production: bool,
}

impl DeckRegistration {
    /// Interactive registration with no label or slide metadata.
    pub fn new<I, S>(deck_id: impl Into<String>, slide_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            deck_id: deck_id.into(),
            slide_ids: slide_ids.into_iter().map(Into::into).collect(),
            label: None,
            is_interactive: true,
            slides: None,
            enable_in_production: false,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn interactive(mut self, is_interactive: bool) -> Self {
        self.is_interactive = is_interactive;
        self
    }

    #[must_use]
    pub fn with_slides(mut self, slides: Vec<SlideSummary>) -> Self {
        self.slides = Some(slides);
        self
    }

    #[must_use]
    pub fn enable_in_production(mut self, enabled: bool) -> Self {
        self.enable_in_production = enabled;
        self
    }

    /// Slide summaries aligned with `slide_ids`.
    ///
    /// Metadata is matched by id; ids without metadata get `label = id`.
    pub(crate) fn aligned_slides(&self) -> Vec<SlideSummary> {
        self.slide_ids
            .iter()
            .map(|id| {
                self.slides
                    .as_ref()
                    .and_then(|meta| meta.iter().find(|s| &s.id == id))
                    .cloned()
                    .unwrap_or_else(|| SlideSummary::fallback(id))
            })
            .collect()
    }
}
