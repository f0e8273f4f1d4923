//! Typed deck and slide configuration parsed at the component boundary.
//!
//! DESIGN
//! ======
//! Props are validated and normalized once here (deck id format, confidence
//! clamping) so render paths never re-parse raw values.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use registry::SlideSummary;

/// Longest deck id accepted.
pub const DECK_ID_MAX_LEN: usize = 128;

/// Configuration failures that degrade a deck to a passthrough render.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeckConfigError {
    /// No deck id was supplied.
    #[error("deck id is required")]
    MissingId,
    /// The deck id is empty or contains characters outside `[A-Za-z0-9_-]`.
    #[error("invalid deck id {id:?}: use letters, digits, '-' or '_' (max 128 chars)")]
    InvalidId { id: String },
    /// The deck has no slides to register.
    #[error("deck {deck_id:?} has no slides")]
    NoSlides { deck_id: String },
}

impl DeckConfigError {
    /// Stable code rendered on the passthrough element.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingId => "E_DECK_ID_MISSING",
            Self::InvalidId { .. } => "E_DECK_ID_INVALID",
            Self::NoSlides { .. } => "E_DECK_EMPTY",
        }
    }
}

/// Validate a deck id and return it trimmed.
pub fn validate_deck_id(raw: Option<&str>) -> Result<String, DeckConfigError> {
    let Some(raw) = raw else {
        return Err(DeckConfigError::MissingId);
    };
    let id = raw.trim();
    if id.is_empty() {
        return Err(DeckConfigError::MissingId);
    }
    let safe = id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !safe || id.len() > DECK_ID_MAX_LEN {
        return Err(DeckConfigError::InvalidId { id: id.to_owned() });
    }
    Ok(id.to_owned())
}

/// Model confidence in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Confidence(f64);

impl Confidence {
    /// Clamp `raw` into range. `NaN` has no meaningful confidence.
    #[must_use]
    pub fn new(raw: f64) -> Option<Self> {
        if raw.is_nan() {
            return None;
        }
        Some(Self(raw.clamp(0.0, 1.0)))
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Whole-number percentage for display.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn percent(self) -> u8 {
        (self.0 * 100.0).round() as u8
    }
}

/// Deck props after normalization.
#[derive(Clone, Debug, PartialEq)]
pub struct DeckOptions {
    pub id: Option<String>,
    pub label: Option<String>,
    pub prompt: Option<String>,
    pub description: Option<String>,
    pub enable_in_production: bool,
    pub interactive: bool,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            id: None,
            label: None,
            prompt: None,
            description: None,
            enable_in_production: false,
            interactive: true,
        }
    }
}

impl DeckOptions {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: Some(id.into()), ..Self::default() }
    }
}

/// Slide props after normalization.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SlideConfig {
    /// Explicit id; derived from the label when absent.
    pub id: Option<String>,
    pub label: String,
    pub ai_prompt: Option<String>,
    pub notes: Option<String>,
    pub confidence: Option<Confidence>,
}

impl SlideConfig {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), ..Self::default() }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Registry summary for this slide under an assigned id.
    #[must_use]
    pub fn summary(&self, id: &str) -> SlideSummary {
        let label = if self.label.trim().is_empty() { id.to_owned() } else { self.label.clone() };
        SlideSummary {
            id: id.to_owned(),
            label,
            ai_prompt: self.ai_prompt.clone(),
            notes: self.notes.clone(),
            confidence: self.confidence.map(Confidence::value),
        }
    }
}
