//! Slide discovery for one deck.
//!
//! DESIGN
//! ======
//! Slides attach themselves when they mount and detach when they unmount.
//! Discovery turns the attached set into an ordered, id-assigned slide list.
//! It runs many times (immediately, after a deferred tick, after every
//! attach/detach) and must give the same answer each time, so the first id
//! assigned to an entry is kept on that entry and reused by later passes.

#[cfg(test)]
#[path = "slides_test.rs"]
mod slides_test;

use std::collections::HashSet;

use serde::Serialize;

use crate::state::config::SlideConfig;
use crate::util::slide_id::derive_slide_id;

/// Identity of a mounted slide within its deck, stable for the mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlideKey(pub u64);

impl SlideKey {
    /// Parse the `data-slide-key` attribute value.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        raw.parse().ok().map(Self)
    }
}

impl std::fmt::Display for SlideKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One slide after discovery.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveredSlide {
    pub id: String,
    pub label: String,
    pub ai_prompt: Option<String>,
    pub notes: Option<String>,
    pub confidence: Option<f64>,
}

#[derive(Clone, Debug)]
struct SlideEntry {
    key: SlideKey,
    assigned_id: Option<String>,
    config: SlideConfig,
}

/// Attached slides of a deck, in document order.
#[derive(Clone, Debug, Default)]
pub struct DeckSlides {
    entries: Vec<SlideEntry>,
    next_key: u64,
}

impl DeckSlides {
    /// Add a slide at the end of the current order.
    pub fn attach(&mut self, config: SlideConfig) -> SlideKey {
        self.next_key += 1;
        let key = SlideKey(self.next_key);
        self.entries.push(SlideEntry { key, assigned_id: None, config });
        key
    }

    /// Replace a slide's configuration. The assigned id is kept. Returns
    /// `true` only when the configuration actually changed.
    pub fn update(&mut self, key: SlideKey, config: SlideConfig) -> bool {
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(entry) if entry.config != config => {
                entry.config = config;
                true
            }
            _ => false,
        }
    }

    pub fn detach(&mut self, key: SlideKey) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.key != key);
        self.entries.len() != before
    }

    /// Apply document order. Keys not listed keep their relative order after
    /// the listed ones; unknown keys are ignored.
    pub fn reorder(&mut self, document_order: &[SlideKey]) {
        self.entries.sort_by_key(|entry| {
            document_order
                .iter()
                .position(|k| *k == entry.key)
                .unwrap_or(usize::MAX)
        });
    }

    #[must_use]
    pub fn assigned_id(&self, key: SlideKey) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .and_then(|e| e.assigned_id.as_deref())
    }

    #[must_use]
    pub fn config(&self, key: SlideKey) -> Option<&SlideConfig> {
        self.entries.iter().find(|e| e.key == key).map(|e| &e.config)
    }

    /// Assign ids where missing and return the ordered slide list.
    ///
    /// Explicit ids win. Derived ids that collide with an id already taken in
    /// this pass get a `-{index}` suffix.
    pub fn discover(&mut self, deck_id: &str) -> Vec<DiscoveredSlide> {
        let mut taken: HashSet<String> = self
            .entries
            .iter()
            .filter_map(|e| e.assigned_id.clone())
            .collect();
        let mut seen = HashSet::new();
        let mut out = Vec::with_capacity(self.entries.len());

        for (index, entry) in self.entries.iter_mut().enumerate() {
            let id = match &entry.assigned_id {
                Some(id) if seen.insert(id.clone()) => id.clone(),
                _ => {
                    let id = next_free_id(deck_id, index, &entry.config, &taken);
                    if entry.assigned_id.is_some() {
                        leptos::logging::warn!("deck {deck_id:?}: duplicate slide id, reassigned to {id:?}");
                    }
                    taken.insert(id.clone());
                    seen.insert(id.clone());
                    entry.assigned_id = Some(id.clone());
                    id
                }
            };
            let summary = entry.config.summary(&id);
            out.push(DiscoveredSlide {
                id,
                label: summary.label,
                ai_prompt: summary.ai_prompt,
                notes: summary.notes,
                confidence: summary.confidence,
            });
        }
        out
    }
}

fn next_free_id(deck_id: &str, index: usize, config: &SlideConfig, taken: &HashSet<String>) -> String {
    if let Some(explicit) = config.id.as_deref().map(str::trim).filter(|id| !id.is_empty()) {
        if !taken.contains(explicit) {
            return explicit.to_owned();
        }
        leptos::logging::warn!("deck {deck_id:?}: slide id {explicit:?} is already in use");
    }
    let base = derive_slide_id(deck_id, &config.label, index);
    if !taken.contains(&base) {
        return base;
    }
    let mut suffix = index;
    loop {
        let candidate = format!("{base}-{suffix}");
        if !taken.contains(&candidate) {
            return candidate;
        }
        suffix += 1;
    }
}
