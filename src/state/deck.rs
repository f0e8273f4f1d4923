//! Deck controller: discovery, registration, and navigation for one deck.
//!
//! ARCHITECTURE
//! ============
//! `DeckController` is the framework-free half of the `<Deck>` component. The
//! component owns the DOM and the reactive mirror; the controller owns the
//! slide discovery store and talks to the registry. Every write of "which
//! slide is active" goes through the registry, and the controller only keeps
//! a cached copy for diffing notifications.
//!
//! TRADE-OFFS
//! ==========
//! Discovery and registration are idempotent and run on several triggers
//! (mount, deferred tick, slide attach/detach). Redundant passes skip the
//! registry call when nothing changed, so re-renders do not fan out into
//! notification storms.

#[cfg(test)]
#[path = "deck_test.rs"]
mod deck_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use leptos::logging::{error, warn};
use registry::{DeckEvent, DeckRegistration, NavCommand, Registry, RegistryState, SlideSummary, step};
use serde::Serialize;

use crate::state::config::{DeckConfigError, DeckOptions, SlideConfig, validate_deck_id};
use crate::state::slide::{SlideData, SlidePresentation, SlideStatus, slide_presentation};
use crate::state::slides::{DeckSlides, DiscoveredSlide, SlideKey};

/// Receiver for deck lifecycle events.
pub type EventSink = Arc<dyn Fn(&DeckEvent) + Send + Sync>;

/// Public summary returned by [`DeckController::info`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckInfo {
    pub id: Option<String>,
    pub label: String,
    pub prompt: Option<String>,
    pub description: Option<String>,
    pub slide_count: usize,
    pub active_slide_id: Option<String>,
    pub is_production: bool,
    pub enable_in_production: bool,
    pub show_interactive: bool,
    pub is_registered: bool,
}

#[derive(Default)]
struct DeckCache {
    slides: Vec<DiscoveredSlide>,
    registered: bool,
    active_slide_id: Option<String>,
    warned_empty: bool,
}

struct DeckInner {
    id: Result<String, DeckConfigError>,
    options: DeckOptions,
    registry: Registry,
    slides: Mutex<DeckSlides>,
    cache: Mutex<DeckCache>,
    sink: Mutex<Option<EventSink>>,
}

/// Cloneable handle to one deck's controller.
#[derive(Clone)]
pub struct DeckController {
    inner: Arc<DeckInner>,
}

impl std::fmt::Debug for DeckController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeckController")
            .field("id", &self.inner.id)
            .field("registered", &lock(&self.inner.cache).registered)
            .finish_non_exhaustive()
    }
}

impl DeckController {
    /// Validate `options` and build a controller. An invalid id is logged and
    /// leaves the controller inert: it never registers.
    #[must_use]
    pub fn new(options: DeckOptions, registry: Registry) -> Self {
        let id = validate_deck_id(options.id.as_deref());
        if let Err(err) = &id {
            error!("variant deck disabled: {err}");
        }
        Self {
            inner: Arc::new(DeckInner {
                id,
                options,
                registry,
                slides: Mutex::new(DeckSlides::default()),
                cache: Mutex::new(DeckCache::default()),
                sink: Mutex::new(None),
            }),
        }
    }

    #[must_use]
    pub fn deck_id(&self) -> Option<&str> {
        self.inner.id.as_deref().ok()
    }

    #[must_use]
    pub fn config_error(&self) -> Option<&DeckConfigError> {
        self.inner.id.as_ref().err()
    }

    #[must_use]
    pub fn options(&self) -> &DeckOptions {
        &self.inner.options
    }

    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.inner.registry
    }

    /// Label shown in the toolbar, falling back to the deck id.
    #[must_use]
    pub fn display_label(&self) -> String {
        self.inner
            .options
            .label
            .clone()
            .filter(|l| !l.trim().is_empty())
            .or_else(|| self.deck_id().map(str::to_owned))
            .unwrap_or_default()
    }

    /// Environment gate for this deck.
    #[must_use]
    pub fn show_interactive(&self) -> bool {
        self.inner
            .registry
            .environment()
            .show_interactive(self.inner.options.enable_in_production)
    }

    #[must_use]
    pub fn is_registered(&self) -> bool {
        lock(&self.inner.cache).registered
    }

    /// Cached mirror of the registry's active slide for this deck.
    #[must_use]
    pub fn active_slide_id(&self) -> Option<String> {
        lock(&self.inner.cache).active_slide_id.clone()
    }

    pub fn set_event_sink(&self, sink: EventSink) {
        *lock(&self.inner.sink) = Some(sink);
    }

    // =========================================================================
    // SLIDES
    // =========================================================================

    pub fn attach_slide(&self, config: SlideConfig) -> SlideKey {
        lock(&self.inner.slides).attach(config)
    }

    pub fn update_slide(&self, key: SlideKey, config: SlideConfig) -> bool {
        lock(&self.inner.slides).update(key, config)
    }

    pub fn detach_slide(&self, key: SlideKey) -> bool {
        lock(&self.inner.slides).detach(key)
    }

    pub fn reorder_slides(&self, document_order: &[SlideKey]) {
        lock(&self.inner.slides).reorder(document_order);
    }

    #[must_use]
    pub fn slide_id(&self, key: SlideKey) -> Option<String> {
        lock(&self.inner.slides).assigned_id(key).map(str::to_owned)
    }

    /// Status of a slide against an active id (usually the reactive mirror).
    #[must_use]
    pub fn slide_status(&self, key: SlideKey, active: Option<&str>) -> SlideStatus {
        if !self.is_registered() {
            return SlideStatus::Unregistered;
        }
        SlideStatus::from_ids(self.slide_id(key).as_deref(), active)
    }

    /// Rendering contract for a slide in `status` under this deck's gate.
    #[must_use]
    pub fn presentation(&self, status: SlideStatus) -> SlidePresentation {
        slide_presentation(self.show_interactive(), self.inner.options.enable_in_production, status)
    }

    #[must_use]
    pub fn is_slide_active(&self, key: SlideKey) -> bool {
        let Some(deck_id) = self.deck_id() else {
            return false;
        };
        let active = self.inner.registry.get_active_slide(deck_id);
        self.slide_status(key, active.as_deref()).is_active()
    }

    /// Snapshot of one slide's metadata and state.
    #[must_use]
    pub fn slide_data(&self, key: SlideKey) -> Option<SlideData> {
        let deck_id = self.deck_id()?.to_owned();
        let (id, config) = {
            let slides = lock(&self.inner.slides);
            (slides.assigned_id(key).map(str::to_owned), slides.config(key)?.clone())
        };
        Some(SlideData {
            id,
            label: config.label,
            ai_prompt: config.ai_prompt,
            notes: config.notes,
            confidence: config.confidence.map(|c| c.value()),
            is_active: self.is_slide_active(key),
            deck_id,
        })
    }

    /// Make the given slide active. Already-active slides are a no-op success.
    pub fn activate_slide(&self, key: SlideKey) -> bool {
        let Some(deck_id) = self.deck_id() else {
            return false;
        };
        let Some(slide_id) = self.slide_id(key) else {
            warn!("deck {deck_id:?}: cannot activate a slide before discovery");
            return false;
        };
        if self.inner.registry.get_active_slide(deck_id).as_deref() == Some(slide_id.as_str()) {
            return true;
        }
        self.inner.registry.set_active_slide(deck_id, &slide_id)
    }

    // =========================================================================
    // DISCOVERY & REGISTRATION
    // =========================================================================

    /// Run one discovery pass and register with the registry if the slide set
    /// changed. Returns whether the deck is registered afterwards.
    pub fn discover(&self) -> bool {
        let Some(deck_id) = self.deck_id().map(str::to_owned) else {
            return false;
        };
        let found = lock(&self.inner.slides).discover(&deck_id);

        if found.is_empty() {
            let (was_registered, should_warn) = {
                let mut cache = lock(&self.inner.cache);
                let was_registered = cache.registered;
                let should_warn = !cache.warned_empty;
                cache.slides.clear();
                cache.registered = false;
                cache.active_slide_id = None;
                cache.warned_empty = true;
                (was_registered, should_warn)
            };
            if should_warn {
                warn!("{}", DeckConfigError::NoSlides { deck_id: deck_id.clone() });
            }
            if was_registered {
                self.inner.registry.remove_deck(&deck_id);
                self.emit(&DeckEvent::Unregistered { deck_id });
            }
            return false;
        }

        let known_to_registry = self.inner.registry.get_deck_metadata(&deck_id).is_some();
        let needs_registration = {
            let mut cache = lock(&self.inner.cache);
            let changed = !cache.registered || cache.slides != found || !known_to_registry;
            cache.slides.clone_from(&found);
            cache.warned_empty = false;
            cache.registered = true;
            changed
        };
        if !needs_registration {
            return true;
        }

        let summaries: Vec<SlideSummary> = found
            .iter()
            .map(|slide| SlideSummary {
                id: slide.id.clone(),
                label: slide.label.clone(),
                ai_prompt: slide.ai_prompt.clone(),
                notes: slide.notes.clone(),
                confidence: slide.confidence,
            })
            .collect();
        let label = self.display_label();
        let registration = DeckRegistration::new(deck_id.clone(), found.iter().map(|s| s.id.clone()))
            .with_label(label.clone())
            .interactive(self.inner.options.interactive)
            .with_slides(summaries)
            .enable_in_production(self.inner.options.enable_in_production);
        self.inner.registry.register_deck(registration);

        self.handle_registry_change(&self.inner.registry.snapshot());
        self.emit(&DeckEvent::Registered { deck_id, label, slide_count: found.len() });
        true
    }

    /// Discovery pass only when nothing has been discovered yet.
    fn ensure_discovered(&self) {
        let empty = lock(&self.inner.cache).slides.is_empty();
        if empty {
            self.discover();
        }
    }

    /// Diff a registry notification against the cached active slide.
    ///
    /// Returns `true` when the active slide changed; the caller should then
    /// schedule a re-render. A `slide-change` event fires for changes between
    /// two known slides.
    pub fn handle_registry_change(&self, state: &RegistryState) -> bool {
        let Some(deck_id) = self.deck_id() else {
            return false;
        };
        let current = state.active_slide(deck_id).map(str::to_owned);
        let previous = {
            let mut cache = lock(&self.inner.cache);
            if cache.active_slide_id == current {
                return false;
            }
            std::mem::replace(&mut cache.active_slide_id, current.clone())
        };

        if let (Some(previous), Some(current)) = (previous, current) {
            let slide_index = state
                .deck(deck_id)
                .and_then(|record| record.slide_index(&current))
                .unwrap_or(0);
            self.emit(&DeckEvent::SlideChange {
                deck_id: deck_id.to_owned(),
                previous_slide_id: Some(previous),
                current_slide_id: current,
                slide_index,
            });
        }
        true
    }

    /// Remove this deck from the registry. Safe to call more than once.
    pub fn unregister(&self) {
        let Some(deck_id) = self.deck_id().map(str::to_owned) else {
            return;
        };
        let was_registered = {
            let mut cache = lock(&self.inner.cache);
            let was = cache.registered;
            cache.registered = false;
            cache.active_slide_id = None;
            was
        };
        if was_registered {
            self.inner.registry.remove_deck(&deck_id);
            self.emit(&DeckEvent::Unregistered { deck_id });
        }
    }

    // =========================================================================
    // PUBLIC DECK API
    // =========================================================================

    #[must_use]
    pub fn info(&self) -> DeckInfo {
        let cache = lock(&self.inner.cache);
        let env = self.inner.registry.environment();
        DeckInfo {
            id: self.deck_id().map(str::to_owned),
            label: self.display_label(),
            prompt: self.inner.options.prompt.clone(),
            description: self.inner.options.description.clone(),
            slide_count: cache.slides.len(),
            active_slide_id: cache.active_slide_id.clone(),
            is_production: env.is_production(),
            enable_in_production: self.inner.options.enable_in_production,
            show_interactive: env.show_interactive(self.inner.options.enable_in_production),
            is_registered: cache.registered,
        }
    }

    #[must_use]
    pub fn all_slides(&self) -> Vec<DiscoveredSlide> {
        lock(&self.inner.cache).slides.clone()
    }

    #[must_use]
    pub fn current_slide(&self) -> Option<DiscoveredSlide> {
        let deck_id = self.deck_id()?;
        let active = self.inner.registry.get_active_slide(deck_id)?;
        lock(&self.inner.cache)
            .slides
            .iter()
            .find(|slide| slide.id == active)
            .cloned()
    }

    pub fn navigate_to_next(&self) -> bool {
        self.navigate(NavCommand::Next)
    }

    pub fn navigate_to_prev(&self) -> bool {
        self.navigate(NavCommand::Previous)
    }

    pub fn navigate_to_first(&self) -> bool {
        self.navigate(NavCommand::First)
    }

    pub fn navigate_to_last(&self) -> bool {
        self.navigate(NavCommand::Last)
    }

    /// Step through slides with wraparound. `false` for decks with at most
    /// one slide or that are not registered.
    pub fn navigate(&self, command: NavCommand) -> bool {
        let Some(deck_id) = self.deck_id() else {
            return false;
        };
        self.ensure_discovered();
        let slide_ids = self.cached_slide_ids();
        let current = self.inner.registry.get_active_slide(deck_id);
        let Some(target) = step(&slide_ids, current.as_deref(), command) else {
            return false;
        };
        self.inner.registry.set_active_slide(deck_id, target)
    }

    /// Jump to a slide by id. `false` for unknown ids or decks with at most
    /// one slide.
    pub fn navigate_to_slide(&self, slide_id: &str) -> bool {
        let Some(deck_id) = self.deck_id() else {
            return false;
        };
        self.ensure_discovered();
        let slide_ids = self.cached_slide_ids();
        if slide_ids.len() <= 1 {
            return false;
        }
        if !slide_ids.iter().any(|id| id == slide_id) {
            warn!("deck {deck_id:?}: no slide with id {slide_id:?}");
            return false;
        }
        self.inner.registry.set_active_slide(deck_id, slide_id)
    }

    fn cached_slide_ids(&self) -> Vec<String> {
        lock(&self.inner.cache)
            .slides
            .iter()
            .map(|slide| slide.id.clone())
            .collect()
    }

    fn emit(&self, event: &DeckEvent) {
        let sink = lock(&self.inner.sink).clone();
        if let Some(sink) = sink {
            sink(event);
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
