//! Toolbar singleton slot, mount host, and visibility decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Exactly one `<DeckToolbar>` should exist per registry. The composition root
//! owns a `ToolbarSlot` and a `ToolbarHost`; decks ask the host to mount the
//! toolbar after they register and to tear it down once the last deck is
//! gone. Everything that decides what the toolbar shows is a pure function of
//! a `RegistryState` snapshot.

#[cfg(test)]
#[path = "toolbar_test.rs"]
mod toolbar_test;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use leptos::prelude::*;
use registry::{Environment, Registry, RegistryState, SlideSummary};
use uuid::Uuid;

use crate::state::settings::DeckSettings;

type EvictFn = Box<dyn FnOnce() + Send + Sync>;

/// Single-instance guard for the toolbar.
#[derive(Clone, Default)]
pub struct ToolbarSlot {
    holder: Arc<Mutex<Option<(Uuid, EvictFn)>>>,
}

impl std::fmt::Debug for ToolbarSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolbarSlot").field("current", &self.current()).finish()
    }
}

impl ToolbarSlot {
    /// Take the slot for `id`. A previous holder is evicted through its
    /// callback; returns `true` when that happened.
    pub fn claim(&self, id: Uuid, on_evict: impl FnOnce() + Send + Sync + 'static) -> bool {
        let previous = lock(&self.holder).replace((id, Box::new(on_evict)));
        match previous {
            Some((old_id, evict)) if old_id != id => {
                leptos::logging::warn!("deck toolbar {old_id} replaced by {id}; only one toolbar may be mounted");
                evict();
                true
            }
            _ => false,
        }
    }

    /// Clear the slot if `id` still holds it. Stale teardown after a
    /// replacement is a no-op.
    pub fn release(&self, id: Uuid) -> bool {
        let mut holder = lock(&self.holder);
        if holder.as_ref().is_some_and(|(current, _)| *current == id) {
            *holder = None;
            return true;
        }
        false
    }

    #[must_use]
    pub fn current(&self) -> Option<Uuid> {
        lock(&self.holder).as_ref().map(|(id, _)| *id)
    }
}

// =============================================================================
// DECISIONS
// =============================================================================

/// Toolbar lifecycle as seen by the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolbarPhase {
    Unmounted,
    /// Mounted but rendering nothing (production without override).
    Hidden,
    Visible,
}

/// Visible when some registered deck passes the environment gate and at
/// least one interactive deck exists.
#[must_use]
pub fn toolbar_visible(state: &RegistryState, env: &Environment) -> bool {
    let any_allowed = state
        .deck_metadata
        .values()
        .any(|record| env.show_interactive(record.enable_in_production));
    any_allowed && !state.interactive_decks().is_empty()
}

#[must_use]
pub fn toolbar_phase(mounted: bool, state: &RegistryState, env: &Environment) -> ToolbarPhase {
    match (mounted, toolbar_visible(state, env)) {
        (false, _) => ToolbarPhase::Unmounted,
        (true, false) => ToolbarPhase::Hidden,
        (true, true) => ToolbarPhase::Visible,
    }
}

#[must_use]
pub fn show_deck_selector(state: &RegistryState) -> bool {
    state.interactive_decks().len() > 1
}

/// Deck to auto-select: the first interactive deck, whenever the current
/// selection is empty, stale, or names a display-only deck.
#[must_use]
pub fn auto_select_deck(state: &RegistryState) -> Option<&str> {
    if selected_interactive(state).is_some() {
        return None;
    }
    state.interactive_decks().first().copied()
}

/// Deck the toolbar currently drives. Only interactive decks qualify.
#[must_use]
pub fn toolbar_target(state: &RegistryState) -> Option<&str> {
    selected_interactive(state).or_else(|| state.interactive_decks().first().copied())
}

/// Deck a keyboard shortcut should drive. `None` while the toolbar is
/// hidden, in which case the chord must pass through to the page.
#[must_use]
pub fn shortcut_target<'a>(state: &'a RegistryState, env: &Environment) -> Option<&'a str> {
    if !toolbar_visible(state, env) {
        return None;
    }
    toolbar_target(state)
}

fn selected_interactive(state: &RegistryState) -> Option<&str> {
    state
        .selected_deck()
        .filter(|id| state.deck(id).is_some_and(|record| record.is_interactive))
}

/// Everything the navigation row and metadata panel render.
#[derive(Clone, Debug, PartialEq)]
pub struct ToolbarView {
    pub deck_id: String,
    pub deck_label: String,
    pub slide_count: usize,
    /// One-based position of the active slide; 0 when none is active.
    pub position: usize,
    pub can_navigate: bool,
    pub active: Option<SlideSummary>,
}

#[must_use]
pub fn toolbar_view(state: &RegistryState) -> Option<ToolbarView> {
    let deck_id = toolbar_target(state)?;
    let record = state.deck(deck_id)?;
    let position = state
        .active_slide(deck_id)
        .and_then(|active| record.slide_index(active))
        .map_or(0, |index| index + 1);
    Some(ToolbarView {
        deck_id: deck_id.to_owned(),
        deck_label: record.display_label(deck_id).to_owned(),
        slide_count: record.slide_ids.len(),
        position,
        can_navigate: record.slide_ids.len() > 1,
        active: record.active_summary().cloned(),
    })
}

// =============================================================================
// HOST
// =============================================================================

/// Mount control handed to decks through context.
#[derive(Clone)]
pub struct ToolbarHost {
    registry: Registry,
    slot: ToolbarSlot,
    mounted: RwSignal<bool>,
    settings: DeckSettings,
    cleanup_generation: Arc<AtomicU64>,
}

impl ToolbarHost {
    #[must_use]
    pub fn new(registry: Registry, settings: DeckSettings) -> Self {
        Self {
            registry,
            slot: ToolbarSlot::default(),
            mounted: RwSignal::new(false),
            settings,
            cleanup_generation: Arc::new(AtomicU64::new(0)),
        }
    }

    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    #[must_use]
    pub fn slot(&self) -> &ToolbarSlot {
        &self.slot
    }

    #[must_use]
    pub fn settings(&self) -> &DeckSettings {
        &self.settings
    }

    #[must_use]
    pub fn mounted(&self) -> Signal<bool> {
        self.mounted.into()
    }

    #[must_use]
    pub fn phase(&self) -> ToolbarPhase {
        toolbar_phase(self.mounted.get_untracked(), &self.registry.snapshot(), self.registry.environment())
    }

    /// Mount the toolbar if it is absent and visibility allows it. Cancels a
    /// pending cleanup.
    pub fn ensure_mounted(&self) -> bool {
        self.cleanup_generation.fetch_add(1, Ordering::Relaxed);
        if self.mounted.get_untracked() {
            return true;
        }
        if !toolbar_visible(&self.registry.snapshot(), self.registry.environment()) {
            return false;
        }
        self.mounted.set(true);
        true
    }

    /// Unmount once no decks remain. Debounced in the browser; the registry
    /// is checked when the timer fires, and a later schedule or mount
    /// supersedes this one.
    pub fn cleanup_if_empty(&self) {
        let generation = self.cleanup_generation.fetch_add(1, Ordering::Relaxed) + 1;
        let host = self.clone();
        let run = move || {
            if host.cleanup_generation.load(Ordering::Relaxed) == generation && host.registry.snapshot().is_empty() {
                host.mounted.set(false);
            }
        };

        #[cfg(feature = "hydrate")]
        {
            let delay = u32::try_from(self.settings.cleanup_debounce_ms).unwrap_or(u32::MAX);
            gloo_timers::callback::Timeout::new(delay, run).forget();
        }
        #[cfg(not(feature = "hydrate"))]
        run();
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
