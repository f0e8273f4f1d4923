//! The registry store: authoritative deck state plus pub/sub notification.
//!
//! ARCHITECTURE
//! ============
//! `Registry` is a cheap cloneable handle over shared state. Every mutating
//! call follows the same shape: take the state lock, mutate, snapshot, release
//! the lock, then invoke a snapshot of the listener list. Because no lock is
//! held while listeners run, a listener may mutate the registry again (the
//! toolbar auto-selects a deck this way). Snapshots produced during a
//! notification pass are queued and delivered after the current one reaches
//! every listener, so each listener sees states in mutation order and its
//! last delivery matches the registry.
//!
//! TRADE-OFFS
//! ==========
//! Listeners receive a full clone of `RegistryState` rather than a diff.
//! Deck counts are small, and whole-state delivery keeps each subscriber's
//! diffing local to the subscriber.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use indexmap::IndexMap;

use crate::env::Environment;
use crate::nav::{NavCommand, step};
use crate::record::{DeckRecord, DeckRegistration};

type Listener = Arc<dyn Fn(&RegistryState) + Send + Sync>;

/// Snapshot of every registered deck.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistryState {
    /// `deck_id -> active slide id`, mirrored from each record.
    pub active_decks: HashMap<String, String>,
    /// Records in registration order.
    pub deck_metadata: IndexMap<String, DeckRecord>,
    /// Deck targeted by toolbar navigation.
    pub selected_deck_id: Option<String>,
    /// Evaluated from the environment when the snapshot was taken.
    pub is_production: bool,
}

impl RegistryState {
    #[must_use]
    pub fn active_slide(&self, deck_id: &str) -> Option<&str> {
        self.active_decks.get(deck_id).map(String::as_str)
    }

    /// Slide ids for a deck; empty for unknown decks.
    #[must_use]
    pub fn deck_slides(&self, deck_id: &str) -> &[String] {
        self.deck_metadata
            .get(deck_id)
            .map_or(&[], |record| record.slide_ids.as_slice())
    }

    #[must_use]
    pub fn deck(&self, deck_id: &str) -> Option<&DeckRecord> {
        self.deck_metadata.get(deck_id)
    }

    /// Registered deck ids in registration order.
    #[must_use]
    pub fn registered_decks(&self) -> Vec<&str> {
        self.deck_metadata.keys().map(String::as_str).collect()
    }

    /// Interactive deck ids in registration order.
    #[must_use]
    pub fn interactive_decks(&self) -> Vec<&str> {
        self.deck_metadata
            .iter()
            .filter(|(_, record)| record.is_interactive)
            .map(|(id, _)| id.as_str())
            .collect()
    }

    #[must_use]
    pub fn selected_deck(&self) -> Option<&str> {
        self.selected_deck_id.as_deref()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deck_metadata.is_empty()
    }
}

struct Inner {
    state: Mutex<RegistryState>,
    listeners: Mutex<Vec<(u64, Listener)>>,
    next_listener_id: AtomicU64,
    delivery: Mutex<Delivery>,
    env: Environment,
}

/// Pending snapshots and whether a notification pass is draining them.
#[derive(Default)]
struct Delivery {
    draining: bool,
    pending: VecDeque<RegistryState>,
}

/// Shared handle to the deck registry.
#[derive(Clone)]
pub struct Registry {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("state", &*lock(&self.inner.state))
            .field("listeners", &lock(&self.inner.listeners).len())
            .finish_non_exhaustive()
    }
}

impl Registry {
    #[must_use]
    pub fn new(env: Environment) -> Self {
        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(RegistryState::default()),
                listeners: Mutex::new(Vec::new()),
                delivery: Mutex::new(Delivery::default()),
                next_listener_id: AtomicU64::new(1),
                env,
            }),
        }
    }

    #[must_use]
    pub fn environment(&self) -> &Environment {
        &self.inner.env
    }

    // =========================================================================
    // MUTATIONS
    // =========================================================================

    /// Insert or refresh a deck. Safe to call repeatedly with the same input.
    ///
    /// The previous active slide survives when it is still a member of the
    /// new slide list; otherwise the first slide becomes active.
    pub fn register_deck(&self, registration: DeckRegistration) {
        let slides = registration.aligned_slides();
        let DeckRegistration { deck_id, slide_ids, label, is_interactive, enable_in_production, .. } = registration;

        self.mutate(|state| {
            let previous = state
                .deck_metadata
                .get(&deck_id)
                .and_then(|record| record.active_slide_id.clone());
            let active_slide_id = previous
                .filter(|id| slide_ids.contains(id))
                .or_else(|| slide_ids.first().cloned());

            match &active_slide_id {
                Some(active) => {
                    state.active_decks.insert(deck_id.clone(), active.clone());
                }
                None => {
                    state.active_decks.remove(&deck_id);
                }
            }
            state.deck_metadata.insert(
                deck_id,
                DeckRecord { slide_ids, slides, active_slide_id, label, is_interactive, enable_in_production },
            );
        });
    }

    /// Make `slide_id` the active slide of `deck_id`.
    ///
    /// Unknown decks and slides are rejected with a warning and leave the
    /// registry untouched; no notification fires in that case.
    pub fn set_active_slide(&self, deck_id: &str, slide_id: &str) -> bool {
        {
            let state = lock(&self.inner.state);
            let Some(record) = state.deck_metadata.get(deck_id) else {
                log::warn!("set_active_slide: deck {deck_id:?} is not registered");
                return false;
            };
            if !record.contains_slide(slide_id) {
                log::warn!("set_active_slide: slide {slide_id:?} is not part of deck {deck_id:?}");
                return false;
            }
        }

        self.mutate(|state| {
            state.active_decks.insert(deck_id.to_owned(), slide_id.to_owned());
            if let Some(record) = state.deck_metadata.get_mut(deck_id) {
                record.active_slide_id = Some(slide_id.to_owned());
            }
        });
        true
    }

    /// Drop a deck. A removed selection moves to another remaining deck,
    /// preferring interactive ones, or clears when none remain.
    pub fn remove_deck(&self, deck_id: &str) {
        self.mutate(|state| {
            state.active_decks.remove(deck_id);
            state.deck_metadata.shift_remove(deck_id);
            if state.selected_deck_id.as_deref() == Some(deck_id) {
                state.selected_deck_id = state
                    .deck_metadata
                    .iter()
                    .find(|(_, record)| record.is_interactive)
                    .or_else(|| state.deck_metadata.first())
                    .map(|(id, _)| id.clone());
            }
        });
    }

    /// Point toolbar navigation at `deck_id`. No existence check.
    pub fn set_selected_deck(&self, deck_id: impl Into<String>) {
        let deck_id = deck_id.into();
        self.mutate(|state| state.selected_deck_id = Some(deck_id));
    }

    /// Step the active slide of `deck_id`. Returns `false` when the deck is
    /// unknown or has at most one slide.
    pub fn navigate(&self, deck_id: &str, command: NavCommand) -> bool {
        let target = {
            let state = lock(&self.inner.state);
            state.deck_metadata.get(deck_id).and_then(|record| {
                step(&record.slide_ids, record.active_slide_id.as_deref(), command).map(str::to_owned)
            })
        };
        match target {
            Some(slide_id) => self.set_active_slide(deck_id, &slide_id),
            None => false,
        }
    }

    // =========================================================================
    // READS
    // =========================================================================

    #[must_use]
    pub fn get_active_slide(&self, deck_id: &str) -> Option<String> {
        lock(&self.inner.state).active_slide(deck_id).map(str::to_owned)
    }

    #[must_use]
    pub fn get_deck_slides(&self, deck_id: &str) -> Vec<String> {
        lock(&self.inner.state).deck_slides(deck_id).to_vec()
    }

    #[must_use]
    pub fn get_deck_metadata(&self, deck_id: &str) -> Option<DeckRecord> {
        lock(&self.inner.state).deck(deck_id).cloned()
    }

    #[must_use]
    pub fn get_registered_decks(&self) -> Vec<String> {
        lock(&self.inner.state)
            .registered_decks()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    #[must_use]
    pub fn get_interactive_decks(&self) -> Vec<String> {
        lock(&self.inner.state)
            .interactive_decks()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    #[must_use]
    pub fn selected_deck(&self) -> Option<String> {
        lock(&self.inner.state).selected_deck_id.clone()
    }

    #[must_use]
    pub fn is_production(&self) -> bool {
        self.inner.env.is_production()
    }

    /// Full copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> RegistryState {
        let mut state = lock(&self.inner.state).clone();
        state.is_production = self.inner.env.is_production();
        state
    }

    // =========================================================================
    // SUBSCRIPTIONS
    // =========================================================================

    /// Register `listener` to run after every mutating call.
    pub fn subscribe(&self, listener: impl Fn(&RegistryState) + Send + Sync + 'static) -> Subscription {
        let id = self.inner.next_listener_id.fetch_add(1, Ordering::Relaxed);
        lock(&self.inner.listeners).push((id, Arc::new(listener)));
        Subscription { id, registry: Arc::downgrade(&self.inner) }
    }

    fn mutate(&self, apply: impl FnOnce(&mut RegistryState)) {
        let snapshot = {
            let mut state = lock(&self.inner.state);
            apply(&mut state);
            state.clone()
        };
        self.notify(snapshot);
    }

    /// Queue `snapshot` and, unless a pass is already running further up the
    /// stack, deliver every queued snapshot to every listener in order.
    fn notify(&self, mut snapshot: RegistryState) {
        snapshot.is_production = self.inner.env.is_production();
        {
            let mut delivery = lock(&self.inner.delivery);
            delivery.pending.push_back(snapshot);
            if delivery.draining {
                return;
            }
            delivery.draining = true;
        }
        let _drain = DrainGuard(&self.inner.delivery);

        loop {
            let next = {
                let mut delivery = lock(&self.inner.delivery);
                match delivery.pending.pop_front() {
                    Some(next) => next,
                    None => {
                        delivery.draining = false;
                        break;
                    }
                }
            };
            let listeners: Vec<Listener> = lock(&self.inner.listeners)
                .iter()
                .map(|(_, listener)| Arc::clone(listener))
                .collect();
            for listener in listeners {
                listener(&next);
            }
        }
    }
}

/// Resets delivery if a listener panics mid-pass.
struct DrainGuard<'a>(&'a Mutex<Delivery>);

impl Drop for DrainGuard<'_> {
    fn drop(&mut self) {
        let mut delivery = lock(self.0);
        delivery.draining = false;
        delivery.pending.clear();
    }
}

/// Handle returned by [`Registry::subscribe`].
///
/// Dropping it does not unsubscribe; call [`Subscription::unsubscribe`].
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    registry: Weak<Inner>,
}

impl Subscription {
    /// Stop receiving notifications. Idempotent; other listeners are unaffected.
    pub fn unsubscribe(&self) {
        if let Some(inner) = self.registry.upgrade() {
            lock(&inner.listeners).retain(|(id, _)| *id != self.id);
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
