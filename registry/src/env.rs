//! Environment policy: development vs. production classification.
//!
//! DESIGN
//! ======
//! Classification is computed lazily on first access because the signals it
//! reads (a document attribute in the browser) may not exist when the
//! environment handle is constructed. The result is cached until
//! [`Environment::invalidate`] is called. Tests pin the mode with
//! [`Environment::force_mode`], which bypasses detection entirely.

#[cfg(test)]
#[path = "env_test.rs"]
mod env_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

/// Build-time classification of the hosting environment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    #[default]
    Development,
    Production,
}

impl BuildMode {
    /// Parse `production`/`prod` or `development`/`dev` (case-insensitive).
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Some(Self::Production),
            "development" | "dev" => Some(Self::Development),
            _ => None,
        }
    }

    /// Mode baked in at compile time.
    ///
    /// `VARIANT_DECK_ENV` wins when set to a recognized value; otherwise
    /// release builds are production and debug builds are development.
    #[must_use]
    pub fn from_build_flags() -> Self {
        option_env!("VARIANT_DECK_ENV")
            .and_then(Self::parse)
            .unwrap_or(if cfg!(debug_assertions) { Self::Development } else { Self::Production })
    }
}

/// Single predicate shared by decks, slides, and the toolbar.
#[must_use]
pub fn should_show_interactive(is_development: bool, enable_in_production: bool) -> bool {
    is_development || enable_in_production
}

type Detector = Box<dyn Fn() -> BuildMode + Send + Sync>;

struct EnvInner {
    detect: Detector,
    cached: Mutex<Option<BuildMode>>,
    forced: Mutex<Option<BuildMode>>,
}

/// Cloneable handle to the lazily computed environment classification.
#[derive(Clone)]
pub struct Environment {
    inner: Arc<EnvInner>,
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment")
            .field("cached", &*lock(&self.inner.cached))
            .field("forced", &*lock(&self.inner.forced))
            .finish_non_exhaustive()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::with_detector(BuildMode::from_build_flags)
    }
}

impl Environment {
    /// Environment that classifies with `detect` on first access.
    pub fn with_detector(detect: impl Fn() -> BuildMode + Send + Sync + 'static) -> Self {
        Self {
            inner: Arc::new(EnvInner {
                detect: Box::new(detect),
                cached: Mutex::new(None),
                forced: Mutex::new(None),
            }),
        }
    }

    /// Environment with a fixed classification.
    #[must_use]
    pub fn fixed(mode: BuildMode) -> Self {
        Self::with_detector(move || mode)
    }

    /// Current classification. Forced mode wins over the cached detection.
    #[must_use]
    pub fn mode(&self) -> BuildMode {
        if let Some(forced) = *lock(&self.inner.forced) {
            return forced;
        }
        let mut cached = lock(&self.inner.cached);
        if let Some(mode) = *cached {
            return mode;
        }
        let mode = (self.inner.detect)();
        log::debug!("environment classified as {mode:?}");
        *cached = Some(mode);
        mode
    }

    #[must_use]
    pub fn is_development_mode(&self) -> bool {
        self.mode() == BuildMode::Development
    }

    #[must_use]
    pub fn is_production(&self) -> bool {
        self.mode() == BuildMode::Production
    }

    /// Whether interactive (development-like) behavior applies to a deck
    /// with the given override flag.
    #[must_use]
    pub fn show_interactive(&self, enable_in_production: bool) -> bool {
        should_show_interactive(self.is_development_mode(), enable_in_production)
    }

    /// Drop the cached detection so the next access re-runs the detector.
    pub fn invalidate(&self) {
        *lock(&self.inner.cached) = None;
    }

    /// Pin the classification for deterministic tests. `None` resets.
    pub fn force_mode(&self, mode: Option<BuildMode>) {
        *lock(&self.inner.forced) = mode;
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
