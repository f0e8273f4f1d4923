//! Timing and logging settings shared by every deck component.
//!
//! Values are baked in at build time from `VARIANT_DECK_*` variables so a
//! WASM bundle needs no runtime configuration source. Anything absent or
//! unparsable falls back to the default.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

pub const DEFAULT_KEY_THROTTLE_MS: u64 = 100;
pub const DEFAULT_CLEANUP_DEBOUNCE_MS: u64 = 100;
pub const DEFAULT_SCROLL_POLL_MS: u64 = 50;
pub const DEFAULT_SCROLL_SETTLE_MS: u64 = 150;
pub const DEFAULT_SCROLL_TIMEOUT_MS: u64 = 3000;
pub const DEFAULT_HIGHLIGHT_MS: u64 = 1500;

/// Console verbosity for browser builds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
}

impl LogLevel {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "error" => Some(Self::Error),
            "warn" | "warning" => Some(Self::Warn),
            "info" => Some(Self::Info),
            "debug" | "trace" => Some(Self::Debug),
            _ => None,
        }
    }

    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn to_log_level(self) -> log::Level {
        match self {
            Self::Error => log::Level::Error,
            Self::Warn => log::Level::Warn,
            Self::Info => log::Level::Info,
            Self::Debug => log::Level::Debug,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeckSettings {
    /// Minimum gap between handled keyboard shortcuts.
    pub key_throttle_ms: u64,
    /// Delay before an empty registry tears the toolbar down.
    pub cleanup_debounce_ms: u64,
    pub scroll_poll_ms: u64,
    /// Scroll position must hold still this long to count as settled.
    pub scroll_settle_ms: u64,
    pub scroll_timeout_ms: u64,
    pub highlight_ms: u64,
    pub log_level: LogLevel,
}

impl Default for DeckSettings {
    fn default() -> Self {
        Self {
            key_throttle_ms: DEFAULT_KEY_THROTTLE_MS,
            cleanup_debounce_ms: DEFAULT_CLEANUP_DEBOUNCE_MS,
            scroll_poll_ms: DEFAULT_SCROLL_POLL_MS,
            scroll_settle_ms: DEFAULT_SCROLL_SETTLE_MS,
            scroll_timeout_ms: DEFAULT_SCROLL_TIMEOUT_MS,
            highlight_ms: DEFAULT_HIGHLIGHT_MS,
            log_level: LogLevel::default(),
        }
    }
}

impl DeckSettings {
    /// Settings from compile-time `VARIANT_DECK_*` variables.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| match key {
            "VARIANT_DECK_KEY_THROTTLE_MS" => option_env!("VARIANT_DECK_KEY_THROTTLE_MS"),
            "VARIANT_DECK_CLEANUP_DEBOUNCE_MS" => option_env!("VARIANT_DECK_CLEANUP_DEBOUNCE_MS"),
            "VARIANT_DECK_SCROLL_POLL_MS" => option_env!("VARIANT_DECK_SCROLL_POLL_MS"),
            "VARIANT_DECK_SCROLL_SETTLE_MS" => option_env!("VARIANT_DECK_SCROLL_SETTLE_MS"),
            "VARIANT_DECK_SCROLL_TIMEOUT_MS" => option_env!("VARIANT_DECK_SCROLL_TIMEOUT_MS"),
            "VARIANT_DECK_HIGHLIGHT_MS" => option_env!("VARIANT_DECK_HIGHLIGHT_MS"),
            "VARIANT_DECK_LOG" => option_env!("VARIANT_DECK_LOG"),
            _ => None,
        })
    }

    /// Settings from an arbitrary key lookup.
    pub fn from_lookup<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Self {
        let parse = |key: &str, default: u64| parse_ms(lookup(key), default);
        Self {
            key_throttle_ms: parse("VARIANT_DECK_KEY_THROTTLE_MS", DEFAULT_KEY_THROTTLE_MS),
            cleanup_debounce_ms: parse("VARIANT_DECK_CLEANUP_DEBOUNCE_MS", DEFAULT_CLEANUP_DEBOUNCE_MS),
            scroll_poll_ms: parse("VARIANT_DECK_SCROLL_POLL_MS", DEFAULT_SCROLL_POLL_MS).max(1),
            scroll_settle_ms: parse("VARIANT_DECK_SCROLL_SETTLE_MS", DEFAULT_SCROLL_SETTLE_MS),
            scroll_timeout_ms: parse("VARIANT_DECK_SCROLL_TIMEOUT_MS", DEFAULT_SCROLL_TIMEOUT_MS),
            highlight_ms: parse("VARIANT_DECK_HIGHLIGHT_MS", DEFAULT_HIGHLIGHT_MS),
            log_level: lookup("VARIANT_DECK_LOG").and_then(LogLevel::parse).unwrap_or_default(),
        }
    }
}

fn parse_ms(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok()).unwrap_or(default)
}
