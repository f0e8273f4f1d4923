use super::*;

#[test]
fn defaults_match_documented_timings() {
    let settings = DeckSettings::default();
    assert_eq!(settings.key_throttle_ms, 100);
    assert_eq!(settings.cleanup_debounce_ms, 100);
    assert_eq!(settings.scroll_settle_ms, 150);
    assert_eq!(settings.scroll_timeout_ms, 3000);
    assert_eq!(settings.highlight_ms, 1500);
    assert_eq!(settings.log_level, LogLevel::Warn);
}

#[test]
fn lookup_overrides_and_falls_back() {
    let settings = DeckSettings::from_lookup(|key| match key {
        "VARIANT_DECK_KEY_THROTTLE_MS" => Some(" 250 "),
        "VARIANT_DECK_HIGHLIGHT_MS" => Some("soon"),
        "VARIANT_DECK_SCROLL_POLL_MS" => Some("0"),
        "VARIANT_DECK_LOG" => Some("DEBUG"),
        _ => None,
    });
    assert_eq!(settings.key_throttle_ms, 250);
    assert_eq!(settings.highlight_ms, DEFAULT_HIGHLIGHT_MS);
    assert_eq!(settings.scroll_poll_ms, 1);
    assert_eq!(settings.log_level, LogLevel::Debug);
}

#[test]
fn empty_lookup_equals_default() {
    assert_eq!(DeckSettings::from_lookup(|_| None), DeckSettings::default());
}

#[test]
fn log_level_parse() {
    assert_eq!(LogLevel::parse("warning"), Some(LogLevel::Warn));
    assert_eq!(LogLevel::parse("error"), Some(LogLevel::Error));
    assert_eq!(LogLevel::parse("loud"), None);
}
