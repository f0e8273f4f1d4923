use super::*;

// =============================================================
// validate_deck_id
// =============================================================

#[test]
fn validate_deck_id_accepts_safe_ids() {
    assert_eq!(validate_deck_id(Some("buttons")), Ok("buttons".to_owned()));
    assert_eq!(validate_deck_id(Some(" hero_v2-alt ")), Ok("hero_v2-alt".to_owned()));
}

#[test]
fn validate_deck_id_rejects_missing_and_blank() {
    assert_eq!(validate_deck_id(None), Err(DeckConfigError::MissingId));
    assert_eq!(validate_deck_id(Some("   ")), Err(DeckConfigError::MissingId));
}

#[test]
fn validate_deck_id_rejects_unsafe_characters_and_length() {
    assert_eq!(
        validate_deck_id(Some("a b")),
        Err(DeckConfigError::InvalidId { id: "a b".to_owned() })
    );
    assert!(validate_deck_id(Some("x\"]")).is_err());
    assert!(validate_deck_id(Some(&"a".repeat(DECK_ID_MAX_LEN + 1))).is_err());
    assert!(validate_deck_id(Some(&"a".repeat(DECK_ID_MAX_LEN))).is_ok());
}

#[test]
fn config_error_codes_are_stable() {
    assert_eq!(DeckConfigError::MissingId.error_code(), "E_DECK_ID_MISSING");
    assert_eq!(DeckConfigError::InvalidId { id: "x y".into() }.error_code(), "E_DECK_ID_INVALID");
    assert_eq!(DeckConfigError::NoSlides { deck_id: "d".into() }.error_code(), "E_DECK_EMPTY");
}

// =============================================================
// Confidence
// =============================================================

#[test]
fn confidence_clamps_out_of_range_values() {
    assert_eq!(Confidence::new(1.4).map(Confidence::value), Some(1.0));
    assert_eq!(Confidence::new(-0.3).map(Confidence::value), Some(0.0));
    assert_eq!(Confidence::new(0.42).map(Confidence::value), Some(0.42));
    assert_eq!(Confidence::new(f64::NAN), None);
}

#[test]
fn confidence_percent_rounds_for_display() {
    assert_eq!(Confidence::new(0.854).map(Confidence::percent), Some(85));
    assert_eq!(Confidence::new(0.86).map(Confidence::percent), Some(86));
    assert_eq!(Confidence::new(3.0).map(Confidence::percent), Some(100));
}

// =============================================================
// SlideConfig
// =============================================================

#[test]
fn slide_summary_falls_back_to_id_for_blank_label() {
    let config = SlideConfig::new("  ");
    assert_eq!(config.summary("s0").label, "s0");
}

#[test]
fn slide_summary_carries_ai_metadata() {
    let config = SlideConfig {
        label: "Outline".into(),
        ai_prompt: Some("make it subtle".into()),
        notes: Some("*muted*".into()),
        confidence: Confidence::new(0.5),
        ..SlideConfig::default()
    };
    let summary = config.summary("s1");
    assert_eq!(summary.label, "Outline");
    assert_eq!(summary.ai_prompt.as_deref(), Some("make it subtle"));
    assert_eq!(summary.confidence, Some(0.5));
}

#[test]
fn deck_options_default_is_interactive() {
    let options = DeckOptions::new("cards");
    assert_eq!(options.id.as_deref(), Some("cards"));
    assert!(options.interactive);
    assert!(!options.enable_in_production);
}
