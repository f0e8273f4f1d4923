use super::*;
use registry::{BuildMode, DeckRegistration, NavCommand};
use std::sync::atomic::AtomicBool;

fn dev() -> Environment {
    Environment::fixed(BuildMode::Development)
}

fn prod() -> Environment {
    Environment::fixed(BuildMode::Production)
}

fn registry_with(env: Environment, decks: Vec<DeckRegistration>) -> Registry {
    let registry = Registry::new(env);
    for deck in decks {
        registry.register_deck(deck);
    }
    registry
}

// =============================================================
// ToolbarSlot
// =============================================================

#[test]
fn second_claim_evicts_first() {
    let slot = ToolbarSlot::default();
    let evicted = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&evicted);
    let first = Uuid::new_v4();
    let second = Uuid::new_v4();

    assert!(!slot.claim(first, move || flag.store(true, Ordering::SeqCst)));
    assert!(slot.claim(second, || {}));
    assert!(evicted.load(Ordering::SeqCst));
    assert_eq!(slot.current(), Some(second));
}

#[test]
fn stale_release_keeps_new_holder() {
    let slot = ToolbarSlot::default();
    let first = Uuid::new_v4();
    let second = Uuid::new_v4();
    slot.claim(first, || {});
    slot.claim(second, || {});

    assert!(!slot.release(first));
    assert_eq!(slot.current(), Some(second));
    assert!(slot.release(second));
    assert_eq!(slot.current(), None);
}

// =============================================================
// Decisions
// =============================================================

#[test]
fn visible_in_development_with_interactive_deck() {
    let registry = registry_with(dev(), vec![DeckRegistration::new("a", ["s0", "s1"])]);
    assert!(toolbar_visible(&registry.snapshot(), &dev()));
}

#[test]
fn hidden_without_interactive_decks() {
    let registry = registry_with(dev(), vec![DeckRegistration::new("a", ["s0"]).interactive(false)]);
    assert!(!toolbar_visible(&registry.snapshot(), &dev()));
}

#[test]
fn production_requires_an_override_deck() {
    let plain = registry_with(prod(), vec![DeckRegistration::new("a", ["s0", "s1"])]);
    assert!(!toolbar_visible(&plain.snapshot(), &prod()));

    let overridden = registry_with(
        prod(),
        vec![
            DeckRegistration::new("a", ["s0", "s1"]),
            DeckRegistration::new("b", ["t0"]).enable_in_production(true),
        ],
    );
    assert!(toolbar_visible(&overridden.snapshot(), &prod()));
    assert_eq!(toolbar_phase(true, &plain.snapshot(), &prod()), ToolbarPhase::Hidden);
    assert_eq!(toolbar_phase(false, &overridden.snapshot(), &prod()), ToolbarPhase::Unmounted);
}

#[test]
fn selector_only_for_multiple_interactive_decks() {
    let one = registry_with(
        dev(),
        vec![DeckRegistration::new("a", ["s0"]), DeckRegistration::new("b", ["t0"]).interactive(false)],
    );
    assert!(!show_deck_selector(&one.snapshot()));

    let two = registry_with(dev(), vec![DeckRegistration::new("a", ["s0"]), DeckRegistration::new("b", ["t0"])]);
    assert!(show_deck_selector(&two.snapshot()));
}

#[test]
fn auto_select_picks_first_interactive_until_one_is_selected() {
    let registry = registry_with(
        dev(),
        vec![DeckRegistration::new("a", ["s0"]).interactive(false), DeckRegistration::new("b", ["t0"])],
    );
    assert_eq!(auto_select_deck(&registry.snapshot()), Some("b"));

    registry.set_selected_deck("b");
    assert_eq!(auto_select_deck(&registry.snapshot()), None);
}

#[test]
fn target_ignores_stale_selection() {
    let registry = registry_with(dev(), vec![DeckRegistration::new("a", ["s0"])]);
    registry.set_selected_deck("gone");
    assert_eq!(toolbar_target(&registry.snapshot()), Some("a"));
}

#[test]
fn view_reports_position_and_navigability() {
    let registry = registry_with(
        dev(),
        vec![DeckRegistration::new("buttons", ["s0", "s1", "s2"]).with_label("Buttons")],
    );
    registry.set_active_slide("buttons", "s1");

    let view = toolbar_view(&registry.snapshot()).unwrap();
    assert_eq!(view.deck_label, "Buttons");
    assert_eq!(view.position, 2);
    assert_eq!(view.slide_count, 3);
    assert!(view.can_navigate);
    assert_eq!(view.active.map(|s| s.id).as_deref(), Some("s1"));
}

#[test]
fn single_slide_view_disables_navigation() {
    let registry = registry_with(dev(), vec![DeckRegistration::new("solo", ["only"])]);
    let view = toolbar_view(&registry.snapshot()).unwrap();
    assert!(!view.can_navigate);
    assert_eq!(view.position, 1);
}

// =============================================================
// ToolbarHost
// =============================================================

#[test]
fn host_mounts_only_when_visible_and_cleans_up_when_empty() {
    let registry = Registry::new(dev());
    let host = ToolbarHost::new(registry.clone(), DeckSettings::default());
    assert!(!host.ensure_mounted());

    registry.register_deck(DeckRegistration::new("a", ["s0", "s1"]));
    assert!(host.ensure_mounted());
    assert_eq!(host.phase(), ToolbarPhase::Visible);

    host.cleanup_if_empty();
    assert!(host.mounted().get_untracked());

    registry.remove_deck("a");
    host.cleanup_if_empty();
    assert!(!host.mounted().get_untracked());
}

#[test]
fn display_only_selection_is_never_targeted() {
    let registry = registry_with(
        dev(),
        vec![DeckRegistration::new("display", ["d0", "d1"]).interactive(false), DeckRegistration::new("live", ["l0"])],
    );
    registry.set_selected_deck("live");
    registry.remove_deck("live");
    assert_eq!(registry.selected_deck().as_deref(), Some("display"));

    registry.register_deck(DeckRegistration::new("fresh", ["f0", "f1"]));
    let state = registry.snapshot();
    assert_eq!(toolbar_target(&state), Some("fresh"));
    assert_eq!(auto_select_deck(&state), Some("fresh"));
    assert!(!show_deck_selector(&state));

    registry.navigate(toolbar_target(&state).unwrap(), NavCommand::Next);
    assert_eq!(registry.get_active_slide("fresh").as_deref(), Some("f1"));
    assert_eq!(registry.get_active_slide("display").as_deref(), Some("d0"));
}

#[test]
fn auto_select_replaces_display_only_selection_through_listener() {
    let registry = registry_with(dev(), vec![DeckRegistration::new("display", ["d0"]).interactive(false)]);
    registry.set_selected_deck("display");
    let selector = registry.clone();
    let _sub = registry.subscribe(move |state| {
        if let Some(first) = auto_select_deck(state) {
            selector.set_selected_deck(first);
        }
    });

    registry.register_deck(DeckRegistration::new("fresh", ["f0", "f1"]));
    assert_eq!(registry.selected_deck().as_deref(), Some("fresh"));
    assert_eq!(auto_select_deck(&registry.snapshot()), None);
}

#[test]
fn no_target_without_interactive_decks() {
    let registry = registry_with(dev(), vec![DeckRegistration::new("display", ["d0"]).interactive(false)]);
    registry.set_selected_deck("display");
    let state = registry.snapshot();
    assert_eq!(toolbar_target(&state), None);
    assert_eq!(auto_select_deck(&state), None);
    assert!(toolbar_view(&state).is_none());
}

#[test]
fn shortcuts_pass_through_while_toolbar_is_hidden() {
    let registry = registry_with(prod(), vec![DeckRegistration::new("a", ["s0", "s1"])]);
    assert_eq!(shortcut_target(&registry.snapshot(), &prod()), None);

    registry.register_deck(DeckRegistration::new("b", ["t0", "t1"]).enable_in_production(true));
    assert_eq!(shortcut_target(&registry.snapshot(), &prod()), Some("a"));

    registry.remove_deck("b");
    assert_eq!(shortcut_target(&registry.snapshot(), &prod()), None);
}
