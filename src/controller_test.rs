use super::*;
use crate::prefs::MemoryStore;

fn controller(store: MemoryStore) -> ThemeController<MemoryStore> {
    ThemeController::new(store)
}

// =============================================================
// Load scenarios
// =============================================================

#[test]
fn load_with_nothing_stored_leaves_defaults() {
    // Scenario A: fresh visitor, light mode, no write.
    let mut ctl = controller(MemoryStore::new());
    assert_eq!(ctl.load(), None);
    assert_eq!(ctl.theme(), Theme::Light);
}

#[test]
fn load_with_nothing_stored_never_writes() {
    let mut ctl = controller(MemoryStore::new());
    ctl.load();
    assert_eq!(ctl.store.write_count(), 0);
    assert_eq!(ctl.store.get(THEME_KEY), None);
}

#[test]
fn load_with_dark_stored_applies_dark() {
    // Scenario B: returning dark-mode user.
    let mut ctl = controller(MemoryStore::with_theme("dark"));
    let update = ctl.load().unwrap();
    assert!(update.dark);
    assert_eq!(update.label, "Modo Día");
    assert_eq!(ctl.theme(), Theme::Dark);
}

#[test]
fn load_with_light_stored_applies_light() {
    let mut ctl = controller(MemoryStore::with_theme("light"));
    let update = ctl.load().unwrap();
    assert!(!update.dark);
    assert_eq!(update.label, "Modo Noche");
}

#[test]
fn load_never_writes_even_with_a_stored_value() {
    let mut ctl = controller(MemoryStore::with_theme("dark"));
    ctl.load();
    assert_eq!(ctl.store.write_count(), 0);
}

#[test]
fn load_with_unrecognized_value_falls_back_to_light() {
    let mut ctl = controller(MemoryStore::with_theme("sepia"));
    let update = ctl.load().unwrap();
    assert!(!update.dark);
    assert_eq!(update.label, "Modo Noche");
}

// =============================================================
// Toggle scenarios
// =============================================================

#[test]
fn first_click_from_light_goes_dark_and_persists() {
    // Scenario C.
    let mut ctl = controller(MemoryStore::new());
    ctl.load();
    let update = ctl.toggle();
    assert!(update.dark);
    assert_eq!(update.label, "Modo Día");
    assert_eq!(ctl.store.get(THEME_KEY), Some("dark".to_string()));
}

#[test]
fn click_from_stored_dark_goes_light_and_persists() {
    // Scenario D.
    let mut ctl = controller(MemoryStore::with_theme("dark"));
    ctl.load();
    let update = ctl.toggle();
    assert!(!update.dark);
    assert_eq!(update.label, "Modo Noche");
    assert_eq!(ctl.store.get(THEME_KEY), Some("light".to_string()));
}

#[test]
fn toggle_writes_exactly_once_per_click() {
    let mut ctl = controller(MemoryStore::new());
    ctl.load();
    ctl.toggle();
    ctl.toggle();
    ctl.toggle();
    assert_eq!(ctl.store.write_count(), 3);
}

#[test]
fn double_toggle_restores_state_and_stored_value() {
    for seed in ["light", "dark"] {
        let mut ctl = controller(MemoryStore::with_theme(seed));
        ctl.load();
        let before = ctl.theme();
        ctl.toggle();
        ctl.toggle();
        assert_eq!(ctl.theme(), before);
        assert_eq!(ctl.store.get(THEME_KEY), Some(seed.to_string()));
    }
}

// =============================================================
// Invariant: label and class always agree
// =============================================================

#[test]
fn label_and_dark_flag_agree_after_every_click() {
    let mut ctl = controller(MemoryStore::new());
    ctl.load();
    for _ in 0..5 {
        let update = ctl.toggle();
        assert_eq!(update.dark, update.label == "Modo Día");
        // The stored value agrees with the displayed state too.
        let stored = ctl.store.get(THEME_KEY);
        assert_eq!(stored.as_deref() == Some("dark"), update.dark);
    }
}
