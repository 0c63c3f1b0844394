//! Selection ordering, persistence on every change, fail-soft loading.

use journey_core::selection::Direction;
use journey_core::store::{KEY_DARK_MODE, KEY_LANGUAGE, KEY_SELECTED_THEMES};
use journey_core::{AppState, DocumentEffects, Language, MemoryStore, NoEffects, PreferenceStore, Selection};
use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::rc::Rc;

fn ids(s: &Selection) -> Vec<&str> {
    s.ids().iter().map(String::as_str).collect()
}

fn load(store: &Rc<MemoryStore>) -> AppState {
    AppState::load(Box::new(store.clone()), Box::new(NoEffects))
}

#[derive(Clone, Default)]
struct RecordingEffects {
    calls: Rc<RefCell<Vec<String>>>,
}

impl DocumentEffects for RecordingEffects {
    fn apply_language(&self, language: Language) {
        self.calls.borrow_mut().push(format!("lang={}", language.code()));
    }
    fn apply_dark_mode(&self, dark: bool) {
        self.calls.borrow_mut().push(format!("dark={}", dark));
    }
}

#[test]
fn toggle_appends_then_removes() {
    let mut s = Selection::default();
    s.toggle("theme-1");
    s.toggle("theme-3");
    s.toggle("theme-2");
    assert_eq!(ids(&s), vec!["theme-1", "theme-3", "theme-2"]);

    s.toggle("theme-3");
    assert_eq!(ids(&s), vec!["theme-1", "theme-2"]);
}

#[test]
fn toggle_twice_restores_prior_order() {
    let mut s = Selection::from_ids(["theme-2", "theme-5"]);
    let before = s.clone();
    s.toggle("theme-1");
    s.toggle("theme-1");
    assert_eq!(s, before);
}

#[test]
fn toggle_sequence_keeps_odd_counted_ids_once() {
    let sequence = [
        "theme-1", "theme-2", "theme-1", "theme-3", "theme-2", "theme-2", "theme-4", "theme-1",
        "theme-4", "theme-4",
    ];
    let mut s = Selection::default();
    for id in sequence {
        s.toggle(id);
    }

    for id in ["theme-1", "theme-2", "theme-3", "theme-4"] {
        let count = sequence.iter().filter(|x| **x == id).count();
        let present = s.ids().iter().filter(|x| x.as_str() == id).count();
        assert_eq!(present, count % 2, "id {id}");
    }
    let mut unique = s.ids().to_vec();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), s.len());
}

#[test]
fn toggle_tolerates_unknown_ids() {
    let mut s = Selection::default();
    s.toggle("not-in-catalog");
    assert!(s.contains("not-in-catalog"));
}

#[test]
fn reorder_swaps_only_neighbours() {
    let mut s = Selection::from_ids(["a", "b", "c", "d"]);
    assert!(s.reorder("c", Direction::Up).is_some());
    assert_eq!(ids(&s), vec!["a", "c", "b", "d"]);

    assert!(s.reorder("a", Direction::Down).is_some());
    assert_eq!(ids(&s), vec!["c", "a", "b", "d"]);
}

#[test]
fn reorder_at_boundaries_is_noop() {
    let mut s = Selection::from_ids(["a", "b", "c"]);
    assert!(s.reorder("a", Direction::Up).is_none());
    assert!(s.reorder("c", Direction::Down).is_none());
    assert!(s.move_at(0, Direction::Up).is_none());
    assert!(s.move_at(2, Direction::Down).is_none());
    assert!(s.move_at(7, Direction::Down).is_none());
    assert!(s.reorder("zzz", Direction::Down).is_none());
    assert_eq!(ids(&s), vec!["a", "b", "c"]);
}

#[test]
fn from_ids_drops_duplicates() {
    let s = Selection::from_ids(["a", "b", "a", "c", "b"]);
    assert_eq!(ids(&s), vec!["a", "b", "c"]);
}

#[test]
fn app_state_defaults_when_storage_empty() {
    let store = Rc::new(MemoryStore::new());
    let app = load(&store);
    assert!(app.selection().is_empty());
    assert_eq!(app.language(), Language::En);
    assert!(!app.dark_mode());
}

#[test]
fn every_mutation_is_persisted() {
    let store = Rc::new(MemoryStore::new());
    let mut app = load(&store);

    app.toggle("theme-1");
    app.toggle("theme-3");
    assert_eq!(
        store.get(KEY_SELECTED_THEMES).as_deref(),
        Some(r#"["theme-1","theme-3"]"#)
    );

    app.reorder("theme-3", Direction::Up);
    assert_eq!(
        store.get(KEY_SELECTED_THEMES).as_deref(),
        Some(r#"["theme-3","theme-1"]"#)
    );

    app.set_language(Language::Fr);
    assert_eq!(store.get(KEY_LANGUAGE).as_deref(), Some("fr"));

    app.toggle_dark_mode();
    assert_eq!(store.get(KEY_DARK_MODE).as_deref(), Some("true"));

    app.reset();
    assert_eq!(store.get(KEY_SELECTED_THEMES).as_deref(), Some("[]"));
}

#[test]
fn state_survives_reload() {
    let store = Rc::new(MemoryStore::new());
    {
        let mut app = load(&store);
        app.toggle("theme-4");
        app.toggle("theme-2");
        app.set_language(Language::Fr);
        app.toggle_dark_mode();
    }
    let app = load(&store);
    assert_eq!(ids(app.selection()), vec!["theme-4", "theme-2"]);
    assert_eq!(app.language(), Language::Fr);
    assert!(app.dark_mode());
}

#[test]
fn malformed_storage_falls_back_to_defaults() {
    let store = Rc::new(MemoryStore::with_entries([
        (KEY_SELECTED_THEMES, "{not json"),
        (KEY_LANGUAGE, "klingon"),
        (KEY_DARK_MODE, "maybe"),
    ]));
    let app = load(&store);
    assert!(app.selection().is_empty());
    assert_eq!(app.language(), Language::En);
    assert!(!app.dark_mode());
}

#[test]
fn unknown_and_duplicate_stored_ids_are_dropped() {
    let store = Rc::new(MemoryStore::with_entries([(
        KEY_SELECTED_THEMES,
        r#"["theme-2","ghost","theme-2","theme-6"]"#,
    )]));
    let app = load(&store);
    assert_eq!(ids(app.selection()), vec!["theme-2", "theme-6"]);
}

#[test]
fn selected_themes_follow_selection_order() {
    let store = Rc::new(MemoryStore::new());
    let mut app = load(&store);
    app.toggle("theme-5");
    app.toggle("unknown");
    app.toggle("theme-1");
    let titles: Vec<&str> = app.selected_themes().iter().map(|t| t.title).collect();
    assert_eq!(titles, vec!["Safety and Security", "Vital Living & Longevity"]);
}

#[test]
fn document_effects_follow_preferences() {
    let store = Rc::new(MemoryStore::with_entries([(KEY_LANGUAGE, "fr")]));
    let effects = RecordingEffects::default();
    let mut app = AppState::load(Box::new(store.clone()), Box::new(effects.clone()));
    app.set_language(Language::En);
    app.toggle_dark_mode();

    assert_eq!(
        *effects.calls.borrow(),
        vec!["lang=fr", "dark=false", "lang=en", "dark=true"]
    );
}

#[test]
fn clear_storage_removes_keys_and_resets() {
    let store = Rc::new(MemoryStore::new());
    let mut app = load(&store);
    app.toggle("theme-1");
    app.set_language(Language::Fr);
    app.clear_storage();

    assert!(store.is_empty());
    assert!(app.selection().is_empty());
    assert_eq!(app.language(), Language::En);
}
