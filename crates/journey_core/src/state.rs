//! Application state shared by every view.
//!
//! Owns the [`Selection`] and persists each change to the [`PreferenceStore`]
//! as soon as it happens. Storage problems are logged and never surface to the
//! caller; the in-memory selection stays authoritative.

use crate::catalog;
use crate::models::{Language, Theme};
use crate::selection::{Change, Direction, Selection};
use crate::store::{PreferenceStore, KEY_DARK_MODE, KEY_LANGUAGE, KEY_SELECTED_THEMES};

/// Document-level side effects of preference changes (locale attribute,
/// color-scheme class). Non-UI callers use [`NoEffects`].
pub trait DocumentEffects {
    fn apply_language(&self, language: Language);
    fn apply_dark_mode(&self, dark: bool);
}

pub struct NoEffects;

impl DocumentEffects for NoEffects {
    fn apply_language(&self, _language: Language) {}
    fn apply_dark_mode(&self, _dark: bool) {}
}

pub struct AppState {
    selection: Selection,
    store: Box<dyn PreferenceStore>,
    effects: Box<dyn DocumentEffects>,
}

impl AppState {
    /// Read the persisted preferences synchronously. Missing or malformed
    /// values fall back to defaults.
    pub fn load(store: Box<dyn PreferenceStore>, effects: Box<dyn DocumentEffects>) -> Self {
        let selection = read_selection(store.as_ref());
        effects.apply_language(selection.language);
        effects.apply_dark_mode(selection.dark_mode);
        tracing::debug!(
            themes = selection.len(),
            language = selection.language.code(),
            dark_mode = selection.dark_mode,
            "preferences loaded"
        );
        Self {
            selection,
            store,
            effects,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn language(&self) -> Language {
        self.selection.language
    }

    pub fn dark_mode(&self) -> bool {
        self.selection.dark_mode
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    /// Selected catalog themes in priority order.
    pub fn selected_themes(&self) -> Vec<&'static Theme> {
        catalog::resolve(self.selection.ids().iter().map(String::as_str))
    }

    pub fn toggle(&mut self, id: &str) {
        let change = self.selection.toggle(id);
        self.observe(change);
    }

    pub fn reorder(&mut self, id: &str, direction: Direction) {
        if let Some(change) = self.selection.reorder(id, direction) {
            self.observe(change);
        }
    }

    pub fn move_at(&mut self, index: usize, direction: Direction) {
        if let Some(change) = self.selection.move_at(index, direction) {
            self.observe(change);
        }
    }

    pub fn reset(&mut self) {
        let change = self.selection.reset();
        self.observe(change);
    }

    pub fn set_language(&mut self, language: Language) {
        let change = self.selection.set_language(language);
        self.observe(change);
    }

    pub fn toggle_dark_mode(&mut self) {
        let change = self.selection.toggle_dark_mode();
        self.observe(change);
    }

    /// Remove every persisted key and return to defaults.
    pub fn clear_storage(&mut self) {
        for key in [KEY_SELECTED_THEMES, KEY_LANGUAGE, KEY_DARK_MODE] {
            if let Err(e) = self.store.remove(key) {
                tracing::warn!(key, error = %e, "failed to clear preference");
            }
        }
        self.selection = Selection::default();
        self.effects.apply_language(self.selection.language);
        self.effects.apply_dark_mode(self.selection.dark_mode);
    }

    fn observe(&mut self, change: Change) {
        tracing::debug!(?change, "selection changed");
        let (key, value) = match change {
            Change::Themes => match serde_json::to_string(self.selection.ids()) {
                Ok(json) => (KEY_SELECTED_THEMES, json),
                Err(e) => {
                    tracing::warn!(error = %e, "failed to encode selection");
                    return;
                }
            },
            Change::Language => {
                self.effects.apply_language(self.selection.language);
                (KEY_LANGUAGE, self.selection.language.code().to_string())
            }
            Change::DarkMode => {
                self.effects.apply_dark_mode(self.selection.dark_mode);
                (KEY_DARK_MODE, self.selection.dark_mode.to_string())
            }
        };
        if let Err(e) = self.store.set(key, &value) {
            tracing::warn!(key, error = %e, "failed to persist preference");
        }
    }
}

fn read_selection(store: &dyn PreferenceStore) -> Selection {
    let ids: Vec<String> = store
        .get(KEY_SELECTED_THEMES)
        .and_then(|raw| match serde_json::from_str(&raw) {
            Ok(ids) => Some(ids),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring malformed stored selection");
                None
            }
        })
        .unwrap_or_default();
    let known = ids.into_iter().filter(|id| {
        let ok = catalog::contains(id);
        if !ok {
            tracing::warn!(id = %id, "dropping unknown stored theme id");
        }
        ok
    });

    let mut selection = Selection::from_ids(known);
    selection.language = store
        .get(KEY_LANGUAGE)
        .and_then(|code| Language::from_code(&code))
        .unwrap_or_default();
    selection.dark_mode = store
        .get(KEY_DARK_MODE)
        .and_then(|raw| serde_json::from_str::<bool>(&raw).ok())
        .unwrap_or(false);
    selection
}
