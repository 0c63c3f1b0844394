//! Ordered theme selection plus the two UI preferences.
//!
//! Insertion order is priority order. Every mutation returns the [`Change`] it
//! made so the owner can persist exactly the affected key.

use crate::models::Language;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Which persisted preference a mutation touched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Change {
    Themes,
    Language,
    DarkMode,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<String>,
    pub language: Language,
    pub dark_mode: bool,
}

impl Selection {
    /// Build from stored ids, dropping duplicates (first occurrence wins).
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out = Self::default();
        for id in ids {
            let id = id.into();
            if !out.contains(&id) {
                out.ids.push(id);
            }
        }
        out
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.ids.iter().position(|s| s == id)
    }

    /// Remove `id` if selected, otherwise append it as lowest priority.
    pub fn toggle(&mut self, id: &str) -> Change {
        match self.position(id) {
            Some(i) => {
                self.ids.remove(i);
            }
            None => self.ids.push(id.to_string()),
        }
        Change::Themes
    }

    /// Swap `id` with its neighbour. `None` when `id` is not selected or is
    /// already at that end of the sequence.
    pub fn reorder(&mut self, id: &str, direction: Direction) -> Option<Change> {
        let index = self.position(id)?;
        self.move_at(index, direction)
    }

    pub fn move_at(&mut self, index: usize, direction: Direction) -> Option<Change> {
        if index >= self.ids.len() {
            return None;
        }
        let other = match direction {
            Direction::Up => index.checked_sub(1)?,
            Direction::Down => {
                let next = index + 1;
                if next >= self.ids.len() {
                    return None;
                }
                next
            }
        };
        self.ids.swap(index, other);
        Some(Change::Themes)
    }

    pub fn reset(&mut self) -> Change {
        self.ids.clear();
        Change::Themes
    }

    pub fn set_language(&mut self, language: Language) -> Change {
        self.language = language;
        Change::Language
    }

    pub fn toggle_dark_mode(&mut self) -> Change {
        self.dark_mode = !self.dark_mode;
        Change::DarkMode
    }
}
