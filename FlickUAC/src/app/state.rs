//! Display-list state for the FlickUAC window
//!
//! The in-memory projection of the layer entries currently shown, plus
//! the active language and label table. Rebuilt wholesale on refresh and
//! only ever touched from the UI thread.

use flickuac::locale::{LabelTable, Language};

/// Mutable state shared by the window's event handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Executable paths, one per list row, in list order
    pub entries: Vec<String>,
    pub language: Language,
    pub labels: LabelTable,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            language: Language::English,
            labels: LabelTable::default(),
        }
    }
}

impl AppState {
    /// Path shown on a list row
    pub fn entry_path(&self, row: usize) -> Option<&str> {
        self.entries.get(row).map(String::as_str)
    }

    /// Drop one row after its registry value was deleted
    pub fn remove_entry(&mut self, row: usize) {
        if row < self.entries.len() {
            self.entries.remove(row);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = AppState::default();
        assert!(state.entries.is_empty());
        assert_eq!(state.language, Language::English);
        assert!(!state.labels.get("ReFlash").is_empty());
    }

    #[test]
    fn test_entry_path() {
        let mut state = AppState::default();
        state.entries.push(r"C:\apps\foo.exe".to_string());

        assert_eq!(state.entry_path(0), Some(r"C:\apps\foo.exe"));
        assert_eq!(state.entry_path(1), None);
    }

    #[test]
    fn test_remove_entry() {
        let mut state = AppState::default();
        state.entries.push(r"C:\apps\foo.exe".to_string());
        state.entries.push(r"C:\apps\bar.exe".to_string());

        state.remove_entry(0);
        assert_eq!(state.entry_path(0), Some(r"C:\apps\bar.exe"));

        // Out-of-range rows are ignored
        state.remove_entry(5);
        assert_eq!(state.entries.len(), 1);
    }
}
