//! Library - Saved story titles
//!
//! Insertion-ordered and duplicate-suppressing. Only the formatted title is
//! kept; the story text and audio are not.

use serde::{Deserialize, Serialize};

/// A saved library line, `"{title} ({level})"`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct LibraryEntry(String);

impl LibraryEntry {
    pub fn new(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive substring match; an empty term matches everything
    pub fn matches(&self, term: &str) -> bool {
        self.0.to_lowercase().contains(&term.trim().to_lowercase())
    }
}

impl std::fmt::Display for LibraryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Library {
    entries: Vec<LibraryEntry>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append unless an equal entry exists. Returns whether it was added.
    pub fn save(&mut self, entry: LibraryEntry) -> bool {
        if self.entries.contains(&entry) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    pub fn search(&self, term: &str) -> Vec<&LibraryEntry> {
        self.entries.iter().filter(|e| e.matches(term)).collect()
    }

    pub fn entries(&self) -> &[LibraryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_is_idempotent() {
        let mut library = Library::new();
        assert!(library.save(LibraryEntry::new("🚀 Leo's Animals Adventure (A1)")));
        assert!(!library.save(LibraryEntry::new("🚀 Leo's Animals Adventure (A1)")));
        assert_eq!(library.len(), 1);
    }

    #[test]
    fn test_keeps_insertion_order() {
        let mut library = Library::new();
        library.save(LibraryEntry::new("b"));
        library.save(LibraryEntry::new("a"));
        library.save(LibraryEntry::new("b"));
        let titles: Vec<&str> = library.entries().iter().map(|e| e.as_str()).collect();
        assert_eq!(titles, vec!["b", "a"]);
    }

    #[test]
    fn test_search_ignores_case() {
        let mut library = Library::new();
        library.save(LibraryEntry::new("🚀 Leo's Courage Adventure (A2)"));
        library.save(LibraryEntry::new("🚀 Mia's Focus Adventure (B1)"));

        assert_eq!(library.search("courage").len(), 1);
        assert_eq!(library.search("ADVENTURE").len(), 2);
        assert_eq!(library.search("").len(), 2);
        assert!(library.search("dragon").is_empty());
    }
}
