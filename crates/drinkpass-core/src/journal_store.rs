use drinkpass_domain::{Identifiable, JournalEntry, Rating};
use tracing::debug;
use uuid::Uuid;

use crate::CoreError;

pub const MISSING_NAME_MESSAGE: &str = "Give the drink a name!";

/// Rated drinks, newest first. Independent of the cruise length.
#[derive(Debug, Clone, Default)]
pub struct JournalStore {
    entries: Vec<JournalEntry>,
}

impl JournalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and prepends a new entry. The rating is clamped, never
    /// rejected.
    pub fn add_entry(&mut self, name: &str, rating: Rating, notes: &str) -> Result<Uuid, CoreError> {
        let entry = JournalEntry::new(name, rating, notes)
            .ok_or_else(|| CoreError::Validation(MISSING_NAME_MESSAGE.into()))?;
        let id = entry.id();
        debug!(%id, rating = rating.value(), "added journal entry");
        self.entries.insert(0, entry);
        Ok(id)
    }

    pub fn entries(&self) -> &[JournalEntry] {
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
    use drinkpass_domain::NamedEntity;

    #[test]
    fn newest_entry_comes_first() {
        let mut journal = JournalStore::new();
        journal
            .add_entry("Pina Colada", Rating::clamped(4.0), "")
            .unwrap();
        journal
            .add_entry("Spicy Margarita", Rating::clamped(5.0), "Would order again")
            .unwrap();

        let names: Vec<&str> = journal.entries().iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["Spicy Margarita", "Pina Colada"]);
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut journal = JournalStore::new();
        let err = journal.add_entry("  ", Rating::default(), "x").unwrap_err();
        assert_eq!(err, CoreError::Validation(MISSING_NAME_MESSAGE.into()));
        assert!(journal.is_empty());
    }
}
