//! Per-day drink ledgers kept in step with the cruise length.

use std::sync::Arc;

use drinkpass_domain::{DrinkEntry, Identifiable};
use tracing::debug;
use uuid::Uuid;

use crate::CoreError;

/// Immutable view of one day's drinks. Cloning is cheap and a snapshot is
/// never affected by later writes to the store.
pub type DaySnapshot = Arc<[DrinkEntry]>;

/// Owns one drink list per cruise day. Days are 1-based externally.
#[derive(Debug, Clone, Default)]
pub struct LedgerStore {
    days: Vec<DaySnapshot>,
}

impl LedgerStore {
    /// Creates an unsized store. Every lookup returns an empty day until
    /// [`LedgerStore::resize`] is called.
    pub fn new() -> Self {
        Self { days: Vec::new() }
    }

    pub fn with_length(length: usize) -> Self {
        let mut store = Self::new();
        store.resize(length);
        store
    }

    /// Number of tracked days; zero while unsized.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_sized(&self) -> bool {
        !self.days.is_empty()
    }

    /// Pads with empty days or drops trailing days (and their drinks).
    /// A zero length is lifted to one.
    pub fn resize(&mut self, length: usize) {
        let length = length.max(1);
        let before = self.days.len();
        if length > before {
            self.days.resize_with(length, empty_day);
        } else {
            self.days.truncate(length);
        }
        if before != length {
            debug!(before, after = length, "resized day ledger");
        }
    }

    /// Appends a drink to `day`, replacing that day's list with a fresh one.
    pub fn add_drink(&mut self, day: usize, price: f64) -> Result<Uuid, CoreError> {
        let index = self.index_of(day)?;
        let entry = DrinkEntry::new(price);
        let id = entry.id();
        let current = &self.days[index];
        let mut next = Vec::with_capacity(current.len() + 1);
        next.extend_from_slice(current);
        next.push(entry);
        self.days[index] = next.into();
        debug!(day, price, count = self.days[index].len(), "logged drink");
        Ok(id)
    }

    /// Empties `day`. Other days are untouched.
    pub fn reset_day(&mut self, day: usize) -> Result<(), CoreError> {
        let index = self.index_of(day)?;
        self.days[index] = empty_day();
        debug!(day, "reset day ledger");
        Ok(())
    }

    /// Drinks logged on `day`, or an empty list for unknown days.
    pub fn drinks_for(&self, day: usize) -> DaySnapshot {
        day.checked_sub(1)
            .and_then(|index| self.days.get(index))
            .cloned()
            .unwrap_or_else(empty_day)
    }

    /// Iterates `(day, drinks)` pairs in day order.
    pub fn days(&self) -> impl Iterator<Item = (usize, &DaySnapshot)> + '_ {
        self.days.iter().enumerate().map(|(index, day)| (index + 1, day))
    }

    fn index_of(&self, day: usize) -> Result<usize, CoreError> {
        if day == 0 || day > self.days.len() {
            return Err(CoreError::DayOutOfRange {
                day,
                length: self.days.len(),
            });
        }
        Ok(day - 1)
    }
}

fn empty_day() -> DaySnapshot {
    Arc::from(Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsized_store_returns_empty_days() {
        let store = LedgerStore::new();
        assert!(!store.is_sized());
        assert!(store.drinks_for(1).is_empty());
        assert!(store.drinks_for(0).is_empty());
        assert!(store.drinks_for(42).is_empty());
    }

    #[test]
    fn resize_pads_and_truncates() {
        let mut store = LedgerStore::with_length(3);
        store.add_drink(3, 10.0).unwrap();
        store.resize(5);
        assert_eq!(store.len(), 5);
        assert_eq!(store.drinks_for(3).len(), 1);
        assert!(store.drinks_for(5).is_empty());

        store.resize(2);
        assert_eq!(store.len(), 2);
        store.resize(3);
        assert!(store.drinks_for(3).is_empty(), "truncated drinks must not return");
    }

    #[test]
    fn resize_to_zero_keeps_one_day() {
        let mut store = LedgerStore::with_length(4);
        store.resize(0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn add_drink_rejects_out_of_range_day() {
        let mut store = LedgerStore::with_length(2);
        let err = store.add_drink(3, 12.0).unwrap_err();
        assert_eq!(err, CoreError::DayOutOfRange { day: 3, length: 2 });
        assert_eq!(
            store.add_drink(0, 12.0).unwrap_err(),
            CoreError::DayOutOfRange { day: 0, length: 2 }
        );
    }

    #[test]
    fn snapshots_survive_later_writes() {
        let mut store = LedgerStore::with_length(1);
        store.add_drink(1, 8.0).unwrap();
        let before = store.drinks_for(1);
        store.add_drink(1, 9.0).unwrap();
        store.reset_day(1).unwrap();

        assert_eq!(before.len(), 1);
        assert_eq!(before[0].price(), 8.0);
        assert!(store.drinks_for(1).is_empty());
    }

    #[test]
    fn days_iterates_one_based() {
        let mut store = LedgerStore::with_length(2);
        store.add_drink(2, 5.0).unwrap();
        let counts: Vec<(usize, usize)> = store.days().map(|(day, d)| (day, d.len())).collect();
        assert_eq!(counts, vec![(1, 0), (2, 1)]);
    }
}
