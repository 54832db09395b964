//! A single drink purchase logged against a cruise day.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{Amounted, Identifiable};

/// Logged drink purchase. Entries are never edited after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DrinkEntry {
    id: Uuid,
    price: f64,
    logged_at: DateTime<Utc>,
}

impl DrinkEntry {
    pub fn new(price: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            price,
            logged_at: Utc::now(),
        }
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn logged_at(&self) -> DateTime<Utc> {
        self.logged_at
    }
}

impl Identifiable for DrinkEntry {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Amounted for DrinkEntry {
    fn amount(&self) -> f64 {
        self.price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_get_distinct_ids() {
        let first = DrinkEntry::new(12.0);
        let second = DrinkEntry::new(12.0);
        assert_ne!(first.id(), second.id());
        assert_eq!(first.amount(), 12.0);
    }
}
