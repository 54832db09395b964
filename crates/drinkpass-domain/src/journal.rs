//! Drink journal entries and star ratings.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{Identifiable, NamedEntity};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Star rating in `1..=5`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    /// Clamps any numeric input into range. NaN counts as zero, fractions
    /// are truncated.
    pub fn clamped(raw: f64) -> Self {
        let value = if raw.is_nan() { 0.0 } else { raw.trunc() };
        let bounded = value.clamp(MIN_RATING as f64, MAX_RATING as f64);
        Rating(bounded as u8)
    }

    /// Lenient parse of a form field; non-numeric text clamps to the minimum.
    pub fn parse_lossy(input: &str) -> Self {
        let raw = input.trim().parse::<f64>().unwrap_or(0.0);
        Self::clamped(raw)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Filled and empty stars, e.g. `★★★☆☆`.
    pub fn stars(self) -> String {
        let filled = self.0 as usize;
        let empty = (MAX_RATING - self.0) as usize;
        format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
    }
}

impl Default for Rating {
    fn default() -> Self {
        Rating(MAX_RATING)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, MAX_RATING)
    }
}

/// A named, rated drink worth remembering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JournalEntry {
    id: Uuid,
    name: String,
    rating: Rating,
    notes: String,
    logged_at: DateTime<Utc>,
}

impl JournalEntry {
    /// Builds an entry from raw form input. Returns `None` when the trimmed
    /// name is empty.
    pub fn new(name: &str, rating: Rating, notes: &str) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        Some(Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            rating,
            notes: notes.trim().to_string(),
            logged_at: Utc::now(),
        })
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn has_notes(&self) -> bool {
        !self.notes.is_empty()
    }

    pub fn logged_at(&self) -> DateTime<Utc> {
        self.logged_at
    }
}

impl Identifiable for JournalEntry {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for JournalEntry {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Journal form fields as shown to the user before saving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalDraft {
    pub name: String,
    pub rating: Rating,
    pub notes: String,
}

impl Default for JournalDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            rating: Rating::default(),
            notes: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_clamps_into_range() {
        assert_eq!(Rating::clamped(7.0).value(), 5);
        assert_eq!(Rating::clamped(0.0).value(), 1);
        assert_eq!(Rating::clamped(-2.0).value(), 1);
        assert_eq!(Rating::clamped(3.9).value(), 3);
        assert_eq!(Rating::clamped(f64::NAN).value(), 1);
        assert_eq!(Rating::parse_lossy("great").value(), 1);
        assert_eq!(Rating::parse_lossy(" 4 ").value(), 4);
    }

    #[test]
    fn stars_render_five_slots() {
        assert_eq!(Rating::clamped(3.0).stars(), "★★★☆☆");
        assert_eq!(Rating::default().stars(), "★★★★★");
    }

    #[test]
    fn entry_requires_a_name() {
        assert!(JournalEntry::new("   ", Rating::default(), "notes").is_none());
        let entry = JournalEntry::new(" Mojito ", Rating::clamped(4.0), "  minty ").unwrap();
        assert_eq!(entry.name(), "Mojito");
        assert_eq!(entry.notes(), "minty");
        assert!(entry.has_notes());
    }

    #[test]
    fn draft_defaults_to_five_stars() {
        let draft = JournalDraft::default();
        assert!(draft.name.is_empty());
        assert_eq!(draft.rating.value(), 5);
    }
}
