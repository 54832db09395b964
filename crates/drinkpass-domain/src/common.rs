//! Shared traits and small enums used across the tracker.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Exposes a stable identifier for logged entries.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Provides read-only access to an entity's display name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Supplies a common contract for retrieving currency amounts.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// The two views of the tracker.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewTab {
    #[default]
    Tracker,
    Journal,
}

impl ViewTab {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "tracker" | "daily" => Some(ViewTab::Tracker),
            "journal" => Some(ViewTab::Journal),
            _ => None,
        }
    }
}

impl fmt::Display for ViewTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ViewTab::Tracker => "tracker",
            ViewTab::Journal => "journal",
        };
        f.write_str(label)
    }
}

/// Clamps a currency input to a non-negative finite amount. NaN and
/// negative values collapse to zero.
pub fn normalize_price(raw: f64) -> f64 {
    if raw.is_finite() && raw > 0.0 {
        raw
    } else {
        0.0
    }
}

/// Parses a free-form price field, treating anything unparsable as zero.
pub fn parse_price(input: &str) -> f64 {
    input
        .trim()
        .trim_start_matches('$')
        .parse::<f64>()
        .map(normalize_price)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_price_rejects_negative_and_nan() {
        assert_eq!(normalize_price(-3.0), 0.0);
        assert_eq!(normalize_price(f64::NAN), 0.0);
        assert_eq!(normalize_price(f64::INFINITY), 0.0);
        assert_eq!(normalize_price(12.5), 12.5);
    }

    #[test]
    fn parse_price_accepts_dollar_prefix() {
        assert_eq!(parse_price("$9.75"), 9.75);
        assert_eq!(parse_price(" 14 "), 14.0);
        assert_eq!(parse_price("cheap"), 0.0);
    }

    #[test]
    fn view_tab_parses_known_labels() {
        assert_eq!(ViewTab::parse("Journal"), Some(ViewTab::Journal));
        assert_eq!(ViewTab::parse("tracker"), Some(ViewTab::Tracker));
        assert_eq!(ViewTab::parse("menu"), None);
        assert_eq!(ViewTab::default().to_string(), "tracker");
    }
}
