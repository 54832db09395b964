//! Cruise setup: length and the prices used to judge package value.

use serde::Serialize;

use crate::common::normalize_price;

pub const DEFAULT_CRUISE_LENGTH: usize = 7;
pub const DEFAULT_PACKAGE_PRICE: f64 = 90.0;
pub const DEFAULT_DRINK_PRICE: f64 = 12.0;
/// Longest cruise the tracker will size a ledger for.
pub const MAX_CRUISE_LENGTH: usize = 365;

/// Configuration of a single cruise. `length_days` is always within
/// `1..=MAX_CRUISE_LENGTH`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct CruiseConfig {
    length_days: usize,
    pub package_price_per_day: f64,
    pub default_drink_price: f64,
}

impl Default for CruiseConfig {
    fn default() -> Self {
        Self {
            length_days: DEFAULT_CRUISE_LENGTH,
            package_price_per_day: DEFAULT_PACKAGE_PRICE,
            default_drink_price: DEFAULT_DRINK_PRICE,
        }
    }
}

impl CruiseConfig {
    pub fn new(length_days: usize, package_price_per_day: f64, default_drink_price: f64) -> Self {
        Self {
            length_days: length_days.clamp(1, MAX_CRUISE_LENGTH),
            package_price_per_day: normalize_price(package_price_per_day),
            default_drink_price: normalize_price(default_drink_price),
        }
    }

    pub fn length_days(&self) -> usize {
        self.length_days
    }

    pub fn set_length_days(&mut self, days: usize) {
        self.length_days = days.clamp(1, MAX_CRUISE_LENGTH);
    }

    pub fn has_package_price(&self) -> bool {
        self.package_price_per_day > 0.0
    }

    pub fn has_drink_price(&self) -> bool {
        self.default_drink_price > 0.0
    }
}

/// Clamps a requested cruise length into `1..=MAX_CRUISE_LENGTH`. Non-finite
/// or sub-one values become 1, fractional values are floored.
pub fn normalize_length(raw: f64) -> usize {
    if !raw.is_finite() || raw < 1.0 {
        return 1;
    }
    raw.floor().min(MAX_CRUISE_LENGTH as f64) as usize
}

/// Parses a free-form length field; unparsable input is treated as 1.
pub fn parse_length(input: &str) -> usize {
    input
        .trim()
        .parse::<f64>()
        .map(normalize_length)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_length_clamps_to_one() {
        assert_eq!(normalize_length(0.0), 1);
        assert_eq!(normalize_length(-4.0), 1);
        assert_eq!(normalize_length(f64::NAN), 1);
        assert_eq!(normalize_length(0.6), 1);
        assert_eq!(normalize_length(7.9), 7);
        assert_eq!(normalize_length(14.0), 14);
    }

    #[test]
    fn normalize_length_caps_huge_requests() {
        assert_eq!(normalize_length(1e30), MAX_CRUISE_LENGTH);
        assert_eq!(normalize_length(f64::INFINITY), 1);
        assert_eq!(normalize_length(f64::NEG_INFINITY), 1);
        assert_eq!(normalize_length(366.5), MAX_CRUISE_LENGTH);
        assert_eq!(parse_length("1e30"), MAX_CRUISE_LENGTH);
    }

    #[test]
    fn config_length_is_capped() {
        let mut config = CruiseConfig::new(usize::MAX, 90.0, 12.0);
        assert_eq!(config.length_days(), MAX_CRUISE_LENGTH);
        config.set_length_days(1_000_000);
        assert_eq!(config.length_days(), MAX_CRUISE_LENGTH);
        config.set_length_days(0);
        assert_eq!(config.length_days(), 1);
    }

    #[test]
    fn parse_length_falls_back_to_one() {
        assert_eq!(parse_length("ten"), 1);
        assert_eq!(parse_length(""), 1);
        assert_eq!(parse_length(" 10 "), 10);
    }

    #[test]
    fn new_config_never_has_zero_length() {
        let config = CruiseConfig::new(0, -5.0, 12.0);
        assert_eq!(config.length_days(), 1);
        assert_eq!(config.package_price_per_day, 0.0);
        assert!(!config.has_package_price());
        assert!(config.has_drink_price());
    }

    #[test]
    fn config_serializes_with_length() {
        let json = serde_json::to_string(&CruiseConfig::default()).unwrap();
        assert!(json.contains("\"length_days\":7"));
    }
}
