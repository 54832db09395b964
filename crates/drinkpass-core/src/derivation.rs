//! Pure figures derived from the ledger and the cruise prices.
//!
//! Nothing here is cached; callers recompute from current state whenever
//! they render.

use std::fmt;

use drinkpass_domain::{Amounted, CruiseConfig, DrinkEntry};

use crate::ledger_store::LedgerStore;

/// Sum of logged prices. No rounding is applied.
pub fn total_spend(entries: &[DrinkEntry]) -> f64 {
    entries.iter().map(Amounted::amount).sum()
}

/// Share of the package price covered by `total`, rounded and capped at 100.
/// Zero when no package price is set.
pub fn fill_percent(total: f64, package_price: f64) -> u8 {
    if package_price.is_nan() || package_price <= 0.0 {
        return 0;
    }
    let percent = (total / package_price * 100.0).round();
    if percent.is_nan() || percent <= 0.0 {
        0
    } else {
        percent.min(100.0) as u8
    }
}

/// True once logged value meets a positive package price.
pub fn got_value_worth(total: f64, package_price: f64) -> bool {
    package_price > 0.0 && total >= package_price
}

/// Average-priced drinks needed to match the package price.
pub fn break_even_drinks(package_price: f64, drink_price: f64) -> Option<BreakEven> {
    let usable = |value: f64| value.is_finite() && value > 0.0;
    if !usable(package_price) || !usable(drink_price) {
        return None;
    }
    Some(BreakEven(package_price / drink_price))
}

/// Continuous break-even ratio. Displays with one decimal place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakEven(f64);

impl BreakEven {
    pub fn ratio(self) -> f64 {
        self.0
    }

    /// Nearest tenth to the exact stored ratio, ties going up. The tie test
    /// uses a fused multiply-add so `0.35` (stored just below) rounds to `0.3`.
    pub fn rounded(self) -> f64 {
        let tenths = (self.0 * 10.0).floor();
        let above_midpoint = self.0.mul_add(10.0, -(tenths + 0.5));
        let tenths = if above_midpoint >= 0.0 {
            tenths + 1.0
        } else {
            tenths
        };
        tenths / 10.0
    }
}

impl fmt::Display for BreakEven {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.rounded())
    }
}

/// What the "money's worth" banner should say for a day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueStatus {
    NeedsPackagePrice,
    Reached,
    Pending { spent: f64, target: f64 },
}

impl ValueStatus {
    pub fn evaluate(total: f64, package_price: f64) -> Self {
        if package_price.is_nan() || package_price <= 0.0 {
            ValueStatus::NeedsPackagePrice
        } else if got_value_worth(total, package_price) {
            ValueStatus::Reached
        } else {
            ValueStatus::Pending {
                spent: total,
                target: package_price,
            }
        }
    }
}

/// Everything the tracker view shows for one day.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySummary {
    pub day: usize,
    pub drinks: usize,
    pub total_spend: f64,
    pub fill_percent: u8,
    pub got_value_worth: bool,
    pub break_even: Option<BreakEven>,
    pub status: ValueStatus,
}

pub fn summarize_day(day: usize, entries: &[DrinkEntry], config: &CruiseConfig) -> DaySummary {
    let total = total_spend(entries);
    let package = config.package_price_per_day;
    DaySummary {
        day,
        drinks: entries.len(),
        total_spend: total,
        fill_percent: fill_percent(total, package),
        got_value_worth: got_value_worth(total, package),
        break_even: break_even_drinks(package, config.default_drink_price),
        status: ValueStatus::evaluate(total, package),
    }
}

/// Day-by-day roll-up across the whole cruise.
#[derive(Debug, Clone, PartialEq)]
pub struct CruiseSummary {
    pub days: Vec<DaySummary>,
    pub total_spend: f64,
    pub package_total: f64,
    pub days_worth_it: usize,
}

impl CruiseSummary {
    /// Logged value minus what the package cost over the cruise.
    pub fn net_value(&self) -> f64 {
        self.total_spend - self.package_total
    }
}

pub fn summarize_cruise(store: &LedgerStore, config: &CruiseConfig) -> CruiseSummary {
    let days: Vec<DaySummary> = (1..=config.length_days())
        .map(|day| summarize_day(day, &store.drinks_for(day), config))
        .collect();
    let total_spend: f64 = days.iter().map(|day| day.total_spend).sum();
    let days_worth_it = days.iter().filter(|day| day.got_value_worth).count();
    CruiseSummary {
        package_total: config.package_price_per_day * config.length_days() as f64,
        total_spend,
        days_worth_it,
        days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_percent_caps_and_rounds() {
        assert_eq!(fill_percent(96.0, 90.0), 100);
        assert_eq!(fill_percent(45.0, 90.0), 50);
        assert_eq!(fill_percent(10.0, 90.0), 11);
        assert_eq!(fill_percent(0.0, 90.0), 0);
    }

    #[test]
    fn fill_percent_is_zero_without_package_price() {
        assert_eq!(fill_percent(50.0, 0.0), 0);
        assert_eq!(fill_percent(50.0, -10.0), 0);
        assert_eq!(fill_percent(50.0, f64::NAN), 0);
    }

    #[test]
    fn value_worth_needs_positive_package() {
        assert!(!got_value_worth(500.0, 0.0));
        assert!(got_value_worth(90.0, 90.0));
        assert!(!got_value_worth(89.99, 90.0));
    }

    #[test]
    fn break_even_keeps_fraction() {
        let ratio = break_even_drinks(90.0, 12.0).unwrap();
        assert_eq!(ratio.to_string(), "7.5");
        assert_eq!(ratio.ratio(), 7.5);
        assert_eq!(break_even_drinks(100.0, 3.0).unwrap().to_string(), "33.3");
        assert_eq!(break_even_drinks(0.25, 1.0).unwrap().to_string(), "0.3");
    }

    #[test]
    fn break_even_rounds_the_stored_value_not_its_decimal_spelling() {
        // 7 / 20 is stored as 0.34999999999999997...
        assert_eq!(break_even_drinks(7.0, 20.0).unwrap().to_string(), "0.3");
        assert_eq!(break_even_drinks(7.0, 20.0).unwrap().rounded(), 0.3);
        assert_eq!(break_even_drinks(1.0, 4.0).unwrap().to_string(), "0.3");
        assert_eq!(break_even_drinks(45.0, 4.0).unwrap().to_string(), "11.3");
        assert_eq!(break_even_drinks(90.0, 11.0).unwrap().to_string(), "8.2");
    }

    #[test]
    fn break_even_absent_without_prices() {
        assert!(break_even_drinks(0.0, 12.0).is_none());
        assert!(break_even_drinks(90.0, 0.0).is_none());
    }

    #[test]
    fn status_reports_progress() {
        assert_eq!(ValueStatus::evaluate(10.0, 0.0), ValueStatus::NeedsPackagePrice);
        assert_eq!(ValueStatus::evaluate(91.0, 90.0), ValueStatus::Reached);
        assert_eq!(
            ValueStatus::evaluate(24.0, 90.0),
            ValueStatus::Pending {
                spent: 24.0,
                target: 90.0
            }
        );
    }

    #[test]
    fn cruise_summary_counts_worthwhile_days() {
        let config = CruiseConfig::new(3, 20.0, 10.0);
        let mut store = LedgerStore::with_length(3);
        store.add_drink(1, 10.0).unwrap();
        store.add_drink(1, 10.0).unwrap();
        store.add_drink(3, 10.0).unwrap();

        let summary = summarize_cruise(&store, &config);
        assert_eq!(summary.days.len(), 3);
        assert_eq!(summary.days_worth_it, 1);
        assert_eq!(summary.total_spend, 30.0);
        assert_eq!(summary.package_total, 60.0);
        assert_eq!(summary.net_value(), -30.0);
    }
}
