//! Text rendering for the margarita meter and the money's-worth banner.

use drinkpass_core::ValueStatus;

use crate::config::Theme;

pub const METER_WIDTH: usize = 20;

/// Draws a horizontal gauge for `percent` (0-100) across `width` cells.
pub fn render_meter(percent: u8, width: usize, theme: Theme) -> String {
    let percent = percent.min(100) as usize;
    let filled = (percent * width + 50) / 100;
    let empty = width - filled;
    match theme {
        Theme::Plain => format!(
            "[{}{}] {}%",
            "#".repeat(filled),
            "-".repeat(empty),
            percent
        ),
        Theme::Iconic => format!(
            "🍹 {}{} {}%",
            "█".repeat(filled),
            "░".repeat(empty),
            percent
        ),
    }
}

pub fn meter_caption(percent: u8, has_package_price: bool) -> String {
    if has_package_price {
        format!("{}% of today's package value used", percent)
    } else {
        "Set your daily package price to start".to_string()
    }
}

/// The one-line verdict for a day. `money` formats amounts in the session currency.
pub fn value_banner(
    status: &ValueStatus,
    day: usize,
    theme: Theme,
    money: impl Fn(f64) -> String,
) -> String {
    let iconic = theme == Theme::Iconic;
    match status {
        ValueStatus::NeedsPackagePrice => "Enter your package price to track value.".to_string(),
        ValueStatus::Reached if iconic => {
            format!("✅ YES! You got your money's worth on Day {} 🎉", day)
        }
        ValueStatus::Reached => format!("YES! You got your money's worth on Day {}", day),
        ValueStatus::Pending { spent, target } => format!(
            "{}Not yet... you're at {} of {}.",
            if iconic { "❌ " } else { "" },
            money(*spent),
            money(*target)
        ),
    }
}
