//! Currency display helpers. Amounts stay `f64` everywhere else; rounding
//! happens only here.

use drinkpass_core::format::CurrencyFormatter;

/// ISO 4217 currency representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("USD")
    }
}

/// Separators used when rendering numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleConfig {
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

impl LocaleConfig {
    /// Picks separators from a BCP 47 tag such as `en-US` or `de-DE`.
    pub fn from_tag(tag: &str) -> Self {
        let language = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match language.as_str() {
            "de" | "es" | "it" | "nl" | "pt" => Self {
                decimal_separator: ',',
                grouping_separator: '.',
            },
            "fr" => Self {
                decimal_separator: ',',
                grouping_separator: ' ',
            },
            _ => Self::default(),
        }
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        "AUD" => "A$".into(),
        _ => format!("{} ", code),
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    let body = format!("{:.*}", precision as usize, value.abs());
    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (body.as_str(), None),
    };
    let mut rendered = group_digits(int_part, locale.grouping_separator);
    if let Some(frac) = frac_part {
        rendered.push(locale.decimal_separator);
        rendered.push_str(frac);
    }
    rendered
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped.chars().rev().collect()
}

/// Renders amounts as `$1,234.50`, with the sign ahead of the symbol.
#[derive(Debug, Clone, Default)]
pub struct MoneyFormatter {
    locale: LocaleConfig,
}

impl MoneyFormatter {
    pub fn new(locale_tag: &str) -> Self {
        Self {
            locale: LocaleConfig::from_tag(locale_tag),
        }
    }
}

impl CurrencyFormatter for MoneyFormatter {
    fn format_amount(&self, amount: f64, currency: &str) -> String {
        let code = CurrencyCode::new(currency);
        let precision = minor_units_for(code.as_str());
        let body = format_number(&self.locale, amount, precision);
        let sign = if amount < 0.0 && body.chars().any(|c| c.is_ascii_digit() && c != '0') {
            "-"
        } else {
            ""
        };
        format!("{}{}{}", sign, symbol_for(code.as_str()), body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_dollars_with_two_decimals() {
        let fmt = MoneyFormatter::default();
        assert_eq!(fmt.format_amount(96.0, "usd"), "$96.00");
        assert_eq!(fmt.format_amount(1234.5, "USD"), "$1,234.50");
        assert_eq!(fmt.format_amount(-30.0, "USD"), "-$30.00");
        assert_eq!(fmt.format_amount(-0.001, "USD"), "$0.00");
    }

    #[test]
    fn respects_locale_and_minor_units() {
        let fmt = MoneyFormatter::new("de-DE");
        assert_eq!(fmt.format_amount(1234.5, "EUR"), "€1.234,50");
        assert_eq!(MoneyFormatter::default().format_amount(1500.0, "JPY"), "¥1,500");
        assert_eq!(MoneyFormatter::default().format_amount(5.0, "SEK"), "SEK 5.00");
    }

    #[test]
    fn groups_digits_in_threes() {
        assert_eq!(group_digits("1234567", ','), "1,234,567");
        assert_eq!(group_digits("999", ','), "999");
    }
}
