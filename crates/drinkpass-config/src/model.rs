use std::fmt;

use drinkpass_domain::{
    CruiseConfig, DEFAULT_CRUISE_LENGTH, DEFAULT_DRINK_PRICE, DEFAULT_PACKAGE_PRICE,
};
use serde::{de::Deserializer, Deserialize, Serialize};

/// Stores user-configurable CLI preferences and session defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "Config::default_true")]
    pub ui_color_enabled: bool,
    #[serde(default = "Config::default_true")]
    pub confirm_resets: bool,
    #[serde(default)]
    pub cruise: CruiseDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
            theme: Theme::default(),
            ui_color_enabled: true,
            confirm_resets: true,
            cruise: CruiseDefaults::default(),
        }
    }
}

impl Config {
    fn default_true() -> bool {
        true
    }
}

/// Starting values for a new tracking session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CruiseDefaults {
    #[serde(default = "CruiseDefaults::default_length")]
    pub length_days: usize,
    #[serde(default = "CruiseDefaults::default_package_price")]
    pub package_price_per_day: f64,
    #[serde(default = "CruiseDefaults::default_drink_price")]
    pub default_drink_price: f64,
}

impl Default for CruiseDefaults {
    fn default() -> Self {
        Self {
            length_days: DEFAULT_CRUISE_LENGTH,
            package_price_per_day: DEFAULT_PACKAGE_PRICE,
            default_drink_price: DEFAULT_DRINK_PRICE,
        }
    }
}

impl CruiseDefaults {
    fn default_length() -> usize {
        DEFAULT_CRUISE_LENGTH
    }

    fn default_package_price() -> f64 {
        DEFAULT_PACKAGE_PRICE
    }

    fn default_drink_price() -> f64 {
        DEFAULT_DRINK_PRICE
    }

    /// Builds a clamped session config from the stored defaults.
    pub fn to_cruise_config(self) -> CruiseConfig {
        CruiseConfig::new(
            self.length_days,
            self.package_price_per_day,
            self.default_drink_price,
        )
    }

    pub fn from_cruise_config(config: &CruiseConfig) -> Self {
        Self {
            length_days: config.length_days(),
            package_price_per_day: config.package_price_per_day,
            default_drink_price: config.default_drink_price,
        }
    }
}

/// Icon set used by the CLI meter and banners.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Plain,
    #[default]
    Iconic,
}

impl Theme {
    fn from_value(value: Option<String>) -> Self {
        value
            .map(|v| Theme::parse(v.trim()))
            .unwrap_or_default()
    }

    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "plain" => Theme::Plain,
            _ => Theme::Iconic,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Theme::Plain => "plain",
            Theme::Iconic => "iconic",
        };
        f.write_str(label)
    }
}

impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(Theme::from_value(value))
    }
}
