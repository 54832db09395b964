use drinkpass_config::{Config, ConfigManager, Theme};
use drinkpass_domain::MAX_CRUISE_LENGTH;
use tempfile::tempdir;

#[test]
fn default_config_matches_a_week_long_cruise() {
    let cfg = Config::default();

    assert_eq!(cfg.currency, "USD");
    assert!(cfg.confirm_resets);
    assert_eq!(cfg.cruise.length_days, 7);
    assert_eq!(cfg.cruise.package_price_per_day, 90.0);
    assert_eq!(cfg.cruise.default_drink_price, 12.0);
}

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let loaded = manager.load().expect("load config");
    assert_eq!(loaded.theme, Theme::Iconic);
    assert!(manager.config_path().ends_with("config/config.json"));
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));

    let mut cfg = Config::default();
    cfg.currency = "EUR".to_string();
    cfg.theme = Theme::Plain;
    cfg.cruise.length_days = 10;
    cfg.cruise.package_price_per_day = 72.5;

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded.currency, "EUR");
    assert_eq!(loaded.theme, Theme::Plain);
    assert_eq!(loaded.cruise.length_days, 10);
    assert_eq!(loaded.cruise.package_price_per_day, 72.5);
}

#[test]
fn partial_files_fill_in_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{ "locale": "en-GB", "currency": "GBP", "theme": "unknown", "cruise": { "length_days": 0 } }"#,
    )
    .unwrap();

    let loaded = ConfigManager::new(path).load().expect("load config");
    assert_eq!(loaded.theme, Theme::Iconic);
    assert!(loaded.ui_color_enabled);
    assert_eq!(loaded.cruise.default_drink_price, 12.0);

    let session = loaded.cruise.to_cruise_config();
    assert_eq!(session.length_days(), 1);
}

#[test]
fn huge_stored_length_is_capped_for_the_session() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{ "locale": "en-US", "currency": "USD", "cruise": { "length_days": 18446744073709551615 } }"#,
    )
    .unwrap();

    let loaded = ConfigManager::new(path).load().expect("load config");
    let session = loaded.cruise.to_cruise_config();
    assert_eq!(session.length_days(), MAX_CRUISE_LENGTH);
}

#[test]
fn corrupt_file_reports_serde_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = ConfigManager::new(path).load().unwrap_err();
    assert!(err.to_string().starts_with("Serialization error"));
}

#[test]
fn theme_names_parse_loosely() {
    assert_eq!(Theme::parse(" Plain "), Theme::Plain);
    assert_eq!(Theme::parse("iconic"), Theme::Iconic);
    assert_eq!(Theme::parse("neon"), Theme::Iconic);
}
