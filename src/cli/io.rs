use std::fmt;

use dialoguer::{theme::ColorfulTheme, Confirm};
use drinkpass_core::{Confirmation, Notifier};
use tracing::warn;

use crate::cli::core::CommandError;
use crate::cli::output::{self, OutputPreferences};
use crate::config::{Config, Theme};

/// Print an informational message via the standard CLI output helpers.
pub fn print_info(message: impl fmt::Display) {
    output::info(message);
}

pub fn print_warning(message: impl fmt::Display) {
    output::warning(message);
}

pub fn print_error(message: impl fmt::Display) {
    output::error(message);
}

pub fn print_success(message: impl fmt::Display) {
    output::success(message);
}

pub fn print_hint(message: impl fmt::Display) {
    output::hint(message);
}

/// Prompt the user for confirmation with a yes/no question.
pub fn confirm_action(prompt: &str) -> Result<bool, CommandError> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(CommandError::from)
}

/// Pushes presentation settings from the config into the output layer.
pub fn apply_config(config: &Config) {
    output::set_preferences(OutputPreferences {
        plain_labels: config.theme == Theme::Plain,
        color: config.ui_color_enabled,
    });
}

/// Asks on the terminal before destructive actions.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalConfirmation;

impl Confirmation for TerminalConfirmation {
    fn confirm(&self, prompt: &str) -> bool {
        confirm_action(prompt).unwrap_or_else(|err| {
            warn!(%err, "confirmation prompt failed; treating as declined");
            false
        })
    }
}

/// Surfaces validation messages as CLI warnings.
#[derive(Debug, Default, Clone, Copy)]
pub struct WarningNotifier;

impl Notifier for WarningNotifier {
    fn alert(&self, message: &str) {
        print_warning(message);
    }
}
