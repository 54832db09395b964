use std::io;

use drinkpass_core::{
    format::CurrencyFormatter,
    prompt::AlwaysConfirm,
    Confirmation, CoreError, DrinkTracker,
};
use rustyline::error::ReadlineError;
use strsim::levenshtein;
use tracing::{debug, info};

use crate::cli::commands;
use crate::cli::io as cli_io;
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::config::{self, Config, ConfigError, ConfigManager};
use crate::currency::MoneyFormatter;

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Readline(#[from] ReadlineError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("{0}")]
    Command(String),
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        CliError::Command(err.to_string())
    }
}

/// Everything a command handler can touch.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub tracker: DrinkTracker,
    pub config: Config,
    pub config_manager: ConfigManager,
    pub formatter: MoneyFormatter,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let manager = config::default_manager()?;
        Self::with_config_manager(mode, manager)
    }

    pub fn with_config_manager(mode: CliMode, config_manager: ConfigManager) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let config = config_manager.load()?;
        cli_io::apply_config(&config);

        let tracker = DrinkTracker::new(
            config.cruise.to_cruise_config(),
            confirmation_for(mode, &config),
            Box::new(cli_io::WarningNotifier),
        );
        info!(
            mode = ?mode,
            days = tracker.length_days(),
            path = %config_manager.config_path().display(),
            "shell session started"
        );

        Ok(Self {
            mode,
            registry,
            tracker,
            formatter: MoneyFormatter::new(&config.locale),
            config,
            config_manager,
            running: true,
        })
    }

    pub fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub fn prompt(&self) -> String {
        format!(
            "drinkpass[{} day {}/{}]> ",
            self.tracker.active_tab(),
            self.tracker.current_day(),
            self.tracker.length_days()
        )
    }

    /// Formats an amount in the configured currency.
    pub fn money(&self, amount: f64) -> String {
        self.formatter.format_amount(amount, &self.config.currency)
    }

    /// Re-applies output, currency and confirmation settings after a config
    /// change. Session data is kept.
    pub fn apply_preferences(&mut self) {
        cli_io::apply_config(&self.config);
        self.formatter = MoneyFormatter::new(&self.config.locale);
        self.tracker
            .set_confirmation(confirmation_for(self.mode, &self.config));
    }

    pub fn persist_config(&self) -> CommandResult {
        self.config_manager.save(&self.config)?;
        Ok(())
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            debug!(command, ?args, "dispatching command");
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let best = self
            .registry
            .names()
            .map(|key| (levenshtein(key, &input.to_lowercase()), key))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, name)) = best {
            if distance <= 3 {
                cli_io::print_info(format!("Suggestion: `{}`?", name));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        cli_io::confirm_action("Exit shell?").map_err(CliError::from)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            // Already surfaced through the alert channel.
            CommandError::Core(CoreError::Validation(_)) => Ok(()),
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(&message);
                cli_io::print_hint("Use `help <command>` for usage details.");
                Ok(())
            }
            other => {
                cli_io::print_error(other);
                Ok(())
            }
        }
    }
}

fn confirmation_for(mode: CliMode, config: &Config) -> Box<dyn Confirmation> {
    if mode == CliMode::Script || !config.confirm_resets {
        Box::new(AlwaysConfirm)
    } else {
        Box::new(cli_io::TerminalConfirmation)
    }
}

pub(crate) fn usage_error(usage: &str) -> CommandError {
    CommandError::InvalidArguments(format!("usage: {}", usage))
}

#[cfg(test)]
pub(crate) fn test_context() -> (ShellContext, tempfile::TempDir) {
    let home = tempfile::tempdir().unwrap();
    let manager = config::manager_with_base(home.path().to_path_buf()).unwrap();
    let context = ShellContext::with_config_manager(CliMode::Script, manager).unwrap();
    (context, home)
}

#[cfg(test)]
pub(crate) fn process_script(
    lines: &[&str],
) -> Result<(ShellContext, tempfile::TempDir), CliError> {
    let (mut context, home) = test_context();
    let input = std::io::Cursor::new(lines.join("\n"));
    crate::cli::shell::run_script(&mut context, input)?;
    Ok((context, home))
}

#[cfg(test)]
mod tests {
    use super::*;
    use drinkpass_domain::{NamedEntity, ViewTab};

    #[test]
    fn script_logs_drinks_on_current_day() {
        let (app, _home) = process_script(&["day 2", "drink", "drink 15"]).unwrap();
        let today = app.tracker.today();
        assert_eq!(today.day, 2);
        assert_eq!(today.drinks, 2);
        assert_eq!(today.total_spend, 27.0);
    }

    #[test]
    fn shrinking_length_moves_current_day() {
        let (app, _home) = process_script(&["day 7", "length 3"]).unwrap();
        assert_eq!(app.tracker.current_day(), 3);
        assert_eq!(app.tracker.length_days(), 3);
    }

    #[test]
    fn bad_length_clamps_instead_of_failing() {
        let (app, _home) = process_script(&["length lots"]).unwrap();
        assert_eq!(app.tracker.length_days(), 1);
    }

    #[test]
    fn rejected_drink_keeps_ledger_empty() {
        let (app, _home) = process_script(&["package 0", "drink"]).unwrap();
        assert!(app.tracker.drinks_today().is_empty());
    }

    #[test]
    fn reset_in_script_mode_is_confirmed() {
        let (app, _home) = process_script(&["drink", "drink", "reset"]).unwrap();
        assert!(app.tracker.drinks_today().is_empty());
    }

    #[test]
    fn journal_and_tab_commands() {
        let (app, _home) =
            process_script(&["journal add \" Mojito \" 7 minty", "tab journal"]).unwrap();
        assert_eq!(app.tracker.active_tab(), ViewTab::Journal);
        assert_eq!(app.tracker.journal()[0].name(), "Mojito");
        assert_eq!(app.tracker.journal()[0].rating().value(), 5);
    }

    #[test]
    fn exit_stops_processing() {
        let (app, _home) = process_script(&["exit", "drink"]).unwrap();
        assert!(app.tracker.drinks_today().is_empty());
    }

    #[test]
    fn prompt_shows_view_and_day() {
        let (app, _home) = process_script(&["day next"]).unwrap();
        assert_eq!(app.prompt(), "drinkpass[tracker day 2/7]> ");
    }
}
