use crate::cli::core::{usage_error, CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::config::{CruiseDefaults, Theme};

const USAGE: &str = "config [show|save|set <key> <value>]";
const SET_USAGE: &str = "config set <currency|locale|theme|color|confirm-resets> <value>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "View and change saved preferences",
        USAGE,
        cmd_config,
    )
    .with_completions(&[
        "show",
        "save",
        "set",
        "set currency",
        "set locale",
        "set theme",
        "set color",
        "set confirm-resets",
        "set theme plain",
        "set theme iconic",
        "set color on",
        "set color off",
        "set confirm-resets on",
        "set confirm-resets off",
    ])]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first().map(|arg| arg.to_ascii_lowercase()) {
        None => show(context),
        Some(action) if action == "show" => show(context),
        Some(action) if action == "save" => save_cruise_defaults(context),
        Some(action) if action == "set" => {
            if args.len() < 3 {
                return Err(usage_error(SET_USAGE));
            }
            set_value(context, args[1], &args[2..].join(" "))
        }
        Some(_) => Err(usage_error(USAGE)),
    }
}

fn show(context: &mut ShellContext) -> CommandResult {
    let json = serde_json::to_string_pretty(&context.config)?;
    io::print_info(format!("Config file: {}", context.config_manager.config_path().display()));
    println!("{}", json);
    Ok(())
}

/// Stores the current cruise setup as the starting point for new sessions.
fn save_cruise_defaults(context: &mut ShellContext) -> CommandResult {
    context.config.cruise = CruiseDefaults::from_cruise_config(context.tracker.config());
    context.persist_config()?;
    io::print_success("Cruise defaults saved.");
    Ok(())
}

fn set_value(context: &mut ShellContext, key: &str, value: &str) -> CommandResult {
    let value = value.trim();
    match key.to_ascii_lowercase().as_str() {
        "currency" => context.config.currency = value.to_ascii_uppercase(),
        "locale" => context.config.locale = value.to_string(),
        "theme" => context.config.theme = Theme::parse(value),
        "color" => context.config.ui_color_enabled = parse_flag(value)?,
        "confirm-resets" | "confirm_resets" => context.config.confirm_resets = parse_flag(value)?,
        other => {
            return Err(CommandError::InvalidArguments(format!(
                "unknown config key `{}`; {}",
                other, SET_USAGE
            )))
        }
    }
    context.apply_preferences();
    context.persist_config()?;
    io::print_success(format!("{} updated.", key));
    Ok(())
}

fn parse_flag(value: &str) -> Result<bool, CommandError> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        other => Err(CommandError::InvalidArguments(format!(
            "expected on/off, got `{}`",
            other
        ))),
    }
}
