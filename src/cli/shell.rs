use std::{
    fmt,
    io::{self, BufRead},
};

use rustyline::{
    completion::Completer, error::ReadlineError, history::DefaultHistory, Context, Editor, Helper,
    Highlighter, Hinter, Validator,
};
use shell_words::split;

use crate::cli::core::{CliError, CliMode, CommandError, LoopControl, ShellContext};
use crate::cli::io as cli_io;
use crate::cli::output::section;
use crate::cli::registry::completions_after;

pub const SCRIPT_ENV: &str = "DRINKPASS_CLI_SCRIPT";

pub fn run_cli() -> Result<(), CliError> {
    let mode = match std::env::var_os(SCRIPT_ENV) {
        Some(_) => CliMode::Script,
        None => CliMode::Interactive,
    };
    let mut context = ShellContext::new(mode)?;
    match mode {
        CliMode::Script => run_script(&mut context, io::stdin().lock()),
        CliMode::Interactive => run_interactive(&mut context),
    }
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = Editor::<CruiseCompleter, DefaultHistory>::new()?;
    editor.set_helper(Some(CruiseCompleter::new(context)));
    print_welcome(context);

    while context.running {
        let line = match editor.readline(&context.prompt()) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                if context.confirm_exit()? {
                    break;
                }
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };
        if !line.trim().is_empty() {
            editor.add_history_entry(line.trim()).ok();
        }
        if execute(context, &line)? == LoopControl::Exit {
            break;
        }
    }

    cli_io::print_info("Bon voyage!");
    Ok(())
}

/// Runs one command per input line until `exit` or end of input.
pub(crate) fn run_script(context: &mut ShellContext, input: impl BufRead) -> Result<(), CliError> {
    for line in input.lines() {
        if execute(context, &line?)? == LoopControl::Exit {
            break;
        }
    }
    Ok(())
}

fn print_welcome(context: &ShellContext) {
    let cruise = context.tracker.config();
    section("Did I get my money's worth?");
    cli_io::print_info(format!(
        "{} day cruise, package {} per day, drinks around {}.",
        cruise.length_days(),
        context.money(cruise.package_price_per_day),
        context.money(cruise.default_drink_price)
    ));
    cli_io::print_hint("Type `drink` each time you order, `status` to check the meter, `help` for more.");
}

/// Runs a single line and reports command failures without stopping the session.
fn execute(context: &mut ShellContext, line: &str) -> Result<LoopControl, CliError> {
    match dispatch_line(context, line) {
        Ok(LoopControl::Exit) => {
            context.running = false;
            Ok(LoopControl::Exit)
        }
        Ok(LoopControl::Continue) => Ok(LoopControl::Continue),
        Err(err) => {
            context.report_error(err)?;
            Ok(LoopControl::Continue)
        }
    }
}

fn dispatch_line(context: &mut ShellContext, line: &str) -> Result<LoopControl, CommandError> {
    let tokens = parse_command_line(line)
        .map_err(|err| CommandError::InvalidArguments(err.to_string()))?;
    match tokens.split_first() {
        Some((command, _)) if command.starts_with('#') => Ok(LoopControl::Continue),
        Some((command, rest)) => {
            let args: Vec<&str> = rest.iter().map(String::as_str).collect();
            context.dispatch(&command.to_lowercase(), command, &args)
        }
        None => Ok(LoopControl::Continue),
    }
}

/// Completes command names, then each command's argument paths. `help`
/// completes command names as its argument.
#[derive(Helper, Hinter, Highlighter, Validator)]
struct CruiseCompleter {
    table: Vec<(&'static str, &'static [&'static str])>,
}

impl CruiseCompleter {
    fn new(context: &ShellContext) -> Self {
        Self {
            table: context.registry.completion_table(),
        }
    }

    /// Start offset of the word under the cursor and its candidates.
    fn candidates(&self, prefix: &str) -> (usize, Vec<String>) {
        let current = prefix
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or_default();
        let start = prefix.len() - current.len();
        let typed: Vec<&str> = prefix[..start].split_whitespace().collect();
        let needle = current.to_ascii_lowercase();

        let words: Vec<&'static str> = match typed.split_first() {
            None => self.table.iter().map(|(name, _)| *name).collect(),
            Some((command, [])) if command.eq_ignore_ascii_case("help") => {
                self.table.iter().map(|(name, _)| *name).collect()
            }
            Some((command, before)) => self
                .table
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(command))
                .map(|(_, paths)| completions_after(*paths, before))
                .unwrap_or_default(),
        };

        let mut matches: Vec<String> = words
            .into_iter()
            .filter(|word| word.starts_with(&needle))
            .map(str::to_string)
            .collect();
        matches.sort();
        matches.dedup();
        (start, matches)
    }
}

impl Completer for CruiseCompleter {
    type Candidate = String;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        Ok(self.candidates(&line[..pos]))
    }
}

pub(crate) fn parse_command_line(input: &str) -> Result<Vec<String>, ParseError> {
    split(input).map_err(|err| ParseError(err.to_string()))
}

#[derive(Debug)]
pub(crate) struct ParseError(String);

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not read command: {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::core::test_context;

    #[test]
    fn quoted_arguments_stay_together() {
        let tokens = parse_command_line("journal add \"Spicy Margarita\" 5 'salt rim'").unwrap();
        assert_eq!(
            tokens,
            vec!["journal", "add", "Spicy Margarita", "5", "salt rim"]
        );
    }

    #[test]
    fn unbalanced_quotes_are_reported() {
        assert!(parse_command_line("journal add \"Mojito").is_err());
    }

    #[test]
    fn completion_covers_commands_and_arguments() {
        let (context, _home) = test_context();
        let completer = CruiseCompleter::new(&context);

        assert_eq!(completer.candidates("dr"), (0, vec!["drink".to_string()]));
        assert_eq!(
            completer.candidates("day n"),
            (4, vec!["next".to_string()])
        );
        assert_eq!(
            completer.candidates("journal "),
            (8, vec!["add".to_string(), "list".to_string()])
        );
        assert_eq!(
            completer.candidates("tab j"),
            (4, vec!["journal".to_string()])
        );
        assert_eq!(
            completer.candidates("config set th"),
            (11, vec!["theme".to_string()])
        );
        assert_eq!(
            completer.candidates("config set theme p"),
            (17, vec!["plain".to_string()])
        );
        assert_eq!(
            completer.candidates("help sum"),
            (5, vec!["summary".to_string()])
        );
        assert!(completer.candidates("drink 1").1.is_empty());
    }

    #[test]
    fn script_stops_at_exit() {
        let (mut context, _home) = test_context();
        let input = io::Cursor::new("drink\n# comment\nexit\ndrink\n");
        run_script(&mut context, input).unwrap();
        assert_eq!(context.tracker.today().drinks, 1);
        assert!(!context.running);
    }

    #[test]
    fn bad_quoting_does_not_end_the_session() {
        let (mut context, _home) = test_context();
        let input = io::Cursor::new("journal add \"Mojito\ndrink\n");
        run_script(&mut context, input).unwrap();
        assert_eq!(context.tracker.today().drinks, 1);
    }
}
