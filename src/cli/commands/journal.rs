use drinkpass_domain::{JournalDraft, NamedEntity, Rating};

use crate::cli::core::{usage_error, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section;
use crate::cli::registry::CommandEntry;

const USAGE: &str = "journal [list|add <name> [rating] [notes...]]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "journal",
        "Remember the drinks worth ordering again",
        USAGE,
        cmd_journal,
    )
    .with_completions(&["add", "list"])]
}

fn cmd_journal(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first().map(|arg| arg.to_ascii_lowercase()) {
        None => list_entries(context),
        Some(action) if action == "list" => list_entries(context),
        Some(action) if action == "add" => add_entry(context, &args[1..]),
        Some(_) => Err(usage_error(USAGE)),
    }
}

fn add_entry(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let mut draft = JournalDraft {
        name: args.first().map(|name| name.to_string()).unwrap_or_default(),
        rating: args
            .get(1)
            .map(|raw| Rating::parse_lossy(raw))
            .unwrap_or_default(),
        notes: args.get(2..).map(|rest| rest.join(" ")).unwrap_or_default(),
    };

    context.tracker.save_journal_draft(&mut draft)?;
    if let Some(entry) = context.tracker.journal().first() {
        io::print_success(format!(
            "Saved {} ({}) to your journal.",
            entry.name(),
            entry.rating()
        ));
    }
    Ok(())
}

fn list_entries(context: &mut ShellContext) -> CommandResult {
    section("Drink journal");
    let entries = context.tracker.journal();
    if entries.is_empty() {
        io::print_hint("No entries yet. Save the drinks you loved with `journal add`.");
        return Ok(());
    }
    for entry in entries {
        io::print_info(format!("  {}  {}", entry.rating().stars(), entry.name()));
        if entry.has_notes() {
            io::print_info(format!("      {}", entry.notes()));
        }
    }
    Ok(())
}
