use std::collections::HashMap;

use crate::cli::core::{CommandResult, ShellContext};

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

pub struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
    /// Argument paths offered by tab completion, e.g. `"set theme"`.
    pub completions: &'static [&'static str],
}

impl CommandEntry {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            handler,
            completions: &[],
        }
    }

    pub const fn with_completions(mut self, completions: &'static [&'static str]) -> Self {
        self.completions = completions;
        self
    }
}

/// Commands in registration order, looked up by lowercase name.
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<&'static str, CommandEntry>,
    order: Vec<&'static str>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, entry: CommandEntry) {
        let name = entry.name;
        if self.commands.insert(name, entry).is_none() {
            self.order.push(name);
        }
    }

    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.commands.get(name)
    }

    pub fn list(&self) -> Vec<&CommandEntry> {
        self.order
            .iter()
            .filter_map(|name| self.commands.get(name))
            .collect()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().copied()
    }

    /// Command names paired with their completion paths, for the line editor.
    pub fn completion_table(&self) -> Vec<(&'static str, &'static [&'static str])> {
        self.list()
            .into_iter()
            .map(|entry| (entry.name, entry.completions))
            .collect()
    }

    pub fn handler(&self, name: &str) -> Option<CommandHandler> {
        self.commands.get(name).map(|entry| entry.handler)
    }
}

/// Last words of the completion paths whose leading words equal `before`.
pub fn completions_after(
    paths: &'static [&'static str],
    before: &[&str],
) -> Vec<&'static str> {
    paths
        .iter()
        .copied()
        .filter_map(|path| {
            let words: Vec<&'static str> = path.split(' ').collect();
            let (last, head) = words.split_last()?;
            let matches = head.len() == before.len()
                && head
                    .iter()
                    .zip(before)
                    .all(|(expected, typed)| expected.eq_ignore_ascii_case(typed));
            matches.then_some(*last)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PATHS: &[&str] = &["show", "set", "set theme", "set color", "set theme plain"];

    #[test]
    fn completions_follow_typed_words() {
        assert_eq!(completions_after(PATHS, &[]), vec!["show", "set"]);
        assert_eq!(completions_after(PATHS, &["SET"]), vec!["theme", "color"]);
        assert_eq!(completions_after(PATHS, &["set", "theme"]), vec!["plain"]);
        assert!(completions_after(PATHS, &["show"]).is_empty());
    }
}
