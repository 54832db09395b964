use assert_cmd::Command;
use tempfile::TempDir;

/// Runs the CLI in script mode against an isolated home directory.
pub struct ScriptRun {
    pub home: TempDir,
}

impl ScriptRun {
    pub fn new() -> Self {
        Self {
            home: TempDir::new().expect("create temp home"),
        }
    }

    pub fn command(&self, lines: &[&str]) -> assert_cmd::assert::Assert {
        let mut input = lines.join("\n");
        input.push('\n');
        Command::cargo_bin("drinkpass_cli")
            .expect("drinkpass_cli binary")
            .env("DRINKPASS_CLI_SCRIPT", "1")
            .env("DRINKPASS_HOME", self.home.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .write_stdin(input)
            .assert()
    }
}
