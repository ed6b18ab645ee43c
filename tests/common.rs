//! Common test helpers for integration tests

use std::path::Path;
use std::process::{Command, Output};

/// Build a `cuit` command isolated from the developer's config.
///
/// `HOME` and the working directory both point at `dir`, so neither the global
/// nor the project config of the machine running the tests is picked up.
pub fn cuit_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cuit"));
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("NO_COLOR", "1")
        .env_remove("CUIT_QUIET");
    cmd
}

/// Run `cuit` with the given arguments inside `dir`.
pub fn run_cuit(dir: &Path, args: &[&str]) -> Output {
    cuit_cmd(dir).args(args).output().expect("failed to run cuit")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
