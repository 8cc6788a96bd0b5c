//! CLI help specs

use crate::prelude::*;

#[test]
fn help_lists_commands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("run")
        .stdout_has("check")
        .stdout_has("probe")
        .stdout_has("history");
}

#[test]
fn run_help_lists_overrides_and_env() {
    cli()
        .args(&["run", "--help"])
        .passes()
        .stdout_has("--url")
        .stdout_has("SLOTWATCH_URL")
        .stdout_has("--times")
        .stdout_has("SLOTWATCH_TIMES");
}

#[test]
fn version_is_printed() {
    cli()
        .args(&["--version"])
        .passes()
        .stdout_has("slotwatch");
}
