use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ledger"))
        .args(args)
        // Pin the layout so assertions do not depend on the test terminal.
        .env("COLUMNS", "80")
        .output()
        .expect("failed to run ledger")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ---------------------------------------------------------------------------
// Help rendering
// ---------------------------------------------------------------------------

#[test]
fn full_help_lists_all_groups() {
    let output = run(&["-h"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.starts_with("ledger "), "missing version line: {text}");
    let commands_at = text.find("  Commands\n").expect("Commands header");
    let modifiers_at = text.find("  Modifiers\n").expect("Modifiers header");
    assert!(commands_at < modifiers_at);
    assert!(text.contains("-a, --add"));
    assert!(text.contains("--verbose"));
    assert!(text.contains("Adds an expense or income record"));
}

#[test]
fn long_help_flag_matches_short() {
    let short = stdout(&run(&["-h"]));
    let long = stdout(&run(&["--help"]));
    assert_eq!(short, long);
}

#[test]
fn single_option_help_by_topic() {
    let output = run(&["-h", "delete"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.starts_with("  Commands\n"), "got: {text}");
    assert!(text.contains("-d, --delete <serial_no>"));
    assert!(text.contains("Deletes record of the given serial number"));
    assert!(!text.contains("--add"));
}

#[test]
fn single_option_help_unknown_topic_is_not_fatal() {
    let output = run(&["-h", "bogus"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("no help for \"bogus\""));
}

#[test]
fn help_respects_columns_env() {
    let output = Command::new(env!("CARGO_BIN_EXE_ledger"))
        .args(["-h"])
        .env("COLUMNS", "44")
        .output()
        .expect("failed to run ledger");
    assert!(output.status.success());
    for line in stdout(&output).lines() {
        assert!(line.chars().count() <= 44, "line too wide: {line:?}");
    }
}

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

#[test]
fn bundled_flags_and_positionals_summary() {
    let output = run(&["-ei", "--add", "12.50", "1234", "coffee", "morning"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("booleans: expense, income\n"));
    assert!(text.contains("values: add\n"));
    assert!(text.contains("positionals: 12.50, 1234, coffee, morning\n"));
}

#[test]
fn keyword_token_matches_without_dashes() {
    let output = run(&["now"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("booleans: now\n"));
}

#[test]
fn repeated_flags_are_deduplicated() {
    let output = run(&["--expense", "--expense", "-e"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("booleans: expense\n"));
}

#[test]
fn verbose_summary_includes_json_dump() {
    let output = run(&["-v", "now", "leftover"]);
    assert!(output.status.success());

    let text = stdout(&output);
    let json_start = text.find('{').expect("json dump");
    let value: serde_json::Value =
        serde_json::from_str(&text[json_start..]).expect("valid json dump");
    assert_eq!(value["positionals"][0], "leftover");
}

// ---------------------------------------------------------------------------
// Fatal parse errors
// ---------------------------------------------------------------------------

#[test]
fn unknown_long_flag_fails() {
    let output = run(&["--bogus"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("unknown flag \"--bogus\""));
}

#[test]
fn unknown_short_flag_names_the_character() {
    let output = run(&["-ez"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("unknown flag '-z'"));
}

#[test]
fn bare_dash_fails() {
    let output = run(&["-"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("bare '-'"));
}

#[test]
fn bare_double_dash_fails() {
    let output = run(&["--"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("bare '--'"));
}
