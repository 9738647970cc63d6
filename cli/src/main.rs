//! Demonstration driver: a small expense/income ledger front-end.
//!
//! Declares a fixed option set through the engine, runs the single matching
//! pass over the real argument vector, and either prints help or a summary
//! of what matched. Domain logic (what an expense record *is*) is out of
//! scope — this binary exists to exercise declaration, matching, and help
//! rendering end to end.

use opt_table_core::{EnvColumns, OptionSpec, Session};

const VERSION: &str = concat!("ledger ", env!("CARGO_PKG_VERSION"));

fn declare_options() -> Vec<OptionSpec> {
    vec![
        OptionSpec::with_hint(
            Some('h'),
            Some("help"),
            "[option]",
            "Prints help for every option or the named one",
        )
        .in_group("Commands"),
        OptionSpec::with_hint(
            Some('a'),
            Some("add"),
            "<money> <last_4_digits> <item> <remark>",
            "Adds an expense or income record",
        )
        .in_group("Commands"),
        OptionSpec::with_hint(
            Some('f'),
            Some("fetch"),
            "[yymmdd]",
            "Fetches all records of the specified day or today",
        )
        .in_group("Commands"),
        OptionSpec::with_hint(
            Some('d'),
            Some("delete"),
            "<serial_no>",
            "Deletes record of the given serial number",
        )
        .in_group("Commands"),
        OptionSpec::with_hint(
            None,
            Some("sort"),
            "<new/old/high/low>",
            "Sorts records in the given order",
        )
        .in_group("Commands"),
        OptionSpec::with_hint(
            None,
            Some("from"),
            "<yymmdd/yymm/yyww/yy>",
            "Provides a start point for range operations (inclusive)",
        )
        .in_group("Commands"),
        OptionSpec::with_hint(
            None,
            Some("to"),
            "<yymmdd/yymm/yyww/yy>",
            "Provides a finish point for range operations (inclusive)",
        )
        .in_group("Commands"),
        OptionSpec::boolean(Some('e'), Some("expense"), "Does expense-related operations only")
            .in_group("Modifiers"),
        OptionSpec::boolean(Some('i'), Some("income"), "Does income-related operations only")
            .in_group("Modifiers"),
        OptionSpec::boolean(Some('w'), Some("week"), "Signals the date string in format of yyww")
            .in_group("Modifiers"),
        OptionSpec::boolean(Some('v'), Some("verbose"), "Prints verbose messages")
            .in_group("Modifiers"),
        OptionSpec::boolean(None, Some("now"), "Gets today's date information")
            .with_keyword("now")
            .in_group("Modifiers"),
    ]
}

fn main() {
    let argv: Vec<String> = std::env::args().collect();

    let mut session = match Session::configure(declare_options(), VERSION) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("ledger: configuration error: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = session.parse(&argv) {
        eprintln!("ledger: {err}");
        std::process::exit(1);
    }

    let verbose = is_matched(&session, "verbose");
    if verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
        tracing::debug!("verbose logging enabled");
    }

    if is_matched(&session, "help") {
        print_help(&session);
        return;
    }

    print_summary(&session, verbose);
}

/// True when the option named `id` was matched on the command line.
fn is_matched(session: &Session, id: &str) -> bool {
    session
        .table()
        .find_id(id)
        .is_some_and(|index| {
            session.boolean_matches().contains(&index) || session.value_matches().contains(&index)
        })
}

fn print_help(session: &Session) {
    let width = EnvColumns;
    if let Some(topic) = session.positionals().first() {
        match session.option_help(topic, &width) {
            Some(text) => print!("{text}"),
            None => println!("no help for {topic:?}; run --help for the full listing"),
        }
        return;
    }
    print!("{}", session.help(&width));
}

fn print_summary(session: &Session, verbose: bool) {
    println!("{}", session.version());
    println!("booleans: {}", matched_names(session, session.boolean_matches()));
    println!("values: {}", matched_names(session, session.value_matches()));
    println!("positionals: {}", session.positionals().join(", "));

    if verbose
        && let Some(result) = session.parse_result()
        && let Ok(json) = serde_json::to_string_pretty(result)
    {
        println!("{json}");
    }
}

fn matched_names(session: &Session, indices: &[usize]) -> String {
    indices
        .iter()
        .filter_map(|&index| session.table().get(index))
        .map(canonical_name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Long name preferred, then keyword, then the short flag.
fn canonical_name(spec: &OptionSpec) -> String {
    if let Some(long) = spec.long.as_deref().filter(|s| !s.is_empty()) {
        return long.to_string();
    }
    if let Some(keyword) = spec.keyword.as_deref().filter(|s| !s.is_empty()) {
        return keyword.to_string();
    }
    spec.short.map(String::from).unwrap_or_default()
}
