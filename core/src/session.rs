//! The engine lifecycle context.
//!
//! [`Session`] owns everything the engine derives from a declaration: the
//! validated table, the pre-built help groups, the version string, and —
//! after the single matching pass — the [`ParseResult`]. It replaces
//! process-global state with an explicit object whose lifecycle is
//! `configure` → `parse` → queries; each of the first two happens at most
//! once.

use crate::group::{Group, build_groups};
use crate::help::{TerminalWidth, render_help, render_option_help};
use crate::matcher::{ParseError, ParseResult, match_args};
use crate::table::OptionTable;
use crate::types::OptionSpec;
use crate::validate::ConfigError;

/// Owner of one configured option engine.
///
/// Construction validates the declaration and pre-renders the help groups;
/// an invalid declaration means no session exists. [`parse`](Session::parse)
/// may run exactly once. All query methods are read-only.
///
/// # Examples
///
/// ```
/// use opt_table_core::{FixedColumns, OptionSpec, Session};
///
/// let mut session = Session::configure(
///     vec![
///         OptionSpec::boolean(Some('v'), Some("verbose"), "Prints verbose messages"),
///         OptionSpec::with_hint(Some('a'), Some("add"), "<money>", "Adds a record"),
///     ],
///     "demo 0.1.0",
/// )
/// .unwrap();
///
/// session.parse(["prog", "-va", "12.50"]).unwrap();
/// assert_eq!(session.boolean_matches(), [0]);
/// assert_eq!(session.value_matches(), [1]);
/// assert_eq!(session.positionals(), ["12.50"]);
/// assert!(session.help(&FixedColumns(80)).contains("--verbose"));
/// ```
#[derive(Debug)]
pub struct Session {
    table: OptionTable,
    groups: Vec<Group>,
    version: String,
    result: Option<ParseResult>,
}

impl Session {
    /// Validates `specs` and builds the session.
    ///
    /// `version` is reported by [`version`](Session::version) and heads the
    /// full help text; an empty or whitespace-only version is a configuration
    /// error, like any broken declaration.
    pub fn configure(specs: Vec<OptionSpec>, version: &str) -> Result<Self, ConfigError> {
        if version.trim().is_empty() {
            return Err(ConfigError::EmptyVersion);
        }
        let table = OptionTable::new(specs)?;
        let groups = build_groups(&table);
        Ok(Self {
            table,
            groups,
            version: version.to_string(),
            result: None,
        })
    }

    /// Runs the single matching pass over `argv` (element 0 is skipped).
    ///
    /// A second call is a usage error: the session already holds its result,
    /// and [`ParseError::AlreadyParsed`] is returned without touching it.
    pub fn parse<I, S>(&mut self, argv: I) -> Result<&ParseResult, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if self.result.is_some() {
            return Err(ParseError::AlreadyParsed);
        }
        let result = match_args(&self.table, argv)?;
        Ok(self.result.insert(result))
    }

    /// The parse result, if [`parse`](Session::parse) has run successfully.
    pub fn parse_result(&self) -> Option<&ParseResult> {
        self.result.as_ref()
    }

    /// Matched boolean option indices (empty before a successful parse).
    pub fn boolean_matches(&self) -> &[usize] {
        self.result
            .as_ref()
            .map(ParseResult::boolean_matches)
            .unwrap_or_default()
    }

    /// Matched non-boolean option indices (empty before a successful parse).
    pub fn value_matches(&self) -> &[usize] {
        self.result
            .as_ref()
            .map(ParseResult::value_matches)
            .unwrap_or_default()
    }

    /// Positional tokens (empty before a successful parse).
    pub fn positionals(&self) -> &[String] {
        self.result
            .as_ref()
            .map(ParseResult::positionals)
            .unwrap_or_default()
    }

    /// The version string supplied at configuration.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The validated option table.
    pub fn table(&self) -> &OptionTable {
        &self.table
    }

    /// Help groups in presentation order.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Full help text for every group.
    pub fn help(&self, width: &dyn TerminalWidth) -> String {
        render_help(&self.groups, &self.version, width)
    }

    /// Help text for the single option named by `id`, or `None` when no
    /// option matches.
    pub fn option_help(&self, id: &str, width: &dyn TerminalWidth) -> Option<String> {
        render_option_help(&self.table, &self.groups, id, width)
    }
}
