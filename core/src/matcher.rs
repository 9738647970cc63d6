//! Argument-vector matching.
//!
//! A single pass over argv classifies every token against the option table:
//! `--name` long flags, `-abc` bundled short flags, bare keywords, and
//! positionals. Matched options are recorded as table indices, deduplicated
//! in first-seen order, split into boolean and non-boolean lists. The matcher
//! never consumes the tokens following a non-boolean flag — those stay in the
//! positional list, in argv order, for the caller to interpret.

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::table::OptionTable;

/// Errors raised while matching the argument vector.
///
/// All variants are terminal: no [`ParseResult`] exists when matching fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A lone `-` token.
    #[error("bare '-' is not a valid argument")]
    BareDash,
    /// A lone `--` token.
    #[error("bare '--' is not a valid argument")]
    BareDoubleDash,
    /// `--name` did not match any declared long name.
    #[error("unknown flag \"--{0}\"")]
    UnknownLong(String),
    /// A character in a short-flag bundle did not match any declared short flag.
    #[error("unknown flag '-{0}'")]
    UnknownShort(char),
    /// [`Session::parse`](crate::Session::parse) was called a second time.
    #[error("arguments were already parsed for this session")]
    AlreadyParsed,
}

/// Outcome of one matching pass.
///
/// Immutable after creation. Indices refer to positions in the
/// [`OptionTable`] the matcher ran against.
///
/// # Examples
///
/// ```
/// use opt_table_core::{match_args, OptionSpec, OptionTable};
///
/// let table = OptionTable::new(vec![
///     OptionSpec::boolean(Some('e'), Some("expense"), "Expense operations only"),
///     OptionSpec::with_hint(Some('a'), Some("add"), "<money>", "Adds a record"),
/// ])
/// .unwrap();
///
/// let result = match_args(&table, ["prog", "-ea", "12.50"]).unwrap();
/// assert_eq!(result.boolean_matches(), [0]);
/// assert_eq!(result.value_matches(), [1]);
/// assert_eq!(result.positionals(), ["12.50"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    booleans: Vec<usize>,
    values: Vec<usize>,
    positionals: Vec<String>,
}

impl ParseResult {
    /// Matched boolean options, first-seen order, deduplicated.
    pub fn boolean_matches(&self) -> &[usize] {
        &self.booleans
    }

    /// Matched non-boolean options, first-seen order, deduplicated.
    pub fn value_matches(&self) -> &[usize] {
        &self.values
    }

    /// Tokens not matched to any option, in argv order. Parameter values of
    /// non-boolean flags land here; their arity is the caller's concern.
    pub fn positionals(&self) -> &[String] {
        &self.positionals
    }

    fn record(&mut self, table: &OptionTable, index: usize) {
        let list = if table.specs()[index].boolean {
            &mut self.booleans
        } else {
            &mut self.values
        };
        if !list.contains(&index) {
            list.push(index);
        }
    }
}

/// Matches `argv` against `table` in one pass.
///
/// The first element (program name) is skipped. Tokens are classified in
/// order:
///
/// - `-` and `--` alone are errors;
/// - `--name` must match a long name exactly;
/// - `-abc` matches each character as a short flag (boolean and non-boolean
///   flags may be bundled together);
/// - anything else matches a keyword exactly or becomes a positional.
///
/// # Examples
///
/// ```
/// use opt_table_core::{match_args, ParseError, OptionSpec, OptionTable};
///
/// let table = OptionTable::new(vec![
///     OptionSpec::boolean(Some('v'), Some("verbose"), "Prints verbose messages"),
/// ])
/// .unwrap();
///
/// let err = match_args(&table, ["prog", "--bogus"]).unwrap_err();
/// assert_eq!(err, ParseError::UnknownLong("bogus".to_string()));
/// ```
pub fn match_args<I, S>(table: &OptionTable, argv: I) -> Result<ParseResult, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = ParseResult::default();

    for token in argv.into_iter().skip(1) {
        let token = token.as_ref();
        match_token(table, token, &mut result)?;
    }

    Ok(result)
}

fn match_token(table: &OptionTable, token: &str, result: &mut ParseResult) -> Result<(), ParseError> {
    if token.chars().count() < 2 {
        if token == "-" {
            return Err(ParseError::BareDash);
        }
        debug!(token, "short token recorded as positional");
        result.positionals.push(token.to_string());
        return Ok(());
    }

    if let Some(name) = token.strip_prefix("--") {
        if name.is_empty() {
            return Err(ParseError::BareDoubleDash);
        }
        let index = table
            .find_long(name)
            .ok_or_else(|| ParseError::UnknownLong(name.to_string()))?;
        debug!(token, index, "long flag matched");
        result.record(table, index);
        return Ok(());
    }

    if let Some(bundle) = token.strip_prefix('-') {
        for flag in bundle.chars() {
            let index = table
                .find_short(flag)
                .ok_or(ParseError::UnknownShort(flag))?;
            debug!(%flag, index, "short flag matched");
            result.record(table, index);
        }
        return Ok(());
    }

    match table.find_keyword(token) {
        Some(index) => {
            debug!(token, index, "keyword matched");
            result.record(table, index);
        }
        None => {
            debug!(token, "token recorded as positional");
            result.positionals.push(token.to_string());
        }
    }
    Ok(())
}
