//! The validated, immutable option table.

use serde::Serialize;

use crate::types::OptionSpec;
use crate::validate::{ConfigError, validate_specs};

/// An ordered, validated, immutable sequence of [`OptionSpec`]s.
///
/// Construction runs the full validation pass; a table is never partially
/// valid. Descriptors are addressed by their position in the declared
/// sequence — the same indices that appear in
/// [`ParseResult`](crate::ParseResult).
///
/// # Examples
///
/// ```
/// use opt_table_core::{OptionSpec, OptionTable};
///
/// let table = OptionTable::new(vec![
///     OptionSpec::boolean(Some('v'), Some("verbose"), "Prints verbose messages"),
///     OptionSpec::with_hint(None, Some("sort"), "<new/old>", "Sorts records").with_keyword("sort"),
/// ])
/// .unwrap();
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.find_short('v'), Some(0));
/// assert_eq!(table.find_long("sort"), Some(1));
/// assert_eq!(table.find_keyword("sort"), Some(1));
/// assert_eq!(table.find_long("bogus"), None);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct OptionTable {
    specs: Vec<OptionSpec>,
}

impl OptionTable {
    /// Validates `specs` and wraps them into a table.
    ///
    /// The sequence is taken as-is: its order defines descriptor indices,
    /// group order, and help order. Returns the first [`ConfigError`]
    /// encountered, in which case no table exists at all.
    pub fn new(specs: Vec<OptionSpec>) -> Result<Self, ConfigError> {
        validate_specs(&specs)?;
        Ok(Self { specs })
    }

    /// Descriptors in declaration order.
    pub fn specs(&self) -> &[OptionSpec] {
        &self.specs
    }

    /// Descriptor at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&OptionSpec> {
        self.specs.get(index)
    }

    /// Number of declared options.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// True when no options are declared.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Index of the option with short flag `flag`.
    pub fn find_short(&self, flag: char) -> Option<usize> {
        self.specs.iter().position(|s| s.short == Some(flag))
    }

    /// Index of the option with long name `name`.
    pub fn find_long(&self, name: &str) -> Option<usize> {
        if name.is_empty() {
            return None;
        }
        self.specs
            .iter()
            .position(|s| s.long.as_deref() == Some(name))
    }

    /// Index of the option with keyword `word`.
    pub fn find_keyword(&self, word: &str) -> Option<usize> {
        if word.is_empty() {
            return None;
        }
        self.specs
            .iter()
            .position(|s| s.keyword.as_deref() == Some(word))
    }

    /// Index of the option named by `id` via any identifier form.
    ///
    /// Used by single-option help lookup, where the caller does not say which
    /// form it holds.
    pub fn find_id(&self, id: &str) -> Option<usize> {
        if id.is_empty() {
            return None;
        }
        self.specs.iter().position(|s| s.matches_id(id))
    }
}
