//! Option descriptor definitions.
//!
//! This module defines [`OptionSpec`], the declarative record describing one
//! command-line option. Descriptors are plain data: they carry identifiers
//! (short flag, long name, bare keyword), presentation text (hint,
//! description, group), and nothing else. Declaration sequences are handed to
//! [`OptionTable::new`](crate::OptionTable::new), which validates them as a
//! whole. The types serialize with [`serde`] so declarations and parse
//! results can round-trip through JSON.

use serde::{Deserialize, Serialize};

/// Group label applied to descriptors declared without one.
pub const DEFAULT_GROUP: &str = "Options";

/// Upper bound (in characters) for long names and keywords.
pub const MAX_NAME_LEN: usize = 19;

/// Declaration of a single command-line option.
///
/// An option is identified by any non-empty subset of three forms: a short
/// flag (`-v`), a long name (`--verbose`), and a bare keyword (`verbose`).
/// Boolean options stand alone on the command line; non-boolean options
/// announce that parameter tokens follow, and carry a `hint` describing them
/// for help output. The engine never consumes those parameter tokens itself —
/// they surface as positionals in argument order.
///
/// Use the constructors [`boolean`](OptionSpec::boolean) and
/// [`with_hint`](OptionSpec::with_hint), then chain builder methods.
///
/// # Examples
///
/// ```
/// use opt_table_core::OptionSpec;
///
/// let verbose = OptionSpec::boolean(Some('v'), Some("verbose"), "Prints verbose messages");
/// assert!(verbose.boolean);
/// assert_eq!(verbose.long.as_deref(), Some("verbose"));
///
/// let add = OptionSpec::with_hint(Some('a'), Some("add"), "<money> <item>", "Adds a record")
///     .in_group("Commands");
/// assert!(!add.boolean);
/// assert_eq!(add.group.as_deref(), Some("Commands"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionSpec {
    /// True when the option takes no parameter tokens.
    pub boolean: bool,
    /// Short flag character (e.g. `'v'` for `-v`).
    pub short: Option<char>,
    /// Long name (e.g. `"verbose"` for `--verbose`).
    pub long: Option<String>,
    /// Bare keyword form (matched without any dash).
    pub keyword: Option<String>,
    /// Parameter usage text shown in help (non-boolean options only).
    pub hint: Option<String>,
    /// Description shown in help output.
    pub description: String,
    /// Help group label; `None` falls back to [`DEFAULT_GROUP`].
    pub group: Option<String>,
}

impl OptionSpec {
    /// Creates a boolean option (no parameter tokens, no hint).
    ///
    /// # Examples
    ///
    /// ```
    /// use opt_table_core::OptionSpec;
    ///
    /// let spec = OptionSpec::boolean(Some('e'), Some("expense"), "Expense operations only");
    /// assert!(spec.boolean);
    /// assert!(spec.hint.is_none());
    /// ```
    pub fn boolean(short: Option<char>, long: Option<&str>, description: &str) -> Self {
        Self {
            boolean: true,
            short,
            long: long.map(String::from),
            keyword: None,
            hint: None,
            description: description.to_string(),
            group: None,
        }
    }

    /// Creates a non-boolean option with a parameter hint.
    ///
    /// # Examples
    ///
    /// ```
    /// use opt_table_core::OptionSpec;
    ///
    /// let spec = OptionSpec::with_hint(Some('d'), Some("delete"), "<serial_no>", "Deletes a record");
    /// assert!(!spec.boolean);
    /// assert_eq!(spec.hint.as_deref(), Some("<serial_no>"));
    /// ```
    pub fn with_hint(
        short: Option<char>,
        long: Option<&str>,
        hint: &str,
        description: &str,
    ) -> Self {
        Self {
            boolean: false,
            short,
            long: long.map(String::from),
            keyword: None,
            hint: Some(hint.to_string()),
            description: description.to_string(),
            group: None,
        }
    }

    /// Adds a bare keyword form.
    pub fn with_keyword(mut self, keyword: &str) -> Self {
        self.keyword = Some(keyword.to_string());
        self
    }

    /// Assigns a help group.
    pub fn in_group(mut self, group: &str) -> Self {
        self.group = Some(group.to_string());
        self
    }

    /// Returns the group label, falling back to [`DEFAULT_GROUP`].
    pub fn group_name(&self) -> &str {
        self.group.as_deref().unwrap_or(DEFAULT_GROUP)
    }

    /// Checks whether `id` names this option by short flag, long name, or
    /// keyword, exactly.
    ///
    /// # Examples
    ///
    /// ```
    /// use opt_table_core::OptionSpec;
    ///
    /// let spec = OptionSpec::boolean(Some('v'), Some("verbose"), "Prints verbose messages")
    ///     .with_keyword("chatty");
    /// assert!(spec.matches_id("v"));
    /// assert!(spec.matches_id("verbose"));
    /// assert!(spec.matches_id("chatty"));
    /// assert!(!spec.matches_id("verb"));
    /// ```
    pub fn matches_id(&self, id: &str) -> bool {
        let mut chars = id.chars();
        if let (Some(c), None) = (chars.next(), chars.next())
            && self.short == Some(c)
        {
            return true;
        }
        self.long.as_deref() == Some(id) || self.keyword.as_deref() == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolean_constructor() {
        let spec = OptionSpec::boolean(Some('w'), Some("week"), "Week format");
        assert!(spec.boolean);
        assert_eq!(spec.short, Some('w'));
        assert_eq!(spec.long.as_deref(), Some("week"));
        assert!(spec.hint.is_none());
        assert_eq!(spec.group_name(), DEFAULT_GROUP);
    }

    #[test]
    fn test_with_hint_constructor() {
        let spec = OptionSpec::with_hint(None, Some("sort"), "<new/old>", "Sorts records");
        assert!(!spec.boolean);
        assert_eq!(spec.hint.as_deref(), Some("<new/old>"));
    }

    #[test]
    fn test_matches_id_forms() {
        let spec = OptionSpec::with_hint(Some('f'), Some("fetch"), "[yymmdd]", "Fetches records")
            .with_keyword("show");
        assert!(spec.matches_id("f"));
        assert!(spec.matches_id("fetch"));
        assert!(spec.matches_id("show"));
        assert!(!spec.matches_id("fe"));
        assert!(!spec.matches_id(""));
    }

    #[test]
    fn test_serde_round_trip() {
        let spec = OptionSpec::with_hint(Some('a'), Some("add"), "<money>", "Adds a record")
            .in_group("Commands");
        let json = serde_json::to_string(&spec).unwrap();
        let back: OptionSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back.short, Some('a'));
        assert_eq!(back.group.as_deref(), Some("Commands"));
    }
}
