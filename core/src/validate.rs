//! Option table validation.
//!
//! Validates structural invariants of an option declaration sequence before
//! any argument matching happens: identifier presence and shape, hint
//! consistency, description text, and global identifier uniqueness. A broken
//! declaration is a programmer error, so validation is strict and fail-fast —
//! the first violation wins and names the offending entry and field.
//!
//! # Examples
//!
//! ```
//! use opt_table_core::{validate_specs, ConfigError, OptionSpec};
//!
//! let good = vec![OptionSpec::boolean(Some('v'), Some("verbose"), "Prints verbose messages")];
//! assert!(validate_specs(&good).is_ok());
//!
//! // Invalid: no identifier at all.
//! let bad = vec![OptionSpec::boolean(None, None, "An unreachable option")];
//! assert!(matches!(validate_specs(&bad), Err(ConfigError::NoIdentifier { index: 0 })));
//! ```

use thiserror::Error;

use crate::types::{MAX_NAME_LEN, OptionSpec};

/// Declaration-time configuration errors.
///
/// Each variant pinpoints the broken entry by its position in the declared
/// sequence. These are not recoverable: a driver should print the message and
/// terminate setup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Entry declares neither a short flag, a long name, nor a keyword.
    #[error("option[{index}] must declare at least one identifier")]
    NoIdentifier {
        /// Position in the declaration sequence.
        index: usize,
    },
    /// An identifier contains a non-alphanumeric character.
    #[error("option[{index}].{field} must be alphanumeric: {value:?}")]
    NonAlphanumeric {
        index: usize,
        /// Which identifier field is malformed (`short`, `long`, `keyword`).
        field: &'static str,
        value: String,
    },
    /// A long name or keyword exceeds [`MAX_NAME_LEN`] characters.
    #[error("option[{index}].{field} must be at most {MAX_NAME_LEN} chars: {value:?}")]
    NameTooLong {
        index: usize,
        field: &'static str,
        value: String,
    },
    /// A boolean option carries a parameter hint.
    #[error("option[{index}] is boolean and must not declare a hint")]
    HintOnBoolean { index: usize },
    /// A non-boolean option is missing its parameter hint.
    #[error("option[{index}] takes parameters and must declare a hint")]
    MissingHint { index: usize },
    /// Description is empty or whitespace-only.
    #[error("option[{index}].description must contain text")]
    EmptyDescription { index: usize },
    /// Two entries share a short flag.
    #[error("options [{first}] and [{second}] share short flag '-{flag}'")]
    DuplicateShort {
        first: usize,
        second: usize,
        flag: char,
    },
    /// Two entries share a long name.
    #[error("options [{first}] and [{second}] share long name \"--{name}\"")]
    DuplicateLong {
        first: usize,
        second: usize,
        name: String,
    },
    /// Two entries share a keyword.
    #[error("options [{first}] and [{second}] share keyword {keyword:?}")]
    DuplicateKeyword {
        first: usize,
        second: usize,
        keyword: String,
    },
    /// The version string handed to setup is empty.
    #[error("version string must contain text")]
    EmptyVersion,
}

/// Returns the string when it has visible text, `None` otherwise.
///
/// Empty identifier strings are treated as absent, matching the convention
/// that a blank field in a declaration record means "no such form".
fn text(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Validates a declaration sequence.
///
/// Runs the per-entry shape checks in declaration order, then the global
/// uniqueness checks across all entry pairs. The first violation is returned;
/// nothing after it is inspected.
///
/// # Examples
///
/// ```
/// use opt_table_core::{validate_specs, ConfigError, OptionSpec};
///
/// let dup = vec![
///     OptionSpec::boolean(Some('v'), Some("verbose"), "Prints verbose messages"),
///     OptionSpec::boolean(Some('v'), Some("version"), "Prints the version"),
/// ];
/// assert_eq!(
///     validate_specs(&dup),
///     Err(ConfigError::DuplicateShort { first: 0, second: 1, flag: 'v' }),
/// );
/// ```
pub fn validate_specs(specs: &[OptionSpec]) -> Result<(), ConfigError> {
    for (index, spec) in specs.iter().enumerate() {
        validate_shape(index, spec)?;
    }

    for (first, a) in specs.iter().enumerate() {
        for (offset, b) in specs[first + 1..].iter().enumerate() {
            let second = first + 1 + offset;
            if let (Some(x), Some(y)) = (a.short, b.short)
                && x == y
            {
                return Err(ConfigError::DuplicateShort {
                    first,
                    second,
                    flag: x,
                });
            }
            if let (Some(x), Some(y)) = (text(a.long.as_deref()), text(b.long.as_deref()))
                && x == y
            {
                return Err(ConfigError::DuplicateLong {
                    first,
                    second,
                    name: x.to_string(),
                });
            }
            if let (Some(x), Some(y)) = (text(a.keyword.as_deref()), text(b.keyword.as_deref()))
                && x == y
            {
                return Err(ConfigError::DuplicateKeyword {
                    first,
                    second,
                    keyword: x.to_string(),
                });
            }
        }
    }

    Ok(())
}

fn validate_shape(index: usize, spec: &OptionSpec) -> Result<(), ConfigError> {
    let long = text(spec.long.as_deref());
    let keyword = text(spec.keyword.as_deref());

    if spec.short.is_none() && long.is_none() && keyword.is_none() {
        return Err(ConfigError::NoIdentifier { index });
    }

    if let Some(c) = spec.short
        && !c.is_alphanumeric()
    {
        return Err(ConfigError::NonAlphanumeric {
            index,
            field: "short",
            value: c.to_string(),
        });
    }

    for (field, value) in [("long", long), ("keyword", keyword)] {
        let Some(value) = value else { continue };
        if !value.chars().all(char::is_alphanumeric) {
            return Err(ConfigError::NonAlphanumeric {
                index,
                field,
                value: value.to_string(),
            });
        }
        if value.chars().count() > MAX_NAME_LEN {
            return Err(ConfigError::NameTooLong {
                index,
                field,
                value: value.to_string(),
            });
        }
    }

    let hint = text(spec.hint.as_deref());
    if spec.boolean && hint.is_some() {
        return Err(ConfigError::HintOnBoolean { index });
    }
    if !spec.boolean && hint.is_none() {
        return Err(ConfigError::MissingHint { index });
    }

    if spec.description.trim().is_empty() {
        return Err(ConfigError::EmptyDescription { index });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bool_opt(short: Option<char>, long: Option<&str>) -> OptionSpec {
        OptionSpec::boolean(short, long, "A test option")
    }

    #[test]
    fn test_accepts_valid_table() {
        let specs = vec![
            OptionSpec::with_hint(Some('a'), Some("add"), "<money>", "Adds a record"),
            bool_opt(Some('v'), Some("verbose")),
            bool_opt(None, None).with_keyword("now"),
        ];
        assert!(validate_specs(&specs).is_ok());
    }

    #[test]
    fn test_rejects_missing_identifier() {
        let specs = vec![bool_opt(Some('a'), None), bool_opt(None, None)];
        assert_eq!(
            validate_specs(&specs),
            Err(ConfigError::NoIdentifier { index: 1 })
        );
    }

    #[test]
    fn test_rejects_non_alphanumeric_identifier() {
        let specs = vec![bool_opt(Some('-'), None)];
        assert_eq!(
            validate_specs(&specs),
            Err(ConfigError::NonAlphanumeric {
                index: 0,
                field: "short",
                value: "-".to_string(),
            })
        );

        let specs = vec![bool_opt(None, Some("dry-run"))];
        assert!(matches!(
            validate_specs(&specs),
            Err(ConfigError::NonAlphanumeric { field: "long", .. })
        ));
    }

    #[test]
    fn test_rejects_overlong_name() {
        let long = "a".repeat(MAX_NAME_LEN + 1);
        let specs = vec![bool_opt(None, Some(&long))];
        assert!(matches!(
            validate_specs(&specs),
            Err(ConfigError::NameTooLong { index: 0, field: "long", .. })
        ));
    }

    #[test]
    fn test_rejects_hint_on_boolean() {
        let mut spec = bool_opt(Some('v'), None);
        spec.hint = Some("<level>".to_string());
        assert_eq!(
            validate_specs(&[spec]),
            Err(ConfigError::HintOnBoolean { index: 0 })
        );
    }

    #[test]
    fn test_rejects_missing_hint() {
        let mut spec = OptionSpec::with_hint(Some('d'), None, "<id>", "Deletes a record");
        spec.hint = None;
        assert_eq!(
            validate_specs(&[spec]),
            Err(ConfigError::MissingHint { index: 0 })
        );
    }

    #[test]
    fn test_rejects_blank_description() {
        let spec = OptionSpec::boolean(Some('v'), None, "   ");
        assert_eq!(
            validate_specs(&[spec]),
            Err(ConfigError::EmptyDescription { index: 0 })
        );
    }

    #[test]
    fn test_rejects_duplicate_short() {
        let specs = vec![bool_opt(Some('x'), Some("one")), bool_opt(Some('x'), Some("two"))];
        assert_eq!(
            validate_specs(&specs),
            Err(ConfigError::DuplicateShort {
                first: 0,
                second: 1,
                flag: 'x',
            })
        );
    }

    #[test]
    fn test_rejects_duplicate_long() {
        let specs = vec![bool_opt(Some('a'), Some("same")), bool_opt(Some('b'), Some("same"))];
        assert!(matches!(
            validate_specs(&specs),
            Err(ConfigError::DuplicateLong { first: 0, second: 1, .. })
        ));
    }

    #[test]
    fn test_rejects_duplicate_keyword() {
        let specs = vec![
            bool_opt(Some('a'), None).with_keyword("now"),
            bool_opt(Some('b'), None).with_keyword("now"),
        ];
        assert!(matches!(
            validate_specs(&specs),
            Err(ConfigError::DuplicateKeyword { first: 0, second: 1, .. })
        ));
    }

    #[test]
    fn test_reports_first_colliding_pair() {
        let specs = vec![
            bool_opt(Some('a'), None),
            bool_opt(Some('b'), None),
            bool_opt(Some('a'), None),
            bool_opt(Some('b'), None),
        ];
        assert_eq!(
            validate_specs(&specs),
            Err(ConfigError::DuplicateShort {
                first: 0,
                second: 2,
                flag: 'a',
            })
        );
    }
}
