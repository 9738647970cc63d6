//! Option declaration, validation, argv matching, and help rendering.
//!
//! This crate is a small engine for command-line option handling:
//!
//! - [`OptionSpec`] — one option's declaration (short flag, long name, bare
//!   keyword, hint, description, group).
//! - [`OptionTable`] — the validated, immutable declaration sequence
//!   ([`validate_specs`] enforces shape and global uniqueness invariants).
//! - [`match_args`] / [`ParseResult`] — one pass over argv classifying
//!   `--long` flags, bundled `-abc` shorts, bare keywords, and positionals.
//! - [`build_groups`] / [`render_help`] — first-seen-ordered help groups and
//!   a terminal-width-aware two-column listing ([`fmt`] holds the wrapping
//!   and column-joining primitives).
//! - [`Session`] — the owned lifecycle context tying it all together:
//!   configure once, parse once, query freely.
//!
//! The engine recognizes option *identity* only. It never interprets or
//! consumes the parameter tokens following a non-boolean flag; they stay in
//! the positional list for the caller.
//!
//! # Example
//!
//! ```
//! use opt_table_core::{FixedColumns, OptionSpec, Session};
//!
//! let mut session = Session::configure(
//!     vec![
//!         OptionSpec::with_hint(Some('a'), Some("add"), "<money> <item>", "Adds a record")
//!             .in_group("Commands"),
//!         OptionSpec::boolean(Some('e'), Some("expense"), "Expense operations only")
//!             .in_group("Modifiers"),
//!         OptionSpec::boolean(Some('v'), Some("verbose"), "Prints verbose messages")
//!             .in_group("Modifiers"),
//!     ],
//!     "ledger 0.1.0",
//! )
//! .unwrap();
//!
//! session.parse(["ledger", "-ev", "-a", "12.50", "coffee"]).unwrap();
//! assert_eq!(session.boolean_matches(), [1, 2]);
//! assert_eq!(session.value_matches(), [0]);
//! assert_eq!(session.positionals(), ["12.50", "coffee"]);
//!
//! let help = session.help(&FixedColumns(80));
//! assert!(help.contains("  Commands\n"));
//! ```

pub mod fmt;
mod group;
mod help;
mod matcher;
mod session;
mod table;
mod types;
mod validate;

pub use group::{Group, GroupEntry, build_groups};
pub use help::{
    DEFAULT_WIDTH, EnvColumns, FixedColumns, TerminalWidth, render_help, render_option_help,
};
pub use matcher::{ParseError, ParseResult, match_args};
pub use session::Session;
pub use table::OptionTable;
pub use types::{DEFAULT_GROUP, MAX_NAME_LEN, OptionSpec};
pub use validate::{ConfigError, validate_specs};
