//! Terminal-width-aware help rendering.
//!
//! Builds the two-column help listing from pre-built [`Group`]s: a version
//! line, a header per group, and one wrapped label/description row per
//! option. The output width comes from a [`TerminalWidth`] capability so the
//! layout follows the terminal without the engine knowing how to query one.

use tracing::debug;

use crate::fmt::{join_columns, wrap};
use crate::group::Group;
use crate::table::OptionTable;

/// Width used when the [`TerminalWidth`] provider has no answer.
pub const DEFAULT_WIDTH: usize = 80;

/// Indent for option rows (left edge of the label column).
const LABEL_PREFIX: &str = "    ";
/// Gap between the label column and the description column.
const LABEL_GUTTER: &str = "  ";
/// Indent for group headers.
const GROUP_INDENT: &str = "  ";

/// Capability for querying the current output column count.
///
/// The platform terminal query lives outside the engine; callers hand in
/// whatever implementation fits their environment. Returning `None` makes the
/// renderer fall back to [`DEFAULT_WIDTH`].
pub trait TerminalWidth {
    /// Current column count, if known.
    fn columns(&self) -> Option<usize>;
}

/// Reads the column count from the `COLUMNS` environment variable.
///
/// Shells export `COLUMNS` on resize; when the variable is missing or not a
/// number, the renderer falls back to [`DEFAULT_WIDTH`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvColumns;

impl TerminalWidth for EnvColumns {
    fn columns(&self) -> Option<usize> {
        std::env::var("COLUMNS").ok()?.trim().parse().ok()
    }
}

/// A fixed column count, for tests and non-terminal output.
#[derive(Debug, Clone, Copy)]
pub struct FixedColumns(pub usize);

impl TerminalWidth for FixedColumns {
    fn columns(&self) -> Option<usize> {
        Some(self.0)
    }
}

/// Renders the full help listing for every group.
///
/// Layout: the version line, then per group a two-space-indented header
/// followed by one row per member. Labels occupy the first `indent` columns
/// (four-space row indent, two-space gutter); descriptions wrap in the
/// remaining width. `indent` is the smaller of half the terminal width and
/// the longest label plus its fixed padding, so narrow terminals still get
/// both columns.
///
/// # Examples
///
/// ```
/// use opt_table_core::{build_groups, render_help, FixedColumns, OptionSpec, OptionTable};
///
/// let table = OptionTable::new(vec![
///     OptionSpec::boolean(Some('v'), Some("verbose"), "Prints verbose messages"),
/// ])
/// .unwrap();
/// let groups = build_groups(&table);
///
/// let help = render_help(&groups, "demo 0.1.0", &FixedColumns(60));
/// assert!(help.starts_with("demo 0.1.0\n"));
/// assert!(help.contains("  Options\n"));
/// assert!(help.contains("    -v, --verbose"));
/// assert!(help.contains("Prints verbose messages"));
/// ```
pub fn render_help(groups: &[Group], version: &str, width: &dyn TerminalWidth) -> String {
    let width = resolve_width(width);
    let indent = column_indent(groups, width);

    let mut out = String::new();
    out.push_str(version);
    out.push('\n');

    for group in groups {
        out.push('\n');
        render_group_header(&mut out, &group.name);
        for entry in &group.entries {
            render_row(&mut out, &entry.label, &entry.description, indent, width);
        }
    }

    out
}

/// Renders the help block for a single option named by `id` (short flag,
/// long name, or keyword). Returns `None` when nothing matches — an unknown
/// id is an ordinary lookup miss, not an error.
///
/// The block carries the option's group header and uses the same column
/// layout as the full listing.
pub fn render_option_help(
    table: &OptionTable,
    groups: &[Group],
    id: &str,
    width: &dyn TerminalWidth,
) -> Option<String> {
    let index = table.find_id(id)?;
    let width = resolve_width(width);
    let indent = column_indent(groups, width);

    for group in groups {
        if let Some(entry) = group.entries.iter().find(|e| e.index == index) {
            let mut out = String::new();
            render_group_header(&mut out, &group.name);
            render_row(&mut out, &entry.label, &entry.description, indent, width);
            return Some(out);
        }
    }

    None
}

fn resolve_width(provider: &dyn TerminalWidth) -> usize {
    match provider.columns() {
        Some(columns) => columns,
        None => {
            debug!(fallback = DEFAULT_WIDTH, "terminal width unavailable");
            DEFAULT_WIDTH
        }
    }
}

/// Label column width: half the terminal at most, otherwise just wide enough
/// for the longest label plus the row indent and gutter.
fn column_indent(groups: &[Group], width: usize) -> usize {
    let longest = groups
        .iter()
        .flat_map(|g| g.entries.iter())
        .map(|e| e.label.chars().count())
        .max()
        .unwrap_or(0);
    let padding = LABEL_PREFIX.chars().count() + LABEL_GUTTER.chars().count();
    (width / 2).min(longest + padding)
}

fn render_group_header(out: &mut String, name: &str) {
    out.push_str(GROUP_INDENT);
    out.push_str(name);
    out.push('\n');
}

fn render_row(out: &mut String, label: &str, description: &str, indent: usize, width: usize) {
    let mut left = String::new();
    wrap(&mut left, label, indent, LABEL_PREFIX, LABEL_GUTTER);

    let mut right = String::new();
    wrap(&mut right, description, width.saturating_sub(indent), "", "");

    join_columns(out, &left, &right, indent);
}
