//! Help-group construction and label pre-rendering.
//!
//! Descriptors are partitioned into named groups for help output. Group
//! order follows the first occurrence of each group label while scanning the
//! table; members keep table order within their group. Each member's label
//! (`-a, --add <money>` style) and description are rendered once here and
//! reused by every later help render.

use crate::table::OptionTable;

/// One table entry prepared for help rendering.
#[derive(Debug, Clone)]
pub struct GroupEntry {
    /// Descriptor index into the owning [`OptionTable`].
    pub index: usize,
    /// Pre-rendered flag label (left help column).
    pub label: String,
    /// Description text (right help column).
    pub description: String,
}

/// A named bucket of options for help output.
#[derive(Debug, Clone)]
pub struct Group {
    /// Group label shown as the section header.
    pub name: String,
    /// Members in table order.
    pub entries: Vec<GroupEntry>,
}

/// Partitions `table` into groups, pre-rendering every label.
///
/// # Examples
///
/// ```
/// use opt_table_core::{build_groups, OptionSpec, OptionTable};
///
/// let table = OptionTable::new(vec![
///     OptionSpec::with_hint(Some('a'), Some("add"), "<money>", "Adds a record").in_group("A"),
///     OptionSpec::boolean(Some('v'), None, "Prints verbose messages").in_group("B"),
///     OptionSpec::boolean(Some('e'), None, "Expense operations only").in_group("A"),
/// ])
/// .unwrap();
///
/// let groups = build_groups(&table);
/// let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
/// assert_eq!(names, ["A", "B"]);
/// assert_eq!(groups[0].entries.len(), 2);
/// assert_eq!(groups[0].entries[0].label, "-a, --add <money>");
/// ```
pub fn build_groups(table: &OptionTable) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();

    for (index, spec) in table.specs().iter().enumerate() {
        let name = spec.group_name();
        let entry = GroupEntry {
            index,
            label: render_label(spec),
            description: spec.description.clone(),
        };

        match groups.iter_mut().find(|g| g.name == name) {
            Some(group) => group.entries.push(entry),
            None => groups.push(Group {
                name: name.to_string(),
                entries: vec![entry],
            }),
        }
    }

    groups
}

/// Renders the flag-label column text for one descriptor.
///
/// Identifier forms are joined with `", "`; the trailing separator collapses
/// to a single space, which in turn separates the hint of a non-boolean
/// option. A boolean option's label keeps the bare forms only.
fn render_label(spec: &crate::OptionSpec) -> String {
    let mut label = String::new();
    if let Some(c) = spec.short {
        label.push('-');
        label.push(c);
        label.push_str(", ");
    }
    if let Some(long) = spec.long.as_deref().filter(|s| !s.is_empty()) {
        label.push_str("--");
        label.push_str(long);
        label.push_str(", ");
    }
    if let Some(keyword) = spec.keyword.as_deref().filter(|s| !s.is_empty()) {
        label.push_str(keyword);
        label.push_str(", ");
    }

    // Validation guarantees at least one identifier, so the separator is
    // always present to collapse.
    if label.ends_with(", ") {
        label.truncate(label.len() - 2);
        label.push(' ');
    }

    match spec.hint.as_deref().filter(|_| !spec.boolean) {
        Some(hint) => label + hint,
        None => label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OptionSpec;

    fn table(specs: Vec<OptionSpec>) -> OptionTable {
        OptionTable::new(specs).unwrap()
    }

    #[test]
    fn test_first_occurrence_group_order() {
        let t = table(vec![
            OptionSpec::boolean(Some('a'), None, "First").in_group("A"),
            OptionSpec::boolean(Some('b'), None, "Second").in_group("B"),
            OptionSpec::boolean(Some('c'), None, "Third").in_group("A"),
            OptionSpec::boolean(Some('d'), None, "Fourth").in_group("C"),
        ]);
        let groups = build_groups(&t);
        let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);

        let members: Vec<usize> = groups[0].entries.iter().map(|e| e.index).collect();
        assert_eq!(members, [0, 2]);
    }

    #[test]
    fn test_default_group_for_unlabeled_specs() {
        let t = table(vec![OptionSpec::boolean(Some('v'), None, "Verbose")]);
        let groups = build_groups(&t);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, crate::DEFAULT_GROUP);
    }

    #[test]
    fn test_label_all_forms_with_hint() {
        let t = table(vec![
            OptionSpec::with_hint(Some('s'), Some("sort"), "<new/old>", "Sorts records")
                .with_keyword("sorted"),
        ]);
        let groups = build_groups(&t);
        assert_eq!(groups[0].entries[0].label, "-s, --sort, sorted <new/old>");
    }

    #[test]
    fn test_label_boolean_keeps_trailing_space() {
        let t = table(vec![OptionSpec::boolean(Some('v'), Some("verbose"), "Verbose")]);
        let groups = build_groups(&t);
        assert_eq!(groups[0].entries[0].label, "-v, --verbose ");
    }

    #[test]
    fn test_label_keyword_only() {
        let t = table(vec![
            OptionSpec::boolean(None, None, "Prints today's date").with_keyword("now"),
        ]);
        let groups = build_groups(&t);
        assert_eq!(groups[0].entries[0].label, "now ");
    }
}
