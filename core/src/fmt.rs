//! Line wrapping and column joining for help output.
//!
//! Two small text algorithms drive the two-column help layout:
//!
//! - [`wrap`] breaks a single string into width-bounded lines, preferring to
//!   split at the last delimiter inside each window and hard-wrapping when a
//!   window holds one unbreakable word.
//! - [`join_columns`] zips two already-wrapped blocks line by line, padding
//!   the left column out to a fixed indent.
//!
//! Both append to a caller-owned `String` and never touch content already in
//! it, so a renderer can build a full help screen incrementally.

/// Characters that never end a wrapped line, even though they are not
/// alphanumeric. Splitting right after an opening quote or bracket would
/// orphan it from the text it introduces.
const OPEN_CHARS: &[char] = &['<', '\'', '"', '[', '{', '('];

fn is_delimiter(c: char) -> bool {
    !c.is_alphanumeric() && !OPEN_CHARS.contains(&c)
}

/// Last delimiter position in `chars[begin..=end]`, scanning backward and
/// never returning `begin` itself.
fn rfind_delim(chars: &[char], begin: usize, end: usize) -> Option<usize> {
    (begin + 1..=end).rev().find(|&i| is_delimiter(chars[i]))
}

/// First position at or after `begin` holding anything but a space.
fn skip_spaces(chars: &[char], begin: usize) -> Option<usize> {
    (begin..chars.len()).find(|&i| chars[i] != ' ')
}

/// First newline position at or after `begin`.
fn find_newline(chars: &[char], begin: usize) -> Option<usize> {
    (begin..chars.len()).find(|&i| chars[i] == '\n')
}

fn push_line(dest: &mut String, body: &[char], prefix: &str, postfix: &str) {
    dest.push_str(prefix);
    dest.extend(body.iter());
    dest.push_str(postfix);
    dest.push('\n');
}

/// Wraps `src` so that each emitted line holds at most `width` characters,
/// counting `prefix` and `postfix`, excluding the trailing newline.
///
/// Each line is split at the last delimiter found in its window; a window
/// with no delimiter (one long unbreakable word) is hard-wrapped at the
/// window edge. Leading spaces of a continuation line are dropped. If `src`
/// fits a single window it passes through as one line.
///
/// Output is appended to `dest`; existing content is preserved.
///
/// # Examples
///
/// ```
/// use opt_table_core::fmt::wrap;
///
/// let mut out = String::new();
/// wrap(&mut out, "Prints help message", 30, "  ", "");
/// assert_eq!(out, "  Prints help message\n");
///
/// let mut out = String::new();
/// wrap(&mut out, "one two three four", 10, "", "");
/// assert_eq!(out, "one two \nthree \nfour\n");
/// ```
pub fn wrap(dest: &mut String, src: &str, width: usize, prefix: &str, postfix: &str) {
    let chars: Vec<char> = src.chars().collect();
    let len = chars.len();
    let extra = prefix.chars().count() + postfix.chars().count();
    // Inclusive window end offset; a window covers span + 1 characters.
    let span = width.saturating_sub(1 + extra);

    let mut begin = 0usize;
    let mut end = span;
    while begin < len && end < len {
        let cut = rfind_delim(&chars, begin, end).unwrap_or(end);
        push_line(dest, &chars[begin..=cut], prefix, postfix);

        begin = match skip_spaces(&chars, cut + 1) {
            Some(next) => next,
            None => return,
        };
        end = begin + span;
    }

    if begin < len {
        push_line(dest, &chars[begin..], prefix, postfix);
    }
}

/// Joins two wrapped blocks into aligned columns.
///
/// Each line of `left` is emitted without its terminator and padded with
/// spaces out to `indent` columns, immediately followed by the matching line
/// of `right` (which keeps its own terminator). Once `left` runs out,
/// remaining `right` lines get `indent` leading spaces. Leftover `left`
/// content is appended verbatim after `right` is exhausted.
///
/// Output is appended to `dest`; existing content is preserved.
///
/// # Examples
///
/// ```
/// use opt_table_core::fmt::join_columns;
///
/// let mut out = String::new();
/// join_columns(&mut out, "-v  \n", "Prints verbose\nmessages\n", 6);
/// assert_eq!(out, "-v    Prints verbose\n      messages\n");
/// ```
pub fn join_columns(dest: &mut String, left: &str, right: &str, indent: usize) {
    let l: Vec<char> = left.chars().collect();
    let r: Vec<char> = right.chars().collect();

    let mut lbegin = 0usize;
    let mut rbegin = 0usize;
    while rbegin < r.len() {
        if lbegin < l.len() {
            let lend = find_newline(&l, lbegin).unwrap_or(l.len() - 1);
            dest.extend(l[lbegin..lend].iter());
            let pad = indent.saturating_sub(lend - lbegin);
            dest.extend(std::iter::repeat_n(' ', pad));
            lbegin = lend + 1;
        } else {
            dest.extend(std::iter::repeat_n(' ', indent));
        }

        let rend = find_newline(&r, rbegin).unwrap_or(r.len() - 1);
        dest.extend(r[rbegin..=rend].iter());
        rbegin = rend + 1;
    }

    if lbegin < l.len() {
        dest.extend(l[lbegin..].iter());
    }
}
