//! Leaf labels: `name:age`.

use crate::config::DAYS_PER_YEAR;

/// Makes a display name safe as a leaf label.
///
/// Surname slashes are removed first, then every character that is not an
/// ASCII letter or `_` becomes `_`.
///
/// # Examples
/// ```
/// # use gedwick::tree::label::sanitize_name;
/// assert_eq!(sanitize_name("John /Smith/"), "John_Smith");
/// assert_eq!(sanitize_name("John/Smith/"), "JohnSmith");
/// assert_eq!(sanitize_name("Mary-Ann O'Neil"), "Mary_Ann_O_Neil");
/// assert_eq!(sanitize_name("Zoë"), "Zo_");
/// ```
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .filter(|&c| c != '/')
        .map(|c| if c.is_ascii_alphabetic() || c == '_' { c } else { '_' })
        .collect()
}

/// Formats elapsed days as years with at most `max_fraction_digits` digits,
/// dropping trailing zeros.
///
/// No grouping separator is ever written, as `,` separates siblings in the tree.
///
/// # Examples
/// ```
/// # use gedwick::tree::label::format_age;
/// assert_eq!(format_age(0, 3), "0");
/// assert_eq!(format_age(1461, 3), "4");
/// assert_eq!(format_age(365, 3), "0.999");
/// assert_eq!(format_age(548, 3), "1.5");
/// assert_eq!(format_age(91311, 3), "249.996");
/// assert_eq!(format_age(91311, 0), "250");
/// ```
pub fn format_age(days: i64, max_fraction_digits: usize) -> String {
    let years = days as f64 / DAYS_PER_YEAR;
    let mut text = format!("{years:.max_fraction_digits$}");
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "-0" {
        text.truncate(0);
        text.push('0');
    }
    text
}
