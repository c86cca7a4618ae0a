//! Text normalization shared by the extractor and the `scenario!` marker
//!
//! Scenario text is usually written inside indented test code, so every tab is
//! dropped and the surrounding whitespace trimmed before it is reported.

/// Normalize scenario text: remove every tab character, then trim both ends.
///
/// Tabs are removed wherever they appear, not only at the start of a line.
/// Spaces inside the text are kept, so alignment written with spaces
/// (e.g. `  And ...` under `Given ...`) survives.
///
/// # Examples
/// ```
/// use gherkin_scenarios::utils::normalize_scenario;
///
/// assert_eq!(normalize_scenario("\n\t\tGiven a user\n\t\t  And a token\n\t"), "Given a user\n  And a token");
/// assert_eq!(normalize_scenario("a\tb"), "ab");
/// ```
pub fn normalize_scenario(text: &str) -> String {
    text.replace('\t', "").trim().to_string()
}

/// Remove one pair of enclosing Go string delimiters (`"..."` or `` `...` ``).
///
/// Text that is not wrapped in a matching pair is returned unchanged.
///
/// # Examples
/// ```
/// use gherkin_scenarios::utils::strip_delimiters;
///
/// assert_eq!(strip_delimiters("\"Given a user\""), "Given a user");
/// assert_eq!(strip_delimiters("`Given a user`"), "Given a user");
/// assert_eq!(strip_delimiters("Given a user"), "Given a user");
/// ```
pub fn strip_delimiters(text: &str) -> &str {
    for delim in ['"', '`'] {
        if text.len() >= 2 && text.starts_with(delim) && text.ends_with(delim) {
            return &text[1..text.len() - 1];
        }
    }
    text
}
