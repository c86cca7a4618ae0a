//! The marker helper itself.
//!
//! Test code calls `scenario!` to build its scenario text at runtime. The
//! extractor never runs it; it only reads `gherkin.Scenario(...)` call sites.
//! Both sides share [`normalize_scenario`], so a scenario renders the same way
//! whether it is printed by a test or harvested from source.

use std::fmt;

use crate::utils::normalize_scenario;

/// Render formatted scenario text, strip every tab, and trim both ends.
///
/// Usually called through [`scenario!`](crate::scenario).
pub fn scenario(args: fmt::Arguments<'_>) -> String {
    normalize_scenario(&fmt::format(args))
}

/// Format a scenario with `format!` rules, then normalize it.
///
/// ```
/// use gherkin_scenarios::scenario;
///
/// assert_eq!(scenario!("Given {} has {} items", "Bruce", 3), "Given Bruce has 3 items");
/// assert_eq!(scenario!("\n\t\tGiven a user\n\t"), "Given a user");
/// ```
#[macro_export]
macro_rules! scenario {
    ($($arg:tt)*) => {
        $crate::marker::scenario(::std::format_args!($($arg)*))
    };
}
