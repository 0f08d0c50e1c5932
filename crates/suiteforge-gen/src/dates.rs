//! Date fallbacks for generated rows.

use chrono::Local;

/// Today's date as `YYYY-MM-DD`, used when the specification carries no
/// submission date.
pub(crate) fn current_date() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}
