use chrono::Datelike;

/// Returns the 1-based ordinal of `date` within its year.
///
/// January 1st maps to 1, December 31st to 365 (366 in leap years). Both the
/// upstream entry mapping and the message rotation key off this value, so the
/// convention is pinned here once and reused everywhere.
pub fn day_index(date: impl Datelike) -> u32 {
    date.ordinal()
}
