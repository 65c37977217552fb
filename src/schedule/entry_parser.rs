//! Schedule line splitting.

/// A schedule line split into its employee name and day range tokens.
///
/// Both borrow from the original line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry<'a> {
    /// The employee name, the text before the first `=`.
    pub name: &'a str,
    /// The day range tokens, in the order they appear.
    pub tokens: Vec<&'a str>,
}

/// Splits a validated schedule line into name and tokens.
///
/// The line is split on the first `=`, and the remainder on `,`. No
/// validation happens here; run
/// [`validate_schedule`](super::validate_schedule) first.
///
/// # Example
///
/// ```
/// use schedule_pay::schedule::parse_schedule_entry;
///
/// let entry = parse_schedule_entry("RENE=MO10:00-12:00,TU10:00-12:00");
/// assert_eq!(entry.name, "RENE");
/// assert_eq!(entry.tokens, vec!["MO10:00-12:00", "TU10:00-12:00"]);
/// ```
pub fn parse_schedule_entry(line: &str) -> ScheduleEntry<'_> {
    let (name, hours) = line.split_once('=').unwrap_or((line, ""));
    let tokens = if hours.is_empty() {
        Vec::new()
    } else {
        hours.split(',').collect()
    };
    ScheduleEntry { name, tokens }
}
