use time::OffsetDateTime;

const NANOS_PER_DAY: i128 = 86_400 * 1_000_000_000;

/// Days in four 365.25-day years.
const DAYS_PER_FOUR_YEARS: i128 = 1461;

/// Whole years elapsed between `date_of_birth` and `now`.
///
/// Uses a fixed 365.25-day year and truncates toward zero, i.e.
/// `trunc(total_days / 365.25)`. This is not calendar arithmetic: a birthday
/// may be counted a day early or late around leap years.
#[must_use]
#[allow(clippy::integer_division)] // truncation is the defined rounding
pub fn age_in_years(date_of_birth: OffsetDateTime, now: OffsetDateTime) -> i32 {
    let elapsed = (now - date_of_birth).whole_nanoseconds();
    let years = elapsed * 4 / (NANOS_PER_DAY * DAYS_PER_FOUR_YEARS);
    i32::try_from(years).unwrap_or(if years < 0 { i32::MIN } else { i32::MAX })
}
