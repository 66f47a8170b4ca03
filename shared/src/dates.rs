//! Display helpers for task timestamps.
//!
//! Every function takes instants already converted into the viewer's time
//! zone; relative helpers also take the current instant explicitly so callers
//! decide where "now" comes from.

use std::fmt::Display;

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Timelike, Utc};

const MINUTES_IN_DAY: i64 = 1_440;
const MINUTES_IN_ALMOST_TWO_DAYS: i64 = 2_520;
const MINUTES_IN_MONTH: i64 = 43_200;
const MINUTES_IN_TWO_MONTHS: i64 = 86_400;

/// `Mar 05, 2025`
pub fn format_date<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.format("%b %d, %Y").to_string()
}

/// `Mar 05, 2025 09:30`
pub fn format_date_time<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.format("%b %d, %Y %H:%M").to_string()
}

/// `2025-03-05 09:30:00`, used in report headers.
pub fn format_timestamp<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// `2025-03-05`
pub fn iso_date<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.format("%Y-%m-%d").to_string()
}

/// Calendar-aware description: `Today at 09:30`, `Tomorrow at ..`,
/// `Yesterday at ..`, otherwise a distance such as `in 3 days`.
pub fn format_relative<Tz>(at: &DateTime<Tz>, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let day_delta = (at.date_naive() - now.date_naive()).num_days();
    let clock = at.format("%H:%M");
    match day_delta {
        0 => format!("Today at {clock}"),
        1 => format!("Tomorrow at {clock}"),
        -1 => format!("Yesterday at {clock}"),
        _ => format_distance_with_suffix(at, now),
    }
}

/// `Overdue by 2 days` or `Due in 3 days`.
pub fn format_deadline<Tz>(deadline: &DateTime<Tz>, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
{
    if deadline < now {
        format!("Overdue by {}", format_distance(deadline, now))
    } else {
        format!("Due {}", format_distance_with_suffix(deadline, now))
    }
}

/// Distance with direction: `in 3 days` or `3 days ago`.
pub fn format_distance_with_suffix<Tz>(at: &DateTime<Tz>, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
{
    let distance = format_distance(at, now);
    if at > now {
        format!("in {distance}")
    } else {
        format!("{distance} ago")
    }
}

/// Approximate, human-readable distance between two instants. Symmetric.
pub fn format_distance<Tz>(a: &DateTime<Tz>, b: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
{
    let (earlier, later) = if a <= b { (a, b) } else { (b, a) };
    let seconds = (later.clone() - earlier.clone()).num_seconds();
    let minutes = round_div(seconds, 60);

    if minutes < 2 {
        return if minutes == 0 {
            "less than a minute".to_string()
        } else {
            "1 minute".to_string()
        };
    }
    if minutes < 45 {
        return format!("{minutes} minutes");
    }
    if minutes < 90 {
        return "about 1 hour".to_string();
    }
    if minutes < MINUTES_IN_DAY {
        return format!("about {} hours", round_div(minutes, 60));
    }
    if minutes < MINUTES_IN_ALMOST_TWO_DAYS {
        return "1 day".to_string();
    }
    if minutes < MINUTES_IN_MONTH {
        return plural(round_div(minutes, MINUTES_IN_DAY), "day");
    }
    if minutes < MINUTES_IN_TWO_MONTHS {
        let months = round_div(minutes, MINUTES_IN_MONTH);
        return format!("about {}", plural(months, "month"));
    }

    let months = whole_months_between(earlier, later);
    if months < 12 {
        return plural(round_div(minutes, MINUTES_IN_MONTH), "month");
    }
    let years = months / 12;
    match months % 12 {
        0..=2 => format!("about {}", plural(years, "year")),
        3..=8 => format!("over {}", plural(years, "year")),
        _ => format!("almost {}", plural(years + 1, "year")),
    }
}

/// Parses RFC 3339 timestamps and bare `YYYY-MM-DD` dates (midnight UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&midnight))
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

/// Integer division rounding half up; both operands are non-negative here.
fn round_div(value: i64, divisor: i64) -> i64 {
    (value + divisor / 2) / divisor
}

fn whole_months_between<Tz: TimeZone>(earlier: &DateTime<Tz>, later: &DateTime<Tz>) -> i64 {
    let (from, to) = (earlier.naive_local(), later.naive_local());
    let mut months =
        i64::from(to.year() - from.year()) * 12 + i64::from(to.month()) - i64::from(from.month());
    let to_key = (to.day(), to.num_seconds_from_midnight());
    let from_key = (from.day(), from.num_seconds_from_midnight());
    if months > 0 && to_key < from_key {
        months -= 1;
    }
    months
}
