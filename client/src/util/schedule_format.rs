//! Display formatting for section meeting times and counts.

#[cfg(test)]
#[path = "schedule_format_test.rs"]
mod schedule_format_test;

use crate::state::schedule::{ClassSection, Weekday};

/// Parse 24-hour `HH:MM` into `(hour, minute)`.
pub fn parse_clock(raw: &str) -> Option<(u8, u8)> {
    let (hours, minutes) = raw.trim().split_once(':')?;
    let digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if hours.is_empty() || hours.len() > 2 || minutes.len() != 2 || !digits(hours) || !digits(minutes) {
        return None;
    }
    let hour: u8 = hours.parse().ok()?;
    let minute: u8 = minutes.parse().ok()?;
    (hour < 24 && minute < 60).then_some((hour, minute))
}

/// Render `HH:MM` as a 12-hour clock time (`"13:05"` -> `"1:05 PM"`).
///
/// Input that is not a valid time is returned unchanged.
pub fn format_time(raw: &str) -> String {
    let Some((hour, minute)) = parse_clock(raw) else {
        return raw.to_owned();
    };
    let suffix = if hour >= 12 { "PM" } else { "AM" };
    let display_hour = match hour {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };
    format!("{display_hour}:{minute:02} {suffix}")
}

/// Concatenate day abbreviations in the given order (`[Mon, Thu]` -> `"MR"`).
pub fn format_days(days: &[Weekday]) -> String {
    days.iter().map(|d| d.abbreviation()).collect()
}

/// `"MWF 9:00 AM-9:50 AM"`.
pub fn meeting_summary(section: &ClassSection) -> String {
    format!(
        "{} {}-{}",
        format_days(&section.days),
        format_time(&section.start_time),
        format_time(&section.end_time)
    )
}

/// `"1 section"` / `"3 sections"`.
pub fn section_count_label(count: usize) -> String {
    if count == 1 { "1 section".to_owned() } else { format!("{count} sections") }
}

/// `"1 credit"` / `"4 credits"`.
pub fn credits_label(credits: u32) -> String {
    if credits == 1 { "1 credit".to_owned() } else { format!("{credits} credits") }
}
