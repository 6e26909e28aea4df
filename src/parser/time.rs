//! Time-of-day extraction.
//!
//! Only explicit clock readings count: a colon form ("20:30", "7:30pm") or
//! an hour with a meridiem ("8pm"). Bare numbers are never a time, so date
//! fragments and head counts are not misread.

use std::sync::LazyLock;

use chrono::NaiveTime;
use regex::Regex;

/// A single time rule, applied to lower-cased text with dates removed.
type TimeRule = fn(&str) -> Option<NaiveTime>;

/// Rules in precedence order.
const TIME_RULES: &[TimeRule] = &[clock_time, meridiem_hour];

static ISO_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[0-9]{4}-[0-9]{2}-[0-9]{2}\b").expect("valid ISO date regex")
});

static NUMERIC_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[0-9]{1,2}[/\-][0-9]{1,2}\b").expect("valid numeric pair regex")
});

static CLOCK_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([0-9]{1,2}):([0-9]{2})(?::[0-9]{2})?\s*(am|pm)?\b")
        .expect("valid clock time regex")
});

static MERIDIEM_HOUR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([0-9]{1,2})\s*(am|pm)\b").expect("valid meridiem regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "am" => Some(Meridiem::Am),
            "pm" => Some(Meridiem::Pm),
            _ => None,
        }
    }
}

/// Extract a time of day from `text`. Returns `None` if no clock reading is
/// present.
pub fn extract_time(text: &str) -> Option<NaiveTime> {
    let without_dates = ISO_DATE.replace_all(text, "");
    let without_dates = NUMERIC_PAIR.replace_all(&without_dates, "");
    let lower = without_dates.to_lowercase();
    TIME_RULES.iter().find_map(|rule| rule(&lower))
}

/// "20:30", "7:30pm", "12:00 am", "19:45:30"
fn clock_time(lower: &str) -> Option<NaiveTime> {
    let caps = CLOCK_TIME.captures(lower)?;
    let hour = caps[1].parse().ok()?;
    let minute = caps[2].parse().ok()?;
    let meridiem = caps.get(3).and_then(|m| Meridiem::from_suffix(m.as_str()));
    NaiveTime::from_hms_opt(to_24_hour(hour, meridiem), minute, 0)
}

/// "8pm", "9 am"
fn meridiem_hour(lower: &str) -> Option<NaiveTime> {
    let caps = MERIDIEM_HOUR.captures(lower)?;
    let hour = caps[1].parse().ok()?;
    let meridiem = Meridiem::from_suffix(&caps[2]);
    NaiveTime::from_hms_opt(to_24_hour(hour, meridiem), 0, 0)
}

/// 12-hour to 24-hour. "12am" is midnight and "12pm" is noon.
fn to_24_hour(hour: u32, meridiem: Option<Meridiem>) -> u32 {
    match meridiem {
        Some(Meridiem::Pm) if hour != 12 => hour + 12,
        Some(Meridiem::Am) if hour == 12 => 0,
        _ => hour,
    }
}
