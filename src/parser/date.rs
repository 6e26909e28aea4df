//! Date extraction.
//!
//! Rules run in a fixed order and the first one that yields a valid date
//! wins. Relative phrases come first because they are unambiguous; numeric
//! forms come last since their digits collide with times and party sizes.

use std::sync::LazyLock;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use regex::Regex;

/// A single date rule, applied to the lower-cased request text.
type DateRule = fn(&str, NaiveDate) -> Option<NaiveDate>;

/// Rules in precedence order.
const DATE_RULES: &[DateRule] = &[
    same_day,
    next_day,
    weekday,
    month_and_day,
    iso_date,
    numeric_pair,
];

/// Weekday names and abbreviations, in lookup order.
const WEEKDAY_NAMES: &[(&str, Weekday)] = &[
    ("monday", Weekday::Mon),
    ("mon", Weekday::Mon),
    ("tuesday", Weekday::Tue),
    ("tue", Weekday::Tue),
    ("tues", Weekday::Tue),
    ("wednesday", Weekday::Wed),
    ("wed", Weekday::Wed),
    ("thursday", Weekday::Thu),
    ("thu", Weekday::Thu),
    ("thur", Weekday::Thu),
    ("thurs", Weekday::Thu),
    ("friday", Weekday::Fri),
    ("fri", Weekday::Fri),
    ("saturday", Weekday::Sat),
    ("sat", Weekday::Sat),
    ("sunday", Weekday::Sun),
    ("sun", Weekday::Sun),
];

/// Month names and abbreviations, in lookup order.
const MONTH_NAMES: &[(&str, u32)] = &[
    ("january", 1),
    ("jan", 1),
    ("february", 2),
    ("feb", 2),
    ("march", 3),
    ("mar", 3),
    ("april", 4),
    ("apr", 4),
    ("may", 5),
    ("june", 6),
    ("jun", 6),
    ("july", 7),
    ("jul", 7),
    ("august", 8),
    ("aug", 8),
    ("september", 9),
    ("sep", 9),
    ("sept", 9),
    ("october", 10),
    ("oct", 10),
    ("november", 11),
    ("nov", 11),
    ("december", 12),
    ("dec", 12),
];

static SAME_DAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\btonight\b|\btoday\b").expect("valid same-day regex"));

static NEXT_DAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\btomorrow\b").expect("valid next-day regex"));

static ISO_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([0-9]{4})-([0-9]{2})-([0-9]{2})\b").expect("valid ISO date regex")
});

static NUMERIC_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([0-9]{1,2})[/\-]([0-9]{1,2})\b").expect("valid numeric pair regex")
});

struct WeekdayPattern {
    weekday: Weekday,
    regex: Regex,
}

struct MonthPattern {
    month: u32,
    /// "march 15"
    name_first: Regex,
    /// "15 march"
    day_first: Regex,
}

static WEEKDAY_PATTERNS: LazyLock<Vec<WeekdayPattern>> = LazyLock::new(|| {
    WEEKDAY_NAMES
        .iter()
        .map(|&(name, weekday)| WeekdayPattern {
            weekday,
            regex: Regex::new(&format!(r"\b{name}\b")).expect("valid weekday regex"),
        })
        .collect()
});

static MONTH_PATTERNS: LazyLock<Vec<MonthPattern>> = LazyLock::new(|| {
    MONTH_NAMES
        .iter()
        .map(|&(name, month)| MonthPattern {
            month,
            name_first: Regex::new(&format!(r"\b{name}\s+([0-9]{{1,2}})\b"))
                .expect("valid month-day regex"),
            day_first: Regex::new(&format!(r"\b([0-9]{{1,2}})\s+{name}\b"))
                .expect("valid day-month regex"),
        })
        .collect()
});

/// Extract a calendar date from `text`, resolving relative phrases against
/// `today`. Returns `None` when no date phrase is present.
pub fn extract_date(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    let lower = text.to_lowercase();
    DATE_RULES.iter().find_map(|rule| rule(&lower, today))
}

/// "tonight" / "today"
fn same_day(lower: &str, today: NaiveDate) -> Option<NaiveDate> {
    SAME_DAY.is_match(lower).then_some(today)
}

/// "tomorrow"
fn next_day(lower: &str, today: NaiveDate) -> Option<NaiveDate> {
    if NEXT_DAY.is_match(lower) {
        today.succ_opt()
    } else {
        None
    }
}

/// A weekday name, optionally qualified with "next".
///
/// The nearest upcoming occurrence is chosen. Today's own weekday always
/// means a week from today. "next" does not push a weekday that is still
/// ahead this week into the following week: on a Wednesday, "next Friday"
/// is two days out, the same as a bare "Friday".
fn weekday(lower: &str, today: NaiveDate) -> Option<NaiveDate> {
    let pattern = WEEKDAY_PATTERNS.iter().find(|p| p.regex.is_match(lower))?;
    let days_ahead = match days_until(today.weekday(), pattern.weekday) {
        0 => 7,
        n => n,
    };
    today.checked_add_days(Days::new(u64::from(days_ahead)))
}

/// "march 15" or "15 mar"
fn month_and_day(lower: &str, today: NaiveDate) -> Option<NaiveDate> {
    MONTH_PATTERNS.iter().find_map(|pattern| {
        let caps = pattern
            .name_first
            .captures(lower)
            .or_else(|| pattern.day_first.captures(lower))?;
        let day = caps[1].parse().ok()?;
        roll_forward(today, pattern.month, day)
    })
}

/// "2025-03-15", taken literally.
fn iso_date(lower: &str, _today: NaiveDate) -> Option<NaiveDate> {
    let caps = ISO_DATE.captures(lower)?;
    let year = caps[1].parse().ok()?;
    let month = caps[2].parse().ok()?;
    let day = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// "15/3" or "3-15" without a year. Day-first is tried before month-first.
fn numeric_pair(lower: &str, today: NaiveDate) -> Option<NaiveDate> {
    let caps = NUMERIC_PAIR.captures(lower)?;
    let a: u32 = caps[1].parse().ok()?;
    let b: u32 = caps[2].parse().ok()?;

    [(b, a), (a, b)]
        .into_iter()
        .filter(|&(month, day)| (1..=12).contains(&month) && (1..=31).contains(&day))
        .find_map(|(month, day)| roll_forward(today, month, day))
}

/// Build `month`/`day` in the current year, moving to next year if that
/// date has already passed.
fn roll_forward(today: NaiveDate, month: u32, day: u32) -> Option<NaiveDate> {
    let date = NaiveDate::from_ymd_opt(today.year(), month, day)?;
    if date < today {
        NaiveDate::from_ymd_opt(today.year() + 1, month, day)
    } else {
        Some(date)
    }
}

/// Days from `from` forward to the next `to`, in `0..7`.
fn days_until(from: Weekday, to: Weekday) -> u32 {
    (to.num_days_from_monday() + 7 - from.num_days_from_monday()) % 7
}
