//! Party-size extraction.

use std::sync::LazyLock;

use regex::Regex;

/// Party size used when the request does not state one.
pub const DEFAULT_PARTY_SIZE: u8 = 2;

/// Largest party size accepted from the text.
pub const MAX_PARTY_SIZE: u8 = 20;

/// A single party-size rule, applied to the lower-cased request text.
type PartyRule = fn(&str) -> Option<u8>;

/// Rules in precedence order.
const PARTY_RULES: &[PartyRule] = &[
    for_count,
    count_with_noun,
    party_of,
    table_for,
    lone_digit,
];

static FOR_COUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"for\s+([0-9]+)\s*(?:people|person|guests?|pax|seats?)?")
        .expect("valid for-count regex")
});

static COUNT_WITH_NOUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+)\s+(?:people|persons?|guests?|pax|seats?|diners?)")
        .expect("valid count-noun regex")
});

static PARTY_OF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"party\s+of\s+([0-9]+)").expect("valid party-of regex"));

static TABLE_FOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"table\s+for\s+([0-9]+)").expect("valid table-for regex"));

/// Times with a meridiem, removed before looking for a lone digit.
static MERIDIEM_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[0-9]{1,2}(?::[0-9]{2})?\s*(?:am|pm)\b").expect("valid meridiem time regex")
});

static LONE_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[2-9]\b").expect("valid lone digit regex"));

/// Extract the number of diners from `text`, defaulting to
/// [`DEFAULT_PARTY_SIZE`].
///
/// A structured match outside `1..=20` is ignored and the next rule is tried.
pub fn extract_party_size(text: &str) -> u8 {
    let lower = text.to_lowercase();
    PARTY_RULES
        .iter()
        .find_map(|rule| rule(&lower))
        .unwrap_or(DEFAULT_PARTY_SIZE)
}

/// "for 4", "for 4 people"
fn for_count(lower: &str) -> Option<u8> {
    first_count(&FOR_COUNT, lower)
}

/// "6 guests", "3 people"
fn count_with_noun(lower: &str) -> Option<u8> {
    first_count(&COUNT_WITH_NOUN, lower)
}

/// "party of 5"
fn party_of(lower: &str) -> Option<u8> {
    first_count(&PARTY_OF, lower)
}

/// "table for 3"
fn table_for(lower: &str) -> Option<u8> {
    first_count(&TABLE_FOR, lower)
}

/// Terse phrasing with no noun, e.g. "book 2 tonight 8pm".
///
/// Only a single digit 2-9 standing on its own counts. A digit touching a
/// colon or another digit is part of a clock reading or a larger number.
fn lone_digit(lower: &str) -> Option<u8> {
    let stripped = MERIDIEM_TIME.replace_all(lower, "");
    let bytes = stripped.as_bytes();
    let is_clock_char = |byte: Option<u8>| matches!(byte, Some(b':' | b'0'..=b'9'));

    LONE_DIGIT
        .find_iter(&stripped)
        .find(|m| {
            let before = m.start().checked_sub(1).and_then(|i| bytes.get(i)).copied();
            let after = bytes.get(m.end()).copied();
            !is_clock_char(before) && !is_clock_char(after)
        })
        .and_then(|m| m.as_str().parse().ok())
}

/// First match of `regex`, kept only if it is a plausible party size.
fn first_count(regex: &Regex, lower: &str) -> Option<u8> {
    let caps = regex.captures(lower)?;
    caps[1]
        .parse::<u8>()
        .ok()
        .filter(|n| (1..=MAX_PARTY_SIZE).contains(n))
}
