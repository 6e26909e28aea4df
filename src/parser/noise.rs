//! Filler words that never belong to a venue name.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Booking verbs, meal names, weekday names, fillers and party-size nouns.
///
/// Lookups are keyed by a single lower-cased token. Multi-word phrases and
/// substrings are never matched, so a venue called "Atlas" keeps its "at".
static NOISE_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        // Booking verbs and fillers
        "book",
        "reserve",
        "make",
        "a",
        "table",
        "reservation",
        "for",
        "at",
        "in",
        "the",
        "restaurant",
        "please",
        "me",
        "us",
        "want",
        "need",
        "get",
        "find",
        "search",
        "check",
        // Relative dates
        "tonight",
        "today",
        "tomorrow",
        "next",
        // Party-size nouns
        "people",
        "person",
        "guests",
        "guest",
        "pax",
        "seats",
        "seat",
        // Meals
        "dinner",
        "lunch",
        "breakfast",
        "brunch",
        // Weekdays
        "monday",
        "tuesday",
        "wednesday",
        "thursday",
        "friday",
        "saturday",
        "sunday",
        "mon",
        "tue",
        "wed",
        "thu",
        "fri",
        "sat",
        "sun",
        // Meridiem
        "am",
        "pm",
    ])
});

/// Returns true if `token` is a noise word, ignoring case.
pub fn is_noise_word(token: &str) -> bool {
    NOISE_WORDS.contains(token.to_lowercase().as_str())
}

/// Drop trailing noise words from a candidate name.
///
/// `"Prozdor for"` becomes `"Prozdor"`; a candidate made only of noise
/// collapses to an empty string.
pub fn trim_trailing_noise(name: &str) -> String {
    let mut parts: Vec<&str> = name.split_whitespace().collect();
    while parts.last().is_some_and(|word| is_noise_word(word)) {
        parts.pop();
    }
    parts.join(" ")
}
