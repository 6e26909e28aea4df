//! Restaurant-name extraction.
//!
//! Best effort only: "at <Name>" is the strongest signal, then "in <Name>",
//! then any capitalised words that are not booking filler.

use std::sync::LazyLock;

use regex::Regex;

use super::noise::{is_noise_word, trim_trailing_noise};

/// A single name rule, applied to the original request text.
type NameRule = fn(&str) -> Option<String>;

/// Rules in precedence order.
const NAME_RULES: &[NameRule] = &[after_at, after_in, capitalized_words];

/// The name ends at the end of the text, at punctuation, or where a
/// temporal keyword or a digit starts.
static AT_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)\bat\s+([A-Za-z][A-Za-z '\-]+?)",
        r"(?:\s*$|[,.!?]|\s+(?:on|this|next|tonight|tomorrow|[0-9]))",
    ))
    .expect("valid at-name regex")
});

static IN_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bin\s+([A-Za-z][A-Za-z '\-]+?)(?:\s*$|[,.!?])").expect("valid in-name regex")
});

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z'’\-]+").expect("valid word regex"));

/// Extract the venue name from `text`. Returns an empty string when nothing
/// looks like a name.
pub fn extract_restaurant_name(text: &str) -> String {
    NAME_RULES
        .iter()
        .find_map(|rule| rule(text))
        .unwrap_or_default()
}

/// "at Prozdor", "at Taizu Bar tonight"
fn after_at(text: &str) -> Option<String> {
    let caps = AT_NAME.captures(text)?;
    let name = caps[1].trim();
    if is_noise_word(name) {
        return None;
    }
    Some(trim_trailing_noise(name))
}

/// "in Jaffa", with filler words dropped from the phrase.
fn after_in(text: &str) -> Option<String> {
    let caps = IN_NAME.captures(text)?;
    let words: Vec<&str> = caps[1]
        .split_whitespace()
        .filter(|word| !is_noise_word(word))
        .collect();
    if words.is_empty() {
        return None;
    }
    Some(trim_trailing_noise(&words.join(" ")))
}

/// Every capitalised non-filler word, in order of appearance.
fn capitalized_words(text: &str) -> Option<String> {
    let words: Vec<&str> = WORD
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|word| word.chars().next().is_some_and(char::is_uppercase))
        .filter(|word| !is_noise_word(word))
        .collect();
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}
