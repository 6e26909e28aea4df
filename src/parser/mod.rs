//! Rule-based parser for free-form reservation requests.
//!
//! Turns text like "book 2 tonight 8pm at Prozdor" into a [`ParsedRequest`].
//! Four extractors read the same text independently:
//! - [`date`]: relative days, weekdays, month names, ISO and numeric dates
//! - [`time`]: colon times and hours with am/pm
//! - [`party`]: head counts, defaulting to 2
//! - [`venue`]: the restaurant name
//!
//! Each extractor is an ordered table of rules. The first rule that yields a
//! valid value wins, and nothing ever fails: a missing field is reported as
//! an empty or default value.
//!
//! All functions are pure. The reference instant is passed in, never read
//! from the clock, so the same text and instant always parse the same way.

pub mod date;
pub mod noise;
pub mod party;
mod request;
pub mod time;
pub mod venue;

use chrono::{Local, NaiveDateTime};

pub use request::{DEFAULT_HOUR, ParsedRequest};

/// Parse a reservation request.
///
/// `now` anchors "tonight", "tomorrow" and weekday names. When `None`, the
/// local wall clock is read once here and passed down.
pub fn parse_reservation_request(text: &str, now: Option<NaiveDateTime>) -> ParsedRequest {
    let now = now.unwrap_or_else(|| Local::now().naive_local());
    ParsedRequest::parse(text, now)
}
