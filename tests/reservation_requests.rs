//! End-to-end parsing of reservation requests through the public API.

use bookaboo::{ParsedRequest, RequestError, parse_reservation_request};
use chrono::{Days, NaiveDate, NaiveDateTime};
use pretty_assertions::assert_eq;

/// Wednesday 2025-03-05, noon.
fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 5)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn today() -> NaiveDate {
    now().date()
}

fn parse(text: &str) -> ParsedRequest {
    parse_reservation_request(text, Some(now()))
}

/// (restaurant, YYYYMMDD, HH:MM, party size)
fn fields(request: &ParsedRequest) -> (String, String, String, u8) {
    (
        request.restaurant_name().to_string(),
        request.date_yyyymmdd(),
        request.time_str(),
        request.party_size(),
    )
}

fn expected(name: &str, date: &str, time: &str, party: u8) -> (String, String, String, u8) {
    (name.to_string(), date.to_string(), time.to_string(), party)
}

#[test]
fn test_terse_request() {
    assert_eq!(
        fields(&parse("book 2 tonight 8pm at Prozdor")),
        expected("Prozdor", "20250305", "20:00", 2)
    );
}

#[test]
fn test_reservation_with_colon_time() {
    assert_eq!(
        fields(&parse("reservation for 4 tomorrow 7:30pm at Machneyuda")),
        expected("Machneyuda", "20250306", "19:30", 4)
    );
}

#[test]
fn test_multi_word_venue_with_next_weekday() {
    let request = parse("dinner next Friday 9pm, 3 people, at Taizu Bar");
    assert!(request.restaurant_name().contains("Taizu"));
    assert_eq!(request.date(), NaiveDate::from_ymd_opt(2025, 3, 7));
    assert_eq!(request.time_str(), "21:00");
    assert_eq!(request.party_size(), 3);
}

#[test]
fn test_party_size_phrasings() {
    assert_eq!(parse("reservation for 4 people tonight 8pm at Prozdor").party_size(), 4);
    assert_eq!(parse("party of 5 at Machneyuda tomorrow 7pm").party_size(), 5);
    assert_eq!(parse("table for 3 at Taizu next Friday 9pm").party_size(), 3);
    assert_eq!(parse("6 guests at HaBasta on Saturday").party_size(), 6);
    assert_eq!(parse("book tonight 8pm at Prozdor").party_size(), 2);
}

#[test]
fn test_same_day_and_next_day_phrases() {
    for text in ["book tonight 8pm at Prozdor", "book today 8pm at Prozdor"] {
        assert_eq!(parse(text).date(), Some(today()), "{text}");
    }
    assert_eq!(
        parse("book tomorrow 7pm at Prozdor").date(),
        today().checked_add_days(Days::new(1))
    );
}

#[test]
fn test_weekday_resolution_from_wednesday() {
    let march = |day| NaiveDate::from_ymd_opt(2025, 3, day);
    assert_eq!(parse("next Friday 9pm at Taizu for 2").date(), march(7));
    assert_eq!(parse("next Saturday 8pm at Prozdor").date(), march(8));
    assert_eq!(parse("Thursday 8pm at Prozdor").date(), march(6));
    assert_eq!(parse("Wednesday 8pm at Prozdor").date(), march(12));
}

#[test]
fn test_iso_date_does_not_leak_into_time_or_party() {
    assert_eq!(
        fields(&parse("book on 2025-03-15 at 8pm at Prozdor for 2")),
        expected("Prozdor", "20250315", "20:00", 2)
    );
    assert_eq!(parse("book on 2025-03-10 at 20:30 at Prozdor").time_str(), "20:30");
}

#[test]
fn test_time_conversions() {
    assert_eq!(parse("tonight 7:30pm at Prozdor").time_str(), "19:30");
    assert_eq!(parse("tonight 12:00 am at Prozdor").time_str(), "00:00");
    assert_eq!(parse("lunch at 12pm at HaBasta").time_str(), "12:00");
    assert_eq!(parse("book tomorrow at Prozdor for 2").time_str(), "20:00");
}

#[test]
fn test_display_formats() {
    let request = parse("tonight 8pm at Prozdor");
    assert_eq!(request.date_yyyymmdd(), "20250305");
    assert_eq!(request.display_date(), "Wednesday, March 5");
    assert_eq!(request.time_hhmm(), "2000");
}

#[test]
fn test_empty_text() {
    let request = parse("");
    assert_eq!(fields(&request), expected("", "", "20:00", 2));
    assert_eq!(request.date(), None);
    assert_eq!(request.raw(), "");
    assert_eq!(request.validate(), Err(RequestError::MissingRestaurant));
}

#[test]
fn test_missing_date_fails_validation() {
    let request = parse("8pm at Prozdor for 4");
    assert_eq!(request.restaurant_name(), "Prozdor");
    assert_eq!(request.validate(), Err(RequestError::MissingDate));
}

#[test]
fn test_parsing_is_deterministic() {
    let text = "dinner next Friday 9pm, 3 people, at Taizu Bar";
    assert_eq!(parse(text), parse(text));
}

#[test]
fn test_relative_dates_never_resolve_into_the_past() {
    let texts = [
        "tonight",
        "tomorrow",
        "monday",
        "next sunday",
        "jan 1",
        "march 4",
        "1/3",
        "12/31",
    ];
    for text in texts {
        let date = parse(text).date().unwrap();
        assert!(date >= today(), "{text} resolved to {date}");
    }
}

#[test]
fn test_json_output() {
    let json = serde_json::to_value(parse("party of 5 at Machneyuda tomorrow 7pm")).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "restaurant_name": "Machneyuda",
            "date": "2025-03-06",
            "date_yyyymmdd": "20250306",
            "display_date": "Thursday, March 6",
            "time": "19:00",
            "time_hhmm": "1900",
            "party_size": 5,
            "raw": "party of 5 at Machneyuda tomorrow 7pm",
        })
    );
}
