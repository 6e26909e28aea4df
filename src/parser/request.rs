//! The structured reservation request.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::date::extract_date;
use super::party::extract_party_size;
use super::time::extract_time;
use super::venue::extract_restaurant_name;
use crate::error::RequestError;

/// Hour used when the request names no time.
pub const DEFAULT_HOUR: u32 = 20;

/// A reservation request recovered from free-form text.
///
/// Built once by [`ParsedRequest::parse`] and read-only afterwards. The
/// compact and display formats are derived from the stored fields on each
/// call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRequest {
    restaurant_name: String,
    date: Option<NaiveDate>,
    time: NaiveTime,
    party_size: u8,
    raw: String,
}

impl ParsedRequest {
    /// Parse `text`, resolving relative dates against `now`.
    ///
    /// Each field is extracted independently from the same text. Missing
    /// fields fall back to an empty name, no date, 20:00 and a party of 2.
    pub fn parse(text: &str, now: NaiveDateTime) -> Self {
        let request = Self {
            restaurant_name: extract_restaurant_name(text),
            date: extract_date(text, now.date()),
            time: extract_time(text).unwrap_or_else(default_time),
            party_size: extract_party_size(text),
            raw: text.to_string(),
        };

        tracing::debug!(
            restaurant = %request.restaurant_name,
            date = %request.date_yyyymmdd(),
            time = %request.time_str(),
            party_size = request.party_size,
            "Parsed reservation request"
        );

        request
    }

    /// Venue name, empty when none was found.
    pub fn restaurant_name(&self) -> &str {
        &self.restaurant_name
    }

    /// Requested date, if the text named one.
    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// Requested time of day.
    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// Number of diners.
    pub fn party_size(&self) -> u8 {
        self.party_size
    }

    /// The original request text.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Date as `YYYYMMDD`, or empty when absent.
    pub fn date_yyyymmdd(&self) -> String {
        self.date
            .map(|date| date.format("%Y%m%d").to_string())
            .unwrap_or_default()
    }

    /// Date as e.g. `Wednesday, March 5`, or empty when absent.
    pub fn display_date(&self) -> String {
        self.date
            .map(|date| date.format("%A, %B %-d").to_string())
            .unwrap_or_default()
    }

    /// Time as `HH:MM`.
    pub fn time_str(&self) -> String {
        self.time.format("%H:%M").to_string()
    }

    /// Time as `HHMM`.
    pub fn time_hhmm(&self) -> String {
        self.time.format("%H%M").to_string()
    }

    /// Check that the request carries what a booking needs.
    ///
    /// The restaurant is checked before the date.
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.restaurant_name.is_empty() {
            tracing::warn!(raw = %self.raw, "No restaurant name in request");
            return Err(RequestError::MissingRestaurant);
        }
        if self.date.is_none() {
            tracing::warn!(
                raw = %self.raw,
                restaurant = %self.restaurant_name,
                "No date in request"
            );
            return Err(RequestError::MissingDate);
        }
        Ok(())
    }
}

impl Serialize for ParsedRequest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ParsedRequest", 8)?;
        state.serialize_field("restaurant_name", &self.restaurant_name)?;
        state.serialize_field("date", &self.date)?;
        state.serialize_field("date_yyyymmdd", &self.date_yyyymmdd())?;
        state.serialize_field("display_date", &self.display_date())?;
        state.serialize_field("time", &self.time_str())?;
        state.serialize_field("time_hhmm", &self.time_hhmm())?;
        state.serialize_field("party_size", &self.party_size)?;
        state.serialize_field("raw", &self.raw)?;
        state.end()
    }
}

fn default_time() -> NaiveTime {
    NaiveTime::from_hms_opt(DEFAULT_HOUR, 0, 0).unwrap_or(NaiveTime::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Wednesday noon.
    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 5)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_terse_request() {
        let request = ParsedRequest::parse("book 2 tonight 8pm at Prozdor", now());
        assert_eq!(request.restaurant_name(), "Prozdor");
        assert_eq!(request.date(), NaiveDate::from_ymd_opt(2025, 3, 5));
        assert_eq!(request.time_str(), "20:00");
        assert_eq!(request.party_size(), 2);
        assert_eq!(request.raw(), "book 2 tonight 8pm at Prozdor");
    }

    #[test]
    fn test_default_time() {
        let request = ParsedRequest::parse("book tomorrow at Prozdor for 2", now());
        assert_eq!(request.time_str(), "20:00");
        assert_eq!(request.time_hhmm(), "2000");
    }

    #[test]
    fn test_derived_formats() {
        let request = ParsedRequest::parse("tonight 7:30pm at Prozdor", now());
        assert_eq!(request.date_yyyymmdd(), "20250305");
        assert_eq!(request.display_date(), "Wednesday, March 5");
        assert_eq!(request.time_str(), "19:30");
        assert_eq!(request.time_hhmm(), "1930");
    }

    #[test]
    fn test_derived_formats_without_date() {
        let request = ParsedRequest::parse("8pm at Prozdor", now());
        assert_eq!(request.date_yyyymmdd(), "");
        assert_eq!(request.display_date(), "");
    }

    #[test]
    fn test_validate_checks_restaurant_first() {
        let request = ParsedRequest::parse("", now());
        assert_eq!(request.validate(), Err(RequestError::MissingRestaurant));
    }

    #[test]
    fn test_validate_missing_date() {
        let request = ParsedRequest::parse("8pm at Prozdor", now());
        assert_eq!(request.validate(), Err(RequestError::MissingDate));
    }

    #[test]
    fn test_validate_ok() {
        let request = ParsedRequest::parse("tomorrow 8pm at Prozdor", now());
        assert_eq!(request.validate(), Ok(()));
    }

    #[test]
    fn test_serialize() {
        let request = ParsedRequest::parse("book 4 tomorrow 9pm at Catit", now());
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["restaurant_name"], "Catit");
        assert_eq!(json["date"], "2025-03-06");
        assert_eq!(json["date_yyyymmdd"], "20250306");
        assert_eq!(json["display_date"], "Thursday, March 6");
        assert_eq!(json["time"], "21:00");
        assert_eq!(json["time_hhmm"], "2100");
        assert_eq!(json["party_size"], 4);
    }

    #[test]
    fn test_serialize_missing_date_is_null() {
        let request = ParsedRequest::parse("at Catit", now());
        let json = serde_json::to_value(&request).unwrap();
        assert!(json["date"].is_null());
    }
}
