//! Runtime configuration, read from the environment.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::ConfigError;

/// Pins the reference instant used for relative dates.
pub const ENV_NOW: &str = "BOOKABOO_NOW";
/// Output format for parsed requests.
pub const ENV_OUTPUT: &str = "BOOKABOO_OUTPUT";
/// Log format.
pub const ENV_LOG_FORMAT: &str = "BOOKABOO_LOG_FORMAT";

/// Accepted layouts for a reference instant.
const INSTANT_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// How parsed requests are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned human-readable lines.
    #[default]
    Text,
    /// One JSON object.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "invalid output format '{}', expected 'text' or 'json'",
                s
            )),
        }
    }
}

/// How log lines are written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!(
                "invalid log format '{}', expected 'pretty' or 'json'",
                s
            )),
        }
    }
}

/// Settings for the command-line front end.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Reference instant; `None` means the local clock at parse time.
    pub now: Option<NaiveDateTime>,
    /// Output format for parsed requests.
    pub output: OutputFormat,
    /// Log format.
    pub log_format: LogFormat,
}

/// Values already chosen on the command line. A field that is set wins, and
/// its environment variable is ignored even when malformed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub now: Option<NaiveDateTime>,
    pub output: Option<OutputFormat>,
    pub log_format: Option<LogFormat>,
}

impl Config {
    /// Load from the process environment, after reading a `.env` file if one
    /// exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with(&Overrides::default())
    }

    /// Like [`Config::from_env`], but fields set in `overrides` skip the
    /// environment.
    pub fn from_env_with(overrides: &Overrides) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup_with(overrides, |key| std::env::var(key).ok())
    }

    /// Load using `lookup` to resolve variable names. Unset or blank values
    /// keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Self::from_lookup_with(&Overrides::default(), lookup)
    }

    /// Load using `lookup` for every setting `overrides` leaves unset.
    pub fn from_lookup_with(
        overrides: &Overrides,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let now = match (overrides.now, get(ENV_NOW)) {
            (Some(now), _) => Some(now),
            (None, Some(value)) => Some(parse_reference_instant(&value)?),
            (None, None) => None,
        };
        let output = match (overrides.output, get(ENV_OUTPUT)) {
            (Some(output), _) => output,
            (None, Some(value)) => value
                .parse()
                .map_err(|reason| invalid(ENV_OUTPUT, &value, reason))?,
            (None, None) => OutputFormat::default(),
        };
        let log_format = match (overrides.log_format, get(ENV_LOG_FORMAT)) {
            (Some(format), _) => format,
            (None, Some(value)) => value
                .parse()
                .map_err(|reason| invalid(ENV_LOG_FORMAT, &value, reason))?,
            (None, None) => LogFormat::default(),
        };

        Ok(Config {
            now,
            output,
            log_format,
        })
    }
}

/// Parse a reference instant such as `2025-03-05T12:00` or `2025-03-05 12:00:00`.
///
/// A bare date means midnight at the start of that day.
pub fn parse_reference_instant(value: &str) -> Result<NaiveDateTime, ConfigError> {
    let value = value.trim();
    INSTANT_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
        .ok_or_else(|| {
            invalid(
                ENV_NOW,
                value,
                "expected YYYY-MM-DDTHH:MM[:SS] or YYYY-MM-DD".to_string(),
            )
        })
}

fn invalid(key: &str, value: &str, reason: String) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        reason,
    }
}
