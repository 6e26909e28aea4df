//! Bookaboo: turns free-form restaurant reservation requests into structured
//! booking parameters.
//!
//! ```
//! use bookaboo::parse_reservation_request;
//! use chrono::NaiveDate;
//!
//! let now = NaiveDate::from_ymd_opt(2025, 3, 5)
//!     .unwrap()
//!     .and_hms_opt(12, 0, 0)
//!     .unwrap();
//! let request = parse_reservation_request("book 2 tonight 8pm at Prozdor", Some(now));
//!
//! assert_eq!(request.restaurant_name(), "Prozdor");
//! assert_eq!(request.date_yyyymmdd(), "20250305");
//! assert_eq!(request.time_hhmm(), "2000");
//! assert_eq!(request.party_size(), 2);
//! ```

pub mod config;
pub mod error;
pub mod parser;

pub use config::Config;
pub use error::{ConfigError, RequestError};
pub use parser::{ParsedRequest, parse_reservation_request};
