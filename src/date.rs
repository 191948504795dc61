//! Free-form date string parsing for temporal annotations.
//!
//! Earth browsers want instants as `YYYY-MM-DDTHH:MM:SSZ`. Input data rarely
//! arrives that way, so [`parse_date`] accepts a handful of common layouts
//! and normalizes them. Unparseable input yields `None` rather than an error;
//! the caller decides whether a record without a usable date is worth
//! keeping.

use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

const OUTPUT_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Layouts that cannot be confused between day-first and month-first.
const UNAMBIGUOUS_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%SZ",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d %B %Y",
    "%d %b %Y",
    "%B %d, %Y",
];

const DAY_FIRST_FORMATS: &[&str] = &[
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
];

const MONTH_FIRST_FORMATS: &[&str] = &[
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%m.%d.%Y",
];

/// Parses a free-form date/time string into `YYYY-MM-DDTHH:MM:SSZ`.
///
/// `day_first` resolves ambiguous numeric dates: with `true`, `03/04/2020`
/// is the 3rd of April. The flag only sets the preferred reading — a date
/// that is impossible in the preferred order (like `31/01/2020` month-first)
/// still parses in the other order. Returns `None` when no known layout
/// matches.
pub fn parse_date(input: &str, day_first: bool) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let (preferred, fallback) = if day_first {
        (DAY_FIRST_FORMATS, MONTH_FIRST_FORMATS)
    } else {
        (MONTH_FIRST_FORMATS, DAY_FIRST_FORMATS)
    };

    for formats in [UNAMBIGUOUS_FORMATS, preferred, fallback] {
        for format in formats {
            if let Ok(datetime) = NaiveDateTime::parse_from_str(input, format) {
                return Some(datetime.format(OUTPUT_FORMAT).to_string());
            }
            if let Ok(date) = NaiveDate::parse_from_str(input, format) {
                let datetime = date.and_hms_opt(0, 0, 0)?;
                return Some(datetime.format(OUTPUT_FORMAT).to_string());
            }
        }
    }

    debug!("No known date layout matches '{}'", input);
    None
}
