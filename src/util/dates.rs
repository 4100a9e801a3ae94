//! Appointment timestamp parsing and display.
//!
//! Parsing is pure `chrono`. Display uses the browser's locale formatting
//! under `csr` and a fixed ISO-style rendering everywhere else. Offset-less
//! date-times are local wall-clock readings, the way a browser `Date` reads
//! them, so they are never shifted by the viewer's zone.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

pub const UNKNOWN_DATE: &str = "Unknown date";
pub const UNKNOWN_TIME: &str = "Unknown time";

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Separate date and time labels for one timestamp.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateParts {
    pub date: String,
    pub time: String,
}

impl DateParts {
    fn unknown() -> Self {
        Self { date: UNKNOWN_DATE.to_owned(), time: UNKNOWN_TIME.to_owned() }
    }
}

/// A parsed appointment timestamp.
///
/// Values carrying an offset, and date-only values, name an absolute
/// instant. Date-times without an offset are a wall-clock reading in the
/// viewer's local zone and are displayed as written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Timestamp {
    Instant(DateTime<Utc>),
    Wall(NaiveDateTime),
}

/// Parse an RFC 3339 value, a naive ISO-8601 date-time, or a bare date.
/// A bare date is midnight UTC.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<Timestamp> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(Timestamp::Instant(dt.with_timezone(&Utc)));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(Timestamp::Wall(naive));
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Timestamp::Instant(naive.and_utc()))
}

/// Date and time labels for an appointment, falling back to the unknown
/// labels when the value is missing or unparseable.
#[must_use]
pub fn appointment_date_parts(raw: Option<&str>) -> DateParts {
    raw.and_then(parse_timestamp)
        .and_then(format_parts)
        .unwrap_or_else(DateParts::unknown)
}

#[cfg(feature = "csr")]
fn format_parts(ts: Timestamp) -> Option<DateParts> {
    use chrono::{Datelike, Timelike};
    use wasm_bindgen::JsValue;

    let date = match ts {
        #[allow(clippy::cast_precision_loss)]
        Timestamp::Instant(dt) => js_sys::Date::new(&JsValue::from_f64(dt.timestamp_millis() as f64)),
        // Local-time constructor; months are zero-based.
        Timestamp::Wall(naive) => js_sys::Date::new_with_year_month_day_hr_min_sec(
            u32::try_from(naive.year()).ok()?,
            i32::try_from(naive.month0()).ok()?,
            i32::try_from(naive.day()).ok()?,
            i32::try_from(naive.hour()).ok()?,
            i32::try_from(naive.minute()).ok()?,
            i32::try_from(naive.second()).ok()?,
        ),
    };
    if date.get_time().is_nan() {
        return None;
    }
    let locale = crate::util::browser::locale().unwrap_or_else(|| "en-US".to_owned());
    Some(DateParts {
        date: date.to_locale_date_string(&locale, &JsValue::UNDEFINED).into(),
        time: date.to_locale_time_string(&locale).into(),
    })
}

#[cfg(not(feature = "csr"))]
fn format_parts(ts: Timestamp) -> Option<DateParts> {
    let naive = match ts {
        Timestamp::Instant(dt) => dt.naive_utc(),
        Timestamp::Wall(naive) => naive,
    };
    Some(DateParts { date: naive.format("%Y-%m-%d").to_string(), time: naive.format("%H:%M:%S").to_string() })
}
