//! Date handling for the REST service's timestamp formats.
//!
//! The service writes order dates as `yyyy-MM-dd HH:mm:ss` and other
//! timestamps in ISO-8601 local form (`yyyy-MM-ddTHH:mm:ss`). Both are
//! accepted; the former is always written back.

use chrono::{NaiveDate, NaiveDateTime};

/// Wire format for date-times.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Wire format for calendar dates in query parameters.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a service date-time in either accepted format.
pub fn parse_datetime(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    NaiveDateTime::parse_from_str(text, DATETIME_FORMAT)
        .or_else(|_| text.parse::<NaiveDateTime>())
        .ok()
}

/// Format a date-time the way the service expects it.
pub fn format_datetime(value: &NaiveDateTime) -> String {
    value.format(DATETIME_FORMAT).to_string()
}

/// Format a calendar date for query parameters.
pub fn format_date(value: &NaiveDate) -> String {
    value.format(DATE_FORMAT).to_string()
}

/// Serde adapter for optional service date-times.
///
/// Anything that is not a parseable string deserializes to `None`.
pub mod optional_datetime {
    use super::{format_datetime, parse_datetime};
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => serializer.serialize_str(&format_datetime(v)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(value.as_str().and_then(parse_datetime))
    }
}
