//! Timestamp formatting utilities.

use chrono::Utc;

/// Format used for every timestamp the API emits.
///
/// ISO-8601 with microsecond precision and no offset suffix; all times are
/// UTC by contract.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Returns the current UTC time as an ISO-8601 string.
#[must_use]
pub fn utc_now_iso() -> String {
    Utc::now().format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn test_timestamp_is_parseable() {
        let ts = utc_now_iso();

        assert!(NaiveDateTime::parse_from_str(&ts, TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn test_timestamp_has_no_offset_suffix() {
        let ts = utc_now_iso();

        assert!(ts.contains('T'));
        assert!(!ts.ends_with('Z'));
        assert!(!ts.contains('+'));
    }
}
