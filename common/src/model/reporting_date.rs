//! The reporting date attached to every record.
//!
//! The raw text is kept exactly as the service sent it: date search is a
//! literal substring test against that text, while ordering and display use
//! the parsed instant.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

const NAIVE_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportingDate(String);

impl ReportingDate {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the raw text as an RFC 3339 date-time, a naive date-time or a
    /// plain `YYYY-MM-DD` date. Naive values are read as UTC.
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        let raw = self.0.trim();
        if raw.is_empty() {
            return None;
        }

        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return Some(parsed.with_timezone(&Utc));
        }

        for format in NAIVE_DATE_TIME_FORMATS {
            if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
                return Some(parsed.and_utc());
            }
        }

        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|parsed| parsed.and_utc())
    }

    /// `YYYY-MM-DD` of the parsed instant, or the raw text when it does not parse.
    pub fn display(&self) -> String {
        match self.instant() {
            Some(instant) => instant.format("%Y-%m-%d").to_string(),
            None => self.0.clone(),
        }
    }

    /// Most recent first. Unparseable dates rank after every parseable one.
    pub fn cmp_newest_first(&self, other: &Self) -> Ordering {
        match (self.instant(), other.instant()) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl From<&str> for ReportingDate {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
