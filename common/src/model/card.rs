//! Display projection of a record, as rendered in a dashboard card.

use crate::listing::Dated;
use crate::model::reporting_date::ReportingDate;

pub const UNKNOWN_NAME: &str = "Unknown";
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq)]
pub struct CardField {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordCard {
    pub id: String,
    pub reporting_date: ReportingDate,
    pub fields: Vec<CardField>,
}

impl RecordCard {
    pub fn new(id: String, reporting_date: ReportingDate) -> Self {
        Self {
            id,
            reporting_date,
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, label: &'static str, value: impl Into<String>) -> Self {
        self.fields.push(CardField {
            label,
            value: value.into(),
        });
        self
    }

    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.label == label)
            .map(|field| field.value.as_str())
    }
}

impl Dated for RecordCard {
    fn reporting_date(&self) -> &ReportingDate {
        &self.reporting_date
    }
}

/// Anything that can be shown as a dashboard card.
pub trait ToCard: Dated {
    fn to_card(&self) -> RecordCard;
}

/// Absent and empty values both fall back.
pub fn or_fallback(value: Option<&str>, fallback: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}
