use serde::{Deserialize, Serialize};

use crate::listing::Dated;
use crate::model::card::{or_fallback, RecordCard, ToCard, NOT_AVAILABLE, UNKNOWN_NAME};
use crate::model::record_id::RecordId;
use crate::model::reporting_date::ReportingDate;
use crate::model::string_or_null;

/// A missing-person report, as served behind `/api/missingpersons`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingPerson {
    pub id: RecordId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default, deserialize_with = "string_or_null")]
    pub gender: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub location: String,
    pub reporting_date: ReportingDate,
    #[serde(default)]
    pub description: Option<String>,
}

impl Dated for MissingPerson {
    fn reporting_date(&self) -> &ReportingDate {
        &self.reporting_date
    }
}

impl ToCard for MissingPerson {
    fn to_card(&self) -> RecordCard {
        let age = self.age.map(|age| age.to_string());
        RecordCard::new(self.id.to_string(), self.reporting_date.clone())
            .field("Name", or_fallback(self.name.as_deref(), UNKNOWN_NAME))
            .field("Age", or_fallback(age.as_deref(), NOT_AVAILABLE))
            .field("Gender", self.gender.clone())
            .field("Location", self.location.clone())
            .field("Reported Date", self.reporting_date.display())
            .field("Description", or_fallback(self.description.as_deref(), NOT_AVAILABLE))
    }
}
