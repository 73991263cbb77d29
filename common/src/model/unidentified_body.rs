use serde::{Deserialize, Serialize};

use crate::listing::Dated;
use crate::model::card::{or_fallback, RecordCard, ToCard, NOT_AVAILABLE, UNKNOWN_NAME};
use crate::model::record_id::RecordId;
use crate::model::reporting_date::ReportingDate;
use crate::model::string_or_null;

/// An unidentified body registered by mortuary staff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnidentifiedBody {
    pub id: RecordId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "string_or_null")]
    pub gender: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub location: String,
    pub reporting_date: ReportingDate,
    #[serde(default)]
    pub clothes_worn: Option<String>,
}

impl Dated for UnidentifiedBody {
    fn reporting_date(&self) -> &ReportingDate {
        &self.reporting_date
    }
}

impl ToCard for UnidentifiedBody {
    fn to_card(&self) -> RecordCard {
        RecordCard::new(self.id.to_string(), self.reporting_date.clone())
            .field("Name", or_fallback(self.name.as_deref(), UNKNOWN_NAME))
            .field("Gender", self.gender.clone())
            .field("Location", self.location.clone())
            .field("Reported Date", self.reporting_date.display())
            .field("Clothes Worn", or_fallback(self.clothes_worn.as_deref(), NOT_AVAILABLE))
    }
}
