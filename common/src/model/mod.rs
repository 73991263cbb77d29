//! Records as returned by the external case-management service, plus the
//! display projection used by the dashboards.

pub mod card;
pub mod missing_person;
pub mod record_id;
pub mod reporting_date;
pub mod unidentified_body;

use serde::{Deserialize, Deserializer};

/// Reads a string field that the external service may send as `null`.
pub(crate) fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
