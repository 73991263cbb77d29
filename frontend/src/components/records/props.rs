//! Defines the properties for the `RecordsDashboard`.

use common::routes::RecordKind;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RecordsProps {
    /// Which records to list. Decides the proxy endpoint, the page title and
    /// where "+ Add Data" leads.
    pub kind: RecordKind,
}
