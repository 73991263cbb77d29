//! Runtime state of a record dashboard.

use common::listing::ListState;
use common::model::card::RecordCard;

use crate::api::{AbortGuard, FetchState};

pub struct RecordsDashboard {
    /// Snapshot fetched on mount. Never modified after it arrives; every
    /// render derives the visible page from it.
    pub fetch: FetchState<RecordCard>,

    /// Date search term and current page.
    pub list: ListState,

    /// Guard for the mount-time fetch. Dropping it cancels the request.
    pub request: Option<AbortGuard>,
}

impl RecordsDashboard {
    pub fn new() -> Self {
        Self {
            fetch: FetchState::Loading,
            list: ListState::new(),
            request: None,
        }
    }

    /// Pages in the current search result, zero while nothing is loaded.
    pub fn total_pages(&self) -> usize {
        match &self.fetch {
            FetchState::Ready(cards) => self.list.derive(cards).total_pages,
            _ => 0,
        }
    }
}
