use super::{derive_page, Dated, ListPage};

/// Search term and page number owned by a dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    pub search_term: String,
    pub current_page: usize,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            current_page: 1,
        }
    }
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A new term starts again from the first page.
    pub fn set_search_term(&mut self, term: impl Into<String>) -> bool {
        let term = term.into();
        if term == self.search_term {
            return false;
        }
        self.search_term = term;
        self.current_page = 1;
        true
    }

    /// Moves forward unless already on the last page.
    pub fn next_page(&mut self, total_pages: usize) -> bool {
        if self.current_page < total_pages {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Moves back unless already on the first page.
    pub fn previous_page(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    pub fn derive<'a, T: Dated>(&self, records: &'a [T]) -> ListPage<'a, T> {
        derive_page(records, &self.search_term, self.current_page)
    }
}
