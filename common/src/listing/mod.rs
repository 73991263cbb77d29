//! Search, sort and pagination for the record dashboards.
//!
//! Every render derives the visible page from the fetched snapshot, the date
//! search term and the current page number. The snapshot itself is never
//! reordered or filtered in place; each step produces a new sequence of
//! references into it.

mod state;

pub use state::ListState;

use crate::model::reporting_date::ReportingDate;

/// Cards shown per dashboard page.
pub const ITEMS_PER_PAGE: usize = 6;

/// Records that carry a reporting date.
pub trait Dated {
    fn reporting_date(&self) -> &ReportingDate;
}

/// Most recent first. The sort is stable, so records sharing a date keep the
/// order in which the service returned them.
pub fn sort_by_reporting_date_desc<T: Dated>(records: &[T]) -> Vec<&T> {
    let mut sorted: Vec<&T> = records.iter().collect();
    sorted.sort_by(|a, b| a.reporting_date().cmp_newest_first(b.reporting_date()));
    sorted
}

/// Keeps records whose raw reporting date contains `term` as a literal
/// substring. An empty term keeps everything.
pub fn filter_by_date_term<'a, T: Dated>(sorted: Vec<&'a T>, term: &str) -> Vec<&'a T> {
    if term.is_empty() {
        return sorted;
    }

    sorted
        .into_iter()
        .filter(|record| {
            let raw = record.reporting_date().as_str();
            !raw.is_empty() && raw.contains(term)
        })
        .collect()
}

pub fn total_pages(count: usize) -> usize {
    count.div_ceil(ITEMS_PER_PAGE)
}

/// `filtered[(page - 1) * 6 .. page * 6]`, clamped to the sequence. Page 0 is
/// read as page 1.
pub fn page_slice<T>(filtered: &[T], page: usize) -> &[T] {
    let page = page.max(1);
    let start = (page - 1).saturating_mul(ITEMS_PER_PAGE).min(filtered.len());
    let end = page.saturating_mul(ITEMS_PER_PAGE).min(filtered.len());
    &filtered[start..end]
}

/// One derived dashboard page.
#[derive(Debug, PartialEq)]
pub struct ListPage<'a, T> {
    pub items: Vec<&'a T>,
    pub current_page: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
}

impl<T> ListPage<'_, T> {
    /// No record survived the search; the dashboard shows "Not Found." instead
    /// of the grid.
    pub fn is_empty(&self) -> bool {
        self.filtered_count == 0
    }

    pub fn previous_disabled(&self) -> bool {
        self.current_page <= 1
    }

    pub fn next_disabled(&self) -> bool {
        self.current_page >= self.total_pages
    }

    pub fn label(&self) -> String {
        format!("Page {} of {}", self.current_page, self.total_pages)
    }
}

/// Sort, filter, then slice out `current_page`.
pub fn derive_page<'a, T: Dated>(
    records: &'a [T],
    search_term: &str,
    current_page: usize,
) -> ListPage<'a, T> {
    let filtered = filter_by_date_term(sort_by_reporting_date_desc(records), search_term);
    let current_page = current_page.max(1);

    ListPage {
        items: page_slice(&filtered, current_page).to_vec(),
        current_page,
        total_pages: total_pages(filtered.len()),
        filtered_count: filtered.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Entry {
        tag: usize,
        date: ReportingDate,
    }

    impl Dated for Entry {
        fn reporting_date(&self) -> &ReportingDate {
            &self.date
        }
    }

    fn entries(dates: &[&str]) -> Vec<Entry> {
        dates
            .iter()
            .enumerate()
            .map(|(tag, date)| Entry {
                tag,
                date: ReportingDate::from(*date),
            })
            .collect()
    }

    fn tags(items: &[&Entry]) -> Vec<usize> {
        items.iter().map(|e| e.tag).collect()
    }

    #[test]
    fn seven_records_split_six_and_one() {
        let records = entries(&[
            "2024-01-03", "2024-01-07", "2024-01-01", "2024-01-05", "2024-01-02", "2024-01-06",
            "2024-01-04",
        ]);

        let first = derive_page(&records, "", 1);
        assert_eq!(first.total_pages, 2);
        assert_eq!(tags(&first.items), vec![1, 5, 3, 6, 0, 4]);
        assert!(first.previous_disabled());
        assert!(!first.next_disabled());

        let second = derive_page(&records, "", 2);
        assert_eq!(tags(&second.items), vec![2]);
        assert!(!second.previous_disabled());
        assert!(second.next_disabled());
        assert_eq!(second.label(), "Page 2 of 2");
    }

    #[test]
    fn equal_dates_keep_service_order() {
        let records = entries(&["2024-05-01", "2024-05-02", "2024-05-01", "2024-05-01"]);
        let sorted = sort_by_reporting_date_desc(&records);
        assert_eq!(tags(&sorted), vec![1, 0, 2, 3]);
    }

    #[test]
    fn search_is_a_substring_test_on_the_raw_text() {
        let records = entries(&[
            "2024-05-01T09:00:00Z",
            "2024-05-10",
            "2023-05-01",
            "",
        ]);

        let page = derive_page(&records, "2024-05-1", 1);
        assert_eq!(tags(&page.items), vec![1]);

        let page = derive_page(&records, "05-01", 1);
        assert_eq!(tags(&page.items), vec![0, 2]);
    }

    #[test]
    fn empty_result_disables_both_controls() {
        let records = entries(&["2024-05-01"]);
        let page = derive_page(&records, "1999", 1);
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 0);
        assert!(page.previous_disabled());
        assert!(page.next_disabled());
    }

    #[test]
    fn pages_past_the_end_are_empty() {
        let records = entries(&["2024-05-01", "2024-05-02"]);
        let page = derive_page(&records, "", 2);
        assert!(page.items.is_empty());
        assert!(!page.is_empty());
    }

    #[test]
    fn derivation_leaves_the_snapshot_untouched() {
        let records = entries(&["2024-01-01", "2024-03-01", "2024-02-01"]);
        let before = records.clone();
        let _ = derive_page(&records, "2024", 1);
        assert_eq!(records, before);
    }

    fn arb_dates() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(
            (2019i32..2025, 1u32..13, 1u32..29)
                .prop_map(|(y, m, d)| format!("{:04}-{:02}-{:02}", y, m, d)),
            0..40,
        )
    }

    proptest! {
        #[test]
        fn sort_is_an_ordered_permutation(dates in arb_dates()) {
            let refs: Vec<&str> = dates.iter().map(String::as_str).collect();
            let records = entries(&refs);
            let sorted = sort_by_reporting_date_desc(&records);

            let mut seen = tags(&sorted);
            seen.sort_unstable();
            prop_assert_eq!(seen, (0..records.len()).collect::<Vec<_>>());

            for pair in sorted.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                prop_assert!(a.date.instant() >= b.date.instant());
                if a.date == b.date {
                    prop_assert!(a.tag < b.tag);
                }
            }
        }

        #[test]
        fn filtering_keeps_a_subsequence(dates in arb_dates(), term in "(20[12][0-9])?(-[01][0-9])?") {
            let refs: Vec<&str> = dates.iter().map(String::as_str).collect();
            let records = entries(&refs);
            let sorted = sort_by_reporting_date_desc(&records);
            let filtered = filter_by_date_term(sorted.clone(), &term);

            let mut rest = sorted.iter();
            for kept in &filtered {
                prop_assert!(rest.any(|candidate| candidate.tag == kept.tag));
                prop_assert!(kept.date.as_str().contains(term.as_str()));
            }
            if term.is_empty() {
                prop_assert_eq!(tags(&filtered), tags(&sorted));
            }
        }

        #[test]
        fn every_page_is_the_matching_window(dates in arb_dates(), page in 1usize..10) {
            let refs: Vec<&str> = dates.iter().map(String::as_str).collect();
            let records = entries(&refs);
            let filtered = sort_by_reporting_date_desc(&records);
            let derived = derive_page(&records, "", page);

            prop_assert!(derived.items.len() <= ITEMS_PER_PAGE);
            let start = ((page - 1) * ITEMS_PER_PAGE).min(filtered.len());
            let end = (page * ITEMS_PER_PAGE).min(filtered.len());
            prop_assert_eq!(tags(&derived.items), tags(&filtered[start..end]));
            prop_assert_eq!(derived.items.is_empty(), page > derived.total_pages);
            prop_assert_eq!(derived.previous_disabled(), page == 1);
        }
    }
}
