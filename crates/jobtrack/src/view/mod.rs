//! View derivation: filter, then sort, then paginate.
//!
//! [`derive`] is a pure function of its inputs. [`ViewState`] keeps the
//! user's current filter/sort/page choices between renders and writes the
//! clamped page back after each one.

pub mod filter;
pub mod page;
pub mod sort;

use serde::{Deserialize, Serialize};

use crate::job::Job;

pub use filter::{FilterSpec, RawFilter};
pub use page::{page_window, PageInfo, PageLink, PageRequest, DEFAULT_ITEMS_PER_PAGE};
pub use sort::{sort_jobs, SortField};

/// The slice of jobs to display plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobView<'a> {
    pub items: Vec<&'a Job>,
    pub page_info: PageInfo,
}

impl JobView<'_> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Derives the visible page of jobs.
pub fn derive<'a>(
    jobs: &'a [Job],
    filters: &FilterSpec,
    sort: SortField,
    page: PageRequest,
) -> JobView<'a> {
    let mut matching: Vec<&Job> = jobs.iter().filter(|job| filters.matches(job)).collect();
    sort_jobs(&mut matching, sort);

    let (page_info, range) = PageInfo::compute(matching.len(), page);
    log::debug!(
        "Derived view: {} of {} jobs match, page {}/{}",
        page_info.total_items,
        jobs.len(),
        page_info.current_page,
        page_info.total_pages
    );

    let items = matching.drain(range).collect();
    JobView { items, page_info }
}

/// User-facing view settings that persist across renders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub filters: FilterSpec,
    pub sort: SortField,
    pub page: PageRequest,
}

impl ViewState {
    pub fn new(sort: SortField, items_per_page: usize) -> Self {
        Self {
            filters: FilterSpec::default(),
            sort,
            page: PageRequest::new(1, items_per_page),
        }
    }

    /// Changes the page size and returns to the first page.
    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        self.page.items_per_page = items_per_page;
        self.page.current_page = 1;
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.page.current_page = page;
    }

    pub fn set_sort(&mut self, sort: SortField) {
        self.sort = sort;
    }

    pub fn set_filters(&mut self, filters: FilterSpec) {
        self.filters = filters;
    }

    pub fn clear_filters(&mut self) {
        self.filters = FilterSpec::default();
    }

    /// Derives the current view and remembers the clamped page.
    pub fn render<'a>(&mut self, jobs: &'a [Job]) -> JobView<'a> {
        let view = derive(jobs, &self.filters, self.sort, self.page);
        self.page.current_page = view.page_info.current_page;
        view
    }
}
