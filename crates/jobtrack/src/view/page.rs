//! Page cursor, page metadata and the page-number window.

use std::ops::Range;

use serde::{Deserialize, Serialize};

pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Maximum number of contiguous page numbers in the window.
pub const MAX_VISIBLE_PAGES: usize = 5;

/// Requested page, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub current_page: usize,
    pub items_per_page: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            current_page: 1,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

impl PageRequest {
    pub fn new(current_page: usize, items_per_page: usize) -> Self {
        Self {
            current_page,
            items_per_page,
        }
    }

    fn per_page(&self) -> usize {
        self.items_per_page.max(1)
    }
}

/// One entry of the page-number control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PageLink {
    Page(usize),
    Ellipsis,
}

/// Pagination metadata for a derived view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Items left after filtering.
    pub total_items: usize,
    /// `ceil(total_items / items_per_page)`; zero for an empty view.
    pub total_pages: usize,
    /// Current page after clamping, never below 1.
    pub current_page: usize,
    pub items_per_page: usize,
    /// 1-based index of the first shown item, 0 when empty.
    pub start_item: usize,
    /// 1-based index of the last shown item, 0 when empty.
    pub end_item: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub window: Vec<PageLink>,
}

impl PageInfo {
    /// Computes metadata for `total_items` items and the slice range to show.
    pub fn compute(total_items: usize, request: PageRequest) -> (Self, Range<usize>) {
        let per_page = request.per_page();
        let total_pages = total_items.div_ceil(per_page);
        let current_page = request.current_page.clamp(1, total_pages.max(1));

        let start = ((current_page - 1) * per_page).min(total_items);
        let end = (current_page * per_page).min(total_items);

        let info = Self {
            total_items,
            total_pages,
            current_page,
            items_per_page: per_page,
            start_item: if total_items == 0 { 0 } else { start + 1 },
            end_item: end,
            has_previous: current_page > 1,
            has_next: current_page < total_pages,
            window: page_window(current_page, total_pages),
        };
        (info, start..end)
    }

    /// `Showing X-Y of Z jobs`.
    pub fn summary(&self) -> String {
        format!(
            "Showing {}-{} of {} jobs",
            self.start_item, self.end_item, self.total_items
        )
    }

    /// Row number of the first item on this page, for numbered tables.
    pub fn first_row_number(&self) -> usize {
        (self.current_page - 1) * self.items_per_page + 1
    }
}

/// Builds the page-number window around `current`.
///
/// With a single page (or none) there is nothing to navigate and the window
/// is empty.
pub fn page_window(current: usize, total_pages: usize) -> Vec<PageLink> {
    let mut links = Vec::new();
    if total_pages <= 1 {
        return links;
    }

    let current = current.clamp(1, total_pages);
    let mut start = current.saturating_sub(MAX_VISIBLE_PAGES / 2).max(1);
    let end = total_pages.min(start + MAX_VISIBLE_PAGES - 1);
    if end - start < MAX_VISIBLE_PAGES - 1 {
        start = (end + 1).saturating_sub(MAX_VISIBLE_PAGES).max(1);
    }

    if start > 1 {
        links.push(PageLink::Page(1));
        if start > 2 {
            links.push(PageLink::Ellipsis);
        }
    }
    links.extend((start..=end).map(PageLink::Page));
    if end < total_pages {
        if end < total_pages - 1 {
            links.push(PageLink::Ellipsis);
        }
        links.push(PageLink::Page(total_pages));
    }
    links
}
