//! Pagination window calculator.
//!
//! Pure math: given `(current_page, total_items, items_per_page)` this
//! produces the slice bounds and the compressed list of page buttons to
//! render. Nothing here is stored; callers recompute on every change.
//! The stateful [`Pager`] tracks the current page across interactions and
//! resets it whenever the underlying collection size changes.

/// One entry in the rendered page-button row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageButton {
    /// A navigable page number.
    Page(usize),
    /// An inert "..." marker.
    Ellipsis,
}

/// Everything a renderer needs to draw pagination controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub items_per_page: usize,
    /// 1-based ordinal of the first item on this page.
    pub start_item: usize,
    /// 1-based ordinal of the last item on this page.
    pub end_item: usize,
    pub has_prev: bool,
    pub has_next: bool,
    pub buttons: Vec<PageButton>,
}

impl PageWindow {
    /// 0-based slice range of this page within the full collection.
    pub fn slice_range(&self) -> std::ops::Range<usize> {
        (self.start_item - 1)..self.end_item
    }
}

/// Number of pages needed for `total_items`, never less than 1.
pub fn total_pages(total_items: usize, items_per_page: usize) -> usize {
    std::cmp::max(1, total_items.div_ceil(items_per_page))
}

/// Clamp a requested page into `[1, total_pages]`.
pub fn clamp_page(page: usize, total_items: usize, items_per_page: usize) -> usize {
    page.clamp(1, total_pages(total_items, items_per_page))
}

/// Compute the pagination window, or `None` when a single page suffices
/// (the caller renders no pagination UI at all).
pub fn page_window(
    current_page: usize,
    total_items: usize,
    items_per_page: usize,
) -> Option<PageWindow> {
    let total = total_pages(total_items, items_per_page);
    if total <= 1 {
        return None;
    }

    let current = current_page.clamp(1, total);
    let start_item = (current - 1) * items_per_page + 1;
    let end_item = std::cmp::min(current * items_per_page, total_items);

    Some(PageWindow {
        current_page: current,
        total_pages: total,
        total_items,
        items_per_page,
        start_item,
        end_item,
        has_prev: current > 1,
        has_next: current < total,
        buttons: page_buttons(current, total),
    })
}

/// Compress the page-number row to at most seven entries.
///
/// - `total <= 5`: every page, no ellipsis
/// - near the start: `1 2 3 4 ... total`
/// - near the end: `1 ... total-3 total-2 total-1 total`
/// - otherwise: `1 ... current-1 current current+1 ... total`
fn page_buttons(current: usize, total: usize) -> Vec<PageButton> {
    use PageButton::{Ellipsis, Page};

    let mut buttons = Vec::new();

    if total <= 5 {
        for page in 1..=total {
            buttons.push(Page(page));
        }
    } else if current <= 3 {
        for page in 1..=4 {
            buttons.push(Page(page));
        }
        buttons.push(Ellipsis);
        buttons.push(Page(total));
    } else if current >= total - 2 {
        buttons.push(Page(1));
        buttons.push(Ellipsis);
        for page in (total - 3)..=total {
            buttons.push(Page(page));
        }
    } else {
        buttons.push(Page(1));
        buttons.push(Ellipsis);
        buttons.push(Page(current - 1));
        buttons.push(Page(current));
        buttons.push(Page(current + 1));
        buttons.push(Ellipsis);
        buttons.push(Page(total));
    }

    buttons
}

// =============================================================================
// Pager
// =============================================================================

/// Tracks the current page across interactions.
///
/// Stale page numbers are never left pointing past the new last page: when
/// the observed collection size changes, the page snaps back to 1.
#[derive(Debug, Clone, Default)]
pub struct Pager {
    page: usize,
    last_total: Option<usize>,
}

impl Pager {
    pub fn new() -> Self {
        Self {
            page: 1,
            last_total: None,
        }
    }

    /// Note the current collection size, resetting to page 1 if it changed.
    /// Returns the (possibly reset) current page.
    pub fn observe(&mut self, total_items: usize, items_per_page: usize) -> usize {
        if self.last_total != Some(total_items) {
            self.page = 1;
            self.last_total = Some(total_items);
        }
        self.page = clamp_page(self.page.max(1), total_items, items_per_page);
        self.page
    }

    /// Navigate to a page, clamped into range.
    pub fn set(&mut self, page: usize, total_items: usize, items_per_page: usize) -> usize {
        self.page = clamp_page(page.max(1), total_items, items_per_page);
        self.page
    }

    pub fn page(&self) -> usize {
        self.page.max(1)
    }
}
