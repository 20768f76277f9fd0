//! View types returned by the portal.
//!
//! A view is a derived snapshot: filtered, paginated, and enriched with
//! the owning store's fetch state. Views are recomputed on request, never
//! stored.

use model::{Meal, Resident};
use pipeline::PageWindow;

/// One page of a filtered collection.
#[derive(Debug, Clone)]
pub struct CollectionPage<T> {
    /// The items on the current page.
    pub items: Vec<T>,
    /// Pagination controls, or `None` when a single page suffices.
    pub window: Option<PageWindow>,
    /// Size of the whole filtered collection.
    pub total_items: usize,
    pub loading: bool,
    pub error: Option<String>,
}

pub type ResidentPage = CollectionPage<Resident>;
pub type MealPage = CollectionPage<Meal>;

/// Choices offered by the meal select filters, always derived from the
/// unfiltered catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealFilterOptions {
    pub categories: Vec<String>,
    pub origins: Vec<String>,
}
