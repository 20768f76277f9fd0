//! Pipeline for filtering and paginating the portal collections.
//!
//! This crate provides:
//! - Filter trait and implementations for resident/meal filtering
//! - FilterPipeline for composing filters with logical AND
//! - Available-options derivation for select-style filters
//! - Memoized filtered views keyed on collection generation + criteria
//! - The pagination window calculator and stateful Pager
//! - The async Debouncer that collapses bursts of criterion updates
//!
//! ## Architecture
//! Derived views are recomputed, never stored:
//! 1. Criteria changes pass through a Debouncer (search text) or apply
//!    immediately (select filters)
//! 2. The FilterPipeline reduces the fetched collection to the matching
//!    subset; CachedView skips the work when nothing changed
//! 3. The pagination calculator turns the filtered count into slice bounds
//!    and a compressed page-button row
//!
//! ## Example Usage
//! ```
//! use pipeline::FilterPipeline;
//! use pipeline::filters::{MealCategoryFilter, MealSearchFilter};
//! use pipeline::pagination::page_window;
//!
//! let pipeline = FilterPipeline::new()
//!     .add_filter(MealSearchFilter::new("patty"))
//!     .add_filter(MealCategoryFilter::new("Seafood"));
//!
//! let filtered = pipeline.apply(vec![]);
//! assert!(page_window(1, filtered.len(), 6).is_none());
//! ```

pub mod debounce;
pub mod filter_pipeline;
pub mod filters;
pub mod options;
pub mod pagination;
pub mod traits;
pub mod view;

// Re-export main types
pub use debounce::{DEFAULT_DEBOUNCE, Debouncer};
pub use filter_pipeline::FilterPipeline;
pub use options::{available_categories, available_origins};
pub use pagination::{PageButton, PageWindow, Pager, page_window};
pub use traits::Filter;
pub use view::CachedView;
