//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::traits::Filter;
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// Criteria combine with logical AND: an item survives the pipeline only if
/// every active filter keeps it.
///
/// ## Usage
/// ```
/// use model::Meal;
/// use pipeline::FilterPipeline;
/// use pipeline::filters::{MealCategoryFilter, MealSearchFilter};
///
/// let pipeline = FilterPipeline::new()
///     .add_filter(MealSearchFilter::new("patty"))
///     .add_filter(MealCategoryFilter::new("Seafood"));
///
/// let filtered: Vec<Meal> = pipeline.apply(Vec::new());
/// assert!(filtered.is_empty());
/// ```
pub struct FilterPipeline<T> {
    filters: Vec<Box<dyn Filter<T>>>,
}

impl<T> FilterPipeline<T> {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter<T> + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Apply all filters in sequence to the collection.
    ///
    /// ## Algorithm
    /// 1. Start with the input collection
    /// 2. For each active filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Return the final filtered set
    ///
    /// An empty pipeline, or one whose filters are all inactive, returns
    /// the input unchanged.
    pub fn apply(&self, items: Vec<T>) -> Vec<T> {
        let mut current = items;
        for filter in &self.filters {
            if !filter.is_active() {
                continue;
            }
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl<T> Default for FilterPipeline<T> {
    fn default() -> Self {
        Self::new()
    }
}
