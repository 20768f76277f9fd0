//! Core trait for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to a collection.

/// Core trait for filtering a collection of items.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be used in concurrent contexts
/// - Filters take ownership of the `Vec<T>` and return a filtered `Vec`,
///   which allows transformations without unnecessary cloning
/// - An inactive filter (empty criterion) must return its input unchanged:
///   the empty criterion is the identity element
pub trait Filter<T>: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether this filter currently constrains anything.
    ///
    /// Inactive filters keep every item.
    fn is_active(&self) -> bool;

    /// Whether a single item passes this filter.
    fn matches(&self, item: &T) -> bool;

    /// Apply this filter to a collection.
    ///
    /// The result is always a subset of the input; an inactive filter
    /// returns the input untouched.
    fn apply(&self, items: Vec<T>) -> Vec<T> {
        if !self.is_active() {
            return items;
        }
        items.into_iter().filter(|item| self.matches(item)).collect()
    }
}
