//! Memoized filtered views.
//!
//! Filtering is pure, so identical inputs must yield a referentially-stable
//! result. The cache key is the owning store's generation counter (bumped
//! each time the collection is replaced) plus the debounced criteria; as
//! long as neither changes, callers get the same `Arc` back and the
//! pipeline never re-runs.

use std::sync::Arc;

/// Cache of the most recent filtered result.
pub struct CachedView<T> {
    key: Option<ViewKey>,
    items: Arc<Vec<T>>,
}

#[derive(PartialEq, Eq)]
struct ViewKey {
    generation: u64,
    criteria: Vec<String>,
}

impl<T> CachedView<T> {
    pub fn new() -> Self {
        Self {
            key: None,
            items: Arc::new(Vec::new()),
        }
    }

    /// Return the cached result if `(generation, criteria)` is unchanged,
    /// otherwise run `compute` and cache its output.
    pub fn get_or_compute(
        &mut self,
        generation: u64,
        criteria: &[&str],
        compute: impl FnOnce() -> Vec<T>,
    ) -> Arc<Vec<T>> {
        let key = ViewKey {
            generation,
            criteria: criteria.iter().map(|c| c.to_string()).collect(),
        };

        if self.key.as_ref() != Some(&key) {
            self.items = Arc::new(compute());
            self.key = Some(key);
        }

        Arc::clone(&self.items)
    }

    /// Drop the cached result; the next lookup recomputes.
    pub fn invalidate(&mut self) {
        self.key = None;
    }
}

impl<T> Default for CachedView<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchanged_inputs_return_the_same_allocation() {
        let mut view = CachedView::new();
        let mut computations = 0;

        let first = view.get_or_compute(1, &["krabby", ""], || {
            computations += 1;
            vec![1, 2, 3]
        });
        let second = view.get_or_compute(1, &["krabby", ""], || {
            computations += 1;
            vec![1, 2, 3]
        });

        assert_eq!(computations, 1, "second lookup must hit the cache");
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_changing_one_criterion_recomputes() {
        let mut view = CachedView::new();
        let mut computations = 0;

        view.get_or_compute(1, &["krabby", ""], || vec![1]);
        view.get_or_compute(1, &["krabby", "Seafood"], || {
            computations += 1;
            vec![9]
        });

        assert_eq!(computations, 1);
    }

    #[test]
    fn test_new_generation_recomputes() {
        let mut view = CachedView::new();

        let first = view.get_or_compute(1, &["q"], || vec![1]);
        let second = view.get_or_compute(2, &["q"], || vec![1, 2]);

        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 2);
    }

    #[test]
    fn test_invalidate_forces_recompute() {
        let mut view = CachedView::new();
        let mut computations = 0;

        view.get_or_compute(1, &[], || {
            computations += 1;
            vec![1]
        });
        view.invalidate();
        view.get_or_compute(1, &[], || {
            computations += 1;
            vec![1]
        });

        assert_eq!(computations, 2);
    }
}
