//! Date formatting with a bounded memoization cache.
//!
//! Rendering the same calendar day over and over (task tables, calendars)
//! should not re-run the formatter each time. Keys are calendar days, so
//! two timestamps on the same day share one entry. The cache is bounded;
//! when full, the oldest entry is evicted.

use std::collections::{HashMap, VecDeque};

use chrono::{DateTime, Utc};

/// Maximum number of cached days.
pub const DATE_FORMAT_CACHE_LIMIT: usize = 1000;

#[derive(Default)]
pub struct DateFormatCache {
    entries: HashMap<String, String>,
    order: VecDeque<String>,
}

impl DateFormatCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Format a timestamp as a human-readable day, e.g. "Mar 5, 2024".
    pub fn format(&mut self, date: DateTime<Utc>) -> String {
        let key = date.date_naive().to_string();

        if let Some(cached) = self.entries.get(&key) {
            return cached.clone();
        }

        let formatted = date.format("%b %-d, %Y").to_string();

        if self.entries.len() >= DATE_FORMAT_CACHE_LIMIT {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
            }
        }
        self.entries.insert(key.clone(), formatted.clone());
        self.order.push_back(key);

        formatted
    }

    /// Drop every cached entry (useful for tests or locale changes).
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
