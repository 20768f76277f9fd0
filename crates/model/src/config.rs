//! Cross-crate constants.
//!
//! Page sizes and the storage keys under which each persisted store keeps
//! its snapshot. Keys are part of the on-disk format: renaming one orphans
//! previously saved state.

/// Card views (residents, meals) show six items per page.
pub const ITEMS_PER_PAGE: usize = 6;

/// The task table shows ten rows per page.
pub const TABLE_ITEMS_PER_PAGE: usize = 10;

// Storage keys, one logical key per concern.
pub const FAVORITES_KEY: &str = "favorites";
pub const RESIDENT_FILTERS_KEY: &str = "resident-filters";
pub const MEAL_FILTERS_KEY: &str = "meal-filters";
pub const TASK_STORE_KEY: &str = "task-store";
pub const THEME_KEY: &str = "theme-storage";

/// Emoji stamped onto every resident during normalization.
pub const DEFAULT_RESIDENT_EMOJI: &str = "🧑";
