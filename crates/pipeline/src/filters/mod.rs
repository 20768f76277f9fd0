//! Filter implementations for the portal collections.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod meals;
pub mod residents;

// Re-export for convenience
pub use meals::{MealCategoryFilter, MealOriginFilter, MealSearchFilter};
pub use residents::{ResidentRoleFilter, ResidentSearchFilter};
