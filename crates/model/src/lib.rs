//! # Model Crate
//!
//! Domain types shared by every crate in the Bikini Bottom Portal workspace.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Resident, Meal, Theme)
//! - **task**: The Task type, its patch type, and task sorting
//! - **config**: Cross-crate constants (page sizes, storage keys)
//!
//! ## Example Usage
//!
//! ```
//! use model::{Meal, Theme};
//!
//! let meal = Meal {
//!     id: "52855".to_string(),
//!     name: "Krabby Patty".to_string(),
//!     category: "Seafood".to_string(),
//!     origin: "American".to_string(),
//!     ingredients: vec!["Bun".to_string(), "Patty".to_string()],
//!     image_url: None,
//! };
//!
//! assert_eq!(meal.category, "Seafood");
//! assert_eq!(Theme::default().toggle(), Theme::Aqua);
//! ```

// Public modules
pub mod config;
pub mod task;
pub mod types;

// Re-export commonly used types for convenience
pub use task::{SortDirection, Task, TaskPatch, TaskSortKey, sort_tasks};
pub use types::{
    // Type aliases
    MealId,
    ResidentId,
    TaskId,
    // Core types
    Meal,
    Resident,
    Theme,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_round_trip_through_json() {
        let json = serde_json::to_string(&Theme::Aqua).unwrap();
        assert_eq!(json, "\"aqua\"");

        let back: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Theme::Aqua);
    }

    #[test]
    fn test_resident_equality_is_structural() {
        let make = || Resident {
            id: "1".to_string(),
            name: "SpongeBob SquarePants".to_string(),
            email: "spongebob@bikinibottom.com".to_string(),
            city: "Bikini Bottom".to_string(),
            company: "Krusty Krab".to_string(),
            catchphrase: "I'm ready!".to_string(),
            business: "fry cooking".to_string(),
            image_url: None,
            emoji: Some("🧑".to_string()),
        };

        assert_eq!(make(), make());
    }
}
