//! # Stores Crate
//!
//! Explicit, dependency-injected state containers for the portal. Nothing
//! here is a global: the composition root builds each store, hands it a
//! storage backend, and passes it down.
//!
//! ## Main Components
//!
//! - **remote**: fetch-once collection stores for residents and meals,
//!   with injectable fetcher traits
//! - **favorites / filters / tasks / theme**: persisted user-state stores
//! - **persist**: the `StateStorage` backend trait, file-system and
//!   in-memory implementations, and the pure encode/decode boundary
//! - **error**: storage error types
//!
//! ## Example Usage
//!
//! ```
//! use std::sync::Arc;
//! use stores::{FavoritesStore, MemoryStorage};
//!
//! let storage = Arc::new(MemoryStorage::new());
//! let favorites = FavoritesStore::new(storage);
//!
//! favorites.toggle("52855").unwrap();
//! assert!(favorites.is_favorite("52855"));
//! ```

// Public modules
pub mod error;
pub mod favorites;
pub mod filters;
pub mod persist;
pub mod remote;
pub mod tasks;
pub mod theme;

// Re-export commonly used types for convenience
pub use error::{Result, StorageError};
pub use favorites::FavoritesStore;
pub use filters::{MealCriteria, MealFilterStore, ResidentCriteria, ResidentFilterStore};
pub use persist::{FileStorage, MemoryStorage, StateStorage};
pub use remote::{
    MEALS_FETCH_FALLBACK, MealSource, MealsStore, RESIDENTS_FETCH_FALLBACK, RemoteStore,
    ResidentSource, ResidentsStore,
};
pub use tasks::TaskStore;
pub use theme::ThemeStore;
