//! The favorites store.
//!
//! A persisted, insertion-ordered set of ids. Both residents and meals
//! share this store; an id is simply in the set or not.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use model::config::FAVORITES_KEY;

use crate::error::Result;
use crate::persist::{StateStorage, load_snapshot, save_snapshot};

pub struct FavoritesStore {
    storage: Arc<dyn StateStorage>,
    favorites: Mutex<Vec<String>>,
}

impl FavoritesStore {
    /// Restore the persisted set, or start empty.
    pub fn new(storage: Arc<dyn StateStorage>) -> Self {
        let favorites = load_snapshot(storage.as_ref(), FAVORITES_KEY).unwrap_or_default();
        Self {
            storage,
            favorites: Mutex::new(favorites),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.favorites.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add the id if absent, remove it if present. Returns whether the id
    /// is a favorite afterwards.
    pub fn toggle(&self, id: &str) -> Result<bool> {
        let snapshot = {
            let mut favorites = self.lock();
            match favorites.iter().position(|fav| fav == id) {
                Some(index) => {
                    favorites.remove(index);
                }
                None => favorites.push(id.to_string()),
            }
            favorites.clone()
        };
        save_snapshot(self.storage.as_ref(), FAVORITES_KEY, &snapshot)?;
        Ok(snapshot.iter().any(|fav| fav == id))
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.lock().iter().any(|fav| fav == id)
    }

    pub fn count(&self) -> usize {
        self.lock().len()
    }

    /// All favorite ids in insertion order.
    pub fn all(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn clear(&self) -> Result<()> {
        self.lock().clear();
        save_snapshot(self.storage.as_ref(), FAVORITES_KEY, &Vec::<String>::new())
    }
}
