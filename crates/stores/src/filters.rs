//! Persisted filter-criteria stores.
//!
//! Criteria are independent: setting one never touches another. Each store
//! persists its full criteria record on every change, so filters survive a
//! restart the way they survive a page reload in a browser.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

use model::config::{MEAL_FILTERS_KEY, RESIDENT_FILTERS_KEY};

use crate::error::Result;
use crate::persist::{StateStorage, load_snapshot, save_snapshot};

/// Filter criteria for the resident directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResidentCriteria {
    pub search_text: String,
    pub role_filter: String,
}

/// Filter criteria for the meal catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MealCriteria {
    pub search_text: String,
    pub category_filter: String,
    pub origin_filter: String,
}

pub struct ResidentFilterStore {
    storage: Arc<dyn StateStorage>,
    criteria: Mutex<ResidentCriteria>,
}

impl ResidentFilterStore {
    pub fn new(storage: Arc<dyn StateStorage>) -> Self {
        let criteria = load_snapshot(storage.as_ref(), RESIDENT_FILTERS_KEY).unwrap_or_default();
        Self {
            storage,
            criteria: Mutex::new(criteria),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ResidentCriteria> {
        self.criteria.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn criteria(&self) -> ResidentCriteria {
        self.lock().clone()
    }

    pub fn set_search_text(&self, text: impl Into<String>) -> Result<()> {
        let snapshot = {
            let mut criteria = self.lock();
            criteria.search_text = text.into();
            criteria.clone()
        };
        save_snapshot(self.storage.as_ref(), RESIDENT_FILTERS_KEY, &snapshot)
    }

    pub fn set_role_filter(&self, role: impl Into<String>) -> Result<()> {
        let snapshot = {
            let mut criteria = self.lock();
            criteria.role_filter = role.into();
            criteria.clone()
        };
        save_snapshot(self.storage.as_ref(), RESIDENT_FILTERS_KEY, &snapshot)
    }
}

pub struct MealFilterStore {
    storage: Arc<dyn StateStorage>,
    criteria: Mutex<MealCriteria>,
}

impl MealFilterStore {
    pub fn new(storage: Arc<dyn StateStorage>) -> Self {
        let criteria = load_snapshot(storage.as_ref(), MEAL_FILTERS_KEY).unwrap_or_default();
        Self {
            storage,
            criteria: Mutex::new(criteria),
        }
    }

    fn lock(&self) -> MutexGuard<'_, MealCriteria> {
        self.criteria.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn criteria(&self) -> MealCriteria {
        self.lock().clone()
    }

    pub fn set_search_text(&self, text: impl Into<String>) -> Result<()> {
        let snapshot = {
            let mut criteria = self.lock();
            criteria.search_text = text.into();
            criteria.clone()
        };
        save_snapshot(self.storage.as_ref(), MEAL_FILTERS_KEY, &snapshot)
    }

    pub fn set_category_filter(&self, category: impl Into<String>) -> Result<()> {
        let snapshot = {
            let mut criteria = self.lock();
            criteria.category_filter = category.into();
            criteria.clone()
        };
        save_snapshot(self.storage.as_ref(), MEAL_FILTERS_KEY, &snapshot)
    }

    pub fn set_origin_filter(&self, origin: impl Into<String>) -> Result<()> {
        let snapshot = {
            let mut criteria = self.lock();
            criteria.origin_filter = origin.into();
            criteria.clone()
        };
        save_snapshot(self.storage.as_ref(), MEAL_FILTERS_KEY, &snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::MemoryStorage;

    #[test]
    fn test_setting_one_criterion_leaves_the_others_alone() {
        let store = MealFilterStore::new(Arc::new(MemoryStorage::new()));

        store.set_search_text("patty").unwrap();
        store.set_category_filter("Seafood").unwrap();

        let criteria = store.criteria();
        assert_eq!(criteria.search_text, "patty");
        assert_eq!(criteria.category_filter, "Seafood");
        assert_eq!(criteria.origin_filter, "");

        store.set_origin_filter("American").unwrap();
        let criteria = store.criteria();
        assert_eq!(criteria.search_text, "patty", "search text is untouched");
        assert_eq!(criteria.origin_filter, "American");
    }

    #[test]
    fn test_criteria_survive_a_reload() {
        let storage = Arc::new(MemoryStorage::new());

        {
            let store = ResidentFilterStore::new(storage.clone());
            store.set_search_text("sponge").unwrap();
            store.set_role_filter("fry cooking").unwrap();
        }

        let revived = ResidentFilterStore::new(storage);
        let criteria = revived.criteria();
        assert_eq!(criteria.search_text, "sponge");
        assert_eq!(criteria.role_filter, "fry cooking");
    }

    #[test]
    fn test_default_criteria_are_all_empty() {
        let criteria = MealFilterStore::new(Arc::new(MemoryStorage::new())).criteria();
        assert_eq!(criteria, MealCriteria::default());
    }

    #[test]
    fn test_partial_snapshot_decodes_with_defaults() {
        let storage = Arc::new(MemoryStorage::new());
        storage.save(MEAL_FILTERS_KEY, r#"{"searchText":"kelp"}"#).unwrap();

        let store = MealFilterStore::new(storage);
        let criteria = store.criteria();
        assert_eq!(criteria.search_text, "kelp");
        assert_eq!(criteria.category_filter, "");
    }
}
