//! # Portal
//!
//! The composition root: owns every store, the injected fetchers, and the
//! derived-view machinery, and exposes the operations a front-end consumes.
//! No globals anywhere; build one `Portal` and pass it around.
//!
//! 1. Fetch collections through the fetch-once stores
//! 2. Reduce them through the filter pipeline (memoized per generation +
//!    criteria)
//! 3. Paginate the filtered result, resetting the page when the filtered
//!    size changes
//! 4. Resolve favorites and dashboard aggregations on demand

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, NaiveDate, Utc};
use tracing::info;

use model::config::ITEMS_PER_PAGE;
use model::{Meal, Resident};
use pipeline::filters::{
    MealCategoryFilter, MealOriginFilter, MealSearchFilter, ResidentRoleFilter,
    ResidentSearchFilter,
};
use pipeline::pagination::Pager;
use pipeline::{CachedView, FilterPipeline, available_categories, available_origins, page_window};
use stores::{
    FavoritesStore, MealFilterStore, MealSource, MealsStore, ResidentFilterStore, ResidentSource,
    ResidentsStore, StateStorage, TaskStore, ThemeStore,
};

use crate::dashboard::{self, Dashboard};
use crate::format::DateFormatCache;
use crate::views::{CollectionPage, MealFilterOptions, MealPage, ResidentPage};

pub struct Portal {
    residents: ResidentsStore,
    meals: MealsStore,
    favorites: FavoritesStore,
    resident_filters: ResidentFilterStore,
    meal_filters: MealFilterStore,
    tasks: TaskStore,
    theme: ThemeStore,

    resident_view: Mutex<CachedView<Resident>>,
    meal_view: Mutex<CachedView<Meal>>,
    resident_pager: Mutex<Pager>,
    meal_pager: Mutex<Pager>,
    date_cache: Mutex<DateFormatCache>,
}

impl Portal {
    /// Wire up a portal from its collaborators.
    pub fn new(
        resident_source: Arc<dyn ResidentSource>,
        meal_source: Arc<dyn MealSource>,
        storage: Arc<dyn StateStorage>,
    ) -> Self {
        Self {
            residents: ResidentsStore::new(resident_source),
            meals: MealsStore::new(meal_source),
            favorites: FavoritesStore::new(storage.clone()),
            resident_filters: ResidentFilterStore::new(storage.clone()),
            meal_filters: MealFilterStore::new(storage.clone()),
            tasks: TaskStore::new(storage.clone()),
            theme: ThemeStore::new(storage),
            resident_view: Mutex::new(CachedView::new()),
            meal_view: Mutex::new(CachedView::new()),
            resident_pager: Mutex::new(Pager::new()),
            meal_pager: Mutex::new(Pager::new()),
            date_cache: Mutex::new(DateFormatCache::new()),
        }
    }

    fn lock<'a, T>(mutex: &'a Mutex<T>) -> MutexGuard<'a, T> {
        mutex.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // =========================================================================
    // Remote collections
    // =========================================================================

    /// Fetch the resident directory (no-op once fetched).
    pub async fn load_residents(&self) {
        self.residents.fetch().await;
        if let Some(error) = self.residents.error() {
            info!(%error, "resident directory unavailable");
        }
    }

    /// Fetch the meal catalog (no-op once fetched).
    pub async fn load_meals(&self) {
        self.meals.fetch().await;
        if let Some(error) = self.meals.error() {
            info!(%error, "meal catalog unavailable");
        }
    }

    // =========================================================================
    // Derived views
    // =========================================================================

    /// The current page of the filtered resident directory.
    ///
    /// `requested` navigates; `None` stays on the current page. Either way
    /// the page is clamped, and a change in the filtered collection size
    /// snaps back to page 1 first.
    pub fn resident_page(&self, requested: Option<usize>) -> ResidentPage {
        let data = self.residents.residents();
        let criteria = self.resident_filters.criteria();

        let filtered = Self::lock(&self.resident_view).get_or_compute(
            self.residents.generation(),
            &[criteria.search_text.as_str(), criteria.role_filter.as_str()],
            || {
                FilterPipeline::new()
                    .add_filter(ResidentSearchFilter::new(criteria.search_text.clone()))
                    .add_filter(ResidentRoleFilter::new(criteria.role_filter.clone()))
                    .apply(data.as_ref().clone())
            },
        );

        let current = {
            let mut pager = Self::lock(&self.resident_pager);
            pager.observe(filtered.len(), ITEMS_PER_PAGE);
            match requested {
                Some(page) => pager.set(page, filtered.len(), ITEMS_PER_PAGE),
                None => pager.page(),
            }
        };

        Self::assemble_page(
            &filtered,
            current,
            self.residents.loading(),
            self.residents.error(),
        )
    }

    /// The current page of the filtered meal catalog.
    pub fn meal_page(&self, requested: Option<usize>) -> MealPage {
        let data = self.meals.meals();
        let criteria = self.meal_filters.criteria();

        let filtered = Self::lock(&self.meal_view).get_or_compute(
            self.meals.generation(),
            &[
                criteria.search_text.as_str(),
                criteria.category_filter.as_str(),
                criteria.origin_filter.as_str(),
            ],
            || {
                FilterPipeline::new()
                    .add_filter(MealSearchFilter::new(criteria.search_text.clone()))
                    .add_filter(MealCategoryFilter::new(criteria.category_filter.clone()))
                    .add_filter(MealOriginFilter::new(criteria.origin_filter.clone()))
                    .apply(data.as_ref().clone())
            },
        );

        let current = {
            let mut pager = Self::lock(&self.meal_pager);
            pager.observe(filtered.len(), ITEMS_PER_PAGE);
            match requested {
                Some(page) => pager.set(page, filtered.len(), ITEMS_PER_PAGE),
                None => pager.page(),
            }
        };

        Self::assemble_page(&filtered, current, self.meals.loading(), self.meals.error())
    }

    fn assemble_page<T: Clone>(
        filtered: &Arc<Vec<T>>,
        current: usize,
        loading: bool,
        error: Option<String>,
    ) -> CollectionPage<T> {
        let window = page_window(current, filtered.len(), ITEMS_PER_PAGE);
        let items = match &window {
            Some(window) => filtered[window.slice_range()].to_vec(),
            None => filtered.as_ref().clone(),
        };

        CollectionPage {
            items,
            window,
            total_items: filtered.len(),
            loading,
            error,
        }
    }

    /// Select options for the meal filters, from the unfiltered catalog.
    pub fn meal_filter_options(&self) -> MealFilterOptions {
        let meals = self.meals.meals();
        MealFilterOptions {
            categories: available_categories(&meals),
            origins: available_origins(&meals),
        }
    }

    // =========================================================================
    // Favorites
    // =========================================================================

    /// Favorite meals resolved against the catalog, in the order they were
    /// favorited. Ids that resolve to nothing (or belong to residents) are
    /// skipped.
    pub fn favorite_meals(&self) -> Vec<Meal> {
        let meals = self.meals.meals();
        self.favorites
            .all()
            .iter()
            .filter_map(|id| meals.iter().find(|meal| &meal.id == id).cloned())
            .collect()
    }

    /// Favorite residents resolved against the directory.
    pub fn favorite_residents(&self) -> Vec<Resident> {
        let residents = self.residents.residents();
        self.favorites
            .all()
            .iter()
            .filter_map(|id| residents.iter().find(|r| &r.id == id).cloned())
            .collect()
    }

    // =========================================================================
    // Dashboard
    // =========================================================================

    /// Assemble the dashboard for `day` (today when `None`).
    pub fn dashboard(&self, day: Option<NaiveDate>) -> Dashboard {
        let tasks = self.tasks.tasks();
        let favorite_meals = self.favorite_meals();
        let selected_day = day.unwrap_or_else(|| Utc::now().date_naive());

        Dashboard {
            summary: dashboard::summarize_tasks(&tasks),
            favorite_categories: dashboard::favorite_meals_by_category(&favorite_meals),
            favorite_meal_count: favorite_meals.len(),
            total_meal_count: self.meals.meals().len(),
            task_days: dashboard::task_days(&tasks),
            tasks_for_day: dashboard::tasks_on_day(&tasks, selected_day),
            selected_day,
        }
    }

    /// Format a timestamp through the shared memoization cache.
    pub fn format_date(&self, date: DateTime<Utc>) -> String {
        Self::lock(&self.date_cache).format(date)
    }

    // =========================================================================
    // Store access
    // =========================================================================

    pub fn residents(&self) -> &ResidentsStore {
        &self.residents
    }

    pub fn meals(&self) -> &MealsStore {
        &self.meals
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    pub fn resident_filters(&self) -> &ResidentFilterStore {
        &self.resident_filters
    }

    pub fn meal_filters(&self) -> &MealFilterStore {
        &self.meal_filters
    }

    pub fn tasks(&self) -> &TaskStore {
        &self.tasks
    }

    pub fn theme(&self) -> &ThemeStore {
        &self.theme
    }
}
