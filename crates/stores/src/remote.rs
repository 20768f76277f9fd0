//! Fetch-once remote collection stores.
//!
//! A [`RemoteStore`] fetches its collection at most once per lifetime:
//! `Idle -> Loading -> Fetched`, where a failure drops back to `Idle` so a
//! later attempt may retry. All state transitions are compare-and-set style
//! updates under a mutex whose critical sections never await; the network
//! call itself runs outside the lock.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use tracing::{debug, warn};

use model::{Meal, Resident};

/// Fallback error text for failures that render an empty message.
pub const RESIDENTS_FETCH_FALLBACK: &str = "Failed to fetch residents";
pub const MEALS_FETCH_FALLBACK: &str = "Failed to fetch meals";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Loading,
    Fetched,
}

struct Inner<T> {
    phase: Phase,
    data: Arc<Vec<T>>,
    error: Option<String>,
    generation: u64,
}

/// Generic fetch-once collection store.
///
/// Exposes `{data, loading, error}` plus a generation counter that bumps on
/// every data replacement; memoized views key on it.
pub struct RemoteStore<T> {
    label: &'static str,
    fallback: &'static str,
    inner: Mutex<Inner<T>>,
}

impl<T> RemoteStore<T> {
    pub fn new(label: &'static str, fallback: &'static str) -> Self {
        Self {
            label,
            fallback,
            inner: Mutex::new(Inner {
                phase: Phase::Idle,
                data: Arc::new(Vec::new()),
                error: None,
                generation: 0,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `op` and store its result — unless a fetch already succeeded or
    /// one is currently in flight, in which case this is a no-op.
    pub async fn fetch<F, Fut>(&self, op: F)
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = anyhow::Result<Vec<T>>>,
    {
        {
            let mut inner = self.lock();
            match inner.phase {
                Phase::Idle => {
                    inner.phase = Phase::Loading;
                    inner.error = None;
                }
                Phase::Loading => {
                    debug!(store = self.label, "fetch skipped: already in flight");
                    return;
                }
                Phase::Fetched => {
                    debug!(store = self.label, "fetch skipped: already fetched");
                    return;
                }
            }
        }

        let outcome = op().await;

        let mut inner = self.lock();
        match outcome {
            Ok(items) => {
                debug!(store = self.label, count = items.len(), "fetch succeeded");
                inner.data = Arc::new(items);
                inner.generation += 1;
                inner.error = None;
                inner.phase = Phase::Fetched;
            }
            Err(error) => {
                let mut message = error.to_string();
                if message.trim().is_empty() {
                    message = self.fallback.to_string();
                }
                warn!(store = self.label, %message, "fetch failed");
                inner.error = Some(message);
                inner.phase = Phase::Idle;
            }
        }
    }

    /// The fetched collection (empty until a fetch succeeds).
    pub fn data(&self) -> Arc<Vec<T>> {
        Arc::clone(&self.lock().data)
    }

    /// True only while an attempt is in flight.
    pub fn loading(&self) -> bool {
        self.lock().phase == Phase::Loading
    }

    /// The last failure message, cleared when an attempt starts.
    pub fn error(&self) -> Option<String> {
        self.lock().error.clone()
    }

    /// True once a fetch has succeeded.
    pub fn has_fetched(&self) -> bool {
        self.lock().phase == Phase::Fetched
    }

    /// Bumped on every data replacement.
    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    /// Forget everything and allow a fresh fetch.
    pub fn reset(&self) {
        let mut inner = self.lock();
        inner.phase = Phase::Idle;
        inner.data = Arc::new(Vec::new());
        inner.error = None;
        inner.generation += 1;
    }
}

// =============================================================================
// Injectable fetchers and the two concrete stores
// =============================================================================

/// Source of the resident directory.
#[async_trait]
pub trait ResidentSource: Send + Sync {
    async fn fetch_residents(&self) -> anyhow::Result<Vec<Resident>>;
}

/// Source of the meal catalog.
#[async_trait]
pub trait MealSource: Send + Sync {
    async fn fetch_meals(&self) -> anyhow::Result<Vec<Meal>>;
}

/// Fetch-once store for the resident directory.
pub struct ResidentsStore {
    source: Arc<dyn ResidentSource>,
    store: RemoteStore<Resident>,
}

impl ResidentsStore {
    pub fn new(source: Arc<dyn ResidentSource>) -> Self {
        Self {
            source,
            store: RemoteStore::new("residents", RESIDENTS_FETCH_FALLBACK),
        }
    }

    pub async fn fetch(&self) {
        self.store.fetch(|| self.source.fetch_residents()).await;
    }

    pub fn residents(&self) -> Arc<Vec<Resident>> {
        self.store.data()
    }

    pub fn loading(&self) -> bool {
        self.store.loading()
    }

    pub fn error(&self) -> Option<String> {
        self.store.error()
    }

    pub fn has_fetched(&self) -> bool {
        self.store.has_fetched()
    }

    pub fn generation(&self) -> u64 {
        self.store.generation()
    }

    pub fn reset(&self) {
        self.store.reset();
    }
}

/// Fetch-once store for the meal catalog.
pub struct MealsStore {
    source: Arc<dyn MealSource>,
    store: RemoteStore<Meal>,
}

impl MealsStore {
    pub fn new(source: Arc<dyn MealSource>) -> Self {
        Self {
            source,
            store: RemoteStore::new("meals", MEALS_FETCH_FALLBACK),
        }
    }

    pub async fn fetch(&self) {
        self.store.fetch(|| self.source.fetch_meals()).await;
    }

    pub fn meals(&self) -> Arc<Vec<Meal>> {
        self.store.data()
    }

    pub fn loading(&self) -> bool {
        self.store.loading()
    }

    pub fn error(&self) -> Option<String> {
        self.store.error()
    }

    pub fn has_fetched(&self) -> bool {
        self.store.has_fetched()
    }

    pub fn generation(&self) -> u64 {
        self.store.generation()
    }

    pub fn reset(&self) {
        self.store.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;

    /// Fake directory that counts calls and can be held in flight.
    struct FakeDirectory {
        calls: AtomicUsize,
        gate: Option<Arc<Notify>>,
        fail_first: bool,
    }

    impl FakeDirectory {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                gate: None,
                fail_first: false,
            }
        }

        fn gated(gate: Arc<Notify>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                gate: Some(gate),
                fail_first: false,
            }
        }

        fn failing_once() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                gate: None,
                fail_first: true,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn spongebob() -> Resident {
            Resident {
                id: "1".to_string(),
                name: "SpongeBob SquarePants".to_string(),
                email: "spongebob@bikinibottom.com".to_string(),
                city: "Bikini Bottom".to_string(),
                company: "Krusty Krab".to_string(),
                catchphrase: "I'm ready!".to_string(),
                business: "fry cooking".to_string(),
                image_url: None,
                emoji: None,
            }
        }
    }

    #[async_trait]
    impl ResidentSource for FakeDirectory {
        async fn fetch_residents(&self) -> anyhow::Result<Vec<Resident>> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            if self.fail_first && call == 0 {
                anyhow::bail!("connection refused");
            }
            Ok(vec![Self::spongebob()])
        }
    }

    #[tokio::test]
    async fn test_successful_fetch_populates_the_store() {
        let source = Arc::new(FakeDirectory::new());
        let store = ResidentsStore::new(source.clone());

        assert!(!store.has_fetched());
        store.fetch().await;

        assert!(store.has_fetched());
        assert!(!store.loading());
        assert!(store.error().is_none());
        assert_eq!(store.residents().len(), 1);
        assert_eq!(store.generation(), 1);
    }

    #[tokio::test]
    async fn test_fetch_after_success_is_a_no_op() {
        let source = Arc::new(FakeDirectory::new());
        let store = ResidentsStore::new(source.clone());

        store.fetch().await;
        store.fetch().await;
        store.fetch().await;

        assert_eq!(source.calls(), 1, "further fetch calls make no network calls");
        assert_eq!(store.generation(), 1);
    }

    #[tokio::test]
    async fn test_overlapping_fetches_make_one_underlying_call() {
        let gate = Arc::new(Notify::new());
        let source = Arc::new(FakeDirectory::gated(gate.clone()));
        let store = Arc::new(ResidentsStore::new(source.clone()));

        let first = tokio::spawn({
            let store = store.clone();
            async move { store.fetch().await }
        });
        // Let the first call reach the in-flight await.
        tokio::task::yield_now().await;
        assert!(store.loading());

        // Second call while the first is in flight: returns immediately.
        store.fetch().await;
        assert_eq!(source.calls(), 1);

        gate.notify_one();
        first.await.unwrap();

        assert!(store.has_fetched());
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_failure_records_message_and_allows_retry() {
        let source = Arc::new(FakeDirectory::failing_once());
        let store = ResidentsStore::new(source.clone());

        store.fetch().await;

        assert!(!store.has_fetched(), "a failed fetch is not terminal");
        assert!(!store.loading());
        assert_eq!(store.error().as_deref(), Some("connection refused"));
        assert!(store.residents().is_empty(), "data stays empty on failure");

        // Retry is allowed and clears the error on success.
        store.fetch().await;

        assert!(store.has_fetched());
        assert!(store.error().is_none());
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn test_empty_failure_message_falls_back_to_generic_text() {
        struct Blank;

        #[async_trait]
        impl ResidentSource for Blank {
            async fn fetch_residents(&self) -> anyhow::Result<Vec<Resident>> {
                Err(anyhow::anyhow!(""))
            }
        }

        let store = ResidentsStore::new(Arc::new(Blank));
        store.fetch().await;

        assert_eq!(store.error().as_deref(), Some(RESIDENTS_FETCH_FALLBACK));
    }

    #[tokio::test]
    async fn test_reset_allows_a_fresh_fetch() {
        let source = Arc::new(FakeDirectory::new());
        let store = ResidentsStore::new(source.clone());

        store.fetch().await;
        store.reset();

        assert!(!store.has_fetched());
        assert!(store.residents().is_empty());

        store.fetch().await;
        assert_eq!(source.calls(), 2);
    }
}
