//! HTTP client for the portal's two remote data sources.
//!
//! This crate wraps plain REST GETs against the public user-directory and
//! recipe-search APIs. It handles:
//! - One shared `reqwest::Client` with a fixed request timeout
//! - Decoding each API's idiosyncratic response shape (`raw` module)
//! - Normalizing wire records into the workspace's domain types
//! - Error handling that keeps the underlying failure message intact

use std::time::Duration;

use futures::future::try_join_all;
use thiserror::Error;
use tracing::debug;

use model::{Meal, Resident};

pub mod raw;

use raw::{RawUser, SearchResponse};

/// Default user-directory endpoint. Overridable per client, since the
/// directory URL is the one piece of remote configuration the portal exposes.
pub const DIRECTORY_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

/// Recipe-search endpoint. Fixed; only the `f=<letter>` query varies.
pub const RECIPE_ENDPOINT: &str = "https://www.themealdb.com/api/json/v1/1/search.php";

/// Fixed per-request timeout. Not user-configurable.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// First letters used to assemble the meal catalog. The recipe API only
/// searches one letter at a time, so the catalog is the flattened union of
/// these five searches, in this order.
pub const MEAL_LETTERS: [char; 5] = ['a', 'b', 'c', 'f', 's'];

/// Errors that can occur when talking to a remote API.
///
/// The `Display` output keeps the reqwest failure text verbatim; stores
/// surface that text to the user unchanged.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("GET {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("decoding response from {url} failed: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Client for both remote APIs.
///
/// Holds a single connection-pooled `reqwest::Client`; cheap to clone.
#[derive(Debug, Clone)]
pub struct PortalClient {
    http: reqwest::Client,
    directory_url: String,
}

impl PortalClient {
    /// Build a client against the default directory endpoint.
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_directory_url(DIRECTORY_ENDPOINT)
    }

    /// Build a client against a custom directory endpoint.
    pub fn with_directory_url(directory_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            directory_url: directory_url.into(),
        })
    }

    /// The directory endpoint this client queries.
    pub fn directory_url(&self) -> &str {
        &self.directory_url
    }

    /// Fetch the resident directory and normalize it.
    pub async fn fetch_residents(&self) -> Result<Vec<Resident>, ApiError> {
        let url = self.directory_url.clone();
        debug!(%url, "fetching resident directory");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|source| ApiError::Request {
                url: url.clone(),
                source,
            })?;

        let users: Vec<RawUser> = response
            .json()
            .await
            .map_err(|source| ApiError::Decode {
                url: url.clone(),
                source,
            })?;

        debug!(count = users.len(), "fetched resident directory");
        Ok(users.into_iter().map(Resident::from).collect())
    }

    /// Fetch all meals whose name starts with `letter`.
    ///
    /// The API answers `{"meals": null}` when nothing matches; that is an
    /// empty result, not an error.
    pub async fn fetch_meals_by_letter(&self, letter: char) -> Result<Vec<Meal>, ApiError> {
        let url = format!("{RECIPE_ENDPOINT}?f={letter}");
        debug!(%url, "searching meals");

        let response = self
            .http
            .get(RECIPE_ENDPOINT)
            .query(&[("f", letter.to_string())])
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|source| ApiError::Request {
                url: url.clone(),
                source,
            })?;

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|source| ApiError::Decode { url, source })?;

        let meals: Vec<Meal> = body
            .meals
            .unwrap_or_default()
            .into_iter()
            .map(Meal::from)
            .collect();

        debug!(letter = %letter, count = meals.len(), "meal search complete");
        Ok(meals)
    }

    /// Fetch the whole meal catalog: one search per letter in
    /// [`MEAL_LETTERS`], run concurrently, flattened in letter order.
    pub async fn fetch_meal_catalog(&self) -> Result<Vec<Meal>, ApiError> {
        let searches = MEAL_LETTERS
            .iter()
            .map(|&letter| self.fetch_meals_by_letter(letter));

        let results = try_join_all(searches).await?;
        Ok(results.into_iter().flatten().collect())
    }
}
