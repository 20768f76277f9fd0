//! Glue between the HTTP client and the store fetcher traits.

use async_trait::async_trait;

use api_client::PortalClient;
use model::{Meal, Resident};
use stores::{MealSource, ResidentSource};

/// The production fetcher: both store sources backed by one [`PortalClient`].
pub struct RemoteSources {
    client: PortalClient,
}

impl RemoteSources {
    pub fn new(client: PortalClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ResidentSource for RemoteSources {
    async fn fetch_residents(&self) -> anyhow::Result<Vec<Resident>> {
        Ok(self.client.fetch_residents().await?)
    }
}

#[async_trait]
impl MealSource for RemoteSources {
    async fn fetch_meals(&self) -> anyhow::Result<Vec<Meal>> {
        Ok(self.client.fetch_meal_catalog().await?)
    }
}
