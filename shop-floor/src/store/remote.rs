//! Shared-backend store client

use std::time::Duration;

use async_trait::async_trait;
use shared::models::order::OrderRecord;
use shared::models::sync::Connectivity;

use super::{OrderStore, StoreError};

/// JSON client for the shared backend
///
/// `GET /records` reads the whole collection, `PUT /records` replaces it.
/// The backend applies no concurrency control: when two sessions write,
/// the later write silently wins.
pub struct RemoteStore {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteStore {
    pub fn new(base_url: impl Into<String>, request_timeout: Duration) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder().timeout(request_timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    /// Liveness probe, bounded by `timeout`; any failure means offline
    pub async fn probe(&self, timeout: Duration) -> Connectivity {
        let health = self.client.get(self.url("health")).timeout(timeout).send();
        match tokio::time::timeout(timeout, health).await {
            Ok(Ok(response)) if response.status().is_success() => Connectivity::Online,
            _ => Connectivity::Offline,
        }
    }
}

#[async_trait]
impl OrderStore for RemoteStore {
    async fn read_all(&self) -> Result<Vec<OrderRecord>, StoreError> {
        let response = self
            .client
            .get(self.url("records"))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    async fn replace_all(&self, records: &[OrderRecord]) -> Result<(), StoreError> {
        self.client
            .put(self.url("records"))
            .json(records)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
