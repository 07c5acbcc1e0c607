//! Advisory AI summary port
//!
//! A pure `summarize(orders) -> text` call against an external service.
//! Purely decorative for the workflow: any failure, including timeout,
//! degrades to a fixed fallback message and is never surfaced as an error.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use shared::models::order::OrderRecord;

/// Shown whenever the summary service cannot answer
pub const FALLBACK_SUMMARY: &str = "摘要服务暂时不可用。";

#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, records: &[OrderRecord]) -> String;
}

/// Compact digest sent to the service instead of raw records
#[derive(Debug, Serialize)]
struct SummaryRequest {
    total_orders: usize,
    by_status: BTreeMap<&'static str, usize>,
}

impl SummaryRequest {
    fn from_records(records: &[OrderRecord]) -> Self {
        let mut by_status = BTreeMap::new();
        for record in records {
            *by_status.entry(record.status.token()).or_insert(0) += 1;
        }
        Self {
            total_orders: records.len(),
            by_status,
        }
    }
}

pub struct HttpSummarizer {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpSummarizer {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            timeout,
        }
    }

    async fn request(&self, records: &[OrderRecord]) -> Result<String, reqwest::Error> {
        let response = self
            .client
            .post(&self.endpoint)
            .timeout(self.timeout)
            .json(&SummaryRequest::from_records(records))
            .send()
            .await?
            .error_for_status()?;
        response.text().await
    }
}

#[async_trait]
impl Summarizer for HttpSummarizer {
    async fn summarize(&self, records: &[OrderRecord]) -> String {
        match tokio::time::timeout(self.timeout, self.request(records)).await {
            Ok(Ok(text)) if !text.trim().is_empty() => text,
            Ok(Ok(_)) => FALLBACK_SUMMARY.to_string(),
            Ok(Err(e)) => {
                tracing::warn!("Summary service failed: {e}");
                FALLBACK_SUMMARY.to_string()
            }
            Err(_) => {
                tracing::warn!("Summary service timed out");
                FALLBACK_SUMMARY.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_service_falls_back_to_static_text() {
        let summarizer =
            HttpSummarizer::new("http://192.0.2.1:9/summary", Duration::from_millis(200));
        let text = summarizer.summarize(&[]).await;
        assert_eq!(text, FALLBACK_SUMMARY);
    }
}
