use reqwest::Client;

use crate::models::{SignalsSnapshot, StatusSnapshot};

/// Typed client for the dashboard API's two snapshot endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub async fn fetch_status(&self) -> Result<StatusSnapshot, reqwest::Error> {
        let url = format!("{}/status", self.base_url);
        self.http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    pub async fn fetch_signals(
        &self,
        limit: Option<usize>,
    ) -> Result<SignalsSnapshot, reqwest::Error> {
        let url = format!("{}/signals", self.base_url);
        let mut req = self.http.get(&url);
        if let Some(limit) = limit {
            req = req.query(&[("limit", limit.to_string())]);
        }
        req.send().await?.error_for_status()?.json().await
    }
}
