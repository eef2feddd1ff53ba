use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Uniform failure taxonomy for the record store. Network trouble, auth
/// rejections, timeouts and malformed replies all collapse into this;
/// callers are not meant to distinguish further.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(#[from] reqwest::Error),

    #[error("unexpected store reply: {0}")]
    Unexpected(String),
}

#[derive(Debug, Deserialize)]
struct RestReply {
    result: Value,
}

/// Upstash Redis REST client. One POST per command; the body is the command
/// as a JSON array and the credential rides in the Authorization header.
///
/// Holds only immutable configuration plus a pooled HTTP client, so a single
/// instance is shared (cloned) process-wide.
#[derive(Debug, Clone)]
pub struct RedisStore {
    http: Client,
    url: String,
    token: String,
}

impl RedisStore {
    pub fn new(url: String, token: String, timeout: Duration) -> anyhow::Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http, url, token })
    }

    async fn execute(&self, command: &[&str]) -> Result<Value, StoreError> {
        metrics::counter!("store_requests_total").increment(1);

        let resp = self
            .http
            .post(&self.url)
            .bearer_auth(&self.token)
            .json(&command)
            .send()
            .await?
            .error_for_status()?;

        let reply: RestReply = resp.json().await?;
        Ok(reply.result)
    }

    /// Prepend a value to the named list.
    pub async fn lpush(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.execute(&["LPUSH", key, value]).await?;
        Ok(())
    }

    /// Trim the named list to the inclusive index range, dropping the rest.
    pub async fn ltrim(&self, key: &str, start: i64, stop: i64) -> Result<(), StoreError> {
        self.execute(&["LTRIM", key, &start.to_string(), &stop.to_string()])
            .await?;
        Ok(())
    }

    /// Inclusive range of list entries, front (most recent) first. A
    /// nonexistent key yields an empty vec, matching Redis semantics.
    pub async fn lrange(
        &self,
        key: &str,
        start: i64,
        stop: i64,
    ) -> Result<Vec<String>, StoreError> {
        let result = self
            .execute(&["LRANGE", key, &start.to_string(), &stop.to_string()])
            .await?;

        let Value::Array(items) = result else {
            return Err(StoreError::Unexpected(format!(
                "LRANGE {key} returned non-array reply"
            )));
        };

        items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Ok(s),
                other => Err(StoreError::Unexpected(format!(
                    "LRANGE {key} returned non-string entry: {other}"
                ))),
            })
            .collect()
    }

    /// Fetch a scalar; `None` when the key was never written (or expired).
    pub async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self.execute(&["GET", key]).await? {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s)),
            other => Err(StoreError::Unexpected(format!(
                "GET {key} returned non-string reply: {other}"
            ))),
        }
    }

    /// Atomic full replacement of a scalar.
    pub async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.execute(&["SET", key, value]).await?;
        Ok(())
    }

    pub async fn expire(&self, key: &str, seconds: i64) -> Result<(), StoreError> {
        self.execute(&["EXPIRE", key, &seconds.to_string()]).await?;
        Ok(())
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        self.execute(&["PING"]).await?;
        Ok(())
    }
}
