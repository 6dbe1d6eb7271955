use std::time::Duration;

use async_trait::async_trait;
use farelens_core::model::{LocationSuggestion, SearchQuery, SearchResult};
use serde_json::Value;

use crate::api::SearchBackend;
use crate::error::{ClientError, ClientResult};

/// reqwest-backed implementation of [`SearchBackend`].
pub struct HttpSearchClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpSearchClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ClientResult<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url: String = base_url.into();
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Turns a non-success response into an error, reading the body
    /// best-effort for the server's `error` field.
    async fn read_failure(response: reqwest::Response) -> ClientError {
        let status = response.status().as_u16();
        let message = response.json::<Value>().await.ok().and_then(|body| {
            body.get("error")
                .and_then(Value::as_str)
                .map(str::to_string)
        });
        ClientError::Api { status, message }
    }
}

#[async_trait]
impl SearchBackend for HttpSearchClient {
    async fn search_flights(&self, query: &SearchQuery) -> ClientResult<SearchResult> {
        let url = format!("{}/search_flights", self.base_url);
        tracing::debug!(
            "POST {} ({} -> {}, {} pax)",
            url,
            query.origin,
            query.destination,
            query.passengers
        );

        let response = self.http.post(&url).json(query).send().await?;
        if !response.status().is_success() {
            return Err(Self::read_failure(response).await);
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn autocomplete(&self, query: &str) -> ClientResult<Vec<LocationSuggestion>> {
        let url = format!("{}/autocomplete", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("query", query)])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::read_failure(response).await);
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_normalized() {
        let client = HttpSearchClient::new("http://localhost:5000/", Duration::from_secs(5))
            .expect("client should build");
        assert_eq!(client.base_url, "http://localhost:5000");
    }
}
