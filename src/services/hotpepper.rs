use crate::config::ApiSettings;
use crate::models::{ApiResponse, ApiResults};
use reqwest::Client;
use thiserror::Error;

/// Errors that can occur when talking to the HotPepper web service
#[derive(Debug, Error)]
pub enum HotPepperError {
    #[error(
        "HOTPEPPER_API_KEY is not set. Register with the Recruit web service to obtain an API key and export it before starting the server."
    )]
    MissingApiKey,

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API request failed: {status} {reason}")]
    Api { status: u16, reason: String },

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Query parameters for one upstream request
///
/// Absent and empty-string values are omitted rather than sent; boolean
/// filters are encoded as `1` and omitted unless set.
#[derive(Debug, Clone, Default)]
pub struct QueryParams(Vec<(&'static str, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: &'static str, value: impl ToString) {
        self.0.push((name, value.to_string()));
    }

    pub fn push_opt<T: ToString>(&mut self, name: &'static str, value: Option<T>) {
        if let Some(value) = value {
            let value = value.to_string();
            if !value.is_empty() {
                self.0.push((name, value));
            }
        }
    }

    pub fn push_flag(&mut self, name: &'static str, value: Option<bool>) {
        if value == Some(true) {
            self.0.push((name, "1".to_string()));
        }
    }

    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.0
    }
}

/// HotPepper gourmet API client
///
/// Issues GET requests against the web service and decodes the JSON
/// `results` envelope. The credential is checked before every call so a
/// missing key surfaces as a tool error instead of failing startup.
pub struct HotPepperClient {
    base_url: String,
    api_key: Option<String>,
    client: Client,
}

impl HotPepperClient {
    pub fn new(base_url: String, api_key: Option<String>) -> Self {
        // No request timeout: a hung upstream call hangs the invocation
        let client = Client::builder()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            client,
        }
    }

    pub fn from_settings(settings: &ApiSettings) -> Self {
        Self::new(settings.base_url.clone(), settings.key.clone())
    }

    /// Search for shops through the `gourmet` endpoint
    pub async fn gourmet(&self, params: QueryParams) -> Result<ApiResults, HotPepperError> {
        self.fetch("gourmet", params).await
    }

    /// Fetch one of the master-data lists (`genre`, `budget`, `large_area`, `special`)
    pub async fn master(&self, endpoint: &str) -> Result<ApiResults, HotPepperError> {
        self.fetch(endpoint, QueryParams::new()).await
    }

    async fn fetch(
        &self,
        endpoint: &str,
        params: QueryParams,
    ) -> Result<ApiResults, HotPepperError> {
        // Checked before any network I/O
        let key = self
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(HotPepperError::MissingApiKey)?;

        let url = format!("{}/{}/v1/", self.base_url.trim_end_matches('/'), endpoint);

        let mut query: Vec<(&str, &str)> = vec![("key", key), ("format", "json")];
        for (name, value) in params.pairs() {
            query.push((name, value));
        }

        tracing::debug!("GET {} with {} filter params", url, params.pairs().len());

        let response = self.client.get(&url).query(&query).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Upstream returned {} for {}", status, url);
            return Err(HotPepperError::Api {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        let envelope: ApiResponse = response
            .json()
            .await
            .map_err(|e| HotPepperError::InvalidResponse(e.to_string()))?;

        Ok(envelope.results)
    }
}
