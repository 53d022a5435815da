//! ODPT HTTP client.
//!
//! Async methods for the data-search and data-dump endpoints. Every request
//! carries the access key as the `acl:consumerKey` query parameter; there is
//! no other authentication. Calls are one-shot: no retry, no caching.

use std::collections::HashMap;

use tracing::debug;

use super::error::OdptError;
use super::index::index_by_id;
use super::types::Resource;

/// Default base URL for the ODPT API.
const DEFAULT_BASE_URL: &str = "https://api-tokyochallenge.odpt.org/api/v4";

/// Environment variable holding the access key.
const API_KEY_VAR: &str = "ODPT_KEY";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the ODPT client.
#[derive(Debug, Clone)]
pub struct OdptConfig {
    /// Access key passed as `acl:consumerKey`
    pub api_key: String,
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl OdptConfig {
    /// Create a new config with the given access key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Read the access key from the `ODPT_KEY` environment variable.
    ///
    /// A missing or empty value is a construction-time error; nothing else
    /// in the process reads the environment.
    pub fn from_env() -> Result<Self, OdptError> {
        match std::env::var(API_KEY_VAR) {
            Ok(key) if !key.is_empty() => Ok(Self::new(key)),
            _ => Err(OdptError::MissingApiKey(API_KEY_VAR)),
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// ODPT API client.
///
/// One generic fetch serves every record type; the result is always a map
/// keyed by the records' `owl:sameAs` identifier.
#[derive(Debug, Clone)]
pub struct OdptClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OdptClient {
    /// Create a new ODPT client with the given configuration.
    pub fn new(config: OdptConfig) -> Result<Self, OdptError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
        })
    }

    /// Fetch every record of type `R` via the data-search endpoint.
    pub async fn fetch<R: Resource>(&self) -> Result<HashMap<R::Id, R>, OdptError> {
        self.fetch_where::<R>(&[]).await
    }

    /// Fetch the records of type `R` matching the given query filters.
    ///
    /// Filters are passed through to the API verbatim, e.g.
    /// `("odpt:railway", "odpt.Railway:JR-East.Tokaido")`. Identifiers are
    /// expected to be unique within a response; when they are not, the last
    /// record wins.
    pub async fn fetch_where<R: Resource>(
        &self,
        filters: &[(&str, &str)],
    ) -> Result<HashMap<R::Id, R>, OdptError> {
        let url = format!("{}/{}", self.base_url, R::TYPE);
        self.get_indexed(&url, filters).await
    }

    /// Fetch every record of type `R` via the data-dump endpoint.
    ///
    /// The dump endpoint serves the full dataset for a type and takes no
    /// filters.
    pub async fn fetch_dump<R: Resource>(&self) -> Result<HashMap<R::Id, R>, OdptError> {
        let url = format!("{}/{}.json", self.base_url, R::TYPE);
        self.get_indexed(&url, &[]).await
    }

    async fn get_indexed<R: Resource>(
        &self,
        url: &str,
        filters: &[(&str, &str)],
    ) -> Result<HashMap<R::Id, R>, OdptError> {
        let mut query: Vec<(&str, &str)> = Vec::with_capacity(filters.len() + 1);
        query.push(("acl:consumerKey", self.api_key.as_str()));
        query.extend_from_slice(filters);

        debug!(url, record_type = R::TYPE, "fetching ODPT records");

        let response = self.http.get(url).query(&query).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(OdptError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OdptError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let records: Vec<R> = serde_json::from_str(&body).map_err(|e| OdptError::Json {
            message: e.to_string(),
        })?;

        debug!(count = records.len(), record_type = R::TYPE, "fetched");

        Ok(index_by_id(records))
    }
}
