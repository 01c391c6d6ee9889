//! Client for the upstream Ergast-compatible statistics API.

use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{from_str, Value};
use thiserror::Error;
use tokio::sync::AcquireError;
use tracing::debug;

use crate::utils::fetch_limiter::FetchLimiter;

/// Query for upstream calls that forward nothing.
pub const NO_QUERY: &[(&str, &str)] = &[];

/// Errors raised while talking to the upstream API
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("Request failed with status code {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Malformed response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Response from {0} has no MRData envelope")]
    MissingEnvelope(String),

    #[error("Upstream fetch limiter closed")]
    LimiterClosed(#[from] AcquireError),
}

#[derive(Clone, Debug)]
pub struct ErgastClient {
    http: Client,
    base_url: String,
    limiter: FetchLimiter,
}

impl ErgastClient {
    pub fn new(http: Client, base_url: &str, limiter: FetchLimiter) -> Self {
        ErgastClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            limiter,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute upstream URL for a path relative to the API root.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Issues a single GET and returns the body's `MRData` envelope.
    pub async fn fetch_mrdata<Q>(&self, path: &str, query: &Q) -> Result<Value, UpstreamError>
    where
        Q: Serialize + ?Sized,
    {
        let url = self.url(path);
        let _guard = self.limiter.acquire().await?;

        debug!(%url, "Fetching upstream");
        let res = self.http.get(&url).query(query).send().await?;

        let status = res.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = res.text().await?;
        let mut res: Value = from_str(&body).map_err(|source| UpstreamError::Decode {
            url: url.clone(),
            source,
        })?;

        match res.get_mut("MRData").map(Value::take) {
            Some(mrdata) if !mrdata.is_null() => Ok(mrdata),
            _ => Err(UpstreamError::MissingEnvelope(url)),
        }
    }

    /// Fetches `path` and decodes its `MRData` envelope into `T`.
    pub async fn fetch<T>(&self, path: &str) -> Result<T, UpstreamError>
    where
        T: DeserializeOwned,
    {
        self.fetch_with_query(path, NO_QUERY).await
    }

    pub async fn fetch_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, UpstreamError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let mrdata = self.fetch_mrdata(path, query).await?;
        serde_json::from_value(mrdata).map_err(|source| UpstreamError::Decode {
            url: self.url(path),
            source,
        })
    }
}
