//! HTTP client for the short-url service.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::dto::{CreateRequest, CreateResult, CreateShortUrlBody, Envelope, StatisticsResult};
use crate::config::Config;
use crate::error::ApiFailure;

/// Client interface for the two supported service operations.
///
/// The trait is the seam between the workflows and the transport: workflows
/// are written against it, the presentation layer injects
/// [`HttpShortUrlClient`], and unit tests inject a mock.
///
/// Both operations may suspend on network I/O. Only the statistics lookup is
/// idempotent.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortUrlApi: Send + Sync {
    /// Creates a short link for `request.original_url`, claiming
    /// `request.custom_path` verbatim when present.
    async fn create_short_url(&self, request: &CreateRequest) -> Result<CreateResult, ApiFailure>;

    /// Looks up usage statistics for a previously created short link.
    async fn fetch_statistics(&self, path: &str) -> Result<StatisticsResult, ApiFailure>;
}

/// Reqwest-backed implementation of [`ShortUrlApi`].
///
/// Holds the configured service origin; request URLs are formed by appending
/// to it. No retries and no client-side timeout beyond reqwest's defaults.
pub struct HttpShortUrlClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpShortUrlClient {
    /// Creates a client against the given service origin.
    ///
    /// A trailing slash on the origin is tolerated and trimmed.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Creates a client from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_base_url.clone())
    }

    /// Decodes a response into the expected envelope.
    ///
    /// The envelope is recognized purely by its shape, not by HTTP status: a
    /// success envelope yields the data projection, a fail envelope yields
    /// [`ApiFailure::Rejected`] with the domain code, and any other body is
    /// [`ApiFailure::UnexpectedBody`].
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiFailure> {
        let status = response.status();
        let bytes = response.bytes().await?;

        match serde_json::from_slice::<Envelope<T>>(&bytes) {
            Ok(Envelope::Success { data }) => Ok(data),
            Ok(Envelope::Fail { error }) => {
                debug!(code = %error.message, %status, "service rejected the request");
                Err(ApiFailure::Rejected {
                    code: error.message,
                })
            }
            Err(decode_error) => {
                debug!(%status, %decode_error, "response body did not match the envelope");
                Err(ApiFailure::UnexpectedBody { status })
            }
        }
    }
}

#[async_trait]
impl ShortUrlApi for HttpShortUrlClient {
    async fn create_short_url(&self, request: &CreateRequest) -> Result<CreateResult, ApiFailure> {
        let body = CreateShortUrlBody {
            id: request.custom_path.as_deref(),
            original_url: &request.original_url,
        };

        let url = format!("{}/short-urls", self.base_url);
        debug!(%url, custom = body.id.is_some(), "creating short url");

        let response = self.http.post(&url).json(&body).send().await?;
        Self::decode(response).await
    }

    async fn fetch_statistics(&self, path: &str) -> Result<StatisticsResult, ApiFailure> {
        let url = format!("{}/{}/stats", self.base_url, path);
        debug!(%url, "fetching statistics");

        let response = self.http.get(&url).send().await?;
        Self::decode(response).await
    }
}
