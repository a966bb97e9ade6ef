//! Wire models for the short-url service.
//!
//! The service wraps every response in an envelope discriminated by its
//! `code` field: `{"code":"success","data":{...}}` on success and
//! `{"code":"fail","error":{"message":"<domain code>"}}` on rejection.
//! Field names on the wire are camelCase.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Parameters for the create-short-url operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRequest {
    /// The URL to shorten. Must already be validated as an absolute
    /// HTTP(S) URL.
    pub original_url: String,

    /// Custom path, forwarded verbatim when present. The service assigns a
    /// path when this is `None`, and decides acceptance (e.g. reservation
    /// conflicts) when it is not.
    pub custom_path: Option<String>,
}

/// Body of `POST /short-urls`.
///
/// `id` is omitted entirely, not sent as null, when no custom path was
/// requested.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateShortUrlBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<&'a str>,
    pub original_url: &'a str,
}

/// Projection of a short-link record returned by the create operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateResult {
    pub original_url: String,
    pub shortened_url: String,
}

/// Projection of a short-link record returned by the statistics lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsResult {
    pub created_at: DateTime<Utc>,
    pub is_custom: bool,
    pub original_url: String,
    pub shortened_url: String,
    pub visit_count: u64,
}

/// Response envelope, discriminated by the `code` field.
///
/// Anything that fails to deserialize into this shape is not trusted at all
/// and surfaces as a non-domain failure.
#[derive(Debug, Deserialize)]
#[serde(tag = "code", rename_all = "lowercase")]
pub(crate) enum Envelope<T> {
    Success { data: T },
    Fail { error: ErrorDetail },
}

/// Error payload of a fail envelope; `message` carries the domain code.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorDetail {
    pub message: String,
}
