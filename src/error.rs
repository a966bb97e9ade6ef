//! Failure taxonomy for calls against the short-url service.
//!
//! Every failed API call ends up as an [`ApiFailure`]. The service signals
//! business-rule rejections through a structured fail envelope carrying a
//! machine-readable code (`id-reserved`, `not-found`, ...); everything else is
//! a transport-level problem: the connection failed, the request timed out, or
//! the body could not be recognized as an envelope at all.
//!
//! [`classify`] collapses that into the two cases the workflows care about.

/// A failed call against the short-url service.
#[derive(Debug, thiserror::Error)]
pub enum ApiFailure {
    /// The service answered with a well-formed fail envelope.
    ///
    /// `code` is the domain error code from the envelope, passed through
    /// verbatim. Unknown codes are preserved so callers can apply their own
    /// mapping.
    #[error("service rejected the request: {code}")]
    Rejected { code: String },

    /// No interpretable response was received: connection failure, timeout,
    /// or an error while reading the body.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A response arrived but its body did not match the expected envelope
    /// shape, whatever the HTTP status was.
    #[error("unexpected response body (HTTP {status})")]
    UnexpectedBody { status: reqwest::StatusCode },
}

/// Classification of an [`ApiFailure`] as seen by a workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind<'a> {
    /// The service explicitly rejected the request with a domain code.
    Domain(&'a str),

    /// Anything else: transport failures and unrecognizable bodies.
    NonDomain,
}

/// Classifies a failed API call.
///
/// A failure is [`FailureKind::Domain`] only when the transport succeeded and
/// the body matched the fail-envelope shape; the code is handed back as-is,
/// known or not. Every other condition is [`FailureKind::NonDomain`].
///
/// Total over all failures; never panics.
pub fn classify(failure: &ApiFailure) -> FailureKind<'_> {
    match failure {
        ApiFailure::Rejected { code } => FailureKind::Domain(code),
        ApiFailure::Transport(_) | ApiFailure::UnexpectedBody { .. } => FailureKind::NonDomain,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_rejected_passes_code_through() {
        let failure = ApiFailure::Rejected {
            code: "id-reserved".to_string(),
        };
        assert_eq!(classify(&failure), FailureKind::Domain("id-reserved"));
    }

    #[test]
    fn test_classify_unknown_code_is_still_domain() {
        let failure = ApiFailure::Rejected {
            code: "quota-exceeded".to_string(),
        };
        assert_eq!(classify(&failure), FailureKind::Domain("quota-exceeded"));
    }

    #[test]
    fn test_classify_unexpected_body_is_non_domain() {
        let failure = ApiFailure::UnexpectedBody {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert_eq!(classify(&failure), FailureKind::NonDomain);
    }

    #[tokio::test]
    async fn test_classify_transport_is_non_domain() {
        // A request against a closed port produces a genuine transport error.
        let error = reqwest::Client::new()
            .get("http://127.0.0.1:1/unreachable")
            .send()
            .await
            .unwrap_err();

        let failure = ApiFailure::from(error);
        assert_eq!(classify(&failure), FailureKind::NonDomain);
    }
}
