//! Fetch-statistics workflow.
//!
//! Mirrors the create workflow for the single lookup field: the submitted
//! path runs through the shared path rules, then the statistics call, then
//! outcome classification. The same attempt token discards results of
//! superseded submissions.

use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::api::client::ShortUrlApi;
use crate::api::dto::StatisticsResult;
use crate::error::{ApiFailure, FailureKind, classify};
use crate::workflow::{MSG_UNHANDLED, Outcome, validate_path};

/// Domain code returned when no short link exists for the path.
const CODE_NOT_FOUND: &str = "not-found";

/// Field values captured by the presentation layer for one lookup.
#[derive(Debug, Clone, Default)]
pub struct StatsForm {
    /// Path of the short link to look up.
    pub short_url: String,
}

/// Validation message for the lookup field, replaced on every attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsFieldErrors {
    pub short_url: Option<&'static str>,
}

impl StatsFieldErrors {
    pub fn is_empty(&self) -> bool {
        self.short_url.is_none()
    }
}

#[derive(Default)]
struct State {
    attempt: u64,
    field_errors: StatsFieldErrors,
    outcome: Outcome<StatisticsResult>,
}

/// Workflow for looking up short-link statistics.
pub struct FetchStatisticsWorkflow<C: ShortUrlApi> {
    client: Arc<C>,
    state: Mutex<State>,
}

impl<C: ShortUrlApi> FetchStatisticsWorkflow<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            state: Mutex::new(State::default()),
        }
    }

    /// Submits the lookup once. Same contract as the create workflow's
    /// `submit`: invalid input stops before the network and keeps the prior
    /// outcome, a validated attempt discards it, and stale results are
    /// dropped.
    pub async fn submit(&self, form: &StatsForm) -> Outcome<StatisticsResult> {
        let errors = StatsFieldErrors {
            short_url: validate_path(&form.short_url),
        };

        let token = {
            let mut state = self.state.lock().expect("workflow state poisoned");
            let valid = errors.is_empty();
            state.field_errors = errors;
            if !valid {
                return state.outcome.clone();
            }
            state.outcome = Outcome::Idle;
            state.attempt += 1;
            state.attempt
        };

        debug!(attempt = token, path = %form.short_url, "fetching statistics");
        let result = self.client.fetch_statistics(&form.short_url).await;

        let outcome = match result {
            Ok(data) => {
                debug!(attempt = token, visit_count = data.visit_count, "statistics received");
                Outcome::Success(data)
            }
            Err(failure) => Outcome::Failure(failure_message(&failure, &form.short_url)),
        };

        let mut state = self.state.lock().expect("workflow state poisoned");
        if token == state.attempt {
            state.outcome = outcome;
        } else {
            debug!(
                attempt = token,
                current = state.attempt,
                "discarding result of superseded attempt"
            );
        }
        state.outcome.clone()
    }

    /// Validation message produced by the latest submission attempt.
    pub fn field_errors(&self) -> StatsFieldErrors {
        self.state
            .lock()
            .expect("workflow state poisoned")
            .field_errors
            .clone()
    }

    /// Current workflow outcome.
    pub fn outcome(&self) -> Outcome<StatisticsResult> {
        self.state
            .lock()
            .expect("workflow state poisoned")
            .outcome
            .clone()
    }
}

/// Maps a failed lookup to the message shown to the user.
///
/// `not-found` interpolates the submitted path verbatim; every other domain
/// code and all non-domain failures degrade to the generic message.
fn failure_message(failure: &ApiFailure, submitted: &str) -> String {
    match classify(failure) {
        FailureKind::Domain(CODE_NOT_FOUND) => {
            format!("Short URL with path '{submitted}' not found")
        }
        FailureKind::Domain(_) | FailureKind::NonDomain => MSG_UNHANDLED.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::MockShortUrlApi;
    use crate::workflow::{
        MSG_PATH_NOT_ALPHANUMERIC, MSG_PATH_REQUIRED, MSG_PATH_TOO_LONG, MSG_PATH_TOO_SHORT,
    };
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use tokio::sync::oneshot;

    fn statistics(shortened: &str, visits: u64) -> StatisticsResult {
        StatisticsResult {
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            is_custom: false,
            original_url: "https://example.com".to_string(),
            shortened_url: shortened.to_string(),
            visit_count: visits,
        }
    }

    #[tokio::test]
    async fn test_path_rules_block_submission() {
        // No expectations: any call to the service would panic.
        let workflow = FetchStatisticsWorkflow::new(Arc::new(MockShortUrlApi::new()));
        let overlong = "a".repeat(129);
        let cases = [
            ("", MSG_PATH_REQUIRED),
            ("ab", MSG_PATH_TOO_SHORT),
            (overlong.as_str(), MSG_PATH_TOO_LONG),
            ("abcd!", MSG_PATH_NOT_ALPHANUMERIC),
        ];

        for (path, expected) in cases {
            let form = StatsForm {
                short_url: path.to_string(),
            };
            let outcome = workflow.submit(&form).await;

            assert_eq!(outcome, Outcome::Idle);
            assert_eq!(workflow.field_errors().short_url, Some(expected), "path {path:?}");
        }
    }

    #[tokio::test]
    async fn test_valid_lookup_reports_success() {
        let mut api = MockShortUrlApi::new();
        let stats = statistics("https://s.test.com/abcde", 42);
        let returned = stats.clone();
        api.expect_fetch_statistics()
            .withf(|path| path == "abcde")
            .times(1)
            .returning(move |_| Ok(returned.clone()));

        let workflow = FetchStatisticsWorkflow::new(Arc::new(api));
        let form = StatsForm {
            short_url: "abcde".to_string(),
        };
        let outcome = workflow.submit(&form).await;

        assert_eq!(outcome, Outcome::Success(stats));
        assert!(workflow.field_errors().is_empty());
    }

    #[tokio::test]
    async fn test_not_found_interpolates_submitted_path() {
        let mut api = MockShortUrlApi::new();
        api.expect_fetch_statistics().times(1).returning(|_| {
            Err(ApiFailure::Rejected {
                code: "not-found".to_string(),
            })
        });

        let workflow = FetchStatisticsWorkflow::new(Arc::new(api));
        let form = StatsForm {
            short_url: "abcde".to_string(),
        };
        let outcome = workflow.submit(&form).await;

        assert_eq!(
            outcome,
            Outcome::Failure("Short URL with path 'abcde' not found".to_string())
        );
    }

    #[tokio::test]
    async fn test_not_found_keeps_input_exactly_as_submitted() {
        let mut api = MockShortUrlApi::new();
        api.expect_fetch_statistics().times(1).returning(|_| {
            Err(ApiFailure::Rejected {
                code: "not-found".to_string(),
            })
        });

        let workflow = FetchStatisticsWorkflow::new(Arc::new(api));
        let form = StatsForm {
            short_url: "AbCdE0".to_string(),
        };
        let outcome = workflow.submit(&form).await;

        assert_eq!(
            outcome,
            Outcome::Failure("Short URL with path 'AbCdE0' not found".to_string())
        );
    }

    #[tokio::test]
    async fn test_unknown_domain_code_maps_to_generic_message() {
        let mut api = MockShortUrlApi::new();
        api.expect_fetch_statistics().times(1).returning(|_| {
            Err(ApiFailure::Rejected {
                code: "gone".to_string(),
            })
        });

        let workflow = FetchStatisticsWorkflow::new(Arc::new(api));
        let form = StatsForm {
            short_url: "abcde".to_string(),
        };

        assert_eq!(
            workflow.submit(&form).await,
            Outcome::Failure(MSG_UNHANDLED.to_string())
        );
    }

    #[tokio::test]
    async fn test_non_domain_failure_maps_to_generic_message() {
        let mut api = MockShortUrlApi::new();
        api.expect_fetch_statistics().times(1).returning(|_| {
            Err(ApiFailure::UnexpectedBody {
                status: reqwest::StatusCode::BAD_GATEWAY,
            })
        });

        let workflow = FetchStatisticsWorkflow::new(Arc::new(api));
        let form = StatsForm {
            short_url: "abcde".to_string(),
        };

        assert_eq!(
            workflow.submit(&form).await,
            Outcome::Failure(MSG_UNHANDLED.to_string())
        );
    }

    /// Fake client whose lookup for `slowpath` parks until released.
    struct GatedClient {
        entered: Mutex<Option<oneshot::Sender<()>>>,
        release: Mutex<Option<oneshot::Receiver<()>>>,
        slow: StatisticsResult,
        fast: StatisticsResult,
    }

    #[async_trait]
    impl ShortUrlApi for GatedClient {
        async fn create_short_url(
            &self,
            _request: &crate::api::dto::CreateRequest,
        ) -> Result<crate::api::dto::CreateResult, ApiFailure> {
            unimplemented!("not used by this fake")
        }

        async fn fetch_statistics(&self, path: &str) -> Result<StatisticsResult, ApiFailure> {
            if path == "slowpath" {
                let entered = self.entered.lock().unwrap().take().unwrap();
                entered.send(()).unwrap();
                let release = self.release.lock().unwrap().take().unwrap();
                release.await.unwrap();
                Ok(self.slow.clone())
            } else {
                Ok(self.fast.clone())
            }
        }
    }

    #[tokio::test]
    async fn test_stale_result_does_not_overwrite_newer_attempt() {
        let (entered_tx, entered_rx) = oneshot::channel();
        let (release_tx, release_rx) = oneshot::channel();

        let slow = statistics("https://s.test.com/slowpath", 1);
        let fast = statistics("https://s.test.com/fastpath", 2);
        let client = Arc::new(GatedClient {
            entered: Mutex::new(Some(entered_tx)),
            release: Mutex::new(Some(release_rx)),
            slow,
            fast: fast.clone(),
        });

        let workflow = Arc::new(FetchStatisticsWorkflow::new(client));

        let first = {
            let workflow = workflow.clone();
            tokio::spawn(async move {
                let form = StatsForm {
                    short_url: "slowpath".to_string(),
                };
                workflow.submit(&form).await
            })
        };
        entered_rx.await.unwrap();

        let second = workflow
            .submit(&StatsForm {
                short_url: "fastpath".to_string(),
            })
            .await;
        assert_eq!(second, Outcome::Success(fast.clone()));

        release_tx.send(()).unwrap();
        let first = first.await.unwrap();

        assert_eq!(first, Outcome::Success(fast.clone()));
        assert_eq!(workflow.outcome(), Outcome::Success(fast));
    }
}
