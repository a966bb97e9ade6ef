//! Create-short-url workflow.
//!
//! Orchestrates one submission of the shorten form: run the validators, stop
//! with field errors if anything is invalid, otherwise call the service and
//! map the result into an [`Outcome`]. Requests can overlap when the user
//! resubmits while an earlier call is still in flight; an attempt token
//! guarantees that a superseded request can never overwrite the result of a
//! later one.

use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::api::client::ShortUrlApi;
use crate::api::dto::{CreateRequest, CreateResult};
use crate::error::{ApiFailure, FailureKind, classify};
use crate::validation::is_valid_absolute_url;
use crate::workflow::{
    MSG_CUSTOM_PATH_TAKEN, MSG_ORIGINAL_URL_INVALID, MSG_ORIGINAL_URL_REQUIRED, MSG_UNHANDLED,
    Outcome, validate_path,
};

/// Domain code returned when the requested custom path is already taken.
const CODE_ID_RESERVED: &str = "id-reserved";

/// Field values captured by the presentation layer for one submission.
#[derive(Debug, Clone, Default)]
pub struct CreateForm {
    /// The URL to shorten.
    pub original_url: String,

    /// Custom path, present only when the user opted in. `None` skips path
    /// validation entirely; `Some("")` is what an untouched opt-in submits
    /// and fails as "Path is required".
    pub custom_path: Option<String>,
}

/// Validation messages per form field.
///
/// Recomputed on every submission attempt, replacing the previous set
/// entirely. An empty slot means that field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateFieldErrors {
    pub original_url: Option<&'static str>,
    pub custom_url_path: Option<&'static str>,
}

impl CreateFieldErrors {
    /// True when every field passed validation.
    pub fn is_empty(&self) -> bool {
        self.original_url.is_none() && self.custom_url_path.is_none()
    }
}

#[derive(Default)]
struct State {
    attempt: u64,
    field_errors: CreateFieldErrors,
    outcome: Outcome<CreateResult>,
}

/// Workflow for creating a shortened URL.
///
/// Holds the field errors and outcome the presentation layer renders. All
/// methods take `&self`; internal state sits behind a mutex that is never
/// held across an await.
pub struct CreateShortUrlWorkflow<C: ShortUrlApi> {
    client: Arc<C>,
    state: Mutex<State>,
}

impl<C: ShortUrlApi> CreateShortUrlWorkflow<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            state: Mutex::new(State::default()),
        }
    }

    /// Submits the form once.
    ///
    /// Validation failures replace the field errors and return without a
    /// network call, leaving the previous outcome in place. A valid form
    /// discards the previous outcome, calls the service, and applies the
    /// result, unless a newer attempt was started in the meantime, in which
    /// case the stale result is dropped.
    ///
    /// Returns the workflow outcome as of this attempt settling.
    pub async fn submit(&self, form: &CreateForm) -> Outcome<CreateResult> {
        let errors = validate(form);

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

        let request = CreateRequest {
            original_url: form.original_url.clone(),
            custom_path: form.custom_path.clone(),
        };

        debug!(attempt = token, "submitting create request");
        let result = self.client.create_short_url(&request).await;

        let outcome = match result {
            Ok(data) => {
                debug!(attempt = token, shortened_url = %data.shortened_url, "short url created");
                Outcome::Success(data)
            }
            Err(failure) => Outcome::Failure(failure_message(&failure).to_string()),
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

    /// Validation messages produced by the latest submission attempt.
    pub fn field_errors(&self) -> CreateFieldErrors {
        self.state
            .lock()
            .expect("workflow state poisoned")
            .field_errors
            .clone()
    }

    /// Current workflow outcome.
    pub fn outcome(&self) -> Outcome<CreateResult> {
        self.state
            .lock()
            .expect("workflow state poisoned")
            .outcome
            .clone()
    }
}

/// Validates both fields independently; the first failing rule per field
/// wins.
fn validate(form: &CreateForm) -> CreateFieldErrors {
    let mut errors = CreateFieldErrors::default();

    if form.original_url.is_empty() {
        errors.original_url = Some(MSG_ORIGINAL_URL_REQUIRED);
    } else if !is_valid_absolute_url(&form.original_url) {
        errors.original_url = Some(MSG_ORIGINAL_URL_INVALID);
    }

    if let Some(path) = &form.custom_path {
        errors.custom_url_path = validate_path(path);
    }

    errors
}

/// Maps a failed call to the message shown to the user.
///
/// Only `id-reserved` has a dedicated message; every other domain code and
/// all non-domain failures degrade to the generic one.
fn failure_message(failure: &ApiFailure) -> &'static str {
    match classify(failure) {
        FailureKind::Domain(CODE_ID_RESERVED) => MSG_CUSTOM_PATH_TAKEN,
        FailureKind::Domain(_) | FailureKind::NonDomain => MSG_UNHANDLED,
    }
}
