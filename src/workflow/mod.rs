//! Request workflows: validate, call the service, classify the outcome.
//!
//! A workflow is the unit bound to one user-facing operation. Each submission
//! runs the field validators first; an invalid form never reaches the
//! network. A valid form is sent through the API client, and the result
//! (success, domain rejection, or transport failure) is normalized into a
//! single presentable [`Outcome`]. Every terminal state leaves the form
//! editable and resubmittable.
//!
//! # Modules
//!
//! - [`create`] - shorten a long URL, optionally claiming a custom path
//! - [`stats`] - look up usage statistics for an existing short link

pub mod create;
pub mod stats;

pub use create::{CreateFieldErrors, CreateForm, CreateShortUrlWorkflow};
pub use stats::{FetchStatisticsWorkflow, StatsFieldErrors, StatsForm};

use crate::validation::validate_identifier;

/// Minimum accepted length for a short-link path.
pub const MIN_PATH_LENGTH: usize = 5;

/// Maximum accepted length for a short-link path.
pub const MAX_PATH_LENGTH: usize = 128;

pub const MSG_ORIGINAL_URL_REQUIRED: &str = "Original URL is required";
pub const MSG_ORIGINAL_URL_INVALID: &str = "Original URL is invalid";
pub const MSG_PATH_REQUIRED: &str = "Path is required";
pub const MSG_PATH_TOO_SHORT: &str = "Path too short";
pub const MSG_PATH_TOO_LONG: &str = "Path too long";
pub const MSG_PATH_NOT_ALPHANUMERIC: &str = "Path must be alphanumeric";
pub const MSG_CUSTOM_PATH_TAKEN: &str =
    "Custom URL has been used, please try again with another value";
pub const MSG_UNHANDLED: &str = "Unhandled exception, please try again later";

/// Workflow-level result of the latest submission attempt.
///
/// Exactly one outcome is held per workflow instance; starting a new
/// validated attempt atomically replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// No validated attempt has settled yet.
    Idle,
    /// The service accepted the request.
    Success(T),
    /// The request failed; the message is ready for display.
    Failure(String),
}

impl<T> Outcome<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Outcome::Idle)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }
}

impl<T> Default for Outcome<T> {
    fn default() -> Self {
        Outcome::Idle
    }
}

/// Applies the path rules shared by the custom-path and lookup fields,
/// returning the first failing rule's message.
pub(crate) fn validate_path(path: &str) -> Option<&'static str> {
    if path.is_empty() {
        return Some(MSG_PATH_REQUIRED);
    }
    let length = path.chars().count();
    if length < MIN_PATH_LENGTH {
        return Some(MSG_PATH_TOO_SHORT);
    }
    if length > MAX_PATH_LENGTH {
        return Some(MSG_PATH_TOO_LONG);
    }
    if !validate_identifier(path) {
        return Some(MSG_PATH_NOT_ALPHANUMERIC);
    }
    None
}
