//! # Short URL Client
//!
//! Client-side pipeline for the short-url service: validate user input,
//! issue the two supported operations (create a short link, fetch its usage
//! statistics), and classify every possible result into something a
//! presentation layer can render directly.
//!
//! ## Architecture
//!
//! - **Validation** ([`validation`]) - Pure input validators, run before any
//!   network call
//! - **API** ([`api`]) - The wire contract: request/response models and the
//!   reqwest client behind the [`api::ShortUrlApi`] seam
//! - **Workflows** ([`workflow`]) - The validate → call → classify
//!   orchestration for each operation, including the out-of-order result
//!   guard
//! - **Errors** ([`error`]) - The failure taxonomy and outcome classifier
//!
//! The bundled `shorturl` binary is a thin console front-end over the
//! workflows; any other presentation layer consumes the same three things a
//! workflow exposes: its field errors, its outcome, and `submit()`.
//!
//! ## Quick Start
//!
//! ```bash
//! export API_BASE_URL="https://s.example.com"
//!
//! # Shorten a URL, claiming a custom path
//! cargo run -- shorten https://example.com/some/long/path --path MyLink
//!
//! # Look up statistics
//! cargo run -- stats MyLink
//! ```
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`]. See [`config`]
//! for available options.

pub mod api;
pub mod config;
pub mod error;
pub mod validation;
pub mod workflow;

pub use config::Config;
pub use error::ApiFailure;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::api::{CreateRequest, CreateResult, HttpShortUrlClient, ShortUrlApi, StatisticsResult};
    pub use crate::config::Config;
    pub use crate::error::{ApiFailure, FailureKind, classify};
    pub use crate::workflow::{
        CreateForm, CreateShortUrlWorkflow, FetchStatisticsWorkflow, Outcome, StatsForm,
    };
}
