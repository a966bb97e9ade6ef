//! Pure input validators, run before any network call.
//!
//! - [`identifier`] - charset check for custom short-link paths
//! - [`url`] - absolute HTTP(S) URL check for originals

pub mod identifier;
pub mod url;

pub use identifier::validate_identifier;
pub use url::is_valid_absolute_url;
