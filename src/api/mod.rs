//! API client layer: the wire contract with the short-url service.
//!
//! # Modules
//!
//! - [`client`] - the [`client::ShortUrlApi`] seam and its reqwest implementation
//! - [`dto`] - request/response models and the response envelope

pub mod client;
pub mod dto;

pub use client::{HttpShortUrlClient, ShortUrlApi};
pub use dto::{CreateRequest, CreateResult, StatisticsResult};
