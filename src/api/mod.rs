//! Remote API module for contribution data.
//!
//! Provides the `ContributionClient` for fetching a year of daily
//! contribution counts, with read-through caching and a single surfaced
//! error type, `FetchError`.

pub mod client;
pub mod error;

pub use client::ContributionClient;
pub use error::FetchError;
