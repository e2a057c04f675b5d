//! Data models for contribution activity.
//!
//! - `ContributionDay`: one calendar day's count and pre-bucketed intensity
//! - `ContributionsResponse`: a year of days plus per-year totals

pub mod contributions;

pub use contributions::{ContributionDay, ContributionsResponse};
