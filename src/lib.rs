//! contribcache - fetch, cache, and grid a year of contribution activity.
//!
//! The crate is a three-stage pipeline for calendar-heatmap data:
//!
//! - [`cache`]: TTL-bound local cache of fetched data over a pluggable
//!   key/value backend; all faults degrade to misses.
//! - [`api`]: read-through [`api::ContributionClient`] that fetches a year of
//!   daily counts on a cache miss and writes back best-effort.
//! - [`grid`]: pure [`grid::build_week_grid`] turning the flat day sequence
//!   into Sunday-aligned 7-cell weeks, padded at both ends.
//!
//! Rendering (colors aside, see [`color`]) is left to consumers.

pub mod api;
pub mod cache;
pub mod color;
pub mod config;
pub mod grid;
pub mod models;
