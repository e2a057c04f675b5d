use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single day of contribution activity.
///
/// `level` is the intensity bucket (0-4) assigned by the remote source; it is
/// carried through unchanged rather than recomputed from `count`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionDay {
    /// Calendar date as `YYYY-MM-DD`. Empty for padding cells in a week grid.
    pub date: String,
    pub count: u32,
    pub level: u8,
}

impl ContributionDay {
    /// A padding cell used to fill out partial weeks in a grid.
    pub fn padding() -> Self {
        Self {
            date: String::new(),
            count: 0,
            level: 0,
        }
    }

    /// True if this cell carries no real data.
    pub fn is_padding(&self) -> bool {
        self.date.is_empty()
    }
}

/// A year of contribution data as returned by the remote API.
///
/// `contributions` is chronological with one entry per calendar day and no
/// gaps; `total` maps year strings to that year's contribution count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionsResponse {
    pub total: HashMap<String, u64>,
    pub contributions: Vec<ContributionDay>,
}

impl ContributionsResponse {
    /// Total contributions for the given year, or 0 if the year is absent.
    pub fn total_for(&self, year: i32) -> u64 {
        self.total.get(&year.to_string()).copied().unwrap_or(0)
    }
}
