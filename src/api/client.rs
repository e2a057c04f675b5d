//! HTTP client for the contributions API.
//!
//! `ContributionClient` wraps a single GET endpoint behind a read-through
//! cache: `load` consults the cache first and only goes to the network on a
//! miss, writing the parsed response back on success.

use reqwest::Client;
use tracing::debug;

use crate::cache::ContributionCache;
use crate::models::ContributionsResponse;

use super::FetchError;

/// Base URL for the contributions API.
const DEFAULT_BASE_URL: &str = "https://github-contributions-api.jogruber.de/v4";

/// HTTP request timeout in seconds.
/// 30s allows for slow API responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client for fetching a year of contribution data for an entity.
pub struct ContributionClient {
    client: Client,
    base_url: String,
    cache: ContributionCache,
}

impl ContributionClient {
    /// Create a client against the default API endpoint.
    pub fn new(cache: ContributionCache) -> Result<Self, FetchError> {
        Self::with_base_url(cache, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom API endpoint.
    pub fn with_base_url(
        cache: ContributionCache,
        base_url: impl Into<String>,
    ) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            cache,
        })
    }

    /// Load a year of contributions for `entity`, read-through cached.
    ///
    /// A fresh cache entry is returned without any remote call. On a miss the
    /// remote source is queried once; any non-success status or unparseable
    /// body is a `FetchError` and nothing is cached. A successful fetch is
    /// written back best-effort before returning.
    ///
    /// No retries and no coalescing: concurrent calls for the same key before
    /// the first completes will each fetch independently, which is acceptable
    /// for idempotent reads.
    pub async fn load(
        &self,
        entity: &str,
        year: i32,
    ) -> Result<ContributionsResponse, FetchError> {
        if let Some(cached) = self.cache.get(entity, year) {
            return Ok(drop_future_days(cached));
        }

        let response = self.fetch_remote(entity, year).await?;
        self.cache.set(entity, year, &response);
        Ok(drop_future_days(response))
    }

    async fn fetch_remote(
        &self,
        entity: &str,
        year: i32,
    ) -> Result<ContributionsResponse, FetchError> {
        let url = format!("{}/{}?y={}", self.base_url, entity, year);
        debug!(entity, year, "Fetching contributions from remote");

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::from_status(status, &body));
        }

        let text = response.text().await?;
        let parsed: ContributionsResponse = serde_json::from_str(&text)?;
        Ok(parsed)
    }
}

/// Drop contributions dated after today.
///
/// The remote source is not expected to return future-dated entries, but if
/// it ever does they would render as empty tail cells claiming real dates.
/// Filtering happens on the way out rather than before caching, so cached
/// entries age into visibility day by day. Unparseable dates are kept as-is.
fn drop_future_days(mut response: ContributionsResponse) -> ContributionsResponse {
    let today = chrono::Utc::now().date_naive();
    response.contributions.retain(|day| {
        chrono::NaiveDate::parse_from_str(&day.date, "%Y-%m-%d")
            .map(|date| date <= today)
            .unwrap_or(true)
    });
    response
}
