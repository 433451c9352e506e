//! Configuration for the Research Buddy MCP server.

use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Graph API endpoint.
    pub const GRAPH_API: &str = "https://api.semanticscholar.org/graph/v1";

    /// Recommendations API endpoint.
    pub const RECOMMENDATIONS_API: &str = "https://api.semanticscholar.org/recommendations/v1";

    /// Request timeout for Semantic Scholar calls.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Timeout for downloading open-access PDFs.
    pub const PDF_TIMEOUT: Duration = Duration::from_secs(15);

    /// Total attempts per request, including the first one.
    pub const MAX_ATTEMPTS: u32 = 3;

    /// Base delay for 429 backoff, doubled on every attempt (1s, 2s, 4s).
    pub const RATE_LIMIT_BASE_DELAY: Duration = Duration::from_secs(1);

    /// Delay before retrying a network failure or failing status.
    pub const ERROR_RETRY_DELAY: Duration = Duration::from_secs(1);

    /// Maximum idle connections kept per host.
    pub const MAX_IDLE_PER_HOST: usize = 10;

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);
}

/// Paper and author field sets for API requests.
pub mod fields {
    /// Fields for search and batch lookups.
    pub const SEARCH: &[&str] = &["paperId", "title", "year", "authors", "tldr", "citationCount"];

    /// Fields for a full paper lookup.
    pub const DETAILS: &[&str] = &[
        "paperId",
        "title",
        "abstract",
        "tldr",
        "authors",
        "year",
        "venue",
        "citationCount",
        "referenceCount",
        "openAccessPdf",
        "url",
        "influentialCitationCount",
        "citationStyles",
    ];

    /// Fields for recommended papers.
    pub const RECOMMENDATIONS: &[&str] = &["paperId", "title", "year", "authors", "citationCount"];

    /// Fields for citing/cited papers. Prefixed per item by the client.
    pub const GRAPH: &[&str] = &["paperId", "title", "year", "authors"];

    /// Fields for an author profile with a short paper list.
    pub const AUTHOR: &[&str] = &[
        "name",
        "affiliations",
        "paperCount",
        "citationCount",
        "hIndex",
        "papers.title",
        "papers.year",
        "papers.paperId",
    ];

    /// Fields needed to read the BibTeX citation style.
    pub const BIBTEX: &[&str] = &["citationStyles", "title"];
}

/// Retry policy for Semantic Scholar requests.
///
/// Rate-limited responses (429) back off exponentially from
/// `rate_limit_base_delay`; network failures and other failing statuses wait
/// `error_delay`. Every attempt counts toward `max_attempts`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one.
    pub max_attempts: u32,

    /// Delay after the first 429, doubled on each further attempt.
    pub rate_limit_base_delay: Duration,

    /// Delay after a network failure or failing status.
    pub error_delay: Duration,
}

impl RetryPolicy {
    /// A policy that retries without sleeping (for tests).
    #[must_use]
    pub const fn immediate(max_attempts: u32) -> Self {
        Self { max_attempts, rate_limit_base_delay: Duration::ZERO, error_delay: Duration::ZERO }
    }

    /// Backoff after a 429 on the given zero-based attempt: `base * 2^attempt`.
    #[must_use]
    pub fn rate_limit_delay(&self, attempt: u32) -> Duration {
        self.rate_limit_base_delay.saturating_mul(2u32.saturating_pow(attempt))
    }

    /// Whether another attempt is allowed after the given zero-based attempt.
    #[must_use]
    pub const fn has_attempts_after(&self, attempt: u32) -> bool {
        attempt + 1 < self.max_attempts
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: api::MAX_ATTEMPTS,
            rate_limit_base_delay: api::RATE_LIMIT_BASE_DELAY,
            error_delay: api::ERROR_RETRY_DELAY,
        }
    }
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Semantic Scholar API key (optional).
    pub api_key: Option<String>,

    /// Base URL for Graph API (for testing with mock servers).
    pub graph_api_url: String,

    /// Base URL for Recommendations API (for testing with mock servers).
    pub recommendations_api_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Timeout for PDF downloads.
    pub pdf_timeout: Duration,

    /// Retry policy for API requests.
    pub retry: RetryPolicy,
}

impl Config {
    /// Create a new configuration with an optional API key.
    ///
    /// Without a key requests are sent unauthenticated, which the upstream
    /// API allows with lower rate limits.
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            graph_api_url: api::GRAPH_API.to_string(),
            recommendations_api_url: api::RECOMMENDATIONS_API.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            pdf_timeout: api::PDF_TIMEOUT,
            retry: RetryPolicy::default(),
        }
    }

    /// Create a test configuration with custom URLs for mock servers.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_key: None,
            graph_api_url: format!("{}/graph/v1", base_url),
            recommendations_api_url: format!("{}/recommendations/v1", base_url),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            pdf_timeout: Duration::from_secs(5),
            retry: RetryPolicy::immediate(api::MAX_ATTEMPTS), // No sleeping in tests
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Loads a `.env` file first when one is present.
    ///
    /// # Errors
    ///
    /// Returns error if environment variables are invalid.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        let api_key = std::env::var("SEMANTIC_SCHOLAR_API_KEY").ok();
        Ok(Self::new(api_key))
    }

    /// Set the API request timeout.
    #[must_use]
    pub const fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Check if an API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.api_key.is_none());
        assert!(!config.has_api_key());
        assert_eq!(config.pdf_timeout, Duration::from_secs(15));
    }

    #[test]
    fn test_config_with_api_key() {
        let config = Config::new(Some("test-key".to_string()));
        assert!(config.has_api_key());
        assert_eq!(config.api_key, Some("test-key".to_string()));
    }

    #[test]
    fn test_blank_api_key_is_ignored() {
        let config = Config::new(Some("   ".to_string()));
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_rate_limit_backoff_doubles() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.rate_limit_delay(0), Duration::from_secs(1));
        assert_eq!(policy.rate_limit_delay(1), Duration::from_secs(2));
        assert_eq!(policy.rate_limit_delay(2), Duration::from_secs(4));
    }

    #[test]
    fn test_attempt_budget() {
        let policy = RetryPolicy::default();
        assert!(policy.has_attempts_after(0));
        assert!(policy.has_attempts_after(1));
        assert!(!policy.has_attempts_after(2));
    }

    #[test]
    fn test_testing_config_does_not_sleep() {
        let config = Config::for_testing("http://localhost:1234");
        assert_eq!(config.retry.rate_limit_delay(2), Duration::ZERO);
        assert_eq!(config.graph_api_url, "http://localhost:1234/graph/v1");
    }

    #[test]
    fn test_fields() {
        assert!(fields::SEARCH.contains(&"tldr"));
        assert!(fields::DETAILS.contains(&"citationStyles"));
        assert!(fields::AUTHOR.contains(&"papers.paperId"));
    }
}
