//! Semantic Scholar API client.
//!
//! Provides async HTTP client with:
//! - Connection pooling via reqwest
//! - Retry middleware (exponential backoff on 429, fixed delay on failures)
//! - Permissive hydration of responses into the data models

mod middleware;

pub use middleware::RetryMiddleware;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, StatusCode};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use serde_json::{Map, Value, json};

use crate::config::{Config, api, fields};
use crate::error::{ClientError, ClientResult};
use crate::models::{AuthorDetails, Paper, PaperSearchResult};

/// Semantic Scholar API client.
#[derive(Clone)]
pub struct SemanticScholarClient {
    /// HTTP client with middleware.
    client: ClientWithMiddleware,

    /// API key (optional).
    api_key: Option<String>,

    /// Graph API base URL.
    graph_api_url: String,

    /// Recommendations API base URL.
    recommendations_api_url: String,

    /// Attempts per request, reported when rate limiting never clears.
    max_attempts: u32,
}

/// Which side of a citation edge to read.
#[derive(Debug, Clone, Copy)]
enum CitationEdge {
    /// Papers citing the given paper.
    Citing,
    /// Papers cited by the given paper.
    Cited,
}

impl CitationEdge {
    const fn path(self) -> &'static str {
        match self {
            Self::Citing => "citations",
            Self::Cited => "references",
        }
    }

    const fn key(self) -> &'static str {
        match self {
            Self::Citing => "citingPaper",
            Self::Cited => "citedPaper",
        }
    }
}

impl SemanticScholarClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the API key is not a valid header value or the HTTP
    /// client cannot be built.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();

        if let Some(ref key) = config.api_key {
            let mut value = HeaderValue::from_str(key)?;
            value.set_sensitive(true);
            headers.insert("x-api-key", value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(api::MAX_IDLE_PER_HOST)
            .pool_idle_timeout(api::KEEPALIVE_EXPIRY)
            .gzip(true)
            .build()?;

        let client =
            ClientBuilder::new(client).with(RetryMiddleware::new(config.retry)).build();

        Ok(Self {
            client,
            api_key: config.api_key,
            graph_api_url: config.graph_api_url,
            recommendations_api_url: config.recommendations_api_url,
            max_attempts: config.retry.max_attempts,
        })
    }

    /// Check if an API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Search for papers.
    ///
    /// `year` is a single year or a `start-end` range and is only sent when given.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn search_papers(
        &self,
        query: &str,
        limit: u32,
        year: Option<&str>,
        fields: &[&str],
    ) -> ClientResult<PaperSearchResult> {
        let url = format!("{}/paper/search", self.graph_api_url);

        let mut params = vec![
            ("query".to_string(), query.to_string()),
            ("limit".to_string(), limit.to_string()),
            ("fields".to_string(), join_fields(fields)),
        ];

        if let Some(year) = year {
            params.push(("year".to_string(), year.to_string()));
        }

        let data = self.request(Method::GET, &url, &params, None).await?;
        Ok(PaperSearchResult::from_value(data))
    }

    /// Get a single paper by ID.
    ///
    /// The ID is passed through as-is: native IDs, `DOI:`, `ARXIV:` and the
    /// other upstream namespaces all work.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_paper_details(&self, paper_id: &str, fields: &[&str]) -> ClientResult<Paper> {
        let url = format!("{}/paper/{}", self.graph_api_url, paper_id);
        let params = vec![("fields".to_string(), join_fields(fields))];

        let data = self.request(Method::GET, &url, &params, None).await?;
        Ok(Paper::from_value(data))
    }

    /// Get papers recommended for a single seed paper.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_recommendations(
        &self,
        paper_id: &str,
        limit: u32,
        fields: &[&str],
    ) -> ClientResult<Vec<Paper>> {
        let url = format!("{}/papers", self.recommendations_api_url);
        let params = vec![("fields".to_string(), join_fields(fields))];

        let body = json!({
            "positivePaperIds": [paper_id],
            "limit": limit
        });

        let data = self.request(Method::POST, &url, &params, Some(&body)).await?;
        Ok(papers_in(data.get("recommendedPapers")))
    }

    /// Get papers citing the given paper.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_citations(
        &self,
        paper_id: &str,
        limit: u32,
        offset: u32,
        fields: &[&str],
    ) -> ClientResult<Vec<Paper>> {
        self.citation_graph(CitationEdge::Citing, paper_id, limit, offset, fields).await
    }

    /// Get papers referenced by the given paper.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_references(
        &self,
        paper_id: &str,
        limit: u32,
        offset: u32,
        fields: &[&str],
    ) -> ClientResult<Vec<Paper>> {
        self.citation_graph(CitationEdge::Cited, paper_id, limit, offset, fields).await
    }

    /// Get an author profile by ID.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_author_details(
        &self,
        author_id: &str,
        fields: &[&str],
    ) -> ClientResult<AuthorDetails> {
        let url = format!("{}/author/{}", self.graph_api_url, author_id);
        let params = vec![("fields".to_string(), join_fields(fields))];

        let data = self.request(Method::GET, &url, &params, None).await?;
        Ok(AuthorDetails::from_value(data))
    }

    /// Get multiple papers by ID (batch API).
    ///
    /// Unknown IDs come back as `null` and are dropped, as is anything else
    /// that is not a paper object.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn batch_get_papers(
        &self,
        paper_ids: &[String],
        fields: &[&str],
    ) -> ClientResult<Vec<Paper>> {
        let url = format!("{}/paper/batch", self.graph_api_url);
        let params = vec![("fields".to_string(), join_fields(fields))];

        let body = json!({
            "ids": paper_ids
        });

        let data = self.request(Method::POST, &url, &params, Some(&body)).await?;
        Ok(papers_in(Some(&data)))
    }

    /// Get the BibTeX citation for a paper, if the API has one.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_paper_bibtex(&self, paper_id: &str) -> ClientResult<Option<String>> {
        let paper = self.get_paper_details(paper_id, fields::BIBTEX).await?;
        Ok(paper.bibtex().map(str::to_owned))
    }

    /// Send a request through the retry middleware and return the JSON payload.
    ///
    /// An empty body, `null` or an empty array come back as an empty object.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::RateLimited`] if the API still answers 429 after
    /// the last attempt, [`ClientError::RequestFailed`] for any other failure
    /// that survives the retry budget, including a body that cannot be read
    /// or is not JSON.
    pub async fn request(
        &self,
        method: Method,
        url: &str,
        params: &[(String, String)],
        body: Option<&Value>,
    ) -> ClientResult<Value> {
        tracing::debug!(%method, url, "Sending Semantic Scholar request");

        let mut builder = self.client.request(method, url).query(params);

        if let Some(body) = body {
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .body(serde_json::to_string(body)?);
        }

        let response =
            builder.send().await.map_err(|e| ClientError::request_failed(e.to_string()))?;

        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ClientError::rate_limited(self.max_attempts));
        }

        if !status.is_success() {
            return Err(ClientError::request_failed(format!("{status} for url: {url}")));
        }

        let text = response.text().await.map_err(|e| ClientError::request_failed(e.to_string()))?;
        normalize_payload(&text)
    }

    async fn citation_graph(
        &self,
        edge: CitationEdge,
        paper_id: &str,
        limit: u32,
        offset: u32,
        fields: &[&str],
    ) -> ClientResult<Vec<Paper>> {
        let url = format!("{}/paper/{}/{}", self.graph_api_url, paper_id, edge.path());

        let params = vec![
            ("fields".to_string(), prefixed_fields(edge.key(), fields)),
            ("limit".to_string(), limit.to_string()),
            ("offset".to_string(), offset.to_string()),
        ];

        let data = self.request(Method::GET, &url, &params, None).await?;

        let Some(entries) = data.get("data").and_then(Value::as_array) else {
            return Ok(Vec::new());
        };

        // Entries without the wrapper key carry no paper and are skipped.
        let papers: Vec<Paper> = entries
            .iter()
            .filter_map(|entry| entry.get(edge.key()))
            .filter(|paper| paper.as_object().is_some_and(|obj| !obj.is_empty()))
            .cloned()
            .map(Paper::from_value)
            .collect();

        tracing::debug!(
            paper_id,
            edge = edge.path(),
            returned = entries.len(),
            kept = papers.len(),
            "Hydrated citation graph"
        );

        Ok(papers)
    }
}

impl std::fmt::Debug for SemanticScholarClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SemanticScholarClient").field("has_api_key", &self.has_api_key()).finish()
    }
}

/// Join a field list for the `fields` query parameter.
#[must_use]
pub fn join_fields(fields: &[&str]) -> String {
    fields.iter().map(|f| f.trim()).collect::<Vec<_>>().join(",")
}

/// Prefix every field with the wrapper key of a citation edge.
///
/// `prefixed_fields("citingPaper", &["paperId", "title"])` gives
/// `citingPaper.paperId,citingPaper.title`.
#[must_use]
pub fn prefixed_fields(prefix: &str, fields: &[&str]) -> String {
    fields.iter().map(|f| format!("{prefix}.{}", f.trim())).collect::<Vec<_>>().join(",")
}

fn normalize_payload(text: &str) -> ClientResult<Value> {
    if text.trim().is_empty() {
        return Ok(Value::Object(Map::new()));
    }

    let value: Value = serde_json::from_str(text)
        .map_err(|e| ClientError::request_failed(format!("invalid JSON in response: {e}")))?;

    Ok(match value {
        Value::Null => Value::Object(Map::new()),
        Value::Array(ref items) if items.is_empty() => Value::Object(Map::new()),
        other => other,
    })
}

/// Hydrate a JSON array of papers, dropping anything that is not an object.
fn papers_in(value: Option<&Value>) -> Vec<Paper> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items.iter().filter(|item| item.is_object()).cloned().map(Paper::from_value).collect()
        })
        .unwrap_or_default()
}
