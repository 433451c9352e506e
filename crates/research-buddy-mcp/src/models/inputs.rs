//! Input models for MCP tool parameters.
//!
//! Parameter names are snake_case; camelCase spellings are accepted as aliases.

use serde::{Deserialize, Deserializer, Serialize};

use super::ResponseFormat;

/// Input for paper search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPapersInput {
    /// Keyword or natural language query.
    pub query: String,

    /// Number of results.
    #[serde(default = "default_limit")]
    pub limit: u32,

    /// Single year ("2021") or range ("2020-2024"), passed through verbatim.
    #[serde(default, deserialize_with = "year_filter")]
    pub year: Option<String>,

    /// Output format.
    #[serde(default, alias = "responseFormat")]
    pub response_format: ResponseFormat,
}

/// Input for tools taking a single paper ID.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaperIdInput {
    /// Semantic Scholar ID, DOI, arXiv ID, etc.
    #[serde(alias = "paperId")]
    pub paper_id: String,

    /// Output format.
    #[serde(default, alias = "responseFormat")]
    pub response_format: ResponseFormat,
}

/// Input for related-paper recommendations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatedPapersInput {
    /// Seed paper ID.
    #[serde(alias = "paperId")]
    pub paper_id: String,

    /// Number of recommendations.
    #[serde(default = "default_limit")]
    pub limit: u32,

    /// Output format.
    #[serde(default, alias = "responseFormat")]
    pub response_format: ResponseFormat,
}

/// Input for citation and reference listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitationGraphInput {
    /// Paper ID.
    #[serde(alias = "paperId")]
    pub paper_id: String,

    /// Maximum results.
    #[serde(default = "default_graph_limit")]
    pub limit: u32,

    /// Offset into the listing.
    #[serde(default)]
    pub offset: u32,

    /// Output format.
    #[serde(default, alias = "responseFormat")]
    pub response_format: ResponseFormat,
}

/// Input for author profile lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorIdInput {
    /// Semantic Scholar author ID.
    #[serde(alias = "authorId")]
    pub author_id: String,

    /// Output format.
    #[serde(default, alias = "responseFormat")]
    pub response_format: ResponseFormat,
}

/// Input for batch paper retrieval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchPapersInput {
    /// Paper IDs (Semantic Scholar, DOI:, ARXIV:, PMID:).
    #[serde(alias = "paperIds")]
    pub paper_ids: Vec<String>,

    /// Output format.
    #[serde(default, alias = "responseFormat")]
    pub response_format: ResponseFormat,
}

/// Input for PDF text extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadPdfInput {
    /// Direct URL to the PDF.
    pub url: String,

    /// Maximum characters to extract.
    #[serde(default = "default_max_chars", alias = "maxChars")]
    pub max_chars: usize,
}

fn default_limit() -> u32 {
    10
}

fn default_graph_limit() -> u32 {
    20
}

fn default_max_chars() -> usize {
    10_000
}

/// Hosts sometimes send the year as a number; keep it as the string the API expects.
fn year_filter<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Year {
        Text(String),
        Number(i64),
    }

    Ok(match Option::<Year>::deserialize(deserializer)? {
        Some(Year::Text(s)) if !s.trim().is_empty() => Some(s),
        Some(Year::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
