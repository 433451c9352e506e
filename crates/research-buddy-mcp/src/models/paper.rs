//! Paper data model matching Semantic Scholar API schema.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Author;
use super::de;

/// A research paper from Semantic Scholar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Paper {
    /// Semantic Scholar paper ID.
    #[serde(deserialize_with = "de::or_default")]
    pub paper_id: Option<String>,

    /// Semantic Scholar landing page.
    #[serde(deserialize_with = "de::or_default")]
    pub url: Option<String>,

    /// Paper title.
    #[serde(deserialize_with = "de::title")]
    pub title: String,

    /// Paper abstract.
    #[serde(deserialize_with = "de::or_default")]
    pub r#abstract: Option<String>,

    /// Publication venue (journal or conference).
    #[serde(deserialize_with = "de::or_default")]
    pub venue: Option<String>,

    /// Publication year.
    #[serde(deserialize_with = "de::or_default")]
    pub year: Option<i32>,

    /// Number of citations this paper has received.
    #[serde(deserialize_with = "de::or_default")]
    pub citation_count: u64,

    /// Number of references in this paper.
    #[serde(deserialize_with = "de::or_default")]
    pub reference_count: u64,

    /// Influential citation count.
    #[serde(deserialize_with = "de::or_default")]
    pub influential_citation_count: u64,

    /// List of authors.
    #[serde(deserialize_with = "de::records")]
    pub authors: Vec<Author>,

    /// AI-generated TLDR summary.
    #[serde(deserialize_with = "de::record")]
    pub tldr: Option<Tldr>,

    /// Open access PDF information.
    #[serde(deserialize_with = "de::record")]
    pub open_access_pdf: Option<OpenAccessPdf>,

    /// Formatted citations keyed by style (e.g. "bibtex").
    #[serde(deserialize_with = "de::string_map")]
    pub citation_styles: Option<BTreeMap<String, String>>,
}

impl Default for Paper {
    fn default() -> Self {
        Self {
            paper_id: None,
            url: None,
            title: de::UNTITLED.to_string(),
            r#abstract: None,
            venue: None,
            year: None,
            citation_count: 0,
            reference_count: 0,
            influential_citation_count: 0,
            authors: Vec::new(),
            tldr: None,
            open_access_pdf: None,
            citation_styles: None,
        }
    }
}

impl Paper {
    /// Hydrate from a raw API payload. Non-object payloads yield the default paper.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        if value.is_object() { serde_json::from_value(value).unwrap_or_default() } else { Self::default() }
    }

    /// Get the paper ID or empty string.
    #[must_use]
    pub fn id(&self) -> &str {
        self.paper_id.as_deref().unwrap_or("")
    }

    /// Get the open access PDF URL if available.
    #[must_use]
    pub fn pdf_url(&self) -> Option<&str> {
        self.open_access_pdf.as_ref().map(|pdf| pdf.url.as_str()).filter(|url| !url.is_empty())
    }

    /// Get the TLDR text if available.
    #[must_use]
    pub fn tldr_text(&self) -> Option<&str> {
        self.tldr.as_ref().map(|t| t.text.as_str()).filter(|text| !text.is_empty())
    }

    /// Get the BibTeX citation if the API returned one.
    #[must_use]
    pub fn bibtex(&self) -> Option<&str> {
        self.citation_styles.as_ref()?.get("bibtex").map(String::as_str)
    }

    /// Get author names as a comma-separated string.
    #[must_use]
    pub fn author_names(&self) -> String {
        self.authors.iter().map(|a| a.name.as_str()).collect::<Vec<_>>().join(", ")
    }
}

/// AI-generated TLDR summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tldr {
    /// Model used to generate the summary.
    #[serde(deserialize_with = "de::or_default")]
    pub model: Option<String>,

    /// Summary text.
    #[serde(deserialize_with = "de::or_default")]
    pub text: String,
}

/// Open access PDF information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenAccessPdf {
    /// Direct URL to the PDF.
    #[serde(deserialize_with = "de::or_default")]
    pub url: String,

    /// Status of open access (e.g. "GOLD", "GREEN").
    #[serde(deserialize_with = "de::or_default")]
    pub status: Option<String>,
}

/// Search result page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaperSearchResult {
    /// Total number of matching papers.
    #[serde(deserialize_with = "de::or_default")]
    pub total: u64,

    /// Current offset in the result set.
    #[serde(deserialize_with = "de::or_default")]
    pub offset: u64,

    /// Offset of the next page, if more results are available.
    #[serde(deserialize_with = "de::or_default")]
    pub next: Option<u64>,

    /// List of papers in this page.
    #[serde(deserialize_with = "de::records")]
    pub data: Vec<Paper>,
}

impl PaperSearchResult {
    /// Hydrate from a raw API payload. Non-object payloads yield an empty result.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        if value.is_object() { serde_json::from_value(value).unwrap_or_default() } else { Self::default() }
    }

    /// Check if there are more results available.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.next.is_some()
    }
}
