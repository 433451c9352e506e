//! Author data models matching Semantic Scholar API schema.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Paper;
use super::de;

/// Author reference as embedded in paper author lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Author {
    /// Author ID.
    #[serde(deserialize_with = "de::or_default")]
    pub author_id: Option<String>,

    /// Author name.
    #[serde(deserialize_with = "de::author_name")]
    pub name: String,
}

impl Default for Author {
    fn default() -> Self {
        Self { author_id: None, name: de::UNKNOWN_AUTHOR.to_string() }
    }
}

impl Author {
    /// Get the author ID or empty string.
    #[must_use]
    pub fn id(&self) -> &str {
        self.author_id.as_deref().unwrap_or("")
    }
}

/// Author profile with metrics and papers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthorDetails {
    /// Unique Semantic Scholar author ID.
    #[serde(deserialize_with = "de::or_default")]
    pub author_id: Option<String>,

    /// Author name.
    #[serde(deserialize_with = "de::author_name")]
    pub name: String,

    /// Institutional affiliations.
    #[serde(deserialize_with = "de::strings")]
    pub affiliations: Vec<String>,

    /// Total number of papers by this author.
    #[serde(deserialize_with = "de::or_default")]
    pub paper_count: u64,

    /// Total citation count across all papers.
    #[serde(deserialize_with = "de::or_default")]
    pub citation_count: u64,

    /// h-index metric.
    #[serde(deserialize_with = "de::or_default")]
    pub h_index: u64,

    /// Papers by this author.
    #[serde(deserialize_with = "de::records")]
    pub papers: Vec<Paper>,
}

impl Default for AuthorDetails {
    fn default() -> Self {
        Self {
            author_id: None,
            name: de::UNKNOWN_AUTHOR.to_string(),
            affiliations: Vec::new(),
            paper_count: 0,
            citation_count: 0,
            h_index: 0,
            papers: Vec::new(),
        }
    }
}

impl AuthorDetails {
    /// Hydrate from a raw API payload. Non-object payloads yield the default profile.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        if value.is_object() { serde_json::from_value(value).unwrap_or_default() } else { Self::default() }
    }

    /// Get the primary affiliation if available.
    #[must_use]
    pub fn primary_affiliation(&self) -> Option<&str> {
        self.affiliations.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_author_details_deserialize() {
        let author = AuthorDetails::from_value(json!({
            "authorId": "123",
            "name": "Jane Smith",
            "affiliations": ["MIT", "Stanford"],
            "paperCount": 50,
            "citationCount": 1000,
            "hIndex": 15,
            "papers": [{"paperId": "p1", "title": "First", "year": 2020}]
        }));

        assert_eq!(author.name, "Jane Smith");
        assert_eq!(author.primary_affiliation(), Some("MIT"));
        assert_eq!(author.h_index, 15);
        assert_eq!(author.citation_count, 1000);
        assert_eq!(author.papers.len(), 1);
        assert_eq!(author.papers[0].citation_count, 0);
    }

    #[test]
    fn test_author_minimal() {
        let author = AuthorDetails::from_value(json!({"authorId": "456"}));
        assert_eq!(author.name, "Unknown");
        assert_eq!(author.h_index, 0);
        assert_eq!(author.paper_count, 0);
        assert!(author.papers.is_empty());
        assert_eq!(author.primary_affiliation(), None);
    }

    #[test]
    fn test_author_ref() {
        let author: Author = serde_json::from_value(json!({"authorId": "123"})).unwrap();
        assert_eq!(author.id(), "123");
        assert_eq!(author.name, "Unknown");
    }
}
