//! JSON output formatting.

use serde::Serialize;

/// Serialize a tool result as pretty-printed JSON with the API's camelCase keys.
///
/// # Errors
///
/// Returns error if the value cannot be serialized.
pub fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Author, Paper, PaperSearchResult};

    #[test]
    fn test_paper_json_shape() {
        let paper = Paper {
            paper_id: Some("abc123".to_string()),
            title: "Test Paper".to_string(),
            year: Some(2024),
            citation_count: 42,
            authors: vec![Author { author_id: Some("auth1".to_string()), name: "John Doe".to_string() }],
            ..Default::default()
        };

        let value: serde_json::Value = serde_json::from_str(&to_json(&paper).unwrap()).unwrap();

        assert_eq!(value["paperId"], "abc123");
        assert_eq!(value["title"], "Test Paper");
        assert_eq!(value["year"], 2024);
        assert_eq!(value["citationCount"], 42);
        assert_eq!(value["influentialCitationCount"], 0);
        assert_eq!(value["authors"][0]["name"], "John Doe");
    }

    #[test]
    fn test_empty_search_result_json() {
        let value: serde_json::Value =
            serde_json::from_str(&to_json(&PaperSearchResult::default()).unwrap()).unwrap();
        assert_eq!(value["total"], 0);
        assert_eq!(value["data"], serde_json::json!([]));
        assert!(value["next"].is_null());
    }
}
