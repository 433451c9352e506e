//! Property-based tests for permissive model hydration.

use proptest::prelude::*;
use serde_json::{Value, json};

use research_buddy_mcp::models::{AuthorDetails, Paper, PaperSearchResult};

/// Arbitrary JSON values, a few levels deep.
fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<f64>().prop_filter("finite", |f| f.is_finite()).prop_map(Value::from),
        ".{0,20}".prop_map(Value::from),
    ];

    leaf.prop_recursive(3, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::hash_map("[a-zA-Z]{1,16}", inner, 0..6)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

/// Objects using the real field names with arbitrary values.
fn arb_paper_payload() -> impl Strategy<Value = Value> {
    (arb_json(), arb_json(), arb_json(), arb_json(), arb_json(), arb_json()).prop_map(
        |(title, year, citations, authors, tldr, pdf)| {
            json!({
                "paperId": "p",
                "title": title,
                "year": year,
                "citationCount": citations,
                "authors": authors,
                "tldr": tldr,
                "openAccessPdf": pdf
            })
        },
    )
}

proptest! {
    /// Hydration never panics, whatever the payload.
    #[test]
    fn paper_from_any_json_never_panics(value in arb_json()) {
        let _ = Paper::from_value(value.clone());
        let _ = AuthorDetails::from_value(value.clone());
        let _ = PaperSearchResult::from_value(value);
    }

    /// Wrongly typed fields fall back to defaults instead of losing the record.
    #[test]
    fn paper_keeps_id_despite_bad_fields(payload in arb_paper_payload()) {
        let paper = Paper::from_value(payload.clone());
        prop_assert_eq!(paper.id(), "p");

        if !payload["title"].is_string() {
            prop_assert_eq!(paper.title.as_str(), "Untitled");
        }
        if !payload["authors"].is_array() {
            prop_assert!(paper.authors.is_empty());
        }
        if !payload["citationCount"].is_u64() {
            prop_assert_eq!(paper.citation_count, 0);
        }
    }

    /// Only object entries survive in author lists.
    #[test]
    fn author_list_keeps_only_objects(entries in prop::collection::vec(arb_json(), 0..10)) {
        let objects = entries.iter().filter(|e| e.is_object()).count();
        let paper = Paper::from_value(json!({"authors": entries}));
        prop_assert_eq!(paper.authors.len(), objects);
    }

    /// Counts that are non-negative integers are kept exactly.
    #[test]
    fn valid_counts_are_preserved(citations in any::<u32>(), references in any::<u32>()) {
        let paper = Paper::from_value(json!({
            "citationCount": citations,
            "referenceCount": references
        }));
        prop_assert_eq!(paper.citation_count, u64::from(citations));
        prop_assert_eq!(paper.reference_count, u64::from(references));
    }
}
