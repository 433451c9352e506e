#![no_main]

use libfuzzer_sys::fuzz_target;
use research_buddy_mcp::models::{
    AuthorDetails, CitationGraphInput, PaperSearchResult, ReadPdfInput, SearchPapersInput,
};

fuzz_target!(|data: &[u8]| {
    if let Ok(json) = serde_json::from_slice::<serde_json::Value>(data) {
        let _ = AuthorDetails::from_value(json.clone());
        let _ = PaperSearchResult::from_value(json.clone());
        let _ = serde_json::from_value::<SearchPapersInput>(json.clone());
        let _ = serde_json::from_value::<CitationGraphInput>(json.clone());
        let _ = serde_json::from_value::<ReadPdfInput>(json);
    }
});
