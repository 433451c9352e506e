#![no_main]

use libfuzzer_sys::fuzz_target;
use research_buddy_mcp::models::Paper;

fuzz_target!(|data: &[u8]| {
    // Any JSON document hydrates to some paper; only invalid JSON is rejected
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) {
        let paper = Paper::from_value(value);
        let _ = paper.author_names();
        let _ = paper.bibtex();
    }
});
