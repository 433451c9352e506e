//! Fuzzing library for research-buddy-mcp.
//!
//! Fuzz targets feed arbitrary bytes through the permissive model hydration
//! and the tool input parsers, which must never panic.
//!
//! # Usage
//!
//! ```bash
//! cd crates/research-buddy-fuzz
//! cargo +nightly fuzz run fuzz_paper_parse -- -max_total_time=60
//! ```

pub use research_buddy_mcp::models;
