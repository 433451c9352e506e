//! Data models for Semantic Scholar API entities and tool inputs.
//!
//! Hydration is permissive: records are built from partial payloads, with
//! placeholder names ("Unknown", "Untitled") and zero counts filling the gaps.

pub mod de;

mod author;
mod enums;
mod inputs;
mod paper;

pub use author::{Author, AuthorDetails};
pub use enums::ResponseFormat;
pub use inputs::*;
pub use paper::{OpenAccessPdf, Paper, PaperSearchResult, Tldr};
