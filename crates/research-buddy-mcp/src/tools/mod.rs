//! MCP tool implementations.
//!
//! Each tool:
//! 1. Parses its input parameters
//! 2. Calls the Semantic Scholar client or the PDF extractor
//! 3. Formats results as JSON or Markdown

mod authors;
mod graph;
mod papers;
mod pdf;

pub use authors::*;
pub use graph::*;
pub use papers::*;
pub use pdf::*;

use std::sync::Arc;

use serde_json::json;

use crate::client::SemanticScholarClient;
use crate::error::ToolResult;
use crate::pdf::PdfExtractor;

/// Tool execution context.
pub struct ToolContext {
    /// API client.
    pub client: Arc<SemanticScholarClient>,

    /// Open-access PDF reader.
    pub pdf: PdfExtractor,
}

impl ToolContext {
    /// Create a new tool context.
    #[must_use]
    pub fn new(client: Arc<SemanticScholarClient>, pdf: PdfExtractor) -> Self {
        Self { client, pdf }
    }
}

/// Trait for MCP tools.
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    /// Tool name (e.g., "search_papers").
    fn name(&self) -> &'static str;

    /// Tool description for LLM.
    fn description(&self) -> &'static str;

    /// JSON Schema for input parameters.
    fn input_schema(&self) -> serde_json::Value;

    /// Execute the tool with given input.
    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String>;
}

/// Register all tools.
#[must_use]
pub fn register_all_tools() -> Vec<Box<dyn McpTool>> {
    vec![
        // Papers (4)
        Box::new(papers::SearchPapersTool),
        Box::new(papers::PaperDetailsTool),
        Box::new(papers::PaperBibtexTool),
        Box::new(papers::BatchPapersTool),

        // Citation graph (3)
        Box::new(graph::RelatedPapersTool),
        Box::new(graph::CitationsTool),
        Box::new(graph::ReferencesTool),

        // Authors (1)
        Box::new(authors::AuthorDetailsTool),

        // Full text (1)
        Box::new(pdf::ReadPdfTextTool),
    ]
}

/// Schema fragment shared by every tool with a selectable output format.
fn response_format_schema() -> serde_json::Value {
    json!({
        "type": "string",
        "enum": ["json", "markdown"],
        "default": "json"
    })
}
