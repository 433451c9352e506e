//! Full-text tools: read_pdf_text.

use serde_json::json;

use super::{McpTool, ToolContext};
use crate::error::ToolResult;
use crate::models::ReadPdfInput;
use crate::pdf::DEFAULT_MAX_CHARS;

/// Text of an open-access PDF.
pub struct ReadPdfTextTool;

#[async_trait::async_trait]
impl McpTool for ReadPdfTextTool {
    fn name(&self) -> &'static str {
        "read_pdf_text"
    }

    fn description(&self) -> &'static str {
        "Download an open-access PDF (e.g. the openAccessPdf link from get_paper_details) \
         and return its text, truncated to max_chars characters."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "url": {
                    "type": "string",
                    "description": "Direct URL to the PDF"
                },
                "max_chars": {
                    "type": "integer",
                    "default": DEFAULT_MAX_CHARS,
                    "description": "Maximum number of characters to return"
                }
            },
            "required": ["url"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: ReadPdfInput = serde_json::from_value(input)?;
        Ok(ctx.pdf.extract_text(&params.url, params.max_chars).await)
    }
}
