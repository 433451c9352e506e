//! Author tools: get_author_details.

use serde_json::json;

use super::{McpTool, ToolContext, response_format_schema};
use crate::config::fields;
use crate::error::{ToolError, ToolResult};
use crate::formatters;
use crate::models::{AuthorIdInput, ResponseFormat};

/// Author profile with recent papers.
pub struct AuthorDetailsTool;

#[async_trait::async_trait]
impl McpTool for AuthorDetailsTool {
    fn name(&self) -> &'static str {
        "get_author_details"
    }

    fn description(&self) -> &'static str {
        "Get an author's profile: affiliations, paper count, citation count, h-index \
         and their papers."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "author_id": {
                    "type": "string",
                    "description": "Semantic Scholar author ID (e.g., '1741101')"
                },
                "response_format": response_format_schema()
            },
            "required": ["author_id"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: AuthorIdInput = serde_json::from_value(input)?;

        let author = ctx
            .client
            .get_author_details(&params.author_id, fields::AUTHOR)
            .await
            .map_err(ToolError::from)?;

        match params.response_format {
            ResponseFormat::Markdown => Ok(formatters::format_author_markdown(&author)),
            ResponseFormat::Json => Ok(formatters::to_json(&author)?),
        }
    }
}
