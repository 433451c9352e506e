//! Citation graph tools: get_related_papers, get_citations, get_references.

use serde_json::json;

use super::{McpTool, ToolContext, response_format_schema};
use crate::config::fields;
use crate::error::{ToolError, ToolResult};
use crate::formatters;
use crate::models::{CitationGraphInput, Paper, RelatedPapersInput, ResponseFormat};

fn render(papers: &[Paper], format: ResponseFormat) -> ToolResult<String> {
    match format {
        ResponseFormat::Markdown => Ok(formatters::format_papers_markdown(papers)),
        ResponseFormat::Json => Ok(formatters::to_json(&papers)?),
    }
}

fn graph_schema(description: &str) -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "paper_id": {
                "type": "string",
                "description": description
            },
            "limit": {
                "type": "integer",
                "default": 20,
                "description": "Maximum results"
            },
            "offset": {
                "type": "integer",
                "default": 0,
                "description": "Offset for paging through the list"
            },
            "response_format": response_format_schema()
        },
        "required": ["paper_id"]
    })
}

/// Recommendations seeded by one paper.
pub struct RelatedPapersTool;

#[async_trait::async_trait]
impl McpTool for RelatedPapersTool {
    fn name(&self) -> &'static str {
        "get_related_papers"
    }

    fn description(&self) -> &'static str {
        "Find papers related to a given paper using Semantic Scholar recommendations."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "paper_id": {
                    "type": "string",
                    "description": "Seed paper ID"
                },
                "limit": {
                    "type": "integer",
                    "default": 10,
                    "description": "Number of recommendations"
                },
                "response_format": response_format_schema()
            },
            "required": ["paper_id"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: RelatedPapersInput = serde_json::from_value(input)?;

        let papers = ctx
            .client
            .get_recommendations(&params.paper_id, params.limit, fields::RECOMMENDATIONS)
            .await
            .map_err(ToolError::from)?;

        render(&papers, params.response_format)
    }
}

/// Papers citing a paper.
pub struct CitationsTool;

#[async_trait::async_trait]
impl McpTool for CitationsTool {
    fn name(&self) -> &'static str {
        "get_citations"
    }

    fn description(&self) -> &'static str {
        "List papers that cite the given paper."
    }

    fn input_schema(&self) -> serde_json::Value {
        graph_schema("Paper whose citations to list")
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: CitationGraphInput = serde_json::from_value(input)?;

        let papers = ctx
            .client
            .get_citations(&params.paper_id, params.limit, params.offset, fields::GRAPH)
            .await
            .map_err(ToolError::from)?;

        render(&papers, params.response_format)
    }
}

/// Papers a paper cites.
pub struct ReferencesTool;

#[async_trait::async_trait]
impl McpTool for ReferencesTool {
    fn name(&self) -> &'static str {
        "get_references"
    }

    fn description(&self) -> &'static str {
        "List papers referenced by the given paper."
    }

    fn input_schema(&self) -> serde_json::Value {
        graph_schema("Paper whose references to list")
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: CitationGraphInput = serde_json::from_value(input)?;

        let papers = ctx
            .client
            .get_references(&params.paper_id, params.limit, params.offset, fields::GRAPH)
            .await
            .map_err(ToolError::from)?;

        render(&papers, params.response_format)
    }
}
