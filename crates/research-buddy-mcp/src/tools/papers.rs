//! Paper tools: search_papers, get_paper_details, get_paper_bibtex, batch_get_papers.

use serde_json::json;

use super::{McpTool, ToolContext, response_format_schema};
use crate::config::fields;
use crate::error::{ToolError, ToolResult};
use crate::formatters;
use crate::models::{BatchPapersInput, PaperIdInput, ResponseFormat, SearchPapersInput};

/// Returned by `get_paper_bibtex` when the API has no BibTeX entry.
pub const BIBTEX_UNAVAILABLE: &str = "BibTeX not available for this paper.";

/// Keyword paper search.
pub struct SearchPapersTool;

#[async_trait::async_trait]
impl McpTool for SearchPapersTool {
    fn name(&self) -> &'static str {
        "search_papers"
    }

    fn description(&self) -> &'static str {
        "Search Semantic Scholar for papers by keyword or natural language query. \
         Returns titles, authors, years, TLDR summaries and citation counts."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Search query (e.g., 'graph neural networks for chemistry')"
                },
                "limit": {
                    "type": "integer",
                    "default": 10,
                    "description": "Number of results"
                },
                "year": {
                    "type": "string",
                    "description": "Publication year (e.g., '2021') or range (e.g., '2019-2023')"
                },
                "response_format": response_format_schema()
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: SearchPapersInput = serde_json::from_value(input)?;

        let result = ctx
            .client
            .search_papers(&params.query, params.limit, params.year.as_deref(), fields::SEARCH)
            .await
            .map_err(ToolError::from)?;

        match params.response_format {
            ResponseFormat::Markdown => Ok(formatters::format_search_markdown(&result)),
            ResponseFormat::Json => Ok(formatters::to_json(&result)?),
        }
    }
}

/// Full metadata for a single paper.
pub struct PaperDetailsTool;

#[async_trait::async_trait]
impl McpTool for PaperDetailsTool {
    fn name(&self) -> &'static str {
        "get_paper_details"
    }

    fn description(&self) -> &'static str {
        "Get full details for one paper: abstract, TLDR, authors, venue, citation counts \
         and the open-access PDF link when there is one. Accepts Semantic Scholar IDs, \
         DOI:..., ARXIV:..., PMID:... and other supported identifiers."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "paper_id": {
                    "type": "string",
                    "description": "Paper ID (e.g., '649def34f8be52c8b66281af98ae884c09aef38b' or 'DOI:10.18653/v1/N18-3011')"
                },
                "response_format": response_format_schema()
            },
            "required": ["paper_id"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: PaperIdInput = serde_json::from_value(input)?;

        let paper = ctx
            .client
            .get_paper_details(&params.paper_id, fields::DETAILS)
            .await
            .map_err(ToolError::from)?;

        match params.response_format {
            ResponseFormat::Markdown => Ok(formatters::format_paper_markdown(&paper, 0)),
            ResponseFormat::Json => Ok(formatters::to_json(&paper)?),
        }
    }
}

/// BibTeX citation for a paper.
pub struct PaperBibtexTool;

#[async_trait::async_trait]
impl McpTool for PaperBibtexTool {
    fn name(&self) -> &'static str {
        "get_paper_bibtex"
    }

    fn description(&self) -> &'static str {
        "Get the BibTeX citation for a paper, ready to paste into a bibliography."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "paper_id": {
                    "type": "string",
                    "description": "Paper ID (S2, DOI:, ARXIV:, PMID:)"
                }
            },
            "required": ["paper_id"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: PaperIdInput = serde_json::from_value(input)?;

        let bibtex =
            ctx.client.get_paper_bibtex(&params.paper_id).await.map_err(ToolError::from)?;

        Ok(bibtex.unwrap_or_else(|| BIBTEX_UNAVAILABLE.to_string()))
    }
}

/// Batch paper lookup.
pub struct BatchPapersTool;

#[async_trait::async_trait]
impl McpTool for BatchPapersTool {
    fn name(&self) -> &'static str {
        "batch_get_papers"
    }

    fn description(&self) -> &'static str {
        "Get details for several papers in one request. \
         IDs the API does not recognize are left out of the result."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "paper_ids": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Paper IDs (S2, DOI:, ARXIV:, PMID:)"
                },
                "response_format": response_format_schema()
            },
            "required": ["paper_ids"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: BatchPapersInput = serde_json::from_value(input)?;

        let papers = ctx
            .client
            .batch_get_papers(&params.paper_ids, fields::SEARCH)
            .await
            .map_err(ToolError::from)?;

        tracing::debug!(requested = params.paper_ids.len(), found = papers.len(), "Batch lookup");

        match params.response_format {
            ResponseFormat::Markdown => Ok(formatters::format_papers_markdown(&papers)),
            ResponseFormat::Json => Ok(formatters::to_json(&papers)?),
        }
    }
}
