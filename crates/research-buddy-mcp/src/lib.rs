//! Research Buddy MCP Server
//!
//! A Model Context Protocol (MCP) server that lets LLM agents search the
//! Semantic Scholar Graph API and read open-access papers.
//!
//! # Features
//!
//! - **9 MCP Tools**: search, paper details, recommendations, citations,
//!   references, author profiles, BibTeX, batch lookup, PDF text
//! - **Async-first**: Built on Tokio and reqwest
//! - **Retrying**: Exponential backoff on 429, fixed delay on other failures
//! - **Forgiving**: Malformed API records degrade to defaults instead of failing
//!
//! # Example
//!
//! ```no_run
//! use research_buddy_mcp::{client::SemanticScholarClient, config::{Config, fields}};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = SemanticScholarClient::new(config)?;
//!
//!     let page = client.search_papers("protein folding", 5, Some("2020-2024"), fields::SEARCH).await?;
//!     for paper in page.data {
//!         println!("{} ({:?})", paper.title, paper.year);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod formatters;
pub mod models;
pub mod pdf;
pub mod server;
pub mod tools;

pub use client::SemanticScholarClient;
pub use config::Config;
pub use error::{ClientError, ToolError};
