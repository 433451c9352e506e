//! MCP server implementation.
//!
//! Provides both stdio (for desktop hosts) and HTTP transports. Both feed
//! JSON-RPC messages through the same [`McpHandler`].

pub mod handler;
pub mod stdio;
pub mod transport;

pub use handler::McpHandler;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::client::SemanticScholarClient;
use crate::pdf::PdfExtractor;
use crate::tools::{self, McpTool, ToolContext};

/// MCP server for Semantic Scholar research tools.
pub struct McpServer {
    handler: McpHandler,
}

impl McpServer {
    /// Create a new MCP server with every tool registered.
    #[must_use]
    pub fn new(client: SemanticScholarClient, pdf: PdfExtractor) -> Self {
        let ctx = ToolContext::new(Arc::new(client), pdf);
        let handler = McpHandler::new(tools::register_all_tools(), ctx);

        Self { handler }
    }

    /// Run the server in stdio mode.
    ///
    /// # Errors
    ///
    /// Returns error on I/O failure.
    pub async fn run_stdio(self) -> anyhow::Result<()> {
        tracing::info!("Starting MCP server in stdio mode");
        tracing::info!("Registered {} tools", self.handler.tools().len());

        stdio::run_stdio(&self.handler).await
    }

    /// Run the server in HTTP mode.
    ///
    /// # Errors
    ///
    /// Returns error if the port cannot be bound or the server fails.
    pub async fn run_http(self, port: u16) -> anyhow::Result<()> {
        tracing::info!("Starting MCP server in HTTP mode on port {}", port);
        tracing::info!("Registered {} tools", self.handler.tools().len());

        let router = transport::create_router(Arc::new(self.handler));
        let addr = SocketAddr::from(([0, 0, 0, 0], port));

        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("HTTP server listening on http://{}", addr);

        axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

        tracing::info!("HTTP server shut down");
        Ok(())
    }

    /// Get tool by name.
    #[must_use]
    pub fn get_tool(&self, name: &str) -> Option<&dyn McpTool> {
        self.handler.get_tool(name)
    }

    /// List all available tools.
    #[must_use]
    pub fn list_tools(&self) -> Vec<(&str, &str)> {
        self.handler.tools().iter().map(|t| (t.name(), t.description())).collect()
    }
}

impl std::fmt::Debug for McpServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("McpServer").field("tools", &self.handler.tools().len()).finish()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received shutdown signal");
}
