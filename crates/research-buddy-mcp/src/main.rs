//! Research Buddy MCP Server - Entry Point
//!
//! Provides both stdio and HTTP transports.

use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use research_buddy_mcp::{
    SemanticScholarClient, config::Config, pdf::PdfExtractor, server::McpServer,
};

#[derive(Parser, Debug)]
#[command(name = "research-buddy-mcp")]
#[command(about = "MCP server for Semantic Scholar search and open-access PDF reading")]
#[command(version)]
struct Cli {
    /// Semantic Scholar API key (optional, enables higher rate limits)
    #[arg(long, env = "SEMANTIC_SCHOLAR_API_KEY")]
    api_key: Option<String>,

    /// Transport mode: stdio or http
    #[arg(long, default_value = "stdio")]
    transport: Transport,

    /// HTTP server port (only used with --transport http)
    #[arg(long, default_value = "8000", env = "PORT")]
    port: u16,

    /// Semantic Scholar request timeout in seconds
    #[arg(long, default_value = "30", env = "REQUEST_TIMEOUT_SECS")]
    request_timeout_secs: u64,

    /// Log filter (trace, debug, info, warn, error or an `EnvFilter` directive).
    /// The flag wins over `RUST_LOG`.
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum Transport {
    /// Standard input/output
    #[default]
    Stdio,
    /// JSON-RPC over HTTP POST
    Http,
}

/// Invalid directives fall back to `info`.
fn log_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Logs go to stderr; stdout carries the stdio protocol.
fn init_tracing(log_level: &str, json: bool) {
    let subscriber = tracing_subscriber::registry().with(log_filter(log_level));

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)).init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Loads .env before clap reads the environment.
    let mut config = Config::from_env()?;
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    if let Some(key) = cli.api_key.filter(|k| !k.trim().is_empty()) {
        config.api_key = Some(key);
    }
    let config = config.with_request_timeout(Duration::from_secs(cli.request_timeout_secs));

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        transport = ?cli.transport,
        authenticated = config.has_api_key(),
        "Starting Research Buddy MCP server"
    );

    let pdf = PdfExtractor::new(config.pdf_timeout)?;
    let client = SemanticScholarClient::new(config)?;
    let server = McpServer::new(client, pdf);

    match cli.transport {
        Transport::Stdio => server.run_stdio().await?,
        Transport::Http => server.run_http(cli.port).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_flag_sets_filter() {
        let cli = Cli::try_parse_from(["research-buddy-mcp", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.log_level, "debug");
        assert_eq!(log_filter(&cli.log_level).to_string(), "debug");
    }

    #[test]
    fn test_log_filter_accepts_directives() {
        let filter = log_filter("research_buddy_mcp=trace,warn");
        let rendered = filter.to_string();
        assert!(rendered.contains("research_buddy_mcp=trace"));
        assert!(rendered.contains("warn"));
    }

    #[test]
    fn test_invalid_log_level_falls_back_to_info() {
        assert_eq!(log_filter("research_buddy_mcp=loud").to_string(), "info");
    }
}
