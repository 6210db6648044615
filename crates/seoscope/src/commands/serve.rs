//! Serve command — run the MCP server on stdio.

use clap::Args;
use tracing::{info, instrument};

use rmcp::ServiceExt;
use rmcp::transport::stdio;

use crate::server::AnalyzerServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    // No subcommand-specific arguments; stdio is the only transport.
}

/// Start the MCP server and block until the client disconnects.
///
/// Stdout carries the protocol, so all diagnostics go through tracing.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(_args: ServeArgs, max_input_bytes: Option<usize>) -> anyhow::Result<()> {
    info!(max_input_bytes, "starting MCP server on stdio");

    let service = AnalyzerServer::new(max_input_bytes).serve(stdio()).await?;
    service.waiting().await?;

    info!("MCP server stopped");
    Ok(())
}
