//! MCP server for the record services.
//!
//! This module provides the MCP protocol server that exposes the contact,
//! task and appointment services as tools.

pub mod handlers;

pub use handlers::RecordsMcpServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the server with stdio transport until the client disconnects.
pub async fn run_server(server: RecordsMcpServer) -> Result<()> {
    let service = server.serve(stdio()).await?;

    service.waiting().await?;

    Ok(())
}
