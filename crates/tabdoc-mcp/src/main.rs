//! tabdoc MCP server binary.
//!
//! Exposes Google Docs editing (with multi-tab support) to MCP clients over
//! stdio.
//!
//! Usage:
//!   SERVICE_ACCOUNT_PATH=/path/to/key.json SUBJECT_EMAIL=user@example.com \
//!     cargo run -p tabdoc-mcp
//!
//!   # or with explicit flags
//!   cargo run -p tabdoc-mcp -- --service-account /path/to/key.json \
//!     --subject user@example.com
//!
//! Test with MCP inspector:
//!   npx @modelcontextprotocol/inspector cargo run -p tabdoc-mcp

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use rmcp::{ServiceExt, transport::stdio};
use tracing_subscriber::{EnvFilter, fmt};

use tabdoc_client::{Config, connect};
use tabdoc_mcp::TabdocMcp;

/// MCP server exposing Google Docs editing with multi-tab support.
#[derive(Parser, Debug)]
#[command(name = "tabdoc-mcp")]
#[command(about = "MCP server for Google Docs with tab support")]
struct Args {
    /// Service-account key file (overrides SERVICE_ACCOUNT_PATH)
    #[arg(long)]
    service_account: Option<PathBuf>,

    /// Subject email to impersonate (overrides SUBJECT_EMAIL)
    #[arg(long)]
    subject: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Tracing goes to stderr; stdout carries the MCP protocol.
    fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let args = Args::parse();

    // Missing credentials are fatal here, before any tool can run.
    let config = Config::load(args.service_account, args.subject)?;
    let (docs, drive) = connect(&config)?;

    tracing::info!(
        key = %config.service_account_path.display(),
        subject = %config.subject_email,
        "Clients ready"
    );

    let service = TabdocMcp::new(docs, drive)
        .serve(stdio())
        .await
        .inspect_err(|e| {
            tracing::error!("MCP server error: {:?}", e);
        })?;

    tracing::info!("tabdoc-mcp server ready");

    service.waiting().await?;

    tracing::info!("tabdoc-mcp server shutting down");
    Ok(())
}
