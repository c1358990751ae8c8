//! Rozklad MCP Server - Main Entry Point
//!
//! This is the main entry point for the timetable and diary MCP server.
//! The actual implementation is in the `rozklad_mcp` library.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use mcp_attr::server::serve_stdio;
use rozklad_mcp::{RozkladServerHandler, WeekType};
use tracing_subscriber::EnvFilter;

/// Rozklad MCP Server - class timetable and student diary via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the store file
    file: String,

    /// Week selected at startup in both tools (numerator or denominator)
    #[arg(long, default_value = "numerator")]
    week: WeekType,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!();
        std::process::exit(2);
    }

    let args = Args::parse();

    // stdout carries the MCP protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let handler = RozkladServerHandler::new(&args.file, args.week)?;
    tracing::info!(file = %args.file, week = %args.week, "serving on stdio");
    serve_stdio(handler).await?;
    Ok(())
}
