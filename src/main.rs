mod config;
mod error;
mod gcal;
mod mcp;

use std::net::SocketAddr;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gcal-mcp", about = "Google Calendar MCP server")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the MCP server (default)
    Serve,

    /// List the registered MCP tools
    ListTools,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Serve);

    match command {
        Commands::Serve => run_server().await,
        Commands::ListTools => cmd_list_tools(),
    }
}

/// Start the MCP server.
async fn run_server() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = config::Config::from_env()?;
    tracing::info!(
        mcp_port = config.mcp_port,
        base_url = %config.gcal_base_url,
        auth = config.mcp_bearer_token.is_some(),
        "Starting Google Calendar MCP server"
    );

    let client = gcal::GcalClient::connect(&config);
    let app = mcp::router(client, config.mcp_bearer_token.clone());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.mcp_port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "MCP server listening");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Print the registered tool table. Needs no credentials.
fn cmd_list_tools() -> anyhow::Result<()> {
    let tools = mcp::tools::all_tools();
    println!("{:<28} Description", "Name");
    println!("{}", "-".repeat(70));
    for t in &tools {
        println!("{:<28} {}", t.name, t.description);
    }
    println!();
    println!("{} tools registered.", tools.len());
    Ok(())
}
