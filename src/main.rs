use std::sync::Arc;

use hotpepper_mcp::config::Settings;
use hotpepper_mcp::services::HotPepperClient;
use hotpepper_mcp::tools::GourmetServer;
use rmcp::ServiceExt;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging. stdout carries the MCP JSON-RPC frames, so every
    // diagnostic goes to stderr.
    let filter = EnvFilter::try_from_env("LOG_LEVEL")
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting HotPepper MCP server...");

    let client = Arc::new(HotPepperClient::from_settings(&settings.api));
    info!(
        "HotPepper client initialized (base URL: {})",
        settings.api.base_url
    );
    if settings.api.key.is_none() {
        // Not fatal: the credential is checked again on every tool call
        info!("HOTPEPPER_API_KEY is not set; search tools will report a configuration error");
    }

    let service = GourmetServer::new(client)
        .serve(rmcp::transport::io::stdio())
        .await
        .inspect_err(|e| error!("MCP server error: {}", e))?;

    info!("HotPepper MCP server started");

    service.waiting().await?;
    Ok(())
}
