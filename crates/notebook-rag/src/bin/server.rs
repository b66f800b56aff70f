//! Notebook server binary
//!
//! Run with: cargo run -p notebook-rag --bin notebook-rag-server

use clap::Parser;
use notebook_rag::{
    config::{GeminiConfig, NotebookConfig, ServerConfig, StorageConfig, DEFAULT_STATIC_DIR},
    server::NotebookServer,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// PDF notebook: upload documents and chat with them through Gemini
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Address to bind
    #[arg(long, env = "NOTEBOOK_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, env = "NOTEBOOK_PORT", default_value_t = 8000)]
    port: u16,

    /// Directory for uploaded PDFs (scanned on startup)
    #[arg(long, env = "NOTEBOOK_UPLOAD_DIR", default_value = "uploads")]
    upload_dir: PathBuf,

    /// Directory served under /static
    #[arg(long, env = "NOTEBOOK_STATIC_DIR", default_value = DEFAULT_STATIC_DIR)]
    static_dir: PathBuf,

    /// Maximum upload size in bytes
    #[arg(long, env = "NOTEBOOK_MAX_UPLOAD_SIZE", default_value_t = 100 * 1024 * 1024)]
    max_upload_size: usize,

    /// Fallback Gemini API key for chat requests that carry none
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    gemini_api_key: Option<String>,

    /// Generative Language API base URL
    #[arg(
        long,
        env = "GEMINI_BASE_URL",
        default_value = "https://generativelanguage.googleapis.com/v1beta"
    )]
    gemini_base_url: String,

    /// Timeout for Gemini requests in seconds
    #[arg(long, env = "GEMINI_TIMEOUT_SECS", default_value_t = 120)]
    request_timeout_secs: u64,
}

impl From<Args> for NotebookConfig {
    fn from(args: Args) -> Self {
        NotebookConfig {
            server: ServerConfig {
                host: args.host,
                port: args.port,
                max_upload_size: args.max_upload_size,
                ..ServerConfig::default()
            },
            storage: StorageConfig {
                upload_dir: args.upload_dir,
                static_dir: args.static_dir,
            },
            gemini: GeminiConfig {
                base_url: args.gemini_base_url,
                api_key: args.gemini_api_key,
                timeout_secs: args.request_timeout_secs,
            },
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "notebook_rag=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = NotebookConfig::from(Args::parse());

    tracing::info!("Configuration loaded");
    tracing::info!("  - Upload dir: {}", config.storage.upload_dir.display());
    tracing::info!("  - Static dir: {}", config.storage.static_dir.display());
    tracing::info!("  - Gemini API: {}", config.gemini.base_url);
    if config.gemini.default_api_key().is_none() {
        tracing::warn!("GEMINI_API_KEY not set; chat requests must supply their own key");
    }

    let server = NotebookServer::new(config).await?;

    println!("\nServer starting...");
    println!("  UI:    http://{}/", server.address());
    println!("  Admin: http://{}/admin", server.address());
    println!("\nEndpoints:");
    println!("  POST   /upload              - Upload a PDF");
    println!("  GET    /documents           - List documents");
    println!("  DELETE /documents/:filename - Delete a document");
    println!("  POST   /chat                - Ask a question");
    println!("\nPress Ctrl+C to stop\n");

    server.start().await?;

    Ok(())
}
