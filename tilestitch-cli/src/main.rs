//! Tilestitch CLI - runs the tile proxy server.

use clap::Parser;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tilestitch::config::ProxyConfig;
use tilestitch::logging::{default_log_dir, default_log_file, init_logging};
use tilestitch::provider::{AsyncReqwestClient, MapboxProvider};
use tilestitch::server::{serve, AppState};
use tracing::error;

#[derive(Parser)]
#[command(name = "tilestitch")]
#[command(about = "Map tile proxy that synthesizes low-zoom tiles from higher-zoom imagery", long_about = None)]
#[command(version = tilestitch::VERSION)]
struct Args {
    /// Path to config.ini (defaults to ~/.tilestitch/config.ini)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Listen port (overrides config)
    #[arg(long)]
    port: Option<u16>,

    /// Upstream tile base URL (overrides config)
    #[arg(long)]
    base_url: Option<String>,

    /// Upstream access token (overrides config)
    #[arg(long)]
    access_token: Option<String>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let _logging_guard = match init_logging(default_log_dir(), default_log_file()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error initializing logging: {}", e);
            process::exit(1);
        }
    };

    let config_path = args
        .config
        .unwrap_or_else(tilestitch::config::default_config_path);
    let mut config = match ProxyConfig::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading config from {}: {}", config_path.display(), e);
            process::exit(1);
        }
    };

    // CLI flags override file values.
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(base_url) = args.base_url {
        config.upstream.base_url = base_url.trim_end_matches('/').to_string();
    }
    if let Some(token) = args.access_token {
        config.upstream.access_token = Some(token);
    }

    let access_token = match config.upstream.access_token {
        Some(token) => token,
        None => {
            eprintln!(
                "Error: no upstream access token configured (set [upstream] access_token in {} or pass --access-token)",
                config_path.display()
            );
            process::exit(1);
        }
    };

    let http_client = match AsyncReqwestClient::with_timeout(config.download.timeout) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error creating HTTP client: {}", e);
            process::exit(1);
        }
    };

    let provider = MapboxProvider::new(http_client, config.upstream.base_url, access_token);
    let state = AppState::new(Arc::new(provider));

    if let Err(e) = serve(state, config.server.port).await {
        error!(error = %e, "server exited with error");
        process::exit(1);
    }
}
