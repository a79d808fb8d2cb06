//! Edgechat server binary.
//!
//! Serves one operation set (`chat` or `qa`) on every path of a single
//! listener. State lives in process memory and is lost on exit.

use clap::Parser;
use edgechat_api::config::ApiConfig;
use edgechat_core::protocol::Variant;
use tracing::info;

/// CLI arguments for the server. Unset flags fall back to the environment
/// (see [`ApiConfig::from_env`]).
#[derive(Parser, Debug)]
#[command(name = "edgechat_server", about = "Edgechat pseudo-GraphQL server", version)]
struct Args {
    /// Address to bind, e.g. `0.0.0.0:8787` (port 0 = ephemeral).
    #[arg(long)]
    bind: Option<String>,

    /// Operation set to serve: `chat` (GetMessages, SendMessage) or `qa` (askQuestion).
    #[arg(long)]
    variant: Option<Variant>,
}

impl Args {
    fn into_config(self, mut config: ApiConfig) -> ApiConfig {
        if let Some(bind) = self.bind {
            config.bind_addr = bind;
        }
        if let Some(variant) = self.variant {
            config.variant = variant;
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,edgechat_api=debug,edgechat_core=debug".into()),
        )
        .init();

    let config = Args::parse().into_config(ApiConfig::from_env());

    info!(
        version = edgechat_core::version(),
        variant = %config.variant,
        "starting edgechat_server"
    );

    let state = edgechat_api::AppState::new(config.clone());
    let app = edgechat_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;
    info!(addr = %local_addr, "GraphQL endpoint listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("ctrl-c received, shutting down");
    }
}
