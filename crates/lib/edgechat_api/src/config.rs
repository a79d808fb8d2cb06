//! API server configuration.

use edgechat_core::protocol::Variant;
use tracing::warn;

/// Default listener address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8787";

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:8787").
    pub bind_addr: String,
    /// Operation set served by this instance.
    pub variant: Variant,
}

impl ApiConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable           | Default          |
    /// |--------------------|------------------|
    /// | `BIND_ADDR`        | `127.0.0.1:8787` |
    /// | `EDGECHAT_VARIANT` | `chat`           |
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into()),
            variant: variant_from(std::env::var("EDGECHAT_VARIANT").ok().as_deref()),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.into(),
            variant: Variant::default(),
        }
    }
}

fn variant_from(raw: Option<&str>) -> Variant {
    match raw.map(str::parse::<Variant>) {
        Some(Ok(variant)) => variant,
        Some(Err(e)) => {
            warn!("{e}; falling back to '{}'", Variant::default());
            Variant::default()
        }
        None => Variant::default(),
    }
}
