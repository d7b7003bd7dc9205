//! Gateway configuration.

use clap::Parser;

/// Quill HTTP/JSON Gateway command line arguments.
#[derive(Debug, Parser)]
#[command(name = "quill-gateway")]
#[command(about = "HTTP/JSON gateway for the quill CMS")]
pub struct Args {
    /// Address to listen on for HTTP requests.
    #[arg(short, long, default_value = "0.0.0.0:3000")]
    pub listen: String,

    /// Shared secret that authenticates admin callers. When unset, no
    /// caller can authenticate and only anonymous reads are served.
    #[arg(long, env = "QUILL_SECRET")]
    pub secret: Option<String>,

    /// Insert sample documents into each collection at startup.
    #[arg(long, default_value_t = false)]
    pub seed: bool,
}

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Address to listen on for HTTP requests.
    pub listen_addr: String,
    /// Shared secret for admin authentication.
    pub secret: Option<String>,
    /// Whether to seed sample documents at startup.
    pub seed: bool,
}

impl From<&Args> for GatewayConfig {
    fn from(args: &Args) -> Self {
        Self {
            listen_addr: args.listen.clone(),
            secret: args.secret.clone(),
            seed: args.seed,
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            secret: None,
            seed: false,
        }
    }
}
