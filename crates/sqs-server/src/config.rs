use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;

pub const DEFAULT_PORT: u16 = 7777;
pub const DEFAULT_LOG_FILE: &str = "development.log";

/// Single-queue message broker over HTTP.
#[derive(Parser, Debug, Clone)]
#[command(name = "sqs")]
#[command(version)]
#[command(about = "Minimal single-queue message broker over HTTP.", long_about = None)]
pub struct Cli {
    /// Port to listen on
    #[arg(short, long, env = "SQS_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Host name or IP address to bind (IPv4 or IPv6)
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// File that receives the service log (truncated on startup)
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: String,
}

impl Cli {
    /// Resolve `--host`/`--port` into the addresses to try binding, in order.
    pub async fn listen_addrs(&self) -> anyhow::Result<Vec<SocketAddr>> {
        let addrs: Vec<SocketAddr> = tokio::net::lookup_host((self.host.as_str(), self.port))
            .await
            .with_context(|| format!("resolving listen host {}", self.host))?
            .collect();

        if addrs.is_empty() {
            anyhow::bail!("listen host {} resolved to no addresses", self.host);
        }
        Ok(addrs)
    }
}
