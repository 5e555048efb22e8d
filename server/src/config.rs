//! Command-line and environment configuration.

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "todo-server", version, about = "In-memory TODO list web service")]
pub struct Config {
    /// Address to bind.
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Log filter used when `RUST_LOG` is not set.
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
