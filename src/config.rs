//! Server configuration.

use serde::{Deserialize, Serialize};

use crate::cli::Cli;

pub const DEFAULT_PORT: u16 = 5001;
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Listener configuration for the HTTP service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Address string accepted by `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl From<&Cli> for ServerConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            host: cli.host.clone(),
            port: cli.port,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_original_service_port() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr(), "127.0.0.1:5001");
    }
}
