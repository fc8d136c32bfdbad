//! # HTTP Server Configuration
//!
//! Host and port for the catalog server.

use serde::{Deserialize, Serialize};

/// Environment variable overriding the listening port
pub const PORT_ENV_VAR: &str = "PORT";

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 3000)
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Default config with the port taken from the `PORT` environment
    /// variable when set to a valid port number.
    pub fn from_env() -> Self {
        let port = std::env::var(PORT_ENV_VAR)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_port);
        Self::with_port(port)
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
