//! HTTP Server Configuration
//!
//! Configuration for the HTTP server including host, port, CORS, and
//! the simulated review delay.

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 7341)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins (default: common frontend dev servers)
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Simulated review delay in milliseconds (default: 3000)
    #[serde(default = "default_review_delay_ms")]
    pub review_delay_ms: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    7341
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:5173".to_string(), // Vite dev server
        "http://localhost:3000".to_string(), // Common dev port
        "http://127.0.0.1:5173".to_string(),
    ]
}

fn default_review_delay_ms() -> u64 {
    3000
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
            review_delay_ms: default_review_delay_ms(),
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

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
