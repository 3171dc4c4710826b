//! Gateway configuration.

use std::env;

/// Default cap on request body size, in bytes
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 64 * 1024;

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Largest accepted request body, in bytes
    pub body_limit_bytes: usize,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("GATEWAY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("GATEWAY_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            body_limit_bytes: env::var("GATEWAY_BODY_LIMIT_BYTES")
                .ok()
                .and_then(|b| b.parse().ok())
                .unwrap_or(DEFAULT_BODY_LIMIT_BYTES),
        }
    }

    /// Socket address string to bind
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
        }
    }
}
