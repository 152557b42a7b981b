use std::env;

/// Server configuration for HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: String,
    /// Externally visible base URL, used for pagination and media links.
    pub public_url: String,
}

impl ServerConfig {
    /// Load server configuration from environment variables
    ///
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: Port to bind (default: "8080")
    /// - PUBLIC_URL: Base URL clients reach the service at
    ///   (default: "http://{SERVICE_IP}:{SERVICE_PORT}")
    pub fn from_env() -> Self {
        let ip = env::var("SERVICE_IP").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("SERVICE_PORT").unwrap_or_else(|_| "8080".to_string());
        let public_url = env::var("PUBLIC_URL").ok();

        Self::new(ip, port, public_url)
    }

    pub fn new(ip: String, port: String, public_url: Option<String>) -> Self {
        let public_url = public_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| format!("http://{}:{}", ip, port));

        Self {
            ip,
            port,
            public_url,
        }
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}
