use trivia_core::AppError;

/// Listen address for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl ServerConfig {
    /// Read configuration from environment variables.
    ///
    /// - `TRIVIA_SERVER_HOST` (optional, defaults to `0.0.0.0`)
    /// - `TRIVIA_SERVER_PORT` (optional, defaults to 5000)
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_values(
            std::env::var("TRIVIA_SERVER_HOST").ok(),
            std::env::var("TRIVIA_SERVER_PORT").ok(),
        )
    }

    fn from_values(host: Option<String>, port: Option<String>) -> Result<Self, AppError> {
        let defaults = Self::default();

        let port = match port {
            None => defaults.port,
            Some(raw) => raw.parse().map_err(|_| {
                AppError::ConfigError(format!(
                    "Invalid TRIVIA_SERVER_PORT '{raw}': must be a port number"
                ))
            })?,
        };

        Ok(Self {
            host: host.unwrap_or(defaults.host),
            port,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
