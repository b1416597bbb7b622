//! Server configuration
//!
//! All settings come from environment variables (a `.env` file is loaded
//! first when present):
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | DATABASE_URL | (required) | PostgreSQL connection URL |
//! | HTTP_PORT | 3000 | HTTP listen port |
//! | UPLOAD_DIR | uploads | Root directory for uploaded files |
//! | ENVIRONMENT | development | development \| staging \| production |
//! | RUST_LOG | store_server=info,tower_http=info | tracing filter |

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection URL
    pub database_url: String,
    /// HTTP listen port
    pub http_port: u16,
    /// Root directory for uploaded files (product images land in
    /// `<upload_dir>/photos/`)
    pub upload_dir: String,
    /// Environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set")?,
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            upload_dir: std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        })
    }

    /// Returns the `"0.0.0.0:port"` bind address string
    pub fn addr(&self) -> String {
        format!("0.0.0.0:{}", self.http_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "postgres://localhost/storefront".into(),
            http_port: 3000,
            upload_dir: "uploads".into(),
            environment: "development".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = Config::default();
        assert_eq!(config.http_port, 3000);
        assert_eq!(config.upload_dir, "uploads");
        assert_eq!(config.environment, "development");
    }

    #[test]
    fn addr_formatting() {
        let config = Config {
            http_port: 8080,
            ..Config::default()
        };
        assert_eq!(config.addr(), "0.0.0.0:8080");
    }
}
