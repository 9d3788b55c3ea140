use crate::BoxError;

/// Server configuration, read once at startup from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub http_port: u16,
    pub jwt_secret: String,
    pub environment: String,
}

/// Read a secret from the environment.
///
/// In development a missing value falls back to a deterministic
/// placeholder so the server can boot without a .env file. Anywhere
/// else a missing secret is a startup error.
fn require_secret(name: &str, environment: &str) -> Result<String, BoxError> {
    match std::env::var(name) {
        Ok(v) if !v.is_empty() => Ok(v),
        _ if environment == "development" => {
            tracing::warn!("{name} not set; using development fallback");
            Ok(format!(
                "dev-{}-not-for-production",
                name.to_lowercase().replace('_', "-")
            ))
        }
        _ => Err(format!("{name} must be set").into()),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, BoxError> {
        let environment =
            std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://tasks.db?mode=rwc".to_string());

        let http_port = match std::env::var("HTTP_PORT") {
            Ok(v) => v
                .parse::<u16>()
                .map_err(|_| format!("invalid HTTP_PORT: {v}"))?,
            Err(_) => 5000,
        };

        let jwt_secret = require_secret("JWT_SECRET", &environment)?;

        Ok(Self {
            database_url,
            http_port,
            jwt_secret,
            environment,
        })
    }
}
