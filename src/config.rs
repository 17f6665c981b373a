use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;
use axum::http::HeaderValue;
use url::Url;
use crate::error::{AppError, Result};

pub const DEFAULT_GNEWS_BASE_URL: &str = "https://gnews.io";
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: SocketAddr,
    pub gnews_api_key: String,
    pub gnews_base_url: Url,
    pub lang: String,
    pub country: String,
    pub upstream_timeout: Duration,
    pub allowed_origin: HeaderValue,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let gnews_api_key = lookup("GNEWS_API_KEY")
            .ok_or_else(|| AppError::ConfigError("GNEWS_API_KEY is not set".to_string()))?;
        if gnews_api_key.trim().is_empty() {
            return Err(AppError::ConfigError("GNEWS_API_KEY is empty".to_string()));
        }

        let base_url = lookup("GNEWS_BASE_URL").unwrap_or_else(|| DEFAULT_GNEWS_BASE_URL.to_string());
        let gnews_base_url = Url::parse(&base_url)
            .map_err(|e| AppError::ConfigError(format!("Invalid GNEWS_BASE_URL: {}", e)))?;
        if gnews_base_url.cannot_be_a_base() {
            return Err(AppError::ConfigError(format!("GNEWS_BASE_URL cannot be a base: {}", base_url)));
        }

        let lang = lookup("GNEWS_LANG").unwrap_or_else(|| "en".to_string());
        let country = lookup("GNEWS_COUNTRY").unwrap_or_else(|| "in".to_string());

        let timeout = lookup("UPSTREAM_TIMEOUT_SECS").unwrap_or_else(|| "10".to_string());
        let timeout = timeout.parse::<u64>()
            .map_err(|e| AppError::ConfigError(format!("Invalid UPSTREAM_TIMEOUT_SECS: {}", e)))?;
        if timeout == 0 {
            return Err(AppError::ConfigError("UPSTREAM_TIMEOUT_SECS must be at least 1".to_string()));
        }

        let origin = lookup("CORS_ALLOWED_ORIGIN").unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_string());
        let allowed_origin = HeaderValue::from_str(&origin)
            .map_err(|e| AppError::ConfigError(format!("Invalid CORS_ALLOWED_ORIGIN: {}", e)))?;

        // Load server configuration with defaults
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = lookup("PORT").unwrap_or_else(|| "8080".to_string());
        let port = port.parse::<u16>().map_err(|e| AppError::ConfigError(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(&host).map_err(|e| AppError::ConfigError(format!("Invalid host address: {}", e)))?;

        Ok(Config {
            server_addr: SocketAddr::new(ip, port),
            gnews_api_key,
            gnews_base_url,
            lang,
            country,
            upstream_timeout: Duration::from_secs(timeout),
            allowed_origin,
        })
    }
}
