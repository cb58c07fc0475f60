// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! The hosted backend is reached through two opaque inputs, a base URL and a
//! public API key. Both are accepted under their plain names or with the
//! `NEXT_PUBLIC_` prefix used by existing deployments.

use std::env;
use std::time::Duration;

const DEFAULT_PUBLIC_URL: &str = "http://localhost:8080";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 10;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    // --- Environment Variables (non-sensitive) ---
    /// Base URL of the hosted auth/profile backend
    pub supabase_url: String,
    /// Public (anon) API key sent with every backend request
    pub supabase_anon_key: String,
    /// Public URL this dashboard is served from
    pub public_url: String,
    /// Server port
    pub port: u16,
    /// Timeout applied to every backend request
    pub backend_timeout: Duration,

    // --- Secrets ---
    /// JWT signing key for session cookies (raw bytes)
    pub jwt_signing_key: Vec<u8>,
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let supabase_url = var_with_fallback("SUPABASE_URL", "NEXT_PUBLIC_SUPABASE_URL")
            .ok_or(ConfigError::Missing("SUPABASE_URL"))?;
        let supabase_anon_key =
            var_with_fallback("SUPABASE_ANON_KEY", "NEXT_PUBLIC_SUPABASE_ANON_KEY")
                .ok_or(ConfigError::Missing("SUPABASE_ANON_KEY"))?;

        let port = match env::var("PORT") {
            Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                reason: format!("'{}' is not a valid port", raw),
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let backend_timeout_secs = match env::var("BACKEND_TIMEOUT_SECS") {
            Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "BACKEND_TIMEOUT_SECS",
                reason: format!("'{}' is not a whole number of seconds", raw),
            })?,
            Err(_) => DEFAULT_BACKEND_TIMEOUT_SECS,
        };

        Ok(Self {
            supabase_url: supabase_url.trim_end_matches('/').to_string(),
            supabase_anon_key,
            public_url: env::var("PUBLIC_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_PUBLIC_URL.to_string()),
            port,
            backend_timeout: Duration::from_secs(backend_timeout_secs),
            jwt_signing_key: env::var("JWT_SIGNING_KEY")
                .map_err(|_| ConfigError::Missing("JWT_SIGNING_KEY"))?
                .into_bytes(),
        })
    }

    /// Config for tests only.
    pub fn test_default() -> Self {
        Self {
            supabase_url: "http://127.0.0.1:54321".to_string(),
            supabase_anon_key: "test_anon_key".to_string(),
            public_url: DEFAULT_PUBLIC_URL.to_string(),
            port: DEFAULT_PORT,
            backend_timeout: Duration::from_secs(DEFAULT_BACKEND_TIMEOUT_SECS),
            jwt_signing_key: b"test_jwt_key_32_bytes_minimum!!".to_vec(),
        }
    }

    /// Whether cookies should carry the `Secure` attribute.
    pub fn secure_cookies(&self) -> bool {
        self.public_url.starts_with("https://")
    }
}

/// Read `primary`, falling back to `fallback`; blank values count as unset.
fn var_with_fallback(primary: &str, fallback: &str) -> Option<String> {
    env::var(primary)
        .or_else(|_| env::var(fallback))
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        env::set_var("NEXT_PUBLIC_SUPABASE_URL", "https://box.supabase.co/");
        env::set_var("SUPABASE_ANON_KEY", "anon");
        env::set_var("JWT_SIGNING_KEY", "test_jwt_key_32_bytes_minimum!!");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.supabase_url, "https://box.supabase.co");
        assert_eq!(config.supabase_anon_key, "anon");
        assert_eq!(config.port, 8080);
        assert_eq!(config.backend_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_secure_cookies_follow_public_url() {
        let mut config = Config::test_default();
        assert!(!config.secure_cookies());

        config.public_url = "https://dashboard.example.com".to_string();
        assert!(config.secure_cookies());
    }
}
