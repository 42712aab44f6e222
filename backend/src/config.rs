//! Server configuration read from the environment.
//!
//! The data API credentials are never compiled into the bundle; the backend
//! reads them at startup and hands them to the browser through
//! `GET /api/config`.

use common::config::RuntimeConfig;

pub const API_BASE_URL_VAR: &str = "STORYPATH_API_BASE_URL";
pub const JWT_TOKEN_VAR: &str = "STORYPATH_JWT_TOKEN";
pub const USERNAME_VAR: &str = "STORYPATH_USERNAME";
pub const HOST_VAR: &str = "STORYPATH_HOST";
pub const PORT_VAR: &str = "STORYPATH_PORT";
pub const OPEN_BROWSER_VAR: &str = "STORYPATH_OPEN_BROWSER";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    Missing(&'static str),
    #[error("STORYPATH_PORT must be a port number, got {0:?}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
    pub runtime: RuntimeConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let required = |name: &'static str| present(name).ok_or(ConfigError::Missing(name));

        let runtime = RuntimeConfig {
            api_base_url: required(API_BASE_URL_VAR)?,
            jwt_token: required(JWT_TOKEN_VAR)?,
            username: required(USERNAME_VAR)?,
        };

        let port = match present(PORT_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let open_browser = present(OPEN_BROWSER_VAR).map_or(true, |raw| {
            !matches!(raw.trim().to_ascii_lowercase().as_str(), "0" | "false" | "no" | "off")
        });

        Ok(Self {
            host: present(HOST_VAR).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            open_browser,
            runtime,
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    const REQUIRED: [(&str, &str); 3] = [
        (API_BASE_URL_VAR, "https://api.example.test"),
        (JWT_TOKEN_VAR, "secret"),
        (USERNAME_VAR, "s1234567"),
    ];

    #[test]
    fn defaults_apply_when_optional_vars_are_unset() {
        let config = ServerConfig::from_lookup(lookup(&REQUIRED)).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert!(config.open_browser);
        assert_eq!(config.runtime.username, "s1234567");
        assert_eq!(config.url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn missing_or_blank_credentials_are_reported() {
        let err = ServerConfig::from_lookup(lookup(&REQUIRED[1..])).unwrap_err();
        assert_eq!(err, ConfigError::Missing(API_BASE_URL_VAR));

        let mut vars = REQUIRED.to_vec();
        vars[1] = (JWT_TOKEN_VAR, "  ");
        let err = ServerConfig::from_lookup(lookup(&vars)).unwrap_err();
        assert_eq!(err, ConfigError::Missing(JWT_TOKEN_VAR));
    }

    #[test]
    fn port_and_browser_flag_are_parsed() {
        let mut vars = REQUIRED.to_vec();
        vars.push((PORT_VAR, "9000"));
        vars.push((OPEN_BROWSER_VAR, "false"));
        vars.push((HOST_VAR, "0.0.0.0"));
        let config = ServerConfig::from_lookup(lookup(&vars)).unwrap();
        assert_eq!(config.port, 9000);
        assert!(!config.open_browser);
        assert_eq!(config.url(), "http://0.0.0.0:9000");

        let mut bad = REQUIRED.to_vec();
        bad.push((PORT_VAR, "eighty"));
        assert_eq!(
            ServerConfig::from_lookup(lookup(&bad)).unwrap_err(),
            ConfigError::InvalidPort("eighty".to_string())
        );
    }
}
