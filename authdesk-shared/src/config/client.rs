use serde::{Deserialize, Serialize};
#[cfg(not(target_arch = "wasm32"))]
use std::env;
use std::{fmt, str::FromStr};
use thiserror::Error;
use tracing::warn;
use url::Url;

/// Base URL used when nothing is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
/// Environment variable naming the service base URL.
pub const API_ENDPOINT_ENV: &str = "AUTHDESK_API_ENDPOINT";
/// Environment variable selecting the path convention (`v1` or `legacy`).
pub const API_PATH_STYLE_ENV: &str = "AUTHDESK_API_PATH_STYLE";

/// Errors raised while resolving the client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid API base URL `{value}`: {reason}")]
    InvalidBaseUrl { value: String, reason: String },
    #[error("invalid API path style `{0}`: expected `v1` or `legacy`")]
    InvalidPathStyle(String),
}

/// Remote operations the client knows how to address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Login,
    Register,
    CurrentUser,
}

/// Path convention of the authentication service.
///
/// Deployments exist with and without the `/v1` segment; the choice is
/// explicit configuration rather than a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiPathStyle {
    /// `/api/v1/auth/...` and `/api/v1/users/me`.
    #[default]
    Versioned,
    /// `/api/auth/...` and `/api/users/me`.
    Legacy,
}

impl ApiPathStyle {
    /// Relative path of `endpoint` under this convention.
    #[must_use]
    pub const fn path(self, endpoint: Endpoint) -> &'static str {
        match (self, endpoint) {
            (Self::Versioned, Endpoint::Login) => "api/v1/auth/login",
            (Self::Versioned, Endpoint::Register) => "api/v1/auth/register",
            (Self::Versioned, Endpoint::CurrentUser) => "api/v1/users/me",
            (Self::Legacy, Endpoint::Login) => "api/auth/login",
            (Self::Legacy, Endpoint::Register) => "api/auth/register",
            (Self::Legacy, Endpoint::CurrentUser) => "api/users/me",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Versioned => "v1",
            Self::Legacy => "legacy",
        }
    }
}

impl fmt::Display for ApiPathStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiPathStyle {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "v1" | "versioned" => Ok(Self::Versioned),
            "legacy" | "unversioned" => Ok(Self::Legacy),
            _ => Err(ConfigError::InvalidPathStyle(value.to_string())),
        }
    }
}

/// Resolved configuration of the auth client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_base_url: String,
    path_style: ApiPathStyle,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ClientConfig {
    /// Build a configuration from explicit values.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidBaseUrl`] unless `base_url` is an
    /// absolute `http`/`https` URL.
    pub fn new(base_url: &str, path_style: ApiPathStyle) -> Result<Self, ConfigError> {
        Ok(Self {
            api_base_url: normalize_base_url(base_url)?,
            path_style,
        })
    }

    /// Values baked in at build time, falling back to the localhost service.
    ///
    /// Browser builds have no process environment, so the build-time values
    /// are the only configuration source there.
    pub fn with_defaults() -> Self {
        let api_base_url = option_env!("AUTHDESK_API_ENDPOINT")
            .filter(|value| !value.trim().is_empty())
            .map_or_else(
                || DEFAULT_API_BASE_URL.to_string(),
                |value| {
                    normalize_base_url(value).unwrap_or_else(|err| {
                        warn!(error = %err, "ignoring build-time API endpoint");
                        DEFAULT_API_BASE_URL.to_string()
                    })
                },
            );
        let path_style = option_env!("AUTHDESK_API_PATH_STYLE")
            .map(str::parse::<ApiPathStyle>)
            .transpose()
            .unwrap_or_else(|err| {
                warn!(error = %err, "ignoring build-time API path style");
                None
            })
            .unwrap_or_default();

        Self {
            api_base_url,
            path_style,
        }
    }

    /// Build-time defaults overlaid with the runtime environment.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when an environment variable is set to an
    /// invalid value.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::with_defaults();

        if let Ok(endpoint) = env::var(API_ENDPOINT_ENV) {
            if !endpoint.trim().is_empty() {
                config.api_base_url = normalize_base_url(&endpoint)?;
            }
        }
        if let Ok(style) = env::var(API_PATH_STYLE_ENV) {
            if !style.trim().is_empty() {
                config.path_style = style.parse()?;
            }
        }

        Ok(config)
    }

    #[must_use]
    pub fn with_path_style(mut self, path_style: ApiPathStyle) -> Self {
        self.path_style = path_style;
        self
    }

    /// Base URL without a trailing slash.
    #[must_use]
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    #[must_use]
    pub fn path_style(&self) -> ApiPathStyle {
        self.path_style
    }

    /// Absolute URL of `endpoint`.
    #[must_use]
    pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!("{}/{}", self.api_base_url, self.path_style.path(endpoint))
    }
}

fn normalize_base_url(value: &str) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        value: value.to_string(),
        reason,
    };

    let parsed = Url::parse(trimmed).map_err(|err| invalid(err.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme `{}`", parsed.scheme())));
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(invalid("query strings and fragments are not allowed".into()));
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
