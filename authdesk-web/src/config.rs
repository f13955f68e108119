//! Frontend configuration module
//!
//! Settings baked in at build time: where the auth service lives and which
//! language the UI starts in.

use shared::ClientConfig;

use crate::language::{DEFAULT_LANGUAGE, get_language_info};

/// Frontend configuration for the API client and UI defaults
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Connection settings for the auth service
    pub client: ClientConfig,
    /// Language shown before the user picks one
    pub default_language: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        let default_language = option_env!("AUTHDESK_DEFAULT_LANGUAGE")
            .filter(|code| get_language_info(code).is_some())
            .unwrap_or(DEFAULT_LANGUAGE)
            .to_string();

        Self {
            client: ClientConfig::with_defaults(),
            default_language,
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    pub fn client(&self) -> &ClientConfig {
        &self.client
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }
}
