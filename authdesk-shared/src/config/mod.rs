//! # Configuration
//!
//! Where the authentication service lives and which path convention it
//! speaks.

pub mod client;

pub use client::{
    API_ENDPOINT_ENV, API_PATH_STYLE_ENV, ApiPathStyle, ClientConfig, ConfigError,
    DEFAULT_API_BASE_URL, Endpoint,
};
