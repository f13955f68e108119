//! # AuthDesk shared core
//!
//! Platform-neutral pieces of the AuthDesk client: wire models, client
//! configuration, the session store abstraction, the auth client that talks to
//! the remote authentication service, and the login/registration form
//! controllers. Everything here compiles both natively and for `wasm32`.

#![cfg_attr(not(test), forbid(unsafe_code))]
#![warn(clippy::pedantic)]

pub mod client;
pub mod config;
pub mod forms;
pub mod models;
pub mod session;

pub use client::{AuthClient, ClientError};
pub use config::{ApiPathStyle, ClientConfig, ConfigError};
pub use session::{MemorySessionStore, Session, SessionKey, SessionStore, StorageError};
