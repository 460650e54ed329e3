//! Rust SDK for the Identra identity API.
//!
//! This SDK builds configured HTTP requests for Identra endpoints and
//! provides thin wrappers over the profile-management API.
//!
//! # Features
//!
//! - **Connection factory** - A shared, lazily constructed factory that
//!   produces configured requests (timeout, proxy, headers) per call
//! - **Profile API** - Fetch profiles and manage profile languages
//! - **Connection config** - String-keyed settings with safe defaults
//!
//! # Example
//!
//! ```rust,ignore
//! use identra_sdk::{IdentraClient, IdentraConfig, keys};
//! use std::collections::HashMap;
//!
//! let client = IdentraClient::new(IdentraConfig {
//!     api_key: "pk_live_...".to_string(),
//!     api_secret: "sk_live_...".to_string(),
//!     api_host: "api.identra.example".to_string(),
//!     connection: HashMap::from([(keys::CONNECTION_TIMEOUT.to_string(), "5000".to_string())]),
//! })?;
//!
//! let profile = client.get_profile_by_token("eyJ...").await?;
//! println!("Uid: {:?}", profile.uid);
//! ```

#[cfg(feature = "client")]
mod client;
mod config;
#[cfg(feature = "client")]
mod connection;
mod error;

#[cfg(feature = "client")]
pub use client::{IdentraClient, IdentraConfig};
pub use config::{
    ConnectionConfig, ProxyCredentials, ProxyDescriptor, default_connection_timeout, keys,
};
#[cfg(feature = "client")]
pub use connection::{ConnectionFactory, OutboundRequest};
pub use error::IdentraError;

// Re-export shared types for convenience
pub use identra_types::{
    ApiErrorResponse, DeleteResponse, ErrorCode, Language, PostResponse, ProfileEmail,
    RemoveLanguage, UserProfile,
};
