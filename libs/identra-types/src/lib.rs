//! Shared types for the Identra identity API.
//!
//! This crate provides:
//! - User-profile models and sub-models (`UserProfile`, `Language`)
//! - Response envelopes for write operations (`PostResponse`, `DeleteResponse`)
//! - API error codes and the error body returned by Identra endpoints

mod errors;
mod language;
mod profile;
mod responses;

pub use errors::{ApiErrorResponse, ErrorCode};
pub use language::{Language, RemoveLanguage};
pub use profile::{ProfileEmail, UserProfile};
pub use responses::{DeleteResponse, PostResponse};
