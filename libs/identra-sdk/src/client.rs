//! Identra API client implementation.

use std::collections::HashMap;

use identra_types::{
    ApiErrorResponse, DeleteResponse, ErrorCode, Language, PostResponse, RemoveLanguage,
    UserProfile,
};
use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::ConnectionConfig;
use crate::connection::ConnectionFactory;
use crate::error::IdentraError;

/// Configuration for the Identra client.
#[derive(Debug, Clone)]
pub struct IdentraConfig {
    /// API key from the Identra dashboard
    pub api_key: String,

    /// API secret paired with the key
    pub api_secret: String,

    /// API host to call (e.g., "api.identra.example")
    pub api_host: String,

    /// Connection settings applied to every request (timeout, proxy)
    pub connection: ConnectionConfig,
}

/// Identra client for server-side profile management.
///
/// Thin wrappers over the REST endpoints; every call builds a fresh
/// configured request through the shared [`ConnectionFactory`].
pub struct IdentraClient {
    config: IdentraConfig,
}

impl IdentraClient {
    /// Create a new Identra client.
    ///
    /// # Errors
    /// `IdentraError::Config` when the key, secret, or host is empty.
    pub fn new(config: IdentraConfig) -> Result<Self, IdentraError> {
        if config.api_key.is_empty() {
            return Err(IdentraError::Config(
                "apiKey is required. Get one from the Identra dashboard.".into(),
            ));
        }

        if config.api_secret.is_empty() {
            return Err(IdentraError::Config("apiSecret is required".into()));
        }

        if config.api_host.is_empty() {
            return Err(IdentraError::Config("apiHost is required".into()));
        }

        Ok(Self { config })
    }

    /// Get the profile belonging to an end-user access token.
    pub async fn get_profile_by_token(
        &self,
        access_token: &str,
    ) -> Result<UserProfile, IdentraError> {
        let headers =
            HashMap::from([("Authorization".to_string(), format!("Bearer {access_token}"))]);

        let request = ConnectionFactory::instance().build_request(
            &self.config.connection,
            &self.endpoint("/profile"),
            Some(&headers),
        )?;

        handle_response(request.send().await?).await
    }

    /// List the languages on an account's profile.
    pub async fn get_languages(&self, uid: &str) -> Result<Vec<Language>, IdentraError> {
        let request = ConnectionFactory::instance().build_request(
            &self.config.connection,
            &self.endpoint(&format!("/account/{uid}/languages")),
            Some(&self.api_headers()),
        )?;

        handle_response(request.send().await?).await
    }

    /// Add a language to an account's profile.
    pub async fn add_language(
        &self,
        uid: &str,
        language: &Language,
    ) -> Result<PostResponse<UserProfile>, IdentraError> {
        let mut request = ConnectionFactory::instance().build_request(
            &self.config.connection,
            &self.endpoint(&format!("/account/{uid}/languages")),
            Some(&self.api_headers()),
        )?;
        request.set_method(Method::POST);
        request.set_json(language)?;

        handle_response(request.send().await?).await
    }

    /// Remove a language from an account's profile.
    pub async fn remove_language(
        &self,
        uid: &str,
        language: &RemoveLanguage,
    ) -> Result<DeleteResponse, IdentraError> {
        let mut request = ConnectionFactory::instance().build_request(
            &self.config.connection,
            &self.endpoint(&format!("/account/{uid}/languages")),
            Some(&self.api_headers()),
        )?;
        request.set_method(Method::DELETE);
        request.set_json(language)?;

        handle_response(request.send().await?).await
    }

    fn endpoint(&self, path: &str) -> String {
        format!("https://{}/v2{}", self.config.api_host, path)
    }

    fn api_headers(&self) -> HashMap<String, String> {
        HashMap::from([
            ("X-Api-Key".to_string(), self.config.api_key.clone()),
            ("X-Api-Secret".to_string(), self.config.api_secret.clone()),
        ])
    }
}

async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T, IdentraError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        tracing::error!(status = %status, body = %body, "Identra API error");

        let message = serde_json::from_str::<ApiErrorResponse>(&body)
            .ok()
            .and_then(|e| e.detail().map(str::to_string))
            .unwrap_or_else(|| format!("{status}: {body}"));

        return Err(IdentraError::Api {
            code: error_code_for(status),
            message,
        });
    }

    serde_json::from_str(&body).map_err(|e| {
        tracing::error!(body = %body, error = %e, "Failed to parse Identra response");
        IdentraError::InvalidResponse(e.to_string())
    })
}

fn error_code_for(status: StatusCode) -> ErrorCode {
    match status {
        StatusCode::UNAUTHORIZED => ErrorCode::InvalidApiKey,
        StatusCode::FORBIDDEN => ErrorCode::Forbidden,
        StatusCode::NOT_FOUND => ErrorCode::NotFound,
        StatusCode::TOO_MANY_REQUESTS => ErrorCode::RateLimited,
        s if s.is_client_error() => ErrorCode::InvalidInput,
        _ => ErrorCode::InternalError,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> IdentraConfig {
        IdentraConfig {
            api_key: "pk_live_test".into(),
            api_secret: "sk_live_test".into(),
            api_host: "api.identra.example".into(),
            connection: ConnectionConfig::new(),
        }
    }

    #[test]
    fn test_config_validation_empty_api_key() {
        let result = IdentraClient::new(IdentraConfig {
            api_key: "".into(),
            ..valid_config()
        });

        assert!(matches!(result, Err(IdentraError::Config(_))));
    }

    #[test]
    fn test_config_validation_empty_api_secret() {
        let result = IdentraClient::new(IdentraConfig {
            api_secret: "".into(),
            ..valid_config()
        });

        assert!(matches!(result, Err(IdentraError::Config(_))));
    }

    #[test]
    fn test_config_validation_empty_host() {
        let result = IdentraClient::new(IdentraConfig {
            api_host: "".into(),
            ..valid_config()
        });

        assert!(matches!(result, Err(IdentraError::Config(_))));
    }

    #[test]
    fn test_valid_config() {
        assert!(IdentraClient::new(valid_config()).is_ok());
    }

    #[test]
    fn test_endpoint_urls() {
        let client = IdentraClient::new(valid_config()).unwrap();

        assert_eq!(
            client.endpoint("/profile"),
            "https://api.identra.example/v2/profile"
        );
        assert_eq!(
            client.endpoint("/account/u-123/languages"),
            "https://api.identra.example/v2/account/u-123/languages"
        );
    }

    #[test]
    fn test_error_code_for_status() {
        assert_eq!(
            error_code_for(StatusCode::UNAUTHORIZED),
            ErrorCode::InvalidApiKey
        );
        assert_eq!(error_code_for(StatusCode::NOT_FOUND), ErrorCode::NotFound);
        assert_eq!(
            error_code_for(StatusCode::UNPROCESSABLE_ENTITY),
            ErrorCode::InvalidInput
        );
        assert_eq!(
            error_code_for(StatusCode::BAD_GATEWAY),
            ErrorCode::InternalError
        );
    }
}
