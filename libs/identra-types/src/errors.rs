use serde::{Deserialize, Serialize};

/// API error codes returned by Identra endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidCredentials,
    InvalidApiKey,
    InvalidInput,
    NotFound,
    Forbidden,
    AccountSuspended,
    RateLimited,
    InternalError,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidApiKey => "INVALID_API_KEY",
            Self::InvalidInput => "INVALID_INPUT",
            Self::NotFound => "NOT_FOUND",
            Self::Forbidden => "FORBIDDEN",
            Self::AccountSuspended => "ACCOUNT_SUSPENDED",
            Self::RateLimited => "RATE_LIMITED",
            Self::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Error body returned by Identra endpoints on non-2xx responses.
///
/// Uses the API's PascalCase field names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Numeric error code assigned by the API
    #[serde(rename = "ErrorCode")]
    pub error_code: Option<i64>,

    /// Short machine-oriented message
    #[serde(rename = "Message")]
    pub message: Option<String>,

    /// Human-readable description of the failure
    #[serde(rename = "Description")]
    pub description: Option<String>,
}

impl ApiErrorResponse {
    /// Best human-readable text available in the body.
    pub fn detail(&self) -> Option<&str> {
        self.description.as_deref().or(self.message.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_serde() {
        let code = ErrorCode::InvalidApiKey;
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, r#""INVALID_API_KEY""#);

        let parsed: ErrorCode = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, code);
    }

    #[test]
    fn test_api_error_response_parse() {
        let body = r#"{"ErrorCode":936,"Message":"Invalid key","Description":"The provided API key is invalid"}"#;
        let parsed: ApiErrorResponse = serde_json::from_str(body).unwrap();

        assert_eq!(parsed.error_code, Some(936));
        assert_eq!(parsed.detail(), Some("The provided API key is invalid"));
    }

    #[test]
    fn test_api_error_response_detail_falls_back_to_message() {
        let body = r#"{"Message":"Invalid key"}"#;
        let parsed: ApiErrorResponse = serde_json::from_str(body).unwrap();

        assert_eq!(parsed.error_code, None);
        assert_eq!(parsed.detail(), Some("Invalid key"));
    }
}
