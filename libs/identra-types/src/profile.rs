use serde::{Deserialize, Serialize};

use crate::language::Language;

/// An email entry on a user profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileEmail {
    /// Email kind (e.g., "Primary", "Secondary")
    #[serde(rename = "Type")]
    pub kind: Option<String>,

    #[serde(rename = "Value")]
    pub value: Option<String>,
}

/// A user profile as returned by the Identra API.
///
/// Field names follow the API's PascalCase JSON schema. Only the fields
/// this SDK consumes are modeled; unknown fields are ignored on decode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "Uid")]
    pub uid: Option<String>,

    #[serde(rename = "FirstName")]
    pub first_name: Option<String>,

    #[serde(rename = "LastName")]
    pub last_name: Option<String>,

    #[serde(rename = "FullName")]
    pub full_name: Option<String>,

    #[serde(rename = "Email", default)]
    pub email: Vec<ProfileEmail>,

    #[serde(rename = "Languages", default)]
    pub languages: Vec<Language>,
}

impl UserProfile {
    /// The primary email value, if one is present.
    pub fn primary_email(&self) -> Option<&str> {
        self.email
            .iter()
            .find(|entry| entry.kind.as_deref() == Some("Primary"))
            .and_then(|entry| entry.value.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_profile_parse() {
        let body = r#"{
            "Uid": "u-123",
            "FirstName": "Alice",
            "LastName": "Doe",
            "FullName": "Alice Doe",
            "Email": [
                {"Type": "Primary", "Value": "alice@example.com"},
                {"Type": "Secondary", "Value": "alt@example.com"}
            ],
            "Languages": [{"Id": "lang-1", "Name": "German", "proficiency": "elementary"}],
            "SomeUnknownField": 42
        }"#;

        let profile: UserProfile = serde_json::from_str(body).unwrap();
        assert_eq!(profile.uid.as_deref(), Some("u-123"));
        assert_eq!(profile.primary_email(), Some("alice@example.com"));
        assert_eq!(profile.languages.len(), 1);
        assert_eq!(profile.languages[0].name.as_deref(), Some("German"));
    }

    #[test]
    fn test_user_profile_missing_collections_default_empty() {
        let profile: UserProfile = serde_json::from_str(r#"{"Uid":"u-123"}"#).unwrap();
        assert!(profile.email.is_empty());
        assert!(profile.languages.is_empty());
        assert_eq!(profile.primary_email(), None);
    }
}
