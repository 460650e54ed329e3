use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;

/// Envelope returned by profile write endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct PostResponse<T> {
    #[serde(rename = "IsPosted")]
    pub is_posted: bool,

    /// Updated resource, when the endpoint returns one.
    #[serde(rename = "Data")]
    pub data: Option<T>,
}

/// Envelope returned by delete endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    #[serde(rename = "IsDeleted")]
    pub is_deleted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::UserProfile;

    #[test]
    fn test_post_response_parse() {
        let body = r#"{"IsPosted":true,"Data":{"Uid":"u-123","FirstName":"Alice"}}"#;
        let parsed: PostResponse<UserProfile> = serde_json::from_str(body).unwrap();

        assert!(parsed.is_posted);
        assert_eq!(parsed.data.unwrap().uid.as_deref(), Some("u-123"));
    }

    #[test]
    fn test_post_response_without_data() {
        let parsed: PostResponse<UserProfile> =
            serde_json::from_str(r#"{"IsPosted":false}"#).unwrap();
        assert!(!parsed.is_posted);
        assert!(parsed.data.is_none());
    }

    #[test]
    fn test_delete_response_parse() {
        let parsed: DeleteResponse = serde_json::from_str(r#"{"IsDeleted":true}"#).unwrap();
        assert!(parsed.is_deleted);
    }
}
