use serde::{Deserialize, Serialize};

/// A language entry on a user profile.
///
/// Field names follow the API's JSON schema (`Id`, `Name`, `proficiency`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    #[serde(rename = "Id")]
    pub id: Option<String>,

    #[serde(rename = "Name")]
    pub name: Option<String>,

    /// Proficiency level (e.g., "elementary", "professional"). The API
    /// uses a lowercase key for this one field.
    #[serde(rename = "proficiency")]
    pub proficiency: Option<String>,
}

/// A language entry paired with the patch operation to apply to it.
///
/// Sent when removing (or otherwise patching) a language from a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveLanguage {
    #[serde(flatten)]
    pub language: Language,

    /// Patch operation, e.g. "remove".
    #[serde(rename = "op")]
    pub op: Option<String>,
}
