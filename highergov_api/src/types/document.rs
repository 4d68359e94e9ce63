use serde::Deserialize;

/// Opportunity attachment as returned by `/document/`.
///
/// `download_url` is pre-signed and only valid for a short window after the
/// response is issued.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct DocumentRecord {
    #[serde(default, deserialize_with = "crate::de::string")]
    pub document_key: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub filename: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub file_type: Option<String>,
    #[serde(default, deserialize_with = "crate::de::integer")]
    pub file_size: Option<i64>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub download_url: Option<String>,
}
