//! Classification code reference data.

use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Default)]
pub struct NaicsRecord {
    #[serde(default, deserialize_with = "crate::de::string")]
    pub naics_code: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub description: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct PscRecord {
    #[serde(default, deserialize_with = "crate::de::string")]
    pub psc_code: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub description: Option<String>,
}
