use serde::Deserialize;

use super::{AgencyRef, Nested};

/// Government contact as returned by `/people/`.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct PersonRecord {
    #[serde(default, deserialize_with = "crate::de::string")]
    pub person_key: Option<String>,
    /// Older spelling of `person_key`.
    #[serde(default, deserialize_with = "crate::de::string")]
    pub people_key: Option<String>,

    #[serde(default, deserialize_with = "crate::de::string")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub title: Option<String>,

    #[serde(default)]
    pub agency: Nested<AgencyRef>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub agency_name: Option<String>,

    #[serde(default, deserialize_with = "crate::de::string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub phone: Option<String>,
}
