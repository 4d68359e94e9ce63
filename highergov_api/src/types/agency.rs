use serde::Deserialize;

use super::{AgencyRef, Nested};

/// Agency record as returned by `/agency/`.
///
/// Field names drifted between API revisions (`agency_name` vs `name`), so
/// both spellings are kept and resolved during normalization.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct AgencyRecord {
    #[serde(default, deserialize_with = "crate::de::string")]
    pub agency_key: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub agency_name: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub agency_abbreviation: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub abbreviation: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub agency_type: Option<String>,

    /// Parent agency: object or bare name.
    #[serde(default)]
    pub parent_agency: Nested<AgencyRef>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub parent_agency_name: Option<String>,
}
