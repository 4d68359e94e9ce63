//! Sub-objects that appear nested inside several record types.

use serde::Deserialize;

/// Agency reference (awarding agency, sponsoring agency, parent agency).
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct AgencyRef {
    #[serde(default, deserialize_with = "crate::de::string")]
    pub agency_key: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub agency_name: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub agency_abbreviation: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub agency_type: Option<String>,
}

/// Awardee reference on an award, or an awardee's parent company.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct AwardeeRef {
    #[serde(default, deserialize_with = "crate::de::string")]
    pub awardee_key: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub clean_name: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub legal_business_name: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub uei: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub cage_code: Option<String>,
}

impl AwardeeRef {
    /// Display name, preferring the cleaned form.
    pub fn name(&self) -> Option<String> {
        self.clean_name
            .clone()
            .or_else(|| self.legal_business_name.clone())
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct NaicsRef {
    #[serde(default, deserialize_with = "crate::de::string")]
    pub naics_code: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub naics_description: Option<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct PscRef {
    #[serde(default, deserialize_with = "crate::de::string")]
    pub psc_code: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub psc_description: Option<String>,
}

/// Point of contact. `contact_name` is only sent by some endpoints; the
/// split name parts are preferred when present.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ContactRef {
    #[serde(default, deserialize_with = "crate::de::string")]
    pub contact_first_name: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub contact_last_name: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub contact_name: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub contact_title: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub contact_email: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub contact_phone: Option<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct AddressRef {
    #[serde(default, deserialize_with = "crate::de::string")]
    pub address_line_1: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub address_line_2: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub zip: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub country: Option<String>,
}

/// One entry of an awardee's certification list. `cert_flag` is set when the
/// certification was verified by the SBA or the issuing authority.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct CertificationRef {
    #[serde(default, deserialize_with = "crate::de::string")]
    pub cert_type: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "crate::de::flag")]
    pub cert_flag: Option<bool>,
}
