use serde::Deserialize;

use super::{AddressRef, AwardeeRef, CertificationRef, ContactRef, NaicsRef, Nested, PscRef};

/// Awardee (contractor / recipient) record as returned by `/awardee/`.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct AwardeeRecord {
    #[serde(default, deserialize_with = "crate::de::string")]
    pub awardee_key: Option<String>,

    #[serde(default, deserialize_with = "crate::de::string")]
    pub legal_business_name: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub clean_name: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub dba_name: Option<String>,
    /// Single display name sent by older API revisions.
    #[serde(default, deserialize_with = "crate::de::string")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "crate::de::string")]
    pub cage_code: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub uei: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub duns: Option<String>,

    #[serde(default)]
    pub physical_address: Nested<AddressRef>,
    #[serde(default)]
    pub mailing_address: Nested<AddressRef>,
    /// Flat address fields sent by older API revisions instead of
    /// `physical_address`.
    #[serde(default, deserialize_with = "crate::de::string")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub zip: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub country: Option<String>,

    #[serde(default, deserialize_with = "crate::de::integer")]
    pub year_founded: Option<i64>,
    #[serde(default, deserialize_with = "crate::de::integer")]
    pub employee_count: Option<i64>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub entity_structure: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub organization_type: Option<String>,

    #[serde(default)]
    pub primary_naics: Nested<NaicsRef>,
    #[serde(default, deserialize_with = "crate::de::nested_list")]
    pub naics_codes: Vec<Nested<NaicsRef>>,
    #[serde(default, deserialize_with = "crate::de::nested_list")]
    pub psc_codes: Vec<Nested<PscRef>>,

    #[serde(default, deserialize_with = "crate::de::nested_list")]
    pub certifications: Vec<Nested<CertificationRef>>,

    #[serde(default, deserialize_with = "crate::de::flag")]
    pub small_business: Option<bool>,
    #[serde(default, deserialize_with = "crate::de::flag")]
    pub woman_owned: Option<bool>,
    #[serde(default, deserialize_with = "crate::de::flag")]
    pub veteran_owned: Option<bool>,
    #[serde(default, deserialize_with = "crate::de::flag")]
    pub minority_owned: Option<bool>,
    #[serde(rename = "8a_certified", default, deserialize_with = "crate::de::flag")]
    pub eight_a_certified: Option<bool>,
    #[serde(default, deserialize_with = "crate::de::flag")]
    pub hubzone: Option<bool>,
    #[serde(default, deserialize_with = "crate::de::flag")]
    pub sdvosb: Option<bool>,

    #[serde(default, deserialize_with = "crate::de::integer")]
    pub total_awards: Option<i64>,
    #[serde(default, deserialize_with = "crate::de::number")]
    pub total_obligated: Option<f64>,

    #[serde(default)]
    pub parent_awardee: Nested<AwardeeRef>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub awardee_key_parent: Option<String>,

    #[serde(default, deserialize_with = "crate::de::date")]
    pub registration_date: Option<String>,
    #[serde(default, deserialize_with = "crate::de::date")]
    pub registration_last_update_date: Option<String>,
    #[serde(default, deserialize_with = "crate::de::date")]
    pub registration_expiration_date: Option<String>,

    /// Government business point of contact: object or bare name.
    #[serde(default)]
    pub govt_bus_poc: Nested<ContactRef>,
}
