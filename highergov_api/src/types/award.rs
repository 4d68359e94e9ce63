//! Contract and grant awards. The two share most of their shape.

use serde::Deserialize;

use super::{AgencyRef, AwardeeRef, NaicsRef, Nested, PscRef};

/// Contract award as returned by `/contract/`.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ContractRecord {
    #[serde(default, deserialize_with = "crate::de::string")]
    pub contract_key: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub award_id: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub description: Option<String>,

    #[serde(default)]
    pub awarding_agency: Nested<AgencyRef>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub agency_name: Option<String>,

    #[serde(default)]
    pub awardee: Nested<AwardeeRef>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub awardee_name: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub awardee_uei: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub awardee_cage: Option<String>,

    #[serde(default, deserialize_with = "crate::de::number")]
    pub obligated_amount: Option<f64>,
    #[serde(default, deserialize_with = "crate::de::number")]
    pub potential_value: Option<f64>,
    #[serde(default, deserialize_with = "crate::de::number")]
    pub ceiling_value: Option<f64>,

    #[serde(default, deserialize_with = "crate::de::date")]
    pub period_of_performance_start_date: Option<String>,
    #[serde(default, deserialize_with = "crate::de::date")]
    pub period_of_performance_current_end_date: Option<String>,
    #[serde(default, deserialize_with = "crate::de::date")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "crate::de::date")]
    pub end_date: Option<String>,

    /// Object with `naics_code` or the bare code string.
    #[serde(default)]
    pub naics_code: Nested<NaicsRef>,
    /// Object with `psc_code` or the bare code string.
    #[serde(default)]
    pub psc_code: Nested<PscRef>,

    #[serde(default, deserialize_with = "crate::de::string")]
    pub pop_state: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub place_of_performance_state: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub pop_city: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub pop_zip: Option<String>,

    #[serde(default, deserialize_with = "crate::de::string")]
    pub contract_type: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub set_aside: Option<String>,
    #[serde(default, deserialize_with = "crate::de::date")]
    pub last_modified_date: Option<String>,
}

/// Grant award as returned by `/grant/`.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct GrantRecord {
    #[serde(default, deserialize_with = "crate::de::string")]
    pub grant_key: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub award_id: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub title: Option<String>,

    #[serde(default)]
    pub awarding_agency: Nested<AgencyRef>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub agency_name: Option<String>,

    #[serde(default)]
    pub awardee: Nested<AwardeeRef>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub awardee_name: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub awardee_uei: Option<String>,

    #[serde(default, deserialize_with = "crate::de::number")]
    pub obligated_amount: Option<f64>,

    #[serde(default, deserialize_with = "crate::de::date")]
    pub period_of_performance_start_date: Option<String>,
    #[serde(default, deserialize_with = "crate::de::date")]
    pub period_of_performance_current_end_date: Option<String>,
    #[serde(default, deserialize_with = "crate::de::date")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "crate::de::date")]
    pub end_date: Option<String>,

    #[serde(default, deserialize_with = "crate::de::string")]
    pub cfda_program_number: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub cfda_program_title: Option<String>,

    #[serde(default, deserialize_with = "crate::de::string")]
    pub pop_state: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub place_of_performance_state: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub pop_city: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub pop_zip: Option<String>,

    #[serde(default, deserialize_with = "crate::de::date")]
    pub last_modified_date: Option<String>,
}
