use serde::Deserialize;

use super::{AgencyRef, NaicsRef, Nested, PscRef};

/// Contract vehicle (GWAC, BPA, IDIQ, ...) as returned by `/vehicle/`.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct VehicleRecord {
    #[serde(default, deserialize_with = "crate::de::string")]
    pub vehicle_key: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub abbreviation: Option<String>,

    #[serde(default)]
    pub agency: Nested<AgencyRef>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub agency_name: Option<String>,

    #[serde(default, deserialize_with = "crate::de::string")]
    pub vehicle_type: Option<String>,
    #[serde(default, deserialize_with = "crate::de::number")]
    pub ceiling: Option<f64>,

    #[serde(default, deserialize_with = "crate::de::date")]
    pub ordering_period_start_date: Option<String>,
    #[serde(default, deserialize_with = "crate::de::date")]
    pub ordering_period_end_date: Option<String>,
    #[serde(default, deserialize_with = "crate::de::date")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "crate::de::date")]
    pub end_date: Option<String>,

    #[serde(default, deserialize_with = "crate::de::nested_list")]
    pub naics_codes: Vec<Nested<NaicsRef>>,
    #[serde(default, deserialize_with = "crate::de::nested_list")]
    pub psc_codes: Vec<Nested<PscRef>>,
}
