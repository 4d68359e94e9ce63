use serde::Deserialize;

use super::{AddressRef, AgencyRef, ContactRef, NaicsRef, Nested, PscRef};

/// Opportunity record as returned by `/opportunity/`.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct OpportunityRecord {
    #[serde(default, deserialize_with = "crate::de::string")]
    pub opp_key: Option<String>,
    /// Identity under its older, spelled-out name.
    #[serde(default, deserialize_with = "crate::de::string")]
    pub opportunity_key: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub description_text: Option<String>,

    #[serde(default)]
    pub agency: Nested<AgencyRef>,
    /// Flat agency name sent by older API revisions instead of `agency`.
    #[serde(default, deserialize_with = "crate::de::string")]
    pub agency_name: Option<String>,

    #[serde(default, deserialize_with = "crate::de::string")]
    pub source_type: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub source_id: Option<String>,

    #[serde(default, deserialize_with = "crate::de::date")]
    pub posted_date: Option<String>,
    #[serde(default, deserialize_with = "crate::de::date")]
    pub captured_date: Option<String>,
    #[serde(default, deserialize_with = "crate::de::date")]
    pub due_date: Option<String>,

    #[serde(default)]
    pub naics_code: Nested<NaicsRef>,
    #[serde(default)]
    pub psc_code: Nested<PscRef>,
    #[serde(default, deserialize_with = "crate::de::nested_list")]
    pub naics_codes: Vec<Nested<NaicsRef>>,
    #[serde(default, deserialize_with = "crate::de::nested_list")]
    pub psc_codes: Vec<Nested<PscRef>>,

    #[serde(default, deserialize_with = "crate::de::string")]
    pub set_aside: Option<String>,
    #[serde(default, deserialize_with = "crate::de::number")]
    pub val_est_low: Option<f64>,
    #[serde(default, deserialize_with = "crate::de::number")]
    pub val_est_high: Option<f64>,
    /// Single point estimate sent instead of the low/high range.
    #[serde(default, deserialize_with = "crate::de::number")]
    pub estimated_value: Option<f64>,

    #[serde(default, deserialize_with = "crate::de::string")]
    pub pop_state: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub pop_city: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub pop_zip: Option<String>,
    /// Grouped place of performance: an address object or a bare state.
    #[serde(default)]
    pub place_of_performance: Nested<AddressRef>,

    /// Either a contact object or just the contact's email address.
    #[serde(default)]
    pub primary_contact_email: Nested<ContactRef>,

    /// HigherGov page for the opportunity.
    #[serde(default, deserialize_with = "crate::de::string")]
    pub path: Option<String>,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub url: Option<String>,
    /// Original posting (SAM.gov, grants.gov, ...).
    #[serde(default, deserialize_with = "crate::de::string")]
    pub source_path: Option<String>,
    /// Key used to fetch attachments from `/document/`.
    #[serde(default, deserialize_with = "crate::de::string")]
    pub document_path: Option<String>,
}
