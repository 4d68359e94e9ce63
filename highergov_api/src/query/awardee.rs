use chrono::NaiveDate;

use super::common::{iso_day, push_filter, Fallback, Query, QueryCommon};
use super::Resource;

const REQUIRED: &[&str] = &[
    "cage_code",
    "uei",
    "awardee_key_parent",
    "primary_naics",
    "registration_last_update_date_min",
    "registration_last_update_date_max",
];

/// Filters for `/awardee/`.
#[derive(Clone, Debug, Default)]
pub struct AwardeeQuery {
    pub common: QueryCommon,
    pub cage_code: Option<String>,
    pub uei: Option<String>,
    /// Restricts results to subsidiaries of this parent awardee.
    pub awardee_key_parent: Option<String>,
    pub primary_naics: Option<String>,
    pub registration_last_update_date_min: Option<String>,
    pub registration_last_update_date_max: Option<String>,
}

impl Query for AwardeeQuery {
    fn resource(&self) -> Resource {
        Resource::Awardee
    }
    fn common(&self) -> &QueryCommon {
        &self.common
    }
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn filter_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_filter(&mut pairs, "cage_code", &self.cage_code);
        push_filter(&mut pairs, "uei", &self.uei);
        push_filter(&mut pairs, "awardee_key_parent", &self.awardee_key_parent);
        push_filter(&mut pairs, "primary_naics", &self.primary_naics);
        push_filter(
            &mut pairs,
            "registration_last_update_date__gte",
            &self.registration_last_update_date_min,
        );
        push_filter(
            &mut pairs,
            "registration_last_update_date__lte",
            &self.registration_last_update_date_max,
        );
        pairs
    }
    fn required_filters(&self) -> &'static [&'static str] {
        REQUIRED
    }
    fn default_ordering(&self) -> Option<&'static str> {
        Some("-registration_last_update_date")
    }
    fn apply_fallback(&mut self, today: NaiveDate) -> Fallback {
        self.registration_last_update_date_min = Some(iso_day(today));
        Fallback::DefaultedDate
    }
}

impl AwardeeQuery {
    pub fn with_cage_code(mut self, cage_code: &str) -> Self {
        self.cage_code = Some(cage_code.to_string());
        self
    }
    pub fn with_uei(mut self, uei: &str) -> Self {
        self.uei = Some(uei.to_string());
        self
    }
    pub fn with_awardee_key_parent(mut self, awardee_key_parent: &str) -> Self {
        self.awardee_key_parent = Some(awardee_key_parent.to_string());
        self
    }
    pub fn with_primary_naics(mut self, primary_naics: &str) -> Self {
        self.primary_naics = Some(primary_naics.to_string());
        self
    }
    pub fn with_registration_last_update_date_min(mut self, date: &str) -> Self {
        self.registration_last_update_date_min = Some(date.to_string());
        self
    }
    pub fn with_registration_last_update_date_max(mut self, date: &str) -> Self {
        self.registration_last_update_date_max = Some(date.to_string());
        self
    }
}
