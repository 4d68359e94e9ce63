//! Queries for contract and grant awards.

use chrono::NaiveDate;

use super::common::{iso_day, push_filter, Fallback, Query, QueryCommon};
use super::Resource;

const CONTRACT_REQUIRED: &[&str] = &[
    "search_id",
    "award_id",
    "awardee_key",
    "naics_code",
    "psc_code",
    "last_modified_date_min",
    "last_modified_date_max",
];

const GRANT_REQUIRED: &[&str] = &[
    "search_id",
    "award_id",
    "awardee_key",
    "cfda_program_number",
    "last_modified_date_min",
    "last_modified_date_max",
];

/// Filters for `/contract/`.
#[derive(Clone, Debug, Default)]
pub struct ContractQuery {
    pub common: QueryCommon,
    pub search_id: Option<String>,
    /// Award identifier (PIID).
    pub award_id: Option<String>,
    pub awardee_key: Option<String>,
    pub naics_code: Option<String>,
    pub psc_code: Option<String>,
    pub last_modified_date_min: Option<String>,
    pub last_modified_date_max: Option<String>,
}

impl Query for ContractQuery {
    fn resource(&self) -> Resource {
        Resource::Contract
    }
    fn common(&self) -> &QueryCommon {
        &self.common
    }
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn filter_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_filter(&mut pairs, "search_id", &self.search_id);
        push_filter(&mut pairs, "award_id", &self.award_id);
        push_filter(&mut pairs, "awardee_key", &self.awardee_key);
        push_filter(&mut pairs, "naics_code", &self.naics_code);
        push_filter(&mut pairs, "psc_code", &self.psc_code);
        push_filter(
            &mut pairs,
            "last_modified_date__gte",
            &self.last_modified_date_min,
        );
        push_filter(
            &mut pairs,
            "last_modified_date__lte",
            &self.last_modified_date_max,
        );
        pairs
    }
    fn required_filters(&self) -> &'static [&'static str] {
        CONTRACT_REQUIRED
    }
    fn default_ordering(&self) -> Option<&'static str> {
        Some("-last_modified_date")
    }
    fn apply_fallback(&mut self, today: NaiveDate) -> Fallback {
        self.last_modified_date_min = Some(iso_day(today));
        Fallback::DefaultedDate
    }
}

impl ContractQuery {
    pub fn with_search_id(mut self, search_id: &str) -> Self {
        self.search_id = Some(search_id.to_string());
        self
    }
    pub fn with_award_id(mut self, award_id: &str) -> Self {
        self.award_id = Some(award_id.to_string());
        self
    }
    pub fn with_awardee_key(mut self, awardee_key: &str) -> Self {
        self.awardee_key = Some(awardee_key.to_string());
        self
    }
    pub fn with_naics_code(mut self, naics_code: &str) -> Self {
        self.naics_code = Some(naics_code.to_string());
        self
    }
    pub fn with_psc_code(mut self, psc_code: &str) -> Self {
        self.psc_code = Some(psc_code.to_string());
        self
    }
    pub fn with_last_modified_date_min(mut self, date: &str) -> Self {
        self.last_modified_date_min = Some(date.to_string());
        self
    }
    pub fn with_last_modified_date_max(mut self, date: &str) -> Self {
        self.last_modified_date_max = Some(date.to_string());
        self
    }
}

/// Filters for `/grant/`.
#[derive(Clone, Debug, Default)]
pub struct GrantQuery {
    pub common: QueryCommon,
    pub search_id: Option<String>,
    pub award_id: Option<String>,
    pub awardee_key: Option<String>,
    /// Assistance Listing (CFDA) number, e.g. `93.859`.
    pub cfda_program_number: Option<String>,
    pub last_modified_date_min: Option<String>,
    pub last_modified_date_max: Option<String>,
}

impl Query for GrantQuery {
    fn resource(&self) -> Resource {
        Resource::Grant
    }
    fn common(&self) -> &QueryCommon {
        &self.common
    }
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn filter_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_filter(&mut pairs, "search_id", &self.search_id);
        push_filter(&mut pairs, "award_id", &self.award_id);
        push_filter(&mut pairs, "awardee_key", &self.awardee_key);
        push_filter(&mut pairs, "cfda_program_number", &self.cfda_program_number);
        push_filter(
            &mut pairs,
            "last_modified_date__gte",
            &self.last_modified_date_min,
        );
        push_filter(
            &mut pairs,
            "last_modified_date__lte",
            &self.last_modified_date_max,
        );
        pairs
    }
    fn required_filters(&self) -> &'static [&'static str] {
        GRANT_REQUIRED
    }
    fn default_ordering(&self) -> Option<&'static str> {
        Some("-last_modified_date")
    }
    fn apply_fallback(&mut self, today: NaiveDate) -> Fallback {
        self.last_modified_date_min = Some(iso_day(today));
        Fallback::DefaultedDate
    }
}

impl GrantQuery {
    pub fn with_search_id(mut self, search_id: &str) -> Self {
        self.search_id = Some(search_id.to_string());
        self
    }
    pub fn with_award_id(mut self, award_id: &str) -> Self {
        self.award_id = Some(award_id.to_string());
        self
    }
    pub fn with_awardee_key(mut self, awardee_key: &str) -> Self {
        self.awardee_key = Some(awardee_key.to_string());
        self
    }
    pub fn with_cfda_program_number(mut self, cfda_program_number: &str) -> Self {
        self.cfda_program_number = Some(cfda_program_number.to_string());
        self
    }
    pub fn with_last_modified_date_min(mut self, date: &str) -> Self {
        self.last_modified_date_min = Some(date.to_string());
        self
    }
    pub fn with_last_modified_date_max(mut self, date: &str) -> Self {
        self.last_modified_date_max = Some(date.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::query::{ContractQuery, Fallback, GrantQuery, Query};

    #[test]
    fn contract_range_filters_use_operator_suffixes() {
        let pairs = ContractQuery::default()
            .with_naics_code("541512")
            .with_last_modified_date_min("2024-01-01")
            .with_last_modified_date_max("2024-02-01")
            .filter_pairs();
        assert_eq!(
            pairs,
            vec![
                ("naics_code", "541512".to_string()),
                ("last_modified_date__gte", "2024-01-01".to_string()),
                ("last_modified_date__lte", "2024-02-01".to_string()),
            ]
        );
    }

    #[test]
    fn grant_defaults() {
        let pairs = GrantQuery::default()
            .with_cfda_program_number("93.859")
            .to_query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("cfda_program_number".to_string(), "93.859".to_string()),
                ("ordering".to_string(), "-last_modified_date".to_string()),
                ("page_number".to_string(), "1".to_string()),
                ("page_size".to_string(), "25".to_string()),
            ]
        );
    }

    #[test]
    fn award_fallbacks_default_last_modified() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 9).unwrap();

        let mut contract = ContractQuery::default();
        assert_eq!(contract.apply_fallback(today), Fallback::DefaultedDate);
        assert_eq!(contract.last_modified_date_min.as_deref(), Some("2025-01-09"));

        let mut grant = GrantQuery::default();
        assert_eq!(grant.apply_fallback(today), Fallback::DefaultedDate);
        assert_eq!(grant.last_modified_date_min.as_deref(), Some("2025-01-09"));
    }
}
