use chrono::NaiveDate;

use super::common::{iso_day, push_filter, Fallback, Query, QueryCommon};
use super::Resource;

const REQUIRED: &[&str] = &[
    "search_id",
    "agency_key",
    "source_type",
    "captured_date_min",
    "captured_date_max",
    "posted_date_min",
    "posted_date_max",
];

/// Filters for `/opportunity/`. Dates are `YYYY-MM-DD` and are forwarded
/// without validation.
#[derive(Clone, Debug, Default)]
pub struct OpportunityQuery {
    pub common: QueryCommon,
    /// Saved search ID from highergov.com.
    pub search_id: Option<String>,
    pub agency_key: Option<String>,
    /// Source system, e.g. `sam_gov` or `grants_gov`.
    pub source_type: Option<String>,
    pub captured_date_min: Option<String>,
    pub captured_date_max: Option<String>,
    pub posted_date_min: Option<String>,
    pub posted_date_max: Option<String>,
}

impl Query for OpportunityQuery {
    fn resource(&self) -> Resource {
        Resource::Opportunity
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
        push_filter(&mut pairs, "agency_key", &self.agency_key);
        push_filter(&mut pairs, "source_type", &self.source_type);
        push_filter(&mut pairs, "captured_date__gte", &self.captured_date_min);
        push_filter(&mut pairs, "captured_date__lte", &self.captured_date_max);
        push_filter(&mut pairs, "posted_date__gte", &self.posted_date_min);
        push_filter(&mut pairs, "posted_date__lte", &self.posted_date_max);
        pairs
    }
    fn required_filters(&self) -> &'static [&'static str] {
        REQUIRED
    }
    fn default_ordering(&self) -> Option<&'static str> {
        Some("-captured_date")
    }
    fn apply_fallback(&mut self, today: NaiveDate) -> Fallback {
        self.captured_date_min = Some(iso_day(today));
        Fallback::DefaultedDate
    }
}

impl OpportunityQuery {
    pub fn with_search_id(mut self, search_id: &str) -> Self {
        self.search_id = Some(search_id.to_string());
        self
    }
    pub fn with_agency_key(mut self, agency_key: &str) -> Self {
        self.agency_key = Some(agency_key.to_string());
        self
    }
    pub fn with_source_type(mut self, source_type: &str) -> Self {
        self.source_type = Some(source_type.to_string());
        self
    }
    pub fn with_captured_date_min(mut self, date: &str) -> Self {
        self.captured_date_min = Some(date.to_string());
        self
    }
    pub fn with_captured_date_max(mut self, date: &str) -> Self {
        self.captured_date_max = Some(date.to_string());
        self
    }
    pub fn with_posted_date_min(mut self, date: &str) -> Self {
        self.posted_date_min = Some(date.to_string());
        self
    }
    pub fn with_posted_date_max(mut self, date: &str) -> Self {
        self.posted_date_max = Some(date.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::query::{Fallback, OpportunityQuery, Query};

    #[test]
    fn test_opportunity_query() {
        insta::assert_debug_snapshot!(OpportunityQuery::default()
            .with_agency_key("DOD")
            .with_captured_date_min("2024-01-01")
            .with_captured_date_max("2024-01-31")
            .with_page(2)
            .with_page_size(250)
            .to_query_pairs(), @r###"
        [
            (
                "agency_key",
                "DOD",
            ),
            (
                "captured_date__gte",
                "2024-01-01",
            ),
            (
                "captured_date__lte",
                "2024-01-31",
            ),
            (
                "ordering",
                "-captured_date",
            ),
            (
                "page_number",
                "2",
            ),
            (
                "page_size",
                "100",
            ),
        ]
        "###);
    }

    #[test]
    fn caller_ordering_wins_over_default() {
        let pairs = OpportunityQuery::default()
            .with_source_type("sam_gov")
            .with_ordering("due_date")
            .to_query_pairs();
        assert!(pairs.contains(&("ordering".to_string(), "due_date".to_string())));
        assert!(!pairs.iter().any(|(_, v)| v == "-captured_date"));
    }

    #[test]
    fn fallback_defaults_captured_date() {
        let mut query = OpportunityQuery::default();
        assert!(!query.has_filters());
        let today = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        assert_eq!(query.apply_fallback(today), Fallback::DefaultedDate);
        assert_eq!(query.captured_date_min.as_deref(), Some("2024-06-03"));
        assert!(query.has_filters());
    }
}
