//! Queries for the directory-style collections: agencies, contract vehicles,
//! people and opportunity documents. None of them has a date dimension.

use chrono::NaiveDate;

use super::common::{push_filter, Fallback, Query, QueryCommon};
use super::Resource;

/// Filters for `/agency/`.
#[derive(Clone, Debug, Default)]
pub struct AgencyQuery {
    pub common: QueryCommon,
    pub agency_key: Option<String>,
    pub agency_type: Option<String>,
}

impl Query for AgencyQuery {
    fn resource(&self) -> Resource {
        Resource::Agency
    }
    fn common(&self) -> &QueryCommon {
        &self.common
    }
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn filter_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_filter(&mut pairs, "agency_key", &self.agency_key);
        push_filter(&mut pairs, "agency_type", &self.agency_type);
        pairs
    }
    fn required_filters(&self) -> &'static [&'static str] {
        &["agency_key", "agency_type"]
    }
}

impl AgencyQuery {
    pub fn with_agency_key(mut self, agency_key: &str) -> Self {
        self.agency_key = Some(agency_key.to_string());
        self
    }
    pub fn with_agency_type(mut self, agency_type: &str) -> Self {
        self.agency_type = Some(agency_type.to_string());
        self
    }
}

/// Filters for `/vehicle/`.
#[derive(Clone, Debug, Default)]
pub struct VehicleQuery {
    pub common: QueryCommon,
    pub vehicle_key: Option<String>,
    /// Sponsoring agency.
    pub agency_key: Option<String>,
}

impl Query for VehicleQuery {
    fn resource(&self) -> Resource {
        Resource::Vehicle
    }
    fn common(&self) -> &QueryCommon {
        &self.common
    }
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn filter_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_filter(&mut pairs, "vehicle_key", &self.vehicle_key);
        push_filter(&mut pairs, "agency_key", &self.agency_key);
        pairs
    }
    fn required_filters(&self) -> &'static [&'static str] {
        &["vehicle_key", "agency_key"]
    }
}

impl VehicleQuery {
    pub fn with_vehicle_key(mut self, vehicle_key: &str) -> Self {
        self.vehicle_key = Some(vehicle_key.to_string());
        self
    }
    pub fn with_agency_key(mut self, agency_key: &str) -> Self {
        self.agency_key = Some(agency_key.to_string());
        self
    }
}

/// Filters for `/people/`.
#[derive(Clone, Debug, Default)]
pub struct PeopleQuery {
    pub common: QueryCommon,
    pub contact_email: Option<String>,
    pub agency_key: Option<String>,
}

impl Query for PeopleQuery {
    fn resource(&self) -> Resource {
        Resource::People
    }
    fn common(&self) -> &QueryCommon {
        &self.common
    }
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn filter_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_filter(&mut pairs, "contact_email", &self.contact_email);
        push_filter(&mut pairs, "agency_key", &self.agency_key);
        pairs
    }
    fn required_filters(&self) -> &'static [&'static str] {
        &["contact_email", "agency_key"]
    }
}

impl PeopleQuery {
    pub fn with_contact_email(mut self, contact_email: &str) -> Self {
        self.contact_email = Some(contact_email.to_string());
        self
    }
    pub fn with_agency_key(mut self, agency_key: &str) -> Self {
        self.agency_key = Some(agency_key.to_string());
        self
    }
}

/// Filters for `/document/`. Documents only make sense relative to an
/// opportunity, so there is no unfiltered listing.
#[derive(Clone, Debug, Default)]
pub struct DocumentQuery {
    pub common: QueryCommon,
    /// `opp_key` or `document_path` of the owning opportunity.
    pub related_key: Option<String>,
}

impl Query for DocumentQuery {
    fn resource(&self) -> Resource {
        Resource::Document
    }
    fn common(&self) -> &QueryCommon {
        &self.common
    }
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn filter_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_filter(&mut pairs, "related_key", &self.related_key);
        pairs
    }
    fn required_filters(&self) -> &'static [&'static str] {
        &["related_key"]
    }
    fn apply_fallback(&mut self, _today: NaiveDate) -> Fallback {
        Fallback::Unavailable
    }
}

impl DocumentQuery {
    pub fn with_related_key(mut self, related_key: &str) -> Self {
        self.related_key = Some(related_key.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::query::{AgencyQuery, DocumentQuery, Fallback, PeopleQuery, Query, VehicleQuery};

    #[test]
    fn directory_queries_have_no_default_ordering() {
        let pairs = AgencyQuery::default().to_query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("page_number".to_string(), "1".to_string()),
                ("page_size".to_string(), "25".to_string()),
            ]
        );
        assert!(VehicleQuery::default().default_ordering().is_none());
        assert!(PeopleQuery::default().default_ordering().is_none());
    }

    #[test]
    fn directory_fallbacks() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(AgencyQuery::default().apply_fallback(today), Fallback::Unbounded);
        assert_eq!(VehicleQuery::default().apply_fallback(today), Fallback::Unbounded);
        assert_eq!(PeopleQuery::default().apply_fallback(today), Fallback::Unbounded);
        assert_eq!(
            DocumentQuery::default().apply_fallback(today),
            Fallback::Unavailable
        );
    }

    #[test]
    fn people_filter_by_email() {
        let pairs = PeopleQuery::default()
            .with_contact_email("jane.doe@agency.gov")
            .filter_pairs();
        assert_eq!(pairs, vec![("contact_email", "jane.doe@agency.gov".to_string())]);
    }
}
