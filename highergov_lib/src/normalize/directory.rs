//! Directory-style resources: agencies, contract vehicles, people and
//! opportunity documents.

use highergov_api::types::{AgencyRecord, DocumentRecord, PersonRecord, VehicleRecord};
use serde::Serialize;

use super::{agency_key, agency_name, join_name, naics_codes, psc_codes};
use crate::envelope::Record;

/// How long a document download URL stays valid after it is issued.
pub const DOWNLOAD_URL_VALIDITY: &str = "60 minutes";

#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct Agency {
    pub agency_key: Option<String>,
    pub name: Option<String>,
    pub abbreviation: Option<String>,
    pub agency_type: Option<String>,
    pub parent_agency_key: Option<String>,
    pub parent_agency_name: Option<String>,
}

impl Record for Agency {
    const PLURAL: &'static str = "agencies";
}

impl From<AgencyRecord> for Agency {
    fn from(raw: AgencyRecord) -> Self {
        Self {
            agency_key: raw.agency_key,
            name: raw.agency_name.or(raw.name),
            abbreviation: raw.agency_abbreviation.or(raw.abbreviation),
            agency_type: raw.agency_type,
            parent_agency_key: agency_key(&raw.parent_agency),
            parent_agency_name: agency_name(&raw.parent_agency).or(raw.parent_agency_name),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct Vehicle {
    pub vehicle_key: Option<String>,
    pub name: Option<String>,
    pub abbreviation: Option<String>,
    pub agency_key: Option<String>,
    pub agency_name: Option<String>,
    pub vehicle_type: Option<String>,
    pub ceiling: Option<f64>,
    pub ordering_start_date: Option<String>,
    pub ordering_end_date: Option<String>,
    pub naics_codes: Vec<String>,
    pub psc_codes: Vec<String>,
}

impl Record for Vehicle {
    const PLURAL: &'static str = "vehicles";
}

impl From<VehicleRecord> for Vehicle {
    fn from(raw: VehicleRecord) -> Self {
        Self {
            vehicle_key: raw.vehicle_key,
            name: raw.name,
            abbreviation: raw.abbreviation,
            agency_key: agency_key(&raw.agency),
            agency_name: agency_name(&raw.agency).or(raw.agency_name),
            vehicle_type: raw.vehicle_type,
            ceiling: raw.ceiling,
            ordering_start_date: raw.ordering_period_start_date.or(raw.start_date),
            ordering_end_date: raw.ordering_period_end_date.or(raw.end_date),
            naics_codes: naics_codes(&raw.naics_codes),
            psc_codes: psc_codes(&raw.psc_codes),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct Person {
    pub person_key: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Full display name, built from the parts when they are present.
    pub name: Option<String>,
    pub title: Option<String>,
    pub agency_key: Option<String>,
    pub agency_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Record for Person {
    const PLURAL: &'static str = "people";
}

impl From<PersonRecord> for Person {
    fn from(raw: PersonRecord) -> Self {
        let name = join_name(raw.first_name.as_deref(), raw.last_name.as_deref()).or(raw.name);
        Self {
            person_key: raw.person_key.or(raw.people_key),
            first_name: raw.first_name,
            last_name: raw.last_name,
            name,
            title: raw.title,
            agency_key: agency_key(&raw.agency),
            agency_name: agency_name(&raw.agency).or(raw.agency_name),
            email: raw.email,
            phone: raw.phone,
        }
    }
}

/// A file attached to an opportunity. The download URL is short-lived and
/// passed through untouched.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Document {
    pub document_key: Option<String>,
    pub filename: Option<String>,
    pub file_type: Option<String>,
    pub file_size: Option<i64>,
    pub download_url: Option<String>,
    pub expires_in: &'static str,
}

impl Record for Document {
    const PLURAL: &'static str = "documents";
}

impl From<DocumentRecord> for Document {
    fn from(raw: DocumentRecord) -> Self {
        Self {
            document_key: raw.document_key,
            filename: raw.filename,
            file_type: raw.file_type,
            file_size: raw.file_size,
            download_url: raw.download_url,
            expires_in: DOWNLOAD_URL_VALIDITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use highergov_api::types::{AgencyRef, Nested};
    use serde_json::json;

    use super::*;

    #[test]
    fn agency_parent_as_object_or_name() {
        let nested = AgencyRecord {
            agency_key: Some("17".into()),
            agency_name: Some("Department of the Navy".into()),
            parent_agency: Nested::Object(AgencyRef {
                agency_key: Some("9".into()),
                agency_name: Some("Department of Defense".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let agency = Agency::from(nested);
        assert_eq!(agency.parent_agency_key.as_deref(), Some("9"));
        assert_eq!(
            agency.parent_agency_name.as_deref(),
            Some("Department of Defense")
        );

        let bare = AgencyRecord {
            name: Some("Army".into()),
            parent_agency: Nested::Scalar("Department of Defense".into()),
            ..Default::default()
        };
        let agency = Agency::from(bare);
        assert_eq!(agency.name.as_deref(), Some("Army"));
        assert_eq!(agency.parent_agency_key, None);
        assert_eq!(
            agency.parent_agency_name.as_deref(),
            Some("Department of Defense")
        );
    }

    #[test]
    fn vehicle_ordering_window() {
        let raw = VehicleRecord {
            vehicle_key: Some("v-1".into()),
            ordering_period_start_date: Some("2020-01-01".into()),
            end_date: Some("2030-01-01".into()),
            naics_codes: vec![Nested::Scalar("541512".into())],
            ..Default::default()
        };
        let vehicle = Vehicle::from(raw);
        assert_eq!(vehicle.ordering_start_date.as_deref(), Some("2020-01-01"));
        assert_eq!(vehicle.ordering_end_date.as_deref(), Some("2030-01-01"));
        assert_eq!(vehicle.naics_codes, vec!["541512"]);
        assert!(vehicle.psc_codes.is_empty());
    }

    #[test]
    fn person_name_is_joined() {
        let raw = PersonRecord {
            people_key: Some("p-3".into()),
            first_name: Some("".into()),
            last_name: Some("Smith".into()),
            ..Default::default()
        };
        let person = Person::from(raw);
        assert_eq!(person.person_key.as_deref(), Some("p-3"));
        assert_eq!(person.name.as_deref(), Some("Smith"));

        let nameless = Person::from(PersonRecord {
            first_name: Some("".into()),
            last_name: Some("".into()),
            ..Default::default()
        });
        assert_eq!(nameless.name, None);
    }

    #[test]
    fn document_carries_validity_notice() {
        let url = "https://files.example.com/doc.pdf?sig=abc&exp=123";
        let doc = Document::from(DocumentRecord {
            filename: Some("doc.pdf".into()),
            download_url: Some(url.into()),
            ..Default::default()
        });
        assert_eq!(doc.download_url.as_deref(), Some(url));
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["expires_in"], json!("60 minutes"));
        assert_eq!(value["download_url"], json!(url));
        assert!(value.get("expires_at").is_none());
    }
}
