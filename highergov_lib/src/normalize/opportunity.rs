use highergov_api::types::OpportunityRecord;
use serde::Serialize;

use super::{agency_key, agency_name, contact_name, naics_codes, psc_codes};
use crate::envelope::Record;

#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct Opportunity {
    pub opp_key: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub agency_key: Option<String>,
    pub agency_name: Option<String>,
    pub agency_abbreviation: Option<String>,
    pub source_type: Option<String>,
    pub source_id: Option<String>,
    pub posted_date: Option<String>,
    pub captured_date: Option<String>,
    pub due_date: Option<String>,
    pub naics_code: Option<String>,
    pub naics_description: Option<String>,
    pub psc_code: Option<String>,
    pub psc_description: Option<String>,
    pub naics_codes: Vec<String>,
    pub psc_codes: Vec<String>,
    pub set_aside: Option<String>,
    pub value_low: Option<f64>,
    pub value_high: Option<f64>,
    pub pop_state: Option<String>,
    pub pop_city: Option<String>,
    pub pop_zip: Option<String>,
    pub contact_name: Option<String>,
    pub contact_title: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    /// HigherGov page for the opportunity.
    pub url: Option<String>,
    /// Listing on the originating system (SAM, Grants.gov, ...).
    pub source_url: Option<String>,
    pub document_path: Option<String>,
}

impl Record for Opportunity {
    const PLURAL: &'static str = "opportunities";
}

impl From<OpportunityRecord> for Opportunity {
    fn from(raw: OpportunityRecord) -> Self {
        let contact = &raw.primary_contact_email;
        let place = &raw.place_of_performance;

        let mut all_naics = naics_codes(&raw.naics_codes);
        let naics_code = raw
            .naics_code
            .primary(|n| n.naics_code.clone())
            .or_else(|| all_naics.first().cloned());
        if all_naics.is_empty() {
            all_naics.extend(naics_code.clone());
        }
        let mut all_psc = psc_codes(&raw.psc_codes);
        let psc_code = raw
            .psc_code
            .primary(|p| p.psc_code.clone())
            .or_else(|| all_psc.first().cloned());
        if all_psc.is_empty() {
            all_psc.extend(psc_code.clone());
        }

        Self {
            opp_key: raw.opp_key.or(raw.opportunity_key),
            title: raw.title,
            description: raw.description_text,
            agency_key: agency_key(&raw.agency),
            agency_name: agency_name(&raw.agency).or(raw.agency_name),
            agency_abbreviation: raw.agency.field(|a| a.agency_abbreviation.clone()),
            source_type: raw.source_type,
            source_id: raw.source_id,
            posted_date: raw.posted_date,
            captured_date: raw.captured_date,
            due_date: raw.due_date,
            naics_code,
            naics_description: raw.naics_code.field(|n| n.naics_description.clone()),
            psc_code,
            psc_description: raw.psc_code.field(|p| p.psc_description.clone()),
            naics_codes: all_naics,
            psc_codes: all_psc,
            set_aside: raw.set_aside,
            value_low: raw.val_est_low.or(raw.estimated_value),
            value_high: raw.val_est_high.or(raw.estimated_value),
            pop_state: raw
                .pop_state
                .or_else(|| place.primary(|a| a.state.clone())),
            pop_city: raw.pop_city.or_else(|| place.field(|a| a.city.clone())),
            pop_zip: raw.pop_zip.or_else(|| place.field(|a| a.zip.clone())),
            contact_name: contact.field(contact_name),
            contact_title: contact.field(|c| c.contact_title.clone()),
            contact_email: contact.primary(|c| c.contact_email.clone()),
            contact_phone: contact.field(|c| c.contact_phone.clone()),
            url: raw.path.or(raw.url),
            source_url: raw.source_path,
            document_path: raw.document_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use highergov_api::types::{AddressRef, AgencyRef, ContactRef, Nested, NaicsRef};

    use super::*;

    #[test]
    fn resolves_nested_objects() {
        let raw = OpportunityRecord {
            opp_key: Some("opp-1".into()),
            agency: Nested::Object(AgencyRef {
                agency_key: Some("42".into()),
                agency_name: Some("Department of Energy".into()),
                agency_abbreviation: Some("DOE".into()),
                agency_type: None,
            }),
            naics_code: Nested::Object(NaicsRef {
                naics_code: Some("541512".into()),
                naics_description: Some("Computer Systems Design Services".into()),
            }),
            primary_contact_email: Nested::Object(ContactRef {
                contact_first_name: Some("".into()),
                contact_last_name: Some("Smith".into()),
                contact_email: Some("smith@example.gov".into()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let opp = Opportunity::from(raw);
        assert_eq!(opp.opp_key.as_deref(), Some("opp-1"));
        assert_eq!(opp.agency_key.as_deref(), Some("42"));
        assert_eq!(opp.agency_abbreviation.as_deref(), Some("DOE"));
        assert_eq!(opp.naics_code.as_deref(), Some("541512"));
        assert_eq!(
            opp.naics_description.as_deref(),
            Some("Computer Systems Design Services")
        );
        assert_eq!(opp.contact_name.as_deref(), Some("Smith"));
        assert_eq!(opp.contact_email.as_deref(), Some("smith@example.gov"));
        assert_eq!(opp.psc_code, None);
    }

    #[test]
    fn scalar_references_fill_primary_fields_only() {
        let raw = OpportunityRecord {
            agency: Nested::Scalar("Department of the Navy".into()),
            naics_code: Nested::Scalar("541512".into()),
            primary_contact_email: Nested::Scalar("buyer@navy.mil".into()),
            ..Default::default()
        };

        let opp = Opportunity::from(raw);
        assert_eq!(opp.agency_name.as_deref(), Some("Department of the Navy"));
        assert_eq!(opp.agency_key, None);
        assert_eq!(opp.naics_code.as_deref(), Some("541512"));
        assert_eq!(opp.naics_description, None);
        assert_eq!(opp.contact_email.as_deref(), Some("buyer@navy.mil"));
        assert_eq!(opp.contact_name, None);
    }

    #[test]
    fn flat_agency_name_is_a_fallback() {
        let raw = OpportunityRecord {
            agency_name: Some("GSA".into()),
            ..Default::default()
        };
        assert_eq!(Opportunity::from(raw).agency_name.as_deref(), Some("GSA"));
    }

    #[test]
    fn spelled_out_key_is_the_identity_fallback() {
        let raw: OpportunityRecord =
            serde_json::from_str(r#"{"opportunity_key": "OPP-9", "title": "Boots"}"#).unwrap();
        assert_eq!(Opportunity::from(raw).opp_key.as_deref(), Some("OPP-9"));

        let raw: OpportunityRecord =
            serde_json::from_str(r#"{"opp_key": "A", "opportunity_key": "B"}"#).unwrap();
        assert_eq!(Opportunity::from(raw).opp_key.as_deref(), Some("A"));
    }

    #[test]
    fn code_lists_fill_the_primary_codes() {
        let raw: OpportunityRecord = serde_json::from_str(
            r#"{"naics_codes": ["336411", {"naics_code": "336413"}], "psc_codes": "1510"}"#,
        )
        .unwrap();
        let opp = Opportunity::from(raw);
        assert_eq!(opp.naics_code.as_deref(), Some("336411"));
        assert_eq!(opp.naics_codes, vec!["336411", "336413"]);
        assert_eq!(opp.psc_code.as_deref(), Some("1510"));
        assert_eq!(opp.psc_codes, vec!["1510"]);
    }

    #[test]
    fn single_code_becomes_a_one_element_list() {
        let raw = OpportunityRecord {
            naics_code: Nested::Scalar("541512".into()),
            ..Default::default()
        };
        let opp = Opportunity::from(raw);
        assert_eq!(opp.naics_codes, vec!["541512"]);
        assert!(opp.psc_codes.is_empty());
    }

    #[test]
    fn point_estimate_fills_both_ends_of_the_range() {
        let raw = OpportunityRecord {
            estimated_value: Some(250_000.0),
            ..Default::default()
        };
        let opp = Opportunity::from(raw);
        assert_eq!(opp.value_low, Some(250_000.0));
        assert_eq!(opp.value_high, Some(250_000.0));

        let raw = OpportunityRecord {
            val_est_low: Some(10.0),
            estimated_value: Some(250_000.0),
            ..Default::default()
        };
        let opp = Opportunity::from(raw);
        assert_eq!(opp.value_low, Some(10.0));
        assert_eq!(opp.value_high, Some(250_000.0));
    }

    #[test]
    fn grouped_place_of_performance() {
        let raw = OpportunityRecord {
            place_of_performance: Nested::Object(AddressRef {
                city: Some("Norfolk".into()),
                state: Some("VA".into()),
                zip: Some("23511".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let opp = Opportunity::from(raw);
        assert_eq!(opp.pop_state.as_deref(), Some("VA"));
        assert_eq!(opp.pop_city.as_deref(), Some("Norfolk"));
        assert_eq!(opp.pop_zip.as_deref(), Some("23511"));

        let raw = OpportunityRecord {
            pop_city: Some("San Diego".into()),
            place_of_performance: Nested::Scalar("CA".into()),
            ..Default::default()
        };
        let opp = Opportunity::from(raw);
        assert_eq!(opp.pop_state.as_deref(), Some("CA"));
        assert_eq!(opp.pop_city.as_deref(), Some("San Diego"));
    }

    #[test]
    fn bare_url_is_a_fallback_for_path() {
        let raw = OpportunityRecord {
            url: Some("https://www.highergov.com/opportunity/x".into()),
            ..Default::default()
        };
        assert_eq!(
            Opportunity::from(raw).url.as_deref(),
            Some("https://www.highergov.com/opportunity/x")
        );
    }
}
