//! Awardee (vendor) profiles: identity, addresses, classification codes,
//! certifications and the SAM registration lifecycle.

use highergov_api::types::{AddressRef, AwardeeRecord, AwardeeRef, CertificationRef, Nested};
use serde::Serialize;

use super::{bucket_certifications, contact_name, naics_codes, psc_codes};
use crate::envelope::Record;

#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct Address {
    pub line_1: Option<String>,
    pub line_2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub country: Option<String>,
}

impl Address {
    /// A bare string address is kept as the first line.
    fn resolve(nested: &Nested<AddressRef>) -> Option<Address> {
        match nested {
            Nested::Object(a) => Some(Address {
                line_1: a.address_line_1.clone(),
                line_2: a.address_line_2.clone(),
                city: a.city.clone(),
                state: a.state.clone(),
                zip: a.zip.clone(),
                country: a.country.clone(),
            }),
            Nested::Scalar(line) => Some(Address {
                line_1: Some(line.clone()),
                ..Default::default()
            }),
            Nested::Absent => None,
        }
    }

    /// Address assembled from the top-level fields of older records. `None`
    /// when none of them is present.
    fn from_flat(raw: &AwardeeRecord) -> Option<Address> {
        let address = Address {
            line_1: raw.address.clone(),
            line_2: None,
            city: raw.city.clone(),
            state: raw.state.clone(),
            zip: raw.zip.clone(),
            country: raw.country.clone(),
        };
        if address == Address::default() {
            None
        } else {
            Some(address)
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Certification {
    pub cert_type: Option<String>,
    pub description: Option<String>,
    /// Verified by the SBA or the issuing authority. Unflagged entries count
    /// as self-certified.
    pub sba_certified: bool,
}

impl Certification {
    /// Entries with neither a type nor a description carry nothing and are
    /// dropped.
    fn resolve(nested: &Nested<CertificationRef>) -> Option<Certification> {
        match nested {
            Nested::Object(c) if c.description.is_some() || c.cert_type.is_some() => {
                Some(Certification {
                    cert_type: c.cert_type.clone(),
                    description: c.description.clone(),
                    sba_certified: c.cert_flag.unwrap_or(false),
                })
            }
            Nested::Scalar(description) => Some(Certification {
                cert_type: None,
                description: Some(description.clone()),
                sba_certified: false,
            }),
            _ => None,
        }
    }

    /// Description, or the certification type when there is none.
    pub fn label(&self) -> &str {
        self.description
            .as_deref()
            .or(self.cert_type.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct Awardee {
    pub awardee_key: Option<String>,
    pub legal_name: Option<String>,
    pub clean_name: Option<String>,
    pub dba_name: Option<String>,
    pub cage_code: Option<String>,
    pub uei: Option<String>,
    pub duns: Option<String>,
    pub physical_address: Option<Address>,
    pub mailing_address: Option<Address>,
    pub year_founded: Option<i64>,
    pub employee_count: Option<i64>,
    pub entity_type: Option<String>,
    pub organization_type: Option<String>,
    pub primary_naics: Option<String>,
    pub naics_codes: Vec<String>,
    pub psc_codes: Vec<String>,
    pub certifications: Vec<Certification>,
    pub sba_certifications: Vec<String>,
    pub self_certifications: Vec<String>,
    pub small_business: Option<bool>,
    pub woman_owned: Option<bool>,
    pub veteran_owned: Option<bool>,
    pub minority_owned: Option<bool>,
    #[serde(rename = "8a_certified")]
    pub eight_a_certified: Option<bool>,
    pub hubzone: Option<bool>,
    pub sdvosb: Option<bool>,
    pub total_awards: Option<i64>,
    pub total_obligated: Option<f64>,
    pub parent_awardee_key: Option<String>,
    pub parent_name: Option<String>,
    pub registration_date: Option<String>,
    pub registration_last_update_date: Option<String>,
    pub registration_expiration_date: Option<String>,
    pub poc_name: Option<String>,
    pub poc_title: Option<String>,
    pub poc_email: Option<String>,
    pub poc_phone: Option<String>,
}

impl Record for Awardee {
    const PLURAL: &'static str = "awardees";
}

impl From<AwardeeRecord> for Awardee {
    fn from(raw: AwardeeRecord) -> Self {
        let certifications: Vec<Certification> = raw
            .certifications
            .iter()
            .filter_map(Certification::resolve)
            .collect();
        let (sba_certifications, self_certifications) = bucket_certifications(&certifications);
        let parent = &raw.parent_awardee;
        let poc = &raw.govt_bus_poc;
        let physical_address =
            Address::resolve(&raw.physical_address).or_else(|| Address::from_flat(&raw));

        Self {
            awardee_key: raw.awardee_key,
            legal_name: raw.legal_business_name.or(raw.name),
            clean_name: raw.clean_name,
            dba_name: raw.dba_name,
            cage_code: raw.cage_code,
            uei: raw.uei,
            duns: raw.duns,
            physical_address,
            mailing_address: Address::resolve(&raw.mailing_address),
            year_founded: raw.year_founded,
            employee_count: raw.employee_count,
            entity_type: raw.entity_structure,
            organization_type: raw.organization_type,
            primary_naics: raw.primary_naics.primary(|n| n.naics_code.clone()),
            naics_codes: naics_codes(&raw.naics_codes),
            psc_codes: psc_codes(&raw.psc_codes),
            certifications,
            sba_certifications,
            self_certifications,
            small_business: raw.small_business,
            woman_owned: raw.woman_owned,
            veteran_owned: raw.veteran_owned,
            minority_owned: raw.minority_owned,
            eight_a_certified: raw.eight_a_certified,
            hubzone: raw.hubzone,
            sdvosb: raw.sdvosb,
            total_awards: raw.total_awards,
            total_obligated: raw.total_obligated,
            parent_awardee_key: parent
                .field(|p| p.awardee_key.clone())
                .or(raw.awardee_key_parent),
            parent_name: parent.primary(AwardeeRef::name),
            registration_date: raw.registration_date,
            registration_last_update_date: raw.registration_last_update_date,
            registration_expiration_date: raw.registration_expiration_date,
            poc_name: poc.primary(contact_name),
            poc_title: poc.field(|c| c.contact_title.clone()),
            poc_email: poc.field(|c| c.contact_email.clone()),
            poc_phone: poc.field(|c| c.contact_phone.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use highergov_api::types::{ContactRef, NaicsRef};

    use super::*;

    fn cert(description: &str, flag: Option<bool>) -> Nested<CertificationRef> {
        Nested::Object(CertificationRef {
            cert_type: None,
            description: Some(description.into()),
            cert_flag: flag,
        })
    }

    #[test]
    fn certifications_are_bucketed() {
        let raw = AwardeeRecord {
            certifications: vec![
                cert("HUBZone", Some(true)),
                cert("WOSB", Some(false)),
                cert("VOSB", None),
                Nested::Scalar("8(a)".into()),
                Nested::Absent,
            ],
            ..Default::default()
        };
        let awardee = Awardee::from(raw);
        assert_eq!(awardee.certifications.len(), 4);
        assert_eq!(awardee.sba_certifications, vec!["HUBZone"]);
        assert_eq!(awardee.self_certifications, vec!["WOSB", "VOSB", "8(a)"]);
    }

    #[test]
    fn certification_without_description_uses_type() {
        let raw = AwardeeRecord {
            certifications: vec![Nested::Object(CertificationRef {
                cert_type: Some("SDB".into()),
                description: None,
                cert_flag: Some(true),
            })],
            ..Default::default()
        };
        assert_eq!(Awardee::from(raw).sba_certifications, vec!["SDB"]);
    }

    #[test]
    fn addresses_and_codes() {
        let raw = AwardeeRecord {
            physical_address: Nested::Object(AddressRef {
                address_line_1: Some("1 Main St".into()),
                city: Some("Arlington".into()),
                state: Some("VA".into()),
                ..Default::default()
            }),
            mailing_address: Nested::Scalar("PO Box 12".into()),
            primary_naics: Nested::Scalar("541512".into()),
            naics_codes: vec![
                Nested::Object(NaicsRef {
                    naics_code: Some("541512".into()),
                    naics_description: None,
                }),
                Nested::Scalar("541519".into()),
            ],
            psc_codes: vec![Nested::Scalar("D399".into())],
            ..Default::default()
        };
        let awardee = Awardee::from(raw);
        let physical = awardee.physical_address.unwrap();
        assert_eq!(physical.city.as_deref(), Some("Arlington"));
        assert_eq!(physical.line_2, None);
        assert_eq!(
            awardee.mailing_address.unwrap().line_1.as_deref(),
            Some("PO Box 12")
        );
        assert_eq!(awardee.primary_naics.as_deref(), Some("541512"));
        assert_eq!(awardee.naics_codes, vec!["541512", "541519"]);
        assert_eq!(awardee.psc_codes, vec!["D399"]);
    }

    #[test]
    fn parent_and_point_of_contact() {
        let raw = AwardeeRecord {
            parent_awardee: Nested::Object(AwardeeRef {
                awardee_key: Some("p-1".into()),
                clean_name: Some("Parent Holdings".into()),
                ..Default::default()
            }),
            govt_bus_poc: Nested::Object(ContactRef {
                contact_first_name: Some("Lee".into()),
                contact_last_name: Some("".into()),
                contact_email: Some("lee@example.com".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let awardee = Awardee::from(raw);
        assert_eq!(awardee.parent_awardee_key.as_deref(), Some("p-1"));
        assert_eq!(awardee.parent_name.as_deref(), Some("Parent Holdings"));
        assert_eq!(awardee.poc_name.as_deref(), Some("Lee"));
        assert_eq!(awardee.poc_email.as_deref(), Some("lee@example.com"));
    }

    #[test]
    fn missing_parent_falls_back_to_flat_key() {
        let raw = AwardeeRecord {
            awardee_key_parent: Some("p-2".into()),
            ..Default::default()
        };
        let awardee = Awardee::from(raw);
        assert_eq!(awardee.parent_awardee_key.as_deref(), Some("p-2"));
        assert_eq!(awardee.parent_name, None);
        assert_eq!(awardee.physical_address, None);
        assert!(awardee.certifications.is_empty());
    }

    #[test]
    fn flat_address_fields_build_the_physical_address() {
        let raw = AwardeeRecord {
            address: Some("1 Main".into()),
            city: Some("Arlington".into()),
            state: Some("VA".into()),
            ..Default::default()
        };
        let physical = Awardee::from(raw).physical_address.unwrap();
        assert_eq!(physical.line_1.as_deref(), Some("1 Main"));
        assert_eq!(physical.city.as_deref(), Some("Arlington"));
        assert_eq!(physical.state.as_deref(), Some("VA"));
        assert_eq!(physical.zip, None);
    }

    #[test]
    fn nested_address_wins_over_flat_fields() {
        let raw = AwardeeRecord {
            physical_address: Nested::Scalar("2 Elm".into()),
            address: Some("1 Main".into()),
            ..Default::default()
        };
        let physical = Awardee::from(raw).physical_address.unwrap();
        assert_eq!(physical.line_1.as_deref(), Some("2 Elm"));
    }

    #[test]
    fn socioeconomic_flags_and_totals_are_projected() {
        let raw: AwardeeRecord = serde_json::from_str(
            r#"{
                "awardee_key": "V-1",
                "small_business": "Y",
                "woman_owned": true,
                "veteran_owned": 0,
                "8a_certified": "true",
                "hubzone": null,
                "total_awards": "42",
                "total_obligated": "$1,500,000.25"
            }"#,
        )
        .unwrap();
        let awardee = Awardee::from(raw);
        assert_eq!(awardee.small_business, Some(true));
        assert_eq!(awardee.woman_owned, Some(true));
        assert_eq!(awardee.veteran_owned, Some(false));
        assert_eq!(awardee.minority_owned, None);
        assert_eq!(awardee.eight_a_certified, Some(true));
        assert_eq!(awardee.hubzone, None);
        assert_eq!(awardee.total_awards, Some(42));
        assert_eq!(awardee.total_obligated, Some(1_500_000.25));

        let value = serde_json::to_value(&awardee).unwrap();
        assert_eq!(value["8a_certified"], true);
    }
}
