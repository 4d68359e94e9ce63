//! Projection of raw upstream records into flat, stable shapes.
//!
//! Each resource gets a `From<RawRecord>` impl. Nested references are
//! resolved per field through [`Nested`]: an object yields its sub-fields, a
//! bare scalar is taken as the field's primary value and an absent reference
//! leaves every dependent output field `None`.

mod award;
mod awardee;
mod code;
mod directory;
mod opportunity;

pub use self::award::{Contract, Grant};
pub use self::awardee::{Address, Awardee, Certification};
pub use self::code::{NaicsCode, PscCode};
pub use self::directory::{Agency, Document, Person, Vehicle, DOWNLOAD_URL_VALIDITY};
pub use self::opportunity::Opportunity;

use highergov_api::types::{AgencyRef, ContactRef, Nested, NaicsRef, PscRef};

/// Joins the present name parts with a single space. Blank parts are
/// skipped, so the result never has a stray separator; `None` when nothing
/// is left.
pub fn join_name(first: Option<&str>, last: Option<&str>) -> Option<String> {
    let joined = [first, last]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if joined.is_empty() {
        None
    } else {
        Some(joined)
    }
}

/// Splits certifications into SBA-verified and self-declared labels, in list
/// order. Every certification lands in exactly one of the two lists.
pub fn bucket_certifications(certifications: &[Certification]) -> (Vec<String>, Vec<String>) {
    let mut sba = Vec::new();
    let mut self_certified = Vec::new();
    for cert in certifications {
        let label = cert.label().to_string();
        if cert.sba_certified {
            sba.push(label);
        } else {
            self_certified.push(label);
        }
    }
    (sba, self_certified)
}

fn contact_name(contact: &ContactRef) -> Option<String> {
    join_name(
        contact.contact_first_name.as_deref(),
        contact.contact_last_name.as_deref(),
    )
    .or_else(|| contact.contact_name.clone())
}

fn agency_name(agency: &Nested<AgencyRef>) -> Option<String> {
    agency.primary(|a| a.agency_name.clone())
}

fn agency_key(agency: &Nested<AgencyRef>) -> Option<String> {
    agency.field(|a| a.agency_key.clone())
}

fn naics_codes(list: &[Nested<NaicsRef>]) -> Vec<String> {
    list.iter()
        .filter_map(|n| n.primary(|o| o.naics_code.clone()))
        .collect()
}

fn psc_codes(list: &[Nested<PscRef>]) -> Vec<String> {
    list.iter()
        .filter_map(|n| n.primary(|o| o.psc_code.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_name_skips_blank_parts() {
        assert_eq!(join_name(Some(""), Some("Smith")).as_deref(), Some("Smith"));
        assert_eq!(join_name(Some("Ada"), None).as_deref(), Some("Ada"));
        assert_eq!(
            join_name(Some(" Ada "), Some("Lovelace")).as_deref(),
            Some("Ada Lovelace")
        );
        assert_eq!(join_name(Some(""), Some("")), None);
        assert_eq!(join_name(Some("  "), None), None);
        assert_eq!(join_name(None, None), None);
    }

    #[test]
    fn contact_name_prefers_parts() {
        let contact = ContactRef {
            contact_first_name: Some("Jane".into()),
            contact_last_name: Some("Doe".into()),
            contact_name: Some("J. Doe".into()),
            ..Default::default()
        };
        assert_eq!(contact_name(&contact).as_deref(), Some("Jane Doe"));

        let only_full = ContactRef {
            contact_name: Some("J. Doe".into()),
            ..Default::default()
        };
        assert_eq!(contact_name(&only_full).as_deref(), Some("J. Doe"));
    }

    #[test]
    fn code_lists_resolve_each_shape() {
        let list = vec![
            Nested::Object(NaicsRef {
                naics_code: Some("541512".into()),
                naics_description: None,
            }),
            Nested::Scalar("541511".into()),
            Nested::Absent,
            Nested::Object(NaicsRef::default()),
        ];
        assert_eq!(naics_codes(&list), vec!["541512", "541511"]);
        assert_eq!(psc_codes(&[Nested::Scalar("D399".into())]), vec!["D399"]);
    }

    #[test]
    fn certifications_partition_by_flag() {
        let certs = vec![
            Certification {
                cert_type: None,
                description: Some("HUBZone".into()),
                sba_certified: true,
            },
            Certification {
                cert_type: None,
                description: Some("WOSB".into()),
                sba_certified: false,
            },
        ];
        let (sba, self_certified) = bucket_certifications(&certs);
        assert_eq!(sba, vec!["HUBZone"]);
        assert_eq!(self_certified, vec!["WOSB"]);
    }
}
