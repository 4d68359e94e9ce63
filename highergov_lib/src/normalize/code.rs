use highergov_api::types::{NaicsRecord, PscRecord};
use serde::Serialize;

use crate::envelope::Record;

#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct NaicsCode {
    pub naics_code: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl Record for NaicsCode {
    const PLURAL: &'static str = "naics_codes";
}

impl From<NaicsRecord> for NaicsCode {
    fn from(raw: NaicsRecord) -> Self {
        Self {
            naics_code: raw.naics_code,
            title: raw.title,
            description: raw.description,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct PscCode {
    pub psc_code: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl Record for PscCode {
    const PLURAL: &'static str = "psc_codes";
}

impl From<PscRecord> for PscCode {
    fn from(raw: PscRecord) -> Self {
        Self {
            psc_code: raw.psc_code,
            title: raw.title,
            description: raw.description,
        }
    }
}
