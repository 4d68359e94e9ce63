//! NAICS and PSC code lookups. These are reference lists: no page number is
//! sent and the page size defaults to 50.

use super::common::{push_filter, Query, QueryCommon};
use super::Resource;

const LOOKUP_PAGE_SIZE: u32 = 50;

fn lookup_common() -> QueryCommon {
    QueryCommon {
        page_size: LOOKUP_PAGE_SIZE,
        ..QueryCommon::default()
    }
}

/// Filters for `/naics/`. Partial codes match by prefix upstream.
#[derive(Clone, Debug)]
pub struct NaicsQuery {
    pub common: QueryCommon,
    pub naics_code: Option<String>,
}

impl Default for NaicsQuery {
    fn default() -> Self {
        Self {
            common: lookup_common(),
            naics_code: None,
        }
    }
}

impl Query for NaicsQuery {
    fn resource(&self) -> Resource {
        Resource::Naics
    }
    fn common(&self) -> &QueryCommon {
        &self.common
    }
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn filter_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_filter(&mut pairs, "naics_code", &self.naics_code);
        pairs
    }
    fn required_filters(&self) -> &'static [&'static str] {
        &["naics_code"]
    }
}

impl NaicsQuery {
    pub fn with_naics_code(mut self, naics_code: &str) -> Self {
        self.naics_code = Some(naics_code.to_string());
        self
    }
}

/// Filters for `/psc/`.
#[derive(Clone, Debug)]
pub struct PscQuery {
    pub common: QueryCommon,
    pub psc_code: Option<String>,
}

impl Default for PscQuery {
    fn default() -> Self {
        Self {
            common: lookup_common(),
            psc_code: None,
        }
    }
}

impl Query for PscQuery {
    fn resource(&self) -> Resource {
        Resource::Psc
    }
    fn common(&self) -> &QueryCommon {
        &self.common
    }
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn filter_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_filter(&mut pairs, "psc_code", &self.psc_code);
        pairs
    }
    fn required_filters(&self) -> &'static [&'static str] {
        &["psc_code"]
    }
}

impl PscQuery {
    pub fn with_psc_code(mut self, psc_code: &str) -> Self {
        self.psc_code = Some(psc_code.to_string());
        self
    }
}
