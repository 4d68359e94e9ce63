//! Adapter layer over the HigherGov API: filter policy, record
//! normalization, response envelopes and the operation catalog.
//!
//! Wraps the raw `highergov_api` crate. Each operation translates a filter
//! set, makes exactly one upstream call, flattens the records into a stable
//! shape and wraps them with pagination metadata.

pub mod config;
pub mod envelope;
pub mod error;
pub mod normalize;
pub mod operations;
pub mod translate;

pub use highergov_api;
pub use highergov_api::{
    AgencyQuery, AwardeeQuery, ContractQuery, DocumentQuery, GrantQuery, NaicsQuery,
    OpportunityQuery, PeopleQuery, PscQuery, Query, VehicleQuery,
};

pub use config::{Config, ConfigError};
pub use envelope::{Lookup, Page, Record};
pub use error::HigherGovError;
pub use operations::HigherGov;
pub use translate::{MissingFilter, MissingFilterPolicy};
