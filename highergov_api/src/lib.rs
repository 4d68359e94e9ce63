mod client;
mod de;
mod errors;
mod query;
pub mod types;
pub use self::client::{Client, DEFAULT_BASE_URL};
pub use self::errors::Error;
pub use self::query::{
    AgencyQuery, AwardeeQuery, ContractQuery, DocumentQuery, Fallback, GrantQuery, NaicsQuery,
    OpportunityQuery, PeopleQuery, PscQuery, Query, QueryCommon, Resource, VehicleQuery,
    DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
