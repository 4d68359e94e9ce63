mod common;
pub use self::common::{Fallback, Query, QueryCommon, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

mod resource;
pub use self::resource::Resource;

mod opportunity;
pub use self::opportunity::OpportunityQuery;

mod award;
pub use self::award::{ContractQuery, GrantQuery};

mod awardee;
pub use self::awardee::AwardeeQuery;

mod directory;
pub use self::directory::{AgencyQuery, DocumentQuery, PeopleQuery, VehicleQuery};

mod code;
pub use self::code::{NaicsQuery, PscQuery};
