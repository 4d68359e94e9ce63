mod meta;
pub use self::meta::{Meta, PaginatedResponse};

mod nested;
pub use self::nested::Nested;

mod refs;
pub use self::refs::{AddressRef, AgencyRef, AwardeeRef, CertificationRef, ContactRef, NaicsRef, PscRef};

mod opportunity;
pub use self::opportunity::OpportunityRecord;

mod award;
pub use self::award::{ContractRecord, GrantRecord};

mod awardee;
pub use self::awardee::AwardeeRecord;

mod agency;
pub use self::agency::AgencyRecord;

mod vehicle;
pub use self::vehicle::VehicleRecord;

mod person;
pub use self::person::PersonRecord;

mod document;
pub use self::document::DocumentRecord;

mod code;
pub use self::code::{NaicsRecord, PscRecord};
