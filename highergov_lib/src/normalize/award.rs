//! Contract and grant awards. Both carry an awarding agency and an awardee
//! reference that may be nested or flattened onto the record.

use highergov_api::types::{AwardeeRef, ContractRecord, GrantRecord, Nested};
use serde::Serialize;

use super::{agency_key, agency_name};
use crate::envelope::Record;

#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct Contract {
    pub contract_key: Option<String>,
    pub award_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub agency_key: Option<String>,
    pub agency_name: Option<String>,
    pub awardee_key: Option<String>,
    pub awardee_name: Option<String>,
    pub awardee_uei: Option<String>,
    pub awardee_cage: Option<String>,
    pub obligated_amount: Option<f64>,
    pub potential_value: Option<f64>,
    pub ceiling_value: Option<f64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub naics_code: Option<String>,
    pub psc_code: Option<String>,
    pub pop_state: Option<String>,
    pub pop_city: Option<String>,
    pub pop_zip: Option<String>,
    pub contract_type: Option<String>,
    pub set_aside: Option<String>,
    pub last_modified_date: Option<String>,
}

impl Record for Contract {
    const PLURAL: &'static str = "contracts";
}

impl From<ContractRecord> for Contract {
    fn from(raw: ContractRecord) -> Self {
        let awardee = &raw.awardee;
        Self {
            contract_key: raw.contract_key,
            award_id: raw.award_id,
            title: raw.title,
            description: raw.description,
            agency_key: agency_key(&raw.awarding_agency),
            agency_name: agency_name(&raw.awarding_agency).or(raw.agency_name),
            awardee_key: awardee.field(|a| a.awardee_key.clone()),
            awardee_name: awardee_name(awardee).or(raw.awardee_name),
            awardee_uei: awardee.field(|a| a.uei.clone()).or(raw.awardee_uei),
            awardee_cage: awardee.field(|a| a.cage_code.clone()).or(raw.awardee_cage),
            obligated_amount: raw.obligated_amount,
            potential_value: raw.potential_value,
            ceiling_value: raw.ceiling_value,
            start_date: raw.period_of_performance_start_date.or(raw.start_date),
            end_date: raw.period_of_performance_current_end_date.or(raw.end_date),
            naics_code: raw.naics_code.primary(|n| n.naics_code.clone()),
            psc_code: raw.psc_code.primary(|p| p.psc_code.clone()),
            pop_state: raw.pop_state.or(raw.place_of_performance_state),
            pop_city: raw.pop_city,
            pop_zip: raw.pop_zip,
            contract_type: raw.contract_type,
            set_aside: raw.set_aside,
            last_modified_date: raw.last_modified_date,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct Grant {
    pub grant_key: Option<String>,
    pub award_id: Option<String>,
    pub title: Option<String>,
    pub agency_key: Option<String>,
    pub agency_name: Option<String>,
    pub awardee_key: Option<String>,
    pub awardee_name: Option<String>,
    pub awardee_uei: Option<String>,
    pub obligated_amount: Option<f64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub cfda_number: Option<String>,
    pub cfda_title: Option<String>,
    pub pop_state: Option<String>,
    pub pop_city: Option<String>,
    pub pop_zip: Option<String>,
    pub last_modified_date: Option<String>,
}

impl Record for Grant {
    const PLURAL: &'static str = "grants";
}

impl From<GrantRecord> for Grant {
    fn from(raw: GrantRecord) -> Self {
        let awardee = &raw.awardee;
        Self {
            grant_key: raw.grant_key,
            award_id: raw.award_id,
            title: raw.title,
            agency_key: agency_key(&raw.awarding_agency),
            agency_name: agency_name(&raw.awarding_agency).or(raw.agency_name),
            awardee_key: awardee.field(|a| a.awardee_key.clone()),
            awardee_name: awardee_name(awardee).or(raw.awardee_name),
            awardee_uei: awardee.field(|a| a.uei.clone()).or(raw.awardee_uei),
            obligated_amount: raw.obligated_amount,
            start_date: raw.period_of_performance_start_date.or(raw.start_date),
            end_date: raw.period_of_performance_current_end_date.or(raw.end_date),
            cfda_number: raw.cfda_program_number,
            cfda_title: raw.cfda_program_title,
            pop_state: raw.pop_state.or(raw.place_of_performance_state),
            pop_city: raw.pop_city,
            pop_zip: raw.pop_zip,
            last_modified_date: raw.last_modified_date,
        }
    }
}

fn awardee_name(awardee: &Nested<AwardeeRef>) -> Option<String> {
    awardee.primary(AwardeeRef::name)
}
