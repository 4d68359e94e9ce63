use anyhow::Result;
use clap::Args;
use highergov_lib::{ContractQuery, GrantQuery, HigherGov};

use super::PageArgs;
use crate::output::{build_contract_rows, build_grant_rows, print_page, OutputFormat};

#[derive(Args)]
pub struct ContractsArgs {
    /// Saved search ID from highergov.com
    #[arg(long)]
    pub search_id: Option<String>,

    /// Award (PIID) identifier
    #[arg(long)]
    pub award_id: Option<String>,

    /// Filter by awardee key
    #[arg(long)]
    pub awardee_key: Option<String>,

    /// NAICS code, e.g. 541512
    #[arg(long)]
    pub naics_code: Option<String>,

    /// Product/service code, e.g. D399
    #[arg(long)]
    pub psc_code: Option<String>,

    /// Modified on or after (YYYY-MM-DD)
    #[arg(long)]
    pub last_modified_date_min: Option<String>,

    /// Modified on or before (YYYY-MM-DD)
    #[arg(long)]
    pub last_modified_date_max: Option<String>,

    #[command(flatten)]
    pub paging: PageArgs,
}

pub async fn run_contracts(
    args: &ContractsArgs,
    hg: &HigherGov,
    format: &OutputFormat,
) -> Result<()> {
    let mut query = args.paging.apply(ContractQuery::default());

    if let Some(ref search_id) = args.search_id {
        query = query.with_search_id(search_id);
    }
    if let Some(ref award_id) = args.award_id {
        query = query.with_award_id(award_id);
    }
    if let Some(ref awardee_key) = args.awardee_key {
        query = query.with_awardee_key(awardee_key);
    }
    if let Some(ref naics_code) = args.naics_code {
        query = query.with_naics_code(naics_code);
    }
    if let Some(ref psc_code) = args.psc_code {
        query = query.with_psc_code(psc_code);
    }
    if let Some(ref date) = args.last_modified_date_min {
        query = query.with_last_modified_date_min(date);
    }
    if let Some(ref date) = args.last_modified_date_max {
        query = query.with_last_modified_date_max(date);
    }

    let page = hg.search_contracts(query).await?;
    print_page(&page, format, build_contract_rows)
}

#[derive(Args)]
pub struct GrantsArgs {
    /// Saved search ID from highergov.com
    #[arg(long)]
    pub search_id: Option<String>,

    /// Award (FAIN) identifier
    #[arg(long)]
    pub award_id: Option<String>,

    /// Filter by awardee key
    #[arg(long)]
    pub awardee_key: Option<String>,

    /// Assistance listing (CFDA) number, e.g. 47.070
    #[arg(long)]
    pub cfda_program_number: Option<String>,

    /// Modified on or after (YYYY-MM-DD)
    #[arg(long)]
    pub last_modified_date_min: Option<String>,

    /// Modified on or before (YYYY-MM-DD)
    #[arg(long)]
    pub last_modified_date_max: Option<String>,

    #[command(flatten)]
    pub paging: PageArgs,
}

pub async fn run_grants(args: &GrantsArgs, hg: &HigherGov, format: &OutputFormat) -> Result<()> {
    let mut query = args.paging.apply(GrantQuery::default());

    if let Some(ref search_id) = args.search_id {
        query = query.with_search_id(search_id);
    }
    if let Some(ref award_id) = args.award_id {
        query = query.with_award_id(award_id);
    }
    if let Some(ref awardee_key) = args.awardee_key {
        query = query.with_awardee_key(awardee_key);
    }
    if let Some(ref cfda) = args.cfda_program_number {
        query = query.with_cfda_program_number(cfda);
    }
    if let Some(ref date) = args.last_modified_date_min {
        query = query.with_last_modified_date_min(date);
    }
    if let Some(ref date) = args.last_modified_date_max {
        query = query.with_last_modified_date_max(date);
    }

    let page = hg.search_grants(query).await?;
    print_page(&page, format, build_grant_rows)
}
