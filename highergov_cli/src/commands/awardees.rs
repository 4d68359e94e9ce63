use anyhow::Result;
use clap::Args;
use highergov_lib::{AwardeeQuery, HigherGov};

use super::PageArgs;
use crate::output::{build_awardee_rows, print_page, OutputFormat};

#[derive(Args)]
pub struct AwardeesArgs {
    /// CAGE code
    #[arg(long)]
    pub cage_code: Option<String>,

    /// Unique Entity Identifier
    #[arg(long)]
    pub uei: Option<String>,

    /// Key of the parent company
    #[arg(long)]
    pub awardee_key_parent: Option<String>,

    /// Primary NAICS code
    #[arg(long)]
    pub primary_naics: Option<String>,

    /// SAM registration updated on or after (YYYY-MM-DD)
    #[arg(long)]
    pub registration_updated_min: Option<String>,

    /// SAM registration updated on or before (YYYY-MM-DD)
    #[arg(long)]
    pub registration_updated_max: Option<String>,

    #[command(flatten)]
    pub paging: PageArgs,
}

pub async fn run(args: &AwardeesArgs, hg: &HigherGov, format: &OutputFormat) -> Result<()> {
    let mut query = args.paging.apply(AwardeeQuery::default());

    if let Some(ref cage_code) = args.cage_code {
        query = query.with_cage_code(cage_code);
    }
    if let Some(ref uei) = args.uei {
        query = query.with_uei(uei);
    }
    if let Some(ref parent) = args.awardee_key_parent {
        query = query.with_awardee_key_parent(parent);
    }
    if let Some(ref naics) = args.primary_naics {
        query = query.with_primary_naics(naics);
    }
    if let Some(ref date) = args.registration_updated_min {
        query = query.with_registration_last_update_date_min(date);
    }
    if let Some(ref date) = args.registration_updated_max {
        query = query.with_registration_last_update_date_max(date);
    }

    let page = hg.search_awardees(query).await?;
    print_page(&page, format, build_awardee_rows)
}
