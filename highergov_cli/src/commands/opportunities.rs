use anyhow::Result;
use clap::Args;
use highergov_lib::{HigherGov, OpportunityQuery};

use super::PageArgs;
use crate::output::{build_opportunity_rows, print_page, OutputFormat};

#[derive(Args)]
pub struct OpportunitiesArgs {
    /// Saved search ID from highergov.com
    #[arg(long)]
    pub search_id: Option<String>,

    /// Filter by agency key
    #[arg(long)]
    pub agency_key: Option<String>,

    /// Source system, e.g. sam_gov or grants_gov
    #[arg(long)]
    pub source_type: Option<String>,

    /// Captured on or after (YYYY-MM-DD)
    #[arg(long)]
    pub captured_date_min: Option<String>,

    /// Captured on or before (YYYY-MM-DD)
    #[arg(long)]
    pub captured_date_max: Option<String>,

    /// Posted on or after (YYYY-MM-DD)
    #[arg(long)]
    pub posted_date_min: Option<String>,

    /// Posted on or before (YYYY-MM-DD)
    #[arg(long)]
    pub posted_date_max: Option<String>,

    #[command(flatten)]
    pub paging: PageArgs,
}

pub async fn run(args: &OpportunitiesArgs, hg: &HigherGov, format: &OutputFormat) -> Result<()> {
    let mut query = args.paging.apply(OpportunityQuery::default());

    if let Some(ref search_id) = args.search_id {
        query = query.with_search_id(search_id);
    }
    if let Some(ref agency_key) = args.agency_key {
        query = query.with_agency_key(agency_key);
    }
    if let Some(ref source_type) = args.source_type {
        query = query.with_source_type(source_type);
    }
    if let Some(ref date) = args.captured_date_min {
        query = query.with_captured_date_min(date);
    }
    if let Some(ref date) = args.captured_date_max {
        query = query.with_captured_date_max(date);
    }
    if let Some(ref date) = args.posted_date_min {
        query = query.with_posted_date_min(date);
    }
    if let Some(ref date) = args.posted_date_max {
        query = query.with_posted_date_max(date);
    }

    let page = hg.search_opportunities(query).await?;
    print_page(&page, format, build_opportunity_rows)
}
