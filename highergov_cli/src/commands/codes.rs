use anyhow::Result;
use clap::Args;
use highergov_lib::{HigherGov, NaicsQuery, PscQuery, Query};

use crate::output::{build_naics_rows, build_psc_rows, print_lookup, OutputFormat};

#[derive(Args)]
pub struct NaicsArgs {
    /// Full or partial NAICS code
    #[arg(long)]
    pub code: Option<String>,

    /// Maximum codes to return (at most 100)
    #[arg(long, default_value = "50")]
    pub limit: u32,
}

pub async fn run_naics(args: &NaicsArgs, hg: &HigherGov, format: &OutputFormat) -> Result<()> {
    let mut query = NaicsQuery::default().with_page_size(args.limit);
    if let Some(ref code) = args.code {
        query = query.with_naics_code(code);
    }

    let lookup = hg.lookup_naics(query).await?;
    print_lookup(&lookup, format, build_naics_rows)
}

#[derive(Args)]
pub struct PscArgs {
    /// Full or partial product/service code
    #[arg(long)]
    pub code: Option<String>,

    /// Maximum codes to return (at most 100)
    #[arg(long, default_value = "50")]
    pub limit: u32,
}

pub async fn run_psc(args: &PscArgs, hg: &HigherGov, format: &OutputFormat) -> Result<()> {
    let mut query = PscQuery::default().with_page_size(args.limit);
    if let Some(ref code) = args.code {
        query = query.with_psc_code(code);
    }

    let lookup = hg.lookup_psc(query).await?;
    print_lookup(&lookup, format, build_psc_rows)
}
