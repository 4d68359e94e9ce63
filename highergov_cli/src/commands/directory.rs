use anyhow::Result;
use clap::Args;
use highergov_lib::{AgencyQuery, DocumentQuery, HigherGov, PeopleQuery, VehicleQuery};

use super::PageArgs;
use crate::output::{
    build_agency_rows, build_document_rows, build_person_rows, build_vehicle_rows, print_page,
    OutputFormat,
};

#[derive(Args)]
pub struct DocumentsArgs {
    /// opp_key or document_path of the opportunity
    #[arg(long)]
    pub related_key: Option<String>,

    #[command(flatten)]
    pub paging: PageArgs,
}

pub async fn run_documents(
    args: &DocumentsArgs,
    hg: &HigherGov,
    format: &OutputFormat,
) -> Result<()> {
    let mut query = args.paging.apply(DocumentQuery::default());
    if let Some(ref related_key) = args.related_key {
        query = query.with_related_key(related_key);
    }

    let page = hg.get_documents(query).await?;
    print_page(&page, format, build_document_rows)
}

#[derive(Args)]
pub struct AgenciesArgs {
    #[arg(long)]
    pub agency_key: Option<String>,

    /// Agency level, e.g. Department or Sub-Agency
    #[arg(long)]
    pub agency_type: Option<String>,

    #[command(flatten)]
    pub paging: PageArgs,
}

pub async fn run_agencies(
    args: &AgenciesArgs,
    hg: &HigherGov,
    format: &OutputFormat,
) -> Result<()> {
    let mut query = args.paging.apply(AgencyQuery::default());
    if let Some(ref agency_key) = args.agency_key {
        query = query.with_agency_key(agency_key);
    }
    if let Some(ref agency_type) = args.agency_type {
        query = query.with_agency_type(agency_type);
    }

    let page = hg.search_agencies(query).await?;
    print_page(&page, format, build_agency_rows)
}

#[derive(Args)]
pub struct VehiclesArgs {
    #[arg(long)]
    pub vehicle_key: Option<String>,

    /// Sponsoring agency key
    #[arg(long)]
    pub agency_key: Option<String>,

    #[command(flatten)]
    pub paging: PageArgs,
}

pub async fn run_vehicles(
    args: &VehiclesArgs,
    hg: &HigherGov,
    format: &OutputFormat,
) -> Result<()> {
    let mut query = args.paging.apply(VehicleQuery::default());
    if let Some(ref vehicle_key) = args.vehicle_key {
        query = query.with_vehicle_key(vehicle_key);
    }
    if let Some(ref agency_key) = args.agency_key {
        query = query.with_agency_key(agency_key);
    }

    let page = hg.search_contract_vehicles(query).await?;
    print_page(&page, format, build_vehicle_rows)
}

#[derive(Args)]
pub struct PeopleArgs {
    #[arg(long)]
    pub contact_email: Option<String>,

    #[arg(long)]
    pub agency_key: Option<String>,

    #[command(flatten)]
    pub paging: PageArgs,
}

pub async fn run_people(args: &PeopleArgs, hg: &HigherGov, format: &OutputFormat) -> Result<()> {
    let mut query = args.paging.apply(PeopleQuery::default());
    if let Some(ref email) = args.contact_email {
        query = query.with_contact_email(email);
    }
    if let Some(ref agency_key) = args.agency_key {
        query = query.with_agency_key(agency_key);
    }

    let page = hg.search_people(query).await?;
    print_page(&page, format, build_person_rows)
}
