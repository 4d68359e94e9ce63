mod commands;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use highergov_lib::{Config, HigherGov};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "highergov")]
#[command(about = "Search federal procurement data from HigherGov")]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value = "table", global = true)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search contract opportunities
    Opportunities(commands::opportunities::OpportunitiesArgs),
    /// Search contract awards
    Contracts(commands::awards::ContractsArgs),
    /// Search grant awards
    Grants(commands::awards::GrantsArgs),
    /// Search awardee (vendor) profiles
    Awardees(commands::awardees::AwardeesArgs),
    /// List documents attached to an opportunity
    Documents(commands::directory::DocumentsArgs),
    /// Search federal agencies
    Agencies(commands::directory::AgenciesArgs),
    /// Search contract vehicles
    Vehicles(commands::directory::VehiclesArgs),
    /// Search government contacts
    People(commands::directory::PeopleArgs),
    /// Look up NAICS codes
    Naics(commands::codes::NaicsArgs),
    /// Look up product/service codes
    Psc(commands::codes::PscArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("highergov=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = Config::from_env().context("failed to load configuration")?;
    let hg = HigherGov::from_config(&config)?;
    let format = &cli.output;

    match &cli.command {
        Commands::Opportunities(args) => commands::opportunities::run(args, &hg, format).await?,
        Commands::Contracts(args) => commands::awards::run_contracts(args, &hg, format).await?,
        Commands::Grants(args) => commands::awards::run_grants(args, &hg, format).await?,
        Commands::Awardees(args) => commands::awardees::run(args, &hg, format).await?,
        Commands::Documents(args) => commands::directory::run_documents(args, &hg, format).await?,
        Commands::Agencies(args) => commands::directory::run_agencies(args, &hg, format).await?,
        Commands::Vehicles(args) => commands::directory::run_vehicles(args, &hg, format).await?,
        Commands::People(args) => commands::directory::run_people(args, &hg, format).await?,
        Commands::Naics(args) => commands::codes::run_naics(args, &hg, format).await?,
        Commands::Psc(args) => commands::codes::run_psc(args, &hg, format).await?,
    }

    Ok(())
}
