//! CLI subcommand implementations.

pub mod awardees;
pub mod awards;
pub mod codes;
pub mod directory;
pub mod opportunities;

use clap::Args;
use highergov_lib::Query;

/// Paging and ordering flags shared by every paginated search.
#[derive(Args)]
pub struct PageArgs {
    /// Page number
    #[arg(long, default_value = "1")]
    pub page: u32,

    /// Results per page (at most 100)
    #[arg(long, default_value = "25")]
    pub page_size: u32,

    /// Upstream ordering, e.g. -captured_date
    #[arg(long)]
    pub ordering: Option<String>,
}

impl PageArgs {
    pub fn apply<Q: Query>(&self, query: Q) -> Q {
        let query = query.with_page(self.page).with_page_size(self.page_size);
        match self.ordering {
            Some(ref ordering) => query.with_ordering(ordering),
            None => query,
        }
    }
}
