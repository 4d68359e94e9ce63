//! Missing-filter policy applied before a query reaches the transport.
//!
//! Every query type already knows how to render itself into upstream
//! parameters; this module decides what happens when the caller supplied no
//! semantic filter at all.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use highergov_api::{Fallback, Query, Resource};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Behaviour when a search arrives without any of its required filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingFilterPolicy {
    /// Fill the resource's primary date filter with today's date. Resources
    /// that can be listed unfiltered are sent as-is.
    #[default]
    DefaultToToday,
    /// Refuse the call and report which filters were expected.
    Reject,
}

impl FromStr for MissingFilterPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" | "default_to_today" | "default-to-today" | "today" => {
                Ok(MissingFilterPolicy::DefaultToToday)
            }
            "reject" => Ok(MissingFilterPolicy::Reject),
            other => Err(format!("unknown missing-filter policy: {}", other)),
        }
    }
}

impl fmt::Display for MissingFilterPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingFilterPolicy::DefaultToToday => f.write_str("default"),
            MissingFilterPolicy::Reject => f.write_str("reject"),
        }
    }
}

/// A search was refused because none of the required filters were given.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "at least one of [{}] is required to search {}",
    .required.join(", "),
    .resource
)]
pub struct MissingFilter {
    pub resource: Resource,
    pub required: &'static [&'static str],
}

/// Applies `policy` to `query`. Queries that carry at least one filter pass
/// through untouched.
pub fn enforce<Q: Query>(
    mut query: Q,
    policy: MissingFilterPolicy,
    today: NaiveDate,
) -> Result<Q, MissingFilter> {
    if query.has_filters() {
        return Ok(query);
    }

    let missing = MissingFilter {
        resource: query.resource(),
        required: query.required_filters(),
    };

    match policy {
        MissingFilterPolicy::Reject => Err(missing),
        MissingFilterPolicy::DefaultToToday => match query.apply_fallback(today) {
            Fallback::DefaultedDate => {
                tracing::debug!(
                    resource = %missing.resource,
                    date = %today,
                    "no filters given, defaulting primary date filter"
                );
                Ok(query)
            }
            Fallback::Unbounded => Ok(query),
            Fallback::Unavailable => Err(missing),
        },
    }
}
