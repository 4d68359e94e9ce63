//! HTTP client for the HigherGov external API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{
        AgencyQuery, AwardeeQuery, ContractQuery, DocumentQuery, GrantQuery, NaicsQuery,
        OpportunityQuery, PeopleQuery, PscQuery, Query, Resource, VehicleQuery,
    },
    types::{
        AgencyRecord, AwardeeRecord, ContractRecord, DocumentRecord, GrantRecord, NaicsRecord,
        OpportunityRecord, PaginatedResponse, PersonRecord, PscRecord, VehicleRecord,
    },
    Error,
};

/// Production endpoint. Every resource lives at `<base>/<resource>/`.
pub const DEFAULT_BASE_URL: &str = "https://www.highergov.com/api-external";

/// Hard ceiling for one round trip. Timed-out calls are not retried.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the HigherGov external API.
///
/// Holds one `reqwest::Client` and the API key, both read-only after
/// construction, so a single instance can serve concurrent calls. The key is
/// appended as the `api_key` query parameter on every request and is never
/// logged.
pub struct Client {
    http: reqwest::Client,
    /// Base URL for the API, without a trailing slash.
    base_api_url: String,
    api_key: String,
}

impl Client {
    /// Creates a client pointing at the production API.
    pub fn new(api_key: &str) -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        Ok(Self {
            http,
            base_api_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    fn get_url(&self, resource: Resource) -> Result<Url, Error> {
        Url::parse(format!("{}/{}/", self.base_api_url, resource.path()).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })
    }

    async fn get<T, Q>(&self, query: &Q) -> Result<PaginatedResponse<T>, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let mut url = self.get_url(query.resource())?;
        url.query_pairs_mut().extend_pairs(query.to_query_pairs());
        tracing::debug!(resource = %query.resource(), url = %url, "fetching");
        url.query_pairs_mut().append_pair("api_key", &self.api_key);

        let resp = self
            .http
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                // Strip the URL so the API key never reaches the logs.
                let e = e.without_url();
                if e.is_timeout() {
                    tracing::error!("Request to {} timed out: {}", query.resource(), e);
                    Error::Timeout
                } else {
                    tracing::error!("Failed to get {}: {}", query.resource(), e);
                    Error::RequestFailed
                }
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e.without_url());
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        serde_json::from_str::<PaginatedResponse<T>>(&body).map_err(|e| {
            tracing::error!(
                "Failed to parse {}: {} | body: {}",
                query.resource(),
                e,
                truncate_body(&body)
            );
            Error::Parse(e.to_string())
        })
    }

    /// Fetches a page of contract and grant opportunities.
    pub async fn get_opportunities(
        &self,
        query: &OpportunityQuery,
    ) -> Result<PaginatedResponse<OpportunityRecord>, Error> {
        self.get(query).await
    }

    /// Fetches a page of contract awards.
    pub async fn get_contracts(
        &self,
        query: &ContractQuery,
    ) -> Result<PaginatedResponse<ContractRecord>, Error> {
        self.get(query).await
    }

    /// Fetches a page of grant awards.
    pub async fn get_grants(
        &self,
        query: &GrantQuery,
    ) -> Result<PaginatedResponse<GrantRecord>, Error> {
        self.get(query).await
    }

    /// Fetches a page of awardees (contractors and grant recipients).
    pub async fn get_awardees(
        &self,
        query: &AwardeeQuery,
    ) -> Result<PaginatedResponse<AwardeeRecord>, Error> {
        self.get(query).await
    }

    /// Fetches a page of documents attached to an opportunity.
    pub async fn get_documents(
        &self,
        query: &DocumentQuery,
    ) -> Result<PaginatedResponse<DocumentRecord>, Error> {
        self.get(query).await
    }

    /// Fetches a page of federal agencies.
    pub async fn get_agencies(
        &self,
        query: &AgencyQuery,
    ) -> Result<PaginatedResponse<AgencyRecord>, Error> {
        self.get(query).await
    }

    /// Fetches a page of contract vehicles.
    pub async fn get_vehicles(
        &self,
        query: &VehicleQuery,
    ) -> Result<PaginatedResponse<VehicleRecord>, Error> {
        self.get(query).await
    }

    /// Fetches a page of government contacts.
    pub async fn get_people(
        &self,
        query: &PeopleQuery,
    ) -> Result<PaginatedResponse<PersonRecord>, Error> {
        self.get(query).await
    }

    /// Looks up NAICS codes.
    pub async fn get_naics(
        &self,
        query: &NaicsQuery,
    ) -> Result<PaginatedResponse<NaicsRecord>, Error> {
        self.get(query).await
    }

    /// Looks up product and service codes.
    pub async fn get_psc(&self, query: &PscQuery) -> Result<PaginatedResponse<PscRecord>, Error> {
        self.get(query).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
