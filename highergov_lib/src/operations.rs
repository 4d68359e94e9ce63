//! The operation catalog.
//!
//! Every operation runs the same pipeline: apply the missing-filter policy,
//! make one upstream call, normalize each record and wrap the list in an
//! envelope. Operations share nothing but the immutable client and policy,
//! so a single [`HigherGov`] can serve any number of concurrent calls.

use std::future::Future;

use chrono::NaiveDate;
use highergov_api::types::PaginatedResponse;
use highergov_api::{
    AgencyQuery, AwardeeQuery, Client, ContractQuery, DocumentQuery, GrantQuery, NaicsQuery,
    OpportunityQuery, PeopleQuery, PscQuery, Query, VehicleQuery,
};

use crate::config::Config;
use crate::envelope::{Lookup, Page, Record};
use crate::error::HigherGovError;
use crate::normalize::{
    Agency, Awardee, Contract, Document, Grant, NaicsCode, Opportunity, Person, PscCode, Vehicle,
};
use crate::translate::{enforce, MissingFilter, MissingFilterPolicy};

pub struct HigherGov {
    client: Client,
    policy: MissingFilterPolicy,
}

impl HigherGov {
    pub fn new(client: Client, policy: MissingFilterPolicy) -> Self {
        Self { client, policy }
    }

    pub fn from_config(config: &Config) -> Result<Self, HigherGovError> {
        let client = Client::with_base_url(&config.base_url, &config.api_key)?;
        Ok(Self::new(client, config.missing_filter_policy))
    }

    pub fn policy(&self) -> MissingFilterPolicy {
        self.policy
    }

    pub async fn search_opportunities(
        &self,
        query: OpportunityQuery,
    ) -> Result<Page<Opportunity>, HigherGovError> {
        self.page(query, move |q| async move {
            self.client.get_opportunities(&q).await
        })
        .await
    }

    pub async fn search_contracts(
        &self,
        query: ContractQuery,
    ) -> Result<Page<Contract>, HigherGovError> {
        self.page(query, move |q| async move { self.client.get_contracts(&q).await })
            .await
    }

    pub async fn search_grants(&self, query: GrantQuery) -> Result<Page<Grant>, HigherGovError> {
        self.page(query, move |q| async move { self.client.get_grants(&q).await })
            .await
    }

    pub async fn search_awardees(
        &self,
        query: AwardeeQuery,
    ) -> Result<Page<Awardee>, HigherGovError> {
        self.page(query, move |q| async move { self.client.get_awardees(&q).await })
            .await
    }

    /// Documents attached to an opportunity. Download URLs in the result
    /// expire 60 minutes after this call.
    pub async fn get_documents(
        &self,
        query: DocumentQuery,
    ) -> Result<Page<Document>, HigherGovError> {
        self.page(query, move |q| async move { self.client.get_documents(&q).await })
            .await
    }

    pub async fn search_agencies(
        &self,
        query: AgencyQuery,
    ) -> Result<Page<Agency>, HigherGovError> {
        self.page(query, move |q| async move { self.client.get_agencies(&q).await })
            .await
    }

    pub async fn search_contract_vehicles(
        &self,
        query: VehicleQuery,
    ) -> Result<Page<Vehicle>, HigherGovError> {
        self.page(query, move |q| async move { self.client.get_vehicles(&q).await })
            .await
    }

    pub async fn search_people(
        &self,
        query: PeopleQuery,
    ) -> Result<Page<Person>, HigherGovError> {
        self.page(query, move |q| async move { self.client.get_people(&q).await })
            .await
    }

    pub async fn lookup_naics(
        &self,
        query: NaicsQuery,
    ) -> Result<Lookup<NaicsCode>, HigherGovError> {
        self.lookup(query, move |q| async move { self.client.get_naics(&q).await })
            .await
    }

    pub async fn lookup_psc(&self, query: PscQuery) -> Result<Lookup<PscCode>, HigherGovError> {
        self.lookup(query, move |q| async move { self.client.get_psc(&q).await })
            .await
    }

    fn prepare<Q: Query>(&self, query: Q) -> Result<Q, MissingFilter> {
        let resource = query.resource();
        tracing::debug!(%resource, policy = %self.policy, "invoking operation");
        enforce(query, self.policy, today()).map_err(|missing| {
            tracing::warn!(%resource, error = %missing, "rejected call without filters");
            missing
        })
    }

    async fn page<Q, T, R, F, Fut>(&self, query: Q, fetch: F) -> Result<Page<R>, HigherGovError>
    where
        Q: Query,
        R: Record + From<T>,
        F: FnOnce(Q) -> Fut,
        Fut: Future<Output = Result<PaginatedResponse<T>, highergov_api::Error>>,
    {
        let page = query.common().page_number;
        let page_size = query.common().effective_page_size();
        let query = match self.prepare(query) {
            Ok(query) => query,
            Err(missing) => return Ok(Page::rejected(page, page_size, missing)),
        };

        let response = fetch(query).await?;
        tracing::debug!(
            results = response.results.len(),
            total_count = response.total_count(),
            "fetched page"
        );
        Ok(Page::from_response(response, page, page_size))
    }

    async fn lookup<Q, T, R, F, Fut>(&self, query: Q, fetch: F) -> Result<Lookup<R>, HigherGovError>
    where
        Q: Query,
        R: Record + From<T>,
        F: FnOnce(Q) -> Fut,
        Fut: Future<Output = Result<PaginatedResponse<T>, highergov_api::Error>>,
    {
        let query = match self.prepare(query) {
            Ok(query) => query,
            Err(missing) => return Ok(Lookup::rejected(missing)),
        };

        let response = fetch(query).await?;
        tracing::debug!(results = response.results.len(), "fetched lookup");
        Ok(Lookup::from_response(response))
    }
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
