//! Uniform response envelopes.
//!
//! Paginated searches return a [`Page`], code lookups a [`Lookup`]. Both
//! serialize their record list under the resource's plural key, e.g.
//! `{"total_count": 137, "page": 3, "page_size": 25, "opportunities": [...]}`.

use highergov_api::types::PaginatedResponse;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// A normalized record type and the key its list is published under.
pub trait Record: Serialize {
    const PLURAL: &'static str;
}

/// One page of normalized records.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<R> {
    /// Upstream's total match count, `0` when it did not send one.
    pub total_count: i64,
    /// The page number the caller asked for.
    pub page: u32,
    /// The page size actually requested upstream, after clamping.
    pub page_size: u32,
    /// Set when the call was refused before reaching the API.
    pub error: Option<String>,
    pub records: Vec<R>,
}

impl<R> Page<R> {
    pub fn from_response<T>(response: PaginatedResponse<T>, page: u32, page_size: u32) -> Self
    where
        R: From<T>,
    {
        Self {
            total_count: response.total_count(),
            page,
            page_size,
            error: None,
            records: response.results.into_iter().map(R::from).collect(),
        }
    }

    /// An empty page carrying the reason the call was refused.
    pub fn rejected(page: u32, page_size: u32, error: impl ToString) -> Self {
        Self {
            total_count: 0,
            page,
            page_size,
            error: Some(error.to_string()),
            records: Vec::new(),
        }
    }

    pub fn is_rejected(&self) -> bool {
        self.error.is_some()
    }
}

impl<R: Record> Serialize for Page<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.error.is_some() { 5 } else { 4 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("total_count", &self.total_count)?;
        map.serialize_entry("page", &self.page)?;
        map.serialize_entry("page_size", &self.page_size)?;
        if let Some(error) = &self.error {
            map.serialize_entry("error", error)?;
        }
        map.serialize_entry(R::PLURAL, &self.records)?;
        map.end()
    }
}

/// Result of a code lookup. Lookups are not paginated.
#[derive(Debug, Clone, PartialEq)]
pub struct Lookup<R> {
    pub error: Option<String>,
    pub records: Vec<R>,
}

impl<R> Lookup<R> {
    pub fn from_response<T>(response: PaginatedResponse<T>) -> Self
    where
        R: From<T>,
    {
        Self {
            error: None,
            records: response.results.into_iter().map(R::from).collect(),
        }
    }

    pub fn rejected(error: impl ToString) -> Self {
        Self {
            error: Some(error.to_string()),
            records: Vec::new(),
        }
    }

    pub fn is_rejected(&self) -> bool {
        self.error.is_some()
    }
}

impl<R: Record> Serialize for Lookup<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.error.is_some() { 2 } else { 1 };
        let mut map = serializer.serialize_map(Some(len))?;
        if let Some(error) = &self.error {
            map.serialize_entry("error", error)?;
        }
        map.serialize_entry(R::PLURAL, &self.records)?;
        map.end()
    }
}
