//! Shared query infrastructure: the [`Query`] trait, [`QueryCommon`] paging
//! fields and the no-filter [`Fallback`].

use chrono::NaiveDate;

use super::Resource;

/// Largest page the API serves. Larger requests are clamped, not rejected.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Page size used when the caller does not set one.
pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// What a query did when asked to apply its safe default filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// The primary date filter now holds the given day.
    DefaultedDate,
    /// The resource can be listed without any filter.
    Unbounded,
    /// There is no safe default; the call has to be rejected.
    Unavailable,
}

/// Trait implemented by all query builders. Turns a semantic filter set into
/// the API's query-parameter dialect and provides the shared builder methods
/// for paging and ordering.
pub trait Query {
    /// Collection this query targets.
    fn resource(&self) -> Resource;

    /// Returns the common query fields.
    fn common(&self) -> &QueryCommon;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Present filters, renamed to upstream parameter names. Range bounds carry
    /// `__gte` / `__lte` suffixes. Absent filters are never emitted.
    fn filter_pairs(&self) -> Vec<(&'static str, String)>;

    /// Semantic names of the filters of which at least one must be present.
    fn required_filters(&self) -> &'static [&'static str];

    /// Ordering sent when the caller did not choose one.
    fn default_ordering(&self) -> Option<&'static str> {
        None
    }

    /// Applies the resource's safe default filter for a call made without any.
    fn apply_fallback(&mut self, _today: NaiveDate) -> Fallback {
        Fallback::Unbounded
    }

    /// True when at least one semantic filter is set.
    fn has_filters(&self) -> bool {
        !self.filter_pairs().is_empty()
    }

    /// Full parameter list ready for the transport: filters, ordering, paging.
    fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = self
            .filter_pairs()
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect();
        let ordering = self
            .common()
            .ordering
            .clone()
            .filter(|o| !o.trim().is_empty())
            .or_else(|| self.default_ordering().map(str::to_string));
        if let Some(ordering) = ordering {
            pairs.push(("ordering".to_string(), ordering));
        }
        pairs.extend(self.common().paging_pairs(!self.resource().is_lookup()));
        pairs
    }

    /// Sets the page number (1-indexed).
    fn with_page(mut self, page_number: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().page_number = page_number;
        self
    }

    /// Sets the number of results per page. Values above [`MAX_PAGE_SIZE`]
    /// are clamped when the query is serialized.
    fn with_page_size(mut self, page_size: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().page_size = page_size;
        self
    }

    /// Sets the upstream ordering, e.g. `-captured_date` for newest first.
    fn with_ordering(mut self, ordering: &str) -> Self
    where
        Self: Sized,
    {
        self.get_common().ordering = Some(ordering.to_string());
        self
    }
}

/// Fields shared by all query types: paging and ordering.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryCommon {
    /// Page number (1-indexed). Defaults to 1 and is passed through as-is.
    pub page_number: u32,
    /// Requested results per page. Defaults to [`DEFAULT_PAGE_SIZE`].
    pub page_size: u32,
    /// Caller-chosen ordering. `None` falls back to the resource default.
    pub ordering: Option<String>,
}

impl Default for QueryCommon {
    fn default() -> QueryCommon {
        QueryCommon {
            page_number: 1,
            page_size: DEFAULT_PAGE_SIZE,
            ordering: None,
        }
    }
}

impl QueryCommon {
    /// Page size actually sent upstream.
    pub fn effective_page_size(&self) -> u32 {
        self.page_size.min(MAX_PAGE_SIZE)
    }

    fn paging_pairs(&self, with_page_number: bool) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(2);
        if with_page_number {
            pairs.push(("page_number".to_string(), self.page_number.to_string()));
        }
        pairs.push((
            "page_size".to_string(),
            self.effective_page_size().to_string(),
        ));
        pairs
    }
}

/// Appends `key=value` when the filter is set.
pub(super) fn push_filter(
    pairs: &mut Vec<(&'static str, String)>,
    key: &'static str,
    value: &Option<String>,
) {
    if let Some(value) = value {
        pairs.push((key, value.clone()));
    }
}

/// `YYYY-MM-DD`, the only date shape the API filters accept.
pub(super) fn iso_day(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_size_is_clamped() {
        let common = QueryCommon {
            page_size: 500,
            ..QueryCommon::default()
        };
        assert_eq!(common.effective_page_size(), MAX_PAGE_SIZE);
        assert_eq!(
            common.paging_pairs(true),
            vec![
                ("page_number".to_string(), "1".to_string()),
                ("page_size".to_string(), "100".to_string()),
            ]
        );
    }

    #[test]
    fn lookups_omit_page_number() {
        let pairs = QueryCommon::default().paging_pairs(false);
        assert_eq!(pairs, vec![("page_size".to_string(), "25".to_string())]);
    }
}
