use serde::Deserialize;

/// Pagination metadata block. Only the total is consumed; the upstream's own
/// page number is deliberately not modelled.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct Meta {
    #[serde(default, deserialize_with = "crate::de::integer")]
    pub total_count: Option<i64>,
}

/// List response shared by every endpoint.
#[derive(Deserialize, Debug, Clone)]
pub struct PaginatedResponse<T> {
    #[serde(default, deserialize_with = "crate::de::or_default")]
    pub meta: Meta,
    #[serde(
        default = "Vec::new",
        deserialize_with = "crate::de::records",
        bound(deserialize = "T: serde::de::DeserializeOwned")
    )]
    pub results: Vec<T>,
}

impl<T> PaginatedResponse<T> {
    /// Total matching records, `0` when the metadata block is missing.
    pub fn total_count(&self) -> i64 {
        self.meta.total_count.unwrap_or(0)
    }
}
