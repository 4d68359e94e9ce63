/// Upstream resource collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Opportunity,
    Contract,
    Grant,
    Awardee,
    Agency,
    Vehicle,
    People,
    Document,
    Naics,
    Psc,
}

impl Resource {
    /// Path segment under the API base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Opportunity => "opportunity",
            Resource::Contract => "contract",
            Resource::Grant => "grant",
            Resource::Awardee => "awardee",
            Resource::Agency => "agency",
            Resource::Vehicle => "vehicle",
            Resource::People => "people",
            Resource::Document => "document",
            Resource::Naics => "naics",
            Resource::Psc => "psc",
        }
    }

    /// Code lookups are served as a single list without page numbers.
    pub fn is_lookup(&self) -> bool {
        matches!(self, Resource::Naics | Resource::Psc)
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}
