/// Identifies one cached page: the search text and the 1-based page number.
///
/// Equality is exact. `"Batman"` and `"batman "` are different keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub query: String,
    pub page: u32,
}

impl CacheKey {
    pub fn new(query: impl Into<String>, page: u32) -> Self {
        Self {
            query: query.into(),
            page,
        }
    }

    /// Blank queries never reach the network.
    pub fn is_enabled(&self) -> bool {
        !self.query.trim().is_empty()
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}#{}", self.query, self.page)
    }
}
