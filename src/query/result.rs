//! The live view handed to observers.

use std::sync::Arc;

use crate::query::key::CacheKey;
use crate::tmdb::{FetchError, Movie, SearchResultPage};

/// Lifecycle of a cache key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    /// Disabled key, nothing requested.
    #[default]
    Idle,
    /// First fetch in flight, no data of its own yet.
    Loading,
    Success,
    Error,
}

/// Page shown for a key, tagged with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultData {
    /// Fetched for this key.
    Fetched(Arc<SearchResultPage>),
    /// Borrowed from a previously observed key while this one loads.
    Placeholder(Arc<SearchResultPage>),
    /// Nothing fetched yet.
    Initial(Arc<SearchResultPage>),
}

impl ResultData {
    pub fn page(&self) -> &SearchResultPage {
        match self {
            ResultData::Fetched(page) | ResultData::Placeholder(page) | ResultData::Initial(page) => {
                page
            }
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, ResultData::Placeholder(_))
    }

    pub fn is_fetched(&self) -> bool {
        matches!(self, ResultData::Fetched(_))
    }
}

impl Default for ResultData {
    fn default() -> Self {
        ResultData::Initial(Arc::new(SearchResultPage::default()))
    }
}

/// Snapshot of one key's state.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    pub key: CacheKey,
    pub data: ResultData,
    pub status: FetchStatus,
    pub is_fetching: bool,
    pub error: Option<FetchError>,
    /// Number of successful fetches stored for this key. Changes once per outcome.
    pub version: u64,
}

impl QueryResult {
    pub(crate) fn idle(key: CacheKey) -> Self {
        Self {
            key,
            data: ResultData::default(),
            status: FetchStatus::Idle,
            is_fetching: false,
            error: None,
            version: 0,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }

    pub fn is_error(&self) -> bool {
        self.status == FetchStatus::Error
    }

    pub fn is_success(&self) -> bool {
        self.status == FetchStatus::Success
    }

    /// A fetch is in flight for a key that already has its own data.
    pub fn is_refetching(&self) -> bool {
        self.is_fetching && self.data.is_fetched()
    }

    pub fn page(&self) -> &SearchResultPage {
        self.data.page()
    }

    pub fn movies(&self) -> &[Arc<Movie>] {
        &self.data.page().items
    }

    pub fn total_pages(&self) -> u32 {
        self.data.page().total_pages
    }
}
