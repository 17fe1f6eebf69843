use std::sync::Arc;

use crate::query::CacheKey;
use crate::tmdb::Movie;
use crate::ui::mvi::UiState;

/// What the user asked for: search text, 1-based page and the open movie.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    pub query: String,
    pub page: u32,
    /// Shared with the page that listed it.
    pub selected: Option<Arc<Movie>>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
            selected: None,
        }
    }
}

impl UiState for SearchState {}

impl SearchState {
    pub fn cache_key(&self) -> CacheKey {
        CacheKey::new(self.query.clone(), self.page)
    }

    pub fn has_query(&self) -> bool {
        !self.query.trim().is_empty()
    }

    /// Page index as the pagination widget counts (0-based).
    pub fn page_index(&self) -> u32 {
        self.page.saturating_sub(1)
    }
}
