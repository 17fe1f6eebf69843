//! Wire types for the movie search endpoint.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A single search hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default, rename = "vote_average")]
    pub rating: f64,
}

impl Movie {
    /// Year part of `release_date`, if the date is present.
    pub fn release_year(&self) -> Option<&str> {
        self.release_date
            .split('-')
            .next()
            .filter(|year| year.len() == 4 && year.chars().all(|c| c.is_ascii_digit()))
    }

    /// Absolute poster URL under `image_base`.
    pub fn poster_url(&self, image_base: &str) -> Option<String> {
        self.poster_path
            .as_deref()
            .filter(|path| !path.is_empty())
            .map(|path| format!("{}{}", image_base.trim_end_matches('/'), path))
    }
}

/// One page of search results.
///
/// Movies are shared through `Arc` so the cache owns them and the
/// selection can point at one without copying.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultPage {
    #[serde(rename = "page")]
    pub page_number: u32,
    #[serde(rename = "results")]
    pub items: Vec<Arc<Movie>>,
    pub total_pages: u32,
    pub total_results: u32,
}

impl Default for SearchResultPage {
    fn default() -> Self {
        Self {
            page_number: 1,
            items: Vec::new(),
            total_pages: 0,
            total_results: 0,
        }
    }
}

impl SearchResultPage {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
