//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use moviesearch::query::{QueryOrchestrator, QueryResult};
use moviesearch::tmdb::{FetchError, Movie, SearchClient, SearchResultPage};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// Build a movie with a predictable title.
pub fn movie(id: u64, title: &str) -> Arc<Movie> {
    Arc::new(Movie {
        id,
        title: title.to_string(),
        poster_path: Some(format!("/poster{}.jpg", id)),
        release_date: "2005-06-15".to_string(),
        overview: format!("Overview of {}", title),
        rating: 7.5,
    })
}

/// Page with `count` movies, numbered from `page * 100`.
pub fn page_of(page: u32, count: usize, total_pages: u32) -> SearchResultPage {
    let items = (0..count)
        .map(|i| movie(page as u64 * 100 + i as u64, &format!("Movie {}-{}", page, i)))
        .collect();
    SearchResultPage {
        page_number: page,
        items,
        total_pages,
        total_results: total_pages * count as u32,
    }
}

pub fn empty_page() -> SearchResultPage {
    SearchResultPage::default()
}

/// In-memory search client that records every call.
///
/// Unknown keys answer with an empty page.
#[derive(Default)]
pub struct StubClient {
    calls: Mutex<Vec<(String, u32)>>,
    responses: Mutex<HashMap<(String, u32), Result<SearchResultPage, FetchError>>>,
}

impl StubClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, query: &str, page: u32, result: Result<SearchResultPage, FetchError>) {
        self.responses
            .lock()
            .insert((query.to_string(), page), result);
    }

    pub fn calls(&self) -> Vec<(String, u32)> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

impl SearchClient for StubClient {
    async fn search(&self, query: &str, page: u32) -> Result<SearchResultPage, FetchError> {
        self.calls.lock().push((query.to_string(), page));
        self.responses
            .lock()
            .get(&(query.to_string(), page))
            .cloned()
            .unwrap_or_else(|| {
                Ok(SearchResultPage {
                    page_number: page,
                    ..SearchResultPage::default()
                })
            })
    }
}

pub fn orchestrator(
    stub: &Arc<StubClient>,
    stale_after: Duration,
) -> QueryOrchestrator<StubClient> {
    QueryOrchestrator::new(Arc::clone(stub), stale_after)
}

/// Receive and apply the next completion.
pub async fn settle(orchestrator: &mut QueryOrchestrator<StubClient>) -> QueryResult {
    let completion = tokio::time::timeout(Duration::from_secs(2), orchestrator.next_completion())
        .await
        .expect("fetch did not complete")
        .expect("completion channel closed");
    orchestrator.apply(completion)
}

/// True when no completion arrives within a short window.
pub async fn no_pending_completion(orchestrator: &mut QueryOrchestrator<StubClient>) -> bool {
    tokio::time::timeout(Duration::from_millis(50), orchestrator.next_completion())
        .await
        .is_err()
}
