use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::{mpsc, watch};

use crate::query::key::CacheKey;
use crate::query::result::{FetchStatus, QueryResult, ResultData};
use crate::tmdb::{FetchError, SearchClient, SearchResultPage};

/// Outcome of a spawned fetch, applied back on the owning loop.
#[derive(Debug)]
pub struct FetchCompletion {
    pub key: CacheKey,
    pub result: Result<SearchResultPage, FetchError>,
}

struct CacheEntry {
    data: Option<Arc<SearchResultPage>>,
    error: Option<FetchError>,
    status: FetchStatus,
    in_flight: bool,
    updated_at: Option<Instant>,
    version: u64,
    view: watch::Sender<QueryResult>,
}

impl CacheEntry {
    fn new(key: &CacheKey) -> Self {
        let (view, _) = watch::channel(QueryResult::idle(key.clone()));
        Self {
            data: None,
            error: None,
            status: FetchStatus::Idle,
            in_flight: false,
            updated_at: None,
            version: 0,
            view,
        }
    }

    fn is_stale(&self, stale_after: Duration) -> bool {
        match self.updated_at {
            Some(at) => at.elapsed() >= stale_after,
            None => true,
        }
    }
}

/// Cached, de-duplicated fetching keyed by `(query, page)`.
///
/// The orchestrator is owned by a single event loop. Fetches run as spawned
/// tasks that only send a [`FetchCompletion`] back; the loop feeds it to
/// [`apply`](Self::apply), so the cache is never touched concurrently.
///
/// The cache is unbounded and in-flight requests are never cancelled. A
/// response for a key the UI has moved away from is stored under that key
/// and simply goes unobserved.
pub struct QueryOrchestrator<C: SearchClient> {
    client: Arc<C>,
    entries: HashMap<CacheKey, CacheEntry>,
    observed: Option<CacheKey>,
    /// Last successful page of a previously observed key.
    placeholder: Option<Arc<SearchResultPage>>,
    stale_after: Duration,
    completions_tx: mpsc::UnboundedSender<FetchCompletion>,
    completions_rx: mpsc::UnboundedReceiver<FetchCompletion>,
}

impl<C: SearchClient> QueryOrchestrator<C> {
    pub fn new(client: Arc<C>, stale_after: Duration) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            client,
            entries: HashMap::new(),
            observed: None,
            placeholder: None,
            stale_after,
            completions_tx,
            completions_rx,
        }
    }

    /// Register interest in `key` and make it the observed key.
    ///
    /// Starts a fetch when the key is enabled, not already in flight, and
    /// either uncached or stale. Must be called from within a tokio runtime.
    pub fn observe(&mut self, key: CacheKey) -> watch::Receiver<QueryResult> {
        if self.observed.as_ref() != Some(&key) {
            self.carry_placeholder();
            self.observed = Some(key.clone());
        }

        let stale_after = self.stale_after;
        let entry = self
            .entries
            .entry(key.clone())
            .or_insert_with(|| CacheEntry::new(&key));

        if !key.is_enabled() {
            tracing::trace!(key = %key, "Query disabled, skipping fetch");
        } else if entry.in_flight {
            tracing::debug!(key = %key, "Attaching to in-flight fetch");
        } else if entry.data.is_none() || entry.is_stale(stale_after) {
            self.start_fetch(&key);
        } else {
            tracing::debug!(key = %key, "Serving fresh cached page");
        }

        self.publish(&key);
        self.entries
            .get(&key)
            .map(|entry| entry.view.subscribe())
            .unwrap_or_else(|| watch::channel(QueryResult::idle(key)).1)
    }

    /// Wait for the next finished fetch.
    pub async fn next_completion(&mut self) -> Option<FetchCompletion> {
        self.completions_rx.recv().await
    }

    /// Store a finished fetch under the key it was requested for and notify
    /// that key's observers. Returns the updated view.
    pub fn apply(&mut self, completion: FetchCompletion) -> QueryResult {
        let FetchCompletion { key, result } = completion;
        let entry = self
            .entries
            .entry(key.clone())
            .or_insert_with(|| CacheEntry::new(&key));

        entry.in_flight = false;
        match result {
            Ok(page) => {
                tracing::debug!(
                    key = %key,
                    results = page.items.len(),
                    "Fetch succeeded"
                );
                entry.data = Some(Arc::new(page));
                entry.error = None;
                entry.status = FetchStatus::Success;
                entry.updated_at = Some(Instant::now());
                entry.version += 1;
            }
            Err(err) => {
                tracing::warn!(key = %key, kind = %err.kind, error = %err, "Fetch failed");
                entry.error = Some(err);
                entry.status = FetchStatus::Error;
            }
        }

        if self.observed.as_ref() != Some(&key) {
            tracing::debug!(key = %key, "Stored response for a key that is no longer observed");
        }

        self.publish(&key)
    }

    /// Snapshot of the observed key, or an idle view when nothing was observed.
    pub fn current(&self) -> QueryResult {
        match &self.observed {
            Some(key) => self.view_of(key),
            None => QueryResult::idle(CacheKey::new("", 1)),
        }
    }

    pub fn observed(&self) -> Option<&CacheKey> {
        self.observed.as_ref()
    }

    /// Cached page for `key`, if a fetch for it ever succeeded.
    pub fn cached(&self, key: &CacheKey) -> Option<Arc<SearchResultPage>> {
        self.entries.get(key).and_then(|entry| entry.data.clone())
    }

    pub fn is_in_flight(&self, key: &CacheKey) -> bool {
        self.entries.get(key).is_some_and(|entry| entry.in_flight)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn carry_placeholder(&mut self) {
        let Some(previous) = &self.observed else {
            return;
        };
        if let Some(data) = self.entries.get(previous).and_then(|e| e.data.clone()) {
            self.placeholder = Some(data);
        }
    }

    fn start_fetch(&mut self, key: &CacheKey) {
        let Some(entry) = self.entries.get_mut(key) else {
            return;
        };

        entry.in_flight = true;
        if entry.data.is_none() {
            entry.status = FetchStatus::Loading;
            entry.error = None;
        }

        tracing::debug!(key = %key, revalidate = entry.data.is_some(), "Starting fetch");

        let client = Arc::clone(&self.client);
        let completions = self.completions_tx.clone();
        let key = key.clone();
        tokio::spawn(async move {
            let result = client.search(&key.query, key.page).await;
            // The receiver lives as long as the orchestrator.
            let _ = completions.send(FetchCompletion { key, result });
        });
    }

    fn view_of(&self, key: &CacheKey) -> QueryResult {
        let Some(entry) = self.entries.get(key) else {
            return QueryResult::idle(key.clone());
        };

        if !key.is_enabled() {
            return QueryResult::idle(key.clone());
        }

        let data = match (&entry.data, &self.placeholder) {
            (Some(own), _) => ResultData::Fetched(Arc::clone(own)),
            (None, Some(previous)) => ResultData::Placeholder(Arc::clone(previous)),
            (None, None) => ResultData::default(),
        };

        QueryResult {
            key: key.clone(),
            data,
            status: entry.status,
            is_fetching: entry.in_flight,
            error: entry.error.clone(),
            version: entry.version,
        }
    }

    fn publish(&self, key: &CacheKey) -> QueryResult {
        let view = self.view_of(key);
        if let Some(entry) = self.entries.get(key) {
            entry.view.send_replace(view.clone());
        }
        view
    }
}
