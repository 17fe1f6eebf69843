use std::collections::HashMap;
use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::watch;

use crate::query::{CacheKey, FetchCompletion, QueryOrchestrator, QueryResult};
use crate::tmdb::{Movie, SearchClient};
use crate::ui::mvi::Reducer;
use crate::ui::notify::NotificationSink;
use crate::ui::pagination::Pagination;
use crate::ui::search::{SearchIntent, SearchReducer, SearchState};

pub const EMPTY_RESULT_MESSAGE: &str = "No movies found for your request.";
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter your search query.";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Search,
    Results,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Application controller.
///
/// Owns the search state, keeps the orchestrator observing the key derived
/// from it, and raises the empty-result toast.
pub struct App<C: SearchClient> {
    state: SearchState,
    orchestrator: QueryOrchestrator<C>,
    view: watch::Receiver<QueryResult>,
    notifications: Arc<dyn NotificationSink>,
    /// Per key, the fetch version whose empty result was already announced.
    empty_notices: HashMap<CacheKey, u64>,
    focus: Focus,
    input: String,
    cursor: usize,
    spinner: usize,
    should_quit: bool,
}

impl<C: SearchClient> App<C> {
    pub fn new(mut orchestrator: QueryOrchestrator<C>, notifications: Arc<dyn NotificationSink>) -> Self {
        let state = SearchState::default();
        let view = orchestrator.observe(state.cache_key());
        Self {
            state,
            orchestrator,
            view,
            notifications,
            empty_notices: HashMap::new(),
            focus: Focus::Search,
            input: String::new(),
            cursor: 0,
            spinner: 0,
            should_quit: false,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Live view of the current key.
    pub fn current(&self) -> QueryResult {
        self.view.borrow().clone()
    }

    pub fn selected(&self) -> Option<&Arc<Movie>> {
        self.state.selected.as_ref()
    }

    /// Pagination bar, hidden when there are no results or a single page.
    pub fn pagination(&self) -> Option<Pagination> {
        let view = self.view.borrow();
        if view.movies().is_empty() {
            return None;
        }
        Pagination::new(view.total_pages(), self.state.page_index())
    }

    pub fn orchestrator(&self) -> &QueryOrchestrator<C> {
        &self.orchestrator
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn spinner_frame(&self) -> usize {
        self.spinner
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn submit_search(&mut self, text: impl Into<String>) {
        self.dispatch(SearchIntent::Submit { text: text.into() });
    }

    /// `index` is 0-based, as the pagination widget reports it.
    pub fn change_page(&mut self, index: u32) {
        self.dispatch(SearchIntent::ChangePage { index });
    }

    pub fn select(&mut self, movie: Arc<Movie>) {
        self.dispatch(SearchIntent::Select { movie });
    }

    /// Select the movie at `index` of the displayed page.
    pub fn select_at(&mut self, index: usize) {
        let movie = self.view.borrow().movies().get(index).cloned();
        if let Some(movie) = movie {
            self.select(movie);
        }
    }

    pub fn clear_selection(&mut self) {
        self.dispatch(SearchIntent::ClearSelection);
    }

    /// Wait for the next finished fetch.
    pub async fn next_completion(&mut self) -> Option<FetchCompletion> {
        self.orchestrator.next_completion().await
    }

    pub fn on_fetch_completed(&mut self, completion: FetchCompletion) {
        self.orchestrator.apply(completion);
        self.clamp_cursor();
        self.notify_if_empty();
    }

    pub fn on_tick(&mut self) {
        self.spinner = self.spinner.wrapping_add(1);
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.request_quit();
            return;
        }

        if self.state.selected.is_some() {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace | KeyCode::Char('q')
            ) {
                self.clear_selection();
            }
            return;
        }

        match self.focus {
            Focus::Search => self.on_search_key(key),
            Focus::Results => self.on_results_key(key),
        }
    }

    fn on_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_input(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Esc => self.request_quit(),
            KeyCode::Tab | KeyCode::Down => {
                if !self.view.borrow().movies().is_empty() {
                    self.focus = Focus::Results;
                }
            }
            KeyCode::Char(c) => self.input.push(c),
            _ => {}
        }
    }

    fn on_results_key(&mut self, key: KeyEvent) {
        let count = self.view.borrow().movies().len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor + 1 < count {
                    self.cursor += 1;
                }
            }
            KeyCode::Left | KeyCode::PageUp | KeyCode::Char('h') | KeyCode::Char('p') => {
                if let Some(index) = self.pagination().and_then(|bar| bar.previous()) {
                    self.change_page(index);
                }
            }
            KeyCode::Right | KeyCode::PageDown | KeyCode::Char('l') | KeyCode::Char('n') => {
                if let Some(index) = self.pagination().and_then(|bar| bar.next()) {
                    self.change_page(index);
                }
            }
            KeyCode::Enter => self.select_at(self.cursor),
            KeyCode::Tab | KeyCode::Char('/') => self.focus = Focus::Search,
            KeyCode::Esc | KeyCode::Char('q') => self.request_quit(),
            _ => {}
        }
    }

    fn submit_input(&mut self) {
        if self.input.trim().is_empty() {
            self.notifications.error(EMPTY_QUERY_MESSAGE);
            return;
        }
        self.submit_search(self.input.clone());
        self.focus = Focus::Results;
    }

    fn dispatch(&mut self, intent: SearchIntent) {
        let previous_key = self.state.cache_key();
        dispatch_mvi!(self, state, SearchReducer, intent);

        let key = self.state.cache_key();
        if key != previous_key {
            tracing::debug!(key = %key, "Observing new key");
            self.view = self.orchestrator.observe(key);
            self.cursor = 0;
            self.notify_if_empty();
        }
    }

    fn clamp_cursor(&mut self) {
        let count = self.view.borrow().movies().len();
        self.cursor = self.cursor.min(count.saturating_sub(1));
    }

    /// Toast once per distinct empty outcome of a non-blank query.
    fn notify_if_empty(&mut self) {
        if !self.state.has_query() {
            return;
        }

        let (key, version) = {
            let view = self.view.borrow();
            let settled = view.is_success() && !view.is_fetching;
            if !settled || !view.data.is_fetched() || !view.movies().is_empty() {
                return;
            }
            (view.key.clone(), view.version)
        };

        if self.empty_notices.get(&key) == Some(&version) {
            return;
        }

        tracing::info!(key = %key, version, "Search returned no results");
        self.notifications.error(EMPTY_RESULT_MESSAGE);
        self.empty_notices.insert(key, version);
    }
}
