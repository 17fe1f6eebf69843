mod common;

use common::movie;
use moviesearch::ui::mvi::Reducer;
use moviesearch::ui::search::{SearchIntent, SearchReducer, SearchState};

fn browsing_state() -> SearchState {
    SearchState {
        query: "batman".to_string(),
        page: 4,
        selected: Some(movie(268, "Batman")),
    }
}

#[test]
fn default_state_is_blank_first_page() {
    let state = SearchState::default();
    assert_eq!(state.query, "");
    assert_eq!(state.page, 1);
    assert!(state.selected.is_none());
    assert!(!state.has_query());
}

#[test]
fn submit_resets_page_and_selection() {
    let state = SearchReducer::reduce(
        browsing_state(),
        SearchIntent::Submit {
            text: "alien".to_string(),
        },
    );
    assert_eq!(state.query, "alien");
    assert_eq!(state.page, 1);
    assert!(state.selected.is_none());
}

#[test]
fn submit_same_query_still_resets() {
    let state = SearchReducer::reduce(
        browsing_state(),
        SearchIntent::Submit {
            text: "batman".to_string(),
        },
    );
    assert_eq!(state.page, 1);
    assert!(state.selected.is_none());
}

#[test]
fn submit_keeps_text_verbatim() {
    let state = SearchReducer::reduce(
        SearchState::default(),
        SearchIntent::Submit {
            text: "  The Thing ".to_string(),
        },
    );
    assert_eq!(state.query, "  The Thing ");
    assert_eq!(state.cache_key().query, "  The Thing ");
}

#[test]
fn change_page_keeps_selection_and_query() {
    let state = SearchReducer::reduce(browsing_state(), SearchIntent::ChangePage { index: 1 });
    assert_eq!(state.page, 2);
    assert_eq!(state.query, "batman");
    assert!(state.selected.is_some());
}

#[test]
fn select_and_clear() {
    let heat = movie(949, "Heat");
    let state = SearchReducer::reduce(
        SearchState::default(),
        SearchIntent::Select { movie: heat.clone() },
    );
    assert_eq!(state.selected.as_ref().map(|m| m.id), Some(949));
    assert_eq!(state.page, 1);

    let state = SearchReducer::reduce(state, SearchIntent::ClearSelection);
    assert!(state.selected.is_none());
}

#[test]
fn clear_selection_without_selection_is_noop() {
    let state = SearchReducer::reduce(SearchState::default(), SearchIntent::ClearSelection);
    assert_eq!(state, SearchState::default());
}
