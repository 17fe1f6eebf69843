use crate::ui::mvi::Reducer;
use crate::ui::search::intent::SearchIntent;
use crate::ui::search::state::SearchState;

pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchState;
    type Intent = SearchIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SearchIntent::Submit { text } => SearchState {
                query: text,
                page: 1,
                selected: None,
            },
            SearchIntent::ChangePage { index } => SearchState {
                page: index.saturating_add(1),
                ..state
            },
            SearchIntent::Select { movie } => SearchState {
                selected: Some(movie),
                ..state
            },
            SearchIntent::ClearSelection => SearchState {
                selected: None,
                ..state
            },
        }
    }
}
