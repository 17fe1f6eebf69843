//! Model-View-Intent primitives.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Reducers are pure; fetching and notifications happen in
//! [`App`](crate::ui::app::App) around each dispatch.

/// State owned by a screen. `Default` is the state before any user input.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// A user action: submitting a search, turning a page, opening a movie.
pub trait Intent: Send + 'static {}

/// `(State, Intent) -> State`, with no side effects.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
