use std::sync::Arc;

use crate::tmdb::Movie;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SearchIntent {
    /// Search box confirmed. Resets page and selection.
    Submit { text: String },
    /// Pagination widget picked a page. `index` is 0-based.
    ChangePage { index: u32 },
    Select { movie: Arc<Movie> },
    /// Modal closed.
    ClearSelection,
}

impl Intent for SearchIntent {}
