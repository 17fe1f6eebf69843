//! Plain-text rendering for the one-shot `search` command.

use std::fmt::Write;

use crate::tmdb::SearchResultPage;

pub fn format_page(page: &SearchResultPage) -> String {
    if page.is_empty() {
        return "No movies found for your request.\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Page {} of {} ({} results)",
        page.page_number, page.total_pages, page.total_results
    );
    for movie in &page.items {
        let _ = writeln!(
            out,
            "{:>8}  {} ({})  {:.1}",
            movie.id,
            movie.title,
            movie.release_year().unwrap_or("—"),
            movie.rating
        );
    }
    out
}
