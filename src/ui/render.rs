use std::sync::Arc;

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap};
use ratatui::Frame;

use crate::query::QueryResult;
use crate::tmdb::{Movie, SearchClient};
use crate::ui::app::{App, Focus};
use crate::ui::layout::{centered_rect, layout_regions, top_right};
use crate::ui::notify::Toast;
use crate::ui::pagination::{PageItem, Pagination};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, RATING,
    STATUS_ERROR,
};

const SPINNER: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];

/// Data the view needs besides the app itself.
pub struct DrawContext<'a> {
    pub toasts: &'a [Toast],
    pub image_base_url: &'a str,
}

pub fn draw<C: SearchClient>(frame: &mut Frame<'_>, app: &App<C>, ctx: &DrawContext<'_>) {
    let area = frame.area();
    let regions = layout_regions(area);
    let view = app.current();

    frame.render_widget(search_bar(app), regions.search);
    draw_body(frame, app, &view, regions.body);
    if let Some(bar) = app.pagination() {
        frame.render_widget(pagination_bar(&bar), regions.pagination);
    }
    frame.render_widget(footer(app), regions.footer);

    if let Some(movie) = app.selected() {
        draw_modal(frame, movie, ctx.image_base_url, area);
    }
    draw_toasts(frame, ctx.toasts, area);
}

fn search_bar<C: SearchClient>(app: &App<C>) -> Paragraph<'static> {
    let focused = app.focus() == Focus::Search && app.selected().is_none();
    let border = if focused { ACCENT } else { GLOBAL_BORDER };
    let mut spans = vec![Span::styled(
        app.input().to_string(),
        Style::default().fg(HEADER_TEXT),
    )];
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(ACCENT)));
    } else if app.input().is_empty() {
        spans.push(Span::styled(
            "Search movies...",
            Style::default().fg(MUTED_TEXT),
        ));
    }

    Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(" Search "),
    )
}

fn draw_body<C: SearchClient>(frame: &mut Frame<'_>, app: &App<C>, view: &QueryResult, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    if let Some(status) = status_line(app, view) {
        frame.render_widget(status, chunks[0]);
    }

    let movies = view.movies();
    if movies.is_empty() {
        return;
    }

    let rows: Vec<Row> = movies.iter().map(movie_row).collect();
    let table = Table::new(
        rows,
        [
            Constraint::Min(20),
            Constraint::Length(6),
            Constraint::Length(6),
        ],
    )
    .header(
        Row::new(vec!["Title", "Year", "Rating"])
            .style(Style::default().fg(MUTED_TEXT).add_modifier(Modifier::BOLD)),
    )
    .row_highlight_style(
        Style::default()
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("▶ ")
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER))
            .title(format!(
                " {} results · page {} of {} ",
                view.page().total_results,
                view.page().page_number,
                view.total_pages()
            )),
    );

    let mut state = TableState::default();
    if app.focus() == Focus::Results {
        state.select(Some(app.cursor()));
    }
    frame.render_stateful_widget(table, chunks[1], &mut state);
}

fn status_line<C: SearchClient>(app: &App<C>, view: &QueryResult) -> Option<Paragraph<'static>> {
    if view.is_loading() || view.is_fetching {
        let frame = SPINNER[app.spinner_frame() % SPINNER.len()];
        return Some(Paragraph::new(Line::from(Span::styled(
            format!("{} Loading movies...", frame),
            Style::default().fg(ACCENT),
        ))));
    }
    if let Some(err) = view.error.as_ref().filter(|_| view.is_error()) {
        return Some(Paragraph::new(Line::from(Span::styled(
            err.user_message(),
            Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
        ))));
    }
    None
}

fn movie_row(movie: &Arc<Movie>) -> Row<'static> {
    Row::new(vec![
        Cell::from(movie.title.clone()),
        Cell::from(movie.release_year().unwrap_or("—").to_string()),
        Cell::from(Span::styled(
            format!("{:.1}", movie.rating),
            Style::default().fg(RATING),
        )),
    ])
}

fn pagination_bar(bar: &Pagination) -> Paragraph<'static> {
    let mut spans = Vec::new();
    let arrow_style = |enabled: bool| {
        if enabled {
            Style::default().fg(HEADER_TEXT)
        } else {
            Style::default().fg(MUTED_TEXT)
        }
    };

    spans.push(Span::styled("← ", arrow_style(bar.previous().is_some())));
    for item in bar.items() {
        match item {
            PageItem::Page(index) if index == bar.current => spans.push(Span::styled(
                format!("[{}] ", index + 1),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )),
            PageItem::Page(index) => spans.push(Span::styled(
                format!("{} ", index + 1),
                Style::default().fg(HEADER_TEXT),
            )),
            PageItem::Break => spans.push(Span::styled("… ", Style::default().fg(MUTED_TEXT))),
        }
    }
    spans.push(Span::styled("→", arrow_style(bar.next().is_some())));

    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}

fn footer<C: SearchClient>(app: &App<C>) -> Paragraph<'static> {
    let hints = if app.selected().is_some() {
        " Esc: Close"
    } else {
        match app.focus() {
            Focus::Search => " Enter: Search │ Tab: Results │ Esc: Quit",
            Focus::Results => " ↑↓: Move │ ←→: Page │ Enter: Details │ /: Search │ q: Quit",
        }
    };
    Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
    )))
}

fn draw_modal(frame: &mut Frame<'_>, movie: &Movie, image_base_url: &str, area: Rect) {
    let rect = centered_rect(70, 60, area);
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Release date: ", Style::default().fg(MUTED_TEXT)),
            Span::raw(if movie.release_date.is_empty() {
                "unknown".to_string()
            } else {
                movie.release_date.clone()
            }),
        ]),
        Line::from(vec![
            Span::styled("Rating: ", Style::default().fg(MUTED_TEXT)),
            Span::styled(format!("{:.1}/10", movie.rating), Style::default().fg(RATING)),
        ]),
    ];
    if let Some(url) = movie.poster_url(image_base_url) {
        lines.push(Line::from(vec![
            Span::styled("Poster: ", Style::default().fg(MUTED_TEXT)),
            Span::raw(url),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(if movie.overview.is_empty() {
        "No overview available.".to_string()
    } else {
        movie.overview.clone()
    }));

    let modal = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(POPUP_BORDER))
                .title(format!(" {} ", movie.title))
                .title_bottom(Line::from(" Esc: close ").right_aligned()),
        );

    frame.render_widget(Clear, rect);
    frame.render_widget(modal, rect);
}

fn draw_toasts(frame: &mut Frame<'_>, toasts: &[Toast], area: Rect) {
    let mut y_offset = 0;
    for toast in toasts.iter().rev() {
        let width = toast.message.chars().count() as u16 + 4;
        let mut rect = top_right(width, 3, area);
        rect.y += y_offset;
        if rect.y + rect.height > area.y + area.height {
            break;
        }
        let widget = Paragraph::new(Line::from(Span::styled(
            toast.message.clone(),
            Style::default().fg(HEADER_TEXT),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(STATUS_ERROR)),
        );
        frame.render_widget(Clear, rect);
        frame.render_widget(widget, rect);
        y_offset += 3;
    }
}
