pub mod app;
pub mod events;
pub mod layout;
pub mod mvi;
pub mod notify;
pub mod pagination;
pub mod render;
pub mod search;
pub mod terminal_guard;
pub mod theme;

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::query::FetchCompletion;
use crate::tmdb::SearchClient;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::notify::ToastQueue;
use crate::ui::render::DrawContext;
use crate::ui::terminal_guard::setup_terminal;

enum Step {
    Input(Option<AppEvent>),
    Fetched(Option<FetchCompletion>),
}

/// Run the interactive search screen until the user quits.
pub async fn run<C: SearchClient>(
    mut app: App<C>,
    toasts: Arc<ToastQueue>,
    config: &Config,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_ms);
    let toast_ttl = Duration::from_secs(config.ui.toast_seconds);
    let mut events = EventHandler::new(tick_rate);

    loop {
        let visible = toasts.visible();
        let ctx = DrawContext {
            toasts: &visible,
            image_base_url: &config.api.image_base_url,
        };
        terminal.draw(|frame| render::draw(frame, &app, &ctx))?;
        if app.should_quit() {
            break;
        }

        let step = tokio::select! {
            event = events.next() => Step::Input(event),
            completion = app.next_completion() => Step::Fetched(completion),
        };

        match step {
            Step::Input(Some(AppEvent::Key(key))) => app.on_key(key),
            Step::Input(Some(AppEvent::Tick)) => {
                app.on_tick();
                toasts.expire(Instant::now(), toast_ttl);
            }
            Step::Input(Some(AppEvent::Resize(cols, rows))) => {
                tracing::debug!(cols, rows, "Terminal resized");
            }
            Step::Input(None) => {
                tracing::warn!("Input thread stopped");
                break;
            }
            Step::Fetched(Some(completion)) => app.on_fetch_completed(completion),
            Step::Fetched(None) => break,
        }
    }

    drop(guard);
    Ok(())
}
