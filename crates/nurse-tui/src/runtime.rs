use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use std::time::Duration;

use crate::input::handle_key;
use crate::render::render;
use crate::ui::{App, Tui};

/// Redraw at least this often so the date in the status bar rolls over at midnight
const TICK: Duration = Duration::from_secs(1);

pub async fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let mut event_stream = EventStream::new();
    let mut tick_interval = tokio::time::interval(TICK);

    while app.running {
        terminal.draw(|f| render(f, app))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => handle_event(app, event),
                    Some(Err(e)) => return Err(e.into()),
                    // Input closed, nothing more can happen
                    None => app.quit(),
                }
            }
            _ = tick_interval.tick() => {}
        }
    }

    Ok(())
}

/// Apply one terminal event to the app
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                if app.pending_quit {
                    // Second Ctrl+C - quit immediately
                    app.quit();
                } else {
                    // First Ctrl+C - set pending (status bar shows warning)
                    app.pending_quit = true;
                }
            } else {
                // Any other key clears pending quit state
                app.pending_quit = false;
                handle_key(app, key);
            }
        }
        Event::Paste(text) => {
            app.pending_quit = false;
            if !app.is_date_picker_open() {
                app.paste(&text);
            }
        }
        _ => {}
    }
}
