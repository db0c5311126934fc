//! Application runtime: terminal lifecycle, channel plumbing, and the event
//! loop that ties input, search replies, and export replies together.

/// Channel endpoints shared between the event loop and background workers.
mod channels;
/// Terminal setup and restoration utilities.
mod terminal;
/// Background workers for search, export, and terminal input.
mod workers;

use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;

use crate::config::Config;
use crate::events::handle_event;
use crate::logic;
use crate::state::AppState;
use crate::ui;

use channels::Channels;
use terminal::{restore_terminal, setup_terminal};
use workers::spawn_event_thread;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Run the newsdeck TUI end-to-end: initialize the terminal and state,
/// spawn background workers, drive the event loop, and restore the terminal
/// on exit.
///
/// Inputs:
/// - `cfg`: Merged configuration (service URL, export directory, query
///   defaults).
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal or
///   runtime errors.
///
/// Details:
/// - Input is read on a dedicated thread and forwarded over a channel so the
///   loop can `select!` over keyboard events and worker replies uniformly.
/// - No query runs at startup; the first search happens when the user
///   submits the form.
pub async fn run(cfg: Config) -> Result<()> {
    setup_terminal()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;

    let mut app = AppState::from_config(&cfg);
    let mut channels = Channels::new(cfg.api_url.clone());

    spawn_event_thread(
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );

    loop {
        let _ = terminal.draw(|f| ui::draw(f, &mut app));

        select! {
            Some(ev) = channels.event_rx.recv() => {
                if handle_event(ev, &mut app, &channels.query_tx, &channels.export_tx) {
                    break;
                }
            }
            Some(reply) = channels.search_reply_rx.recv() => {
                logic::apply_search_reply(&mut app, reply);
            }
            Some(reply) = channels.export_reply_rx.recv() => {
                logic::apply_export_reply(&mut app, reply);
            }
            else => { break; }
        }
    }

    // Signal the input thread to exit before leaving the alternate screen.
    channels
        .event_thread_cancelled
        .store(true, std::sync::atomic::Ordering::Relaxed);

    restore_terminal()?;
    Ok(())
}
