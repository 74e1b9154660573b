use crate::lookup::WordSource;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::fetcher::Fetcher;
use crate::ui::input::handle_key;
use crate::ui::lookup::StalePolicy;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Runs the lookup view until the user quits.
///
/// Blocks the calling thread; lookups run as tasks on `runtime`.
pub fn run(
    source: Arc<dyn WordSource>,
    stale_policy: StalePolicy,
    initial_word: Option<String>,
    runtime: Handle,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(100);
    let events = EventHandler::new(tick_rate);
    let fetcher = Fetcher::new(source, runtime, events.sender());
    let mut app = App::new(stale_policy, fetcher);

    if let Some(word) = initial_word {
        app.submit_query(word);
    }

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            // Next draw picks up the new size
            Ok(AppEvent::Resize) => {}
            Ok(AppEvent::Lookup(event)) => app.on_lookup_event(event),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
