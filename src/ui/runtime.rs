use std::io;
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;

use crate::config::FeedConfig;
use crate::news::NewsSource;
use crate::ui::app::App;
use crate::ui::events::EventHandler;
use crate::ui::feed::NewsState;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Run the interactive news screen until the user quits.
pub fn run(
    runtime: Handle,
    feed: FeedConfig,
    initial: NewsState,
    source: Arc<dyn NewsSource>,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(feed, initial, source, runtime, events.sender());
    app.mount();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(event) => app.handle_event(event),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::info!("News screen closed");
    drop(app);
    drop(guard);
    Ok(())
}
