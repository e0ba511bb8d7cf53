use std::io;
use std::sync::Arc;
use std::time::Duration;

use crate::api::{HttpRecipeClient, RecipeService};
use crate::config::ConfigStore;
use crate::session::SessionStore;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Run the UI loop until quit.
///
/// All state mutation happens here, on this task: key events from the
/// reader thread and completions from spawned tasks drain through one
/// channel, so event arrival order is the only ordering that matters.
pub async fn run(config: ConfigStore, session: Arc<dyn SessionStore>) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let mut events = EventHandler::new(tick_rate);

    let client = HttpRecipeClient::new(&config.get().api)
        .map_err(|err| io::Error::other(err.to_string()))?;
    let service: Arc<dyn RecipeService> = Arc::new(client);

    let mut app = App::new(config, session, service, events.sender());
    app.start();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next().await {
            Some(AppEvent::Key(key)) => handle_key(&mut app, key),
            Some(AppEvent::Paste(text)) => app.on_paste(&text),
            Some(event) => app.on_event(event),
            None => break,
        }
    }

    drop(guard);
    Ok(())
}
