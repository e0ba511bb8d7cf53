use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use crate::api::{ApiError, LoginSession, Recipe, RecipeDetail};
use crate::ui::dashboard::DashboardData;

/// Everything the UI loop reacts to. Input events come from the terminal
/// reader thread; the rest are completions sent by spawned tasks. All of
/// them funnel through one channel so state is only ever mutated on the
/// loop task.
pub enum AppEvent {
    Key(KeyEvent),
    Paste(String),
    Tick,
    Resize(u16, u16),
    /// Splash timer expired.
    SplashElapsed,
    /// Search debounce window elapsed. Tagged with the timer epoch so a
    /// timer that raced its own cancellation is ignored.
    SearchDebounce { epoch: u64 },
    /// A search request resolved. Tagged with its generation; stale
    /// completions are dropped by the coordinator.
    SearchResolved {
        generation: u64,
        result: Result<Vec<Recipe>, ApiError>,
    },
    /// The dashboard's fan-out load finished (all three calls settled).
    DashboardLoaded {
        result: Result<DashboardData, ApiError>,
    },
    /// A detail fetch resolved. Tagged with the recipe id so a completion
    /// for a detail view the user already left is ignored.
    DetailLoaded {
        id: i64,
        result: Result<RecipeDetail, ApiError>,
    },
    /// The login request resolved.
    LoginResolved {
        result: Result<LoginSession, ApiError>,
    },
}

/// Bridges the blocking crossterm event source into the async UI loop and
/// hands out the sender that spawned tasks use for completions.
pub struct EventHandler {
    rx: UnboundedReceiver<AppEvent>,
    tx: UnboundedSender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = unbounded_channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate
                    .saturating_sub(last_tick.elapsed())
                    .min(Duration::from_millis(50));

                match event::poll(timeout) {
                    Ok(true) => {
                        let forwarded = match event::read() {
                            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                                event_tx.send(AppEvent::Key(key))
                            }
                            Ok(Event::Paste(text)) => event_tx.send(AppEvent::Paste(text)),
                            Ok(Event::Resize(cols, rows)) => {
                                event_tx.send(AppEvent::Resize(cols, rows))
                            }
                            Ok(_) => Ok(()),
                            Err(err) => {
                                tracing::error!(error = %err, "terminal event read failed");
                                break;
                            }
                        };
                        // Receiver gone means the UI loop exited.
                        if forwarded.is_err() {
                            break;
                        }
                    }
                    Ok(false) => {}
                    Err(err) => {
                        tracing::error!(error = %err, "terminal event poll failed");
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }

    pub fn sender(&self) -> UnboundedSender<AppEvent> {
        self.tx.clone()
    }
}
