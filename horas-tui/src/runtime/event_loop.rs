use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

use super::action_queue::{channel, Action};
use super::actions::run_action;
use super::views::handle_view_key;
use crate::app::App;
use crate::config::HorasConfig;
use crate::ui;

pub async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    config: &HorasConfig,
) -> Result<()> {
    let (action_tx, mut action_rx) = channel();

    // First paint renders whatever the store holds right now.
    let _ = action_tx.send(Action::RefreshSnapshot);
    let mut last_refresh = Instant::now();
    let refresh_interval = Duration::from_secs(config.refresh_secs.max(1));

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                handle_view_key(key, app, &action_tx);
            }
        }

        if last_refresh.elapsed() >= refresh_interval {
            let _ = action_tx.send(Action::RefreshSnapshot);
            last_refresh = Instant::now();
        }

        while let Ok(action) = action_rx.try_recv() {
            run_action(action, app, config);
        }

        if !app.running {
            break;
        }
    }

    Ok(())
}
