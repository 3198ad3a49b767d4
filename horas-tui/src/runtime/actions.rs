use horas_widget::BackgroundIntent;
use tracing::{info, warn};

use super::action_queue::Action;
use crate::app::App;
use crate::config::HorasConfig;
use crate::store;

/// Run one queued action. Nothing here is fatal: dispatch and refresh
/// failures surface as a status message and a log line, never as an exit.
pub(super) fn run_action(action: Action, app: &mut App, config: &HorasConfig) {
    match action {
        Action::DispatchIntent(action_id) => {
            let intent = BackgroundIntent::new(action_id);
            let outcome = config
                .spool_path()
                .and_then(|path| store::append_intent(&path, &intent));
            match outcome {
                Ok(()) => {
                    info!(uri = %intent.uri(), "dispatched background intent");
                    app.set_status(format!("Sent {} to companion app", action_id));
                }
                Err(e) => {
                    warn!(uri = %intent.uri(), error = %e, "could not dispatch background intent");
                    app.set_status(format!("Error sending {}: {}", action_id, e));
                }
            }
        }
        Action::RefreshSnapshot => match config.snapshot_path() {
            Ok(path) => {
                app.refresh(store::load_snapshot(&path));
            }
            Err(e) => {
                warn!(error = %e, "could not resolve snapshot path");
                app.set_status(format!("Error refreshing snapshot: {}", e));
            }
        },
    }
}
