use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use horas_widget::ActionId;

use super::action_queue::{Action, ActionTx};
use crate::app::App;

/// Map a key press onto the widget's three tap targets plus the host
/// chrome (refresh, quit). Dispatch is queued, not executed inline.
pub(super) fn handle_view_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Char('1') => {
            let _ = action_tx.send(Action::DispatchIntent(ActionId::AddHour1));
        }
        KeyCode::Char('3') => {
            let _ = action_tx.send(Action::DispatchIntent(ActionId::AddHour30Min));
        }
        KeyCode::Char('n') | KeyCode::Char('N') => {
            let _ = action_tx.send(Action::DispatchIntent(ActionId::AddNote));
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            let _ = action_tx.send(Action::RefreshSnapshot);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HorasConfig;

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    fn queued_action(c: char) -> Option<Action> {
        let mut app = App::new(&HorasConfig::default());
        let (tx, mut rx) = super::super::action_queue::channel();
        handle_view_key(key(c), &mut app, &tx);
        rx.try_recv().ok()
    }

    #[test]
    fn buttons_queue_their_fixed_action_identifiers() {
        assert_eq!(
            queued_action('1'),
            Some(Action::DispatchIntent(ActionId::AddHour1))
        );
        assert_eq!(
            queued_action('3'),
            Some(Action::DispatchIntent(ActionId::AddHour30Min))
        );
        assert_eq!(
            queued_action('n'),
            Some(Action::DispatchIntent(ActionId::AddNote))
        );
    }

    #[test]
    fn refresh_key_queues_a_refresh() {
        assert_eq!(queued_action('r'), Some(Action::RefreshSnapshot));
    }

    #[test]
    fn unmapped_keys_queue_nothing() {
        assert_eq!(queued_action('x'), None);
        assert_eq!(queued_action('2'), None);
    }

    #[test]
    fn quit_key_stops_the_app_without_queueing() {
        let mut app = App::new(&HorasConfig::default());
        let (tx, mut rx) = super::super::action_queue::channel();
        handle_view_key(key('q'), &mut app, &tx);
        assert!(!app.running);
        assert!(rx.try_recv().is_err());
    }
}
