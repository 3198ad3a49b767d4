use serde::Serialize;
use std::fmt;

/// URI prefix the companion app's background handler is registered on.
const INTENT_SCHEME: &str = "horas://widget";

/// The three fixed button actions the widget exposes. Parameterless by
/// design; the companion app decides what each one mutates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActionId {
    #[serde(rename = "add_hour_1")]
    AddHour1,
    #[serde(rename = "add_hour_30min")]
    AddHour30Min,
    #[serde(rename = "add_note")]
    AddNote,
}

impl ActionId {
    pub const ALL: [ActionId; 3] = [ActionId::AddHour1, ActionId::AddHour30Min, ActionId::AddNote];

    pub fn as_str(self) -> &'static str {
        match self {
            ActionId::AddHour1 => "add_hour_1",
            ActionId::AddHour30Min => "add_hour_30min",
            ActionId::AddNote => "add_note",
        }
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fire-and-forget request addressed to the companion app. Carries the
/// action identifier and nothing else; dispatch and the resulting state
/// mutation happen outside the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BackgroundIntent {
    pub action: ActionId,
}

impl BackgroundIntent {
    pub fn new(action: ActionId) -> Self {
        Self { action }
    }

    pub fn uri(&self) -> String {
        format!("{}/{}", INTENT_SCHEME, self.action.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intent_uris_address_the_widget_handler() {
        assert_eq!(
            BackgroundIntent::new(ActionId::AddHour1).uri(),
            "horas://widget/add_hour_1"
        );
        assert_eq!(
            BackgroundIntent::new(ActionId::AddHour30Min).uri(),
            "horas://widget/add_hour_30min"
        );
        assert_eq!(
            BackgroundIntent::new(ActionId::AddNote).uri(),
            "horas://widget/add_note"
        );
    }

    #[test]
    fn all_lists_every_action_once() {
        assert_eq!(ActionId::ALL.len(), 3);
        assert_eq!(ActionId::AddHour1.to_string(), "add_hour_1");
    }
}
