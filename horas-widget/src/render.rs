use crate::intent::{ActionId, BackgroundIntent};
use crate::list::parse_list_field;
use crate::snapshot::{PersistedSnapshot, Theme};
use crate::template::{
    BackgroundToken, HoursSection, ListSection, ProgressBounds, WidgetTemplate,
};

/// Host-supplied ambient state, passed explicitly so the renderer stays
/// pure and testable instead of reading global OS state.
#[derive(Debug, Clone, Copy, Default)]
pub struct AmbientFlags {
    /// System-wide dark-theme preference.
    pub dark_mode: bool,
}

/// Populate a widget template from the persisted snapshot.
///
/// Stateless and side-effect free: the same snapshot and ambient flags
/// always produce an identical template. The host calls this once per
/// placed widget instance per update cycle and commits each result
/// independently.
pub fn render(snapshot: &PersistedSnapshot, ambient: AmbientFlags) -> WidgetTemplate {
    let effective_dark = snapshot.theme == Theme::Dark
        || (snapshot.theme == Theme::System && ambient.dark_mode);
    let background = if effective_dark {
        BackgroundToken::Dark
    } else {
        BackgroundToken::Light
    };

    // Sections are gated before any of their fields are computed.
    let hours = snapshot.show_hours.then(|| HoursSection {
        week_label: format!("Semana: {} h", snapshot.week_hours),
        month_label: format!("Mes: {} h", snapshot.month_hours),
        progress: ProgressBounds {
            // A zero or negative goal would make an invalid range.
            max: (snapshot.month_goal.floor() as i64).max(1),
            current: (snapshot.month_hours.floor() as i64).max(0),
        },
    });

    let notes = snapshot.show_notes.then(|| ListSection {
        slots: parse_list_field(&snapshot.notes),
    });

    let events = snapshot.show_events.then(|| ListSection {
        slots: parse_list_field(&snapshot.events),
    });

    WidgetTemplate {
        background,
        hours,
        notes,
        events,
        actions: [
            BackgroundIntent::new(ActionId::AddHour1),
            BackgroundIntent::new(ActionId::AddHour30Min),
            BackgroundIntent::new(ActionId::AddNote),
        ],
    }
}
