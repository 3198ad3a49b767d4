use serde::Serialize;

use crate::intent::BackgroundIntent;
use crate::list::LIST_SLOTS;

/// Two-way background choice; the widget has no intermediate shades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundToken {
    Light,
    Dark,
}

/// Bounded range for the monthly goal indicator. `max` is always at least
/// 1 and `current` at least 0, but `current` may exceed `max`: an
/// over-goal month is displayed over range, not clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressBounds {
    pub current: i64,
    pub max: i64,
}

/// Hours section with its two pre-formatted labels. Formatting rule:
/// Rust's default `f64` display, so `3.5` reads "Semana: 3.5 h" and
/// `40.0` reads "Mes: 40 h".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoursSection {
    pub week_label: String,
    pub month_label: String,
    pub progress: ProgressBounds,
}

/// A notes or events section: three fixed display slots, empty strings
/// for the ones the stored list did not fill.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListSection {
    pub slots: [String; LIST_SLOTS],
}

/// A fully populated widget instance, ready for the host to commit.
///
/// Hidden sections are `None`, mirroring a collapsed container. The three
/// action intents are registered on every render regardless of section
/// visibility.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetTemplate {
    pub background: BackgroundToken,
    pub hours: Option<HoursSection>,
    pub notes: Option<ListSection>,
    pub events: Option<ListSection>,
    pub actions: [BackgroundIntent; 3],
}
