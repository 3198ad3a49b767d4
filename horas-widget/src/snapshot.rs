use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

/// Display theme preference persisted by the companion app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    /// Parse a persisted theme string. Unknown values match neither "dark"
    /// nor "system" and therefore render light; only a *missing* field
    /// defaults to `System`.
    pub fn parse(value: &str) -> Self {
        match value {
            "dark" => Theme::Dark,
            "system" => Theme::System,
            _ => Theme::Light,
        }
    }
}

/// The key-value state the companion app persists for the widget.
///
/// Owned and written exclusively by the companion app (and its
/// background-intent handlers); the renderer only reads it. The two list
/// fields stay in their serialized form here and are parsed at render
/// time, so hidden sections never pay for parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedSnapshot {
    pub theme: Theme,
    pub show_hours: bool,
    pub week_hours: f64,
    pub month_hours: f64,
    pub month_goal: f64,
    pub show_notes: bool,
    pub notes: String,
    pub show_events: bool,
    pub events: String,
}

impl Default for PersistedSnapshot {
    fn default() -> Self {
        Self {
            theme: Theme::System,
            show_hours: true,
            week_hours: 0.0,
            month_hours: 0.0,
            month_goal: 0.0,
            show_notes: true,
            notes: "[]".to_string(),
            show_events: true,
            events: "[]".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("snapshot root must be a JSON object")]
    NotAnObject,
}

impl PersistedSnapshot {
    /// Parse the companion app's serialized snapshot. The document itself
    /// must be a JSON object; individual fields degrade per
    /// [`PersistedSnapshot::from_map`].
    pub fn from_json_str(raw: &str) -> Result<Self, SnapshotError> {
        let value: Value = serde_json::from_str(raw)?;
        let map = value.as_object().ok_or(SnapshotError::NotAnObject)?;
        Ok(Self::from_map(map))
    }

    /// Build a snapshot from a parsed key-value map. Missing or
    /// wrongly-typed fields fall back to their documented defaults field
    /// by field; one bad field never poisons the rest.
    pub fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            theme: Theme::parse(&string_field(map, "theme", "system")),
            show_hours: bool_field(map, "showHours", true),
            week_hours: float_field(map, "weekHours"),
            month_hours: float_field(map, "monthHours"),
            month_goal: float_field(map, "monthGoal"),
            show_notes: bool_field(map, "showNotes", true),
            notes: string_field(map, "notes", "[]"),
            show_events: bool_field(map, "showEvents", true),
            events: string_field(map, "events", "[]"),
        }
    }
}

fn bool_field(map: &Map<String, Value>, key: &str, default: bool) -> bool {
    match map.get(key) {
        None => default,
        Some(Value::Bool(b)) => *b,
        Some(_) => {
            warn!(key, "non-boolean snapshot field, using default");
            default
        }
    }
}

fn float_field(map: &Map<String, Value>, key: &str) -> f64 {
    match map.get(key) {
        None => 0.0,
        Some(value) => value.as_f64().unwrap_or_else(|| {
            warn!(key, "malformed numeric snapshot field, using 0");
            0.0
        }),
    }
}

fn string_field(map: &Map<String, Value>, key: &str, default: &str) -> String {
    match map.get(key) {
        None => default.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(_) => {
            warn!(key, "non-string snapshot field, using default");
            default.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_documented_defaults() {
        let snapshot = PersistedSnapshot::from_json_str("{}").unwrap();
        assert_eq!(snapshot, PersistedSnapshot::default());
        assert_eq!(snapshot.theme, Theme::System);
        assert!(snapshot.show_hours);
        assert_eq!(snapshot.notes, "[]");
    }

    #[test]
    fn fields_are_extracted_by_key() {
        let snapshot = PersistedSnapshot::from_json_str(
            r#"{
                "theme": "dark",
                "showHours": false,
                "weekHours": 3.5,
                "monthHours": 40.0,
                "monthGoal": 20,
                "showNotes": true,
                "notes": "[\"Buy milk\"]",
                "showEvents": false,
                "events": "[]"
            }"#,
        )
        .unwrap();
        assert_eq!(snapshot.theme, Theme::Dark);
        assert!(!snapshot.show_hours);
        assert_eq!(snapshot.week_hours, 3.5);
        assert_eq!(snapshot.month_hours, 40.0);
        assert_eq!(snapshot.month_goal, 20.0);
        assert_eq!(snapshot.notes, "[\"Buy milk\"]");
        assert!(!snapshot.show_events);
    }

    #[test]
    fn malformed_numeric_field_falls_back_to_zero() {
        let snapshot =
            PersistedSnapshot::from_json_str(r#"{"weekHours": "lots", "monthGoal": 20}"#).unwrap();
        assert_eq!(snapshot.week_hours, 0.0);
        assert_eq!(snapshot.month_goal, 20.0);
    }

    #[test]
    fn wrongly_typed_field_does_not_poison_others() {
        let snapshot =
            PersistedSnapshot::from_json_str(r#"{"showNotes": "yes", "notes": "[\"a\"]"}"#)
                .unwrap();
        assert!(snapshot.show_notes);
        assert_eq!(snapshot.notes, "[\"a\"]");
    }

    #[test]
    fn unknown_theme_renders_light_but_missing_theme_is_system() {
        assert_eq!(Theme::parse("banana"), Theme::Light);
        assert_eq!(Theme::parse("light"), Theme::Light);
        assert_eq!(Theme::parse("dark"), Theme::Dark);
        let snapshot = PersistedSnapshot::from_json_str("{}").unwrap();
        assert_eq!(snapshot.theme, Theme::System);
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(matches!(
            PersistedSnapshot::from_json_str("not json"),
            Err(SnapshotError::InvalidJson(_))
        ));
        assert!(matches!(
            PersistedSnapshot::from_json_str("[1, 2]"),
            Err(SnapshotError::NotAnObject)
        ));
    }
}
