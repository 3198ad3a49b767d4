use anyhow::{Context, Result};
use horas_widget::{BackgroundIntent, PersistedSnapshot};
use std::io::Write;
use std::path::Path;
use tracing::warn;

/// Read the companion app's persisted snapshot. A missing or unreadable
/// file is a blank widget, not an error: the render degrades to defaults
/// and the reason lands in the log.
pub fn load_snapshot(path: &Path) -> PersistedSnapshot {
    if !path.exists() {
        return PersistedSnapshot::default();
    }
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read snapshot, using defaults");
            return PersistedSnapshot::default();
        }
    };
    match PersistedSnapshot::from_json_str(&raw) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "invalid snapshot, using defaults");
            PersistedSnapshot::default()
        }
    }
}

/// Append one intent URI to the spool file the companion app drains.
/// Fire-and-forget: no acknowledgement and no retry.
pub fn append_intent(path: &Path, intent: &BackgroundIntent) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open intent spool at {}", path.display()))?;
    writeln!(file, "{}", intent.uri())?;
    Ok(())
}

/// Write the sample snapshot used by `horas-tui dev`.
pub fn seed_dev_snapshot(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, crate::test_data::SAMPLE_SNAPSHOT)
        .with_context(|| format!("Failed to seed snapshot at {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use horas_widget::{ActionId, Theme};

    #[test]
    fn missing_snapshot_is_a_blank_widget() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = load_snapshot(&dir.path().join("snapshot.json"));
        assert_eq!(snapshot, PersistedSnapshot::default());
    }

    #[test]
    fn corrupt_snapshot_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        std::fs::write(&path, "{{{not json").unwrap();
        assert_eq!(load_snapshot(&path), PersistedSnapshot::default());
    }

    #[test]
    fn seeded_snapshot_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        seed_dev_snapshot(&path).unwrap();
        let snapshot = load_snapshot(&path);
        assert_eq!(snapshot.theme, Theme::System);
        assert!(snapshot.week_hours > 0.0);
    }

    #[test]
    fn intents_append_one_uri_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("intents");
        append_intent(&path, &BackgroundIntent::new(ActionId::AddHour1)).unwrap();
        append_intent(&path, &BackgroundIntent::new(ActionId::AddNote)).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            raw.lines().collect::<Vec<_>>(),
            ["horas://widget/add_hour_1", "horas://widget/add_note"]
        );
    }
}
