use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::state::StoreState;

/// Name of the task file inside the data directory
pub const DATA_FILE: &str = "tasks_data.json";

/// Error type for data-file I/O
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not serialize task data: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: io::Error,
    },
}

pub fn data_file(dir: &Path) -> PathBuf {
    dir.join(DATA_FILE)
}

/// Read the task file. A missing file is an empty store, not an error;
/// read and parse failures are reported so the caller can fall back.
pub fn load_state(dir: &Path) -> Result<StoreState, DataError> {
    let path = data_file(dir);
    if !path.exists() {
        return Ok(StoreState::default());
    }
    let content = fs::read_to_string(&path).map_err(|e| DataError::Read {
        path: path.clone(),
        source: e,
    })?;
    serde_json::from_str(&content).map_err(|e| DataError::Parse { path, source: e })
}

/// Overwrite the task file wholesale with the full state.
pub fn save_state(dir: &Path, state: &StoreState) -> Result<(), DataError> {
    let path = data_file(dir);
    let content = serde_json::to_string_pretty(state)?;
    atomic_write(&path, content.as_bytes()).map_err(|e| DataError::Write { path, source: e })
}

/// Write via temp file + rename so a crash mid-write never leaves a torn file.
fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::category::Category;
    use crate::model::task::Task;
    use chrono::{NaiveDate, TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn sample_state() -> StoreState {
        let mut state = StoreState::default();
        state.tasks.get_mut(Category::UrgentImportant).push(Task {
            id: "1754300000000-0".into(),
            name: "File taxes".into(),
            description: String::new(),
            created_at: Utc.with_ymd_and_hms(2026, 8, 1, 9, 0, 0).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2026, 8, 20),
            labels: vec!["home".into(), "urgent".into()],
            priority: 0,
        });
        state
            .label_colors
            .insert("home".into(), "#FFD700".into());
        state
            .label_colors
            .insert("urgent".into(), "#FF4444".into());
        state
    }

    #[test]
    fn test_save_load_round_trip() {
        let tmp = TempDir::new().unwrap();
        let state = sample_state();

        save_state(tmp.path(), &state).unwrap();
        let loaded = load_state(tmp.path()).unwrap();

        assert_eq!(loaded, state);
    }

    #[test]
    fn test_load_missing_file_is_empty_state() {
        let tmp = TempDir::new().unwrap();
        let state = load_state(tmp.path()).unwrap();
        assert_eq!(state, StoreState::default());
    }

    #[test]
    fn test_load_malformed_file_reports_parse_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(data_file(tmp.path()), "not json {{{").unwrap();
        assert!(matches!(
            load_state(tmp.path()),
            Err(DataError::Parse { .. })
        ));
    }

    #[test]
    fn test_load_legacy_document_with_text_field() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            data_file(tmp.path()),
            r#"{
                "tasks": {
                    "urgent_important": [
                        {
                            "id": "1699999999-0",
                            "text": "Legacy task",
                            "created_at": "2023-11-14T12:00:00Z"
                        }
                    ]
                },
                "completed_tasks": [
                    {
                        "id": "1699999998-0",
                        "text": "Legacy done",
                        "created_at": "2023-11-13T12:00:00Z",
                        "category": "not_urgent_important",
                        "completed_at": "2023-11-14T08:00:00Z"
                    }
                ]
            }"#,
        )
        .unwrap();

        let state = load_state(tmp.path()).unwrap();
        assert_eq!(
            state.tasks.get(Category::UrgentImportant)[0].name,
            "Legacy task"
        );
        assert_eq!(state.completed_tasks[0].name, "Legacy done");
        assert_eq!(
            state.completed_tasks[0].category,
            Category::NotUrgentImportant
        );
        // Sections the legacy file never wrote are present and empty
        assert!(state.tasks.get(Category::UrgentNotImportant).is_empty());
        assert!(state.label_colors.is_empty());
    }

    #[test]
    fn test_save_overwrites_wholesale() {
        let tmp = TempDir::new().unwrap();
        save_state(tmp.path(), &sample_state()).unwrap();
        save_state(tmp.path(), &StoreState::default()).unwrap();

        let loaded = load_state(tmp.path()).unwrap();
        assert_eq!(loaded, StoreState::default());
    }

    #[test]
    fn test_label_color_order_survives_round_trip() {
        let tmp = TempDir::new().unwrap();
        let state = sample_state();
        save_state(tmp.path(), &state).unwrap();
        let loaded = load_state(tmp.path()).unwrap();
        let keys: Vec<&String> = loaded.label_colors.keys().collect();
        assert_eq!(keys, vec!["home", "urgent"]);
    }
}
