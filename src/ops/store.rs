use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};
use indexmap::IndexMap;

use crate::io::data_io::{self, DataError};
use crate::io::label_io;
use crate::model::category::Category;
use crate::model::labels::{self, LabelConfig};
use crate::model::state::StoreState;
use crate::model::task::{CompletedTask, Task};

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("task name cannot be empty")]
    EmptyName,
    #[error("task not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Data(#[from] DataError),
}

/// The single owner of all task records. Every mutation writes the full
/// state back to the data file before reporting success; when the write
/// fails the in-memory change is kept and the error is returned, so the
/// caller stays usable on the memory view until the next save lands.
pub struct TaskStore {
    state: StoreState,
    config: LabelConfig,
    dir: PathBuf,
    next_seq: u64,
}

impl TaskStore {
    /// Load the store from the data directory, merging configured label
    /// defaults into the persisted registry.
    pub fn load(dir: &Path) -> Result<TaskStore, DataError> {
        let state = data_io::load_state(dir)?;
        Ok(TaskStore::from_state(state, label_io::load_label_config(dir), dir))
    }

    /// An empty store writing to `dir` — the fallback when the data file
    /// cannot be read.
    pub fn empty(dir: &Path) -> TaskStore {
        TaskStore::from_state(StoreState::default(), label_io::load_label_config(dir), dir)
    }

    fn from_state(mut state: StoreState, config: LabelConfig, dir: &Path) -> TaskStore {
        // Documents that predate the priority field load with 0 everywhere;
        // array order is the authoritative order either way.
        for category in Category::ALL {
            renumber(state.tasks.get_mut(category));
        }
        // Configured defaults fill gaps only; registered entries stay
        // authoritative across runs.
        for d in &config.default_labels {
            if !state.label_colors.contains_key(&d.name) {
                state.label_colors.insert(d.name.clone(), d.color.clone());
            }
        }
        TaskStore {
            state,
            config,
            dir: dir.to_path_buf(),
            next_seq: 0,
        }
    }

    // -----------------------------------------------------------------------
    // Read access for the presentation layer
    // -----------------------------------------------------------------------

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    /// Active tasks in a quadrant, in priority order
    pub fn tasks(&self, category: Category) -> &[Task] {
        self.state.tasks.get(category)
    }

    pub fn completed(&self) -> &[CompletedTask] {
        &self.state.completed_tasks
    }

    pub fn label_colors(&self) -> &IndexMap<String, String> {
        &self.state.label_colors
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Add a task at the bottom of a quadrant. Rejects a name that trims to
    /// empty without touching memory or disk.
    pub fn create(
        &mut self,
        category: Category,
        name: &str,
        description: &str,
        due_date: Option<NaiveDate>,
        labels: &[String],
    ) -> Result<Task, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }
        let labels = normalize_labels(labels);
        for label in &labels {
            self.register_label(label);
        }

        let id = self.alloc_id();
        let bucket = self.state.tasks.get_mut(category);
        let task = Task {
            id,
            name: name.to_string(),
            description: description.to_string(),
            created_at: Utc::now(),
            due_date,
            labels,
            priority: bucket.len(),
        };
        bucket.push(task.clone());
        self.persist()?;
        Ok(task)
    }

    /// Overwrite an active task's editable fields. Id, creation time,
    /// priority, and quadrant are untouched.
    pub fn edit(
        &mut self,
        id: &str,
        name: &str,
        description: &str,
        due_date: Option<NaiveDate>,
        labels: &[String],
    ) -> Result<(), StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }
        let Some((category, idx)) = self.locate_active(id) else {
            return Err(StoreError::NotFound(id.to_string()));
        };
        let labels = normalize_labels(labels);
        for label in &labels {
            self.register_label(label);
        }

        let task = &mut self.state.tasks.get_mut(category)[idx];
        task.name = name.to_string();
        task.description = description.to_string();
        task.due_date = due_date;
        task.labels = labels;
        self.persist()
    }

    /// Move a task from its quadrant to the completed collection, stamping
    /// the completion time and keeping the quadrant as a historical tag.
    /// No-op if the id is not in the quadrant.
    pub fn complete(&mut self, category: Category, id: &str) -> Result<(), StoreError> {
        let bucket = self.state.tasks.get_mut(category);
        let Some(idx) = bucket.iter().position(|t| t.id == id) else {
            return Ok(());
        };
        let task = bucket.remove(idx);
        renumber(bucket);
        self.state
            .completed_tasks
            .push(task.into_completed(category, Utc::now()));
        self.persist()
    }

    /// Permanently remove an active task. No-op if the id is not in the
    /// quadrant.
    pub fn delete(&mut self, category: Category, id: &str) -> Result<(), StoreError> {
        let bucket = self.state.tasks.get_mut(category);
        let Some(idx) = bucket.iter().position(|t| t.id == id) else {
            return Ok(());
        };
        bucket.remove(idx);
        renumber(bucket);
        self.persist()
    }

    /// Permanently remove a completed task. No-op if the id is unknown.
    pub fn delete_completed(&mut self, id: &str) -> Result<(), StoreError> {
        let before = self.state.completed_tasks.len();
        self.state.completed_tasks.retain(|t| t.id != id);
        if self.state.completed_tasks.len() == before {
            return Ok(());
        }
        self.persist()
    }

    /// Swap a task with its predecessor in priority order. Returns false
    /// (and does not persist) when the task is first or not found.
    pub fn move_up(&mut self, category: Category, id: &str) -> Result<bool, StoreError> {
        let bucket = self.state.tasks.get_mut(category);
        let Some(idx) = bucket.iter().position(|t| t.id == id) else {
            return Ok(false);
        };
        if idx == 0 {
            return Ok(false);
        }
        bucket.swap(idx - 1, idx);
        bucket[idx - 1].priority = idx - 1;
        bucket[idx].priority = idx;
        self.persist()?;
        Ok(true)
    }

    /// Swap a task with its successor in priority order. Returns false
    /// (and does not persist) when the task is last or not found.
    pub fn move_down(&mut self, category: Category, id: &str) -> Result<bool, StoreError> {
        let bucket = self.state.tasks.get_mut(category);
        let Some(idx) = bucket.iter().position(|t| t.id == id) else {
            return Ok(false);
        };
        if idx + 1 >= bucket.len() {
            return Ok(false);
        }
        bucket.swap(idx, idx + 1);
        bucket[idx].priority = idx;
        bucket[idx + 1].priority = idx + 1;
        self.persist()?;
        Ok(true)
    }

    /// Move a task to the bottom of another quadrant, closing the gap it
    /// leaves behind. Returns false if the id is not in the source quadrant
    /// (or the source and destination are the same).
    pub fn move_to(&mut self, from: Category, to: Category, id: &str) -> Result<bool, StoreError> {
        if from == to {
            return Ok(false);
        }
        let source = self.state.tasks.get_mut(from);
        let Some(idx) = source.iter().position(|t| t.id == id) else {
            return Ok(false);
        };
        let mut task = source.remove(idx);
        renumber(source);

        let dest = self.state.tasks.get_mut(to);
        task.priority = dest.len();
        dest.push(task);
        self.persist()?;
        Ok(true)
    }

    // -----------------------------------------------------------------------
    // Labels
    // -----------------------------------------------------------------------

    /// Look up a label's display color. An unseen label gets a color derived
    /// from its name and is registered permanently — the one read operation
    /// with a documented write side effect. Once registered, the stored
    /// entry is authoritative.
    pub fn resolve_label_color(&mut self, label: &str) -> Result<String, StoreError> {
        if let Some(color) = self.state.label_colors.get(label) {
            return Ok(color.clone());
        }
        if !self.config.auto_generate_colors {
            return Ok(labels::FALLBACK_LABEL_COLOR.to_string());
        }
        let color = labels::derive_color(label);
        self.state
            .label_colors
            .insert(label.to_string(), color.clone());
        self.persist()?;
        Ok(color)
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    /// Ensure a registry entry for `label`, without persisting. Callers
    /// persist as part of their own mutation.
    fn register_label(&mut self, label: &str) {
        if self.state.label_colors.contains_key(label) {
            return;
        }
        if self.config.auto_generate_colors {
            self.state
                .label_colors
                .insert(label.to_string(), labels::derive_color(label));
        }
    }

    fn locate_active(&self, id: &str) -> Option<(Category, usize)> {
        for category in Category::ALL {
            if let Some(idx) = self.state.tasks.get(category).iter().position(|t| t.id == id) {
                return Some((category, idx));
            }
        }
        None
    }

    fn alloc_id(&mut self) -> String {
        let id = format!("{}-{}", Utc::now().timestamp_millis(), self.next_seq);
        self.next_seq += 1;
        id
    }

    fn persist(&self) -> Result<(), StoreError> {
        data_io::save_state(&self.dir, &self.state)?;
        Ok(())
    }
}

/// Restore the dense 0..n-1 priority ranks after a removal or load.
fn renumber(tasks: &mut [Task]) {
    for (i, task) in tasks.iter_mut().enumerate() {
        task.priority = i;
    }
}

/// Trim, drop empties, and deduplicate keeping first-seen order.
fn normalize_labels(labels: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for label in labels {
        let label = label.trim();
        if !label.is_empty() && !out.iter().any(|l| l == label) {
            out.push(label.to_string());
        }
    }
    out
}
