use std::fmt;

use tracing::{
  debug,
  info
};

use crate::config::BoardConfig;
use crate::dialog::ConfirmDialog;
use crate::render::Partition;
use crate::sort::sort_active;
use crate::storage::{
  KeyValueStore,
  TaskStorage
};
use crate::task::{
  Task,
  TaskDraft,
  TaskId,
  TaskRecord
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
  EmptyText
}

impl fmt::Display for ValidationError {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    match self {
      | Self::EmptyText => {
        f.write_str("task text is empty")
      }
    }
  }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
  Added(TaskId),
  Rejected(ValidationError)
}

/// Owns the task collection, the delete
/// dialog and the storage mirror. Every
/// committed mutation is followed by a
/// full save.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskBoard<S> {
  storage:   TaskStorage<S>,
  config:    BoardConfig,
  active:    Vec<Task>,
  completed: Vec<Task>,
  dialog:    ConfirmDialog
}

impl<S: KeyValueStore> TaskBoard<S> {
  /// Builds a board from whatever is
  /// currently stored.
  #[tracing::instrument(skip_all)]
  pub fn open(
    store: S,
    config: BoardConfig
  ) -> anyhow::Result<Self> {
    let mut board =
      Self::empty(store, config);
    let records = board.storage.load()?;

    for record in records {
      let task = Task::new(record);
      if task.is_done() {
        board.completed.push(task);
      } else {
        board.active.push(task);
      }
    }
    sort_active(
      &mut board.active,
      board.config.undated
    );

    info!(
      active = board.active.len(),
      completed = board.completed.len(),
      "opened task board"
    );
    Ok(board)
  }

  /// A board with nothing loaded. Later
  /// saves still go to `store`.
  pub fn empty(
    store: S,
    config: BoardConfig
  ) -> Self {
    Self {
      storage: TaskStorage::new(
        store,
        config.storage_key.clone()
      ),
      config,
      active: Vec::new(),
      completed: Vec::new(),
      dialog: ConfirmDialog::Hidden
    }
  }

  pub fn config(&self) -> &BoardConfig {
    &self.config
  }

  pub fn active(&self) -> &[Task] {
    &self.active
  }

  pub fn completed(&self) -> &[Task] {
    &self.completed
  }

  pub fn dialog(&self) -> ConfirmDialog {
    self.dialog
  }

  pub fn len(&self) -> usize {
    self.active.len() + self.completed.len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  pub fn find(
    &self,
    id: TaskId
  ) -> Option<&Task> {
    self
      .active
      .iter()
      .chain(self.completed.iter())
      .find(|task| task.id == id)
  }

  pub fn partition_of(
    &self,
    id: TaskId
  ) -> Option<Partition> {
    self.find(id).map(|task| {
      Partition::for_done(task.is_done())
    })
  }

  /// Active tasks first, then completed,
  /// in display order.
  pub fn snapshot(&self) -> Vec<TaskRecord> {
    self
      .active
      .iter()
      .chain(self.completed.iter())
      .map(|task| task.record.clone())
      .collect()
  }

  pub fn persist(
    &self
  ) -> anyhow::Result<()> {
    self.storage.save(&self.snapshot())
  }

  /// Creates a task from the form fields.
  ///
  /// The draft is cleared whether or not
  /// the task was accepted.
  #[tracing::instrument(skip_all)]
  pub fn add(
    &mut self,
    draft: &mut TaskDraft
  ) -> anyhow::Result<AddOutcome> {
    let record = draft.to_record();
    draft.reset(
      &self.config.default_priority
    );

    if record.text.is_empty() {
      debug!("rejected task with empty text");
      return Ok(AddOutcome::Rejected(
        ValidationError::EmptyText
      ));
    }

    let task = Task::new(record);
    let id = task.id;
    debug!(
      %id,
      priority = %task.record.priority,
      "adding task"
    );
    self.active.push(task);
    sort_active(
      &mut self.active,
      self.config.undated
    );
    self.persist()?;
    Ok(AddOutcome::Added(id))
  }

  /// Flips completion and moves the task
  /// to the end of the other list.
  /// Returns where it ended up, or `None`
  /// for an unknown id.
  #[tracing::instrument(skip(self))]
  pub fn toggle(
    &mut self,
    id: TaskId
  ) -> anyhow::Result<Option<Partition>> {
    let destination = if let Some(index) =
      position(&self.active, id)
    {
      let mut task =
        self.active.remove(index);
      task.record.done = true;
      self.completed.push(task);
      Partition::Completed
    } else if let Some(index) =
      position(&self.completed, id)
    {
      let mut task =
        self.completed.remove(index);
      task.record.done = false;
      self.active.push(task);
      Partition::Active
    } else {
      debug!("toggle for unknown task ignored");
      return Ok(None);
    };

    sort_active(
      &mut self.active,
      self.config.undated
    );
    self.persist()?;
    debug!(to = ?destination, "moved task");
    Ok(Some(destination))
  }

  /// Opens the confirmation dialog for
  /// `id`. Returns `false` when no such
  /// task exists.
  pub fn request_delete(
    &mut self,
    id: TaskId
  ) -> bool {
    if self.find(id).is_none() {
      return false;
    }
    self.dialog.open(id);
    debug!(%id, "awaiting delete confirmation");
    true
  }

  /// Deletes the pending target and
  /// hides the dialog.
  #[tracing::instrument(skip(self))]
  pub fn confirm_delete(
    &mut self
  ) -> anyhow::Result<Option<Task>> {
    let Some(id) = self.dialog.take_target()
    else {
      return Ok(None);
    };

    let removed = if let Some(index) =
      position(&self.active, id)
    {
      Some(self.active.remove(index))
    } else {
      position(&self.completed, id).map(
        |index| {
          self.completed.remove(index)
        }
      )
    };

    if removed.is_some() {
      self.persist()?;
      debug!(%id, "deleted task");
    }
    Ok(removed)
  }

  pub fn cancel_delete(&mut self) {
    self.dialog.cancel();
  }
}

fn position(
  tasks: &[Task],
  id: TaskId
) -> Option<usize> {
  tasks.iter().position(|task| task.id == id)
}
