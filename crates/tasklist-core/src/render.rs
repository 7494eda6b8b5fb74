use crate::task::{
  Task,
  TaskId
};

/// The two list containers.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash,
)]
pub enum Partition {
  Active,
  Completed
}

impl Partition {
  pub fn for_done(done: bool) -> Self {
    if done {
      Self::Completed
    } else {
      Self::Active
    }
  }

  pub fn element_id(
    &self
  ) -> &'static str {
    match self {
      | Self::Active => "activeUL",
      | Self::Completed => "completedUL"
    }
  }

  pub fn heading(&self) -> &'static str {
    match self {
      | Self::Active => "Active Tasks",
      | Self::Completed => {
        "Completed Tasks"
      }
    }
  }
}

/// Display projection of one list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryView {
  pub id:             TaskId,
  pub text:           String,
  pub time:           String,
  pub date:           String,
  pub priority_label: String,
  pub done:           bool
}

impl EntryView {
  pub fn class(&self) -> &'static str {
    if self.done { "done" } else { "" }
  }

  pub fn partition(&self) -> Partition {
    Partition::for_done(self.done)
  }
}

pub fn render_entry(task: &Task) -> EntryView {
  EntryView {
    id:             task.id,
    text:           task.record.text.clone(),
    time:           task.record.time.clone(),
    date:           task.record.date.clone(),
    priority_label: task
      .record
      .priority
      .label(),
    done:           task.record.done
  }
}

pub fn render_list(
  tasks: &[Task]
) -> Vec<EntryView> {
  tasks.iter().map(render_entry).collect()
}
