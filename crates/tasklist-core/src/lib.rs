pub mod board;
pub mod codec;
pub mod config;
pub mod dialog;
pub mod render;
pub mod sort;
pub mod storage;
pub mod task;

pub use board::{
  AddOutcome,
  TaskBoard,
  ValidationError
};
pub use config::{
  BoardConfig,
  UndatedPlacement
};
pub use dialog::ConfirmDialog;
pub use render::{
  EntryView,
  Partition
};
pub use storage::{
  KeyValueStore,
  MemoryStore,
  TaskStorage
};
pub use task::{
  Priority,
  Task,
  TaskDraft,
  TaskId,
  TaskRecord,
  UnrankedLabel
};
