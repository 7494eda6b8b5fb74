use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use anyhow::Context;
use tracing::{
  debug,
  info
};

use crate::codec;
use crate::task::TaskRecord;

#[cfg(not(target_arch = "wasm32"))]
mod file;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;

/// Synchronous string key-value store,
/// shaped after the browser's
/// `localStorage`.
pub trait KeyValueStore {
  fn get_item(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>>;

  fn set_item(
    &self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()>;
}

/// In-memory store. Clones share the same
/// contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
  items:
    Rc<RefCell<BTreeMap<String, String>>>
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_item(
    key: &str,
    value: &str
  ) -> Self {
    let store = Self::new();
    store.items.borrow_mut().insert(
      key.to_string(),
      value.to_string()
    );
    store
  }

  pub fn len(&self) -> usize {
    self.items.borrow().len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.borrow().is_empty()
  }
}

impl PartialEq for MemoryStore {
  fn eq(&self, other: &Self) -> bool {
    Rc::ptr_eq(&self.items, &other.items)
  }
}

impl KeyValueStore for MemoryStore {
  fn get_item(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>> {
    Ok(self.items.borrow().get(key).cloned())
  }

  fn set_item(
    &self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    self.items.borrow_mut().insert(
      key.to_string(),
      value.to_string()
    );
    Ok(())
  }
}

/// Reads and writes the whole task
/// collection under one key.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskStorage<S> {
  store: S,
  key:   String
}

impl<S: KeyValueStore> TaskStorage<S> {
  pub fn new(
    store: S,
    key: impl Into<String>
  ) -> Self {
    Self {
      store,
      key: key.into()
    }
  }

  pub fn key(&self) -> &str {
    &self.key
  }

  pub fn store(&self) -> &S {
    &self.store
  }

  /// Overwrites the stored snapshot.
  #[tracing::instrument(
    skip(self, records),
    fields(key = %self.key, count = records.len())
  )]
  pub fn save(
    &self,
    records: &[TaskRecord]
  ) -> anyhow::Result<()> {
    let encoded =
      codec::serialize(records)?;
    self
      .store
      .set_item(&self.key, &encoded)
      .with_context(|| {
        format!(
          "failed to save tasks under \
           '{}'",
          self.key
        )
      })?;
    debug!("saved task snapshot");
    Ok(())
  }

  /// Loads the stored snapshot; absent or
  /// malformed data is an empty list.
  #[tracing::instrument(
    skip(self),
    fields(key = %self.key)
  )]
  pub fn load(
    &self
  ) -> anyhow::Result<Vec<TaskRecord>> {
    let raw = self
      .store
      .get_item(&self.key)
      .with_context(|| {
        format!(
          "failed to read tasks under \
           '{}'",
          self.key
        )
      })?;

    let records =
      codec::deserialize(raw.as_deref());
    info!(
      count = records.len(),
      "loaded task snapshot"
    );
    Ok(records)
  }
}

#[cfg(test)]
mod tests {
  use super::{
    KeyValueStore,
    MemoryStore,
    TaskStorage
  };
  use crate::task::{
    Priority,
    TaskRecord
  };

  fn sample() -> Vec<TaskRecord> {
    vec![TaskRecord {
      text:     "Pay rent".to_string(),
      time:     String::new(),
      date:     "2024-06-01".to_string(),
      priority: Priority::Medium,
      done:     false
    }]
  }

  #[test]
  fn absent_key_loads_empty() {
    let storage = TaskStorage::new(
      MemoryStore::new(),
      "tasks"
    );
    assert!(
      storage
        .load()
        .expect("load")
        .is_empty()
    );
  }

  #[test]
  fn save_overwrites_previous_snapshot() {
    let store = MemoryStore::new();
    let storage =
      TaskStorage::new(store.clone(), "tasks");

    storage.save(&sample()).expect("save");
    storage.save(&[]).expect("save empty");

    assert_eq!(
      store
        .get_item("tasks")
        .expect("get")
        .as_deref(),
      Some("[]")
    );
    assert_eq!(store.len(), 1);
  }

  #[test]
  fn repeated_saves_are_identical() {
    let store = MemoryStore::new();
    let storage =
      TaskStorage::new(store.clone(), "tasks");

    storage.save(&sample()).expect("save");
    let first = store
      .get_item("tasks")
      .expect("get");
    storage.save(&sample()).expect("save");
    let second = store
      .get_item("tasks")
      .expect("get");

    assert_eq!(first, second);
  }

  #[test]
  fn malformed_value_loads_empty() {
    let storage = TaskStorage::new(
      MemoryStore::with_item(
        "tasks", "[{oops"
      ),
      "tasks"
    );
    assert!(
      storage
        .load()
        .expect("load")
        .is_empty()
    );
  }

  #[test]
  fn clones_share_contents() {
    let store = MemoryStore::new();
    let other = store.clone();
    other
      .set_item("k", "v")
      .expect("set");
    assert_eq!(
      store.get_item("k").expect("get"),
      Some("v".to_string())
    );
    assert_eq!(store, other);
  }
}
