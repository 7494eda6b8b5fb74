use std::fmt;

use chrono::{
  DateTime,
  NaiveDate
};
use serde::{
  Deserialize,
  Serialize
};
use uuid::Uuid;

/// Ranked priority of a task.
///
/// The three known tiers come from the
/// priority select; anything else loaded
/// from storage is kept verbatim as
/// `Unranked` and sorts below `Low`.
/// Unranked labels are only built by
/// `from_input`, `from_label` and
/// `missing`, so they never spell a
/// known tier.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
)]
#[serde(from = "String", into = "String")]
pub enum Priority {
  High,
  Medium,
  Low,
  Unranked(UnrankedLabel)
}

/// Label of a priority outside the known
/// tiers.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Hash,
)]
pub struct UnrankedLabel(String);

impl UnrankedLabel {
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl Priority {
  pub fn tier(&self) -> u8 {
    match self {
      | Self::High => 3,
      | Self::Medium => 2,
      | Self::Low => 1,
      | Self::Unranked(_) => 0
    }
  }

  /// Bracketed, capitalized display
  /// label, e.g. `[High]`.
  pub fn label(&self) -> String {
    match self {
      | Self::High => {
        "[High]".to_string()
      }
      | Self::Medium => {
        "[Medium]".to_string()
      }
      | Self::Low => "[Low]".to_string(),
      | Self::Unranked(raw) => {
        raw.0.clone()
      }
    }
  }

  /// Builds a priority from the raw
  /// select value (`high`, `medium`,
  /// `low`).
  pub fn from_input(
    value: &str
  ) -> Self {
    match known_tier(value) {
      | Some(priority) => priority,
      | None => {
        Self::Unranked(UnrankedLabel(
          format!(
            "[{}]",
            capitalize_first(
              value.trim()
            )
          )
        ))
      }
    }
  }

  /// Stand-in for a record stored
  /// without any priority.
  pub fn missing() -> Self {
    Self::Unranked(UnrankedLabel(
      String::new()
    ))
  }

  /// Parses a persisted label. Both
  /// `[High]` and `high` are accepted.
  pub fn from_label(
    label: &str
  ) -> Self {
    known_tier(label).unwrap_or_else(
      || {
        Self::Unranked(UnrankedLabel(
          label.to_string()
        ))
      }
    )
  }
}

impl From<String> for Priority {
  fn from(value: String) -> Self {
    Self::from_label(&value)
  }
}

impl From<Priority> for String {
  fn from(value: Priority) -> Self {
    value.label()
  }
}

impl fmt::Display for Priority {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(&self.label())
  }
}

fn known_tier(
  raw: &str
) -> Option<Priority> {
  let normalized = raw
    .trim()
    .trim_start_matches('[')
    .trim_end_matches(']')
    .trim()
    .to_ascii_lowercase();

  match normalized.as_str() {
    | "high" => Some(Priority::High),
    | "medium" => {
      Some(Priority::Medium)
    }
    | "low" => Some(Priority::Low),
    | _ => None
  }
}

fn capitalize_first(
  value: &str
) -> String {
  let mut chars = value.chars();
  match chars.next() {
    | Some(first) => {
      first
        .to_uppercase()
        .chain(chars)
        .collect()
    }
    | None => String::new()
  }
}

/// One persisted task, exactly as it is
/// laid out in storage.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub struct TaskRecord {
  #[serde(default)]
  pub text:     String,
  #[serde(default)]
  pub time:     String,
  #[serde(default)]
  pub date:     String,
  #[serde(default = "Priority::missing")]
  pub priority: Priority,
  #[serde(default)]
  pub done:     bool
}

impl TaskRecord {
  pub fn parsed_date(
    &self
  ) -> Option<NaiveDate> {
    parse_task_date(&self.date)
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  PartialOrd,
  Ord,
)]
pub struct TaskId(Uuid);

impl TaskId {
  pub fn new() -> Self {
    Self(Uuid::new_v4())
  }
}

impl Default for TaskId {
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for TaskId {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    fmt::Display::fmt(&self.0, f)
  }
}

/// A record addressed by a session-local
/// identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
  pub id:     TaskId,
  pub record: TaskRecord
}

impl Task {
  pub fn new(record: TaskRecord) -> Self {
    Self {
      id: TaskId::new(),
      record
    }
  }

  pub fn is_done(&self) -> bool {
    self.record.done
  }
}

/// The four input fields of the add form.
#[derive(
  Debug, Clone, PartialEq, Eq, Default,
)]
pub struct TaskDraft {
  pub text:     String,
  pub time:     String,
  pub date:     String,
  pub priority: String
}

impl TaskDraft {
  pub fn with_priority(
    priority: &str
  ) -> Self {
    Self {
      priority: priority.to_string(),
      ..Self::default()
    }
  }

  /// Clears every field. Priority goes
  /// back to `default_priority`, not to
  /// whatever was last selected.
  pub fn reset(
    &mut self,
    default_priority: &str
  ) {
    self.text.clear();
    self.time.clear();
    self.date.clear();
    self.priority =
      default_priority.to_string();
  }

  pub fn to_record(&self) -> TaskRecord {
    TaskRecord {
      text:     self.text.clone(),
      time:     self.time.clone(),
      date:     self.date.clone(),
      priority: Priority::from_input(
        &self.priority
      ),
      done:     false
    }
  }
}

const DATE_FORMATS: [&str; 3] =
  ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

pub fn parse_task_date(
  text: &str
) -> Option<NaiveDate> {
  let trimmed = text.trim();
  if trimmed.is_empty() {
    return None;
  }

  for format in DATE_FORMATS {
    if let Ok(date) =
      NaiveDate::parse_from_str(
        trimmed, format
      )
    {
      return Some(date);
    }
  }

  DateTime::parse_from_rfc3339(trimmed)
    .ok()
    .map(|stamp| stamp.date_naive())
}
