use anyhow::Context;
use tracing::{
  debug,
  warn
};

use crate::task::TaskRecord;

pub fn serialize(
  records: &[TaskRecord]
) -> anyhow::Result<String> {
  serde_json::to_string(records)
    .context(
      "failed to encode task snapshot"
    )
}

/// Decodes a stored snapshot.
///
/// Absent, blank, or malformed input
/// decodes to an empty collection.
pub fn deserialize(
  raw: Option<&str>
) -> Vec<TaskRecord> {
  let Some(raw) = raw else {
    return Vec::new();
  };
  if raw.trim().is_empty() {
    return Vec::new();
  }

  match serde_json::from_str::<
    Option<Vec<TaskRecord>>
  >(raw)
  {
    | Ok(records) => {
      let records =
        records.unwrap_or_default();
      debug!(
        count = records.len(),
        "decoded task snapshot"
      );
      records
    }
    | Err(error) => {
      warn!(
        %error,
        "discarding malformed task \
         snapshot"
      );
      Vec::new()
    }
  }
}

#[cfg(test)]
mod tests {
  use super::{
    deserialize,
    serialize
  };
  use crate::task::{
    Priority,
    TaskRecord
  };

  fn record(
    text: &str,
    priority: Priority,
    done: bool
  ) -> TaskRecord {
    TaskRecord {
      text: text.to_string(),
      time: "09:15".to_string(),
      date: "2024-05-02".to_string(),
      priority,
      done
    }
  }

  #[test]
  fn snapshot_survives_encoding() {
    let records = vec![
      record(
        "Water plants",
        Priority::High,
        false
      ),
      record(
        "File taxes",
        Priority::from_label(
          "[Someday]"
        ),
        true
      ),
    ];

    let encoded = serialize(&records)
      .expect("encode snapshot");
    assert_eq!(
      deserialize(Some(&encoded)),
      records
    );
  }

  #[test]
  fn stored_layout_uses_display_labels()
  {
    let encoded = serialize(&[record(
      "Buy milk",
      Priority::High,
      false
    )])
    .expect("encode snapshot");

    let value: serde_json::Value =
      serde_json::from_str(&encoded)
        .expect("valid json");
    assert_eq!(
      value,
      serde_json::json!([{
        "text": "Buy milk",
        "time": "09:15",
        "date": "2024-05-02",
        "priority": "[High]",
        "done": false
      }])
    );
  }

  #[test]
  fn absent_or_malformed_input_is_empty()
  {
    assert!(deserialize(None).is_empty());
    assert!(
      deserialize(Some("")).is_empty()
    );
    assert!(
      deserialize(Some("null"))
        .is_empty()
    );
    assert!(
      deserialize(Some("{not json"))
        .is_empty()
    );
    assert!(
      deserialize(Some(
        r#"{"text":"not a list"}"#
      ))
      .is_empty()
    );
  }

  #[test]
  fn missing_fields_take_defaults() {
    let decoded = deserialize(Some(
      r#"[{"text":"Call mom"}]"#
    ));

    assert_eq!(decoded.len(), 1);
    assert_eq!(
      decoded[0].text,
      "Call mom"
    );
    assert!(decoded[0].time.is_empty());
    assert_eq!(
      decoded[0].priority.tier(),
      0
    );
    assert!(!decoded[0].done);
  }
}
