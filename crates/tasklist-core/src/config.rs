use anyhow::Context;
use serde::{
  Deserialize,
  Serialize
};
use tracing::debug;

pub const DEFAULT_STORAGE_KEY: &str =
  "tasks";
pub const DEFAULT_PRIORITY: &str = "low";
pub const DEFAULT_EMPTY_TEXT_MESSAGE:
  &str = "Task text cannot be empty.";

/// Where tasks whose date does not parse
/// land within their priority tier.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
  Serialize,
  Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum UndatedPlacement {
  First,
  #[default]
  Last
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
#[serde(default)]
pub struct BoardConfig {
  pub storage_key:        String,
  pub default_priority:   String,
  pub undated:            UndatedPlacement,
  pub empty_text_message: String
}

impl Default for BoardConfig {
  fn default() -> Self {
    Self {
      storage_key:        DEFAULT_STORAGE_KEY
        .to_string(),
      default_priority:   DEFAULT_PRIORITY
        .to_string(),
      undated:            UndatedPlacement::Last,
      empty_text_message:
        DEFAULT_EMPTY_TEXT_MESSAGE
          .to_string()
    }
  }
}

impl BoardConfig {
  /// Parses a TOML document; keys that
  /// are left out keep their defaults.
  #[tracing::instrument(skip(raw))]
  pub fn from_toml_str(
    raw: &str
  ) -> anyhow::Result<Self> {
    let mut cfg: Self =
      toml::from_str(raw).context(
        "failed to parse board config"
      )?;

    if cfg.storage_key.trim().is_empty()
    {
      cfg.storage_key =
        DEFAULT_STORAGE_KEY.to_string();
    }
    if cfg
      .default_priority
      .trim()
      .is_empty()
    {
      cfg.default_priority =
        DEFAULT_PRIORITY.to_string();
    }

    debug!(
      storage_key = %cfg.storage_key,
      default_priority = %cfg.default_priority,
      undated = ?cfg.undated,
      "loaded board config"
    );
    Ok(cfg)
  }
}

#[cfg(test)]
mod tests {
  use super::{
    BoardConfig,
    UndatedPlacement
  };

  #[test]
  fn empty_document_uses_defaults() {
    let cfg = BoardConfig::from_toml_str(
      ""
    )
    .expect("parse empty config");
    assert_eq!(cfg, BoardConfig::default());
    assert_eq!(cfg.storage_key, "tasks");
    assert_eq!(
      cfg.default_priority,
      "low"
    );
  }

  #[test]
  fn overrides_are_applied() {
    let cfg = BoardConfig::from_toml_str(
      "storage_key = \"todo\"\nundated \
       = \"first\"\n"
    )
    .expect("parse config");
    assert_eq!(cfg.storage_key, "todo");
    assert_eq!(
      cfg.undated,
      UndatedPlacement::First
    );
    assert_eq!(
      cfg.default_priority,
      "low"
    );
  }

  #[test]
  fn blank_key_falls_back() {
    let cfg = BoardConfig::from_toml_str(
      "storage_key = \"  \"\n"
    )
    .expect("parse config");
    assert_eq!(cfg.storage_key, "tasks");
  }

  #[test]
  fn rejects_unknown_placement() {
    assert!(
      BoardConfig::from_toml_str(
        "undated = \"middle\"\n"
      )
      .is_err()
    );
  }
}
