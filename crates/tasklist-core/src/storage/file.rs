use std::fs;
use std::io::{
  ErrorKind,
  Write
};
use std::path::{
  Path,
  PathBuf
};

use anyhow::{
  Context,
  anyhow
};
use tempfile::NamedTempFile;
use tracing::{
  debug,
  info
};

use super::KeyValueStore;

/// Directory-backed store: every key is a
/// `<key>.json` file, replaced atomically
/// on write.
#[derive(Debug, Clone, PartialEq)]
pub struct FileStore {
  pub data_dir: PathBuf
}

impl FileStore {
  #[tracing::instrument(skip(data_dir))]
  pub fn open(
    data_dir: &Path
  ) -> anyhow::Result<Self> {
    let data_dir = data_dir.to_path_buf();
    fs::create_dir_all(&data_dir)
      .with_context(|| {
        format!(
          "failed to create {}",
          data_dir.display()
        )
      })?;

    info!(
      data_dir = %data_dir.display(),
      "opened file store"
    );
    Ok(Self { data_dir })
  }

  pub fn path_for(
    &self,
    key: &str
  ) -> anyhow::Result<PathBuf> {
    let valid = !key.is_empty()
      && key.chars().all(|ch| {
        ch.is_ascii_alphanumeric()
          || matches!(ch, '-' | '_' | '.')
      })
      && !key.starts_with('.');
    if !valid {
      return Err(anyhow!(
        "invalid storage key '{key}'"
      ));
    }
    Ok(
      self
        .data_dir
        .join(format!("{key}.json"))
    )
  }
}

impl KeyValueStore for FileStore {
  #[tracing::instrument(skip(self))]
  fn get_item(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>> {
    let path = self.path_for(key)?;
    match fs::read_to_string(&path) {
      | Ok(raw) => Ok(Some(raw)),
      | Err(err)
        if err.kind()
          == ErrorKind::NotFound =>
      {
        debug!(file = %path.display(), "no stored value");
        Ok(None)
      }
      | Err(err) => {
        Err(err).with_context(|| {
          format!(
            "failed reading {}",
            path.display()
          )
        })
      }
    }
  }

  #[tracing::instrument(skip(self, value))]
  fn set_item(
    &self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    let path = self.path_for(key)?;
    debug!(
      file = %path.display(),
      bytes = value.len(),
      "writing value atomically"
    );

    let mut temp =
      NamedTempFile::new_in(
        &self.data_dir
      )?;
    temp.write_all(value.as_bytes())?;
    temp.flush()?;
    temp.persist(&path).map_err(|err| {
      anyhow!(
        "failed to persist {}: {}",
        path.display(),
        err
      )
    })?;
    Ok(())
  }
}
