use anyhow::anyhow;
use tasklist_core::KeyValueStore;

/// The browser's `window.localStorage`.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default,
)]
pub struct LocalStore;

impl LocalStore {
  fn storage()
  -> anyhow::Result<web_sys::Storage> {
    web_sys::window()
      .ok_or_else(|| {
        anyhow!("no browser window")
      })?
      .local_storage()
      .map_err(|err| {
        anyhow!(
          "local storage unavailable: \
           {err:?}"
        )
      })?
      .ok_or_else(|| {
        anyhow!(
          "local storage unavailable"
        )
      })
  }
}

impl KeyValueStore for LocalStore {
  fn get_item(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>> {
    Self::storage()?
      .get_item(key)
      .map_err(|err| {
        anyhow!(
          "failed reading '{key}': \
           {err:?}"
        )
      })
  }

  fn set_item(
    &self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    Self::storage()?
      .set_item(key, value)
      .map_err(|err| {
        anyhow!(
          "failed writing '{key}': \
           {err:?}"
        )
      })
  }
}
