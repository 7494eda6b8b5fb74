use crate::task::TaskId;

/// Delete confirmation gate. At most one
/// task can be pending at a time.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default,
)]
pub enum ConfirmDialog {
  #[default]
  Hidden,
  Visible {
    target: TaskId
  }
}

impl ConfirmDialog {
  /// Shows the dialog for `target`,
  /// replacing any earlier target.
  pub fn open(&mut self, target: TaskId) {
    *self = Self::Visible { target };
  }

  pub fn cancel(&mut self) {
    *self = Self::Hidden;
  }

  /// Hides the dialog and hands back the
  /// pending target, if any.
  pub fn take_target(
    &mut self
  ) -> Option<TaskId> {
    let target = self.target();
    *self = Self::Hidden;
    target
  }

  pub fn target(&self) -> Option<TaskId> {
    match self {
      | Self::Hidden => None,
      | Self::Visible { target } => {
        Some(*target)
      }
    }
  }

  pub fn is_visible(&self) -> bool {
    matches!(self, Self::Visible { .. })
  }
}

#[cfg(test)]
mod tests {
  use super::ConfirmDialog;
  use crate::task::TaskId;

  #[test]
  fn reopening_replaces_target() {
    let first = TaskId::new();
    let second = TaskId::new();
    let mut dialog =
      ConfirmDialog::default();

    dialog.open(first);
    dialog.open(second);

    assert_eq!(
      dialog.target(),
      Some(second)
    );
    assert_eq!(
      dialog.take_target(),
      Some(second)
    );
    assert!(!dialog.is_visible());
  }

  #[test]
  fn cancel_hides_without_target() {
    let mut dialog =
      ConfirmDialog::default();
    dialog.open(TaskId::new());
    dialog.cancel();

    assert_eq!(
      dialog,
      ConfirmDialog::Hidden
    );
    assert_eq!(dialog.take_target(), None);
  }
}
