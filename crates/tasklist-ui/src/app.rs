use gloo::console::log;
use tasklist_core::render::render_list;
use tasklist_core::{
  AddOutcome,
  BoardConfig,
  Partition,
  TaskBoard,
  TaskDraft,
  TaskId
};
use yew::{
  Callback,
  Html,
  UseStateHandle,
  function_component,
  html,
  use_effect_with,
  use_state
};

use crate::components::{
  ConfirmModal,
  TaskForm,
  TaskList
};
use crate::storage::LocalStore;

const BOARD_CONFIG_TOML: &str =
  include_str!("../tasklist.toml");

type Board = TaskBoard<LocalStore>;

#[function_component(App)]
pub fn app() -> Html {
  let board = use_state(open_board);
  let draft = {
    let default_priority = board
      .config()
      .default_priority
      .clone();
    use_state(move || {
      TaskDraft::with_priority(
        &default_priority
      )
    })
  };

  {
    use_effect_with((), move |_| {
      ui_debug(
        "app.mounted",
        "frontend mounted and board \
         loaded"
      );
      || ()
    });
  }

  let on_draft_change = {
    let draft = draft.clone();
    Callback::from(move |next: TaskDraft| {
      draft.set(next);
    })
  };

  let on_add = {
    let board = board.clone();
    let draft = draft.clone();
    Callback::from(move |()| {
      let mut next = (*board).clone();
      let mut fields = (*draft).clone();
      match next.add(&mut fields) {
        | Ok(AddOutcome::Added(id)) => {
          ui_debug(
            "task.added",
            &id.to_string()
          );
        }
        | Ok(AddOutcome::Rejected(
          reason
        )) => {
          tracing::debug!(
            %reason,
            "task rejected"
          );
          gloo::dialogs::alert(
            &next
              .config()
              .empty_text_message
          );
        }
        | Err(error) => {
          report_storage_error(
            "add", &error
          );
        }
      }
      draft.set(fields);
      board.set(next);
    })
  };

  let on_toggle = {
    let board = board.clone();
    Callback::from(move |id: TaskId| {
      mutate(&board, |next| {
        let moved = next.toggle(id)?;
        ui_debug(
          "task.toggled",
          &format!("{id} -> {moved:?}")
        );
        Ok(())
      });
    })
  };

  let on_dismiss = {
    let board = board.clone();
    Callback::from(move |id: TaskId| {
      let mut next = (*board).clone();
      if next.request_delete(id) {
        board.set(next);
      }
    })
  };

  let on_confirm = {
    let board = board.clone();
    Callback::from(move |()| {
      mutate(&board, |next| {
        if let Some(task) =
          next.confirm_delete()?
        {
          ui_debug(
            "task.deleted",
            &task.id.to_string()
          );
        }
        Ok(())
      });
    })
  };

  let on_cancel = {
    let board = board.clone();
    Callback::from(move |()| {
      let mut next = (*board).clone();
      next.cancel_delete();
      board.set(next);
    })
  };

  html! {
      <div class="app">
          <h1>{ "To-Do List" }</h1>
          <TaskForm
              draft={(*draft).clone()}
              on_change={on_draft_change}
              on_add={on_add}
          />
          <TaskList
              partition={Partition::Active}
              entries={render_list(board.active())}
              on_toggle={on_toggle.clone()}
              on_dismiss={on_dismiss.clone()}
          />
          <TaskList
              partition={Partition::Completed}
              entries={render_list(board.completed())}
              on_toggle={on_toggle}
              on_dismiss={on_dismiss}
          />
          <ConfirmModal
              visible={board.dialog().is_visible()}
              on_confirm={on_confirm}
              on_cancel={on_cancel}
          />
      </div>
  }
}

/// Applies `apply` to a copy of the board
/// and commits it. A failed save is
/// logged; the visible change stays.
fn mutate(
  board: &UseStateHandle<Board>,
  apply: impl FnOnce(
    &mut Board
  ) -> anyhow::Result<()>
) {
  let mut next = (**board).clone();
  if let Err(error) = apply(&mut next) {
    report_storage_error(
      "mutate", &error
    );
  }
  board.set(next);
}

fn open_board() -> Board {
  let config = load_board_config();
  match TaskBoard::open(
    LocalStore,
    config.clone()
  ) {
    | Ok(board) => board,
    | Err(error) => {
      report_storage_error(
        "open", &error
      );
      TaskBoard::empty(LocalStore, config)
    }
  }
}

fn load_board_config() -> BoardConfig {
  match BoardConfig::from_toml_str(
    BOARD_CONFIG_TOML
  ) {
    | Ok(config) => config,
    | Err(error) => {
      tracing::error!(
        error = %format!("{error:#}"),
        "failed parsing board config; \
         using defaults"
      );
      BoardConfig::default()
    }
  }
}

fn report_storage_error(
  action: &str,
  error: &anyhow::Error
) {
  tracing::error!(
    action,
    error = %format!("{error:#}"),
    "task storage failed"
  );
}

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
