use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ConfirmModalProps {
  pub visible:    bool,
  pub on_confirm: Callback<()>,
  pub on_cancel:  Callback<()>
}

#[function_component(ConfirmModal)]
pub fn confirm_modal(
  props: &ConfirmModalProps
) -> Html {
  if !props.visible {
    return html! {};
  }

  let on_confirm = {
    let on_confirm =
      props.on_confirm.clone();
    Callback::from(move |_: yew::MouseEvent| {
      on_confirm.emit(())
    })
  };
  let on_cancel = {
    let on_cancel =
      props.on_cancel.clone();
    Callback::from(move |_: yew::MouseEvent| {
      on_cancel.emit(())
    })
  };

  html! {
      <div id="confirmationModal" class="modal-backdrop" onclick={on_cancel.clone()}>
          <div class="modal" onclick={Callback::from(|e: yew::MouseEvent| e.stop_propagation())}>
              <div class="content">
                  { "Are you sure you want to delete this task?" }
              </div>
              <div class="footer">
                  <button
                      id="cancelDelete"
                      class="btn"
                      type="button"
                      onclick={on_cancel}
                  >
                      { "Cancel" }
                  </button>
                  <button
                      id="confirmDelete"
                      class="btn danger"
                      type="button"
                      onclick={on_confirm}
                  >
                      { "Delete" }
                  </button>
              </div>
          </div>
      </div>
  }
}
