use tasklist_core::TaskDraft;
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  function_component,
  html
};

const PRIORITY_OPTIONS: [(&str, &str); 3] = [
  ("low", "Low"),
  ("medium", "Medium"),
  ("high", "High")
];

/// Option the select shows for `draft`.
/// Values outside the list fall back to
/// the first option.
fn selected_priority(
  draft: &TaskDraft
) -> &'static str {
  PRIORITY_OPTIONS
    .iter()
    .map(|(value, _)| *value)
    .find(|value| {
      value.eq_ignore_ascii_case(
        draft.priority.trim()
      )
    })
    .unwrap_or(PRIORITY_OPTIONS[0].0)
}

#[derive(Properties, PartialEq)]
pub struct TaskFormProps {
  pub draft:     TaskDraft,
  pub on_change: Callback<TaskDraft>,
  pub on_add:    Callback<()>
}

#[function_component(TaskForm)]
pub fn task_form(
  props: &TaskFormProps
) -> Html {
  let on_text = {
    let draft = props.draft.clone();
    let on_change =
      props.on_change.clone();
    Callback::from(move |e: web_sys::InputEvent| {
      let input: web_sys::HtmlInputElement = e.target_unchecked_into();
      let mut next = draft.clone();
      next.text = input.value();
      on_change.emit(next);
    })
  };
  let on_time = {
    let draft = props.draft.clone();
    let on_change =
      props.on_change.clone();
    Callback::from(move |e: web_sys::InputEvent| {
      let input: web_sys::HtmlInputElement = e.target_unchecked_into();
      let mut next = draft.clone();
      next.time = input.value();
      on_change.emit(next);
    })
  };
  let on_date = {
    let draft = props.draft.clone();
    let on_change =
      props.on_change.clone();
    Callback::from(move |e: web_sys::Event| {
      let input: web_sys::HtmlInputElement = e.target_unchecked_into();
      let mut next = draft.clone();
      next.date = input.value();
      on_change.emit(next);
    })
  };
  let on_priority = {
    let draft = props.draft.clone();
    let on_change =
      props.on_change.clone();
    Callback::from(move |e: web_sys::Event| {
      let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
      let mut next = draft.clone();
      next.priority = select.value();
      on_change.emit(next);
    })
  };
  let on_add = {
    let on_add = props.on_add.clone();
    Callback::from(move |_: yew::MouseEvent| on_add.emit(()))
  };

  html! {
      <div class="task-form">
          <input
              id="myInput"
              type="text"
              placeholder="Task..."
              value={props.draft.text.clone()}
              oninput={on_text}
          />
          <input
              id="timeInput"
              type="time"
              value={props.draft.time.clone()}
              oninput={on_time}
          />
          <input
              id="dateInput"
              type="date"
              value={props.draft.date.clone()}
              onchange={on_date}
          />
          <select
              id="priorityInput"
              value={selected_priority(&props.draft)}
              onchange={on_priority}
          >
              {
                  for PRIORITY_OPTIONS.iter().map(|(value, label)| html! {
                      <option value={*value}>{ *label }</option>
                  })
              }
          </select>
          <button class="btn" type="button" onclick={on_add}>{ "Add" }</button>
      </div>
  }
}
