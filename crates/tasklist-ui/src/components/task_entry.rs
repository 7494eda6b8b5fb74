use tasklist_core::{
  EntryView,
  TaskId
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskEntryProps {
  pub entry:      EntryView,
  pub on_toggle:  Callback<TaskId>,
  pub on_dismiss: Callback<TaskId>
}

#[function_component(TaskEntry)]
pub fn task_entry(
  props: &TaskEntryProps
) -> Html {
  let id = props.entry.id;
  let on_toggle =
    props.on_toggle.clone();
  let on_dismiss =
    props.on_dismiss.clone();

  html! {
      <li class={props.entry.class()} onclick={move |_| on_toggle.emit(id)}>
          <span class="task-text">{ &props.entry.text }</span>
          { " - " }
          <span class="time-text">{ &props.entry.time }</span>
          { " - " }
          <span class="date-text">{ &props.entry.date }</span>
          <span class="priority">{ &props.entry.priority_label }</span>
          <span
              class="close"
              onclick={move |e: yew::MouseEvent| {
                  e.stop_propagation();
                  on_dismiss.emit(id);
              }}
          >
              { "\u{00D7}" }
          </span>
      </li>
  }
}
