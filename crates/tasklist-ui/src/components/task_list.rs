use tasklist_core::{
  EntryView,
  Partition,
  TaskId
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::TaskEntry;

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
  pub partition:  Partition,
  pub entries:    Vec<EntryView>,
  pub on_toggle:  Callback<TaskId>,
  pub on_dismiss: Callback<TaskId>
}

#[function_component(TaskList)]
pub fn task_list(
  props: &TaskListProps
) -> Html {
  html! {
      <section class="task-list">
          <h2>{ props.partition.heading() }</h2>
          <ul id={props.partition.element_id()}>
              {
                  for props.entries.iter().cloned().map(|entry| html! {
                      <TaskEntry
                          key={entry.id.to_string()}
                          entry={entry.clone()}
                          on_toggle={props.on_toggle.clone()}
                          on_dismiss={props.on_dismiss.clone()}
                      />
                  })
              }
          </ul>
      </section>
  }
}
