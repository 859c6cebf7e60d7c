use tether_core::{
  LinkSettings,
  Task,
  TaskDraft
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::TaskRow;
use crate::app::Action;

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
  pub tasks:      Vec<Task>,
  pub editing:    Option<i64>,
  pub edit_draft: TaskDraft,
  pub settings:   LinkSettings,
  pub on_action:  Callback<Action>
}

#[function_component(TaskList)]
pub fn task_list(
  props: &TaskListProps
) -> Html {
  if props.tasks.is_empty() {
    return html! {
        <section class="panel task-list empty">
            <div class="muted">{ "No tasks yet." }</div>
        </section>
    };
  }

  html! {
      <section class="panel task-list">
          <ul class="tasks">
              { for props.tasks.iter().map(|task| {
                  let editing = props.editing == Some(task.id);
                  html! {
                      <TaskRow
                          key={task.id.to_string()}
                          task={task.clone()}
                          editing={editing}
                          edit_draft={
                              if editing {
                                  props.edit_draft.clone()
                              } else {
                                  TaskDraft::default()
                              }
                          }
                          settings={props.settings}
                          on_action={props.on_action.clone()}
                      />
                  }
              }) }
          </ul>
      </section>
  }
}
