use chrono::Local;
use tether_core::{
  LinkSettings,
  Task,
  TaskDraft
};
use yew::{
  Callback,
  Event,
  Html,
  Properties,
  classes,
  function_component,
  html
};

use super::{
  LinkList,
  click_action,
  input_action,
  key_action
};
use crate::app::Action;

#[derive(Properties, PartialEq)]
pub struct TaskRowProps {
  pub task:       Task,
  pub editing:    bool,
  pub edit_draft: TaskDraft,
  pub settings:   LinkSettings,
  pub on_action:  Callback<Action>
}

#[function_component(TaskRow)]
pub fn task_row(
  props: &TaskRowProps
) -> Html {
  if props.editing {
    edit_view(props)
  } else {
    read_view(props)
  }
}

fn read_view(
  props: &TaskRowProps
) -> Html {
  let task = &props.task;
  let id = task.id;
  let on_toggle = {
    let on_action =
      props.on_action.clone();
    Callback::from(move |_: Event| {
      on_action
        .emit(Action::ToggleComplete(id))
    })
  };
  let on_edit = click_action(
    &props.on_action,
    Action::StartEdit(id)
  );
  let on_delete = click_action(
    &props.on_action,
    Action::DeleteTask(id)
  );
  let created = task
    .created_at
    .with_timezone(&Local)
    .format("%b %-d, %Y %H:%M")
    .to_string();

  html! {
      <li class={classes!("task", task.completed.then_some("completed"))}>
          <input
              class="task-check"
              type="checkbox"
              checked={task.completed}
              onchange={on_toggle}
          />
          <div class="task-body">
              <div class="task-title">{ task.title.clone() }</div>
              <div class="task-meta muted">{ created }</div>
              <LinkList
                  links={task.links.clone()}
                  show_icons={props.settings.show_link_icons}
              />
          </div>
          <div class="task-actions">
              <button class="btn" onclick={on_edit}>{ "Edit" }</button>
              <button class="btn danger" onclick={on_delete}>{ "Delete" }</button>
          </div>
      </li>
  }
}

fn edit_view(
  props: &TaskRowProps
) -> Html {
  let draft = &props.edit_draft;
  let on_action = &props.on_action;

  let on_title = input_action(
    on_action,
    Action::SetEditTitle
  );
  let on_title_key = key_action(
    on_action,
    Action::SaveEdit,
    Some(Action::CancelEdit)
  );
  let on_link = input_action(
    on_action,
    Action::SetEditLink
  );
  let on_link_key = key_action(
    on_action,
    Action::AddEditLink,
    Some(Action::CancelEdit)
  );
  let on_add_link = click_action(
    on_action,
    Action::AddEditLink
  );
  let on_save = click_action(
    on_action,
    Action::SaveEdit
  );
  let on_cancel = click_action(
    on_action,
    Action::CancelEdit
  );
  let on_remove = {
    let on_action = on_action.clone();
    Callback::from(
      move |index: usize| {
        on_action.emit(
          Action::RemoveEditLink(index)
        )
      }
    )
  };

  html! {
      <li class="task editing">
          <div class="task-body">
              <input
                  class="input title-input"
                  type="text"
                  value={draft.title.clone()}
                  oninput={on_title}
                  onkeydown={on_title_key}
              />
              <div class="link-entry">
                  <input
                      class="input"
                      type="url"
                      placeholder="https://"
                      value={draft.link_input.clone()}
                      oninput={on_link}
                      onkeydown={on_link_key}
                  />
                  <button class="btn" onclick={on_add_link}>{ "Add link" }</button>
              </div>
              <LinkList
                  links={draft.links.clone()}
                  show_icons={props.settings.show_link_icons}
                  on_remove={Some(on_remove)}
              />
          </div>
          <div class="task-actions">
              <button class="btn primary" onclick={on_save}>{ "Save" }</button>
              <button class="btn" onclick={on_cancel}>{ "Cancel" }</button>
          </div>
      </li>
  }
}
