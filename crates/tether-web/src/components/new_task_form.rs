use tether_core::{
  LinkSettings,
  TaskDraft
};
use yew::{
  Callback,
  Html,
  Properties,
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
pub struct NewTaskFormProps {
  pub draft:     TaskDraft,
  pub settings:  LinkSettings,
  pub on_action: Callback<Action>
}

#[function_component(NewTaskForm)]
pub fn new_task_form(
  props: &NewTaskFormProps
) -> Html {
  let draft = &props.draft;
  let on_action = &props.on_action;

  let on_title = input_action(
    on_action,
    Action::SetNewTitle
  );
  let on_title_key = key_action(
    on_action,
    Action::AddTask,
    None
  );
  let on_link = input_action(
    on_action,
    Action::SetNewLink
  );
  let on_link_key = key_action(
    on_action,
    Action::AddNewLink,
    None
  );
  let on_add_link = click_action(
    on_action,
    Action::AddNewLink
  );
  let on_add_task = click_action(
    on_action,
    Action::AddTask
  );
  let on_remove = {
    let on_action = on_action.clone();
    Callback::from(
      move |index: usize| {
        on_action.emit(
          Action::RemoveNewLink(index)
        )
      }
    )
  };

  let blank_title =
    draft.title.trim().is_empty();
  let link_count = format!(
    "{}/{} links",
    draft.links.len(),
    props.settings.max_links_per_task
  );

  html! {
      <section class="panel task-form">
          <input
              class="input title-input"
              type="text"
              placeholder="What needs to be done?"
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
          <div class="form-footer">
              <span class="muted">{ link_count }</span>
              <button
                  class="btn primary"
                  onclick={on_add_task}
                  disabled={blank_title}
              >
                  { "Add task" }
              </button>
          </div>
      </section>
  }
}
