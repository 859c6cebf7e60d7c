use tether_core::{
  KeyValueStore,
  Prompter,
  StoreError,
  TaskStore,
  ThemeStore,
  ThemeSurface
};

/// Everything the page can ask the
/// stores to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
  SetNewTitle(String),
  SetNewLink(String),
  AddNewLink,
  RemoveNewLink(usize),
  AddTask,
  ToggleComplete(i64),
  DeleteTask(i64),
  StartEdit(i64),
  SetEditTitle(String),
  SetEditLink(String),
  AddEditLink,
  RemoveEditLink(usize),
  SaveEdit,
  CancelEdit,
  ClearCompleted,
  ToggleLinkIcons,
  ToggleTheme
}

pub fn apply<S, P, D>(
  tasks: &mut TaskStore<S, P>,
  theme: &mut ThemeStore<S, D>,
  action: Action
) -> Result<(), StoreError>
where
  S: KeyValueStore,
  P: Prompter,
  D: ThemeSurface
{
  match action {
    | Action::SetNewTitle(title) => {
      tasks.set_new_task_title(title)
    }
    | Action::SetNewLink(link) => {
      tasks.set_current_link(link)
    }
    | Action::AddNewLink => {
      tasks.add_link_to_new_task();
    }
    | Action::RemoveNewLink(index) => {
      tasks
        .remove_link_from_new_task(
          index
        )
    }
    | Action::AddTask => {
      tasks.add_task()?
    }
    | Action::ToggleComplete(id) => {
      tasks.toggle_complete(id)?
    }
    | Action::DeleteTask(id) => {
      tasks.delete_task(id)?
    }
    | Action::StartEdit(id) => {
      if let Some(task) =
        tasks.task(id).cloned()
      {
        tasks.start_edit(&task);
      }
    }
    | Action::SetEditTitle(title) => {
      tasks.set_edit_title(title)
    }
    | Action::SetEditLink(link) => {
      tasks
        .set_current_edit_link(link)
    }
    | Action::AddEditLink => {
      tasks.add_link_to_edit_task();
    }
    | Action::RemoveEditLink(index) => {
      tasks
        .remove_link_from_edit_task(
          index
        )
    }
    | Action::SaveEdit => {
      tasks.save_edit()?
    }
    | Action::CancelEdit => {
      tasks.cancel_edit()
    }
    | Action::ClearCompleted => {
      tasks.clear_completed()?
    }
    | Action::ToggleLinkIcons => {
      let mut settings =
        tasks.link_settings();
      settings.show_link_icons =
        !settings.show_link_icons;
      tasks
        .set_link_settings(settings);
    }
    | Action::ToggleTheme => {
      theme.toggle_theme()?
    }
  }

  Ok(())
}
