mod actions;

pub use actions::Action;
use tether_core::{
  LinkSettings,
  TaskStore,
  ThemeMode,
  ThemeStore
};
use yew::{
  Callback,
  Html,
  function_component,
  html,
  use_force_update,
  use_mut_ref
};

use crate::browser::{
  BrowserDialogs,
  BrowserStorage,
  DocumentTheme
};
use crate::components::{
  AppHeader,
  NewTaskForm,
  TaskList
};

type Tasks =
  TaskStore<BrowserStorage, BrowserDialogs>;
type Theme =
  ThemeStore<BrowserStorage, DocumentTheme>;

fn load_tasks() -> Tasks {
  match TaskStore::load(
    BrowserStorage,
    BrowserDialogs,
    LinkSettings::default()
  ) {
    | Ok(store) => store,
    | Err(error) => {
      tracing::error!(
        %error,
        "failed loading tasks from \
         local storage"
      );
      TaskStore::new(
        BrowserStorage,
        BrowserDialogs,
        LinkSettings::default()
      )
    }
  }
}

fn load_theme() -> Theme {
  match ThemeStore::load(
    BrowserStorage,
    DocumentTheme
  ) {
    | Ok(store) => store,
    | Err(error) => {
      tracing::error!(
        %error,
        "failed loading theme from \
         local storage"
      );
      ThemeStore::new(
        BrowserStorage,
        DocumentTheme,
        ThemeMode::Light
      )
    }
  }
}

#[function_component(App)]
pub fn app() -> Html {
  let tasks = use_mut_ref(load_tasks);
  let theme = use_mut_ref(load_theme);
  let update = use_force_update();

  let on_action = {
    let tasks = tasks.clone();
    let theme = theme.clone();
    Callback::from(
      move |action: Action| {
        tracing::debug!(
          ?action,
          "dispatching action"
        );
        let result = {
          let mut tasks =
            tasks.borrow_mut();
          let mut theme =
            theme.borrow_mut();
          actions::apply(
            &mut *tasks,
            &mut *theme,
            action
          )
        };
        if let Err(error) = result {
          tracing::error!(
            %error,
            "action failed"
          );
        }
        update.force_update();
      }
    )
  };

  let tasks = tasks.borrow();
  let theme_mode = theme.borrow().mode();
  let stats = tasks.stats();
  let settings = tasks.link_settings();

  let on_clear = {
    let on_action = on_action.clone();
    Callback::from(
      move |_: yew::MouseEvent| {
        on_action.emit(
          Action::ClearCompleted
        )
      }
    )
  };

  html! {
      <div class="app">
          <AppHeader
              stats={stats}
              theme_label={theme_mode.toggle_label()}
              show_link_icons={settings.show_link_icons}
              on_action={on_action.clone()}
          />
          <main class="content">
              <NewTaskForm
                  draft={tasks.new_task().clone()}
                  settings={settings}
                  on_action={on_action.clone()}
              />
              <TaskList
                  tasks={tasks.tasks().to_vec()}
                  editing={tasks.editing().map(|task| task.id)}
                  edit_draft={tasks.edit_draft().clone()}
                  settings={settings}
                  on_action={on_action.clone()}
              />
              if stats.completed > 0 {
                  <div class="footer">
                      <button class="btn danger" onclick={on_clear}>
                          { format!("Clear completed ({})", stats.completed) }
                      </button>
                  </div>
              }
          </main>
      </div>
  }
}
