mod app_header;
mod link_list;
mod new_task_form;
mod task_list;
mod task_row;

pub use app_header::AppHeader;
pub use link_list::LinkList;
pub use new_task_form::NewTaskForm;
pub use task_list::TaskList;
pub use task_row::TaskRow;
use web_sys::HtmlInputElement;
use yew::{
  Callback,
  InputEvent,
  KeyboardEvent,
  MouseEvent,
  TargetCast
};

use crate::app::Action;

/// Emits `make(value)` on every
/// keystroke in a text input.
fn input_action(
  on_action: &Callback<Action>,
  make: fn(String) -> Action
) -> Callback<InputEvent> {
  let on_action = on_action.clone();
  Callback::from(
    move |e: InputEvent| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      on_action.emit(make(input.value()));
    }
  )
}

/// Emits `on_enter` for Enter and
/// `on_escape` (when given) for
/// Escape.
fn key_action(
  on_action: &Callback<Action>,
  on_enter: Action,
  on_escape: Option<Action>
) -> Callback<KeyboardEvent> {
  let on_action = on_action.clone();
  Callback::from(
    move |e: KeyboardEvent| {
      let action = match e.key().as_str()
      {
        | "Enter" => {
          Some(on_enter.clone())
        }
        | "Escape" => on_escape.clone(),
        | _ => None
      };
      if let Some(action) = action {
        e.prevent_default();
        on_action.emit(action);
      }
    }
  )
}

fn click_action(
  on_action: &Callback<Action>,
  action: Action
) -> Callback<MouseEvent> {
  let on_action = on_action.clone();
  Callback::from(
    move |_: MouseEvent| {
      on_action.emit(action.clone())
    }
  )
}
