use gloo::dialogs;
use tether_core::theme::DARK_THEME_CLASS;
use tether_core::{
  KeyValueStore,
  Prompter,
  StorageError,
  ThemeSurface
};

fn local_storage()
-> Result<web_sys::Storage, StorageError>
{
  web_sys::window()
    .and_then(|window| {
      window
        .local_storage()
        .ok()
        .flatten()
    })
    .ok_or_else(|| {
      StorageError::Unavailable(
        "window.localStorage"
          .to_string()
      )
    })
}

/// `window.localStorage` for this
/// origin.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
  fn get_item(
    &self,
    key: &str
  ) -> Result<Option<String>, StorageError>
  {
    local_storage()?
      .get_item(key)
      .map_err(|error| {
        StorageError::Read {
          key:     key.to_string(),
          message: format!(
            "{error:?}"
          )
        }
      })
  }

  fn set_item(
    &self,
    key: &str,
    value: &str
  ) -> Result<(), StorageError> {
    local_storage()?
      .set_item(key, value)
      .map_err(|error| {
        StorageError::Write {
          key:     key.to_string(),
          message: format!(
            "{error:?}"
          )
        }
      })
  }
}

/// Blocking `confirm` / `alert`
/// dialogs.
#[derive(
  Debug, Clone, Copy, Default,
)]
pub struct BrowserDialogs;

impl Prompter for BrowserDialogs {
  fn confirm(
    &self,
    message: &str
  ) -> bool {
    dialogs::confirm(message)
  }

  fn notify(&self, message: &str) {
    dialogs::alert(message);
  }
}

/// Toggles the dark theme class on
/// `document.body`.
#[derive(
  Debug, Clone, Copy, Default,
)]
pub struct DocumentTheme;

impl ThemeSurface for DocumentTheme {
  fn apply_theme(&mut self, dark: bool) {
    let Some(body) = web_sys::window()
      .and_then(|window| {
        window.document()
      })
      .and_then(|document| {
        document.body()
      })
    else {
      tracing::warn!(
        "no document body to theme"
      );
      return;
    };

    if let Err(error) = body
      .class_list()
      .toggle_with_force(
        DARK_THEME_CLASS,
        dark
      )
    {
      tracing::error!(
        ?error,
        "failed toggling theme class"
      );
    }
  }
}
