//! State containers for the Tether task tracker.
//!
//! The crate holds everything a front-end needs: the [`task::Task`] model,
//! the [`store::TaskStore`] that owns the task list and its form drafts,
//! the [`theme::ThemeStore`] for the light/dark flag, and the link helpers
//! in [`links`]. Persistence, dialogs and the document theme class are
//! injected through the traits in [`storage`], [`prompt`] and [`theme`].

pub mod error;
pub mod links;
pub mod prompt;
pub mod settings;
pub mod storage;
pub mod store;
pub mod task;
pub mod theme;

pub use error::{LinkRejection, StorageError, StoreError};
pub use prompt::Prompter;
pub use settings::LinkSettings;
pub use storage::{KeyValueStore, MemoryStorage};
pub use store::{TaskDraft, TaskStats, TaskStore};
pub use task::Task;
pub use theme::{ThemeMode, ThemeStore, ThemeSurface};
