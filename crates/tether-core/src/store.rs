use chrono::{DateTime, SubsecRound, Utc};
use tracing::{debug, info, warn};

use crate::error::{LinkRejection, StoreError};
use crate::links::is_valid_url;
use crate::prompt::{CONFIRM_CLEAR_COMPLETED, CONFIRM_DELETE_TASK, Prompter};
use crate::settings::LinkSettings;
use crate::storage::{KeyValueStore, TASKS_BACKUP_KEY, TASKS_KEY};
use crate::task::{Task, next_task_id, sort_tasks};

/// In-progress form input. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub links: Vec<String>,
    pub link_input: String,
}

impl TaskDraft {
    fn clear(&mut self) {
        *self = Self::default();
    }

    fn remove_link(&mut self, index: usize) {
        if index < self.links.len() {
            self.links.remove(index);
        } else {
            debug!(index, len = self.links.len(), "link index out of range");
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub links: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DraftKind {
    New,
    Edit,
}

/// Owns the task list, the new-task and edit drafts, and the link settings.
///
/// Every operation that changes the list re-sorts it and writes the whole
/// list to `todo-tasks` before returning.
pub struct TaskStore<S, P> {
    storage: S,
    prompter: P,
    settings: LinkSettings,
    tasks: Vec<Task>,
    new_task: TaskDraft,
    editing: Option<Task>,
    edit_draft: TaskDraft,
}

impl<S: KeyValueStore, P: Prompter> TaskStore<S, P> {
    /// Empty store that has not read anything from `storage`.
    pub fn new(storage: S, prompter: P, settings: LinkSettings) -> Self {
        Self {
            storage,
            prompter,
            settings,
            tasks: Vec::new(),
            new_task: TaskDraft::default(),
            editing: None,
            edit_draft: TaskDraft::default(),
        }
    }

    #[tracing::instrument(skip_all)]
    pub fn load(storage: S, prompter: P, settings: LinkSettings) -> Result<Self, StoreError> {
        let tasks = load_tasks(&storage)?;
        let mut store = Self::new(storage, prompter, settings);
        store.tasks = tasks;
        Ok(store)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, id: i64) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn link_settings(&self) -> LinkSettings {
        self.settings
    }

    pub fn set_link_settings(&mut self, settings: LinkSettings) {
        debug!(?settings, "link settings changed");
        self.settings = settings;
    }

    pub fn new_task(&self) -> &TaskDraft {
        &self.new_task
    }

    pub fn editing(&self) -> Option<&Task> {
        self.editing.as_ref()
    }

    pub fn edit_draft(&self) -> &TaskDraft {
        &self.edit_draft
    }

    pub fn set_new_task_title(&mut self, title: impl Into<String>) {
        self.new_task.title = title.into();
    }

    pub fn set_current_link(&mut self, link: impl Into<String>) {
        self.new_task.link_input = link.into();
    }

    pub fn set_edit_title(&mut self, title: impl Into<String>) {
        self.edit_draft.title = title.into();
    }

    pub fn set_current_edit_link(&mut self, link: impl Into<String>) {
        self.edit_draft.link_input = link.into();
    }

    pub fn tasks_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed).count()
    }

    pub fn pending_count(&self) -> usize {
        self.tasks_count() - self.completed_count()
    }

    pub fn total_links_count(&self) -> usize {
        self.tasks.iter().map(|task| task.links.len()).sum()
    }

    pub fn stats(&self) -> TaskStats {
        TaskStats {
            total: self.tasks_count(),
            completed: self.completed_count(),
            pending: self.pending_count(),
            links: self.total_links_count(),
        }
    }

    pub fn add_task(&mut self) -> Result<(), StoreError> {
        self.add_task_at(Utc::now())
    }

    #[tracing::instrument(skip(self))]
    fn add_task_at(&mut self, now: DateTime<Utc>) -> Result<(), StoreError> {
        let title = self.new_task.title.trim();
        if title.is_empty() {
            debug!("ignoring task with blank title");
            return Ok(());
        }

        let created_at = now.trunc_subsecs(3);
        let id = next_task_id(&self.tasks, created_at);
        let task = Task::new(
            id,
            title.to_string(),
            self.new_task.links.clone(),
            created_at,
        );
        info!(id, links = task.links.len(), "adding task");

        self.tasks.insert(0, task);
        self.persist()?;
        self.new_task.clear();
        Ok(())
    }

    pub fn add_link_to_new_task(&mut self) -> bool {
        self.add_link(DraftKind::New)
    }

    pub fn add_link_to_edit_task(&mut self) -> bool {
        self.add_link(DraftKind::Edit)
    }

    pub fn remove_link_from_new_task(&mut self, index: usize) {
        self.new_task.remove_link(index);
    }

    pub fn remove_link_from_edit_task(&mut self, index: usize) {
        self.edit_draft.remove_link(index);
    }

    #[tracing::instrument(skip(self))]
    pub fn delete_task(&mut self, id: i64) -> Result<(), StoreError> {
        if !self.prompter.confirm(CONFIRM_DELETE_TASK) {
            debug!("delete declined");
            return Ok(());
        }

        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        info!(removed = before - self.tasks.len(), "deleted task");
        self.persist()
    }

    pub fn start_edit(&mut self, task: &Task) {
        debug!(id = task.id, "editing task");
        self.editing = Some(task.clone());
        self.edit_draft = TaskDraft {
            title: task.title.clone(),
            links: task.links.clone(),
            link_input: String::new(),
        };
    }

    #[tracing::instrument(skip(self))]
    pub fn save_edit(&mut self) -> Result<(), StoreError> {
        let Some(id) = self.editing.as_ref().map(|task| task.id) else {
            return Ok(());
        };
        let title = self.edit_draft.title.trim();
        if title.is_empty() {
            debug!(id, "ignoring edit with blank title");
            return Ok(());
        }

        let title = title.to_string();
        if let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) {
            task.title = title;
            task.links = self.edit_draft.links.clone();
            info!(id, "saved task edit");
            self.persist()?;
        } else {
            warn!(id, "edited task no longer exists");
        }

        self.cancel_edit();
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.edit_draft.clear();
    }

    #[tracing::instrument(skip(self))]
    pub fn toggle_complete(&mut self, id: i64) -> Result<(), StoreError> {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                debug!(completed = task.completed, "toggled task");
            }
            None => debug!("no task to toggle"),
        }
        self.persist()
    }

    #[tracing::instrument(skip(self))]
    pub fn clear_completed(&mut self) -> Result<(), StoreError> {
        if !self.prompter.confirm(CONFIRM_CLEAR_COMPLETED) {
            debug!("clear declined");
            return Ok(());
        }

        let before = self.tasks.len();
        self.tasks.retain(|task| !task.completed);
        info!(removed = before - self.tasks.len(), "cleared completed tasks");
        self.persist()
    }

    fn add_link(&mut self, kind: DraftKind) -> bool {
        let settings = self.settings;
        let draft = match kind {
            DraftKind::New => &mut self.new_task,
            DraftKind::Edit => &mut self.edit_draft,
        };

        let link = draft.link_input.trim();
        if link.is_empty() {
            return false;
        }

        let rejection = if settings.validate_urls && !is_valid_url(link) {
            Some(match kind {
                DraftKind::New => LinkRejection::InvalidNewTaskUrl,
                DraftKind::Edit => LinkRejection::InvalidEditUrl,
            })
        } else if draft.links.len() >= settings.max_links_per_task {
            Some(LinkRejection::TooManyLinks {
                max: settings.max_links_per_task,
            })
        } else {
            None
        };

        if let Some(rejection) = rejection {
            debug!(?kind, %rejection, "link rejected");
            self.prompter.notify(&rejection.to_string());
            return false;
        }

        let link = link.to_string();
        draft.links.push(link);
        draft.link_input.clear();
        true
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        sort_tasks(&mut self.tasks);
        let payload = serde_json::to_string(&self.tasks)?;
        self.storage.set_item(TASKS_KEY, &payload)?;
        debug!(count = self.tasks.len(), "saved tasks");
        Ok(())
    }
}

/// Reads `todo-tasks`. Unparseable data is copied to `todo-tasks.bak` and
/// the store starts empty.
fn load_tasks<S: KeyValueStore>(storage: &S) -> Result<Vec<Task>, StoreError> {
    let raw = match storage.get_item(TASKS_KEY)? {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => {
            debug!("no saved tasks");
            return Ok(Vec::new());
        }
    };

    match serde_json::from_str::<Vec<Task>>(&raw) {
        Ok(mut tasks) => {
            sort_tasks(&mut tasks);
            info!(count = tasks.len(), "loaded tasks");
            Ok(tasks)
        }
        Err(error) => {
            tracing::error!(%error, "failed parsing saved tasks, starting empty");
            storage.set_item(TASKS_BACKUP_KEY, &raw)?;
            warn!(key = TASKS_BACKUP_KEY, "kept unreadable task data");
            Ok(Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use chrono::{TimeZone, Utc};

    use super::TaskStore;
    use crate::prompt::{CONFIRM_CLEAR_COMPLETED, CONFIRM_DELETE_TASK, Prompter};
    use crate::settings::LinkSettings;
    use crate::storage::{KeyValueStore, MemoryStorage, TASKS_BACKUP_KEY, TASKS_KEY};
    use crate::task::Task;

    #[derive(Clone, Default)]
    struct Dialogs {
        decline: Rc<Cell<bool>>,
        confirms: Rc<RefCell<Vec<String>>>,
        notices: Rc<RefCell<Vec<String>>>,
    }

    impl Prompter for Dialogs {
        fn confirm(&self, message: &str) -> bool {
            self.confirms.borrow_mut().push(message.to_string());
            !self.decline.get()
        }

        fn notify(&self, message: &str) {
            self.notices.borrow_mut().push(message.to_string());
        }
    }

    fn store() -> Fixture {
        let storage = MemoryStorage::new();
        let dialogs = Dialogs::default();
        let store = TaskStore::load(storage.clone(), dialogs.clone(), LinkSettings::default())
            .expect("load");
        (store, storage, dialogs)
    }

    type Fixture = (TaskStore<MemoryStorage, Dialogs>, MemoryStorage, Dialogs);

    fn seeded(tasks: &[(i64, bool, usize)]) -> Fixture {
        let created = Utc
            .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .single()
            .expect("valid date");
        let tasks: Vec<Task> = tasks
            .iter()
            .map(|&(id, completed, links)| {
                let mut task = Task::new(
                    id,
                    format!("Task {id}"),
                    (0..links).map(|n| format!("https://link{n}.com")).collect(),
                    created,
                );
                task.completed = completed;
                task
            })
            .collect();
        let storage = MemoryStorage::new().with_item(
            TASKS_KEY,
            &serde_json::to_string(&tasks).expect("encode"),
        );
        let dialogs = Dialogs::default();
        let store = TaskStore::load(storage.clone(), dialogs.clone(), LinkSettings::default())
            .expect("load");
        (store, storage, dialogs)
    }

    fn ids<S, P>(store: &TaskStore<S, P>) -> Vec<i64> {
        store.tasks.iter().map(|task| task.id).collect()
    }

    fn saved(storage: &MemoryStorage) -> Vec<Task> {
        let raw = storage.get_item(TASKS_KEY).expect("get").expect("saved");
        serde_json::from_str(&raw).expect("decode")
    }

    #[test]
    fn starts_empty_without_saved_data() {
        let (store, _, _) = store();
        assert!(store.tasks().is_empty());
        assert_eq!(store.stats().total, 0);
    }

    #[test]
    fn add_task_creates_pending_task_and_clears_draft() {
        let (mut store, storage, _) = store();
        store.set_new_task_title("  Buy milk  ");
        store.set_current_link("https://link.com");
        store.add_task().expect("add");

        assert_eq!(store.tasks().len(), 1);
        let task = &store.tasks()[0];
        assert_eq!(task.title, "Buy milk");
        assert!(task.links.is_empty());
        assert!(!task.completed);
        assert_eq!(store.pending_count(), 1);

        assert_eq!(store.new_task(), &super::TaskDraft::default());
        assert_eq!(saved(&storage), store.tasks().to_vec());
    }

    #[test]
    fn add_task_copies_pending_links() {
        let (mut store, _, _) = store();
        store.set_new_task_title("With links");
        store.set_current_link("https://test.com");
        assert!(store.add_link_to_new_task());
        store.add_task().expect("add");

        assert_eq!(store.tasks()[0].links, vec!["https://test.com".to_string()]);
        assert!(store.new_task().links.is_empty());
    }

    #[test]
    fn blank_title_is_ignored() {
        let (mut store, storage, _) = store();
        store.set_new_task_title("   ");
        store.add_task().expect("add");

        assert!(store.tasks().is_empty());
        assert_eq!(storage.get_item(TASKS_KEY).expect("get"), None);
    }

    #[test]
    fn newer_tasks_come_first_with_distinct_ids() {
        let (mut store, _, _) = store();
        let now = Utc
            .timestamp_millis_opt(1_000)
            .single()
            .expect("valid timestamp");

        store.set_new_task_title("First");
        store.add_task_at(now).expect("add");
        store.set_new_task_title("Second");
        store.add_task_at(now).expect("add");

        assert_eq!(ids(&store), vec![1_001, 1_000]);
        assert_eq!(store.tasks()[0].title, "Second");
    }

    #[test]
    fn invalid_link_is_reported_per_form() {
        let (mut store, _, dialogs) = store();
        store.set_current_link("invalid-url");
        assert!(!store.add_link_to_new_task());
        assert!(store.new_task().links.is_empty());
        assert_eq!(store.new_task().link_input, "invalid-url");

        store.set_new_task_title("t");
        store.add_task().expect("add");
        let task = store.tasks()[0].clone();
        store.start_edit(&task);
        store.set_current_edit_link("ftp://example.com");
        assert!(!store.add_link_to_edit_task());

        assert_eq!(
            *dialogs.notices.borrow(),
            vec![
                "Please enter a valid URL (must start with http:// or https://)".to_string(),
                "Please enter a valid URL".to_string(),
            ]
        );
    }

    #[test]
    fn validation_can_be_switched_off() {
        let (mut store, _, dialogs) = store();
        store.set_link_settings(LinkSettings {
            validate_urls: false,
            ..LinkSettings::default()
        });
        store.set_current_link("invalid-url");

        assert!(store.add_link_to_new_task());
        assert_eq!(store.new_task().links, vec!["invalid-url".to_string()]);
        assert_eq!(store.new_task().link_input, "");
        assert!(dialogs.notices.borrow().is_empty());
    }

    #[test]
    fn blank_link_is_ignored_silently() {
        let (mut store, _, dialogs) = store();
        store.set_current_link("   ");
        assert!(!store.add_link_to_new_task());
        assert!(store.new_task().links.is_empty());
        assert!(dialogs.notices.borrow().is_empty());
    }

    #[test]
    fn eleventh_link_is_rejected() {
        let (mut store, _, dialogs) = store();
        for n in 0..10 {
            store.set_current_link(format!("https://link{n}.com"));
            assert!(store.add_link_to_new_task());
        }

        store.set_current_link("https://extra.com");
        assert!(!store.add_link_to_new_task());

        assert_eq!(store.new_task().links.len(), 10);
        assert_eq!(
            *dialogs.notices.borrow(),
            vec!["Maximum number of links: 10".to_string()]
        );
    }

    #[test]
    fn link_limit_follows_settings() {
        let (mut store, _, dialogs) = store();
        store.set_link_settings(LinkSettings {
            max_links_per_task: 1,
            ..LinkSettings::default()
        });
        store.set_current_link("https://one.com");
        assert!(store.add_link_to_new_task());
        store.set_current_link("https://two.com");
        assert!(!store.add_link_to_new_task());

        assert_eq!(
            *dialogs.notices.borrow(),
            vec!["Maximum number of links: 1".to_string()]
        );
    }

    #[test]
    fn remove_link_by_position() {
        let (mut store, _, _) = store();
        store.set_link_settings(LinkSettings {
            validate_urls: false,
            ..LinkSettings::default()
        });
        for link in ["link1", "link2", "link3"] {
            store.set_current_link(link);
            store.add_link_to_new_task();
        }

        store.remove_link_from_new_task(1);
        assert_eq!(
            store.new_task().links,
            vec!["link1".to_string(), "link3".to_string()]
        );

        store.remove_link_from_new_task(7);
        assert_eq!(store.new_task().links.len(), 2);
    }

    #[test]
    fn edit_form_enforces_the_link_limit() {
        let (mut store, _, dialogs) = seeded(&[(1, false, 10)]);
        let task = store.tasks()[0].clone();
        store.start_edit(&task);

        store.set_current_edit_link("https://extra.com");
        assert!(!store.add_link_to_edit_task());
        assert_eq!(store.edit_draft().links.len(), 10);
        assert_eq!(store.edit_draft().link_input, "https://extra.com");
        assert_eq!(
            *dialogs.notices.borrow(),
            vec!["Maximum number of links: 10".to_string()]
        );

        store.save_edit().expect("save");
        assert_eq!(store.tasks()[0].links.len(), 10);
    }

    #[test]
    fn edit_form_ignores_out_of_range_removal() {
        let (mut store, _, _) = seeded(&[(1, false, 2)]);
        let task = store.tasks()[0].clone();
        store.start_edit(&task);

        store.remove_link_from_edit_task(99);
        assert_eq!(store.edit_draft().links, task.links);

        store.remove_link_from_edit_task(0);
        assert_eq!(
            store.edit_draft().links,
            vec!["https://link1.com".to_string()]
        );
    }

    #[test]
    fn add_after_the_largest_possible_id_does_not_overflow() {
        let (mut store, storage, _) = seeded(&[(i64::MAX, false, 0)]);

        store.set_new_task_title("Next");
        store.add_task().expect("add");

        assert_eq!(store.tasks_count(), 2);
        let added = store
            .tasks()
            .iter()
            .find(|task| task.title == "Next")
            .expect("added task");
        assert_ne!(added.id, i64::MAX);
        assert!(added.id > 0);
        assert_eq!(saved(&storage).len(), 2);
    }

    #[test]
    fn edit_round_trip_updates_task() {
        let (mut store, storage, _) = seeded(&[(123, false, 1)]);
        let task = store.tasks()[0].clone();

        store.start_edit(&task);
        assert_eq!(store.editing(), Some(&task));
        assert_eq!(store.edit_draft().title, "Task 123");
        assert_eq!(store.edit_draft().links, task.links);
        assert_eq!(store.edit_draft().link_input, "");

        store.set_edit_title("Changed");
        store.remove_link_from_edit_task(0);
        store.set_current_edit_link("https://new.com");
        assert!(store.add_link_to_edit_task());
        store.save_edit().expect("save");

        assert_eq!(store.tasks()[0].title, "Changed");
        assert_eq!(store.tasks()[0].links, vec!["https://new.com".to_string()]);
        assert_eq!(store.editing(), None);
        assert_eq!(store.edit_draft(), &super::TaskDraft::default());
        assert_eq!(saved(&storage)[0].title, "Changed");
    }

    #[test]
    fn blank_edit_title_keeps_task_and_edit_state() {
        let (mut store, _, _) = seeded(&[(123, false, 0)]);
        let task = store.tasks()[0].clone();
        store.start_edit(&task);
        store.set_edit_title("  ");
        store.save_edit().expect("save");

        assert_eq!(store.tasks()[0].title, "Task 123");
        assert!(store.editing().is_some());
    }

    #[test]
    fn save_without_edit_target_is_a_no_op() {
        let (mut store, storage, _) = seeded(&[(1, false, 0)]);
        let before = storage.snapshot();
        store.set_edit_title("Nothing");
        store.save_edit().expect("save");

        assert_eq!(store.tasks()[0].title, "Task 1");
        assert_eq!(storage.snapshot(), before);
    }

    #[test]
    fn cancel_edit_discards_changes() {
        let (mut store, _, _) = seeded(&[(123, false, 0)]);
        let task = store.tasks()[0].clone();
        store.start_edit(&task);
        store.set_edit_title("Unsaved");
        store.set_current_edit_link("https://x.com");
        store.cancel_edit();

        assert_eq!(store.editing(), None);
        assert_eq!(store.edit_draft(), &super::TaskDraft::default());
        assert_eq!(store.tasks()[0].title, "Task 123");
    }

    #[test]
    fn toggle_flips_and_resorts() {
        let (mut store, storage, _) = seeded(&[(1, false, 0), (2, true, 0)]);
        assert_eq!(ids(&store), vec![1, 2]);

        store.toggle_complete(1).expect("toggle");

        assert_eq!(ids(&store), vec![2, 1]);
        assert!(store.tasks().iter().all(|task| task.completed));
        assert_eq!(saved(&storage).len(), 2);

        store.toggle_complete(1).expect("toggle");
        assert_eq!(ids(&store), vec![1, 2]);
        assert!(!store.tasks()[0].completed);
    }

    #[test]
    fn toggle_unknown_id_changes_nothing() {
        let (mut store, _, _) = seeded(&[(1, false, 0)]);
        store.toggle_complete(99).expect("toggle");
        assert_eq!(ids(&store), vec![1]);
        assert!(!store.tasks()[0].completed);
    }

    #[test]
    fn delete_requires_confirmation() {
        let (mut store, _, dialogs) =
            seeded(&[(1, false, 0), (2, false, 0), (3, false, 0)]);

        dialogs.decline.set(true);
        store.delete_task(2).expect("delete");
        assert_eq!(store.tasks().len(), 3);

        dialogs.decline.set(false);
        store.delete_task(2).expect("delete");
        assert_eq!(ids(&store), vec![3, 1]);
        assert_eq!(
            *dialogs.confirms.borrow(),
            vec![
                CONFIRM_DELETE_TASK.to_string(),
                CONFIRM_DELETE_TASK.to_string(),
            ]
        );
    }

    #[test]
    fn clear_completed_requires_confirmation() {
        let (mut store, storage, dialogs) =
            seeded(&[(1, true, 0), (2, true, 0), (3, false, 0)]);

        dialogs.decline.set(true);
        store.clear_completed().expect("clear");
        assert_eq!(store.tasks().len(), 3);

        dialogs.decline.set(false);
        store.clear_completed().expect("clear");
        assert_eq!(ids(&store), vec![3]);
        assert_eq!(saved(&storage).len(), 1);
        assert_eq!(
            dialogs.confirms.borrow().last().map(String::as_str),
            Some(CONFIRM_CLEAR_COMPLETED)
        );
    }

    #[test]
    fn counts_are_derived_from_the_list() {
        let (mut store, _, _) = seeded(&[(1, true, 2), (2, false, 1), (3, false, 0)]);
        let stats = store.stats();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.links, 3);

        store.set_new_task_title("New");
        for n in 4..6 {
            store.set_current_link(format!("https://link{n}.com"));
            store.add_link_to_new_task();
        }
        store.add_task().expect("add");

        assert_eq!(store.tasks_count(), 4);
        assert_eq!(store.pending_count(), 3);
        assert_eq!(store.total_links_count(), 5);
    }

    #[test]
    fn load_applies_sort_order() {
        let (store, _, _) = seeded(&[(1, true, 0), (2, false, 0), (3, false, 0), (4, true, 0)]);
        assert_eq!(ids(&store), vec![3, 2, 4, 1]);
    }

    #[test]
    fn malformed_data_falls_back_to_empty_and_is_kept() {
        let storage = MemoryStorage::new().with_item(TASKS_KEY, "{not json");
        let store = TaskStore::load(storage.clone(), Dialogs::default(), LinkSettings::default())
            .expect("load");

        assert!(store.tasks().is_empty());
        assert_eq!(
            storage.get_item(TASKS_BACKUP_KEY).expect("get").as_deref(),
            Some("{not json")
        );
    }

    #[test]
    fn empty_record_counts_as_absent() {
        let storage = MemoryStorage::new().with_item(TASKS_KEY, "");
        let store = TaskStore::load(storage.clone(), Dialogs::default(), LinkSettings::default())
            .expect("load");

        assert!(store.tasks().is_empty());
        assert_eq!(storage.get_item(TASKS_BACKUP_KEY).expect("get"), None);
    }
}
