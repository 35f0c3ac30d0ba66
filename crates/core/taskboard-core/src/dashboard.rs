//! The dashboard controller.
//!
//! Every user action follows the same order: issue the request, await the
//! response, mutate the local collection through one [`TaskStore`] method,
//! and let the signals re-render. The collection is only touched after the
//! server confirmed the change, so a failure can leave the list stale but
//! never inconsistent with itself. Independent actions are not coordinated.

use crate::config::DashboardConfig;
use crate::error::{DashboardError, DashboardResult};
use crate::form::{EditSession, TaskDraft, TaskForm};
use crate::host::Host;
use crate::navigation::Section;
use crate::notify::{NotificationId, NotificationKind, NotificationQueue};
use crate::query::{ListQuery, StatusFilter};
use crate::render::{ListState, ProfileView, TaskContainerView};
use crate::session::{BearerToken, SessionGuard};
use crate::stats::TaskStats;
use crate::store::TaskStore;
use futures_signals::map_ref;
use futures_signals::signal::{Mutable, Signal, SignalExt};
use std::sync::Arc;
use taskboard_api::{ApiError, Task, TaskApi, TaskId, TaskUpdate, User};
use tracing::{debug, error, info, warn};

pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this task?";

pub mod messages {
    pub const CREATED: &str = "Task created successfully!";
    pub const CREATE_FAILED: &str = "Failed to create task. Please try again.";
    pub const UPDATED: &str = "Task updated successfully!";
    pub const UPDATE_FAILED: &str = "Failed to update task. Please try again.";
    pub const DELETED: &str = "Task deleted successfully!";
    pub const DELETE_FAILED: &str = "Failed to delete task. Please try again.";
    pub const STATUS_UPDATED: &str = "Task status updated!";
    pub const STATUS_FAILED: &str = "Failed to update task status. Please try again.";
}

pub struct Dashboard<A, H> {
    config: DashboardConfig,
    guard: SessionGuard,
    api: A,
    host: H,
    store: TaskStore,
    list_state: Mutable<ListState>,
    query: Mutable<ListQuery>,
    section: Mutable<Section>,
    user: Mutable<Option<User>>,
    notifications: NotificationQueue,
    new_task: TaskForm,
    editor: Mutable<Option<Arc<EditSession>>>,
}

impl<A: TaskApi, H: Host> Dashboard<A, H> {
    /// Run the session guard and, when a token is stored, build the API
    /// client for it. Without a token the host has already been redirected
    /// to the login route and [`DashboardError::NotAuthenticated`] is returned.
    pub fn start<F>(config: DashboardConfig, host: H, connect: F) -> DashboardResult<Self>
    where
        F: FnOnce(&DashboardConfig, BearerToken) -> DashboardResult<A>,
    {
        let guard = SessionGuard::new(&config);
        let token = guard.check(&host)?;
        let api = connect(&config, token)?;
        let cached_user = guard.cached_user(&host);

        Ok(Self {
            config,
            guard,
            api,
            host,
            store: TaskStore::new(),
            list_state: Mutable::new(ListState::Loading),
            query: Mutable::new(ListQuery::default()),
            section: Mutable::new(Section::default()),
            user: Mutable::new(cached_user),
            notifications: NotificationQueue::new(),
            new_task: TaskForm::new(),
            editor: Mutable::new(None),
        })
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Fetch the profile and the task list concurrently
    pub async fn load(&self) {
        let (user, tasks) = futures::join!(self.load_user(), self.load_tasks());
        debug!(user_ok = user.is_ok(), tasks_ok = tasks.is_ok(), "Initial load finished");
    }

    pub async fn load_user(&self) -> DashboardResult<()> {
        match self.api.current_user().await {
            Ok(user) => {
                debug!(username = %user.username, "Loaded user info");
                self.guard.cache_user(&self.host, &user);
                self.user.set(Some(user));
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Failed to load user info");
                Err(e.into())
            }
        }
    }

    pub async fn load_tasks(&self) -> DashboardResult<()> {
        match self.api.list_tasks().await {
            Ok(tasks) => {
                info!(count = tasks.len(), "Loaded tasks");
                self.store.replace_all(tasks);
                self.show_all();
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Failed to load tasks");
                self.list_state.set_neq(ListState::Failed);
                Err(e.into())
            }
        }
    }

    pub async fn create_task(&self, draft: TaskDraft) -> DashboardResult<()> {
        match self.api.create_task(&draft.to_new_task()).await {
            Ok(task) => {
                info!(id = %task.id, "Task created");
                self.store.prepend(task);
                self.show_all();
                self.new_task.reset();
                self.show_section(Section::Tasks);
                self.notify(NotificationKind::Success, messages::CREATED);
                Ok(())
            }
            Err(e) => self.fail("Failed to create task", messages::CREATE_FAILED, e),
        }
    }

    /// Open the edit modal for `id`. Returns `false` if the task is not in
    /// the local collection.
    pub fn open_editor(&self, id: &TaskId) -> bool {
        match self.store.get(id) {
            Some(task) => {
                self.editor.set(Some(Arc::new(EditSession::new(&task))));
                true
            }
            None => {
                warn!(%id, "Cannot edit a task that is not loaded");
                false
            }
        }
    }

    pub fn close_editor(&self) {
        self.editor.set(None);
    }

    /// Send the edit modal's fields. The modal closes on success and stays
    /// open on failure.
    pub async fn save_editor(&self) -> DashboardResult<()> {
        let Some(session) = self.editor.get_cloned() else {
            warn!("Save requested with no task open in the editor");
            return Ok(());
        };

        let update = session.form.draft().to_update();
        match self.api.update_task(&session.id, &update).await {
            Ok(task) => {
                info!(id = %task.id, "Task updated");
                self.apply_update(task);
                let still_open = self
                    .editor
                    .lock_ref()
                    .as_ref()
                    .is_some_and(|open| Arc::ptr_eq(open, &session));
                if still_open {
                    self.close_editor();
                }
                self.notify(NotificationKind::Success, messages::UPDATED);
                Ok(())
            }
            Err(e) => self.fail("Failed to update task", messages::UPDATE_FAILED, e),
        }
    }

    /// Delete after interactive confirmation; declining is a silent no-op.
    pub async fn delete_task(&self, id: &TaskId) -> DashboardResult<()> {
        if !self.host.confirm(DELETE_CONFIRMATION) {
            debug!(%id, "Delete declined");
            return Ok(());
        }

        match self.api.delete_task(id).await {
            Ok(()) => {
                info!(%id, "Task deleted");
                if !self.store.remove(id) {
                    warn!(%id, "Deleted task was no longer in the local collection");
                }
                self.show_all();
                self.notify(NotificationKind::Success, messages::DELETED);
                Ok(())
            }
            Err(e) => self.fail("Failed to delete task", messages::DELETE_FAILED, e),
        }
    }

    /// Move a task to the next status in the pending -> in progress ->
    /// completed cycle, sending only the status field.
    pub async fn toggle_status(&self, id: &TaskId) -> DashboardResult<()> {
        let Some(task) = self.store.get(id) else {
            warn!(%id, "Cannot toggle a task that is not loaded");
            return Err(DashboardError::TaskNotFound(id.clone()));
        };

        let next = task.status.next();
        match self.api.update_task(id, &TaskUpdate::status(next)).await {
            Ok(task) => {
                info!(%id, status = task.status.as_str(), "Task status updated");
                self.apply_update(task);
                self.notify(NotificationKind::Success, messages::STATUS_UPDATED);
                Ok(())
            }
            Err(e) => self.fail("Failed to update task status", messages::STATUS_FAILED, e),
        }
    }

    pub fn logout(&self) {
        self.guard.logout(&self.host);
    }

    pub fn show_section(&self, section: Section) {
        debug!(section = section.id(), "Switching section");
        self.section.set_neq(section);
    }

    /// Show only tasks with the given status; drops any search term
    pub fn set_filter(&self, filter: StatusFilter) {
        self.query.set(ListQuery::Filter(filter));
        self.mark_rendered();
    }

    /// Show only tasks whose title or description contains `term`; drops
    /// any status filter
    pub fn set_search(&self, term: &str) {
        self.query.set(ListQuery::search(term));
        self.mark_rendered();
    }

    /// Queue a transient message and schedule its lifecycle on the host
    pub fn notify(&self, kind: NotificationKind, message: &str) -> NotificationId {
        let id = self.notifications.push(kind, message);
        let timers = self
            .config
            .notifications
            .deadlines()
            .map(|deadline| self.host.sleep(deadline));
        self.host
            .spawn(Box::pin(self.notifications.clone().drive(id, timers)));
        id
    }

    fn apply_update(&self, task: Task) {
        let id = task.id.clone();
        if !self.store.replace(task) {
            warn!(%id, "Updated task is no longer in the local collection");
        }
        self.show_all();
    }

    /// Drop any filter or search term and show the whole collection
    fn show_all(&self) {
        self.query.set_neq(ListQuery::default());
        self.mark_rendered();
    }

    /// The container shows the collection again after any explicit render
    fn mark_rendered(&self) {
        self.list_state.set_neq(ListState::Ready);
    }

    fn fail(&self, context: &str, message: &str, err: ApiError) -> DashboardResult<()> {
        error!(error = %err, "{}", context);
        self.notify(NotificationKind::Error, message);
        Err(err.into())
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.store.snapshot()
    }

    pub fn stats(&self) -> TaskStats {
        self.store.stats()
    }

    pub fn section(&self) -> Section {
        self.section.get()
    }

    pub fn query(&self) -> ListQuery {
        self.query.get_cloned()
    }

    pub fn user(&self) -> Option<User> {
        self.user.get_cloned()
    }

    pub fn list_state(&self) -> ListState {
        self.list_state.get()
    }

    pub fn container_view(&self) -> TaskContainerView {
        let visible = self.query.lock_ref().apply(&self.store.snapshot());
        TaskContainerView::new(self.list_state.get(), &visible)
    }

    pub fn editor(&self) -> Option<Arc<EditSession>> {
        self.editor.get_cloned()
    }

    pub fn new_task_form(&self) -> &TaskForm {
        &self.new_task
    }

    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    pub fn container_signal(&self) -> impl Signal<Item = TaskContainerView> + use<A, H> {
        map_ref! {
            let state = self.list_state.signal(),
            let tasks = self.store.signal(),
            let query = self.query.signal_cloned() =>
            TaskContainerView::new(*state, &query.apply(tasks))
        }
    }

    pub fn stats_signal(&self) -> impl Signal<Item = TaskStats> + use<A, H> {
        self.store
            .signal()
            .map(|tasks| TaskStats::from_tasks(&tasks))
            .dedupe()
    }

    pub fn section_signal(&self) -> impl Signal<Item = Section> + use<A, H> {
        self.section.signal()
    }

    /// The highlighted filter control, `None` while a search is active
    pub fn filter_signal(&self) -> impl Signal<Item = Option<StatusFilter>> + use<A, H> {
        self.query.signal_ref(ListQuery::filter)
    }

    /// `true` while the list is narrowed by a search term
    pub fn searching_signal(&self) -> impl Signal<Item = bool> + use<A, H> {
        self.query
            .signal_ref(|query| matches!(query, ListQuery::Search(_)))
            .dedupe()
    }

    pub fn user_signal(&self) -> impl Signal<Item = Option<User>> + use<A, H> {
        self.user.signal_cloned()
    }

    pub fn profile_signal(&self) -> impl Signal<Item = Option<ProfileView>> + use<A, H> {
        self.user
            .signal_ref(|user| user.as_ref().map(ProfileView::new))
    }

    pub fn editor_signal(&self) -> impl Signal<Item = Option<Arc<EditSession>>> + use<A, H> {
        self.editor.signal_cloned()
    }
}
