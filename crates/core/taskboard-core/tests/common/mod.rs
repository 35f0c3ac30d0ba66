//! In-memory task server and page host for driving `Dashboard` in tests.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use futures::future::LocalBoxFuture;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use taskboard_api::{
    ApiError, ApiResult, NewTask, Priority, Task, TaskApi, TaskId, TaskStatus, TaskUpdate, User,
};
use taskboard_core::{Dashboard, DashboardConfig, DashboardResult, Host};

#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    CurrentUser,
    ListTasks,
    Create(NewTask),
    Update(TaskId, TaskUpdate),
    Delete(TaskId),
}

struct ServerState {
    tasks: Vec<Task>,
    user: User,
    next_id: u64,
    failing: bool,
    log: Vec<Request>,
}

/// Task server keeping its collection newest first, like `GET /tasks` does.
#[derive(Clone)]
pub struct FakeServer {
    state: Arc<Mutex<ServerState>>,
}

impl FakeServer {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            state: Arc::new(Mutex::new(ServerState {
                tasks,
                user: User {
                    username: "ada".into(),
                    email: "ada@example.com".into(),
                    created_at: Some(Utc.with_ymd_and_hms(2023, 11, 2, 8, 30, 0).unwrap()),
                },
                next_id: 100,
                failing: false,
                log: Vec::new(),
            })),
        }
    }

    /// Answer every following request with HTTP 500
    pub fn set_failing(&self, failing: bool) {
        self.state.lock().unwrap().failing = failing;
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.state.lock().unwrap().tasks.clone()
    }

    pub fn requests(&self) -> Vec<Request> {
        self.state.lock().unwrap().log.clone()
    }

    async fn begin(&self, request: Request) -> ApiResult<()> {
        // Give concurrently started actions a chance to interleave
        tokio::task::yield_now().await;

        let mut state = self.state.lock().unwrap();
        state.log.push(request);
        if state.failing {
            return Err(ApiError::Status {
                status: 500,
                body: "{\"error\":\"boom\"}".into(),
            });
        }
        Ok(())
    }

    fn not_found() -> ApiError {
        ApiError::Status {
            status: 404,
            body: "{\"error\":\"Task not found\"}".into(),
        }
    }
}

#[async_trait(?Send)]
impl TaskApi for FakeServer {
    async fn current_user(&self) -> ApiResult<User> {
        self.begin(Request::CurrentUser).await?;
        Ok(self.state.lock().unwrap().user.clone())
    }

    async fn list_tasks(&self) -> ApiResult<Vec<Task>> {
        self.begin(Request::ListTasks).await?;
        Ok(self.tasks())
    }

    async fn create_task(&self, new: &NewTask) -> ApiResult<Task> {
        self.begin(Request::Create(new.clone())).await?;

        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let task = Task {
            id: TaskId::from(state.next_id),
            title: new.title.clone(),
            description: Some(new.description.clone()).filter(|d| !d.is_empty()),
            priority: new.priority,
            status: new.status,
            due_date: new.due_date,
            created_at: Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap(),
        };
        state.tasks.insert(0, task.clone());
        Ok(task)
    }

    async fn update_task(&self, id: &TaskId, update: &TaskUpdate) -> ApiResult<Task> {
        self.begin(Request::Update(id.clone(), update.clone()))
            .await?;

        let mut state = self.state.lock().unwrap();
        let task = state
            .tasks
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(Self::not_found)?;
        if let Some(title) = &update.title {
            task.title = title.clone();
        }
        if let Some(description) = &update.description {
            task.description = Some(description.clone()).filter(|d| !d.is_empty());
        }
        if let Some(priority) = update.priority {
            task.priority = priority;
        }
        if let Some(status) = update.status {
            task.status = status;
        }
        if let Some(due_date) = update.due_date {
            task.due_date = due_date;
        }
        Ok(task.clone())
    }

    async fn delete_task(&self, id: &TaskId) -> ApiResult<()> {
        self.begin(Request::Delete(id.clone())).await?;

        let mut state = self.state.lock().unwrap();
        let index = state
            .tasks
            .iter()
            .position(|t| &t.id == id)
            .ok_or_else(Self::not_found)?;
        state.tasks.remove(index);
        Ok(())
    }
}

#[derive(Default)]
struct PageState {
    storage: HashMap<String, String>,
    redirects: Vec<String>,
    confirmations: Vec<String>,
    decline: bool,
    spawned: usize,
}

/// Page host that records redirects and prompts. Spawned notification
/// lifecycles are counted and dropped, so notifications stay queued.
#[derive(Clone, Default)]
pub struct FakePage {
    state: Rc<RefCell<PageState>>,
}

impl FakePage {
    pub fn signed_in() -> Self {
        let page = Self::default();
        page.state
            .borrow_mut()
            .storage
            .insert("token".into(), "token-123".into());
        page
    }

    pub fn decline_confirmations(&self) {
        self.state.borrow_mut().decline = true;
    }

    pub fn redirects(&self) -> Vec<String> {
        self.state.borrow().redirects.clone()
    }

    pub fn confirmations(&self) -> Vec<String> {
        self.state.borrow().confirmations.clone()
    }

    pub fn spawned(&self) -> usize {
        self.state.borrow().spawned
    }

    pub fn stored(&self, key: &str) -> Option<String> {
        self.state.borrow().storage.get(key).cloned()
    }
}

impl Host for FakePage {
    fn storage_get(&self, key: &str) -> Option<String> {
        self.stored(key)
    }

    fn storage_set(&self, key: &str, value: &str) -> DashboardResult<()> {
        self.state
            .borrow_mut()
            .storage
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn storage_remove(&self, key: &str) {
        self.state.borrow_mut().storage.remove(key);
    }

    fn redirect(&self, route: &str) {
        self.state.borrow_mut().redirects.push(route.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        let mut state = self.state.borrow_mut();
        state.confirmations.push(message.to_string());
        !state.decline
    }

    fn sleep(&self, _duration: Duration) -> LocalBoxFuture<'static, ()> {
        Box::pin(async {})
    }

    fn spawn(&self, _task: LocalBoxFuture<'static, ()>) {
        self.state.borrow_mut().spawned += 1;
    }
}

pub fn task(id: &str, title: &str, status: TaskStatus) -> Task {
    Task {
        id: TaskId::from(id),
        title: title.to_string(),
        description: None,
        priority: Priority::Medium,
        status,
        due_date: None,
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
    }
}

/// Five tasks, two of them completed
pub fn five_tasks() -> Vec<Task> {
    vec![
        task("1", "Write report", TaskStatus::Pending),
        task("2", "Fix Foo widget", TaskStatus::Completed),
        task("3", "Plan sprint", TaskStatus::InProgress),
        task("4", "Review PR", TaskStatus::Completed),
        task("5", "Book flights", TaskStatus::Pending),
    ]
}

pub type TestDashboard = Dashboard<FakeServer, FakePage>;

/// Signed-in dashboard over `server`, with the initial load done
pub async fn loaded(server: &FakeServer) -> (TestDashboard, FakePage) {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let page = FakePage::signed_in();
    let dashboard = Dashboard::start(DashboardConfig::default(), page.clone(), |_, _| {
        Ok(server.clone())
    })
    .unwrap();
    dashboard.load().await;
    (dashboard, page)
}
