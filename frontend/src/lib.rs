use std::rc::Rc;

use chrono::{Local, Utc};
use sauron::prelude::*;
use shared::config::{API_BASE_KEY, LOG_LEVEL_KEY};
use shared::{
    generate_task_report, guard, report_file_name, Access, ClientConfig, ClientError,
    DashboardError, FormField, Notices, ProbeOutcome, Route, Session, SortKey, Task, TaskDraft,
    TaskId, TaskListView, TaskQuery, TaskStats, TaskStatus, ValidationErrors,
};
use tracing::{debug, info, warn};
use web_sys::window;

mod api;
mod download;
mod history;
mod logging;
mod views;

pub use api::{SessionProbe, TaskClient};

#[derive(Debug, Clone)]
pub enum Msg {
    // Navigation
    NavigateTo(Route),
    /// Back/Forward landed on this path; `None` once history can't be watched.
    HistoryMoved(Option<String>),

    // Session
    SessionChecked(ProbeOutcome),
    Login,
    Logout,
    LoggedOut(Result<(), ClientError>),

    // Dashboard
    DashboardLoaded(Result<(Vec<Task>, TaskStats), ClientError>),

    // Task list
    TasksLoaded(Result<Vec<Task>, ClientError>),
    SetSearch(String),
    SetStatusFilter(Option<TaskStatus>),
    SetSort(SortKey),
    ToggleFilters,
    ExportPdf,
    RenderReport,
    ConfirmDelete(TaskId),
    CancelDelete,
    DeleteConfirmed,
    TaskDeleted(TaskId, Result<(), ClientError>),

    // Single task
    TaskLoaded(TaskId, Result<Task, ClientError>),
    SetField(FormField, String),
    SetFormStatus(TaskStatus),
    SubmitForm,
    TaskSaved(Result<Task, ClientError>),

    DismissNotice(u64),
}

#[derive(Debug, Clone, Default)]
struct DashboardData {
    tasks: Vec<Task>,
    stats: TaskStats,
    loading: bool,
}

/// Add/edit form. `editing` is set on the edit page.
#[derive(Debug, Clone, Default)]
struct TaskForm {
    draft: TaskDraft,
    errors: ValidationErrors,
    editing: Option<TaskId>,
    loading: bool,
    submitting: bool,
}

#[derive(Debug, Clone)]
pub struct Model {
    client: TaskClient,
    route: Route,
    session: Session,
    /// Dropped (and aborted) together with the model.
    probe: Option<Rc<SessionProbe>>,
    notices: Notices,
    dashboard: DashboardData,
    list: TaskListView,
    list_loading: bool,
    filters_open: bool,
    pending_delete: Option<TaskId>,
    deleting: bool,
    current_task: Option<Task>,
    form: TaskForm,
}

impl Default for Model {
    fn default() -> Self {
        Self::new(&ClientConfig::default())
    }
}

impl Model {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: TaskClient::new(config),
            route: Route::Dashboard,
            session: Session::new(),
            probe: None,
            notices: Notices::new(),
            dashboard: DashboardData::default(),
            list: TaskListView::default(),
            list_loading: false,
            filters_open: false,
            pending_delete: None,
            deleting: false,
            current_task: None,
            form: TaskForm::default(),
        }
    }

    /// Moves to `requested`, honouring the session guard, and starts whatever
    /// loading the page needs.
    fn navigate(&mut self, requested: Route) -> Cmd<Msg> {
        let route = resolve_route(requested, &self.session);
        if route != Route::NotFound {
            history::push_path(&route.path());
        }
        debug!(path = %route.path(), "navigate");
        self.route = route;

        if guard(&self.route, &self.session) == Access::Wait {
            return Cmd::none();
        }
        self.load_route()
    }

    fn load_route(&mut self) -> Cmd<Msg> {
        let client = self.client.clone();
        match self.route.clone() {
            Route::Dashboard => {
                self.dashboard.loading = true;
                Cmd::new(async move { Msg::DashboardLoaded(load_dashboard(&client).await) })
            }
            Route::Tasks => {
                self.list_loading = true;
                self.pending_delete = None;
                Cmd::new(async move { Msg::TasksLoaded(client.list(&TaskQuery::all()).await) })
            }
            Route::AddTask => {
                self.form = TaskForm {
                    draft: TaskDraft::default_for(Utc::now()),
                    ..TaskForm::default()
                };
                Cmd::none()
            }
            Route::ViewTask(id) | Route::EditTask(id) => {
                self.current_task = None;
                self.form = TaskForm {
                    editing: Some(id.clone()),
                    loading: true,
                    ..TaskForm::default()
                };
                Cmd::new(async move {
                    let result = client.get(&id).await;
                    Msg::TaskLoaded(id, result)
                })
            }
            Route::Login | Route::Profile | Route::NotFound => Cmd::none(),
        }
    }

    fn fail(&mut self, context: &str, err: impl Into<DashboardError>) {
        let err = err.into();
        warn!(error = %err, "{context}");
        self.notices.failure(&err, context);
    }

    fn export_report(&mut self) -> std::result::Result<(), DashboardError> {
        let now = Local::now();
        let bytes = generate_task_report(self.list.visible(), &now)?;
        download::save_pdf(&bytes, &report_file_name(&now.with_timezone(&Utc)))?;
        Ok(())
    }
}

impl Application for Model {
    type MSG = Msg;

    fn init(&mut self) -> Cmd<Msg> {
        let path = window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default();
        let route = Route::parse(&path);

        let check = match SessionProbe::start(&self.client) {
            Ok((probe, check)) => {
                self.probe = Some(Rc::new(probe));
                Cmd::new(async move { Msg::SessionChecked(check.await) })
            }
            Err(err) => {
                self.session.settle(ProbeOutcome::Failed(err.to_string()));
                Cmd::none()
            }
        };

        Cmd::batch(vec![check, self.navigate(route), watch_history()])
    }

    fn update(&mut self, msg: Msg) -> Cmd<Msg> {
        match msg {
            Msg::NavigateTo(route) => self.navigate(route),
            Msg::HistoryMoved(Some(path)) => {
                debug!(%path, "history moved");
                Cmd::batch(vec![self.navigate(Route::parse(&path)), watch_history()])
            }
            Msg::HistoryMoved(None) => {
                warn!("browser history is not observable; Back/Forward will not re-route");
                Cmd::none()
            }

            Msg::SessionChecked(outcome) => {
                self.probe = None;
                if self.session.settle(outcome) {
                    self.navigate(self.route.clone())
                } else {
                    Cmd::none()
                }
            }
            Msg::Login => {
                let target = self.client.endpoints().login();
                info!(%target, "redirecting to identity provider");
                if let Some(Err(err)) = window().map(|w| w.location().set_href(&target)) {
                    warn!(?err, "login redirect failed");
                }
                Cmd::none()
            }
            Msg::Logout => {
                let client = self.client.clone();
                Cmd::new(async move { Msg::LoggedOut(client.logout().await) })
            }
            Msg::LoggedOut(Ok(())) => {
                self.session.logout();
                self.dashboard = DashboardData::default();
                self.list.replace_all(Vec::new());
                self.current_task = None;
                self.navigate(Route::Login)
            }
            Msg::LoggedOut(Err(err)) => {
                self.fail("Logout failed", err);
                Cmd::none()
            }

            Msg::DashboardLoaded(result) => {
                self.dashboard.loading = false;
                match result {
                    Ok((tasks, stats)) => {
                        if !stats.is_consistent() {
                            warn!(?stats, "server stats do not add up");
                        }
                        self.dashboard.tasks = tasks;
                        self.dashboard.stats = stats;
                    }
                    Err(err) => self.fail("Failed to load dashboard", err),
                }
                Cmd::none()
            }

            Msg::TasksLoaded(result) => {
                self.list_loading = false;
                match result {
                    Ok(tasks) => {
                        debug!(count = tasks.len(), "tasks loaded");
                        self.list.replace_all(tasks);
                    }
                    Err(err) => self.fail("Failed to load tasks", err),
                }
                Cmd::none()
            }
            Msg::SetSearch(search) => {
                self.list.set_search(search);
                Cmd::none()
            }
            Msg::SetStatusFilter(status) => {
                self.list.set_status(status);
                Cmd::none()
            }
            Msg::SetSort(sort) => {
                self.list.set_sort(sort);
                Cmd::none()
            }
            Msg::ToggleFilters => {
                self.filters_open = !self.filters_open;
                Cmd::none()
            }
            Msg::ExportPdf => {
                self.notices.info("Generating PDF...");
                // Yield once so the notice renders before the blocking layout.
                Cmd::new(async { Msg::RenderReport })
            }
            Msg::RenderReport => {
                match self.export_report() {
                    Ok(()) => {
                        info!(tasks = self.list.visible().len(), "report exported");
                        self.notices.success("PDF report downloaded successfully");
                    }
                    Err(err) => self.fail("Failed to generate PDF report", err),
                }
                Cmd::none()
            }
            Msg::ConfirmDelete(id) => {
                self.pending_delete = Some(id);
                Cmd::none()
            }
            Msg::CancelDelete => {
                if !self.deleting {
                    self.pending_delete = None;
                }
                Cmd::none()
            }
            Msg::DeleteConfirmed => match self.pending_delete.clone() {
                Some(id) if !self.deleting => {
                    self.deleting = true;
                    let client = self.client.clone();
                    Cmd::new(async move {
                        let result = client.delete(&id).await;
                        Msg::TaskDeleted(id, result)
                    })
                }
                _ => Cmd::none(),
            },
            Msg::TaskDeleted(id, result) => {
                self.deleting = false;
                self.pending_delete = None;
                match result {
                    Ok(()) => {
                        self.list.remove(&id);
                        self.dashboard.tasks.retain(|task| task.id != id);
                        self.notices.success("Task deleted successfully");
                    }
                    Err(err) => self.fail("Failed to delete task", err),
                }
                Cmd::none()
            }

            Msg::TaskLoaded(id, result) => {
                // Ignore answers for a page the user already left.
                if self.route.task_id() != Some(&id) {
                    return Cmd::none();
                }
                self.form.loading = false;
                match result {
                    Ok(task) => {
                        if matches!(self.route, Route::EditTask(_)) {
                            self.form.draft = TaskDraft::from_task(&task);
                        }
                        self.current_task = Some(task);
                        Cmd::none()
                    }
                    Err(err) => {
                        self.fail("Failed to load task", err);
                        self.navigate(Route::Tasks)
                    }
                }
            }
            Msg::SetField(field, input) => {
                self.form.draft.set_field(field, input);
                self.form.errors.clear(field);
                Cmd::none()
            }
            Msg::SetFormStatus(status) => {
                self.form.draft.status = status;
                Cmd::none()
            }
            Msg::SubmitForm => {
                if self.form.submitting {
                    return Cmd::none();
                }
                let data = match self.form.draft.validate() {
                    Ok(data) => data,
                    Err(errors) => {
                        debug!(%errors, "task form rejected");
                        self.form.errors = errors;
                        return Cmd::none();
                    }
                };
                self.form.submitting = true;
                let client = self.client.clone();
                match self.form.editing.clone() {
                    Some(id) => Cmd::new(async move { Msg::TaskSaved(client.update(&id, &data).await) }),
                    None => Cmd::new(async move { Msg::TaskSaved(client.create(&data).await) }),
                }
            }
            Msg::TaskSaved(result) => {
                self.form.submitting = false;
                let editing = self.form.editing.is_some();
                match result {
                    Ok(task) => {
                        info!(id = %task.id, editing, "task saved");
                        self.list.upsert(task);
                        self.notices.success(if editing {
                            "Task updated successfully"
                        } else {
                            "Task created successfully"
                        });
                        self.navigate(Route::Tasks)
                    }
                    Err(err) => {
                        let context = if editing {
                            "Failed to update task"
                        } else {
                            "Failed to create task"
                        };
                        self.fail(context, err);
                        Cmd::none()
                    }
                }
            }

            Msg::DismissNotice(id) => {
                self.notices.dismiss(id);
                Cmd::none()
            }
        }
    }

    fn view(&self) -> Node<Msg> {
        self.view_app()
    }
}

/// Where a navigation actually lands once the session guard has spoken.
fn resolve_route(requested: Route, session: &Session) -> Route {
    match guard(&requested, session) {
        Access::Render | Access::Wait => requested,
        Access::RedirectToLogin => Route::Login,
        Access::RedirectToDashboard => Route::Dashboard,
    }
}

async fn load_dashboard(client: &TaskClient) -> Result<(Vec<Task>, TaskStats), ClientError> {
    let tasks = client.list(&TaskQuery::all()).await?;
    let stats = client.stats().await?;
    Ok((tasks, stats))
}

/// Re-armed after every move, so exactly one listener is pending.
fn watch_history() -> Cmd<Msg> {
    Cmd::new(async { Msg::HistoryMoved(history::next_move().await) })
}

/// Build-time settings, e.g. `TASKBOARD_API_BASE=https://api.example.com trunk build`.
fn build_setting(key: &str) -> Option<String> {
    let value = match key {
        API_BASE_KEY => option_env!("TASKBOARD_API_BASE"),
        LOG_LEVEL_KEY => option_env!("TASKBOARD_LOG"),
        _ => None,
    };
    value.map(str::to_string)
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let (config, problem) = match ClientConfig::from_lookup(build_setting) {
        Ok(config) => (config, None),
        Err(err) => (ClientConfig::default(), Some(err)),
    };
    logging::install_tracing(&config.log_level);
    info!(api = %config.api_base, "starting taskboard");

    let mut model = Model::new(&config);
    if let Some(err) = problem {
        model.fail("Invalid configuration", err);
    }
    Program::mount_to_body(model);
}
