//! Domain logic of the task dashboard, free of any browser API so it can be
//! tested natively and reused by the wasm frontend.

pub mod api;
pub mod config;
pub mod dashboard;
pub mod dates;
pub mod error;
pub mod filter;
pub mod model;
pub mod notice;
pub mod report;
pub mod routes;
pub mod session;

pub use api::{Endpoints, Method, TaskQuery};
pub use config::ClientConfig;
pub use error::{ClientError, ConfigError, DashboardError, ReportError, Result};
pub use filter::{derive_view, SortKey, TaskCriteria, TaskListView};
pub use model::{
    FormField, SessionPayload, Task, TaskDraft, TaskFormData, TaskId, TaskStats, TaskStatus, User,
    ValidationErrors,
};
pub use notice::{Notice, NoticeKind, Notices};
pub use report::{generate_task_report, render_pdf, report_file_name, ReportLayout};
pub use routes::Route;
pub use session::{guard, Access, ProbeOutcome, Session, SessionState};
