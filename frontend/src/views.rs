use chrono::{DateTime, Local, Utc};
use sauron::{
    html::{attributes::*, *},
    prelude::*,
};
use shared::dashboard::{recent_tasks, upcoming_deadlines, DIGEST_LIMIT};
use shared::dates::{format_date, format_date_time, format_deadline, format_relative};
use shared::{guard, Access, FormField, Notice, NoticeKind, Route, SortKey, Task, TaskStatus};

use crate::{Model, Msg};

const CARD: &str = "bg-ctp-surface0 rounded-lg shadow-lg p-6 border border-ctp-surface1";
const PRIMARY_BUTTON: &str = "bg-ctp-blue hover:bg-ctp-sapphire text-ctp-base font-medium px-4 py-2 rounded-md transition-colors duration-200 disabled:opacity-50";
const OUTLINE_BUTTON: &str = "border border-ctp-surface2 text-ctp-text hover:bg-ctp-surface1 font-medium px-4 py-2 rounded-md transition-colors duration-200";
const DANGER_BUTTON: &str = "bg-ctp-red hover:bg-ctp-maroon text-ctp-base font-medium px-4 py-2 rounded-md transition-colors duration-200 disabled:opacity-50";
const INPUT: &str = "w-full px-3 py-2 bg-ctp-surface0 border rounded-md text-ctp-text placeholder-ctp-subtext0 focus:outline-none focus:ring-2 focus:ring-ctp-blue focus:border-transparent";

fn local(at: &DateTime<Utc>) -> DateTime<Local> {
    at.with_timezone(&Local)
}

fn empty() -> Node<Msg> {
    span([], [])
}

fn status_badge(status: TaskStatus) -> Node<Msg> {
    let tone = match status {
        TaskStatus::Pending => "bg-ctp-yellow/20 text-ctp-yellow",
        TaskStatus::InProgress => "bg-ctp-blue/20 text-ctp-blue",
        TaskStatus::Done => "bg-ctp-green/20 text-ctp-green",
    };
    span([class(&format!("inline-flex items-center px-2 py-1 rounded-full text-xs font-medium {tone}"))], [
        text(status.label()),
    ])
}

fn spinner() -> Node<Msg> {
    div([class("flex justify-center items-center h-64")], [
        div([class("animate-spin rounded-full h-12 w-12 border-t-2 border-b-2 border-ctp-blue")], []),
    ])
}

fn link_to(route: Route, classes: &str, children: Vec<Node<Msg>>) -> Node<Msg> {
    a([
        href(route.path()),
        on_click(move |event| {
            event.prevent_default();
            Msg::NavigateTo(route.clone())
        }),
        class(classes.to_string()),
    ], children)
}

fn page_heading(heading: &str, subtitle: &str) -> Node<Msg> {
    div([class("mb-6")], [
        h1([class("text-2xl font-bold text-ctp-text")], [text(heading)]),
        p([class("text-ctp-subtext1 mt-1")], [text(subtitle)]),
    ])
}

impl Model {
    pub(crate) fn view_app(&self) -> Node<Msg> {
        if self.route == Route::Login {
            return div([class("min-h-screen bg-ctp-base text-ctp-text")], [
                self.view_login(),
                self.view_notices(),
            ]);
        }

        let content = if guard(&self.route, &self.session) == Access::Wait {
            spinner()
        } else {
            match &self.route {
                Route::Dashboard => self.view_dashboard(),
                Route::Tasks => self.view_tasks_page(),
                Route::AddTask | Route::EditTask(_) => self.view_form_page(),
                Route::ViewTask(_) => self.view_task_page(),
                Route::Profile => self.view_profile(),
                Route::Login | Route::NotFound => self.view_not_found(),
            }
        };

        div([class("min-h-screen bg-ctp-base text-ctp-text")], [
            self.view_header(),
            div([class("max-w-6xl mx-auto px-6 py-8")], [content]),
            self.view_delete_modal(),
            self.view_notices(),
        ])
    }

    fn view_header(&self) -> Node<Msg> {
        header([class("bg-ctp-mantle shadow-lg border-b border-ctp-surface0")], [
            div([class("max-w-6xl mx-auto px-6 py-4")], [
                div([class("flex items-center justify-between")], [
                    div([class("flex items-center space-x-8")], [
                        link_to(Route::Dashboard, "text-2xl font-bold text-ctp-text", vec![text("TaskPro")]),
                        nav([class("flex space-x-4")], [
                            self.nav_link("Dashboard", Route::Dashboard),
                            self.nav_link("Tasks", Route::Tasks),
                        ]),
                    ]),
                    match self.session.user() {
                        Some(user) => div([class("flex items-center space-x-4")], [
                            link_to(Route::Profile, "flex items-center space-x-2 text-sm font-medium text-ctp-subtext1 hover:text-ctp-text", vec![
                                self.avatar("h-8 w-8 text-sm"),
                                span([], [text(&user.name)]),
                            ]),
                            button([
                                r#type("button"),
                                on_click(|_| Msg::Logout),
                                class("text-sm text-ctp-subtext0 hover:text-ctp-red transition-colors duration-200"),
                            ], [text("Logout")]),
                        ]),
                        None => empty(),
                    },
                ]),
            ]),
        ])
    }

    fn nav_link(&self, caption: &str, route: Route) -> Node<Msg> {
        let is_active = match (&self.route, &route) {
            (Route::AddTask | Route::ViewTask(_) | Route::EditTask(_), Route::Tasks) => true,
            (current, target) => current == target,
        };
        link_to(
            route,
            &format!(
                "px-3 py-2 rounded-md text-sm font-medium transition-colors duration-200 {}",
                if is_active {
                    "bg-ctp-blue text-ctp-base"
                } else {
                    "text-ctp-subtext0 hover:text-ctp-text hover:bg-ctp-surface0"
                }
            ),
            vec![text(caption)],
        )
    }

    fn avatar(&self, size: &str) -> Node<Msg> {
        match self.session.user() {
            Some(user) if !user.picture.is_empty() => {
                img([src(user.picture.clone()), class(&format!("{size} rounded-full"))], [])
            }
            Some(user) => div([class(&format!(
                "{size} rounded-full bg-ctp-blue text-ctp-base flex items-center justify-center font-bold"
            ))], [text(user.initial().map(String::from).unwrap_or_default())]),
            None => empty(),
        }
    }

    fn view_dashboard(&self) -> Node<Msg> {
        if self.dashboard.loading {
            return spinner();
        }
        let stats = self.dashboard.stats;
        let now = Utc::now();
        let name = self.session.user().map(|u| u.name.as_str()).unwrap_or_default();

        div([class("space-y-8")], [
            page_heading("Dashboard", &format!("Welcome back, {name}!")),
            div([class("grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6")], [
                self.stat_card("Total Tasks", stats.total, "📝"),
                self.stat_card("Pending", stats.pending, "⏳"),
                self.stat_card("In Progress", stats.in_progress, "🔄"),
                self.stat_card("Completed", stats.completed, "✅"),
            ]),
            div([class("grid grid-cols-1 lg:grid-cols-2 gap-6")], [
                div([class(CARD)], [
                    div([class("flex items-center justify-between mb-4")], [
                        h2([class("text-lg font-semibold text-ctp-text")], [text("Recently Updated")]),
                        link_to(Route::Tasks, "text-sm text-ctp-blue hover:text-ctp-sapphire", vec![text("View all →")]),
                    ]),
                    self.digest(
                        recent_tasks(&self.dashboard.tasks, DIGEST_LIMIT),
                        "No recent tasks found.",
                        |task| format!("Updated {} • {}", format_relative(&local(&task.updated_at), &local(&now)), task.assigned_to),
                    ),
                ]),
                div([class(CARD)], [
                    div([class("flex items-center justify-between mb-4")], [
                        h2([class("text-lg font-semibold text-ctp-text")], [text("Upcoming Deadlines")]),
                        link_to(Route::AddTask, "text-sm text-ctp-blue hover:text-ctp-sapphire", vec![text("Add task +")]),
                    ]),
                    self.digest(
                        upcoming_deadlines(&self.dashboard.tasks, now, DIGEST_LIMIT),
                        "No upcoming deadlines.",
                        |task| format!("{} • {}", format_deadline(&local(&task.deadline), &local(&now)), task.assigned_to),
                    ),
                ]),
            ]),
        ])
    }

    fn stat_card(&self, card_title: &str, count: usize, icon: &str) -> Node<Msg> {
        div([class("bg-ctp-surface1 rounded-lg p-6 border border-ctp-surface2")], [
            div([class("flex items-center justify-between")], [
                div([], [
                    p([class("text-sm font-medium text-ctp-subtext0")], [text(card_title)]),
                    p([class("text-2xl font-bold text-ctp-text mt-1")], [text(count)]),
                ]),
                span([class("text-3xl")], [text(icon)]),
            ]),
        ])
    }

    fn digest(&self, tasks: Vec<Task>, empty_text: &str, detail: impl Fn(&Task) -> String) -> Node<Msg> {
        if tasks.is_empty() {
            return p([class("text-sm text-ctp-subtext0 py-4")], [text(empty_text)]);
        }
        div(
            [class("space-y-2")],
            tasks
                .iter()
                .map(|task| {
                    link_to(
                        Route::ViewTask(task.id.clone()),
                        "flex items-start justify-between p-3 rounded-md border-l-4 border-ctp-blue hover:bg-ctp-surface1 transition-colors duration-200",
                        vec![
                            div([class("min-w-0")], [
                                h3([class("text-sm font-medium text-ctp-text mb-1")], [text(&task.title)]),
                                p([class("text-xs text-ctp-subtext0 truncate")], [text(detail(task))]),
                            ]),
                            status_badge(task.status),
                        ],
                    )
                })
                .collect::<Vec<_>>(),
        )
    }

    fn view_tasks_page(&self) -> Node<Msg> {
        div([], [
            div([class("flex items-center justify-between")], [
                page_heading("Tasks", "Manage and track all intern assignments"),
                link_to(Route::AddTask, PRIMARY_BUTTON, vec![text("Add New Task")]),
            ]),
            self.view_filter_bar(),
            if self.list_loading {
                spinner()
            } else {
                self.view_task_list()
            },
        ])
    }

    fn view_filter_bar(&self) -> Node<Msg> {
        let criteria = self.list.criteria();
        div([class(&format!("{CARD} mb-6"))], [
            div([class("flex flex-col md:flex-row gap-4")], [
                div([class("flex-1")], [
                    input([
                        r#type("text"),
                        placeholder("Search tasks..."),
                        value(criteria.search.clone()),
                        on_input(|event| Msg::SetSearch(event.value())),
                        class(&format!("{INPUT} border-ctp-surface2")),
                    ], []),
                ]),
                div([class("flex items-center gap-2")], [
                    button([r#type("button"), on_click(|_| Msg::ToggleFilters), class(OUTLINE_BUTTON)], [text("Filters")]),
                    button([r#type("button"), on_click(|_| Msg::ExportPdf), class(OUTLINE_BUTTON)], [text("Export PDF")]),
                ]),
            ]),
            if self.filters_open {
                div([class("mt-4 grid grid-cols-1 md:grid-cols-2 gap-4")], [
                    div([], [
                        p([class("text-sm font-medium text-ctp-subtext0 mb-2")], [text("Status")]),
                        div(
                            [class("flex flex-wrap gap-2")],
                            std::iter::once(self.chip("All Statuses", criteria.status.is_none(), Msg::SetStatusFilter(None)))
                                .chain(TaskStatus::ALL.iter().map(|status| {
                                    self.chip(status.label(), criteria.status == Some(*status), Msg::SetStatusFilter(Some(*status)))
                                }))
                                .collect::<Vec<_>>(),
                        ),
                    ]),
                    div([], [
                        p([class("text-sm font-medium text-ctp-subtext0 mb-2")], [text("Sort By")]),
                        div(
                            [class("flex flex-wrap gap-2")],
                            SortKey::ALL
                                .iter()
                                .map(|sort| self.chip(sort.label(), criteria.sort == *sort, Msg::SetSort(*sort)))
                                .collect::<Vec<_>>(),
                        ),
                    ]),
                ])
            } else {
                empty()
            },
        ])
    }

    fn chip(&self, caption: &str, active: bool, msg: Msg) -> Node<Msg> {
        button([
            r#type("button"),
            on_click(move |_| msg.clone()),
            class(&format!(
                "px-3 py-1 rounded-full text-sm font-medium transition-colors duration-200 {}",
                if active {
                    "bg-ctp-blue text-ctp-base"
                } else {
                    "bg-ctp-surface1 text-ctp-subtext1 hover:bg-ctp-surface2"
                }
            )),
        ], [text(caption)])
    }

    fn view_task_list(&self) -> Node<Msg> {
        let tasks = self.list.visible();
        if tasks.is_empty() {
            return div([class(&format!("{CARD} text-center py-12"))], [
                div([class("text-ctp-overlay0 text-6xl mb-4")], [text("📭")]),
                h3([class("text-lg font-medium text-ctp-text mb-2")], [text("No tasks found")]),
                p([class("text-ctp-subtext0")], [text(if self.list.all().is_empty() {
                    "Create a task to get started."
                } else {
                    "Try a different search or filter."
                })]),
            ]);
        }
        div(
            [class("space-y-4")],
            tasks.iter().map(|task| self.view_task_row(task)).collect::<Vec<_>>(),
        )
    }

    fn view_task_row(&self, task: &Task) -> Node<Msg> {
        let task_id = task.id.clone();
        div([
            key(task.id.to_string()),
            class("group border rounded-xl p-6 bg-ctp-surface0 shadow-sm border-ctp-surface1 hover:border-ctp-blue transition-all duration-300"),
        ], [
            div([class("flex items-start gap-4")], [
                div([class("flex-1 min-w-0")], [
                    div([class("flex items-center gap-3 mb-2")], [
                        h3([class("text-lg font-semibold text-ctp-text")], [text(&task.title)]),
                        status_badge(task.status),
                    ]),
                    p([class("text-sm text-ctp-subtext1 break-words")], [text(&task.description)]),
                    div([class("mt-3 flex gap-6 text-xs text-ctp-subtext0")], [
                        span([], [text(format!("👤 {}", task.assigned_to))]),
                        span([], [text(format!("📅 {}", format_date(&local(&task.deadline))))]),
                    ]),
                ]),
                div([class("flex-shrink-0 flex flex-col gap-2")], [
                    link_to(Route::ViewTask(task_id.clone()), "inline-flex items-center justify-center w-8 h-8 rounded-lg bg-ctp-teal/20 text-ctp-teal hover:bg-ctp-teal/30", vec![text("👁️")]),
                    link_to(Route::EditTask(task_id.clone()), "inline-flex items-center justify-center w-8 h-8 rounded-lg bg-ctp-blue/20 text-ctp-blue hover:bg-ctp-blue/30", vec![text("✏️")]),
                    button([
                        r#type("button"),
                        on_click(move |_| Msg::ConfirmDelete(task_id.clone())),
                        class("inline-flex items-center justify-center w-8 h-8 rounded-lg bg-ctp-red/20 text-ctp-red hover:bg-ctp-red/30"),
                    ], [text("🗑️")]),
                ]),
            ]),
        ])
    }

    fn view_delete_modal(&self) -> Node<Msg> {
        if self.pending_delete.is_none() {
            return empty();
        }
        div([class("fixed inset-0 z-40 flex items-center justify-center bg-ctp-crust/70")], [
            div([class("bg-ctp-surface0 rounded-lg shadow-xl p-6 w-full max-w-sm border border-ctp-surface1")], [
                h2([class("text-lg font-semibold text-ctp-text mb-4")], [text("Confirm Deletion")]),
                p([class("text-ctp-subtext1")], [text("Are you sure you want to delete this task? This action cannot be undone.")]),
                div([class("flex justify-end space-x-3 mt-6")], [
                    button([r#type("button"), on_click(|_| Msg::CancelDelete), disabled(self.deleting), class(OUTLINE_BUTTON)], [text("Cancel")]),
                    button([r#type("button"), on_click(|_| Msg::DeleteConfirmed), disabled(self.deleting), class(DANGER_BUTTON)], [
                        text(if self.deleting { "Deleting..." } else { "Delete" }),
                    ]),
                ]),
            ]),
        ])
    }

    fn view_task_page(&self) -> Node<Msg> {
        let Some(task) = &self.current_task else {
            return spinner();
        };
        let now = Local::now();
        div([], [
            link_to(Route::Tasks, "text-sm text-ctp-subtext0 hover:text-ctp-text", vec![text("← Back to Tasks")]),
            div([class("mt-4")], [page_heading("Task Details", "Everything about this assignment")]),
            div([class(&format!("{CARD} space-y-6"))], [
                div([class("flex items-start justify-between")], [
                    div([], [
                        h1([class("text-2xl font-semibold text-ctp-text")], [text(&task.title)]),
                        div([class("mt-2")], [status_badge(task.status)]),
                    ]),
                    link_to(Route::EditTask(task.id.clone()), PRIMARY_BUTTON, vec![text("Edit Task")]),
                ]),
                div([], [
                    h3([class("text-sm font-medium text-ctp-subtext0 mb-2")], [text("Description")]),
                    p([class("text-ctp-text whitespace-pre-line")], [text(&task.description)]),
                ]),
                div([class("grid grid-cols-1 md:grid-cols-2 gap-4")], [
                    self.detail_row("Assigned To", task.assigned_to.clone()),
                    self.detail_row("Deadline", format!(
                        "{} ({})",
                        format_date_time(&local(&task.deadline)),
                        format_deadline(&local(&task.deadline), &now),
                    )),
                    self.detail_row("Created", format_date_time(&local(&task.created_at))),
                    self.detail_row("Last Updated", format_relative(&local(&task.updated_at), &now)),
                ]),
            ]),
        ])
    }

    fn detail_row(&self, caption: &str, content: String) -> Node<Msg> {
        div([class("bg-ctp-surface1 rounded-lg p-4 border border-ctp-surface2")], [
            p([class("text-xs font-medium text-ctp-subtext0")], [text(caption)]),
            p([class("text-ctp-text mt-1")], [text(content)]),
        ])
    }

    fn view_form_page(&self) -> Node<Msg> {
        if self.form.loading {
            return spinner();
        }
        let (heading, subtitle, submit, back) = match &self.form.editing {
            Some(id) => ("Edit Task", "Update the task details", "Update Task", Route::ViewTask(id.clone())),
            None => ("Add New Task", "Create a new task for an intern", "Create Task", Route::Tasks),
        };
        let draft = &self.form.draft;

        div([], [
            link_to(back.clone(), "text-sm text-ctp-subtext0 hover:text-ctp-text", vec![text("← Back")]),
            div([class("mt-4")], [page_heading(heading, subtitle)]),
            div([class(&format!("{CARD} space-y-4"))], [
                self.form_input(FormField::Title, "Title", "text", "Task title"),
                self.form_textarea(FormField::Description, "Description", "Describe the task"),
                div([class("grid grid-cols-1 md:grid-cols-2 gap-4")], [
                    self.form_input(FormField::Deadline, "Deadline", "date", ""),
                    self.form_input(FormField::AssignedTo, "Assigned To", "text", "Intern name"),
                ]),
                div([], [
                    p([class("text-sm font-medium text-ctp-subtext0 mb-2")], [text("Status")]),
                    div(
                        [class("flex flex-wrap gap-2")],
                        TaskStatus::ALL
                            .iter()
                            .map(|status| self.chip(status.label(), draft.status == *status, Msg::SetFormStatus(*status)))
                            .collect::<Vec<_>>(),
                    ),
                ]),
                div([class("flex justify-end space-x-3 pt-4 border-t border-ctp-surface1")], [
                    link_to(back, OUTLINE_BUTTON, vec![text("Cancel")]),
                    button([
                        r#type("button"),
                        on_click(|_| Msg::SubmitForm),
                        disabled(self.form.submitting),
                        class(PRIMARY_BUTTON),
                    ], [text(if self.form.submitting { "Saving..." } else { submit })]),
                ]),
            ]),
        ])
    }

    fn field_error(&self, field: FormField) -> Node<Msg> {
        match self.form.errors.get(field) {
            Some(message) => p([class("text-sm text-ctp-red mt-1")], [text(message)]),
            None => empty(),
        }
    }

    fn field_border(&self, field: FormField) -> &'static str {
        if self.form.errors.get(field).is_some() {
            "border-ctp-red"
        } else {
            "border-ctp-surface2"
        }
    }

    fn form_input(&self, field: FormField, caption: &str, kind: &str, hint: &str) -> Node<Msg> {
        div([], [
            label([class("block text-sm font-medium text-ctp-subtext0 mb-1")], [text(caption)]),
            input([
                r#type(kind.to_string()),
                placeholder(hint.to_string()),
                value(self.form.draft.field(field).to_string()),
                on_input(move |event| Msg::SetField(field, event.value())),
                class(&format!("{INPUT} {}", self.field_border(field))),
            ], []),
            self.field_error(field),
        ])
    }

    fn form_textarea(&self, field: FormField, caption: &str, hint: &str) -> Node<Msg> {
        div([], [
            label([class("block text-sm font-medium text-ctp-subtext0 mb-1")], [text(caption)]),
            textarea([
                placeholder(hint.to_string()),
                value(self.form.draft.field(field).to_string()),
                on_input(move |event| Msg::SetField(field, event.value())),
                class(&format!("{INPUT} {} h-28 resize-y", self.field_border(field))),
            ], []),
            self.field_error(field),
        ])
    }

    fn view_profile(&self) -> Node<Msg> {
        let Some(user) = self.session.user() else {
            return spinner();
        };
        div([], [
            page_heading("Profile", "View and manage your account information"),
            div([class("grid grid-cols-1 md:grid-cols-3 gap-6")], [
                div([class(&format!("{CARD} flex flex-col items-center text-center"))], [
                    self.avatar("h-24 w-24 text-3xl"),
                    h2([class("text-xl font-semibold text-ctp-text mt-2")], [text(&user.name)]),
                    p([class("text-ctp-subtext0 mt-1")], [text(&user.email)]),
                    div([class("mt-6")], [
                        button([r#type("button"), on_click(|_| Msg::Logout), class(DANGER_BUTTON)], [text("Sign Out")]),
                    ]),
                ]),
                div([class(&format!("{CARD} md:col-span-2"))], [
                    h3([class("text-lg font-medium mb-4")], [text("Account Information")]),
                    div([class("space-y-4")], [
                        self.detail_row("Full Name", user.name.clone()),
                        self.detail_row("Email", user.email.clone()),
                        self.detail_row("Account ID", user.id.clone()),
                    ]),
                ]),
            ]),
        ])
    }

    fn view_login(&self) -> Node<Msg> {
        div([class("min-h-screen flex flex-col justify-center items-center px-6")], [
            h2([class("text-3xl font-extrabold text-ctp-text")], [text("TaskPro")]),
            p([class("mt-2 text-sm text-ctp-subtext0")], [text("Intern Task Management System")]),
            div([class(&format!("{CARD} mt-8 w-full max-w-md text-center"))], [
                h3([class("text-lg font-medium text-ctp-text")], [text("Sign in to your account")]),
                p([class("mt-1 text-sm text-ctp-subtext0")], [text("Use your Google account to sign in securely.")]),
                div([class("mt-6")], [
                    if self.probe.is_some() {
                        p([class("text-sm text-ctp-subtext0 italic")], [text("Checking your session...")])
                    } else {
                        button([
                            r#type("button"),
                            on_click(|_| Msg::Login),
                            class(&format!("{PRIMARY_BUTTON} w-full")),
                        ], [text("Sign in with Google")])
                    },
                ]),
            ]),
        ])
    }

    fn view_not_found(&self) -> Node<Msg> {
        div([class("text-center py-16")], [
            h1([class("text-6xl font-bold text-ctp-overlay0 mb-4")], [text("404")]),
            h2([class("text-3xl font-bold text-ctp-text mb-2")], [text("Page not found")]),
            p([class("text-ctp-subtext1 mb-8")], [text("Sorry, we couldn't find the page you're looking for.")]),
            link_to(Route::Dashboard, PRIMARY_BUTTON, vec![text("Back to Dashboard")]),
        ])
    }

    fn view_notices(&self) -> Node<Msg> {
        div(
            [class("fixed bottom-4 right-4 z-50 space-y-2 w-80")],
            self.notices.iter().map(notice_toast).collect::<Vec<_>>(),
        )
    }
}

fn notice_toast(notice: &Notice) -> Node<Msg> {
    let tone = match notice.kind {
        NoticeKind::Info => "border-ctp-blue",
        NoticeKind::Success => "border-ctp-green",
        NoticeKind::Error => "border-ctp-red",
    };
    let notice_id = notice.id;
    div([
        key(notice.id.to_string()),
        class(&format!("flex items-start justify-between bg-ctp-surface0 border-l-4 {tone} rounded-md shadow-lg p-4")),
    ], [
        p([class("text-sm text-ctp-text")], [text(&notice.message)]),
        button([
            r#type("button"),
            on_click(move |_| Msg::DismissNotice(notice_id)),
            class("ml-4 text-ctp-subtext0 hover:text-ctp-text"),
        ], [text("✕")]),
    ])
}
