use crate::model::TaskId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
    Tasks,
    AddTask,
    ViewTask(TaskId),
    EditTask(TaskId),
    Profile,
    NotFound,
}

impl Route {
    /// Resolves a location path. `/` lands on the dashboard.
    pub fn parse(path: &str) -> Self {
        let trimmed = path.split(&['?', '#'][..]).next().unwrap_or_default();
        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] | ["dashboard"] => Route::Dashboard,
            ["login"] => Route::Login,
            ["tasks"] => Route::Tasks,
            ["tasks", "add"] => Route::AddTask,
            ["tasks", id] => Route::ViewTask(TaskId::new(*id)),
            ["tasks", id, "edit"] => Route::EditTask(TaskId::new(*id)),
            ["profile"] => Route::Profile,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Tasks => "/tasks".to_string(),
            Route::AddTask => "/tasks/add".to_string(),
            Route::ViewTask(id) => format!("/tasks/{id}"),
            Route::EditTask(id) => format!("/tasks/{id}/edit"),
            Route::Profile => "/profile".to_string(),
            Route::NotFound => "/404".to_string(),
        }
    }

    /// Everything but the login and not-found pages needs a session.
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Login | Route::NotFound)
    }

    pub fn task_id(&self) -> Option<&TaskId> {
        match self {
            Route::ViewTask(id) | Route::EditTask(id) => Some(id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_paths() {
        assert_eq!(Route::parse("/"), Route::Dashboard);
        assert_eq!(Route::parse("/dashboard"), Route::Dashboard);
        assert_eq!(Route::parse("/login"), Route::Login);
        assert_eq!(Route::parse("/tasks/"), Route::Tasks);
        assert_eq!(Route::parse("/tasks/add"), Route::AddTask);
        assert_eq!(Route::parse("/tasks/42"), Route::ViewTask(TaskId::new("42")));
        assert_eq!(Route::parse("/tasks/42/edit?from=list"), Route::EditTask(TaskId::new("42")));
        assert_eq!(Route::parse("/profile"), Route::Profile);
        assert_eq!(Route::parse("/tasks/42/delete"), Route::NotFound);
        assert_eq!(Route::parse("/settings"), Route::NotFound);
    }

    #[test]
    fn paths_round_trip() {
        let routes = [
            Route::Login,
            Route::Dashboard,
            Route::Tasks,
            Route::AddTask,
            Route::ViewTask(TaskId::new("abc")),
            Route::EditTask(TaskId::new("abc")),
            Route::Profile,
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn auth_requirements() {
        assert!(!Route::Login.requires_auth());
        assert!(!Route::NotFound.requires_auth());
        assert!(Route::Tasks.requires_auth());
        assert!(Route::EditTask(TaskId::new("1")).requires_auth());
    }
}
