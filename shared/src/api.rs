//! Wire contract of the task API: endpoint URLs, query parameters, status
//! classification and JSON bodies. The transport itself lives in the
//! frontend.

use serde::de::DeserializeOwned;
use serde::Serialize;
use url::{form_urlencoded, Url};

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::filter::{SortKey, TaskCriteria};
use crate::model::{TaskId, TaskStatus};

pub const TASKS_PATH: &str = "/api/tasks";
pub const SESSION_CHECK_PATH: &str = "/auth/login/success";
pub const LOGOUT_PATH: &str = "/auth/logout";
pub const LOGIN_PATH: &str = "/auth/google";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Server-side filter parameters of the list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskQuery {
    pub search: Option<String>,
    pub status: Option<TaskStatus>,
    pub sort_by: SortKey,
}

impl TaskQuery {
    /// Unfiltered listing.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn from_criteria(criteria: &TaskCriteria) -> Self {
        Self {
            search: Some(criteria.search.clone()).filter(|s| !s.is_empty()),
            status: criteria.status,
            sort_by: criteria.sort,
        }
    }

    /// `search=..&status=..&sortBy=..`, omitting unset parameters.
    pub fn to_query_string(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            query.append_pair("search", search);
        }
        if let Some(status) = self.status {
            query.append_pair("status", status.label());
        }
        if self.sort_by != SortKey::None {
            query.append_pair("sortBy", self.sort_by.as_param());
        }
        query.finish()
    }
}

/// Absolute URLs of every endpoint the dashboard talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            base: config.api_base.trim_end_matches('/').to_string(),
        }
    }

    pub fn tasks(&self, query: &TaskQuery) -> String {
        let query = query.to_query_string();
        if query.is_empty() {
            format!("{}{TASKS_PATH}", self.base)
        } else {
            format!("{}{TASKS_PATH}?{query}", self.base)
        }
    }

    /// Item URL; the id is percent-encoded as one path segment.
    pub fn task(&self, id: &TaskId) -> String {
        let collection = format!("{}{TASKS_PATH}", self.base);
        // The base was validated by `ClientConfig`, so parsing only fails for
        // hand-built configs.
        let Ok(mut url) = Url::parse(&collection) else {
            return format!("{collection}/{id}");
        };
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(id.as_str());
        }
        url.into()
    }

    pub fn stats(&self) -> String {
        format!("{}{TASKS_PATH}/stats", self.base)
    }

    pub fn session_check(&self) -> String {
        format!("{}{SESSION_CHECK_PATH}", self.base)
    }

    pub fn logout(&self) -> String {
        format!("{}{LOGOUT_PATH}", self.base)
    }

    /// Identity-provider login; navigated to, not fetched.
    pub fn login(&self) -> String {
        format!("{}{LOGIN_PATH}", self.base)
    }
}

/// Maps an HTTP status to the client error taxonomy.
pub fn classify_status(status: u16) -> Result<(), ClientError> {
    match status {
        200..=299 => Ok(()),
        404 => Err(ClientError::NotFound),
        status => Err(ClientError::Status { status }),
    }
}

pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ClientError> {
    serde_json::from_str(body).map_err(|e| ClientError::Decode(e.to_string()))
}

pub fn encode<T: Serialize>(value: &T) -> Result<String, ClientError> {
    serde_json::to_string(value).map_err(|e| ClientError::Encode(e.to_string()))
}
