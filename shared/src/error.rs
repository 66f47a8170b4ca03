//! Error types shared by the dashboard crates.

use crate::model::ValidationErrors;

/// Result alias for dashboard operations.
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Failures of a single task API call. Never retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a response
    #[error("network error: {0}")]
    Transport(String),

    /// The server answered with a non-success status
    #[error("server responded with status {status}")]
    Status {
        /// HTTP status code
        status: u16,
    },

    /// The requested task does not exist
    #[error("task not found")]
    NotFound,

    /// The response body was not the expected JSON
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// The request body could not be serialized
    #[error("could not encode request: {0}")]
    Encode(String),
}

/// PDF report rendering failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReportError {
    #[error("failed to render report: {0}")]
    Render(String),
}

/// Invalid client configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Umbrella error surfaced to the user as a notification.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DashboardError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl DashboardError {
    /// Short text for the transient notification.
    pub fn user_message(&self) -> String {
        match self {
            DashboardError::Client(ClientError::NotFound) => "Task not found".to_string(),
            DashboardError::Client(ClientError::Transport(_)) => {
                "Could not reach the server".to_string()
            }
            DashboardError::Client(ClientError::Status { status: 401 | 403 }) => {
                "You are not allowed to do that".to_string()
            }
            DashboardError::Client(_) => "The server could not complete the request".to_string(),
            DashboardError::Validation(_) => "Please fix the highlighted fields".to_string(),
            DashboardError::Report(_) => "Failed to generate PDF report".to_string(),
            DashboardError::Config(err) => err.to_string(),
        }
    }

    /// Notification text for a failed operation. Falls back to `context`
    /// (e.g. "Failed to delete task") when the failure kind adds nothing.
    pub fn describe(&self, context: &str) -> String {
        match self {
            DashboardError::Client(ClientError::Status { status: 401 | 403 }) => self.user_message(),
            DashboardError::Client(
                ClientError::Status { .. } | ClientError::Decode(_) | ClientError::Encode(_),
            ) => context.to_string(),
            _ => self.user_message(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_and_messages() {
        let err: DashboardError = ClientError::NotFound.into();
        assert_eq!(err.user_message(), "Task not found");
        assert_eq!(err.to_string(), "task not found");

        let err: DashboardError = ClientError::Status { status: 403 }.into();
        assert_eq!(err.user_message(), "You are not allowed to do that");

        let err: DashboardError = ClientError::Status { status: 500 }.into();
        assert_eq!(err.to_string(), "server responded with status 500");
        assert_eq!(err.user_message(), "The server could not complete the request");

        let err: DashboardError = ReportError::Render("font".into()).into();
        assert_eq!(err.user_message(), "Failed to generate PDF report");
    }

    #[test]
    fn describe_prefers_operation_context() {
        let context = "Failed to delete task";
        let err: DashboardError = ClientError::Status { status: 500 }.into();
        assert_eq!(err.describe(context), context);
        let err: DashboardError = ClientError::Decode("eof".into()).into();
        assert_eq!(err.describe(context), context);

        let err: DashboardError = ClientError::NotFound.into();
        assert_eq!(err.describe("Failed to load task"), "Task not found");
        let err: DashboardError = ClientError::Transport("offline".into()).into();
        assert_eq!(err.describe(context), "Could not reach the server");
        let err: DashboardError = ClientError::Status { status: 401 }.into();
        assert_eq!(err.describe(context), "You are not allowed to do that");
    }
}
