//! Authentication state of the current page load.
//!
//! The session starts out `Loading`, is settled exactly once by the
//! session-check probe, and can only move to `Anonymous` afterwards through an
//! explicit logout. There is no refresh: a lost cookie shows up as failed API
//! calls, not as a state change here.

use tracing::{debug, info, warn};

use crate::api;
use crate::model::{SessionPayload, User};
use crate::routes::Route;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    /// The session check has not answered yet. Not the same as anonymous.
    #[default]
    Loading,
    Authenticated(User),
    Anonymous,
}

/// Result of the session-check request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    User(User),
    /// The server answered but there is no logged-in user.
    NoSession,
    /// Network or decoding failure.
    Failed(String),
    /// The probe was torn down before it answered.
    Aborted,
}

impl ProbeOutcome {
    /// Interprets the status and body of `GET /auth/login/success`.
    pub fn from_response(status: u16, body: &str) -> Self {
        if api::classify_status(status).is_err() {
            return ProbeOutcome::NoSession;
        }
        match api::decode::<SessionPayload>(body) {
            Ok(payload) => ProbeOutcome::User(payload.user),
            Err(err) => ProbeOutcome::Failed(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    state: SessionState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn user(&self) -> Option<&User> {
        match &self.state {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state == SessionState::Loading
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated(_))
    }

    /// Leaves `Loading` once. Returns whether the state changed.
    pub fn resolve(&mut self, user: Option<User>) -> bool {
        if !self.is_loading() {
            debug!("session already resolved; ignoring late answer");
            return false;
        }
        self.state = match user {
            Some(user) => {
                info!(user = %user.email, "session authenticated");
                SessionState::Authenticated(user)
            }
            None => {
                info!("no active session");
                SessionState::Anonymous
            }
        };
        true
    }

    /// Applies a probe outcome. An aborted probe leaves the state untouched.
    pub fn settle(&mut self, outcome: ProbeOutcome) -> bool {
        match outcome {
            ProbeOutcome::User(user) => self.resolve(Some(user)),
            ProbeOutcome::NoSession => self.resolve(None),
            ProbeOutcome::Failed(reason) => {
                warn!(%reason, "session check failed");
                self.resolve(None)
            }
            ProbeOutcome::Aborted => false,
        }
    }

    /// `Authenticated -> Anonymous`. Returns whether the state changed.
    pub fn logout(&mut self) -> bool {
        if self.is_authenticated() {
            info!("session closed");
            self.state = SessionState::Anonymous;
            true
        } else {
            false
        }
    }
}

/// What the router should do with a navigation given the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Render,
    /// Show a spinner until the session check answers.
    Wait,
    RedirectToLogin,
    RedirectToDashboard,
}

pub fn guard(route: &Route, session: &Session) -> Access {
    match (route, session.state()) {
        (Route::Login, SessionState::Authenticated(_)) => Access::RedirectToDashboard,
        (route, _) if !route.requires_auth() => Access::Render,
        (_, SessionState::Loading) => Access::Wait,
        (_, SessionState::Anonymous) => Access::RedirectToLogin,
        (_, SessionState::Authenticated(_)) => Access::Render,
    }
}
