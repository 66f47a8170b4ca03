//! Browser transport for the task API.

use std::future::Future;

use shared::api::{self, Method};
use shared::{
    ClientConfig, ClientError, Endpoints, ProbeOutcome, Task, TaskFormData, TaskId, TaskQuery,
    TaskStats,
};
use tracing::{debug, warn};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, AbortSignal, Request, RequestCredentials, RequestInit, Response};

/// Cookie-authenticated client for `/api/tasks`. Calls are never retried.
#[derive(Debug, Clone)]
pub struct TaskClient {
    endpoints: Endpoints,
}

impl TaskClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            endpoints: Endpoints::new(config),
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub async fn list(&self, query: &TaskQuery) -> Result<Vec<Task>, ClientError> {
        self.fetch_json(Method::Get, &self.endpoints.tasks(query), None).await
    }

    pub async fn get(&self, id: &TaskId) -> Result<Task, ClientError> {
        self.fetch_json(Method::Get, &self.endpoints.task(id), None).await
    }

    pub async fn create(&self, data: &TaskFormData) -> Result<Task, ClientError> {
        let body = api::encode(data)?;
        self.fetch_json(Method::Post, &self.endpoints.tasks(&TaskQuery::all()), Some(body))
            .await
    }

    pub async fn update(&self, id: &TaskId, data: &TaskFormData) -> Result<Task, ClientError> {
        let body = api::encode(data)?;
        self.fetch_json(Method::Put, &self.endpoints.task(id), Some(body))
            .await
    }

    pub async fn delete(&self, id: &TaskId) -> Result<(), ClientError> {
        let (status, _) = send(Method::Delete, &self.endpoints.task(id), None, None).await?;
        api::classify_status(status)
    }

    pub async fn stats(&self) -> Result<TaskStats, ClientError> {
        self.fetch_json(Method::Get, &self.endpoints.stats(), None).await
    }

    pub async fn logout(&self) -> Result<(), ClientError> {
        let (status, _) = send(Method::Get, &self.endpoints.logout(), None, None).await?;
        api::classify_status(status)
    }

    async fn check_session(&self, signal: &AbortSignal) -> ProbeOutcome {
        match send(Method::Get, &self.endpoints.session_check(), None, Some(signal)).await {
            Ok((status, body)) => ProbeOutcome::from_response(status, &body),
            Err(_) if signal.aborted() => ProbeOutcome::Aborted,
            Err(err) => ProbeOutcome::Failed(err.to_string()),
        }
    }

    async fn fetch_json<T>(
        &self,
        method: Method,
        url: &str,
        body: Option<String>,
    ) -> Result<T, ClientError>
    where
        T: serde::de::DeserializeOwned,
    {
        let (status, text) = send(method, url, body, None).await?;
        api::classify_status(status)?;
        api::decode(&text)
    }
}

/// The in-flight session check. Dropping it aborts the request.
#[derive(Debug)]
pub struct SessionProbe {
    controller: AbortController,
}

impl SessionProbe {
    /// Starts checking the session cookie. The returned future resolves to
    /// [`ProbeOutcome::Aborted`] if the probe is dropped first.
    pub fn start(
        client: &TaskClient,
    ) -> Result<(Self, impl Future<Output = ProbeOutcome> + 'static), ClientError> {
        let controller = AbortController::new().map_err(js_error)?;
        let signal = controller.signal();
        let client = client.clone();
        let check = async move { client.check_session(&signal).await };
        Ok((Self { controller }, check))
    }
}

impl Drop for SessionProbe {
    fn drop(&mut self) {
        self.controller.abort();
    }
}

/// Issues one request and returns the status with the raw body.
async fn send(
    method: Method,
    url: &str,
    body: Option<String>,
    signal: Option<&AbortSignal>,
) -> Result<(u16, String), ClientError> {
    let window =
        web_sys::window().ok_or_else(|| ClientError::Transport("no window".to_string()))?;

    let opts = RequestInit::new();
    opts.set_method(method.as_str());
    opts.set_credentials(RequestCredentials::Include);
    if let Some(body) = &body {
        opts.set_body(&JsValue::from_str(body));
    }
    if let Some(signal) = signal {
        opts.set_signal(Some(signal));
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_error)?;
    }

    debug!(method = method.as_str(), url, "request");
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?
        .into();
    let status = response.status();

    let text = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?
        .as_string()
        .unwrap_or_default();

    if !(200..300).contains(&status) {
        warn!(method = method.as_str(), url, status, "request failed");
    }
    Ok((status, text))
}

fn js_error(err: JsValue) -> ClientError {
    ClientError::Transport(
        err.as_string()
            .unwrap_or_else(|| format!("{err:?}")),
    )
}
