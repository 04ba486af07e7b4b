use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::config::ClientConfig;
use crate::error::http::preview_body;
use crate::error::{ApiHttpError, ClientError};
use crate::model::{
    Agent, CompletePayload, HeartbeatPayload, NewTask, StatusUpdate, Task, TaskFilter,
    TaskResult, TaskStatus,
};

pub const AGENT_ID_HEADER: &str = "X-Agent-ID";

/// Client for the task coordination API.
///
/// One `reqwest::Client` is built per instance and reused for every call,
/// so connections are kept alive across requests within a process.
///
/// Record-returning calls yield `None` when the service answers 204 or with
/// an empty body; the request itself still succeeded.
#[derive(Clone, Debug)]
pub struct TaskClient {
    base_url: String,
    agent_id: Option<String>,
    http: reqwest::Client,
}

impl TaskClient {
    pub fn new(cfg: &ClientConfig) -> Result<Self, ClientError> {
        let base_url = cfg.api_url().ok_or_else(|| {
            ClientError::Config(
                "API URL not configured. Set TASK_API_URL environment variable.".to_string(),
            )
        })?;
        let agent_id = cfg.agent_id().map(str::to_string);

        let mut headers = HeaderMap::new();
        if let Some(id) = &agent_id {
            let value = HeaderValue::from_str(id).map_err(|e| {
                ClientError::Config(format!("AGENT_ID is not a valid header value: {e}"))
            })?;
            headers.insert(AGENT_ID_HEADER, value);
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!("tqc/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()
            .map_err(|e| ClientError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            agent_id,
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn agent_id(&self) -> Option<&str> {
        self.agent_id.as_deref()
    }

    /// Pick the explicit agent id if given, otherwise the configured one.
    pub fn resolve_agent_id<'a>(&'a self, explicit: Option<&'a str>) -> Result<&'a str, ClientError> {
        explicit
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .or(self.agent_id.as_deref())
            .ok_or_else(|| {
                ClientError::Validation(
                    "No agent ID specified. Use --agent or set AGENT_ID".to_string(),
                )
            })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send one request and return the request URL with the body, which is
    /// `None` for 204 or a blank body. Any non-2xx status is an error.
    async fn execute(
        &self,
        operation: &'static str,
        req: RequestBuilder,
    ) -> Result<(String, Option<String>), ApiHttpError> {
        let request = req.build().map_err(|source| ApiHttpError::Transport {
            url: source.url().map(|u| u.to_string()).unwrap_or_default(),
            source,
        })?;
        let method = request.method().to_string();
        let url = request.url().to_string();
        tracing::debug!(
            target: "tqc.api",
            stage = "task_api.request.in",
            operation = operation,
            method = %method,
            url = %url
        );

        let resp = self
            .http
            .execute(request)
            .await
            .map_err(|source| ApiHttpError::Transport {
                url: url.clone(),
                source,
            })?;
        let status = resp.status();
        let body = resp.text().await.map_err(|source| ApiHttpError::Transport {
            url: url.clone(),
            source,
        })?;
        tracing::debug!(
            target: "tqc.api",
            stage = "task_api.request.out",
            operation = operation,
            status = %status,
            bytes = body.len()
        );

        if !status.is_success() {
            return Err(ApiHttpError::Status {
                method,
                url,
                status: status.as_u16(),
                body: preview_body(&body),
            });
        }
        if status == StatusCode::NO_CONTENT || body.trim().is_empty() {
            return Ok((url, None));
        }
        Ok((url, Some(body)))
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        req: RequestBuilder,
    ) -> Result<Option<T>, ClientError> {
        let (url, Some(body)) = self.execute(operation, req).await? else {
            return Ok(None);
        };
        let value = serde_json::from_str(&body).map_err(|source| ApiHttpError::Decode {
            operation,
            url,
            body: preview_body(&body),
            source,
        })?;
        Ok(Some(value))
    }

    /// Create a task. The created record is required, since callers need its id.
    pub async fn add_task(&self, task: &NewTask) -> Result<Task, ClientError> {
        if task.title.trim().is_empty() {
            return Err(ClientError::Validation(
                "Task title must not be empty".to_string(),
            ));
        }
        let req = self.http.post(self.url("/tasks")).json(task);
        self.fetch("add_task", req)
            .await?
            .ok_or(ClientError::EmptyResponse {
                operation: "add_task",
            })
    }

    pub async fn list_tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>, ClientError> {
        let req = self.http.get(self.url("/tasks")).query(filter);
        let tasks: Option<Vec<Task>> = self.fetch("list_tasks", req).await?;
        Ok(tasks.unwrap_or_default())
    }

    pub async fn get_task(&self, task_id: u64) -> Result<Option<Task>, ClientError> {
        let req = self.http.get(self.url(&format!("/tasks/{task_id}")));
        self.fetch("get_task", req).await
    }

    pub async fn claim_task(&self, task_id: u64) -> Result<Option<Task>, ClientError> {
        let req = self.http.post(self.url(&format!("/tasks/{task_id}/claim")));
        self.fetch("claim_task", req).await
    }

    pub async fn update_status(
        &self,
        task_id: u64,
        status: TaskStatus,
    ) -> Result<Option<Task>, ClientError> {
        let req = self
            .http
            .patch(self.url(&format!("/tasks/{task_id}/status")))
            .json(&StatusUpdate { status });
        self.fetch("update_status", req).await
    }

    /// Mark a task done. An empty result is sent as `{}`.
    pub async fn complete_task(
        &self,
        task_id: u64,
        result: Option<TaskResult>,
    ) -> Result<Option<Task>, ClientError> {
        let payload = CompletePayload {
            result: result.filter(|r| !r.is_empty()),
        };
        let req = self
            .http
            .post(self.url(&format!("/tasks/{task_id}/complete")))
            .json(&payload);
        self.fetch("complete_task", req).await
    }

    pub async fn cancel_task(&self, task_id: u64) -> Result<(), ClientError> {
        let req = self.http.delete(self.url(&format!("/tasks/{task_id}")));
        self.execute("cancel_task", req).await?;
        Ok(())
    }

    /// Register a heartbeat for `agent_id`, or for the configured agent when
    /// none is given. Fails without sending anything if neither is set.
    pub async fn heartbeat(
        &self,
        agent_id: Option<&str>,
        capabilities: Option<Map<String, Value>>,
    ) -> Result<Option<Agent>, ClientError> {
        let agent_id = self.resolve_agent_id(agent_id)?;
        let payload = HeartbeatPayload {
            agent_id: agent_id.to_string(),
            capabilities,
        };
        let req = self.http.post(self.url("/agents/heartbeat")).json(&payload);
        self.fetch("heartbeat", req).await
    }

    pub async fn list_agents(&self) -> Result<Vec<Agent>, ClientError> {
        let req = self.http.get(self.url("/agents"));
        let agents: Option<Vec<Agent>> = self.fetch("list_agents", req).await?;
        Ok(agents.unwrap_or_default())
    }
}
