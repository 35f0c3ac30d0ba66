use crate::error::{ApiError, ApiResult};
use crate::types::{NewTask, Task, TaskId, TaskUpdate, User};
use crate::TaskApi;
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Builder for [`TaskApiClient`]
pub struct TaskApiClientBuilder {
    base_url: String,
    bearer_token: Option<String>,
}

impl TaskApiClientBuilder {
    /// Create a new builder for the API rooted at `base_url`, e.g. `http://localhost:8080/api`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            bearer_token: None,
        }
    }

    /// Token sent as `Authorization: Bearer <token>` on every request
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    pub fn build(self) -> ApiResult<TaskApiClient> {
        let base_url = Url::parse(&self.base_url)
            .map_err(|e| ApiError::InvalidBaseUrl(format!("{}: {}", self.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(self.base_url));
        }

        let client = Client::builder().build()?;

        Ok(TaskApiClient {
            client,
            base_url,
            bearer_token: self.bearer_token,
        })
    }
}

/// HTTP client for the task REST API.
///
/// Any non-2xx response is reported as [`ApiError::Status`]; there are no
/// retries and no timeouts.
#[derive(Clone)]
pub struct TaskApiClient {
    client: Client,
    base_url: Url,
    bearer_token: Option<String>,
}

impl TaskApiClient {
    pub fn builder(base_url: impl Into<String>) -> TaskApiClientBuilder {
        TaskApiClientBuilder::new(base_url)
    }

    pub fn set_bearer_token(&mut self, token: Option<impl Into<String>>) {
        self.bearer_token = token.map(|t| t.into());
    }

    pub fn bearer_token(&self) -> Option<&str> {
        self.bearer_token.as_deref()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn request(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        let url = self.endpoint(segments);
        debug!(%method, %url, "Sending API request");

        let request = self.client.request(method, url);
        match &self.bearer_token {
            Some(token) => request.header(AUTHORIZATION, format!("Bearer {}", token)),
            None => request,
        }
    }

    async fn execute(&self, request: RequestBuilder) -> ApiResult<String> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "API request was not successful");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }

    async fn execute_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let body = self.execute(request).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait(?Send)]
impl TaskApi for TaskApiClient {
    async fn current_user(&self) -> ApiResult<User> {
        self.execute_json(self.request(Method::GET, &["user"])).await
    }

    async fn list_tasks(&self) -> ApiResult<Vec<Task>> {
        // A user without tasks may get `null` rather than `[]`
        let tasks: Option<Vec<Task>> = self
            .execute_json(self.request(Method::GET, &["tasks"]))
            .await?;
        Ok(tasks.unwrap_or_default())
    }

    async fn create_task(&self, task: &NewTask) -> ApiResult<Task> {
        self.execute_json(self.request(Method::POST, &["tasks"]).json(task))
            .await
    }

    async fn update_task(&self, id: &TaskId, update: &TaskUpdate) -> ApiResult<Task> {
        self.execute_json(
            self.request(Method::PUT, &["tasks", id.as_str()])
                .json(update),
        )
        .await
    }

    async fn delete_task(&self, id: &TaskId) -> ApiResult<()> {
        self.execute(self.request(Method::DELETE, &["tasks", id.as_str()]))
            .await
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joining() {
        let client = TaskApiClient::builder("http://localhost:8080/api/")
            .build()
            .unwrap();
        assert_eq!(
            client.endpoint(&["tasks", "abc"]).as_str(),
            "http://localhost:8080/api/tasks/abc"
        );

        let client = TaskApiClient::builder("http://localhost:8080/api")
            .build()
            .unwrap();
        assert_eq!(
            client.endpoint(&["user"]).as_str(),
            "http://localhost:8080/api/user"
        );
    }

    #[test]
    fn test_ids_are_path_escaped() {
        let client = TaskApiClient::builder("http://localhost:8080/api")
            .build()
            .unwrap();
        assert_eq!(
            client.endpoint(&["tasks", "a/b c"]).as_str(),
            "http://localhost:8080/api/tasks/a%2Fb%20c"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            TaskApiClient::builder("not a url").build(),
            Err(ApiError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            TaskApiClient::builder("mailto:someone@example.com").build(),
            Err(ApiError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_bearer_token_management() {
        let mut client = TaskApiClient::builder("http://localhost/api")
            .with_bearer_token("secret")
            .build()
            .unwrap();
        assert_eq!(client.bearer_token(), Some("secret"));

        client.set_bearer_token(None::<String>);
        assert_eq!(client.bearer_token(), None);
    }
}
