//! HTTP access to the analytics backend.
//!
//! The dashboard reads three resources and nothing else. They are fetched
//! together and joined all-or-nothing: one failed request fails the load and
//! no partial data is handed back.

use serde::de::DeserializeOwned;
use shared_types::{
    DashboardConfig, DashboardData, LoadError, OverviewStats, TaskRecord, UserRecord,
};

pub const OVERVIEW_PATH: &str = "/analytics/overview";
pub const USERS_PATH: &str = "/users";
pub const TASKS_PATH: &str = "/tasks";

/// Read-only client bound to one backend base URL.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    config: DashboardConfig,
}

impl BackendClient {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Absolute URL for an endpoint path.
    fn url(&self, path: &str) -> Result<String, LoadError> {
        let target = self.config.endpoint(path);
        if self.config.is_same_origin() {
            resolve_same_origin(&target, path)
        } else {
            Ok(target)
        }
    }

    /// `GET {base}{path}` and decode the JSON body.
    ///
    /// Non-2xx responses are rejected before decoding.
    #[tracing::instrument(skip(self))]
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, LoadError> {
        let url = self.url(path)?;

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| LoadError::transport(path, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::status(path, status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| LoadError::decode(path, e.to_string()))
    }
}

/// reqwest only takes absolute URLs, so same-origin paths are prefixed with
/// the origin of the page that loaded the bundle.
#[cfg(target_arch = "wasm32")]
fn resolve_same_origin(target: &str, path: &str) -> Result<String, LoadError> {
    let window =
        web_sys::window().ok_or_else(|| LoadError::invalid_url(path, "no browser window"))?;
    let origin = window
        .location()
        .origin()
        .map_err(|_| LoadError::invalid_url(path, "page origin is unavailable"))?;
    Ok(format!("{}{}", origin, target))
}

/// Outside a browser there is no page origin to fall back to.
#[cfg(not(target_arch = "wasm32"))]
fn resolve_same_origin(_target: &str, path: &str) -> Result<String, LoadError> {
    Err(LoadError::invalid_url(
        path,
        "no backend URL configured and no page origin to resolve against",
    ))
}

/// Fetch overview, users and tasks concurrently.
///
/// The join short-circuits on the first error. The caller never learns
/// which of the other requests would have succeeded.
#[tracing::instrument(skip(client), fields(backend = %client.config().backend_url))]
pub async fn load_dashboard(client: &BackendClient) -> Result<DashboardData, LoadError> {
    let joined = futures::try_join!(
        client.get_json::<OverviewStats>(OVERVIEW_PATH),
        client.get_json::<Vec<UserRecord>>(USERS_PATH),
        client.get_json::<Vec<TaskRecord>>(TASKS_PATH),
    );

    let (overview, users, tasks) = match joined {
        Ok(parts) => parts,
        Err(err) => {
            tracing::warn!(
                kind = %err.kind,
                endpoint = %err.endpoint,
                error = %err.message,
                "Dashboard load failed"
            );
            return Err(err);
        }
    };

    tracing::info!(
        users = users.len(),
        tasks = tasks.len(),
        "Dashboard data loaded"
    );

    Ok(DashboardData {
        overview,
        users,
        tasks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;
    use axum::{http::StatusCode, Json, Router};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use shared_types::{LoadErrorKind, LoadState, RecordId, TaskStatus, UserRole};

    /// Serve `router` on an ephemeral local port and return its base URL.
    async fn spawn_backend(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    async fn overview() -> Json<serde_json::Value> {
        Json(json!({"users": 12, "tasks": 40, "completed": 25, "in_progress": 10, "pending": 5}))
    }

    async fn users() -> Json<serde_json::Value> {
        Json(json!([{"id": 1, "name": "A", "email": "a@x.com", "role": "MANAGER"}]))
    }

    async fn tasks() -> Json<serde_json::Value> {
        Json(json!([{"id": 1, "title": "T1", "status": "COMPLETED", "progress": 100, "due_date": null}]))
    }

    /// Client that never routes loopback traffic through an environment proxy.
    fn client_for(base: &str) -> BackendClient {
        BackendClient {
            http: reqwest::Client::builder().no_proxy().build().unwrap(),
            config: DashboardConfig::new(base),
        }
    }

    #[tokio::test]
    async fn loads_all_three_resources() {
        let base = spawn_backend(
            Router::new()
                .route(OVERVIEW_PATH, get(overview))
                .route(USERS_PATH, get(users))
                .route(TASKS_PATH, get(tasks)),
        )
        .await;

        let data = load_dashboard(&client_for(&base)).await.unwrap();

        assert_eq!(data.overview.users, 12);
        assert_eq!(data.overview.pending, 5);
        assert_eq!(data.users.len(), 1);
        assert_eq!(data.users[0].role, UserRole::Manager);
        assert_eq!(data.tasks[0].id, RecordId::Number(1));
        assert_eq!(data.tasks[0].status, TaskStatus::Completed);
        assert_eq!(data.tasks[0].due_date, None);
    }

    #[tokio::test]
    async fn trailing_slash_in_base_url_is_tolerated() {
        let base = spawn_backend(Router::new().route(USERS_PATH, get(users))).await;
        let client = client_for(&format!("{}/", base));

        let people: Vec<UserRecord> = client.get_json(USERS_PATH).await.unwrap();
        assert_eq!(people[0].email, "a@x.com");
    }

    /// Plain TCP backend that answers overview and users with JSON and
    /// hangs up on `/tasks` without sending a response.
    async fn spawn_backend_dropping_tasks() -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            loop {
                let (mut socket, _) = listener.accept().await.unwrap();
                tokio::spawn(async move {
                    let mut request = Vec::new();
                    let mut buf = [0u8; 1024];
                    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                        match socket.read(&mut buf).await {
                            Ok(0) | Err(_) => return,
                            Ok(n) => request.extend_from_slice(&buf[..n]),
                        }
                    }
                    let request = String::from_utf8_lossy(&request);
                    let path = request.split_whitespace().nth(1).unwrap_or("");
                    let body = match path {
                        OVERVIEW_PATH => overview().await.0,
                        USERS_PATH => users().await.0,
                        _ => return,
                    }
                    .to_string();
                    let response = format!(
                        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        body.len(),
                        body
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn null_role_and_status_do_not_fail_the_load() {
        let base = spawn_backend(
            Router::new()
                .route(OVERVIEW_PATH, get(overview))
                .route(
                    USERS_PATH,
                    get(|| async {
                        Json(json!([
                            {"id": 1, "name": "A", "email": "a@x.com", "role": null},
                            {"id": 2, "name": "B", "email": "b@x.com"}
                        ]))
                    }),
                )
                .route(
                    TASKS_PATH,
                    get(|| async {
                        Json(json!([{"id": 1, "title": "T1", "status": null, "progress": 30}]))
                    }),
                ),
        )
        .await;

        let data = load_dashboard(&client_for(&base)).await.unwrap();

        assert_eq!(data.users.len(), 2);
        assert_eq!(data.users[0].role, UserRole::Other(String::new()));
        assert_eq!(data.users[1].role, UserRole::Other(String::new()));
        assert_eq!(data.tasks[0].status, TaskStatus::Other(String::new()));
        assert_eq!(data.tasks[0].progress, 30);
    }

    #[tokio::test]
    async fn dropped_tasks_connection_fails_the_whole_load() {
        let base = spawn_backend_dropping_tasks().await;

        let err = load_dashboard(&client_for(&base)).await.unwrap_err();
        assert_eq!(err.kind, LoadErrorKind::Transport);
        assert_eq!(err.endpoint, TASKS_PATH);

        let state = LoadState::from_result(Err(err));
        assert!(state.overview().is_none());
        assert!(state.users().is_empty());
        assert!(state.tasks().is_empty());
        assert_eq!(
            state.error(),
            Some("Unable to connect to backend. Set the backend URL.")
        );
    }

    #[tokio::test]
    async fn server_error_on_tasks_fails_the_whole_load() {
        let base = spawn_backend(
            Router::new()
                .route(OVERVIEW_PATH, get(overview))
                .route(USERS_PATH, get(users))
                .route(
                    TASKS_PATH,
                    get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
                ),
        )
        .await;

        let err = load_dashboard(&client_for(&base)).await.unwrap_err();
        assert_eq!(err.kind, LoadErrorKind::Status);
        assert_eq!(err.endpoint, TASKS_PATH);

        let state = LoadState::from_result(Err(err));
        assert!(state.overview().is_none());
        assert!(state.users().is_empty());
        assert!(state.tasks().is_empty());
        assert!(state.error().is_some());
    }

    #[tokio::test]
    async fn missing_route_is_a_status_error() {
        let base = spawn_backend(
            Router::new()
                .route(OVERVIEW_PATH, get(overview))
                .route(TASKS_PATH, get(tasks)),
        )
        .await;

        let err = load_dashboard(&client_for(&base)).await.unwrap_err();
        assert_eq!(err.kind, LoadErrorKind::Status);
        assert_eq!(err.endpoint, USERS_PATH);
    }

    #[tokio::test]
    async fn non_json_body_is_a_decode_error() {
        let base = spawn_backend(
            Router::new().route(OVERVIEW_PATH, get(|| async { "<html>proxy</html>" })),
        )
        .await;

        let err = client_for(&base)
            .get_json::<OverviewStats>(OVERVIEW_PATH)
            .await
            .unwrap_err();
        assert_eq!(err.kind, LoadErrorKind::Decode);
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_transport_error() {
        // Bind then drop to get a port nothing listens on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = load_dashboard(&client_for(&format!("http://{}", addr)))
            .await
            .unwrap_err();
        assert_eq!(err.kind, LoadErrorKind::Transport);
    }

    #[tokio::test]
    async fn same_origin_without_a_page_is_rejected() {
        let err = load_dashboard(&client_for("")).await.unwrap_err();
        assert_eq!(err.kind, LoadErrorKind::InvalidUrl);
    }
}
