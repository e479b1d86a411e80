pub mod auth;
pub mod workspaces;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use serde_json::{Value, json};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use taskboard_client::ClientState;
use taskboard_client::config::Config;

pub const TEST_PASSWORD: &str = "password123";
pub const TEST_TOKEN: &str = "test-access-token";

/// In-memory stand-in for the taskboard server.
#[derive(Clone, Default)]
pub struct MockState {
    pub workspaces: Arc<Mutex<Vec<Value>>>,
    pub requests: Arc<AtomicUsize>,
    next_id: Arc<AtomicUsize>,
}

impl MockState {
    pub fn seed(&self, count: usize) {
        for i in 0..count {
            self.insert(json!({"name": format!("Workspace {i}"), "description": ""}));
        }
    }

    fn insert(&self, body: Value) -> Value {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let workspace = json!({
            "_id": format!("w{id}"),
            "name": body["name"],
            "description": body["description"],
            "memberCount": 1,
            "projectCount": 0,
        });
        self.workspaces.lock().unwrap().push(workspace.clone());
        workspace
    }

    pub fn count(&self) -> usize {
        self.workspaces.lock().unwrap().len()
    }

    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({"success": false, "message": message}))).into_response()
}

async fn list_workspaces(State(state): State<MockState>) -> Json<Value> {
    state.requests.fetch_add(1, Ordering::SeqCst);
    Json(Value::Array(state.workspaces.lock().unwrap().clone()))
}

async fn create_workspace(State(state): State<MockState>, Json(body): Json<Value>) -> Response {
    state.requests.fetch_add(1, Ordering::SeqCst);
    let taken = state
        .workspaces
        .lock()
        .unwrap()
        .iter()
        .any(|w| w["name"] == body["name"]);
    if taken {
        return error(StatusCode::CONFLICT, "Workspace name already exists");
    }
    (StatusCode::CREATED, Json(state.insert(body))).into_response()
}

async fn update_workspace(
    State(state): State<MockState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    state.requests.fetch_add(1, Ordering::SeqCst);
    let mut workspaces = state.workspaces.lock().unwrap();
    match workspaces.iter_mut().find(|w| w["_id"] == id.as_str()) {
        Some(workspace) => {
            workspace["name"] = body["name"].clone();
            workspace["description"] = body["description"].clone();
            Json(workspace.clone()).into_response()
        }
        None => error(StatusCode::NOT_FOUND, "Workspace not found"),
    }
}

async fn delete_workspace(State(state): State<MockState>, Path(id): Path<String>) -> Response {
    state.requests.fetch_add(1, Ordering::SeqCst);
    let mut workspaces = state.workspaces.lock().unwrap();
    let before = workspaces.len();
    workspaces.retain(|w| w["_id"] != id.as_str());
    if workspaces.len() == before {
        return error(StatusCode::NOT_FOUND, "Workspace not found");
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn login(Json(body): Json<Value>) -> Response {
    if body["password"] != TEST_PASSWORD {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "Invalid credentials"})),
        )
            .into_response();
    }
    Json(json!({
        "accessToken": TEST_TOKEN,
        "refreshToken": "test-refresh-token",
        "user": {"_id": "u1", "email": body["email"]},
    }))
    .into_response()
}

async fn change_password(headers: HeaderMap, Json(body): Json<Value>) -> Response {
    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {}", TEST_TOKEN));
    if !authorized {
        return error(StatusCode::UNAUTHORIZED, "Authentication required");
    }
    if body["currentPassword"] != TEST_PASSWORD {
        return error(StatusCode::BAD_REQUEST, "Current password is incorrect");
    }
    Json(json!({"success": true, "message": "Password changed"})).into_response()
}

fn router(state: MockState) -> Router {
    Router::new()
        .route("/api/workspaces", get(list_workspaces).post(create_workspace))
        .route(
            "/api/workspaces/:id",
            put(update_workspace).delete(delete_workspace),
        )
        .route("/api/auth/login", post(login))
        .route("/api/auth/change-password", post(change_password))
        .with_state(state)
}

/// Starts the mock server on an ephemeral port and returns a client state
/// pointed at it.
pub async fn spawn_server() -> (ClientState, MockState) {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let state = MockState::default();
    let app = router(state.clone());

    tokio::spawn(async move {
        axum::Server::from_tcp(listener)
            .unwrap()
            .serve(app.into_make_service())
            .await
            .unwrap();
    });

    let config = Config {
        api_base_url: format!("http://{}/api", addr),
        ..Config::default()
    };
    (ClientState::new(config).unwrap(), state)
}
