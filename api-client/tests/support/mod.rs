//! Test support: a local stand-in for the SQL server.
//!
//! Binds to an ephemeral port, records the last request it saw, and answers
//! every extension endpoint with a fixed status and body.

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{header, Method, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::Router;
use serde_json::Value;
use tokio::net::TcpListener;

/// Request data recorded by the mock server.
#[derive(Clone, Debug, Default)]
pub struct Captured {
    pub method: Option<String>,
    pub path: Option<String>,
    pub body: Option<Value>,
}

#[derive(Clone)]
struct MockState {
    captured: Arc<Mutex<Captured>>,
    status: StatusCode,
    body: String,
}

/// Local mock of the SQL server.
pub struct MockServer {
    pub base_url: String,
    captured: Arc<Mutex<Captured>>,
}

impl MockServer {
    /// Starts a server answering every endpoint with the given status and body.
    pub async fn start(status: StatusCode, body: impl Into<String>) -> Self {
        let captured = Arc::new(Mutex::new(Captured::default()));
        let state = MockState {
            captured: captured.clone(),
            status,
            body: body.into(),
        };

        let app = Router::new()
            .route("/jupyterlab-sql/database", post(respond))
            .route("/jupyterlab-sql/table", post(respond))
            .route("/jupyterlab-sql/query", post(respond))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            captured,
        }
    }

    /// Returns a copy of the last captured request.
    pub fn captured(&self) -> Captured {
        self.captured.lock().unwrap().clone()
    }
}

async fn respond(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    body: String,
) -> impl IntoResponse {
    {
        let mut captured = state.captured.lock().unwrap();
        captured.method = Some(method.to_string());
        captured.path = Some(uri.path().to_string());
        captured.body = serde_json::from_str(&body).ok();
    }

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.clone(),
    )
}
