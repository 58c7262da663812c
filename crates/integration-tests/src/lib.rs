//! Integration test harness for FastBite.
//!
//! Spawns an in-process stub of the FastBite API (axum on an ephemeral
//! port) and builds storefront sessions pointed at it, each with its own
//! temporary store directory. Tests drive the public session API and
//! assert on toasts, persisted state, and how many requests actually
//! reached each endpoint.

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::unwrap_used)] // test harness; failures should panic loudly

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::routing::post;
use axum::{Json, Router};
use fastbite_core::CurrencyCode;
use fastbite_storefront::config::StorefrontConfig;
use fastbite_storefront::notify::RecordingNotifier;
use fastbite_storefront::session::StorefrontSession;
use serde_json::Value;
use url::Url;

/// What the stub order endpoint should answer.
#[derive(Debug, Clone)]
pub struct OrderResponse {
    pub status: u16,
    pub body: Value,
    stall: bool,
}

impl OrderResponse {
    /// A plain 201 with an order id, like a healthy backend.
    #[must_use]
    pub fn created() -> Self {
        Self {
            status: 201,
            body: serde_json::json!({ "id": "order-1" }),
            stall: false,
        }
    }

    /// A rejection with an arbitrary status and body.
    #[must_use]
    pub fn rejected(status: u16, body: Value) -> Self {
        Self {
            status,
            body,
            stall: false,
        }
    }

    /// Record the request but never answer it, like a backend that hangs.
    #[must_use]
    pub fn stalled() -> Self {
        Self {
            stall: true,
            ..Self::created()
        }
    }
}

/// The order request as the stub saw it.
#[derive(Debug, Clone)]
pub struct SeenOrder {
    /// Value of the `Authorization` header, if any.
    pub authorization: Option<String>,
    /// Decoded JSON body.
    pub body: Value,
}

#[derive(Clone)]
struct StubState {
    order_response: OrderResponse,
    order_requests: Arc<AtomicUsize>,
    auth_requests: Arc<AtomicUsize>,
    message_requests: Arc<AtomicUsize>,
    last_order: Arc<Mutex<Option<SeenOrder>>>,
}

/// An in-process stub of the FastBite API.
pub struct StubApi {
    /// Base URL sessions should be configured with.
    pub base_url: Url,
    order_requests: Arc<AtomicUsize>,
    auth_requests: Arc<AtomicUsize>,
    message_requests: Arc<AtomicUsize>,
    last_order: Arc<Mutex<Option<SeenOrder>>>,
}

impl StubApi {
    /// Spawn the stub with a fixed answer for `POST /api/orders`. Auth
    /// endpoints always succeed with the token `"stub-token"`; the message
    /// endpoint always answers 201.
    pub async fn spawn(order_response: OrderResponse) -> Self {
        let state = StubState {
            order_response,
            order_requests: Arc::new(AtomicUsize::new(0)),
            auth_requests: Arc::new(AtomicUsize::new(0)),
            message_requests: Arc::new(AtomicUsize::new(0)),
            last_order: Arc::new(Mutex::new(None)),
        };

        let order_requests = Arc::clone(&state.order_requests);
        let auth_requests = Arc::clone(&state.auth_requests);
        let message_requests = Arc::clone(&state.message_requests);
        let last_order = Arc::clone(&state.last_order);

        let app = Router::new()
            .route("/api/orders", post(orders))
            .route("/api/auth/login", post(auth))
            .route("/api/auth/signup", post(auth))
            .route("/api/messages", post(messages))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: Url::parse(&format!("http://{addr}/")).unwrap(),
            order_requests,
            auth_requests,
            message_requests,
            last_order,
        }
    }

    /// The most recent order submission, if any reached the stub.
    #[must_use]
    pub fn last_order(&self) -> Option<SeenOrder> {
        self.last_order.lock().unwrap().clone()
    }

    /// How many order submissions reached the stub.
    #[must_use]
    pub fn order_requests(&self) -> usize {
        self.order_requests.load(Ordering::SeqCst)
    }

    /// How many sign-in/sign-up requests reached the stub.
    #[must_use]
    pub fn auth_requests(&self) -> usize {
        self.auth_requests.load(Ordering::SeqCst)
    }

    /// How many contact messages reached the stub.
    #[must_use]
    pub fn message_requests(&self) -> usize {
        self.message_requests.load(Ordering::SeqCst)
    }
}

async fn orders(
    State(state): State<StubState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.order_requests.fetch_add(1, Ordering::SeqCst);
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    *state.last_order.lock().unwrap() = Some(SeenOrder {
        authorization,
        body,
    });
    if state.order_response.stall {
        std::future::pending::<()>().await;
    }
    let status = StatusCode::from_u16(state.order_response.status)
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(state.order_response.body.clone()))
}

async fn auth(State(state): State<StubState>) -> (StatusCode, Json<Value>) {
    state.auth_requests.fetch_add(1, Ordering::SeqCst);
    (
        StatusCode::OK,
        Json(serde_json::json!({ "token": "stub-token" })),
    )
}

async fn messages(State(state): State<StubState>) -> (StatusCode, Json<Value>) {
    state.message_requests.fetch_add(1, Ordering::SeqCst);
    (StatusCode::CREATED, Json(serde_json::json!({ "ok": true })))
}

/// A storefront session over a fresh temporary store, pointed at `base_url`.
///
/// Returns the tempdir guard alongside so the store outlives the test body.
#[must_use]
pub fn test_session(base_url: &Url) -> (StorefrontSession, RecordingNotifier, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let notifier = RecordingNotifier::new();
    let config = StorefrontConfig::new(
        base_url.clone(),
        dir.path().to_path_buf(),
        CurrencyCode::INR,
    );
    let session = StorefrontSession::new(config, Box::new(notifier.clone())).unwrap();
    (session, notifier, dir)
}
