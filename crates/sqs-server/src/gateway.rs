//! HTTP gateway: maps verbs on `/` to queue operations.
//!
//! | Route          | Queue operation      | Success | Other outcomes          |
//! |----------------|----------------------|---------|-------------------------|
//! | `POST /`       | `enqueue`            | 201     | 422 undecodable body    |
//! | `GET /`        | `peek_and_lock`      | 200     | 204 nothing available   |
//! | `DELETE /`     | `acknowledge_head`   | 200     | 400 queue error         |
//! | `GET /healthz` | -                    | 200     | -                       |

use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use sqs_core::{MessageQueue, Payload};

pub const DECODE_FAILURE_MESSAGE: &str = "unable to decode message request body";

/// Shared state for all handlers.
#[derive(Clone)]
pub struct AppState {
    pub queue: Arc<dyn MessageQueue>,
}

impl AppState {
    pub fn new(queue: Arc<dyn MessageQueue>) -> Self {
        Self { queue }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(handle_read_message)
                .post(handle_queue_message)
                .delete(handle_remove_message),
        )
        .route("/healthz", get(handle_health))
        .with_state(state)
}

/// POST /: enqueue the request body as-is
async fn handle_queue_message(State(state): State<AppState>, body: Bytes) -> Response {
    let payload = match Payload::from_slice(&body) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::warn!(error = %e, "rejecting message request body");
            let err = serde_json::json!({ "message": DECODE_FAILURE_MESSAGE });
            return (StatusCode::UNPROCESSABLE_ENTITY, Json(err)).into_response();
        }
    };

    let message = state.queue.enqueue(payload).await;
    tracing::info!(id = %message.id(), "queued message");
    (StatusCode::CREATED, Json(message)).into_response()
}

/// GET /: lock the head message for processing
async fn handle_read_message(State(state): State<AppState>) -> Response {
    match state.queue.peek_and_lock().await {
        Some(message) => {
            tracing::info!(id = %message.id(), "message locked for processing");
            (StatusCode::OK, Json(message)).into_response()
        }
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

/// DELETE /: acknowledge and remove the head message
async fn handle_remove_message(State(state): State<AppState>) -> Response {
    match state.queue.acknowledge_head().await {
        Ok(message) => {
            tracing::info!(id = %message.id(), "message removed");
            (StatusCode::OK, Json(message)).into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "remove rejected");
            (StatusCode::BAD_REQUEST, Json(e.to_string())).into_response()
        }
    }
}

/// GET /healthz: liveness only, independent of queue state
async fn handle_health() -> &'static str {
    "ok"
}
