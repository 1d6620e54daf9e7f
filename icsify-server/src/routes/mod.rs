pub mod ics;
pub mod resolve;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use icsify_core::IcsifyError;
use serde::{Serialize, de::DeserializeOwned};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .merge(ics::router())
        .merge(resolve::router())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// GET /health
async fn health() -> &'static str {
    "ok"
}

/// Standard API error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub detail: String,
}

/// Convert icsify errors to HTTP responses
pub struct AppError(IcsifyError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match &self.0 {
            IcsifyError::InvalidTimeFormat(_)
            | IcsifyError::InvalidDate(_)
            | IcsifyError::InvalidTimezone(_)
            | IcsifyError::InvalidEventData { .. }
            | IcsifyError::EmptyBatch => (StatusCode::UNPROCESSABLE_ENTITY, "Event parsing failed"),
            IcsifyError::Json(_) => (StatusCode::BAD_REQUEST, "Invalid JSON in request body"),
            IcsifyError::Config(_) | IcsifyError::Io(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        if status.is_server_error() {
            error!(error = %self.0, "Request failed");
        } else {
            warn!(error = %self.0, "Rejected request");
        }

        let body = Json(ErrorResponse {
            error: error.to_string(),
            detail: self.0.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<IcsifyError> for AppError {
    fn from(err: IcsifyError) -> Self {
        Self(err)
    }
}

/// Parse a JSON request body. Bodies are taken as plain text so clients that
/// omit the content type still work, and so bad JSON gets our error format.
pub fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, IcsifyError> {
    serde_json::from_str(body).map_err(|e| IcsifyError::Json(e.to_string()))
}
