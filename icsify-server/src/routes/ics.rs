//! Calendar file endpoints

use axum::{
    Json, Router,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::post,
};
use icsify_core::{EventRecord, IcsDocument, IcsifyError, serialize};
use serde::{Deserialize, Serialize};

use crate::routes::{AppError, parse_body};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/ics", post(download))
        .route("/preview", post(preview))
}

/// Request body for both endpoints
#[derive(Deserialize)]
pub struct GenerateRequest {
    pub events: Vec<EventRecord>,
    #[serde(default)]
    pub timezone: Option<String>,
}

/// Preview returned to the page
#[derive(Serialize)]
pub struct PreviewResponse {
    pub document: String,
    pub events: usize,
    pub timezone: String,
}

/// POST /ics - Generate a downloadable calendar file
async fn download(State(state): State<AppState>, body: String) -> Result<Response, AppError> {
    let (document, _) = generate(&state, &body)?;

    let headers = [
        (
            header::CONTENT_TYPE,
            format!("{}; charset=utf-8", IcsDocument::MIME_TYPE),
        ),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", IcsDocument::DEFAULT_FILENAME),
        ),
    ];

    Ok((headers, document.into_bytes()).into_response())
}

/// POST /preview - Generate the same document as text for display
async fn preview(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<PreviewResponse>, AppError> {
    let (document, timezone) = generate(&state, &body)?;

    Ok(Json(PreviewResponse {
        events: document.event_count(),
        document: document.into_string(),
        timezone,
    }))
}

fn generate(state: &AppState, body: &str) -> Result<(IcsDocument, String), IcsifyError> {
    let request: GenerateRequest = parse_body(body)?;
    let timezone = state.timezone_for(request.timezone.as_deref());
    let document = serialize(&request.events, &timezone)?;
    Ok((document, timezone))
}
